//! End-to-end run against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then exercises every operation
//! through `PlusOperations` over real HTTP with the ureq transport. Validates
//! that request building, the transport and response parsing agree with the
//! server.

use plus_core::{
    ApiError, Moment, PeopleCollection, PlusConfig, PlusOperations, UreqTransport,
};

fn start_server() -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn operations(addr: std::net::SocketAddr, token: &str) -> PlusOperations<UreqTransport> {
    let config = PlusConfig::new(token).with_base_url(format!("http://{addr}/plus/v1"));
    PlusOperations::connect(config).unwrap()
}

#[test]
fn read_operations() {
    let addr = start_server();
    let plus = operations(addr, mock_server::ACCESS_TOKEN);

    // people
    let person = plus.get_person("114863353858610846998").unwrap();
    assert_eq!(person.id, "114863353858610846998");
    assert_eq!(person.display_name, "Gabriel Axel");
    assert!(!person.verified);
    assert!(person.plus_user);
    assert_eq!(person.circled_by_count, 51);
    assert_eq!(person.urls.len(), 5);
    assert_eq!(person.urls[4].url_type, plus_core::UrlType::Other);

    let me = plus.get_google_profile().unwrap();
    assert_eq!(me, person);

    let err = plus.get_person("000").unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // people search, following the cursor to the last page
    let page = plus.search_people("pivotal", None).unwrap();
    assert_eq!(page.items.len(), 2);
    let token = page.next_page_token.as_deref().unwrap();
    let last = plus.search_people("pivotal", Some(token)).unwrap();
    assert!(last.items.is_empty());
    assert!(last.is_last());

    let plusoners = plus
        .list_people_by_activity(
            "z13djjbraz2fdfp5g04chb0rkrvwhnmpch4",
            PeopleCollection::Plusoners,
            None,
        )
        .unwrap();
    assert_eq!(plusoners.items[0].display_name, "Pivotal");

    // activities
    let page = plus.search_public_activities("spring social", None).unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].actor.display_name, "Java Code Geeks");
    assert!(page.next_page_token.as_deref().unwrap().len() > 200);

    let public = plus.list_activities("me", None).unwrap();
    assert_eq!(public.items.len(), 2);

    let activity = plus.get_activity("z13djjbraz2fdfp5g04chb0rkrvwhnmpch4").unwrap();
    assert_eq!(activity.attachments.len(), 1);
    assert_eq!(activity.attachments[0].preview_image_content_type, "image/jpeg");

    // comments
    let comments = plus
        .get_comments("z12ge3o4orj2sdkbb04chb0rkrvwhnmpch4", None)
        .unwrap();
    assert!(comments.next_page_token.is_none());
    assert_eq!(comments.items.len(), 2);

    let comment = plus
        .get_comment("z12ge3o4orj2sdkbb04chb0rkrvwhnmpch4.1364410988265921")
        .unwrap();
    assert_eq!(comment, comments.items[0]);
}

#[test]
fn moment_lifecycle() {
    let addr = start_server();
    let plus = operations(addr, mock_server::ACCESS_TOKEN);
    let target = "https://developers.google.com/+/plugins/snippet/examples/thing";

    // Step 1: list — seeded vault.
    let page = plus.get_moments(None).unwrap();
    assert!(page.next_page_token.is_none());
    assert_eq!(page.items.len(), 4);

    // Step 2: insert — the server assigns an id and echoes the target.
    let created = plus.insert_moment(&Moment::add_activity(target)).unwrap();
    assert!(matches!(created, Moment::AddActivity(_)));
    assert!(!created.id().is_empty());
    assert_eq!(created.target().url, target);
    assert!(created.start_date().is_some());

    // Step 3: list — newest first.
    let page = plus.get_moments(None).unwrap();
    assert_eq!(page.items.len(), 5);
    assert_eq!(page.items[0], created);

    // Step 4: delete.
    plus.delete_moment(created.id()).unwrap();

    // Step 5: delete again — surfaced as a status failure.
    let err = plus.delete_moment(created.id()).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
    assert_eq!(err.status(), Some(404));

    // Step 6: list — back to the seeded vault.
    let page = plus.get_moments(None).unwrap();
    assert_eq!(page.items.len(), 4);
}

#[test]
fn wrong_token_is_rejected() {
    let addr = start_server();
    let plus = operations(addr, "stale-token");
    let err = plus.get_google_profile().unwrap_err();
    assert!(matches!(err, ApiError::Http { status: 401, .. }));
}

#[test]
fn unreachable_server_is_a_transport_failure() {
    // Bind then drop to get a port nobody listens on.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let plus = operations(addr, mock_server::ACCESS_TOKEN);
    let err = plus.get_google_profile().unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[test]
fn operations_are_shareable_across_threads() {
    let addr = start_server();
    let plus = operations(addr, mock_server::ACCESS_TOKEN);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let plus = plus.clone();
            std::thread::spawn(move || plus.get_activity("z13djjbraz2fdfp5g04chb0rkrvwhnmpch4"))
        })
        .collect();
    for handle in handles {
        let activity = handle.join().unwrap().unwrap();
        assert_eq!(activity.actor.display_name, "Gabriel Axel");
    }
}
