//! In-process imitation of the Google+ REST API.
//!
//! Read endpoints answer with the canned documents under `fixtures/`. The
//! moments vault is held in memory, seeded from `fixtures/moments.json`, so
//! inserts and deletes behave like the real service within one process.
//! Every request must carry `access_token=ACCESS_TOKEN`.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

pub const ACCESS_TOKEN: &str = "ACCESS_TOKEN";
pub const API_PREFIX: &str = "/plus/v1";

pub const PERSON_ID: &str = "114863353858610846998";
pub const ACTIVITY_ID: &str = "z13djjbraz2fdfp5g04chb0rkrvwhnmpch4";
pub const COMMENTED_ACTIVITY_ID: &str = "z12ge3o4orj2sdkbb04chb0rkrvwhnmpch4";
pub const COMMENT_ID: &str = "z12ge3o4orj2sdkbb04chb0rkrvwhnmpch4.1364410988265921";

pub const PERSON: &str = include_str!("../../fixtures/person.json");
pub const PEOPLE: &str = include_str!("../../fixtures/people.json");
pub const ACTIVITY: &str = include_str!("../../fixtures/activity.json");
pub const ACTIVITIES: &str = include_str!("../../fixtures/activities.json");
pub const COMMENT: &str = include_str!("../../fixtures/comment.json");
pub const COMMENTS: &str = include_str!("../../fixtures/comments.json");
pub const MOMENT: &str = include_str!("../../fixtures/moment.json");
pub const MOMENTS: &str = include_str!("../../fixtures/moments.json");

/// Stored moments, newest first.
pub type Vault = Arc<RwLock<Vec<Value>>>;

#[derive(Deserialize)]
struct SearchParams {
    query: String,
    #[serde(rename = "pageToken")]
    page_token: Option<String>,
}

pub fn app() -> Router {
    let vault: Vault = Arc::new(RwLock::new(seed_moments()));
    let api = Router::new()
        .route("/people", get(search_people))
        .route("/people/{id}", get(get_person))
        .route(
            "/people/{id}/activities/{collection}",
            get(list_activities),
        )
        .route(
            "/people/{id}/moments/{collection}",
            get(list_moments).post(insert_moment),
        )
        .route("/activities", get(search_activities))
        .route("/activities/{id}", get(get_activity))
        .route("/activities/{id}/comments", get(list_comments))
        .route(
            "/activities/{id}/people/{collection}",
            get(list_people_by_activity),
        )
        .route("/comments/{id}", get(get_comment))
        .route("/moments/{id}", delete(delete_moment))
        .with_state(vault);

    Router::new()
        .nest(API_PREFIX, api)
        .layer(middleware::from_fn(require_access_token))
        .layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Panics on a broken moments fixture so the server fails at startup.
fn seed_moments() -> Vec<Value> {
    let feed: Value = serde_json::from_str(MOMENTS).expect("moments fixture is valid JSON");
    feed["items"]
        .as_array()
        .cloned()
        .expect("moments fixture has an items array")
}

fn fixture(body: &'static str) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}

fn empty_feed(kind: &str) -> Response {
    Json(json!({ "kind": kind, "items": [] })).into_response()
}

async fn require_access_token(request: Request, next: Next) -> Response {
    let token = Query::<HashMap<String, String>>::try_from_uri(request.uri())
        .ok()
        .and_then(|Query(params)| params.get("access_token").cloned());
    if token.as_deref() != Some(ACCESS_TOKEN) {
        tracing::debug!(uri = %request.uri().path(), "rejecting request without valid token");
        return StatusCode::UNAUTHORIZED.into_response();
    }
    next.run(request).await
}

async fn get_person(Path(id): Path<String>) -> Response {
    if id == "me" || id == PERSON_ID {
        fixture(PERSON)
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

/// The people fixture is page one; any page token yields the empty last page.
async fn search_people(Query(params): Query<SearchParams>) -> Response {
    tracing::debug!(query = %params.query, "people search");
    match params.page_token {
        Some(_) => empty_feed("plus#peopleFeed"),
        None => fixture(PEOPLE),
    }
}

async fn list_people_by_activity(
    Path((id, collection)): Path<(String, String)>,
) -> Response {
    if collection != "plusoners" && collection != "resharers" {
        return StatusCode::BAD_REQUEST.into_response();
    }
    if id != ACTIVITY_ID {
        return StatusCode::NOT_FOUND.into_response();
    }
    fixture(PEOPLE)
}

async fn search_activities(Query(params): Query<SearchParams>) -> Response {
    tracing::debug!(query = %params.query, "activity search");
    match params.page_token {
        Some(_) => empty_feed("plus#activityFeed"),
        None => fixture(ACTIVITIES),
    }
}

async fn list_activities(Path((id, collection)): Path<(String, String)>) -> Response {
    if collection != "public" {
        return StatusCode::BAD_REQUEST.into_response();
    }
    if id != "me" && id != PERSON_ID {
        return StatusCode::NOT_FOUND.into_response();
    }
    fixture(ACTIVITIES)
}

async fn get_activity(Path(id): Path<String>) -> Response {
    if id == ACTIVITY_ID {
        fixture(ACTIVITY)
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

async fn list_comments(Path(id): Path<String>) -> Response {
    if id == COMMENTED_ACTIVITY_ID {
        fixture(COMMENTS)
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

async fn get_comment(Path(id): Path<String>) -> Response {
    if id == COMMENT_ID {
        fixture(COMMENT)
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

fn is_own_vault(user: &str, collection: &str) -> bool {
    user == "me" && collection == "vault"
}

async fn list_moments(
    State(vault): State<Vault>,
    Path((user, collection)): Path<(String, String)>,
) -> Response {
    if !is_own_vault(&user, &collection) {
        return StatusCode::NOT_FOUND.into_response();
    }
    let moments = vault.read().await;
    Json(json!({ "kind": "plus#momentsFeed", "items": &*moments })).into_response()
}

/// Stores the moment with a fresh id and start date and echoes it back.
async fn insert_moment(
    State(vault): State<Vault>,
    Path((user, collection)): Path<(String, String)>,
    Json(input): Json<Value>,
) -> Response {
    if !is_own_vault(&user, &collection) {
        return StatusCode::NOT_FOUND.into_response();
    }
    let type_uri = input.get("type").and_then(Value::as_str);
    let target = input.get("target").and_then(Value::as_object);
    let (Some(type_uri), Some(target)) = (type_uri, target) else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    if target.get("url").and_then(Value::as_str).is_none() {
        return StatusCode::BAD_REQUEST.into_response();
    }

    let mut target = target.clone();
    target.insert("kind".to_string(), json!("plus#itemScope"));
    let moment = json!({
        "kind": "plus#moment",
        "type": type_uri,
        "target": target,
        "id": Uuid::new_v4().simple().to_string(),
        "startDate": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    });
    vault.write().await.insert(0, moment.clone());
    (StatusCode::OK, Json(moment)).into_response()
}

async fn delete_moment(State(vault): State<Vault>, Path(id): Path<String>) -> StatusCode {
    let mut moments = vault.write().await;
    let before = moments.len();
    moments.retain(|m| m.get("id").and_then(Value::as_str) != Some(id.as_str()));
    if moments.len() < before {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_are_valid_json() {
        for (name, body) in [
            ("person", PERSON),
            ("people", PEOPLE),
            ("activity", ACTIVITY),
            ("activities", ACTIVITIES),
            ("comment", COMMENT),
            ("comments", COMMENTS),
            ("moment", MOMENT),
            ("moments", MOMENTS),
        ] {
            assert!(
                serde_json::from_str::<Value>(body).is_ok(),
                "{name} fixture is not valid JSON"
            );
        }
    }

    #[test]
    fn vault_is_seeded_from_fixture() {
        let moments = seed_moments();
        assert_eq!(moments.len(), 4);
        assert_eq!(
            moments[0]["id"],
            "Eg0xNDAwNDE2MjQ1ODY2GJa6uYvcss-izgEpCHuQgEQo0AkyAhAUQgcY1OXS0c8e"
        );
    }

    #[test]
    fn own_vault_only() {
        assert!(is_own_vault("me", "vault"));
        assert!(!is_own_vault("114863353858610846998", "vault"));
        assert!(!is_own_vault("me", "public"));
    }
}
