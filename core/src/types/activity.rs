//! Activities, their authors and attachments, and comments on them.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::de::{count, image_url, CounterWire, ImageWire};

/// A public post.
///
/// `content`, `attachments` and the counters live under `object` on the wire;
/// they are flattened here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "ActivityWire")]
pub struct Activity {
    pub id: String,
    pub title: String,
    pub published: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub url: String,
    /// `post`, `share` or `checkin`.
    pub verb: String,
    pub actor: Actor,
    /// HTML body.
    pub content: String,
    pub attachments: Vec<Attachment>,
    pub replies_count: u32,
    pub plusoners_count: u32,
    pub resharers_count: u32,
}

/// Author of an activity or comment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "ActorWire")]
pub struct Actor {
    pub id: String,
    pub display_name: String,
    pub image_url: String,
    pub url: String,
}

/// Linked media embedded in an activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "AttachmentWire")]
pub struct Attachment {
    /// `article`, `photo`, `video`, ...
    pub object_type: String,
    pub display_name: String,
    pub content: String,
    pub url: String,
    pub preview_image_url: String,
    pub preview_image_content_type: String,
}

/// A reply to an activity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "ActivityCommentWire")]
pub struct ActivityComment {
    pub id: String,
    pub published: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub actor: Actor,
    pub content: String,
    /// Ids of the activities this comment answers.
    pub in_reply_to: Vec<String>,
}

#[derive(Deserialize)]
struct ActivityWire {
    id: String,
    title: Option<String>,
    published: Option<DateTime<Utc>>,
    updated: Option<DateTime<Utc>>,
    url: Option<String>,
    verb: Option<String>,
    actor: Option<Actor>,
    object: Option<ActivityObjectWire>,
}

#[derive(Deserialize)]
struct ActivityObjectWire {
    content: Option<String>,
    attachments: Option<Vec<Attachment>>,
    replies: Option<CounterWire>,
    plusoners: Option<CounterWire>,
    resharers: Option<CounterWire>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActorWire {
    id: Option<String>,
    display_name: Option<String>,
    url: Option<String>,
    image: Option<ImageWire>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AttachmentWire {
    object_type: Option<String>,
    display_name: Option<String>,
    content: Option<String>,
    url: Option<String>,
    image: Option<ImageWire>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActivityCommentWire {
    id: String,
    published: Option<DateTime<Utc>>,
    updated: Option<DateTime<Utc>>,
    actor: Option<Actor>,
    object: Option<CommentObjectWire>,
    in_reply_to: Option<Vec<ReplyTargetWire>>,
}

#[derive(Deserialize)]
struct CommentObjectWire {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ReplyTargetWire {
    id: Option<String>,
}

impl From<ActivityWire> for Activity {
    fn from(wire: ActivityWire) -> Self {
        let object = wire.object;
        let (content, attachments, replies, plusoners, resharers) = match object {
            Some(o) => (
                o.content.unwrap_or_default(),
                o.attachments.unwrap_or_default(),
                count(o.replies),
                count(o.plusoners),
                count(o.resharers),
            ),
            None => (String::new(), Vec::new(), 0, 0, 0),
        };
        Self {
            id: wire.id,
            title: wire.title.unwrap_or_default(),
            published: wire.published,
            updated: wire.updated,
            url: wire.url.unwrap_or_default(),
            verb: wire.verb.unwrap_or_default(),
            actor: wire.actor.unwrap_or_default(),
            content,
            attachments,
            replies_count: replies,
            plusoners_count: plusoners,
            resharers_count: resharers,
        }
    }
}

impl From<ActorWire> for Actor {
    fn from(wire: ActorWire) -> Self {
        Self {
            id: wire.id.unwrap_or_default(),
            display_name: wire.display_name.unwrap_or_default(),
            image_url: image_url(wire.image),
            url: wire.url.unwrap_or_default(),
        }
    }
}

impl From<AttachmentWire> for Attachment {
    fn from(wire: AttachmentWire) -> Self {
        let (preview_image_url, preview_image_content_type) = match wire.image {
            Some(image) => (
                image.url.unwrap_or_default(),
                image.content_type.unwrap_or_default(),
            ),
            None => (String::new(), String::new()),
        };
        Self {
            object_type: wire.object_type.unwrap_or_default(),
            display_name: wire.display_name.unwrap_or_default(),
            content: wire.content.unwrap_or_default(),
            url: wire.url.unwrap_or_default(),
            preview_image_url,
            preview_image_content_type,
        }
    }
}

impl From<ActivityCommentWire> for ActivityComment {
    fn from(wire: ActivityCommentWire) -> Self {
        Self {
            id: wire.id,
            published: wire.published,
            updated: wire.updated,
            actor: wire.actor.unwrap_or_default(),
            content: wire.object.and_then(|o| o.content).unwrap_or_default(),
            in_reply_to: wire
                .in_reply_to
                .unwrap_or_default()
                .into_iter()
                .filter_map(|target| target.id)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn activity_without_object_has_empty_content() {
        let activity: Activity = serde_json::from_str(r#"{"id":"a1","title":"t"}"#).unwrap();
        assert_eq!(activity.id, "a1");
        assert_eq!(activity.content, "");
        assert!(activity.attachments.is_empty());
        assert_eq!(activity.actor, Actor::default());
        assert!(activity.published.is_none());
        assert_eq!(activity.plusoners_count, 0);
    }

    #[test]
    fn timestamps_keep_milliseconds() {
        let activity: Activity =
            serde_json::from_str(r#"{"id":"a1","published":"2013-09-11T12:14:11.274Z"}"#)
                .unwrap();
        let expected = Utc.with_ymd_and_hms(2013, 9, 11, 12, 14, 11).unwrap()
            + chrono::Duration::milliseconds(274);
        assert_eq!(activity.published, Some(expected));
    }

    #[test]
    fn malformed_timestamp_fails() {
        let result = serde_json::from_str::<Activity>(r#"{"id":"a1","updated":"yesterday"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn attachment_without_image() {
        let attachment: Attachment =
            serde_json::from_str(r#"{"displayName":"doc","url":"http://x"}"#).unwrap();
        assert_eq!(attachment.display_name, "doc");
        assert_eq!(attachment.preview_image_url, "");
        assert_eq!(attachment.preview_image_content_type, "");
    }

    #[test]
    fn comment_content_and_reply_targets() {
        let comment: ActivityComment = serde_json::from_str(
            r#"{"id":"c1","object":{"content":"hi"},"inReplyTo":[{"id":"a1","url":"http://x"}],
                "actor":{"id":"u1","displayName":"U","image":{"url":"http://img"}}}"#,
        )
        .unwrap();
        assert_eq!(comment.content, "hi");
        assert_eq!(comment.in_reply_to, vec!["a1"]);
        assert_eq!(comment.actor.display_name, "U");
        assert_eq!(comment.actor.image_url, "http://img");
    }
}
