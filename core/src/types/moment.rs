//! App activities written to a user's moments vault.
//!
//! # Design
//! A moment is a sum type keyed on the `type` schema URI the API sends.
//! `AddActivity` is the only kind the binding models; anything else is kept
//! as `Moment::Other` with its URI, id and target intact so callers can still
//! list and delete it. A payload with no `type` but a target URL is read as
//! `AddActivity`, the kind whose target is just an addressable URL.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// Schema URI of the "added a thing" moment.
pub const ADD_ACTIVITY: &str = "http://schemas.google.com/AddActivity";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "MomentWire")]
pub enum Moment {
    AddActivity(MomentBody),
    Other { type_uri: String, body: MomentBody },
}

/// Fields shared by every moment kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MomentBody {
    /// Assigned by the server; empty on a moment not yet inserted.
    pub id: String,
    pub start_date: Option<DateTime<Utc>>,
    pub target: ItemScope,
}

/// The object a moment is about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "ItemScopeWire")]
pub struct ItemScope {
    pub url: String,
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
}

impl Moment {
    /// A new `AddActivity` for the thing at `target_url`, ready to insert.
    pub fn add_activity(target_url: impl Into<String>) -> Self {
        Moment::AddActivity(MomentBody {
            target: ItemScope {
                url: target_url.into(),
                ..ItemScope::default()
            },
            ..MomentBody::default()
        })
    }

    pub fn type_uri(&self) -> &str {
        match self {
            Moment::AddActivity(_) => ADD_ACTIVITY,
            Moment::Other { type_uri, .. } => type_uri,
        }
    }

    pub fn body(&self) -> &MomentBody {
        match self {
            Moment::AddActivity(body) | Moment::Other { body, .. } => body,
        }
    }

    pub fn id(&self) -> &str {
        &self.body().id
    }

    pub fn target(&self) -> &ItemScope {
        &self.body().target
    }

    pub fn start_date(&self) -> Option<DateTime<Utc>> {
        self.body().start_date
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MomentWire {
    #[serde(rename = "type")]
    type_uri: Option<String>,
    id: Option<String>,
    start_date: Option<DateTime<Utc>>,
    target: Option<ItemScope>,
}

#[derive(Deserialize)]
struct ItemScopeWire {
    url: Option<String>,
    id: Option<String>,
    name: Option<String>,
    description: Option<String>,
    image: Option<String>,
}

impl From<MomentWire> for Moment {
    fn from(wire: MomentWire) -> Self {
        let body = MomentBody {
            id: wire.id.unwrap_or_default(),
            start_date: wire.start_date,
            target: wire.target.unwrap_or_default(),
        };
        match wire.type_uri {
            Some(uri) if uri == ADD_ACTIVITY => Moment::AddActivity(body),
            None if !body.target.url.is_empty() => Moment::AddActivity(body),
            type_uri => Moment::Other {
                type_uri: type_uri.unwrap_or_default(),
                body,
            },
        }
    }
}

impl From<ItemScopeWire> for ItemScope {
    fn from(wire: ItemScopeWire) -> Self {
        Self {
            url: wire.url.unwrap_or_default(),
            id: wire.id.unwrap_or_default(),
            name: wire.name.unwrap_or_default(),
            description: wire.description.unwrap_or_default(),
            image: wire.image.unwrap_or_default(),
        }
    }
}

/// Insert payload: `{"type": .., "target": {"url": ..}}`. Empty strings and
/// an unset start date are left out.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MomentPayload<'a> {
    #[serde(rename = "type")]
    type_uri: &'a str,
    target: TargetPayload<'a>,
    #[serde(skip_serializing_if = "is_blank")]
    id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_date: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
struct TargetPayload<'a> {
    #[serde(skip_serializing_if = "is_blank")]
    url: &'a str,
    #[serde(skip_serializing_if = "is_blank")]
    id: &'a str,
    #[serde(skip_serializing_if = "is_blank")]
    name: &'a str,
    #[serde(skip_serializing_if = "is_blank")]
    description: &'a str,
    #[serde(skip_serializing_if = "is_blank")]
    image: &'a str,
}

fn is_blank(value: &&str) -> bool {
    value.is_empty()
}

impl Serialize for Moment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let body = self.body();
        MomentPayload {
            type_uri: self.type_uri(),
            target: TargetPayload {
                url: &body.target.url,
                id: &body.target.id,
                name: &body.target.name,
                description: &body.target.description,
                image: &body.target.image,
            },
            id: &body.id,
            start_date: body.start_date,
        }
        .serialize(serializer)
    }
}
