//! Cursor-paginated collections.

use serde::Deserialize;

use crate::de::null_as_default;
use crate::types::{Activity, ActivityComment, Moment, Person};

/// One slice of a larger result set.
///
/// A missing `items` array is an empty page, not an error. `next_page_token`
/// is `None` on the last page; pass it back as `page_token` to fetch the next
/// one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<T>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

impl<T> Page<T> {
    pub fn is_last(&self) -> bool {
        self.next_page_token.is_none()
    }
}

pub type PeoplePage = Page<Person>;
pub type ActivitiesPage = Page<Activity>;
pub type ActivityCommentsPage = Page<ActivityComment>;
pub type MomentsPage = Page<Moment>;
