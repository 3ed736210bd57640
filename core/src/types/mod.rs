//! Value types for Google+ API payloads.
//!
//! All types are immutable records built in one step by the deserializer
//! (see [`crate::de`]); none of them carries behavior beyond field access.

mod activity;
mod moment;
mod page;
mod person;

pub use activity::{Activity, ActivityComment, Actor, Attachment};
pub use moment::{ItemScope, Moment, MomentBody, ADD_ACTIVITY};
pub use page::{ActivitiesPage, ActivityCommentsPage, MomentsPage, Page, PeoplePage};
pub use person::{AgeRange, Organization, Person, ProfileUrl, UrlType};
