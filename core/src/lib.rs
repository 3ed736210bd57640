//! Synchronous client binding for the Google+ REST API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). `PlusOperations` wires a
//! `PlusClient` to a `Transport` for callers that want one call per
//! capability.
//!
//! # Design
//! - `PlusClient` is stateless: it holds the base URL and access token only.
//! - Each operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit.
//! - Entities are immutable values decoded in one step from private wire
//!   structs; absent fields take defaults, closed vocabularies stay strict.
//! - `Moment` is a sum type with a fallback variant for unmodelled kinds.

pub mod client;
pub mod config;
pub mod de;
pub mod error;
pub mod http;
pub mod operations;
pub mod transport;
pub mod types;

pub use client::{PeopleCollection, PlusClient};
pub use config::PlusConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use operations::PlusOperations;
pub use transport::{Transport, UreqTransport};
pub use types::{
    ActivitiesPage, Activity, ActivityComment, ActivityCommentsPage, Actor, AgeRange, Attachment,
    ItemScope, Moment, MomentBody, MomentsPage, Organization, Page, PeoplePage, Person,
    ProfileUrl, UrlType,
};
