//! Stateless HTTP request builder and response parser for the Google+ API.
//!
//! # Design
//! `PlusClient` holds only the parsed base URL and the access token. Each
//! operation is split into a `build_*` method that produces an `HttpRequest`
//! and a `parse_*` method that consumes an `HttpResponse`. The caller (or
//! `PlusOperations`) executes the HTTP round-trip in between.
//!
//! Every URL ends with `access_token=<token>`. Optional query parameters that
//! are `None` are left out entirely.

use serde::de::DeserializeOwned;
use url::Url;

use crate::config::PlusConfig;
use crate::de;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{
    ActivitiesPage, Activity, ActivityComment, ActivityCommentsPage, Moment, MomentsPage,
    PeoplePage, Person,
};

const ACCESS_TOKEN_PARAM: &str = "access_token";
const PAGE_TOKEN_PARAM: &str = "pageToken";
const QUERY_PARAM: &str = "query";

/// People collections reachable from an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeopleCollection {
    /// People who +1'd the activity.
    Plusoners,
    /// People who reshared the activity.
    Resharers,
}

impl PeopleCollection {
    pub fn as_str(&self) -> &'static str {
        match self {
            PeopleCollection::Plusoners => "plusoners",
            PeopleCollection::Resharers => "resharers",
        }
    }
}

/// Synchronous, stateless client for the Google+ API.
///
/// Cheap to clone and safe to share between threads.
#[derive(Debug, Clone)]
pub struct PlusClient {
    base_url: Url,
    access_token: String,
}

impl PlusClient {
    pub fn new(config: PlusConfig) -> Result<Self, ApiError> {
        let mut base_url = Url::parse(&config.base_url)
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(config.base_url));
        }
        base_url.set_query(None);
        base_url.set_fragment(None);
        Ok(Self {
            base_url,
            access_token: config.access_token,
        })
    }

    // ── People ───────────────────────────────────────────────────────────────

    /// `GET /people/{id}`
    pub fn build_get_person(&self, id: &str) -> HttpRequest {
        self.request(HttpMethod::Get, &["people", id], &[])
    }

    /// `GET /people/me`
    pub fn build_get_google_profile(&self) -> HttpRequest {
        self.build_get_person("me")
    }

    /// `GET /people?query=<q>[&pageToken=<t>]`
    pub fn build_search_people(&self, query: &str, page_token: Option<&str>) -> HttpRequest {
        self.request(
            HttpMethod::Get,
            &["people"],
            &[(QUERY_PARAM, Some(query)), (PAGE_TOKEN_PARAM, page_token)],
        )
    }

    /// `GET /activities/{id}/people/{collection}[?pageToken=<t>]`
    pub fn build_list_people_by_activity(
        &self,
        activity_id: &str,
        collection: PeopleCollection,
        page_token: Option<&str>,
    ) -> HttpRequest {
        self.request(
            HttpMethod::Get,
            &["activities", activity_id, "people", collection.as_str()],
            &[(PAGE_TOKEN_PARAM, page_token)],
        )
    }

    pub fn parse_get_person(&self, response: HttpResponse) -> Result<Person, ApiError> {
        parse_json(response)
    }

    pub fn parse_get_google_profile(&self, response: HttpResponse) -> Result<Person, ApiError> {
        parse_json(response)
    }

    pub fn parse_search_people(&self, response: HttpResponse) -> Result<PeoplePage, ApiError> {
        parse_json(response)
    }

    pub fn parse_list_people_by_activity(
        &self,
        response: HttpResponse,
    ) -> Result<PeoplePage, ApiError> {
        parse_json(response)
    }

    // ── Activities ───────────────────────────────────────────────────────────

    /// `GET /activities?query=<q>[&pageToken=<t>]`
    pub fn build_search_public_activities(
        &self,
        query: &str,
        page_token: Option<&str>,
    ) -> HttpRequest {
        self.request(
            HttpMethod::Get,
            &["activities"],
            &[(QUERY_PARAM, Some(query)), (PAGE_TOKEN_PARAM, page_token)],
        )
    }

    /// `GET /people/{user_id}/activities/public[?pageToken=<t>]`
    pub fn build_list_activities(&self, user_id: &str, page_token: Option<&str>) -> HttpRequest {
        self.request(
            HttpMethod::Get,
            &["people", user_id, "activities", "public"],
            &[(PAGE_TOKEN_PARAM, page_token)],
        )
    }

    /// `GET /activities/{id}`
    pub fn build_get_activity(&self, id: &str) -> HttpRequest {
        self.request(HttpMethod::Get, &["activities", id], &[])
    }

    pub fn parse_search_public_activities(
        &self,
        response: HttpResponse,
    ) -> Result<ActivitiesPage, ApiError> {
        parse_json(response)
    }

    pub fn parse_list_activities(&self, response: HttpResponse) -> Result<ActivitiesPage, ApiError> {
        parse_json(response)
    }

    pub fn parse_get_activity(&self, response: HttpResponse) -> Result<Activity, ApiError> {
        parse_json(response)
    }

    // ── Comments ─────────────────────────────────────────────────────────────

    /// `GET /activities/{activity_id}/comments[?pageToken=<t>]`
    pub fn build_get_comments(&self, activity_id: &str, page_token: Option<&str>) -> HttpRequest {
        self.request(
            HttpMethod::Get,
            &["activities", activity_id, "comments"],
            &[(PAGE_TOKEN_PARAM, page_token)],
        )
    }

    /// `GET /comments/{id}`
    pub fn build_get_comment(&self, id: &str) -> HttpRequest {
        self.request(HttpMethod::Get, &["comments", id], &[])
    }

    pub fn parse_get_comments(
        &self,
        response: HttpResponse,
    ) -> Result<ActivityCommentsPage, ApiError> {
        parse_json(response)
    }

    pub fn parse_get_comment(&self, response: HttpResponse) -> Result<ActivityComment, ApiError> {
        parse_json(response)
    }

    // ── Moments ──────────────────────────────────────────────────────────────

    /// `GET /people/me/moments/vault[?pageToken=<t>]`
    pub fn build_get_moments(&self, page_token: Option<&str>) -> HttpRequest {
        self.request(
            HttpMethod::Get,
            &["people", "me", "moments", "vault"],
            &[(PAGE_TOKEN_PARAM, page_token)],
        )
    }

    /// `POST /people/me/moments/vault` with the moment as JSON body.
    pub fn build_insert_moment(&self, moment: &Moment) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(moment).map_err(ApiError::Serialization)?;
        let mut req = self.request(
            HttpMethod::Post,
            &["people", "me", "moments", "vault"],
            &[],
        );
        req.headers
            .push(("content-type".to_string(), "application/json".to_string()));
        req.body = Some(body);
        Ok(req)
    }

    /// `DELETE /moments/{id}`
    pub fn build_delete_moment(&self, id: &str) -> HttpRequest {
        self.request(HttpMethod::Delete, &["moments", id], &[])
    }

    pub fn parse_get_moments(&self, response: HttpResponse) -> Result<MomentsPage, ApiError> {
        parse_json(response)
    }

    pub fn parse_insert_moment(&self, response: HttpResponse) -> Result<Moment, ApiError> {
        parse_json(response)
    }

    /// Any 2xx is a successful delete; the body, if any, is ignored.
    pub fn parse_delete_moment(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    /// Resolve `segments` against the base URL and append the non-`None`
    /// query parameters followed by the access token.
    fn request(
        &self,
        method: HttpMethod,
        segments: &[&str],
        params: &[(&str, Option<&str>)],
    ) -> HttpRequest {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        tracing::debug!(%method, path = url.path(), "building request");
        {
            let mut query = url.query_pairs_mut();
            for (name, value) in params {
                if let Some(value) = value {
                    query.append_pair(name, value);
                }
            }
            query.append_pair(ACCESS_TOKEN_PARAM, &self.access_token);
        }
        HttpRequest {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    de::from_body(&response.body)
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    tracing::debug!(status = response.status, "unsuccessful response status");
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
