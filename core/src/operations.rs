//! One call per API capability.
//!
//! `PlusOperations` pairs a `PlusClient` with a `Transport` and runs
//! build, execute and parse in sequence. It adds no state of its own: no
//! retries, no caching, exactly one exchange per call.

use crate::client::{PeopleCollection, PlusClient};
use crate::config::PlusConfig;
use crate::error::ApiError;
use crate::transport::{Transport, UreqTransport};
use crate::types::{
    ActivitiesPage, Activity, ActivityComment, ActivityCommentsPage, Moment, MomentsPage,
    PeoplePage, Person,
};

#[derive(Clone)]
pub struct PlusOperations<T> {
    client: PlusClient,
    transport: T,
}

impl PlusOperations<UreqTransport> {
    /// Operations over a blocking ureq transport.
    pub fn connect(config: PlusConfig) -> Result<Self, ApiError> {
        Ok(Self::new(PlusClient::new(config)?, UreqTransport::new()))
    }
}

impl<T: Transport> PlusOperations<T> {
    pub fn new(client: PlusClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &PlusClient {
        &self.client
    }

    pub fn get_person(&self, id: &str) -> Result<Person, ApiError> {
        let response = self.transport.execute(self.client.build_get_person(id))?;
        self.client.parse_get_person(response)
    }

    pub fn get_google_profile(&self) -> Result<Person, ApiError> {
        let response = self.transport.execute(self.client.build_get_google_profile())?;
        self.client.parse_get_google_profile(response)
    }

    pub fn search_people(
        &self,
        query: &str,
        page_token: Option<&str>,
    ) -> Result<PeoplePage, ApiError> {
        let req = self.client.build_search_people(query, page_token);
        self.client.parse_search_people(self.transport.execute(req)?)
    }

    pub fn list_people_by_activity(
        &self,
        activity_id: &str,
        collection: PeopleCollection,
        page_token: Option<&str>,
    ) -> Result<PeoplePage, ApiError> {
        let req = self
            .client
            .build_list_people_by_activity(activity_id, collection, page_token);
        self.client
            .parse_list_people_by_activity(self.transport.execute(req)?)
    }

    pub fn search_public_activities(
        &self,
        query: &str,
        page_token: Option<&str>,
    ) -> Result<ActivitiesPage, ApiError> {
        let req = self.client.build_search_public_activities(query, page_token);
        self.client
            .parse_search_public_activities(self.transport.execute(req)?)
    }

    pub fn list_activities(
        &self,
        user_id: &str,
        page_token: Option<&str>,
    ) -> Result<ActivitiesPage, ApiError> {
        let req = self.client.build_list_activities(user_id, page_token);
        self.client.parse_list_activities(self.transport.execute(req)?)
    }

    pub fn get_activity(&self, id: &str) -> Result<Activity, ApiError> {
        let response = self.transport.execute(self.client.build_get_activity(id))?;
        self.client.parse_get_activity(response)
    }

    pub fn get_comments(
        &self,
        activity_id: &str,
        page_token: Option<&str>,
    ) -> Result<ActivityCommentsPage, ApiError> {
        let req = self.client.build_get_comments(activity_id, page_token);
        self.client.parse_get_comments(self.transport.execute(req)?)
    }

    pub fn get_comment(&self, id: &str) -> Result<ActivityComment, ApiError> {
        let response = self.transport.execute(self.client.build_get_comment(id))?;
        self.client.parse_get_comment(response)
    }

    pub fn get_moments(&self, page_token: Option<&str>) -> Result<MomentsPage, ApiError> {
        let response = self
            .transport
            .execute(self.client.build_get_moments(page_token))?;
        self.client.parse_get_moments(response)
    }

    pub fn insert_moment(&self, moment: &Moment) -> Result<Moment, ApiError> {
        let req = self.client.build_insert_moment(moment)?;
        self.client.parse_insert_moment(self.transport.execute(req)?)
    }

    pub fn delete_moment(&self, id: &str) -> Result<(), ApiError> {
        let response = self.transport.execute(self.client.build_delete_moment(id))?;
        self.client.parse_delete_moment(response)
    }
}
