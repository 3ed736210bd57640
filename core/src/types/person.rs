//! People: profiles, their links and organizations.

use std::collections::HashMap;

use serde::Deserialize;

use crate::de::{image_url, ImageWire};

/// A Google+ profile as returned by `people.get` and `people.search`.
///
/// Search results only carry `id`, `display_name`, `url` and `image_url`;
/// every other field then holds its default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "PersonWire")]
pub struct Person {
    pub id: String,
    pub given_name: String,
    pub family_name: String,
    pub display_name: String,
    pub gender: String,
    pub language: String,
    pub verified: bool,
    pub nickname: String,
    pub tagline: String,
    pub about_me: String,
    pub occupation: String,
    pub relationship_status: String,
    pub image_url: String,
    pub urls: Vec<ProfileUrl>,
    pub organizations: Vec<Organization>,
    /// Place name to "is primary residence".
    pub places_lived: HashMap<String, bool>,
    /// The address of the `account` entry in `emails`.
    pub account_email: String,
    pub url: String,
    pub age_range: Option<AgeRange>,
    pub plus_user: bool,
    pub circled_by_count: u32,
}

/// A link listed on a profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "ProfileUrlWire")]
pub struct ProfileUrl {
    pub value: String,
    pub label: String,
    pub url_type: UrlType,
}

impl ProfileUrl {
    pub fn new(value: impl Into<String>, label: impl Into<String>, url_type: UrlType) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            url_type,
        }
    }
}

/// Kind of a profile link. Unknown tokens are rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UrlType {
    OtherProfile,
    Contributor,
    Website,
    #[default]
    Other,
}

/// School or employer entry on a profile.
///
/// Dates are kept as the strings the API sends (usually a bare year).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "OrganizationWire")]
pub struct Organization {
    pub name: String,
    pub title: String,
    /// `"school"` or `"work"`.
    pub org_type: String,
    pub start_date: String,
    pub end_date: String,
    pub primary: bool,
}

/// Age bracket of the profile owner.
///
/// The API sends `{"min": .., "max": ..}`; only the three published brackets
/// are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "AgeRangeWire")]
pub enum AgeRange {
    Under18,
    From18To20,
    From21Plus,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersonWire {
    id: String,
    display_name: Option<String>,
    name: Option<NameWire>,
    gender: Option<String>,
    language: Option<String>,
    verified: Option<bool>,
    nickname: Option<String>,
    tagline: Option<String>,
    about_me: Option<String>,
    occupation: Option<String>,
    relationship_status: Option<String>,
    image: Option<ImageWire>,
    urls: Option<Vec<ProfileUrl>>,
    organizations: Option<Vec<Organization>>,
    places_lived: Option<PlacesWire>,
    emails: Option<Vec<EmailWire>>,
    url: Option<String>,
    age_range: Option<AgeRange>,
    is_plus_user: Option<bool>,
    circled_by_count: Option<u32>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NameWire {
    given_name: Option<String>,
    family_name: Option<String>,
}

/// `placesLived` arrives either as the API's list of entries or as a
/// ready-made place to primary-flag object.
#[derive(Deserialize)]
#[serde(untagged)]
enum PlacesWire {
    List(Vec<PlaceWire>),
    Map(HashMap<String, bool>),
}

impl From<PlacesWire> for HashMap<String, bool> {
    fn from(wire: PlacesWire) -> Self {
        match wire {
            PlacesWire::List(places) => places
                .into_iter()
                .filter_map(|place| Some((place.value?, place.primary.unwrap_or_default())))
                .collect(),
            PlacesWire::Map(places) => places,
        }
    }
}

#[derive(Deserialize)]
struct PlaceWire {
    value: Option<String>,
    primary: Option<bool>,
}

#[derive(Deserialize)]
struct EmailWire {
    value: Option<String>,
    #[serde(rename = "type")]
    email_type: Option<String>,
}

#[derive(Deserialize)]
struct ProfileUrlWire {
    value: Option<String>,
    label: Option<String>,
    #[serde(rename = "type")]
    url_type: Option<UrlType>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrganizationWire {
    name: Option<String>,
    title: Option<String>,
    #[serde(rename = "type")]
    org_type: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    primary: Option<bool>,
}

#[derive(Deserialize)]
struct AgeRangeWire {
    min: Option<u32>,
    max: Option<u32>,
}

impl From<PersonWire> for Person {
    fn from(wire: PersonWire) -> Self {
        let (given_name, family_name) = match wire.name {
            Some(name) => (
                name.given_name.unwrap_or_default(),
                name.family_name.unwrap_or_default(),
            ),
            None => (String::new(), String::new()),
        };
        let places_lived = wire.places_lived.map(HashMap::from).unwrap_or_default();
        let account_email = wire
            .emails
            .unwrap_or_default()
            .into_iter()
            .find(|email| email.email_type.as_deref() == Some("account"))
            .and_then(|email| email.value)
            .unwrap_or_default();

        Self {
            id: wire.id,
            given_name,
            family_name,
            display_name: wire.display_name.unwrap_or_default(),
            gender: wire.gender.unwrap_or_default(),
            language: wire.language.unwrap_or_default(),
            verified: wire.verified.unwrap_or_default(),
            nickname: wire.nickname.unwrap_or_default(),
            tagline: wire.tagline.unwrap_or_default(),
            about_me: wire.about_me.unwrap_or_default(),
            occupation: wire.occupation.unwrap_or_default(),
            relationship_status: wire.relationship_status.unwrap_or_default(),
            image_url: image_url(wire.image),
            urls: wire.urls.unwrap_or_default(),
            organizations: wire.organizations.unwrap_or_default(),
            places_lived,
            account_email,
            url: wire.url.unwrap_or_default(),
            age_range: wire.age_range,
            plus_user: wire.is_plus_user.unwrap_or_default(),
            circled_by_count: wire.circled_by_count.unwrap_or_default(),
        }
    }
}

impl From<ProfileUrlWire> for ProfileUrl {
    fn from(wire: ProfileUrlWire) -> Self {
        Self {
            value: wire.value.unwrap_or_default(),
            label: wire.label.unwrap_or_default(),
            url_type: wire.url_type.unwrap_or_default(),
        }
    }
}

impl From<OrganizationWire> for Organization {
    fn from(wire: OrganizationWire) -> Self {
        Self {
            name: wire.name.unwrap_or_default(),
            title: wire.title.unwrap_or_default(),
            org_type: wire.org_type.unwrap_or_default(),
            start_date: wire.start_date.unwrap_or_default(),
            end_date: wire.end_date.unwrap_or_default(),
            primary: wire.primary.unwrap_or_default(),
        }
    }
}

impl TryFrom<AgeRangeWire> for AgeRange {
    type Error = String;

    fn try_from(wire: AgeRangeWire) -> Result<Self, Self::Error> {
        match (wire.min, wire.max) {
            (None, Some(17)) => Ok(AgeRange::Under18),
            (Some(18), Some(20)) => Ok(AgeRange::From18To20),
            (Some(21), None) => Ok(AgeRange::From21Plus),
            (min, max) => Err(format!("unrecognized age range: min={min:?} max={max:?}")),
        }
    }
}
