//! Response deserialization.
//!
//! # Design
//! Every entity is decoded in one shot from a private wire struct whose
//! fields are all `Option`s, then converted into the public value type with
//! `#[serde(from = ...)]` or `#[serde(try_from = ...)]`. Absent and `null`
//! properties collapse to the field default in that conversion. Closed
//! vocabularies (`UrlType`, `AgeRange`) and timestamps stay strict and fail
//! the whole document.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::error::ApiError;

/// Decode a response body into `T`.
pub fn from_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| {
        tracing::debug!(error = %e, "response body does not match expected shape");
        ApiError::Deserialization(e)
    })
}

/// Treat an explicit JSON `null` like an absent property.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `{"url": ..., "type": ...}` image reference shared by people, actors and
/// attachments.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ImageWire {
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub content_type: Option<String>,
}

/// `{"totalItems": n}` collection summary on activities.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CounterWire {
    pub total_items: Option<u32>,
}

pub(crate) fn image_url(image: Option<ImageWire>) -> String {
    image.and_then(|i| i.url).unwrap_or_default()
}

pub(crate) fn count(counter: Option<CounterWire>) -> u32 {
    counter.and_then(|c| c.total_items).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "null_as_default")]
        names: Vec<String>,
    }

    #[test]
    fn null_and_absent_collapse_to_default() {
        let holder: Holder = from_body(r#"{"names":null}"#).unwrap();
        assert!(holder.names.is_empty());
        let holder: Holder = from_body("{}").unwrap();
        assert!(holder.names.is_empty());
        let holder: Holder = from_body(r#"{"names":["a","b"]}"#).unwrap();
        assert_eq!(holder.names, vec!["a", "b"]);
    }

    #[test]
    fn malformed_body_is_deserialization_error() {
        let err = from_body::<Holder>("not json").unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn missing_image_yields_empty_url() {
        assert_eq!(image_url(None), "");
        assert_eq!(count(None), 0);
        let counter: CounterWire = from_body(r#"{"totalItems":7}"#).unwrap();
        assert_eq!(count(Some(counter)), 7);
    }
}
