//! Request extractors

use std::convert::Infallible;

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// JSON body extractor that never rejects.
///
/// A missing body, a wrong content type or malformed JSON all yield
/// `T::default()`, so handlers see empty fields instead of a 4xx.
#[derive(Debug, Clone, Default)]
pub struct LenientJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = match Bytes::from_request(req, state).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!("Could not read request body: {}", e);
                return Ok(Self(T::default()));
            }
        };

        if bytes.is_empty() {
            return Ok(Self(T::default()));
        }

        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(Self(value)),
            Err(e) => {
                tracing::debug!("Ignoring malformed JSON body: {}", e);
                Ok(Self(T::default()))
            }
        }
    }
}

/// Query string extractor that never rejects.
///
/// Keeps every `key=value` pair in order, so a repeated key is not an error;
/// [`LenientQuery::first`] picks the first occurrence. An unparseable query
/// string yields no pairs.
#[derive(Debug, Clone, Default)]
pub struct LenientQuery(pub Vec<(String, String)>);

impl LenientQuery {
    /// First value given for `key`, if any
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for LenientQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<Vec<(String, String)>>::from_request_parts(parts, state).await {
            Ok(Query(pairs)) => Ok(Self(pairs)),
            Err(e) => {
                tracing::debug!("Ignoring malformed query string: {}", e);
                Ok(Self::default())
            }
        }
    }
}

/// Deserialize a JSON string field, treating null or any non-string as empty
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        _ => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Input {
        #[serde(default, deserialize_with = "lenient_string")]
        soil: String,
        #[serde(default, deserialize_with = "lenient_string")]
        season: String,
    }

    async fn extract(body: &'static str) -> Input {
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(body))
            .unwrap();
        let LenientJson(input) = LenientJson::<Input>::from_request(request, &()).await.unwrap();
        input
    }

    #[tokio::test]
    async fn test_valid_body() {
        let input = extract(r#"{"soil":"clay","season":"rabi"}"#).await;
        assert_eq!(input.soil, "clay");
        assert_eq!(input.season, "rabi");
    }

    #[tokio::test]
    async fn test_missing_and_mistyped_fields_default_to_empty() {
        let input = extract(r#"{"soil": 42}"#).await;
        assert_eq!(input, Input::default());

        let input = extract(r#"{"soil": null, "season": "kharif"}"#).await;
        assert_eq!(input.soil, "");
        assert_eq!(input.season, "kharif");
    }

    #[tokio::test]
    async fn test_malformed_or_empty_body_defaults() {
        assert_eq!(extract("{not json").await, Input::default());
        assert_eq!(extract("").await, Input::default());
        assert_eq!(extract("[1, 2]").await, Input::default());
    }

    async fn extract_query(uri: &'static str) -> LenientQuery {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let (mut parts, _) = request.into_parts();
        LenientQuery::from_request_parts(&mut parts, &()).await.unwrap()
    }

    #[tokio::test]
    async fn test_repeated_key_takes_first_value() {
        let query = extract_query("/weather?city=Agra&city=Delhi").await;
        assert_eq!(query.first("city"), Some("Agra"));
        assert_eq!(query.0.len(), 2);
    }

    #[tokio::test]
    async fn test_query_values_are_decoded() {
        let query = extract_query("/weather?city=New%20Delhi&x=1").await;
        assert_eq!(query.first("city"), Some("New Delhi"));
        assert_eq!(query.first("missing"), None);
    }

    #[tokio::test]
    async fn test_empty_query() {
        let query = extract_query("/weather").await;
        assert!(query.0.is_empty());
        assert_eq!(query.first("city"), None);
    }
}
