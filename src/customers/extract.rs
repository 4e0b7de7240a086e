//! Extractors that turn path segments and bodies into typed input.
//!
//! Both reject with `ApiError`, so a handler only ever sees parsed values.

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::customers::error::ApiError;
use crate::customers::model::CustomerId;

/// The `{id}` segment of a `/customer/{id}` path, parsed as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathId(pub CustomerId);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => raw,
            Err(PathRejection::MissingPathParams(_)) => return Err(ApiError::MissingId),
            Err(rejection) => return Err(ApiError::InvalidId(rejection.body_text())),
        };

        Ok(PathId(raw.parse::<CustomerId>()?))
    }
}

/// A JSON body parsed from the raw bytes, whatever the declared content type.
///
/// Object keys match field names case-insensitively and a `null` field keeps
/// its zero value; a bare `null` body decodes as an empty object.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::MalformedBody(e.body_text()))?;

        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::MalformedBody(e.to_string()))?;

        serde_json::from_value(fold_fields(value))
            .map(JsonBody)
            .map_err(|e| ApiError::MalformedBody(e.to_string()))
    }
}

/// Lowercase object keys and drop `null` members.
///
/// Keys are visited in map order, so when two keys differ only in case the
/// later one wins.
fn fold_fields(value: Value) -> Value {
    match value {
        Value::Null => Value::Object(Map::new()),
        Value::Object(fields) => Value::Object(
            fields
                .into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k.to_lowercase(), v))
                .collect(),
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customers::model::{Customer, CustomerUpdate};
    use axum::body::Body;

    async fn decode<T: DeserializeOwned>(body: &'static str) -> Result<T, ApiError> {
        let req = Request::builder()
            .method("POST")
            .uri("/customer")
            .body(Body::from(body))
            .unwrap();

        JsonBody::<T>::from_request(req, &()).await.map(|JsonBody(v)| v)
    }

    #[tokio::test]
    async fn test_body_without_content_type() {
        let customer: Customer = decode(r#"{"id": 3, "name": "X"}"#).await.unwrap();
        assert_eq!(customer.id, 3);
        assert_eq!(customer.name, "X");
    }

    #[tokio::test]
    async fn test_keys_match_any_case() {
        let customer: Customer = decode(r#"{"ID": 77, "NAME": "Upper", "Email": "u@u.com", "conTacted": true}"#)
            .await
            .unwrap();
        assert_eq!(customer.id, 77);
        assert_eq!(customer.name, "Upper");
        assert_eq!(customer.email, "u@u.com");
        assert!(customer.contacted);
    }

    #[tokio::test]
    async fn test_null_fields_take_zero_value() {
        let customer: Customer = decode(r#"{"id": 78, "name": null, "phone": null}"#).await.unwrap();
        assert_eq!(customer.id, 78);
        assert_eq!(customer.name, "");
        assert_eq!(customer.phone, 0);

        let update: CustomerUpdate = decode("null").await.unwrap();
        assert_eq!(update, CustomerUpdate::default());
    }

    #[tokio::test]
    async fn test_malformed_body_rejected() {
        let err = decode::<Customer>("{not json").await.unwrap_err();
        assert!(matches!(err, ApiError::MalformedBody(_)));
    }

    #[tokio::test]
    async fn test_wrong_shape_rejected() {
        let err = decode::<Customer>(r#"{"id": "seven"}"#).await.unwrap_err();
        assert!(matches!(err, ApiError::MalformedBody(_)));

        let err = decode::<CustomerUpdate>("[1, 2]").await.unwrap_err();
        assert!(matches!(err, ApiError::MalformedBody(_)));
    }

    #[test]
    fn test_fold_fields_leaves_scalars() {
        assert_eq!(fold_fields(Value::from(5)), Value::from(5));
    }
}
