//! JSON body extractor.
//!
//! [`JsonBody<T>`] deserializes an optional JSON value: a literal `null` body
//! yields `None` so the service can reject it as missing input. Any JSON
//! rejection (bad syntax, wrong types, missing content type) is answered with
//! 400 Bad Request in the [`ErrorResponse`] format.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bank_core::ErrorResponse;
use serde::de::DeserializeOwned;

/// Optional JSON request body.
#[derive(Debug, Clone, Default)]
pub struct JsonBody<T>(pub Option<T>);

/// Rejection for [`JsonBody`].
#[derive(Debug)]
pub struct JsonBodyRejection(JsonRejection);

impl IntoResponse for JsonBodyRejection {
    fn into_response(self) -> Response {
        let error_response = ErrorResponse {
            code: "INVALID_JSON".to_string(),
            message: format!("Invalid JSON: {}", self.0.body_text()),
            details: None,
        };
        (StatusCode::BAD_REQUEST, Json(error_response)).into_response()
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonBodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Option<T>>::from_request(req, state)
            .await
            .map_err(JsonBodyRejection)?;

        Ok(JsonBody(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header::CONTENT_TYPE;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        name: Option<String>,
    }

    fn json_request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_object_body() {
        let JsonBody(payload) = JsonBody::<Payload>::from_request(json_request(r#"{"name":"x"}"#), &())
            .await
            .unwrap();
        assert_eq!(payload, Some(Payload { name: Some("x".to_string()) }));
    }

    #[tokio::test]
    async fn test_null_body_is_none() {
        let JsonBody(payload) = JsonBody::<Payload>::from_request(json_request("null"), &())
            .await
            .unwrap();
        assert_eq!(payload, None);
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let rejection = JsonBody::<Payload>::from_request(json_request("{name"), &())
            .await
            .unwrap_err();
        assert_eq!(rejection.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
