//! API response types.
//!
//! Successful handlers answer with the DTO JSON itself; failures answer with
//! an [`ErrorResponse`] and the status of the underlying [`BankError`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bank_core::{BankError, ErrorResponse};
use serde::Serialize;
use tracing::{error, warn};

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub BankError);

impl From<BankError> for AppError {
    fn from(err: BankError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        } else {
            warn!("Request rejected: {}", self.0);
        }

        (status, Json(ErrorResponse::from_error(&self.0))).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Helper to create a success response.
pub fn ok<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}

/// Helper to create a response with an explicit status.
pub fn with_status<T: Serialize>(status: StatusCode, data: T) -> (StatusCode, Json<T>) {
    (status, Json(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_not_found_body() {
        let response = AppError(BankError::not_found("Profile", 7)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], "NOT_FOUND");
        assert_eq!(body["message"], "Profile with id 7 not found");
    }

    #[tokio::test]
    async fn test_conflict_status() {
        let response = AppError(BankError::conflict("duplicate phone number")).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
