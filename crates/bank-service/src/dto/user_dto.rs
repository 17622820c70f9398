//! User DTOs (authorization service).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// User account as exchanged over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Option<i64>,

    #[validate(
        required(message = "Role is required"),
        custom(function = "not_blank", message = "Role must not be blank")
    )]
    pub role: Option<String>,

    #[validate(required(message = "Profile id is required"))]
    pub profile_id: Option<i64>,

    #[validate(
        required(message = "Password is required"),
        custom(function = "not_blank", message = "Password must not be blank")
    )]
    pub password: Option<String>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
