//! Account details DTO.

use crate::dto::ProfileDto;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Link between a bank account and its owning profile.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountDetailsIdDto {
    pub id: Option<i64>,
    #[validate(required(message = "Account id is required"))]
    pub account_id: Option<i64>,
    #[validate(nested)]
    pub profile: Option<ProfileDto>,
}
