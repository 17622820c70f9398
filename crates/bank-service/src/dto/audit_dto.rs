//! Audit DTO shared by both services.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Change-log row as exchanged over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuditDto {
    pub id: Option<i64>,
    pub entity_type: Option<String>,
    pub operation_type: Option<String>,
    pub created_by: Option<String>,
    pub modified_by: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub modified_at: Option<NaiveDateTime>,
    pub new_entity_json: Option<String>,
    pub entity_json: Option<String>,
}
