//! Change-log rows written alongside entity modifications.

use crate::Entity;
use chrono::NaiveDateTime;

/// Immutable audit record.
///
/// `entity_json` holds the serialized state before the operation and
/// `new_entity_json` the state after it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuditEntity {
    pub id: i64,
    pub entity_type: Option<String>,
    pub operation_type: Option<String>,
    pub created_by: Option<String>,
    pub modified_by: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub modified_at: Option<NaiveDateTime>,
    pub new_entity_json: Option<String>,
    pub entity_json: Option<String>,
}

impl Entity for AuditEntity {
    const RESOURCE: &'static str = "Audit";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}
