//! PostgreSQL audit repository.
//!
//! Read-only: the services never write audit rows.

use super::{select_by_id, select_by_ids};
use crate::{AuditRepository, DatabasePoolInterface};
use async_trait::async_trait;
use bank_core::{AuditEntity, BankResult, ReadRepository};
use chrono::NaiveDateTime;
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

const TABLE: &str = "audit";

const COLUMNS: &[&str] = &[
    "id",
    "entity_type",
    "operation_type",
    "created_by",
    "modified_by",
    "created_at",
    "modified_at",
    "new_entity_json",
    "entity_json",
];

/// PostgreSQL audit repository.
#[derive(Component, Clone)]
#[shaku(interface = AuditRepository)]
pub struct PgAuditRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl PgAuditRepository {
    /// Creates a new audit repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuditRow {
    id: i64,
    entity_type: Option<String>,
    operation_type: Option<String>,
    created_by: Option<String>,
    modified_by: Option<String>,
    created_at: Option<NaiveDateTime>,
    modified_at: Option<NaiveDateTime>,
    new_entity_json: Option<String>,
    entity_json: Option<String>,
}

impl From<AuditRow> for AuditEntity {
    fn from(row: AuditRow) -> Self {
        Self {
            id: row.id,
            entity_type: row.entity_type,
            operation_type: row.operation_type,
            created_by: row.created_by,
            modified_by: row.modified_by,
            created_at: row.created_at,
            modified_at: row.modified_at,
            new_entity_json: row.new_entity_json,
            entity_json: row.entity_json,
        }
    }
}

#[async_trait]
impl ReadRepository<AuditEntity> for PgAuditRepository {
    async fn find_by_id(&self, id: i64) -> BankResult<Option<AuditEntity>> {
        debug!("Finding audit by id: {}", id);

        let row = sqlx::query_as::<_, AuditRow>(&select_by_id(TABLE, COLUMNS))
            .bind(id)
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(row.map(AuditEntity::from))
    }

    async fn find_all_by_id(&self, ids: &[i64]) -> BankResult<Vec<AuditEntity>> {
        let rows = sqlx::query_as::<_, AuditRow>(&select_by_ids(TABLE, COLUMNS))
            .bind(ids)
            .fetch_all(self.pool.inner())
            .await?;

        Ok(rows.into_iter().map(AuditEntity::from).collect())
    }
}

impl AuditRepository for PgAuditRepository {}
