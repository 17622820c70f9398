//! Audit service trait definition.

use crate::dto::AuditDto;
use async_trait::async_trait;
use bank_core::BankResult;

/// Read-only access to the audit log.
#[async_trait]
pub trait AuditService: Send + Sync {
    /// Gets an audit row by ID.
    async fn find_by_id(&self, id: i64) -> BankResult<AuditDto>;
}
