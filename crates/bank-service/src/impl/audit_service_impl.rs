//! Audit service implementation.

use crate::audit_service::AuditService;
use crate::dto::AuditDto;
use crate::mappers::AuditMapper;
use async_trait::async_trait;
use bank_core::{AuditEntity, BankError, BankResult, DtoMapper, Entity, ReadRepository};
use std::sync::Arc;
use tracing::debug;

/// Audit service over any audit repository.
pub struct AuditServiceImpl<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> AuditServiceImpl<R> {
    /// Creates a new audit service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> AuditService for AuditServiceImpl<R>
where
    R: ReadRepository<AuditEntity> + ?Sized + 'static,
{
    async fn find_by_id(&self, id: i64) -> BankResult<AuditDto> {
        debug!("Getting audit: {}", id);

        let audit = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| BankError::not_found(AuditEntity::RESOURCE, id))?;

        Ok(AuditMapper::to_dto(&audit))
    }
}

impl<R: ?Sized> std::fmt::Debug for AuditServiceImpl<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuditServiceImpl").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bank_repository::InMemoryRepository;

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = InMemoryRepository::with_entities(vec![AuditEntity {
            id: 1,
            entity_type: Some("User".to_string()),
            operation_type: Some("CREATE".to_string()),
            ..Default::default()
        }]);
        let service = AuditServiceImpl::new(Arc::new(repo));

        let audit = service.find_by_id(1).await.unwrap();
        assert_eq!(audit.id, Some(1));
        assert_eq!(audit.operation_type.as_deref(), Some("CREATE"));
    }

    #[tokio::test]
    async fn test_missing_audit_is_not_found() {
        let service = AuditServiceImpl::new(Arc::new(InMemoryRepository::<AuditEntity>::new()));

        let err = service.find_by_id(9).await.unwrap_err();
        assert_eq!(err.to_string(), "Audit with id 9 not found");
    }
}
