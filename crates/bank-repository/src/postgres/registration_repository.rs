//! PostgreSQL registration repository.

use super::{address, Write};
use crate::{DatabasePoolInterface, RegistrationRepository};
use async_trait::async_trait;
use bank_core::{BankError, BankResult, Entity, ReadRepository, RegistrationEntity, Repository};
use shaku::Component;
use sqlx::PgConnection;
use std::sync::Arc;
use tracing::debug;

/// PostgreSQL registration repository.
#[derive(Component, Clone)]
#[shaku(interface = RegistrationRepository)]
pub struct PgRegistrationRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl PgRegistrationRepository {
    /// Creates a new registration repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReadRepository<RegistrationEntity> for PgRegistrationRepository {
    async fn find_by_id(&self, id: i64) -> BankResult<Option<RegistrationEntity>> {
        debug!("Finding registration by id: {}", id);
        let mut conn = self.pool.inner().acquire().await?;
        address::fetch(&mut conn, id).await
    }

    async fn find_all_by_id(&self, ids: &[i64]) -> BankResult<Vec<RegistrationEntity>> {
        debug!("Finding registrations by ids: {:?}", ids);
        let mut conn = self.pool.inner().acquire().await?;
        address::fetch_all(&mut conn, ids).await
    }
}

#[async_trait]
impl Repository<RegistrationEntity> for PgRegistrationRepository {
    async fn save(&self, entity: &RegistrationEntity) -> BankResult<RegistrationEntity> {
        let mut conn = self.pool.inner().acquire().await?;
        let id = address::write(&mut conn, entity, Write::Insert).await?;
        debug!("Inserted registration {}", id);
        reload(&mut conn, id).await
    }

    async fn update(&self, entity: &RegistrationEntity) -> BankResult<RegistrationEntity> {
        let mut conn = self.pool.inner().acquire().await?;
        let id = address::write(&mut conn, entity, Write::Update(entity.id())).await?;
        reload(&mut conn, id).await
    }
}

impl RegistrationRepository for PgRegistrationRepository {}

async fn reload(conn: &mut PgConnection, id: i64) -> BankResult<RegistrationEntity> {
    address::fetch(conn, id)
        .await?
        .ok_or_else(|| BankError::not_found(RegistrationEntity::RESOURCE, id))
}
