//! PostgreSQL actual registration repository.

use super::{address, Write};
use crate::{ActualRegistrationRepository, DatabasePoolInterface};
use async_trait::async_trait;
use bank_core::{
    ActualRegistrationEntity, BankError, BankResult, Entity, ReadRepository, Repository,
};
use shaku::Component;
use sqlx::PgConnection;
use std::sync::Arc;
use tracing::debug;

/// PostgreSQL actual registration repository.
#[derive(Component, Clone)]
#[shaku(interface = ActualRegistrationRepository)]
pub struct PgActualRegistrationRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl PgActualRegistrationRepository {
    /// Creates a new actual registration repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReadRepository<ActualRegistrationEntity> for PgActualRegistrationRepository {
    async fn find_by_id(&self, id: i64) -> BankResult<Option<ActualRegistrationEntity>> {
        debug!("Finding actual registration by id: {}", id);
        let mut conn = self.pool.inner().acquire().await?;
        address::fetch(&mut conn, id).await
    }

    async fn find_all_by_id(&self, ids: &[i64]) -> BankResult<Vec<ActualRegistrationEntity>> {
        debug!("Finding actual registrations by ids: {:?}", ids);
        let mut conn = self.pool.inner().acquire().await?;
        address::fetch_all(&mut conn, ids).await
    }
}

#[async_trait]
impl Repository<ActualRegistrationEntity> for PgActualRegistrationRepository {
    async fn save(&self, entity: &ActualRegistrationEntity) -> BankResult<ActualRegistrationEntity> {
        let mut conn = self.pool.inner().acquire().await?;
        let id = address::write(&mut conn, entity, Write::Insert).await?;
        debug!("Inserted actual registration {}", id);
        reload(&mut conn, id).await
    }

    async fn update(&self, entity: &ActualRegistrationEntity) -> BankResult<ActualRegistrationEntity> {
        let mut conn = self.pool.inner().acquire().await?;
        let id = address::write(&mut conn, entity, Write::Update(entity.id())).await?;
        reload(&mut conn, id).await
    }
}

impl ActualRegistrationRepository for PgActualRegistrationRepository {}

async fn reload(conn: &mut PgConnection, id: i64) -> BankResult<ActualRegistrationEntity> {
    address::fetch(conn, id)
        .await?
        .ok_or_else(|| BankError::not_found(ActualRegistrationEntity::RESOURCE, id))
}
