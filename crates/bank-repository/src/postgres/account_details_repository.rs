//! PostgreSQL account details repository.

use super::{profile_repository as profile, select_by_id, select_by_ids, IdQuery, Write};
use crate::{AccountDetailsIdRepository, DatabasePoolInterface};
use async_trait::async_trait;
use bank_core::{AccountDetailsIdEntity, BankError, BankResult, Entity, ReadRepository, Repository};
use shaku::Component;
use sqlx::{FromRow, PgConnection};
use std::sync::Arc;
use tracing::{debug, info};

const TABLE: &str = "account_details_id";

const COLUMNS: &[&str] = &["id", "account_id", "profile_id"];

/// PostgreSQL account details repository.
#[derive(Component, Clone)]
#[shaku(interface = AccountDetailsIdRepository)]
pub struct PgAccountDetailsIdRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl PgAccountDetailsIdRepository {
    /// Creates a new account details repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AccountDetailsIdRow {
    id: i64,
    account_id: Option<i64>,
    profile_id: Option<i64>,
}

async fn hydrate(
    conn: &mut PgConnection,
    row: AccountDetailsIdRow,
) -> BankResult<AccountDetailsIdEntity> {
    let owner = match row.profile_id {
        Some(id) => profile::fetch(conn, id).await?,
        None => None,
    };

    Ok(AccountDetailsIdEntity {
        id: row.id,
        account_id: row.account_id,
        profile: owner,
    })
}

async fn fetch(conn: &mut PgConnection, id: i64) -> BankResult<Option<AccountDetailsIdEntity>> {
    let row = sqlx::query_as::<_, AccountDetailsIdRow>(&select_by_id(TABLE, COLUMNS))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

    match row {
        Some(row) => Ok(Some(hydrate(conn, row).await?)),
        None => Ok(None),
    }
}

async fn write(
    conn: &mut PgConnection,
    entity: &AccountDetailsIdEntity,
    write: Write,
) -> BankResult<i64> {
    let profile_id = match &entity.profile {
        Some(owner) => Some(profile::store(conn, owner).await?),
        None => None,
    };

    let sql = write.sql(TABLE, &COLUMNS[1..]);
    let query: IdQuery<'_> = sqlx::query_scalar(&sql)
        .bind(entity.account_id)
        .bind(profile_id);

    write.execute(conn, query, AccountDetailsIdEntity::RESOURCE).await
}

async fn reload(conn: &mut PgConnection, id: i64) -> BankResult<AccountDetailsIdEntity> {
    fetch(conn, id)
        .await?
        .ok_or_else(|| BankError::not_found(AccountDetailsIdEntity::RESOURCE, id))
}

#[async_trait]
impl ReadRepository<AccountDetailsIdEntity> for PgAccountDetailsIdRepository {
    async fn find_by_id(&self, id: i64) -> BankResult<Option<AccountDetailsIdEntity>> {
        debug!("Finding account details by id: {}", id);
        let mut conn = self.pool.inner().acquire().await?;
        fetch(&mut conn, id).await
    }

    async fn find_all_by_id(&self, ids: &[i64]) -> BankResult<Vec<AccountDetailsIdEntity>> {
        debug!("Finding account details by ids: {:?}", ids);
        let mut conn = self.pool.inner().acquire().await?;
        let rows = sqlx::query_as::<_, AccountDetailsIdRow>(&select_by_ids(TABLE, COLUMNS))
            .bind(ids)
            .fetch_all(&mut *conn)
            .await?;

        let mut details = Vec::with_capacity(rows.len());
        for row in rows {
            details.push(hydrate(&mut conn, row).await?);
        }
        Ok(details)
    }
}

#[async_trait]
impl Repository<AccountDetailsIdEntity> for PgAccountDetailsIdRepository {
    async fn save(&self, entity: &AccountDetailsIdEntity) -> BankResult<AccountDetailsIdEntity> {
        let mut tx = self.pool.inner().begin().await?;
        let id = write(&mut tx, entity, Write::Insert).await?;
        let saved = reload(&mut tx, id).await?;
        tx.commit().await?;

        info!("Account details saved: {}", id);
        Ok(saved)
    }

    async fn update(&self, entity: &AccountDetailsIdEntity) -> BankResult<AccountDetailsIdEntity> {
        let mut tx = self.pool.inner().begin().await?;
        let id = write(&mut tx, entity, Write::Update(entity.id)).await?;
        let updated = reload(&mut tx, id).await?;
        tx.commit().await?;

        info!("Account details updated: {}", id);
        Ok(updated)
    }
}

impl AccountDetailsIdRepository for PgAccountDetailsIdRepository {}
