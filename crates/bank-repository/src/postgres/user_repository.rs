//! PostgreSQL user repository implementation.

use super::{select_by_id, select_by_ids, IdQuery, Write};
use crate::{DatabasePoolInterface, UserRepository};
use async_trait::async_trait;
use bank_core::{BankError, BankResult, Entity, ReadRepository, Repository, UserEntity};
use shaku::Component;
use sqlx::{FromRow, PgConnection};
use std::sync::Arc;
use tracing::{debug, info};

const TABLE: &str = "users";

const COLUMNS: &[&str] = &["id", "role", "profile_id", "password"];

/// PostgreSQL user repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = UserRepository)]
pub struct PgUserRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl PgUserRepository {
    /// Creates a new PostgreSQL user repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }

    /// Writes the row and reloads it on the same connection.
    async fn write(&self, user: &UserEntity, write: Write) -> BankResult<UserEntity> {
        let sql = write.sql(TABLE, &COLUMNS[1..]);
        let query: IdQuery<'_> = sqlx::query_scalar(&sql)
            .bind(user.role.clone())
            .bind(user.profile_id)
            .bind(user.password.clone());

        let mut conn = self.pool.inner().acquire().await?;
        let id = write.execute(&mut conn, query, UserEntity::RESOURCE).await?;

        fetch(&mut conn, id)
            .await?
            .ok_or_else(|| BankError::not_found(UserEntity::RESOURCE, id))
    }
}

async fn fetch(conn: &mut PgConnection, id: i64) -> BankResult<Option<UserEntity>> {
    let row = sqlx::query_as::<_, UserRow>(&select_by_id(TABLE, COLUMNS))
        .bind(id)
        .fetch_optional(conn)
        .await?;

    Ok(row.map(UserEntity::from))
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    role: Option<String>,
    profile_id: Option<i64>,
    password: Option<String>,
}

impl From<UserRow> for UserEntity {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            role: row.role,
            profile_id: row.profile_id,
            password: row.password,
        }
    }
}

#[async_trait]
impl ReadRepository<UserEntity> for PgUserRepository {
    async fn find_by_id(&self, id: i64) -> BankResult<Option<UserEntity>> {
        debug!("Finding user by id: {}", id);

        let mut conn = self.pool.inner().acquire().await?;
        fetch(&mut conn, id).await
    }

    async fn find_all_by_id(&self, ids: &[i64]) -> BankResult<Vec<UserEntity>> {
        debug!("Finding users by ids: {:?}", ids);

        let rows = sqlx::query_as::<_, UserRow>(&select_by_ids(TABLE, COLUMNS))
            .bind(ids)
            .fetch_all(self.pool.inner())
            .await?;

        Ok(rows.into_iter().map(UserEntity::from).collect())
    }
}

#[async_trait]
impl Repository<UserEntity> for PgUserRepository {
    async fn save(&self, user: &UserEntity) -> BankResult<UserEntity> {
        let saved = self.write(user, Write::Insert).await?;
        info!("User saved: {}", saved.id);
        Ok(saved)
    }

    async fn update(&self, user: &UserEntity) -> BankResult<UserEntity> {
        let updated = self.write(user, Write::Update(user.id)).await?;
        info!("User updated: {}", updated.id);
        Ok(updated)
    }
}

impl UserRepository for PgUserRepository {}
