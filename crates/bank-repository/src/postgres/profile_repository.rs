//! PostgreSQL profile repository.

use super::{address, passport_repository as passport, select_by_id, select_by_ids, IdQuery, Write};
use crate::{DatabasePoolInterface, ProfileRepository};
use async_trait::async_trait;
use bank_core::{
    ActualRegistrationEntity, BankError, BankResult, Entity, ProfileEntity, ReadRepository,
    Repository,
};
use shaku::Component;
use sqlx::{FromRow, PgConnection};
use std::sync::Arc;
use tracing::{debug, info};

const TABLE: &str = "profile";

const COLUMNS: &[&str] = &[
    "id",
    "phone_number",
    "email",
    "name_on_card",
    "inn",
    "snils",
    "passport_id",
    "actual_registration_id",
];

/// PostgreSQL profile repository.
#[derive(Component, Clone)]
#[shaku(interface = ProfileRepository)]
pub struct PgProfileRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl PgProfileRepository {
    /// Creates a new profile repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a profile.
#[derive(Debug, FromRow)]
struct ProfileRow {
    id: i64,
    phone_number: Option<i64>,
    email: Option<String>,
    name_on_card: Option<String>,
    inn: Option<i64>,
    snils: Option<i64>,
    passport_id: Option<i64>,
    actual_registration_id: Option<i64>,
}

async fn hydrate(conn: &mut PgConnection, row: ProfileRow) -> BankResult<ProfileEntity> {
    let passport = match row.passport_id {
        Some(id) => passport::fetch(conn, id).await?,
        None => None,
    };
    let actual_registration = match row.actual_registration_id {
        Some(id) => address::fetch::<ActualRegistrationEntity>(conn, id).await?,
        None => None,
    };

    Ok(ProfileEntity {
        id: row.id,
        phone_number: row.phone_number,
        email: row.email,
        name_on_card: row.name_on_card,
        inn: row.inn,
        snils: row.snils,
        passport,
        actual_registration,
    })
}

pub(crate) async fn fetch(conn: &mut PgConnection, id: i64) -> BankResult<Option<ProfileEntity>> {
    let row = sqlx::query_as::<_, ProfileRow>(&select_by_id(TABLE, COLUMNS))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

    match row {
        Some(row) => Ok(Some(hydrate(conn, row).await?)),
        None => Ok(None),
    }
}

pub(crate) async fn fetch_all(
    conn: &mut PgConnection,
    ids: &[i64],
) -> BankResult<Vec<ProfileEntity>> {
    let rows = sqlx::query_as::<_, ProfileRow>(&select_by_ids(TABLE, COLUMNS))
        .bind(ids)
        .fetch_all(&mut *conn)
        .await?;

    let mut profiles = Vec::with_capacity(rows.len());
    for row in rows {
        profiles.push(hydrate(conn, row).await?);
    }
    Ok(profiles)
}

/// Writes the profile with its passport and actual address.
pub(crate) async fn write(
    conn: &mut PgConnection,
    entity: &ProfileEntity,
    write: Write,
) -> BankResult<i64> {
    let passport_id = match &entity.passport {
        Some(document) => Some(passport::store(conn, document).await?),
        None => None,
    };
    let actual_registration_id = match &entity.actual_registration {
        Some(residence) => Some(address::store(conn, residence).await?),
        None => None,
    };

    let sql = write.sql(TABLE, &COLUMNS[1..]);
    let query: IdQuery<'_> = sqlx::query_scalar(&sql)
        .bind(entity.phone_number)
        .bind(entity.email.clone())
        .bind(entity.name_on_card.clone())
        .bind(entity.inn)
        .bind(entity.snils)
        .bind(passport_id)
        .bind(actual_registration_id);

    write.execute(conn, query, ProfileEntity::RESOURCE).await
}

/// Writes an owned profile, inserting it when it has no id yet.
pub(crate) async fn store(conn: &mut PgConnection, entity: &ProfileEntity) -> BankResult<i64> {
    write(conn, entity, Write::for_entity(entity)).await
}

async fn reload(conn: &mut PgConnection, id: i64) -> BankResult<ProfileEntity> {
    fetch(conn, id)
        .await?
        .ok_or_else(|| BankError::not_found(ProfileEntity::RESOURCE, id))
}

#[async_trait]
impl ReadRepository<ProfileEntity> for PgProfileRepository {
    async fn find_by_id(&self, id: i64) -> BankResult<Option<ProfileEntity>> {
        debug!("Finding profile by id: {}", id);
        let mut conn = self.pool.inner().acquire().await?;
        fetch(&mut conn, id).await
    }

    async fn find_all_by_id(&self, ids: &[i64]) -> BankResult<Vec<ProfileEntity>> {
        debug!("Finding profiles by ids: {:?}", ids);
        let mut conn = self.pool.inner().acquire().await?;
        fetch_all(&mut conn, ids).await
    }
}

#[async_trait]
impl Repository<ProfileEntity> for PgProfileRepository {
    async fn save(&self, entity: &ProfileEntity) -> BankResult<ProfileEntity> {
        let mut tx = self.pool.inner().begin().await?;
        let id = write(&mut tx, entity, Write::Insert).await?;
        let saved = reload(&mut tx, id).await?;
        tx.commit().await?;

        info!("Profile saved: {}", id);
        Ok(saved)
    }

    async fn update(&self, entity: &ProfileEntity) -> BankResult<ProfileEntity> {
        let mut tx = self.pool.inner().begin().await?;
        let id = write(&mut tx, entity, Write::Update(entity.id)).await?;
        let updated = reload(&mut tx, id).await?;
        tx.commit().await?;

        info!("Profile updated: {}", id);
        Ok(updated)
    }
}

impl ProfileRepository for PgProfileRepository {}
