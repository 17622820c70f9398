//! PostgreSQL passport repository.

use super::{address, select_by_id, select_by_ids, IdQuery, Write};
use crate::{DatabasePoolInterface, PassportRepository};
use async_trait::async_trait;
use bank_core::{
    BankError, BankResult, Entity, PassportEntity, ReadRepository, RegistrationEntity, Repository,
};
use chrono::NaiveDate;
use shaku::Component;
use sqlx::{FromRow, PgConnection};
use std::sync::Arc;
use tracing::{debug, info};

const TABLE: &str = "passport";

const COLUMNS: &[&str] = &[
    "id",
    "series",
    "number",
    "last_name",
    "first_name",
    "middle_name",
    "gender",
    "birth_date",
    "birth_place",
    "issued_by",
    "date_of_issue",
    "division_code",
    "expiration_date",
    "registration_id",
];

/// PostgreSQL passport repository.
#[derive(Component, Clone)]
#[shaku(interface = PassportRepository)]
pub struct PgPassportRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl PgPassportRepository {
    /// Creates a new passport repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a passport.
#[derive(Debug, FromRow)]
struct PassportRow {
    id: i64,
    series: Option<i32>,
    number: Option<i64>,
    last_name: Option<String>,
    first_name: Option<String>,
    middle_name: Option<String>,
    gender: Option<String>,
    birth_date: Option<NaiveDate>,
    birth_place: Option<String>,
    issued_by: Option<String>,
    date_of_issue: Option<NaiveDate>,
    division_code: Option<i32>,
    expiration_date: Option<NaiveDate>,
    registration_id: Option<i64>,
}

impl PassportRow {
    fn into_entity(self, registration: Option<RegistrationEntity>) -> PassportEntity {
        PassportEntity {
            id: self.id,
            series: self.series,
            number: self.number,
            last_name: self.last_name,
            first_name: self.first_name,
            middle_name: self.middle_name,
            gender: self.gender,
            birth_date: self.birth_date,
            birth_place: self.birth_place,
            issued_by: self.issued_by,
            date_of_issue: self.date_of_issue,
            division_code: self.division_code,
            expiration_date: self.expiration_date,
            registration,
        }
    }
}

/// Loads the registration referenced by a row.
async fn hydrate(conn: &mut PgConnection, row: PassportRow) -> BankResult<PassportEntity> {
    let registration = match row.registration_id {
        Some(id) => address::fetch::<RegistrationEntity>(conn, id).await?,
        None => None,
    };
    Ok(row.into_entity(registration))
}

pub(crate) async fn fetch(conn: &mut PgConnection, id: i64) -> BankResult<Option<PassportEntity>> {
    let row = sqlx::query_as::<_, PassportRow>(&select_by_id(TABLE, COLUMNS))
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
) -> BankResult<Vec<PassportEntity>> {
    let rows = sqlx::query_as::<_, PassportRow>(&select_by_ids(TABLE, COLUMNS))
        .bind(ids)
        .fetch_all(&mut *conn)
        .await?;

    let mut passports = Vec::with_capacity(rows.len());
    for row in rows {
        passports.push(hydrate(conn, row).await?);
    }
    Ok(passports)
}

/// Writes the passport and its registration, returning the passport id.
pub(crate) async fn write(
    conn: &mut PgConnection,
    entity: &PassportEntity,
    write: Write,
) -> BankResult<i64> {
    let registration_id = match &entity.registration {
        Some(registration) => Some(address::store(conn, registration).await?),
        None => None,
    };

    let sql = write.sql(TABLE, &COLUMNS[1..]);
    let query: IdQuery<'_> = sqlx::query_scalar(&sql)
        .bind(entity.series)
        .bind(entity.number)
        .bind(entity.last_name.clone())
        .bind(entity.first_name.clone())
        .bind(entity.middle_name.clone())
        .bind(entity.gender.clone())
        .bind(entity.birth_date)
        .bind(entity.birth_place.clone())
        .bind(entity.issued_by.clone())
        .bind(entity.date_of_issue)
        .bind(entity.division_code)
        .bind(entity.expiration_date)
        .bind(registration_id);

    write.execute(conn, query, PassportEntity::RESOURCE).await
}

/// Writes an owned passport, inserting it when it has no id yet.
pub(crate) async fn store(conn: &mut PgConnection, entity: &PassportEntity) -> BankResult<i64> {
    write(conn, entity, Write::for_entity(entity)).await
}

async fn reload(conn: &mut PgConnection, id: i64) -> BankResult<PassportEntity> {
    fetch(conn, id)
        .await?
        .ok_or_else(|| BankError::not_found(PassportEntity::RESOURCE, id))
}

#[async_trait]
impl ReadRepository<PassportEntity> for PgPassportRepository {
    async fn find_by_id(&self, id: i64) -> BankResult<Option<PassportEntity>> {
        debug!("Finding passport by id: {}", id);
        let mut conn = self.pool.inner().acquire().await?;
        fetch(&mut conn, id).await
    }

    async fn find_all_by_id(&self, ids: &[i64]) -> BankResult<Vec<PassportEntity>> {
        debug!("Finding passports by ids: {:?}", ids);
        let mut conn = self.pool.inner().acquire().await?;
        fetch_all(&mut conn, ids).await
    }
}

#[async_trait]
impl Repository<PassportEntity> for PgPassportRepository {
    async fn save(&self, entity: &PassportEntity) -> BankResult<PassportEntity> {
        let mut tx = self.pool.inner().begin().await?;
        let id = write(&mut tx, entity, Write::Insert).await?;
        let saved = reload(&mut tx, id).await?;
        tx.commit().await?;

        info!("Passport saved: {}", id);
        Ok(saved)
    }

    async fn update(&self, entity: &PassportEntity) -> BankResult<PassportEntity> {
        let mut tx = self.pool.inner().begin().await?;
        let id = write(&mut tx, entity, Write::Update(entity.id)).await?;
        let updated = reload(&mut tx, id).await?;
        tx.commit().await?;

        info!("Passport updated: {}", id);
        Ok(updated)
    }
}

impl PassportRepository for PgPassportRepository {}
