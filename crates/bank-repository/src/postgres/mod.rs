//! PostgreSQL repository implementations.

pub(crate) mod account_details_repository;
pub(crate) mod actual_registration_repository;
pub(crate) mod address;
pub(crate) mod audit_repository;
pub(crate) mod passport_repository;
pub(crate) mod profile_repository;
pub(crate) mod registration_repository;
pub(crate) mod user_repository;

pub use account_details_repository::PgAccountDetailsIdRepository;
pub use actual_registration_repository::PgActualRegistrationRepository;
pub use audit_repository::PgAuditRepository;
pub use passport_repository::PgPassportRepository;
pub use profile_repository::PgProfileRepository;
pub use registration_repository::PgRegistrationRepository;
pub use user_repository::PgUserRepository;

use bank_core::{BankError, BankResult, Entity};
use sqlx::postgres::{PgArguments, PgConnection};
use sqlx::query::QueryScalar;
use sqlx::Postgres;

/// Scalar query returning the id of the written row.
pub(crate) type IdQuery<'q> = QueryScalar<'q, Postgres, i64, PgArguments>;

/// How a row is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Write {
    Insert,
    Update(i64),
}

impl Write {
    /// Owned records without an id are inserted, the rest updated.
    pub(crate) fn for_entity<E: Entity>(entity: &E) -> Self {
        match entity.id() {
            0 => Self::Insert,
            id => Self::Update(id),
        }
    }

    /// Builds the statement for `columns`, bound as `$1..$n` in order.
    ///
    /// Updates bind the row id as `$n+1`.
    pub(crate) fn sql(self, table: &str, columns: &[&str]) -> String {
        match self {
            Self::Insert => {
                let placeholders = (1..=columns.len())
                    .map(|i| format!("${}", i))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!(
                    "INSERT INTO {} ({}) VALUES ({}) RETURNING id",
                    table,
                    columns.join(", "),
                    placeholders
                )
            }
            Self::Update(_) => {
                let assignments = columns
                    .iter()
                    .enumerate()
                    .map(|(i, column)| format!("{} = ${}", column, i + 1))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!(
                    "UPDATE {} SET {} WHERE id = ${} RETURNING id",
                    table,
                    assignments,
                    columns.len() + 1
                )
            }
        }
    }

    /// Runs a statement built by [`sql`](Self::sql) with its fields bound.
    pub(crate) async fn execute(
        self,
        conn: &mut PgConnection,
        query: IdQuery<'_>,
        resource: &'static str,
    ) -> BankResult<i64> {
        match self {
            Self::Insert => Ok(query.fetch_one(conn).await?),
            Self::Update(id) => query
                .bind(id)
                .fetch_optional(conn)
                .await?
                .ok_or_else(|| BankError::not_found(resource, id)),
        }
    }
}

/// Builds `SELECT <columns> FROM <table> WHERE id = $1`.
pub(crate) fn select_by_id(table: &str, columns: &[&str]) -> String {
    format!("SELECT {} FROM {} WHERE id = $1", columns.join(", "), table)
}

/// Builds `SELECT <columns> FROM <table> WHERE id = ANY($1) ORDER BY id`.
pub(crate) fn select_by_ids(table: &str, columns: &[&str]) -> String {
    format!(
        "SELECT {} FROM {} WHERE id = ANY($1) ORDER BY id",
        columns.join(", "),
        table
    )
}
