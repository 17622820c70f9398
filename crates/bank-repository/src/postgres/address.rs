//! Shared storage for the two address tables.
//!
//! `registration` and `actual_registration` have identical columns; each
//! entity picks its table through [`AddressRecord`].

use super::{select_by_id, select_by_ids, IdQuery, Write};
use bank_core::{ActualRegistrationEntity, BankResult, Entity, RegistrationEntity};
use sqlx::postgres::PgConnection;
use sqlx::FromRow;

const COLUMNS: &[&str] = &[
    "id",
    "country",
    "region",
    "city",
    "district",
    "locality",
    "street",
    "house_number",
    "house_block",
    "flat_number",
    "\"index\"",
];

/// Database row of either address table.
#[derive(Debug, Clone, FromRow)]
pub(crate) struct AddressRow {
    pub id: i64,
    pub country: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub locality: Option<String>,
    pub street: Option<String>,
    pub house_number: Option<String>,
    pub house_block: Option<String>,
    pub flat_number: Option<String>,
    pub index: Option<i64>,
}

/// An entity stored in one of the address tables.
pub(crate) trait AddressRecord: Entity {
    const TABLE: &'static str;

    fn from_row(row: AddressRow) -> Self;

    fn to_row(&self) -> AddressRow;
}

macro_rules! address_record {
    ($entity:ty, $table:literal) => {
        impl AddressRecord for $entity {
            const TABLE: &'static str = $table;

            fn from_row(row: AddressRow) -> Self {
                Self {
                    id: row.id,
                    country: row.country,
                    region: row.region,
                    city: row.city,
                    district: row.district,
                    locality: row.locality,
                    street: row.street,
                    house_number: row.house_number,
                    house_block: row.house_block,
                    flat_number: row.flat_number,
                    index: row.index,
                }
            }

            fn to_row(&self) -> AddressRow {
                AddressRow {
                    id: self.id,
                    country: self.country.clone(),
                    region: self.region.clone(),
                    city: self.city.clone(),
                    district: self.district.clone(),
                    locality: self.locality.clone(),
                    street: self.street.clone(),
                    house_number: self.house_number.clone(),
                    house_block: self.house_block.clone(),
                    flat_number: self.flat_number.clone(),
                    index: self.index,
                }
            }
        }
    };
}

address_record!(RegistrationEntity, "registration");
address_record!(ActualRegistrationEntity, "actual_registration");

pub(crate) async fn fetch<E: AddressRecord>(
    conn: &mut PgConnection,
    id: i64,
) -> BankResult<Option<E>> {
    let row = sqlx::query_as::<_, AddressRow>(&select_by_id(E::TABLE, COLUMNS))
        .bind(id)
        .fetch_optional(conn)
        .await?;

    Ok(row.map(E::from_row))
}

pub(crate) async fn fetch_all<E: AddressRecord>(
    conn: &mut PgConnection,
    ids: &[i64],
) -> BankResult<Vec<E>> {
    let rows = sqlx::query_as::<_, AddressRow>(&select_by_ids(E::TABLE, COLUMNS))
        .bind(ids)
        .fetch_all(conn)
        .await?;

    Ok(rows.into_iter().map(E::from_row).collect())
}

/// Inserts or updates the address and returns its id.
pub(crate) async fn write<E: AddressRecord>(
    conn: &mut PgConnection,
    entity: &E,
    write: Write,
) -> BankResult<i64> {
    let row = entity.to_row();
    let sql = write.sql(E::TABLE, &COLUMNS[1..]);
    let query: IdQuery<'_> = sqlx::query_scalar(&sql)
        .bind(row.country)
        .bind(row.region)
        .bind(row.city)
        .bind(row.district)
        .bind(row.locality)
        .bind(row.street)
        .bind(row.house_number)
        .bind(row.house_block)
        .bind(row.flat_number)
        .bind(row.index);

    write.execute(conn, query, E::RESOURCE).await
}

/// Writes an owned address, inserting it when it has no id yet.
pub(crate) async fn store<E: AddressRecord>(
    conn: &mut PgConnection,
    entity: &E,
) -> BankResult<i64> {
    write(conn, entity, Write::for_entity(entity)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_round_trip_keeps_every_column() {
        let registration = RegistrationEntity {
            id: 3,
            country: Some("Россия".to_string()),
            region: Some("Московская".to_string()),
            city: Some("Москва".to_string()),
            district: None,
            locality: None,
            street: Some("Тверская".to_string()),
            house_number: Some("1".to_string()),
            house_block: Some("2".to_string()),
            flat_number: Some("15".to_string()),
            index: Some(125_009),
        };
        let restored = RegistrationEntity::from_row(registration.to_row());
        assert_eq!(restored, registration);
    }

    #[test]
    fn test_tables_are_distinct() {
        assert_eq!(<RegistrationEntity as AddressRecord>::TABLE, "registration");
        assert_eq!(<ActualRegistrationEntity as AddressRecord>::TABLE, "actual_registration");
    }
}
