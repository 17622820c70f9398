//! Core traits shared by every record family.

use crate::BankResult;
use async_trait::async_trait;

/// Trait for entities with a numeric identifier.
///
/// An identifier of `0` means the record has not been stored yet.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Family name used in log lines and not-found messages.
    const RESOURCE: &'static str;

    /// Returns the entity's identifier.
    fn id(&self) -> i64;

    /// Replaces the entity's identifier.
    fn set_id(&mut self, id: i64);
}

/// Read side of a repository.
#[async_trait]
pub trait ReadRepository<T>: Send + Sync
where
    T: Entity,
{
    /// Finds an entity by its ID.
    async fn find_by_id(&self, id: i64) -> BankResult<Option<T>>;

    /// Finds all entities whose ID is in `ids`, in storage order.
    ///
    /// Unknown IDs are skipped.
    async fn find_all_by_id(&self, ids: &[i64]) -> BankResult<Vec<T>>;
}

/// Base repository trait for create and update operations.
#[async_trait]
pub trait Repository<T>: ReadRepository<T>
where
    T: Entity,
{
    /// Inserts a new entity and returns it with its assigned ID.
    async fn save(&self, entity: &T) -> BankResult<T>;

    /// Overwrites the stored row with the same ID and returns the stored entity.
    async fn update(&self, entity: &T) -> BankResult<T>;
}

/// Maps a persistence record to its transport shape.
///
/// Every operation is total: absent input yields absent output.
pub trait DtoMapper {
    /// Persistence shape.
    type Entity;
    /// Transport shape.
    type Dto;

    /// Maps an entity to a DTO, recursing into owned records.
    fn to_dto(entity: &Self::Entity) -> Self::Dto;

    /// Null-propagating form of [`to_dto`](Self::to_dto).
    fn to_dto_opt(entity: Option<&Self::Entity>) -> Option<Self::Dto> {
        entity.map(Self::to_dto)
    }

    /// Maps a list element-wise, preserving order and length.
    fn to_dto_list(entities: Option<&[Self::Entity]>) -> Option<Vec<Self::Dto>> {
        entities.map(|list| list.iter().map(Self::to_dto).collect())
    }
}

/// Bidirectional mapper with partial-update support.
pub trait EntityMapper: DtoMapper {
    /// Builds a new entity from a DTO, recursing into owned records.
    fn to_entity(dto: Self::Dto) -> Self::Entity;

    /// Overlays the fields present on `dto` onto `entity` in place.
    ///
    /// Scalars absent from the DTO are left untouched. An absent owned
    /// record clears the entity's owned record at every depth.
    fn merge(dto: Self::Dto, entity: &mut Self::Entity);

    /// Null-propagating form of [`to_entity`](Self::to_entity).
    fn to_entity_opt(dto: Option<Self::Dto>) -> Option<Self::Entity> {
        dto.map(Self::to_entity)
    }

    /// Maps a list of DTOs element-wise.
    fn to_entity_list(dtos: Option<Vec<Self::Dto>>) -> Option<Vec<Self::Entity>> {
        dtos.map(|list| list.into_iter().map(Self::to_entity).collect())
    }

    /// Merges `dto` into `entity`, returning the same record.
    ///
    /// A missing entity is created from the DTO; a missing DTO leaves the
    /// entity as it is.
    fn merge_to_entity(
        dto: Option<Self::Dto>,
        entity: Option<Self::Entity>,
    ) -> Option<Self::Entity> {
        match (dto, entity) {
            (Some(dto), Some(mut entity)) => {
                Self::merge(dto, &mut entity);
                Some(entity)
            }
            (Some(dto), None) => Some(Self::to_entity(dto)),
            (None, entity) => entity,
        }
    }

    /// Applies the owned-record rule to a nested field.
    fn merge_owned(dto: Option<Self::Dto>, target: &mut Option<Self::Entity>) {
        *target = match dto {
            Some(dto) => Self::merge_to_entity(Some(dto), target.take()),
            None => None,
        };
    }
}
