//! Mappers for the two address families.

use crate::dto::{ActualRegistrationDto, RegistrationDto};
use bank_core::{ActualRegistrationEntity, DtoMapper, EntityMapper, RegistrationEntity};

/// Maps between [`RegistrationEntity`] and [`RegistrationDto`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistrationMapper;

/// Maps between [`ActualRegistrationEntity`] and [`ActualRegistrationDto`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ActualRegistrationMapper;

macro_rules! address_mapper {
    ($mapper:ty, $entity:ident, $dto:ident) => {
        impl DtoMapper for $mapper {
            type Entity = $entity;
            type Dto = $dto;

            fn to_dto(entity: &$entity) -> $dto {
                $dto {
                    id: Some(entity.id),
                    country: entity.country.clone(),
                    region: entity.region.clone(),
                    city: entity.city.clone(),
                    district: entity.district.clone(),
                    locality: entity.locality.clone(),
                    street: entity.street.clone(),
                    house_number: entity.house_number.clone(),
                    house_block: entity.house_block.clone(),
                    flat_number: entity.flat_number.clone(),
                    index: entity.index,
                }
            }
        }

        impl EntityMapper for $mapper {
            fn to_entity(dto: $dto) -> $entity {
                $entity {
                    id: dto.id.unwrap_or_default(),
                    country: dto.country,
                    region: dto.region,
                    city: dto.city,
                    district: dto.district,
                    locality: dto.locality,
                    street: dto.street,
                    house_number: dto.house_number,
                    house_block: dto.house_block,
                    flat_number: dto.flat_number,
                    index: dto.index,
                }
            }

            fn merge(dto: $dto, entity: &mut $entity) {
                if let Some(id) = dto.id {
                    entity.id = id;
                }
                if dto.country.is_some() {
                    entity.country = dto.country;
                }
                if dto.region.is_some() {
                    entity.region = dto.region;
                }
                if dto.city.is_some() {
                    entity.city = dto.city;
                }
                if dto.district.is_some() {
                    entity.district = dto.district;
                }
                if dto.locality.is_some() {
                    entity.locality = dto.locality;
                }
                if dto.street.is_some() {
                    entity.street = dto.street;
                }
                if dto.house_number.is_some() {
                    entity.house_number = dto.house_number;
                }
                if dto.house_block.is_some() {
                    entity.house_block = dto.house_block;
                }
                if dto.flat_number.is_some() {
                    entity.flat_number = dto.flat_number;
                }
                if dto.index.is_some() {
                    entity.index = dto.index;
                }
            }
        }
    };
}

address_mapper!(RegistrationMapper, RegistrationEntity, RegistrationDto);
address_mapper!(ActualRegistrationMapper, ActualRegistrationEntity, ActualRegistrationDto);

#[cfg(test)]
mod tests {
    use super::*;

    fn registration() -> RegistrationEntity {
        RegistrationEntity {
            id: 4,
            country: Some("Russia".to_string()),
            region: Some("Moscow Oblast".to_string()),
            city: Some("Moscow".to_string()),
            district: Some("Tverskoy".to_string()),
            locality: None,
            street: Some("Tverskaya".to_string()),
            house_number: Some("1".to_string()),
            house_block: None,
            flat_number: Some("15".to_string()),
            index: Some(125_009),
        }
    }

    #[test]
    fn test_round_trip() {
        let original = registration();
        let dto = RegistrationMapper::to_dto(&original);
        assert_eq!(dto.index, Some(125_009));
        assert_eq!(RegistrationMapper::to_entity(dto), original);
    }

    #[test]
    fn test_merge_leaves_absent_fields() {
        let mut entity = registration();
        RegistrationMapper::merge(
            RegistrationDto {
                street: Some("Arbat".to_string()),
                ..Default::default()
            },
            &mut entity,
        );
        assert_eq!(entity.street.as_deref(), Some("Arbat"));
        assert_eq!(entity.city.as_deref(), Some("Moscow"));
        assert_eq!(entity.id, 4);
    }

    #[test]
    fn test_actual_registration_created_when_missing() {
        let created = ActualRegistrationMapper::merge_to_entity(
            Some(ActualRegistrationDto {
                country: Some("Russia".to_string()),
                ..Default::default()
            }),
            None,
        )
        .unwrap();
        assert_eq!(created.id, 0);
        assert_eq!(created.country.as_deref(), Some("Russia"));
    }

    #[test]
    fn test_merge_without_dto_keeps_entity() {
        let entity = ActualRegistrationEntity {
            id: 9,
            city: Some("Kazan".to_string()),
            ..Default::default()
        };
        let kept = ActualRegistrationMapper::merge_to_entity(None, Some(entity.clone()));
        assert_eq!(kept, Some(entity));
    }
}
