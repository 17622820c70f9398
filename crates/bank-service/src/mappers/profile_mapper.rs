//! Profile mapper.

use crate::dto::ProfileDto;
use crate::mappers::{ActualRegistrationMapper, PassportMapper};
use bank_core::{DtoMapper, EntityMapper, ProfileEntity};

/// Maps between [`ProfileEntity`] and [`ProfileDto`] with the whole owned
/// tree (passport, its registration, actual address).
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileMapper;

impl DtoMapper for ProfileMapper {
    type Entity = ProfileEntity;
    type Dto = ProfileDto;

    fn to_dto(entity: &ProfileEntity) -> ProfileDto {
        ProfileDto {
            id: Some(entity.id),
            phone_number: entity.phone_number,
            email: entity.email.clone(),
            name_on_card: entity.name_on_card.clone(),
            inn: entity.inn,
            snils: entity.snils,
            passport: PassportMapper::to_dto_opt(entity.passport.as_ref()),
            actual_registration: ActualRegistrationMapper::to_dto_opt(
                entity.actual_registration.as_ref(),
            ),
        }
    }
}

impl EntityMapper for ProfileMapper {
    fn to_entity(dto: ProfileDto) -> ProfileEntity {
        ProfileEntity {
            id: dto.id.unwrap_or_default(),
            phone_number: dto.phone_number,
            email: dto.email,
            name_on_card: dto.name_on_card,
            inn: dto.inn,
            snils: dto.snils,
            passport: PassportMapper::to_entity_opt(dto.passport),
            actual_registration: ActualRegistrationMapper::to_entity_opt(dto.actual_registration),
        }
    }

    fn merge(dto: ProfileDto, entity: &mut ProfileEntity) {
        if let Some(id) = dto.id {
            entity.id = id;
        }
        if dto.phone_number.is_some() {
            entity.phone_number = dto.phone_number;
        }
        if dto.email.is_some() {
            entity.email = dto.email;
        }
        if dto.name_on_card.is_some() {
            entity.name_on_card = dto.name_on_card;
        }
        if dto.inn.is_some() {
            entity.inn = dto.inn;
        }
        if dto.snils.is_some() {
            entity.snils = dto.snils;
        }
        PassportMapper::merge_owned(dto.passport, &mut entity.passport);
        ActualRegistrationMapper::merge_owned(
            dto.actual_registration,
            &mut entity.actual_registration,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::{ActualRegistrationDto, PassportDto, RegistrationDto};
    use bank_core::{ActualRegistrationEntity, PassportEntity, RegistrationEntity};

    fn profile() -> ProfileEntity {
        ProfileEntity {
            id: 1,
            phone_number: Some(79_001_112_233),
            email: Some("ivan@example.com".to_string()),
            name_on_card: Some("IVAN IVANOV".to_string()),
            inn: Some(7_707_083_893),
            snils: Some(11_223_344_595),
            passport: Some(PassportEntity {
                id: 2,
                series: Some(4510),
                number: Some(123_456),
                registration: Some(RegistrationEntity {
                    id: 3,
                    country: Some("Russia".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            actual_registration: Some(ActualRegistrationEntity {
                id: 4,
                country: Some("Russia".to_string()),
                city: Some("Kazan".to_string()),
                ..Default::default()
            }),
        }
    }

    /// A DTO that restates the whole tree so nothing is cleared.
    fn full_patch() -> ProfileDto {
        ProfileDto {
            passport: Some(PassportDto {
                registration: Some(RegistrationDto::default()),
                ..Default::default()
            }),
            actual_registration: Some(ActualRegistrationDto::default()),
            ..Default::default()
        }
    }

    #[test]
    fn test_round_trip_whole_tree() {
        let original = profile();
        assert_eq!(ProfileMapper::to_entity(ProfileMapper::to_dto(&original)), original);
    }

    #[test]
    fn test_dto_round_trip_preserves_nested_fields() {
        let dto = ProfileMapper::to_dto(&profile());
        let again = ProfileMapper::to_dto(&ProfileMapper::to_entity(dto.clone()));
        assert_eq!(again, dto);
        assert_eq!(
            again
                .passport
                .and_then(|p| p.registration)
                .and_then(|r| r.country),
            Some("Russia".to_string())
        );
    }

    #[test]
    fn test_absent_inputs_stay_absent() {
        assert_eq!(ProfileMapper::to_dto_opt(None), None);
        assert_eq!(ProfileMapper::to_entity_opt(None), None);
        assert_eq!(ProfileMapper::to_entity_list(None), None);
        assert_eq!(ProfileMapper::to_entity_list(Some(vec![])), Some(vec![]));
        assert_eq!(ProfileMapper::merge_to_entity(None, None), None);
    }

    #[test]
    fn test_full_patch_changes_nothing() {
        let merged = ProfileMapper::merge_to_entity(Some(full_patch()), Some(profile()));
        assert_eq!(merged, Some(profile()));
    }

    #[test]
    fn test_null_passport_is_cleared() {
        let patch = ProfileDto {
            passport: None,
            ..full_patch()
        };
        let merged = ProfileMapper::merge_to_entity(Some(patch), Some(profile())).unwrap();
        assert!(merged.passport.is_none());
        assert!(merged.actual_registration.is_some());
    }

    #[test]
    fn test_null_registration_is_cleared_two_levels_down() {
        let patch = ProfileDto {
            passport: Some(PassportDto::default()),
            ..full_patch()
        };
        let merged = ProfileMapper::merge_to_entity(Some(patch), Some(profile())).unwrap();

        let passport = merged.passport.unwrap();
        assert_eq!(passport.id, 2);
        assert_eq!(passport.series, Some(4510));
        assert!(passport.registration.is_none());
    }

    #[test]
    fn test_merge_keeps_identity_and_untouched_scalars() {
        let patch = ProfileDto {
            email: Some("new@example.com".to_string()),
            ..full_patch()
        };
        let merged = ProfileMapper::merge_to_entity(Some(patch), Some(profile())).unwrap();

        assert_eq!(merged.id, 1);
        assert_eq!(merged.email.as_deref(), Some("new@example.com"));
        assert_eq!(merged.phone_number, Some(79_001_112_233));
        assert_eq!(merged.actual_registration.map(|a| a.id), Some(4));
    }

    #[test]
    fn test_new_nested_record_is_created_without_id() {
        let mut entity = ProfileEntity {
            id: 1,
            ..Default::default()
        };
        ProfileMapper::merge(
            ProfileDto {
                actual_registration: Some(ActualRegistrationDto {
                    city: Some("Sochi".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            },
            &mut entity,
        );

        let address = entity.actual_registration.unwrap();
        assert_eq!(address.id, 0);
        assert_eq!(address.city.as_deref(), Some("Sochi"));
    }
}
