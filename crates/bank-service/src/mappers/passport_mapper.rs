//! Passport mapper.

use crate::dto::PassportDto;
use crate::mappers::RegistrationMapper;
use bank_core::{DtoMapper, EntityMapper, PassportEntity};

/// Maps between [`PassportEntity`] and [`PassportDto`], including the
/// registration address.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassportMapper;

impl DtoMapper for PassportMapper {
    type Entity = PassportEntity;
    type Dto = PassportDto;

    fn to_dto(entity: &PassportEntity) -> PassportDto {
        PassportDto {
            id: Some(entity.id),
            series: entity.series,
            number: entity.number,
            last_name: entity.last_name.clone(),
            first_name: entity.first_name.clone(),
            middle_name: entity.middle_name.clone(),
            gender: entity.gender.clone(),
            birth_date: entity.birth_date,
            birth_place: entity.birth_place.clone(),
            issued_by: entity.issued_by.clone(),
            date_of_issue: entity.date_of_issue,
            division_code: entity.division_code,
            expiration_date: entity.expiration_date,
            registration: RegistrationMapper::to_dto_opt(entity.registration.as_ref()),
        }
    }
}

impl EntityMapper for PassportMapper {
    fn to_entity(dto: PassportDto) -> PassportEntity {
        PassportEntity {
            id: dto.id.unwrap_or_default(),
            series: dto.series,
            number: dto.number,
            last_name: dto.last_name,
            first_name: dto.first_name,
            middle_name: dto.middle_name,
            gender: dto.gender,
            birth_date: dto.birth_date,
            birth_place: dto.birth_place,
            issued_by: dto.issued_by,
            date_of_issue: dto.date_of_issue,
            division_code: dto.division_code,
            expiration_date: dto.expiration_date,
            registration: RegistrationMapper::to_entity_opt(dto.registration),
        }
    }

    fn merge(dto: PassportDto, entity: &mut PassportEntity) {
        if let Some(id) = dto.id {
            entity.id = id;
        }
        if dto.series.is_some() {
            entity.series = dto.series;
        }
        if dto.number.is_some() {
            entity.number = dto.number;
        }
        if dto.last_name.is_some() {
            entity.last_name = dto.last_name;
        }
        if dto.first_name.is_some() {
            entity.first_name = dto.first_name;
        }
        if dto.middle_name.is_some() {
            entity.middle_name = dto.middle_name;
        }
        if dto.gender.is_some() {
            entity.gender = dto.gender;
        }
        if dto.birth_date.is_some() {
            entity.birth_date = dto.birth_date;
        }
        if dto.birth_place.is_some() {
            entity.birth_place = dto.birth_place;
        }
        if dto.issued_by.is_some() {
            entity.issued_by = dto.issued_by;
        }
        if dto.date_of_issue.is_some() {
            entity.date_of_issue = dto.date_of_issue;
        }
        if dto.division_code.is_some() {
            entity.division_code = dto.division_code;
        }
        if dto.expiration_date.is_some() {
            entity.expiration_date = dto.expiration_date;
        }
        RegistrationMapper::merge_owned(dto.registration, &mut entity.registration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::RegistrationDto;
    use bank_core::RegistrationEntity;
    use chrono::NaiveDate;

    fn passport() -> PassportEntity {
        PassportEntity {
            id: 2,
            series: Some(4510),
            number: Some(123_456),
            last_name: Some("Ivanov".to_string()),
            first_name: Some("Ivan".to_string()),
            middle_name: Some("Ivanovich".to_string()),
            gender: Some("M".to_string()),
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 17),
            birth_place: Some("Moscow".to_string()),
            issued_by: Some("Department of Internal Affairs".to_string()),
            date_of_issue: NaiveDate::from_ymd_opt(2010, 6, 1),
            division_code: Some(770_001),
            expiration_date: NaiveDate::from_ymd_opt(2035, 5, 17),
            registration: Some(RegistrationEntity {
                id: 7,
                country: Some("Russia".to_string()),
                city: Some("Moscow".to_string()),
                ..Default::default()
            }),
        }
    }

    #[test]
    fn test_round_trip_keeps_registration() {
        let original = passport();
        let dto = PassportMapper::to_dto(&original);
        assert_eq!(dto.registration.as_ref().and_then(|r| r.id), Some(7));
        assert_eq!(PassportMapper::to_entity(dto), original);
    }

    #[test]
    fn test_merge_without_registration_clears_it() {
        let mut entity = passport();
        PassportMapper::merge(
            PassportDto {
                first_name: Some("Petr".to_string()),
                ..Default::default()
            },
            &mut entity,
        );
        assert_eq!(entity.first_name.as_deref(), Some("Petr"));
        assert_eq!(entity.series, Some(4510));
        assert!(entity.registration.is_none());
    }

    #[test]
    fn test_merge_into_existing_registration_keeps_its_id() {
        let mut entity = passport();
        PassportMapper::merge(
            PassportDto {
                registration: Some(RegistrationDto {
                    street: Some("Arbat".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            },
            &mut entity,
        );

        let registration = entity.registration.unwrap();
        assert_eq!(registration.id, 7);
        assert_eq!(registration.street.as_deref(), Some("Arbat"));
        assert_eq!(registration.city.as_deref(), Some("Moscow"));
    }
}
