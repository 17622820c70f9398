//! User mapper.

use crate::dto::UserDto;
use bank_core::{DtoMapper, EntityMapper, UserEntity};

/// Maps between [`UserEntity`] and [`UserDto`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UserMapper;

impl DtoMapper for UserMapper {
    type Entity = UserEntity;
    type Dto = UserDto;

    fn to_dto(entity: &UserEntity) -> UserDto {
        UserDto {
            id: Some(entity.id),
            role: entity.role.clone(),
            profile_id: entity.profile_id,
            password: entity.password.clone(),
        }
    }
}

impl EntityMapper for UserMapper {
    fn to_entity(dto: UserDto) -> UserEntity {
        UserEntity {
            id: dto.id.unwrap_or_default(),
            role: dto.role,
            profile_id: dto.profile_id,
            password: dto.password,
        }
    }

    fn merge(dto: UserDto, entity: &mut UserEntity) {
        if let Some(id) = dto.id {
            entity.id = id;
        }
        if dto.role.is_some() {
            entity.role = dto.role;
        }
        if dto.profile_id.is_some() {
            entity.profile_id = dto.profile_id;
        }
        if dto.password.is_some() {
            entity.password = dto.password;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity() -> UserEntity {
        UserEntity {
            id: 1,
            role: Some("USER".to_string()),
            profile_id: Some(10),
            password: Some("secret".to_string()),
        }
    }

    #[test]
    fn test_round_trip() {
        let original = entity();
        assert_eq!(UserMapper::to_entity(UserMapper::to_dto(&original)), original);
    }

    #[test]
    fn test_absent_inputs_stay_absent() {
        assert_eq!(UserMapper::to_dto_opt(None), None);
        assert_eq!(UserMapper::to_entity_opt(None), None);
        assert_eq!(UserMapper::to_dto_list(None), None);
        assert_eq!(UserMapper::to_dto_list(Some(&[][..])), Some(vec![]));
        assert_eq!(UserMapper::merge_to_entity(None, None), None);
    }

    #[test]
    fn test_to_entity_without_id_is_unassigned() {
        let user = UserMapper::to_entity(UserDto {
            role: Some("ADMIN".to_string()),
            ..Default::default()
        });
        assert_eq!(user.id, 0);
        assert_eq!(user.role.as_deref(), Some("ADMIN"));
    }

    #[test]
    fn test_merge_overwrites_present_fields_only() {
        let merged = UserMapper::merge_to_entity(
            Some(UserDto {
                role: Some("ADMIN".to_string()),
                ..Default::default()
            }),
            Some(entity()),
        )
        .unwrap();

        assert_eq!(merged.id, 1);
        assert_eq!(merged.role.as_deref(), Some("ADMIN"));
        assert_eq!(merged.profile_id, Some(10));
        assert_eq!(merged.password.as_deref(), Some("secret"));
    }

    #[test]
    fn test_merge_adopts_explicit_id() {
        let mut user = entity();
        UserMapper::merge(
            UserDto {
                id: Some(5),
                ..Default::default()
            },
            &mut user,
        );
        assert_eq!(user.id, 5);
    }

    #[test]
    fn test_list_keeps_order_and_length() {
        let users = vec![entity(), UserEntity { id: 2, ..entity() }];
        let dtos = UserMapper::to_dto_list(Some(users.as_slice())).unwrap();
        let ids: Vec<Option<i64>> = dtos.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![Some(1), Some(2)]);
    }
}
