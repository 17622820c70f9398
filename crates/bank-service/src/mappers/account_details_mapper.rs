//! Account details mapper.

use crate::dto::AccountDetailsIdDto;
use crate::mappers::ProfileMapper;
use bank_core::{AccountDetailsIdEntity, DtoMapper, EntityMapper};

/// Maps between [`AccountDetailsIdEntity`] and [`AccountDetailsIdDto`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountDetailsIdMapper;

impl DtoMapper for AccountDetailsIdMapper {
    type Entity = AccountDetailsIdEntity;
    type Dto = AccountDetailsIdDto;

    fn to_dto(entity: &AccountDetailsIdEntity) -> AccountDetailsIdDto {
        AccountDetailsIdDto {
            id: Some(entity.id),
            account_id: entity.account_id,
            profile: ProfileMapper::to_dto_opt(entity.profile.as_ref()),
        }
    }
}

impl EntityMapper for AccountDetailsIdMapper {
    fn to_entity(dto: AccountDetailsIdDto) -> AccountDetailsIdEntity {
        AccountDetailsIdEntity {
            id: dto.id.unwrap_or_default(),
            account_id: dto.account_id,
            profile: ProfileMapper::to_entity_opt(dto.profile),
        }
    }

    fn merge(dto: AccountDetailsIdDto, entity: &mut AccountDetailsIdEntity) {
        if let Some(id) = dto.id {
            entity.id = id;
        }
        if dto.account_id.is_some() {
            entity.account_id = dto.account_id;
        }
        ProfileMapper::merge_owned(dto.profile, &mut entity.profile);
    }
}
