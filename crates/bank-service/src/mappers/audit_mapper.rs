//! Audit mapper.

use crate::dto::AuditDto;
use bank_core::{AuditEntity, DtoMapper, EntityMapper};

/// Maps between [`AuditEntity`] and [`AuditDto`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AuditMapper;

impl DtoMapper for AuditMapper {
    type Entity = AuditEntity;
    type Dto = AuditDto;

    fn to_dto(entity: &AuditEntity) -> AuditDto {
        AuditDto {
            id: Some(entity.id),
            entity_type: entity.entity_type.clone(),
            operation_type: entity.operation_type.clone(),
            created_by: entity.created_by.clone(),
            modified_by: entity.modified_by.clone(),
            created_at: entity.created_at,
            modified_at: entity.modified_at,
            new_entity_json: entity.new_entity_json.clone(),
            entity_json: entity.entity_json.clone(),
        }
    }
}

impl EntityMapper for AuditMapper {
    fn to_entity(dto: AuditDto) -> AuditEntity {
        AuditEntity {
            id: dto.id.unwrap_or_default(),
            entity_type: dto.entity_type,
            operation_type: dto.operation_type,
            created_by: dto.created_by,
            modified_by: dto.modified_by,
            created_at: dto.created_at,
            modified_at: dto.modified_at,
            new_entity_json: dto.new_entity_json,
            entity_json: dto.entity_json,
        }
    }

    fn merge(dto: AuditDto, entity: &mut AuditEntity) {
        if let Some(id) = dto.id {
            entity.id = id;
        }
        if dto.entity_type.is_some() {
            entity.entity_type = dto.entity_type;
        }
        if dto.operation_type.is_some() {
            entity.operation_type = dto.operation_type;
        }
        if dto.created_by.is_some() {
            entity.created_by = dto.created_by;
        }
        if dto.modified_by.is_some() {
            entity.modified_by = dto.modified_by;
        }
        if dto.created_at.is_some() {
            entity.created_at = dto.created_at;
        }
        if dto.modified_at.is_some() {
            entity.modified_at = dto.modified_at;
        }
        if dto.new_entity_json.is_some() {
            entity.new_entity_json = dto.new_entity_json;
        }
        if dto.entity_json.is_some() {
            entity.entity_json = dto.entity_json;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entity() -> AuditEntity {
        let at = NaiveDate::from_ymd_opt(2024, 3, 1)
            .and_then(|d| d.and_hms_opt(12, 30, 0));
        AuditEntity {
            id: 3,
            entity_type: Some("Profile".to_string()),
            operation_type: Some("UPDATE".to_string()),
            created_by: Some("system".to_string()),
            modified_by: Some("operator".to_string()),
            created_at: at,
            modified_at: at,
            new_entity_json: Some(r#"{"email":"new@example.com"}"#.to_string()),
            entity_json: Some(r#"{"email":"old@example.com"}"#.to_string()),
        }
    }

    #[test]
    fn test_round_trip() {
        let original = entity();
        assert_eq!(AuditMapper::to_entity(AuditMapper::to_dto(&original)), original);
    }

    #[test]
    fn test_merge_keeps_timestamps_when_absent() {
        let mut audit = entity();
        AuditMapper::merge(
            AuditDto {
                modified_by: Some("auditor".to_string()),
                ..Default::default()
            },
            &mut audit,
        );
        assert_eq!(audit.modified_by.as_deref(), Some("auditor"));
        assert_eq!(audit.created_at, entity().created_at);
        assert_eq!(audit.id, 3);
    }
}
