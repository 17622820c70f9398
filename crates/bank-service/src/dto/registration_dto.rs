//! Address DTOs.
//!
//! The passport registration address and the actual residence address share
//! one field set.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Registration address stamped in a passport.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDto {
    pub id: Option<i64>,
    #[validate(required(message = "Country is required"))]
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

/// Address the customer actually lives at.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActualRegistrationDto {
    pub id: Option<i64>,
    #[validate(required(message = "Country is required"))]
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_is_required() {
        let dto = RegistrationDto {
            city: Some("Moscow".to_string()),
            ..Default::default()
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("country"));
    }

    #[test]
    fn test_house_fields_are_camel_case() {
        let dto: ActualRegistrationDto = serde_json::from_str(
            r#"{"country":"Russia","houseNumber":"12","houseBlock":"A","flatNumber":"3","index":420000}"#,
        )
        .unwrap();
        assert_eq!(dto.house_number.as_deref(), Some("12"));
        assert_eq!(dto.house_block.as_deref(), Some("A"));
        assert_eq!(dto.flat_number.as_deref(), Some("3"));
        assert_eq!(dto.index, Some(420_000));
        assert!(dto.validate().is_ok());
    }
}
