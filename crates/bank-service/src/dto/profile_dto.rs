//! Profile DTO, the root of the profile service's record tree.

use crate::dto::{ActualRegistrationDto, PassportDto};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Customer profile as exchanged over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub id: Option<i64>,
    #[validate(required(message = "Phone number is required"))]
    pub phone_number: Option<i64>,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    pub name_on_card: Option<String>,
    pub inn: Option<i64>,
    pub snils: Option<i64>,
    #[validate(nested)]
    pub passport: Option<PassportDto>,
    #[validate(nested)]
    pub actual_registration: Option<ActualRegistrationDto>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use bank_core::{BankError, ValidateExt};

    #[test]
    fn test_invalid_email_fails() {
        let dto = ProfileDto {
            phone_number: Some(79_001_112_233),
            email: Some("not-an-email".to_string()),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_email_is_optional() {
        let dto = ProfileDto {
            phone_number: Some(79_001_112_233),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_nested_failure_reports_dotted_path() {
        let dto = ProfileDto {
            phone_number: Some(79_001_112_233),
            passport: Some(PassportDto {
                series: Some(4510),
                ..Default::default()
            }),
            ..Default::default()
        };

        let err = dto.validate_request().unwrap_err();
        let fields: Vec<String> = err.field_errors().iter().map(|f| f.field.clone()).collect();
        assert!(matches!(err, BankError::Validation { .. }));
        assert_eq!(fields, vec!["passport.number".to_string()]);
    }

    #[test]
    fn test_failure_paths_use_json_names() {
        let dto = ProfileDto {
            actual_registration: Some(ActualRegistrationDto::default()),
            ..Default::default()
        };

        let err = dto.validate_request().unwrap_err();
        let fields: Vec<&str> = err.field_errors().iter().map(|f| f.field.as_str()).collect();
        assert!(fields.contains(&"phoneNumber"));
        assert!(fields.contains(&"actualRegistration.country"));
        assert!(!fields.contains(&"phone_number"));
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(ProfileDto {
            id: Some(1),
            phone_number: Some(79_001_112_233),
            name_on_card: Some("IVAN IVANOV".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(json["phoneNumber"], 79_001_112_233_i64);
        assert_eq!(json["nameOnCard"], "IVAN IVANOV");
        assert!(json["actualRegistration"].is_null());
    }
}
