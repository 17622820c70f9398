//! Passport DTO.

use crate::dto::RegistrationDto;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Passport as exchanged over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PassportDto {
    pub id: Option<i64>,
    #[validate(required(message = "Series is required"))]
    pub series: Option<i32>,
    #[validate(required(message = "Number is required"))]
    pub number: Option<i64>,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub gender: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub birth_place: Option<String>,
    pub issued_by: Option<String>,
    pub date_of_issue: Option<NaiveDate>,
    pub division_code: Option<i32>,
    pub expiration_date: Option<NaiveDate>,
    #[validate(nested)]
    pub registration: Option<RegistrationDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dates_use_iso_format() {
        let dto: PassportDto = serde_json::from_str(
            r#"{"series":4510,"number":123456,"birthDate":"1990-05-17","dateOfIssue":"2010-06-01"}"#,
        )
        .unwrap();
        assert_eq!(dto.birth_date, NaiveDate::from_ymd_opt(1990, 5, 17));
        assert_eq!(dto.date_of_issue, NaiveDate::from_ymd_opt(2010, 6, 1));
        assert!(dto.registration.is_none());
    }

    #[test]
    fn test_nested_registration_is_validated() {
        let dto = PassportDto {
            series: Some(4510),
            number: Some(123_456),
            registration: Some(RegistrationDto::default()),
            ..Default::default()
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.errors().contains_key("registration"));
    }
}
