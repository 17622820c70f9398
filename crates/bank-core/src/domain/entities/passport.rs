//! Identity document of a customer.

use crate::{Entity, RegistrationEntity};
use chrono::NaiveDate;

/// Passport data; owns the registration address stamped in it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PassportEntity {
    pub id: i64,
    pub series: Option<i32>,
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
    pub registration: Option<RegistrationEntity>,
}

impl Entity for PassportEntity {
    const RESOURCE: &'static str = "Passport";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}
