//! Customer profile, the root of the profile service's record tree.

use crate::{ActualRegistrationEntity, Entity, PassportEntity};

/// Contact and tax data of a customer.
///
/// Owns the passport (which in turn owns the registration address) and the
/// actual residence address.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileEntity {
    pub id: i64,
    pub phone_number: Option<i64>,
    pub email: Option<String>,
    pub name_on_card: Option<String>,
    pub inn: Option<i64>,
    pub snils: Option<i64>,
    pub passport: Option<PassportEntity>,
    pub actual_registration: Option<ActualRegistrationEntity>,
}

impl Entity for ProfileEntity {
    const RESOURCE: &'static str = "Profile";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}
