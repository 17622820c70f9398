use crate::{Entity, ProfileEntity};

/// Link between a bank account and the profile that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccountDetailsIdEntity {
    pub id: i64,
    pub account_id: Option<i64>,
    pub profile: Option<ProfileEntity>,
}

impl Entity for AccountDetailsIdEntity {
    const RESOURCE: &'static str = "AccountDetailsId";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}
