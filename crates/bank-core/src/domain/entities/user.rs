//! User account of the authorization service.

use crate::Entity;

/// Credentials and role bound to a customer profile.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserEntity {
    pub id: i64,
    pub role: Option<String>,
    pub profile_id: Option<i64>,
    pub password: Option<String>,
}

impl Entity for UserEntity {
    const RESOURCE: &'static str = "User";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}
