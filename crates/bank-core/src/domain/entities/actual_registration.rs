use crate::Entity;

/// Address the customer actually lives at.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActualRegistrationEntity {
    pub id: i64,
    pub country: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub locality: Option<String>,
    pub street: Option<String>,
    pub house_number: Option<String>,
    pub house_block: Option<String>,
    pub flat_number: Option<String>,
    /// Postal index.
    pub index: Option<i64>,
}

impl Entity for ActualRegistrationEntity {
    const RESOURCE: &'static str = "ActualRegistration";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}
