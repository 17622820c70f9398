//! Domain entities.

mod account_details;
mod actual_registration;
mod audit;
mod passport;
mod profile;
mod registration;
mod user;

pub use account_details::AccountDetailsIdEntity;
pub use actual_registration::ActualRegistrationEntity;
pub use audit::AuditEntity;
pub use passport::PassportEntity;
pub use profile::ProfileEntity;
pub use registration::RegistrationEntity;
pub use user::UserEntity;
