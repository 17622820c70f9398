//! Data Transfer Objects for the HTTP layer.
//!
//! Every field is optional: a field missing from an update payload leaves
//! the stored value untouched. Create payloads are checked with
//! [`validator`] before mapping.

mod account_details_dto;
mod audit_dto;
mod passport_dto;
mod profile_dto;
mod registration_dto;
mod user_dto;

pub use account_details_dto::*;
pub use audit_dto::*;
pub use passport_dto::*;
pub use profile_dto::*;
pub use registration_dto::*;
pub use user_dto::*;
