//! Entity-DTO mappers, one per record family.
//!
//! Mappers are stateless unit types implementing
//! [`DtoMapper`](bank_core::DtoMapper) and
//! [`EntityMapper`](bank_core::EntityMapper). Owned records are mapped by
//! delegating to the owned family's mapper, so the nested-null rule holds at
//! every depth.

mod account_details_mapper;
mod audit_mapper;
mod passport_mapper;
mod profile_mapper;
mod registration_mapper;
mod user_mapper;

pub use account_details_mapper::AccountDetailsIdMapper;
pub use audit_mapper::AuditMapper;
pub use passport_mapper::PassportMapper;
pub use profile_mapper::ProfileMapper;
pub use registration_mapper::{ActualRegistrationMapper, RegistrationMapper};
pub use user_mapper::UserMapper;
