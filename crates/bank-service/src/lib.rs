//! # Bank Service
//!
//! Service layer of the authorization and profile applications: DTOs,
//! entity-DTO mappers and the CRUD services built on them.
//!
//! ```text
//! DTO ──validate──► Mapper::to_entity ──► Repository::save ──► Mapper::to_dto
//! DTO ──────────────► Mapper::merge(loaded) ─► Repository::update ─► Mapper::to_dto
//! ```

pub mod audit_service;
pub mod crud_service;
pub mod dto;
pub mod r#impl;
pub mod mappers;
pub mod registry;

pub use audit_service::*;
pub use crud_service::*;
pub use dto::*;
pub use mappers::*;
pub use registry::*;
pub use r#impl::{AuditServiceImpl, CrudServiceImpl};
