//! Service implementations.
//!
//! This module contains the concrete implementations of service traits.
//! Trait definitions live in the parent module (e.g. `crud_service.rs`).

pub mod audit_service_impl;
pub mod crud_service_impl;

pub use audit_service_impl::AuditServiceImpl;
pub use crud_service_impl::CrudServiceImpl;
