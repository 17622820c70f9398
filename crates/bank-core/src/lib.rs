//! # Bank Core
//!
//! Core types, traits, and error definitions shared by the authorization
//! and profile services. The domain entities in [`domain`] are the
//! persistence-shaped half of every record family; their transport-shaped
//! counterparts live in `bank-service`.

pub mod domain;
pub mod error;
pub mod result;
pub mod telemetry;
pub mod traits;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use result::*;
pub use traits::*;
pub use validation::*;

// Re-export shaku for dependency injection
pub use shaku::{module, Component, HasComponent, Interface, Module};
