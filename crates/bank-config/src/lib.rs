//! # Bank Config
//!
//! Configuration management for the bank services.
//! Supports layered configuration from files, environment variables,
//! and runtime refresh.

mod app_config;
mod loader;
mod service_kind;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use service_kind::*;
pub use validation::*;
