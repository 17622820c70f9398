//! REST API controllers.

pub mod audit_controller;
pub mod crud_controller;
pub mod health_controller;

pub use health_controller::*;
