//! # Bank REST
//!
//! HTTP layer of the authorization and profile services using Axum.
//! Every record family is served by the same generic CRUD controller;
//! errors are rendered from [`bank_core::BankError`] in one place.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
