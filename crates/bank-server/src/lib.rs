//! # Bank Server Library
//!
//! Dependency injection modules and startup helpers shared by the
//! `bank-server` binary. One binary runs either service; `app.service`
//! selects which.

pub mod di;
pub mod startup;
