//! Domain entities for both services.
//!
//! Every entity mirrors one storage row. Scalar columns are nullable, the
//! identifier is `0` until the store assigns one, and owned records are
//! embedded by value.

pub mod entities;

pub use entities::*;
