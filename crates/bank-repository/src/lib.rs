//! # Bank Repository
//!
//! Data access for both services.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn ProfileRepository>   (family interface, shaku component)
//! PgProfileRepository               (PostgreSQL / SQLx)
//!   ↓  passport::store, address::fetch ...  (owned-record helpers)
//! PostgreSQL
//! ```
//!
//! Reads load the whole owned-record tree. Writes run in one transaction:
//! owned records without an id are inserted, owned records with an id are
//! updated, and the parent row references them by id.

pub mod pool;
pub mod postgres;
pub mod traits;

#[cfg(any(test, feature = "testing"))]
pub mod memory;

pub use pool::*;
pub use postgres::*;
pub use traits::*;

#[cfg(any(test, feature = "testing"))]
pub use memory::InMemoryRepository;
