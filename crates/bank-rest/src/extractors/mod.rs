//! Custom Axum extractors.

mod ids;
mod json_body;

pub use ids::*;
pub use json_body::*;
