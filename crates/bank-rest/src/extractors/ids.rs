//! Query and path id extractors.

use crate::responses::AppError;
use bank_core::BankError;
use serde::Deserialize;

/// Query parameters of the `read/all` endpoints: `?ids=1,2,3`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdsQuery {
    #[serde(default)]
    pub ids: Option<String>,
}

impl IdsQuery {
    /// Parses the comma-separated id list.
    ///
    /// A missing parameter yields `None`; an empty one an empty list.
    pub fn parse(&self) -> Result<Option<Vec<i64>>, AppError> {
        let Some(raw) = self.ids.as_deref() else {
            return Ok(None);
        };

        raw.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(parse_id)
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }
}

/// Parses a numeric record id taken from a path or query.
pub fn parse_id(id: &str) -> Result<i64, AppError> {
    id.trim()
        .parse()
        .map_err(|_| AppError(BankError::validation(format!("Invalid id: {}", id))))
}
