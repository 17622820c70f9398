//! Audit controller.

use crate::{
    extractors::parse_id,
    responses::{ok, ApiResult},
    state::AuditState,
};
use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};
use bank_service::{AuditDto, AuditService};
use std::sync::Arc;
use tracing::debug;

/// Creates the audit router.
pub fn router(service: Arc<dyn AuditService>) -> Router {
    Router::new()
        .route("/:id", get(get_audit))
        .with_state(AuditState { service })
}

/// Get an audit row by ID.
pub async fn get_audit(
    State(state): State<AuditState>,
    Path(id): Path<String>,
) -> ApiResult<AuditDto> {
    debug!("Get audit request: {}", id);

    let id = parse_id(&id)?;
    ok(state.service.find_by_id(id).await?)
}
