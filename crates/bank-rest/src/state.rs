//! Shared state for Axum handlers.

use axum::http::StatusCode;
use bank_config::ServiceKind;
use bank_repository::DatabasePoolInterface;
use bank_service::{AuditService, CrudService};
use std::sync::Arc;

/// State of the operational endpoints.
#[derive(Clone)]
pub struct AppState {
    pub service: ServiceKind,
    pub database: Option<Arc<dyn DatabasePoolInterface>>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(service: ServiceKind, database: Option<Arc<dyn DatabasePoolInterface>>) -> Self {
        Self { service, database }
    }
}

/// State of one family's CRUD routes.
pub struct CrudState<D> {
    pub service: Arc<dyn CrudService<D>>,
    /// Status answered by a successful create.
    pub create_status: StatusCode,
}

impl<D> Clone for CrudState<D> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            create_status: self.create_status,
        }
    }
}

/// State of the audit routes.
#[derive(Clone)]
pub struct AuditState {
    pub service: Arc<dyn AuditService>,
}
