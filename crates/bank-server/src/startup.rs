//! Server startup utilities.

use bank_config::{AppConfig, ServiceKind};
use tracing::info;

/// Prints the startup banner.
pub fn print_banner(service: ServiceKind) {
    info!(
        r#"
    ____              __
   / __ )____ _____  / /__
  / __  / __ `/ __ \/ //_/
 / /_/ / /_/ / / / / ,<
/_____/\__,_/_/ /_/_/|_|   {} service
    "#,
        service
    );
}

/// Prints server startup information.
pub fn print_startup_info(config: &AppConfig) {
    let addr = config.server.addr();
    let context_path = config.server.normalized_context_path();
    let separator = "=".repeat(60);

    info!("{}", separator);
    info!("Service:     {}", config.app.service);
    info!("Environment: {}", config.app.environment);
    info!("REST API:    http://{}{}", addr, context_path);
    info!("Health:      http://{}/health", addr);
    info!("API Docs:    http://{}/swagger-ui", addr);
    info!("{}", separator);
}
