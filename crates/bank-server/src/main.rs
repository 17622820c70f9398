//! # Bank Server
//!
//! Main entry point running either the authorization or the profile
//! service, selected by `app.service` (`BANK_APP__SERVICE`).

use axum::Router;
use bank_config::{AppConfig, ConfigLoader, ServiceKind};
use bank_core::{telemetry, BankError, BankResult};
use bank_repository::DatabasePoolInterface;
use bank_rest::{authorization_router, profile_router, AppState};
use bank_server::di::{self, DatabaseResolver};
use bank_server::startup;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match ConfigLoader::from_default_location() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = telemetry::init_logging(
        &config.observability.log_level,
        config.observability.log_format,
    ) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    startup::print_banner(config.app.service);
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(config).await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> BankResult<()> {
    let service = config.app.service;

    let (router, database) = match service {
        ServiceKind::Authorization => {
            let module = di::build_authorization_module(&config.database).await?;
            let database = module.database_pool();
            migrate(&config, database.as_ref()).await?;

            let services = di::authorization_services(&module);
            let state = AppState::new(service, Some(Arc::clone(&database)));
            (authorization_router(&services, state, &config.server), database)
        }
        ServiceKind::Profile => {
            let module = di::build_profile_module(&config.database).await?;
            let database = module.database_pool();
            migrate(&config, database.as_ref()).await?;

            let services = di::profile_services(&module);
            let state = AppState::new(service, Some(Arc::clone(&database)));
            (profile_router(&services, state, &config.server), database)
        }
    };

    let result = serve(router, &config).await;
    database.close().await;
    result?;

    info!("Server shutdown complete");
    Ok(())
}

async fn migrate(config: &AppConfig, database: &dyn DatabasePoolInterface) -> BankResult<()> {
    if config.database.run_migrations {
        database.run_migrations(config.app.service).await
    } else {
        info!("Skipping database migrations");
        Ok(())
    }
}

async fn serve(router: Router, config: &AppConfig) -> BankResult<()> {
    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| BankError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    startup::print_startup_info(config);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| BankError::internal(format!("REST server error: {}", e)))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install terminate handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
