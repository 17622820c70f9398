//! Configuration loader with layered sources.

use crate::{AppConfig, ConfigValidator, ServiceKind};
use bank_core::BankError;
use config::{Config, ConfigError, Environment, File};
use std::path::Path;
use tracing::{debug, info, warn};

/// Prefix of environment variable overrides.
pub const ENV_PREFIX: &str = "BANK";

/// Configuration loader with layered sources.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads the configuration from `config_dir`.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/{service}.toml` - Per-service overrides (port, database)
    /// 4. `config/local.toml` - Local overrides
    /// 5. Environment variables with `BANK_` prefix
    ///
    /// `BANK_APP__ENVIRONMENT` and `BANK_APP__SERVICE` pick the layered files.
    pub fn load(config_dir: &str) -> Result<AppConfig, BankError> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment = std::env::var("BANK_APP__ENVIRONMENT")
            .unwrap_or_else(|_| "development".to_string());
        let service = match std::env::var("BANK_APP__SERVICE") {
            Ok(value) => value.parse::<ServiceKind>().map_err(BankError::Configuration)?,
            Err(_) => ServiceKind::default(),
        };

        Self::load_from(config_dir, &environment, service)
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<AppConfig, BankError> {
        Self::load("./config")
    }

    /// Builds the layered configuration for an explicit environment and service.
    pub fn load_from(
        config_dir: &str,
        environment: &str,
        service: ServiceKind,
    ) -> Result<AppConfig, BankError> {
        info!(
            "Loading configuration for environment: {}, service: {}",
            environment, service
        );

        let mut builder = Config::builder()
            .set_default("app.environment", environment)
            .map_err(config_error_to_bank_error)?
            .set_default("app.service", service.as_str())
            .map_err(config_error_to_bank_error)?;

        for name in ["default", environment, service.as_str(), "local"] {
            let path = format!("{}/{}.toml", config_dir, name);
            if Path::new(&path).exists() {
                debug!("Loading config from: {}", path);
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let app_config: AppConfig = builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(config_error_to_bank_error)?;

        Self::validate_config(&app_config)?;

        Ok(app_config)
    }

    /// Validates the configuration, reporting every problem at once.
    fn validate_config(config: &AppConfig) -> Result<(), BankError> {
        if config.app.environment == "production" && config.database.url.contains("bank:bank@") {
            warn!("Using default database credentials in production!");
        }

        ConfigValidator::validate(config).map_err(|errors| {
            let message = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            BankError::Configuration(message)
        })
    }
}

fn config_error_to_bank_error(err: ConfigError) -> BankError {
    BankError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn test_missing_directory_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent");
        let config =
            ConfigLoader::load_from(path.to_str().unwrap(), "test", ServiceKind::Profile).unwrap();
        assert_eq!(config.app.service, ServiceKind::Profile);
        assert_eq!(config.app.environment, "test");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_service_file_overrides_default() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "default.toml", "[server]\nport = 8080\nhost = \"127.0.0.1\"\n");
        write(dir.path(), "profile.toml", "[server]\nport = 8082\n");
        write(dir.path(), "authorization.toml", "[server]\nport = 8081\n");

        let config =
            ConfigLoader::load_from(dir.path().to_str().unwrap(), "test", ServiceKind::Profile)
                .unwrap();
        assert_eq!(config.server.port, 8082);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "default.toml",
            "[database]\nurl = \"mysql://localhost/bank\"\nmin_connections = 20\nmax_connections = 5\n",
        );

        let err = ConfigLoader::load_from(
            dir.path().to_str().unwrap(),
            "test",
            ServiceKind::Authorization,
        )
        .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("postgres://"));
        assert!(message.contains("min (20)"));
    }

    #[test]
    fn test_load_reads_directory() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "default.toml", "[server]\nrequest_timeout_secs = 12\n");

        let config = ConfigLoader::load(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(config.server.request_timeout_secs, 12);
    }
}
