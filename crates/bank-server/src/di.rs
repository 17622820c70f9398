//! Dependency injection module using Shaku.
//!
//! Each service gets its own module wiring the database pool into the
//! PostgreSQL repositories it owns:
//! - `AuthorizationModule`: users and audit
//! - `ProfileModule`: the profile record tree, account details and audit

use bank_config::DatabaseConfig;
use bank_core::{module, BankResult, HasComponent};
use bank_repository::{
    AccountDetailsIdRepository, ActualRegistrationRepository, AuditRepository, DatabasePool,
    DatabasePoolInterface, DatabasePoolParameters, PassportRepository, PgAccountDetailsIdRepository,
    PgActualRegistrationRepository, PgAuditRepository, PgPassportRepository, PgProfileRepository,
    PgRegistrationRepository, PgUserRepository, ProfileRepository, RegistrationRepository,
    UserRepository,
};
use bank_service::{AuthorizationServices, ProfileRepositories, ProfileServices};
use sqlx::PgPool;
use std::sync::Arc;

// Authorization service module: users and their audit trail.
module! {
    pub AuthorizationModule {
        components = [
            DatabasePool,
            PgUserRepository,
            PgAuditRepository,
        ],
        providers = [],
    }
}

// Profile service module: every record family of the profile tree.
module! {
    pub ProfileModule {
        components = [
            DatabasePool,
            PgProfileRepository,
            PgPassportRepository,
            PgRegistrationRepository,
            PgActualRegistrationRepository,
            PgAccountDetailsIdRepository,
            PgAuditRepository,
        ],
        providers = [],
    }
}

/// Connects the database and builds the authorization module.
pub async fn build_authorization_module(
    db_config: &DatabaseConfig,
) -> BankResult<Arc<AuthorizationModule>> {
    let db_pool = DatabasePool::connect(db_config).await?;
    Ok(authorization_module_with_pool(db_pool.inner().clone()))
}

/// Builds the authorization module around an existing pool.
#[must_use]
pub fn authorization_module_with_pool(pool: PgPool) -> Arc<AuthorizationModule> {
    let module = AuthorizationModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters { pool })
        .build();

    Arc::new(module)
}

/// Connects the database and builds the profile module.
pub async fn build_profile_module(db_config: &DatabaseConfig) -> BankResult<Arc<ProfileModule>> {
    let db_pool = DatabasePool::connect(db_config).await?;
    Ok(profile_module_with_pool(db_pool.inner().clone()))
}

/// Builds the profile module around an existing pool.
#[must_use]
pub fn profile_module_with_pool(pool: PgPool) -> Arc<ProfileModule> {
    let module = ProfileModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters { pool })
        .build();

    Arc::new(module)
}

/// Trait for resolving the database pool from a module.
pub trait DatabaseResolver {
    /// Resolves the database pool from the module.
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface>;
}

impl DatabaseResolver for AuthorizationModule {
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface> {
        self.resolve()
    }
}

impl DatabaseResolver for ProfileModule {
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface> {
        self.resolve()
    }
}

/// Builds the authorization services from the module's repositories.
#[must_use]
pub fn authorization_services(module: &AuthorizationModule) -> AuthorizationServices {
    let users: Arc<dyn UserRepository> = module.resolve();
    let audit: Arc<dyn AuditRepository> = module.resolve();
    AuthorizationServices::new(users, audit)
}

/// Builds the profile services from the module's repositories.
#[must_use]
pub fn profile_services(module: &ProfileModule) -> ProfileServices {
    let profiles: Arc<dyn ProfileRepository> = module.resolve();
    let passports: Arc<dyn PassportRepository> = module.resolve();
    let registrations: Arc<dyn RegistrationRepository> = module.resolve();
    let actual_registrations: Arc<dyn ActualRegistrationRepository> = module.resolve();
    let account_details: Arc<dyn AccountDetailsIdRepository> = module.resolve();
    let audit: Arc<dyn AuditRepository> = module.resolve();

    ProfileServices::new(ProfileRepositories {
        profiles,
        passports,
        registrations,
        actual_registrations,
        account_details,
        audit,
    })
}
