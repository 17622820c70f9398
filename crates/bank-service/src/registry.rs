//! Per-service bundles of ready-to-use services.
//!
//! Each bundle is built from the repository interfaces resolved from the
//! service's DI module.

use crate::audit_service::AuditService;
use crate::crud_service::{CrudService, FindAllMode};
use crate::dto::{
    AccountDetailsIdDto, ActualRegistrationDto, PassportDto, ProfileDto, RegistrationDto, UserDto,
};
use crate::mappers::{
    AccountDetailsIdMapper, ActualRegistrationMapper, PassportMapper, ProfileMapper,
    RegistrationMapper, UserMapper,
};
use crate::r#impl::{AuditServiceImpl, CrudServiceImpl};
use bank_repository::{
    AccountDetailsIdRepository, ActualRegistrationRepository, AuditRepository, PassportRepository,
    ProfileRepository, RegistrationRepository, UserRepository,
};
use std::sync::Arc;

/// Services of the authorization application.
#[derive(Clone)]
pub struct AuthorizationServices {
    pub users: Arc<dyn CrudService<UserDto>>,
    pub audit: Arc<dyn AuditService>,
}

impl AuthorizationServices {
    /// Users keep request order in list lookups.
    pub fn new(users: Arc<dyn UserRepository>, audit: Arc<dyn AuditRepository>) -> Self {
        Self {
            users: Arc::new(CrudServiceImpl::<UserMapper, dyn UserRepository>::new(
                users,
                FindAllMode::RequestOrder,
            )),
            audit: Arc::new(AuditServiceImpl::new(audit)),
        }
    }
}

/// Repositories of the profile application.
pub struct ProfileRepositories {
    pub profiles: Arc<dyn ProfileRepository>,
    pub passports: Arc<dyn PassportRepository>,
    pub registrations: Arc<dyn RegistrationRepository>,
    pub actual_registrations: Arc<dyn ActualRegistrationRepository>,
    pub account_details: Arc<dyn AccountDetailsIdRepository>,
    pub audit: Arc<dyn AuditRepository>,
}

/// Services of the profile application.
#[derive(Clone)]
pub struct ProfileServices {
    pub profiles: Arc<dyn CrudService<ProfileDto>>,
    pub passports: Arc<dyn CrudService<PassportDto>>,
    pub registrations: Arc<dyn CrudService<RegistrationDto>>,
    pub actual_registrations: Arc<dyn CrudService<ActualRegistrationDto>>,
    pub account_details: Arc<dyn CrudService<AccountDetailsIdDto>>,
    pub audit: Arc<dyn AuditService>,
}

impl ProfileServices {
    /// Every profile family answers list lookups in storage order.
    pub fn new(repositories: ProfileRepositories) -> Self {
        let mode = FindAllMode::StorageOrder;
        Self {
            profiles: Arc::new(CrudServiceImpl::<ProfileMapper, dyn ProfileRepository>::new(
                repositories.profiles,
                mode,
            )),
            passports: Arc::new(CrudServiceImpl::<PassportMapper, dyn PassportRepository>::new(
                repositories.passports,
                mode,
            )),
            registrations: Arc::new(
                CrudServiceImpl::<RegistrationMapper, dyn RegistrationRepository>::new(
                    repositories.registrations,
                    mode,
                ),
            ),
            actual_registrations: Arc::new(CrudServiceImpl::<
                ActualRegistrationMapper,
                dyn ActualRegistrationRepository,
            >::new(
                repositories.actual_registrations, mode
            )),
            account_details: Arc::new(CrudServiceImpl::<
                AccountDetailsIdMapper,
                dyn AccountDetailsIdRepository,
            >::new(repositories.account_details, mode)),
            audit: Arc::new(AuditServiceImpl::new(repositories.audit)),
        }
    }
}

impl std::fmt::Debug for AuthorizationServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthorizationServices").finish_non_exhaustive()
    }
}

impl std::fmt::Debug for ProfileServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileServices").finish_non_exhaustive()
    }
}
