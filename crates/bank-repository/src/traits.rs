//! Repository interfaces, one per record family.
//!
//! Each interface is the generic [`Repository`] specialised to one entity so
//! that it can be registered as a shaku component.

use bank_core::{
    AccountDetailsIdEntity, ActualRegistrationEntity, AuditEntity, Interface, PassportEntity,
    ProfileEntity, ReadRepository, RegistrationEntity, Repository, UserEntity,
};

/// User accounts (authorization service).
pub trait UserRepository: Repository<UserEntity> + Interface {}

/// Audit rows. Both services keep their own `audit` table.
pub trait AuditRepository: ReadRepository<AuditEntity> + Interface {}

/// Customer profiles.
pub trait ProfileRepository: Repository<ProfileEntity> + Interface {}

/// Passports.
pub trait PassportRepository: Repository<PassportEntity> + Interface {}

/// Passport registration addresses.
pub trait RegistrationRepository: Repository<RegistrationEntity> + Interface {}

/// Actual residence addresses.
pub trait ActualRegistrationRepository: Repository<ActualRegistrationEntity> + Interface {}

/// Account-to-profile links.
pub trait AccountDetailsIdRepository: Repository<AccountDetailsIdEntity> + Interface {}
