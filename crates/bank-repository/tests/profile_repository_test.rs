//! Integration tests for the profile service repositories.
//!
//! These tests run against a real PostgreSQL database using testcontainers.
//! Requires Docker to be available on the system.

mod common;

use bank_config::ServiceKind;
use bank_core::{
    AccountDetailsIdEntity, ActualRegistrationEntity, BankError, PassportEntity, ProfileEntity,
    ReadRepository, RegistrationEntity, Repository,
};
use bank_repository::{PgAccountDetailsIdRepository, PgAuditRepository, PgProfileRepository};
use chrono::NaiveDate;
use common::TestDatabase;

fn test_profile(phone_number: i64) -> ProfileEntity {
    ProfileEntity {
        id: 0,
        phone_number: Some(phone_number),
        email: Some("ivan@example.com".to_string()),
        name_on_card: Some("IVAN IVANOV".to_string()),
        inn: Some(7_707_083_893),
        snils: Some(11_223_344_595),
        passport: Some(PassportEntity {
            series: Some(4510),
            number: Some(123_456),
            last_name: Some("Ivanov".to_string()),
            first_name: Some("Ivan".to_string()),
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 17),
            registration: Some(RegistrationEntity {
                country: Some("Russia".to_string()),
                city: Some("Moscow".to_string()),
                index: Some(125_009),
                ..Default::default()
            }),
            ..Default::default()
        }),
        actual_registration: Some(ActualRegistrationEntity {
            country: Some("Russia".to_string()),
            city: Some("Kazan".to_string()),
            ..Default::default()
        }),
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_save_profile_stores_whole_tree() {
    let db = TestDatabase::new(ServiceKind::Profile).await;
    let repo = PgProfileRepository::new(db.pool());

    let saved = repo.save(&test_profile(79_001_112_233)).await.expect("Failed to save profile");

    let passport = saved.passport.as_ref().expect("passport missing");
    let registration = passport.registration.as_ref().expect("registration missing");
    let residence = saved.actual_registration.as_ref().expect("address missing");
    assert!(saved.id > 0);
    assert!(passport.id > 0);
    assert!(registration.id > 0);
    assert!(residence.id > 0);
    assert_eq!(registration.index, Some(125_009));

    let found = repo
        .find_by_id(saved.id)
        .await
        .expect("Query failed")
        .expect("Profile not found");
    assert_eq!(found, saved);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_profile_keeps_nested_ids() {
    let db = TestDatabase::new(ServiceKind::Profile).await;
    let repo = PgProfileRepository::new(db.pool());

    let mut profile = repo.save(&test_profile(79_001_112_233)).await.unwrap();
    let passport_id = profile.passport.as_ref().map(|p| p.id);
    profile.email = Some("new@example.com".to_string());
    if let Some(passport) = profile.passport.as_mut() {
        passport.first_name = Some("Petr".to_string());
    }

    let updated = repo.update(&profile).await.expect("Failed to update profile");
    assert_eq!(updated.email.as_deref(), Some("new@example.com"));
    assert_eq!(updated.passport.as_ref().map(|p| p.id), passport_id);
    assert_eq!(
        updated.passport.as_ref().and_then(|p| p.first_name.as_deref()),
        Some("Petr")
    );
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_profile_without_passport_detaches_it() {
    let db = TestDatabase::new(ServiceKind::Profile).await;
    let repo = PgProfileRepository::new(db.pool());

    let mut profile = repo.save(&test_profile(79_001_112_233)).await.unwrap();
    profile.passport = None;

    let updated = repo.update(&profile).await.expect("Failed to update profile");
    assert!(updated.passport.is_none());
    assert!(updated.actual_registration.is_some());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_duplicate_phone_number_is_conflict() {
    let db = TestDatabase::new(ServiceKind::Profile).await;
    let repo = PgProfileRepository::new(db.pool());

    repo.save(&test_profile(79_000_000_001)).await.unwrap();
    let err = repo.save(&test_profile(79_000_000_001)).await.unwrap_err();
    assert!(matches!(err, BankError::Conflict(_)));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_account_details_links_existing_profile() {
    let db = TestDatabase::new(ServiceKind::Profile).await;
    let profiles = PgProfileRepository::new(db.pool());
    let details = PgAccountDetailsIdRepository::new(db.pool());

    let profile = profiles.save(&test_profile(79_001_112_233)).await.unwrap();
    let saved = details
        .save(&AccountDetailsIdEntity {
            id: 0,
            account_id: Some(40_817_810),
            profile: Some(profile.clone()),
        })
        .await
        .expect("Failed to save account details");

    assert_eq!(saved.account_id, Some(40_817_810));
    assert_eq!(saved.profile, Some(profile));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_audit_table_starts_empty() {
    let db = TestDatabase::new(ServiceKind::Profile).await;
    let repo = PgAuditRepository::new(db.pool());

    assert!(repo.find_by_id(1).await.expect("Query failed").is_none());
}
