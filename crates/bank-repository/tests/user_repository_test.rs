//! Integration tests for PgUserRepository.
//!
//! These tests run against a real PostgreSQL database using testcontainers.
//! Requires Docker to be available on the system.

mod common;

use bank_config::ServiceKind;
use bank_core::{BankError, ReadRepository, Repository, UserEntity};
use bank_repository::PgUserRepository;
use common::TestDatabase;

fn test_user(profile_id: i64) -> UserEntity {
    UserEntity {
        id: 0,
        role: Some("USER".to_string()),
        profile_id: Some(profile_id),
        password: Some("hashed_password_123".to_string()),
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_save_and_find_by_id() {
    let db = TestDatabase::new(ServiceKind::Authorization).await;
    let repo = PgUserRepository::new(db.pool());

    let saved = repo.save(&test_user(1)).await.expect("Failed to save user");
    assert!(saved.id > 0);
    assert_eq!(saved.role.as_deref(), Some("USER"));

    let found = repo
        .find_by_id(saved.id)
        .await
        .expect("Failed to find user")
        .expect("User not found");
    assert_eq!(found, saved);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_by_id_not_found() {
    let db = TestDatabase::new(ServiceKind::Authorization).await;
    let repo = PgUserRepository::new(db.pool());

    let result = repo.find_by_id(4242).await.expect("Query failed");
    assert!(result.is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_overwrites_row() {
    let db = TestDatabase::new(ServiceKind::Authorization).await;
    let repo = PgUserRepository::new(db.pool());

    let mut user = repo.save(&test_user(1)).await.expect("Failed to save user");
    user.role = Some("ADMIN".to_string());

    let updated = repo.update(&user).await.expect("Failed to update user");
    assert_eq!(updated.role.as_deref(), Some("ADMIN"));
    assert_eq!(updated.profile_id, Some(1));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_missing_row_is_not_found() {
    let db = TestDatabase::new(ServiceKind::Authorization).await;
    let repo = PgUserRepository::new(db.pool());

    let err = repo
        .update(&UserEntity { id: 99, ..test_user(1) })
        .await
        .unwrap_err();
    assert!(matches!(err, BankError::NotFound { .. }));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_duplicate_profile_id_is_conflict() {
    let db = TestDatabase::new(ServiceKind::Authorization).await;
    let repo = PgUserRepository::new(db.pool());

    repo.save(&test_user(5)).await.expect("Failed to save user");
    let err = repo.save(&test_user(5)).await.unwrap_err();
    assert!(matches!(err, BankError::Conflict(_)));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_all_by_id_skips_unknown_ids() {
    let db = TestDatabase::new(ServiceKind::Authorization).await;
    let repo = PgUserRepository::new(db.pool());

    let first = repo.save(&test_user(1)).await.unwrap();
    let second = repo.save(&test_user(2)).await.unwrap();

    let found = repo
        .find_all_by_id(&[second.id, 777, first.id])
        .await
        .expect("Query failed");
    let ids: Vec<i64> = found.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_writes_complete_on_single_connection_pool() {
    let db = TestDatabase::with_max_connections(ServiceKind::Authorization, 1).await;
    let repo = PgUserRepository::new(db.pool());

    let mut user = repo.save(&test_user(1)).await.expect("Save stalled on pool");
    user.password = Some("rotated".to_string());

    let updated = repo.update(&user).await.expect("Update stalled on pool");
    assert_eq!(updated.password.as_deref(), Some("rotated"));
}
