//! In-memory repository used by service and router tests.

use crate::{
    AccountDetailsIdRepository, ActualRegistrationRepository, AuditRepository, PassportRepository,
    ProfileRepository, RegistrationRepository, UserRepository,
};
use async_trait::async_trait;
use bank_core::{
    AccountDetailsIdEntity, ActualRegistrationEntity, AuditEntity, BankError, BankResult, Entity,
    PassportEntity, ProfileEntity, ReadRepository, RegistrationEntity, Repository, UserEntity,
};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Repository keeping entities in a map ordered by id.
///
/// Ids are assigned from 1 upwards, like a `BIGSERIAL` column.
#[derive(Debug)]
pub struct InMemoryRepository<E> {
    state: RwLock<State<E>>,
}

#[derive(Debug)]
struct State<E> {
    rows: BTreeMap<i64, E>,
    next_id: i64,
}

impl<E: Entity> InMemoryRepository<E> {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::with_entities(Vec::new())
    }

    /// Creates a repository seeded with `entities`, keyed by their own ids.
    #[must_use]
    pub fn with_entities(entities: Vec<E>) -> Self {
        let rows: BTreeMap<i64, E> = entities.into_iter().map(|e| (e.id(), e)).collect();
        let next_id = rows.keys().next_back().copied().unwrap_or(0) + 1;
        Self {
            state: RwLock::new(State { rows, next_id }),
        }
    }

    /// Number of stored entities.
    pub async fn len(&self) -> usize {
        self.state.read().await.rows.len()
    }

    /// Returns `true` when nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.rows.is_empty()
    }
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> ReadRepository<E> for InMemoryRepository<E> {
    async fn find_by_id(&self, id: i64) -> BankResult<Option<E>> {
        Ok(self.state.read().await.rows.get(&id).cloned())
    }

    async fn find_all_by_id(&self, ids: &[i64]) -> BankResult<Vec<E>> {
        let state = self.state.read().await;
        Ok(state
            .rows
            .iter()
            .filter(|(id, _)| ids.contains(id))
            .map(|(_, entity)| entity.clone())
            .collect())
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    async fn save(&self, entity: &E) -> BankResult<E> {
        let mut state = self.state.write().await;
        let id = state.next_id;
        state.next_id += 1;

        let mut saved = entity.clone();
        saved.set_id(id);
        state.rows.insert(id, saved.clone());
        Ok(saved)
    }

    async fn update(&self, entity: &E) -> BankResult<E> {
        let mut state = self.state.write().await;
        match state.rows.get_mut(&entity.id()) {
            Some(row) => {
                *row = entity.clone();
                Ok(entity.clone())
            }
            None => Err(BankError::not_found(E::RESOURCE, entity.id())),
        }
    }
}

impl UserRepository for InMemoryRepository<UserEntity> {}
impl AuditRepository for InMemoryRepository<AuditEntity> {}
impl ProfileRepository for InMemoryRepository<ProfileEntity> {}
impl PassportRepository for InMemoryRepository<PassportEntity> {}
impl RegistrationRepository for InMemoryRepository<RegistrationEntity> {}
impl ActualRegistrationRepository for InMemoryRepository<ActualRegistrationEntity> {}
impl AccountDetailsIdRepository for InMemoryRepository<AccountDetailsIdEntity> {}
