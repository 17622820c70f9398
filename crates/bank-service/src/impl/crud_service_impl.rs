//! Generic CRUD service implementation.

use crate::crud_service::{CrudService, FindAllMode};
use async_trait::async_trait;
use bank_core::{BankError, BankResult, Entity, EntityMapper, Repository, ValidateExt};
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, info};
use validator::Validate;

/// CRUD service over one family, parameterised by its mapper `M` and its
/// repository `R` (usually a family interface such as `dyn ProfileRepository`).
pub struct CrudServiceImpl<M, R: ?Sized> {
    repository: Arc<R>,
    mode: FindAllMode,
    _mapper: PhantomData<fn() -> M>,
}

impl<M, R: ?Sized> CrudServiceImpl<M, R> {
    /// Creates a new service.
    pub fn new(repository: Arc<R>, mode: FindAllMode) -> Self {
        Self {
            repository,
            mode,
            _mapper: PhantomData,
        }
    }
}

impl<M, R> CrudServiceImpl<M, R>
where
    M: EntityMapper,
    M::Entity: Entity,
    R: Repository<M::Entity> + ?Sized,
{
    async fn load(&self, id: i64) -> BankResult<M::Entity> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| BankError::not_found(M::Entity::RESOURCE, id))
    }
}

#[async_trait]
impl<M, R> CrudService<M::Dto> for CrudServiceImpl<M, R>
where
    M: EntityMapper + 'static,
    M::Entity: Entity,
    M::Dto: Validate + Send + Sync + 'static,
    R: Repository<M::Entity> + ?Sized + 'static,
{
    async fn find_by_id(&self, id: i64) -> BankResult<M::Dto> {
        debug!("Getting {}: {}", M::Entity::RESOURCE, id);

        let entity = self.load(id).await?;
        Ok(M::to_dto(&entity))
    }

    async fn save(&self, dto: Option<M::Dto>) -> BankResult<M::Dto> {
        let dto = dto.ok_or_else(|| {
            BankError::validation(format!("{} body is required", M::Entity::RESOURCE))
        })?;
        debug!("Creating {}", M::Entity::RESOURCE);

        dto.validate_request()?;

        let mut entity = M::to_entity(dto);
        entity.set_id(0);
        let saved = self.repository.save(&entity).await?;

        info!("{} created: {}", M::Entity::RESOURCE, saved.id());
        Ok(M::to_dto(&saved))
    }

    async fn update(&self, id: i64, dto: M::Dto) -> BankResult<M::Dto> {
        debug!("Updating {}: {}", M::Entity::RESOURCE, id);

        let mut entity = self.load(id).await?;
        M::merge(dto, &mut entity);
        entity.set_id(id);

        let updated = self.repository.update(&entity).await?;

        info!("{} updated: {}", M::Entity::RESOURCE, id);
        Ok(M::to_dto(&updated))
    }

    async fn find_all_by_id(&self, ids: Option<Vec<i64>>) -> BankResult<Vec<M::Dto>> {
        let Some(ids) = ids else {
            return Ok(Vec::new());
        };
        debug!("Listing {} by ids: {:?}", M::Entity::RESOURCE, ids);

        let entities = match self.mode {
            FindAllMode::RequestOrder => {
                let mut entities = Vec::with_capacity(ids.len());
                for id in ids {
                    entities.push(self.load(id).await?);
                }
                entities
            }
            FindAllMode::StorageOrder => self.repository.find_all_by_id(&ids).await?,
        };

        Ok(entities.iter().map(M::to_dto).collect())
    }
}

impl<M, R: ?Sized> std::fmt::Debug for CrudServiceImpl<M, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrudServiceImpl")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}
