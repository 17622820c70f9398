//! Generic CRUD controller mounted once per record family.
//!
//! Routes, relative to the family prefix:
//!
//! | method | path          | answer                         |
//! |--------|---------------|--------------------------------|
//! | POST   | `/create`     | created DTO (201 or 200)       |
//! | GET    | `/read/:id`   | DTO, 404 when unknown          |
//! | PUT    | `/update/:id` | updated DTO, 404 when unknown  |
//! | GET    | `/read/all`   | DTO array for `?ids=1,2,3`     |
//!
//! Families flagged with `id_first_update` also answer `PUT /:id/update`.

use crate::{
    extractors::{parse_id, IdsQuery, JsonBody},
    responses::{ok, with_status, ApiResult, AppError},
    router::FamilyRoute,
    state::CrudState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use bank_core::BankError;
use bank_service::CrudService;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Creates the router of one family.
pub fn router<D>(service: Arc<dyn CrudService<D>>, family: &FamilyRoute) -> Router
where
    D: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    let mut router = Router::new()
        .route("/create", post(create::<D>))
        .route("/read/all", get(read_all::<D>))
        .route("/read/:id", get(read::<D>))
        .route("/update/:id", put(update::<D>));

    if family.id_first_update {
        router = router.route("/:id/update", put(update::<D>));
    }

    router.with_state(CrudState {
        service,
        create_status: family.create_status,
    })
}

async fn create<D>(
    State(state): State<CrudState<D>>,
    JsonBody(dto): JsonBody<D>,
) -> Result<(StatusCode, Json<D>), AppError>
where
    D: Serialize + Send + 'static,
{
    debug!("Create request");

    let created = state.service.save(dto).await?;
    Ok(with_status(state.create_status, created))
}

async fn read<D>(State(state): State<CrudState<D>>, Path(id): Path<String>) -> ApiResult<D>
where
    D: Serialize + Send + 'static,
{
    debug!("Read request: {}", id);

    let id = parse_id(&id)?;
    ok(state.service.find_by_id(id).await?)
}

async fn update<D>(
    State(state): State<CrudState<D>>,
    Path(id): Path<String>,
    JsonBody(dto): JsonBody<D>,
) -> ApiResult<D>
where
    D: Serialize + Send + 'static,
{
    debug!("Update request: {}", id);

    let id = parse_id(&id)?;
    let dto = dto.ok_or_else(|| BankError::validation("Request body is required"))?;
    ok(state.service.update(id, dto).await?)
}

async fn read_all<D>(
    State(state): State<CrudState<D>>,
    Query(query): Query<IdsQuery>,
) -> ApiResult<Vec<D>>
where
    D: Serialize + Send + 'static,
{
    debug!("Read all request: {:?}", query.ids);

    let ids = query.parse()?;
    ok(state.service.find_all_by_id(ids).await?)
}
