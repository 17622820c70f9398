//! CRUD service trait shared by every writable record family.

use async_trait::async_trait;
use bank_core::BankResult;

/// How [`CrudService::find_all_by_id`] resolves a list of ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FindAllMode {
    /// One lookup per id, answered in request order; the first unknown id
    /// fails the whole call with Not-Found.
    RequestOrder,
    /// One batch query answered in storage order; unknown ids are skipped.
    #[default]
    StorageOrder,
}

/// Uniform create/read/update operations over one record family.
#[async_trait]
pub trait CrudService<D>: Send + Sync
where
    D: Send + 'static,
{
    /// Gets a record by ID.
    async fn find_by_id(&self, id: i64) -> BankResult<D>;

    /// Validates and stores a new record; the store assigns its ID.
    async fn save(&self, dto: Option<D>) -> BankResult<D>;

    /// Merges `dto` into the stored record `id` and stores the result.
    async fn update(&self, id: i64, dto: D) -> BankResult<D>;

    /// Gets several records at once. No ids yields an empty list.
    async fn find_all_by_id(&self, ids: Option<Vec<i64>>) -> BankResult<Vec<D>>;
}
