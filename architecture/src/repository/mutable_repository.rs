/// Repository that changes data.
#[async_trait::async_trait]
pub trait MutableRepository<T>: Send + Sync
where
    T: Send + Sync + crate::model::AggregateRoot,
{
    /// Inserts right away and returns the entity with its store-assigned fields (id, timestamps).
    ///
    /// Store-assigned fields of `entity` are ignored.
    async fn insert(&self, entity: &T) -> anyhow::Result<T>;
    /// Queues an update, applied by `save_changed`.
    async fn update(&self, entity: &T) -> anyhow::Result<()>;
    /// Queues a delete by id, applied by `save_changed`.
    async fn delete_by_id(&self, id: i32) -> anyhow::Result<()>;
    /// Applies queued changes in one transaction. `Ok(false)` when nothing was queued.
    async fn save_changed(&self) -> anyhow::Result<bool>;
}
