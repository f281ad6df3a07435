/// Read-only repository.
#[async_trait::async_trait]
pub trait ReadOnlyRepository<T>: Send + Sync
where
    T: Send + Sync + crate::model::AggregateRoot,
{
    /// The object with `id`, or `None`.
    async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<T>>;
    /// Every object, in insertion order.
    async fn get_all(&self) -> anyhow::Result<Vec<T>>;
}
