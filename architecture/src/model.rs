/// Aggregate root marker.
///
/// Every aggregate root is addressed by a store-assigned integer id.
pub trait AggregateRoot {
    /// Store-assigned id, `0` before the entity is persisted.
    fn id(&self) -> i32;
}
