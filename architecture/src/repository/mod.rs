//! Repository abstractions.
make_re_export!(mutable_repository, read_only_repository);

/// A database backed repository, both readable and writable.
pub trait DBRepository<T>: ReadOnlyRepository<T> + MutableRepository<T>
where
    T: Send + Sync + crate::model::AggregateRoot,
{
}
