use architecture::{repository::ReadOnlyRepository, AggregateRoot};
use domain_estate::model::vo::{validation::missing_reference_message, ValidationErrors};

/// Records an error on `field` when `id` is given but no such row exists.
///
/// A missing or `null` `id` is left to payload validation.
pub(crate) async fn check_reference<T, R>(
    repo: &R,
    errors: &mut ValidationErrors,
    field: &str,
    id: Option<i32>,
) -> anyhow::Result<()>
where
    T: Send + Sync + AggregateRoot,
    R: ReadOnlyRepository<T> + ?Sized,
{
    if let Some(id) = id {
        if repo.get_by_id(id).await?.is_none() {
            errors.add(field, missing_reference_message(id));
        }
    }
    Ok(())
}
