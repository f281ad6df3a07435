use architecture::repository::DBRepository;

use crate::model::entity::Property;

/// Deleting a property cascades to its appliances and orders in the store.
pub trait PropertyRepo: DBRepository<Property> + Send + Sync {}
