use architecture::repository::DBRepository;
use async_trait::async_trait;

use crate::model::entity::Appliance;

#[async_trait]
pub trait ApplianceRepo: DBRepository<Appliance> + Send + Sync {
    /// Appliances held by any of `property_ids`, in insertion order.
    async fn get_all_by_property_ids(&self, property_ids: &[i32]) -> anyhow::Result<Vec<Appliance>>;
}
