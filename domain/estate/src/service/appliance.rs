use async_trait::async_trait;

use crate::exception::EstateResult;
use crate::model::entity::Appliance;
use crate::model::vo::AppliancePayload;

#[async_trait]
pub trait ApplianceService: Send + Sync {
    async fn list(&self) -> EstateResult<Vec<Appliance>>;
    async fn get(&self, id: i32) -> EstateResult<Appliance>;
    /// Fails with a validation error on `property` when the property does not exist.
    async fn create(&self, payload: AppliancePayload) -> EstateResult<Appliance>;
    async fn update(&self, id: i32, payload: AppliancePayload) -> EstateResult<Appliance>;
    async fn partial_update(&self, id: i32, payload: AppliancePayload) -> EstateResult<Appliance>;
    /// Removes the appliance and the orders placed for it.
    async fn delete(&self, id: i32) -> EstateResult<()>;
}
