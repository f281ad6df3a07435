use async_trait::async_trait;

use crate::exception::EstateResult;
use crate::model::entity::ReplacementOption;
use crate::model::vo::ReplacementOptionPayload;

#[async_trait]
pub trait ReplacementOptionService: Send + Sync {
    async fn list(&self) -> EstateResult<Vec<ReplacementOption>>;
    async fn get(&self, id: i32) -> EstateResult<ReplacementOption>;
    async fn create(&self, payload: ReplacementOptionPayload) -> EstateResult<ReplacementOption>;
    async fn update(
        &self,
        id: i32,
        payload: ReplacementOptionPayload,
    ) -> EstateResult<ReplacementOption>;
    async fn partial_update(
        &self,
        id: i32,
        payload: ReplacementOptionPayload,
    ) -> EstateResult<ReplacementOption>;
    /// Removes the option and the orders placed for it.
    async fn delete(&self, id: i32) -> EstateResult<()>;
}
