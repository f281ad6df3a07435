use async_trait::async_trait;

use crate::exception::EstateResult;
use crate::model::entity::Order;
use crate::model::vo::OrderPayload;

#[async_trait]
pub trait OrderService: Send + Sync {
    async fn list(&self) -> EstateResult<Vec<Order>>;
    async fn get(&self, id: i32) -> EstateResult<Order>;
    /// Validates that property, appliance and replacement all exist, then stores the
    /// order stamped with the current time.
    async fn create(&self, payload: OrderPayload) -> EstateResult<Order>;
    /// Same contract as `create`.
    async fn place_order(&self, payload: OrderPayload) -> EstateResult<Order>;
    /// `created_at` is kept from the stored order.
    async fn update(&self, id: i32, payload: OrderPayload) -> EstateResult<Order>;
    async fn partial_update(&self, id: i32, payload: OrderPayload) -> EstateResult<Order>;
    async fn delete(&self, id: i32) -> EstateResult<()>;
}
