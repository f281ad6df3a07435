use async_trait::async_trait;

use crate::exception::EstateResult;
use crate::model::vo::{PropertyDetail, PropertyPayload};

/// Property resource.
///
/// Every read returns the property with the appliances it currently holds.
#[async_trait]
pub trait PropertyService: Send + Sync {
    async fn list(&self) -> EstateResult<Vec<PropertyDetail>>;
    async fn get(&self, id: i32) -> EstateResult<PropertyDetail>;
    async fn create(&self, payload: PropertyPayload) -> EstateResult<PropertyDetail>;
    /// Replaces the sent fields. Required fields must be sent, unsent optional
    /// fields keep their stored value.
    async fn update(&self, id: i32, payload: PropertyPayload) -> EstateResult<PropertyDetail>;
    /// Replaces only the fields present in `payload`.
    async fn partial_update(&self, id: i32, payload: PropertyPayload)
        -> EstateResult<PropertyDetail>;
    /// Removes the property, its appliances and every order referencing either.
    async fn delete(&self, id: i32) -> EstateResult<()>;
}
