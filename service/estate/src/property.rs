use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use domain_estate::{
    exception::{EstateException, EstateResult},
    model::{
        entity::{Appliance, Property},
        vo::{PropertyDetail, PropertyPayload},
    },
    repository::{ApplianceRepo, PropertyRepo},
    service::PropertyService,
};
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct PropertyServiceImpl {
    property_repo: Arc<dyn PropertyRepo>,
    appliance_repo: Arc<dyn ApplianceRepo>,
}

impl PropertyServiceImpl {
    async fn find(&self, id: i32) -> EstateResult<Property> {
        self.property_repo
            .get_by_id(id)
            .await?
            .ok_or(EstateException::NotFound {
                entity: "property",
                id,
            })
    }

    async fn with_appliances(&self, property: Property) -> EstateResult<PropertyDetail> {
        let appliances = self.appliance_repo.get_all_by_property_ids(&[property.id]).await?;
        Ok(PropertyDetail {
            property,
            appliances,
        })
    }

    async fn replace(&self, property: Property) -> EstateResult<PropertyDetail> {
        self.property_repo.update(&property).await?;
        self.property_repo.save_changed().await?;
        tracing::info!("Updated property {}: {property}", property.id);
        self.with_appliances(property).await
    }
}

#[async_trait]
impl PropertyService for PropertyServiceImpl {
    async fn list(&self) -> EstateResult<Vec<PropertyDetail>> {
        let properties = self.property_repo.get_all().await?;
        let ids = properties.iter().map(|p| p.id).collect::<Vec<_>>();
        let mut grouped: HashMap<i32, Vec<Appliance>> = HashMap::new();
        for appliance in self.appliance_repo.get_all_by_property_ids(&ids).await? {
            grouped.entry(appliance.property_id).or_default().push(appliance);
        }
        Ok(properties
            .into_iter()
            .map(|property| PropertyDetail {
                appliances: grouped.remove(&property.id).unwrap_or_default(),
                property,
            })
            .collect())
    }

    async fn get(&self, id: i32) -> EstateResult<PropertyDetail> {
        let property = self.find(id).await?;
        self.with_appliances(property).await
    }

    async fn create(&self, payload: PropertyPayload) -> EstateResult<PropertyDetail> {
        let property = payload.validate(0).map_err(|errors| {
            tracing::debug!("Rejected property: {errors}");
            errors
        })?;
        let property = self.property_repo.insert(&property).await?;
        tracing::info!("Created property {}: {property}", property.id);
        Ok(PropertyDetail {
            property,
            appliances: vec![],
        })
    }

    async fn update(&self, id: i32, payload: PropertyPayload) -> EstateResult<PropertyDetail> {
        let stored = self.find(id).await?;
        let property = payload.fill_optional(&stored).validate(id)?;
        self.replace(property).await
    }

    async fn partial_update(
        &self,
        id: i32,
        payload: PropertyPayload,
    ) -> EstateResult<PropertyDetail> {
        let stored = self.find(id).await?;
        let property = payload.patch(&stored).validate(id)?;
        self.replace(property).await
    }

    async fn delete(&self, id: i32) -> EstateResult<()> {
        let property = self.find(id).await?;
        self.property_repo.delete_by_id(id).await?;
        self.property_repo.save_changed().await?;
        tracing::info!("Deleted property {id}: {property}");
        Ok(())
    }
}
