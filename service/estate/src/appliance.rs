use std::sync::Arc;

use async_trait::async_trait;
use domain_estate::{
    exception::{EstateException, EstateResult},
    model::{
        entity::{Appliance, Property},
        vo::{AppliancePayload, ValidationErrors},
    },
    repository::{ApplianceRepo, PropertyRepo},
    service::ApplianceService,
};
use typed_builder::TypedBuilder;

use crate::reference::check_reference;

#[derive(TypedBuilder)]
pub struct ApplianceServiceImpl {
    appliance_repo: Arc<dyn ApplianceRepo>,
    property_repo: Arc<dyn PropertyRepo>,
}

impl ApplianceServiceImpl {
    async fn find(&self, id: i32) -> EstateResult<Appliance> {
        self.appliance_repo
            .get_by_id(id)
            .await?
            .ok_or(EstateException::NotFound {
                entity: "appliance",
                id,
            })
    }

    async fn validate(&self, id: i32, payload: AppliancePayload) -> EstateResult<Appliance> {
        let mut errors = ValidationErrors::default();
        check_reference::<Property, _>(
            self.property_repo.as_ref(),
            &mut errors,
            "property",
            payload.property_id.flatten(),
        )
        .await?;
        errors.combine(payload.validate(id)).map_err(|errors| {
            tracing::debug!("Rejected appliance: {errors}");
            errors.into()
        })
    }

    async fn replace(&self, appliance: Appliance) -> EstateResult<Appliance> {
        self.appliance_repo.update(&appliance).await?;
        self.appliance_repo.save_changed().await?;
        tracing::info!("Updated appliance {}: {appliance}", appliance.id);
        Ok(appliance)
    }
}

#[async_trait]
impl ApplianceService for ApplianceServiceImpl {
    async fn list(&self) -> EstateResult<Vec<Appliance>> {
        Ok(self.appliance_repo.get_all().await?)
    }

    async fn get(&self, id: i32) -> EstateResult<Appliance> {
        self.find(id).await
    }

    async fn create(&self, payload: AppliancePayload) -> EstateResult<Appliance> {
        let appliance = self.validate(0, payload).await?;
        let appliance = self.appliance_repo.insert(&appliance).await?;
        tracing::info!(
            "Created appliance {}: {appliance} in property {}",
            appliance.id,
            appliance.property_id
        );
        Ok(appliance)
    }

    async fn update(&self, id: i32, payload: AppliancePayload) -> EstateResult<Appliance> {
        let stored = self.find(id).await?;
        let appliance = self.validate(id, payload.fill_optional(&stored)).await?;
        self.replace(appliance).await
    }

    async fn partial_update(&self, id: i32, payload: AppliancePayload) -> EstateResult<Appliance> {
        let stored = self.find(id).await?;
        let appliance = self.validate(id, payload.patch(&stored)).await?;
        self.replace(appliance).await
    }

    async fn delete(&self, id: i32) -> EstateResult<()> {
        let appliance = self.find(id).await?;
        self.appliance_repo.delete_by_id(id).await?;
        self.appliance_repo.save_changed().await?;
        tracing::info!("Deleted appliance {id}: {appliance}");
        Ok(())
    }
}
