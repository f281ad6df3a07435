use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain_estate::{
    exception::{EstateException, EstateResult},
    model::{
        entity::{Appliance, Order, Property, ReplacementOption},
        vo::{OrderPayload, ValidationErrors},
    },
    repository::{ApplianceRepo, OrderRepo, PropertyRepo, ReplacementOptionRepo},
    service::OrderService,
};
use typed_builder::TypedBuilder;

use crate::reference::check_reference;

#[derive(TypedBuilder)]
pub struct OrderServiceImpl {
    order_repo: Arc<dyn OrderRepo>,
    property_repo: Arc<dyn PropertyRepo>,
    appliance_repo: Arc<dyn ApplianceRepo>,
    replacement_option_repo: Arc<dyn ReplacementOptionRepo>,
}

impl OrderServiceImpl {
    async fn find(&self, id: i32) -> EstateResult<Order> {
        self.order_repo.get_by_id(id).await?.ok_or(EstateException::NotFound {
            entity: "order",
            id,
        })
    }

    /// Checks that every referenced row exists, then the fields themselves.
    async fn validate(
        &self,
        id: i32,
        payload: OrderPayload,
        created_at: DateTime<Utc>,
    ) -> EstateResult<Order> {
        let mut errors = ValidationErrors::default();
        check_reference::<Property, _>(
            self.property_repo.as_ref(),
            &mut errors,
            "property",
            payload.property_id.flatten(),
        )
        .await?;
        check_reference::<Appliance, _>(
            self.appliance_repo.as_ref(),
            &mut errors,
            "appliance",
            payload.appliance_id.flatten(),
        )
        .await?;
        check_reference::<ReplacementOption, _>(
            self.replacement_option_repo.as_ref(),
            &mut errors,
            "replacement",
            payload.replacement_id.flatten(),
        )
        .await?;
        errors.combine(payload.validate(id, created_at)).map_err(|errors| {
            tracing::debug!("Rejected order: {errors}");
            errors.into()
        })
    }

    async fn replace(&self, order: Order) -> EstateResult<Order> {
        self.order_repo.update(&order).await?;
        self.order_repo.save_changed().await?;
        tracing::info!("Updated {order}");
        Ok(order)
    }
}

#[async_trait]
impl OrderService for OrderServiceImpl {
    async fn list(&self) -> EstateResult<Vec<Order>> {
        Ok(self.order_repo.get_all().await?)
    }

    async fn get(&self, id: i32) -> EstateResult<Order> {
        self.find(id).await
    }

    async fn create(&self, payload: OrderPayload) -> EstateResult<Order> {
        let order = self.validate(0, payload, Utc::now()).await?;
        let order = self.order_repo.insert(&order).await?;
        tracing::info!(
            "Created {order}: appliance {} of property {} replaced by {}",
            order.appliance_id,
            order.property_id,
            order.replacement_id
        );
        Ok(order)
    }

    async fn place_order(&self, payload: OrderPayload) -> EstateResult<Order> {
        self.create(payload).await
    }

    async fn update(&self, id: i32, payload: OrderPayload) -> EstateResult<Order> {
        let stored = self.find(id).await?;
        let order = self
            .validate(id, payload.fill_optional(&stored), stored.created_at)
            .await?;
        self.replace(order).await
    }

    async fn partial_update(&self, id: i32, payload: OrderPayload) -> EstateResult<Order> {
        let stored = self.find(id).await?;
        let order = self
            .validate(id, payload.patch(&stored), stored.created_at)
            .await?;
        self.replace(order).await
    }

    async fn delete(&self, id: i32) -> EstateResult<()> {
        let order = self.find(id).await?;
        self.order_repo.delete_by_id(id).await?;
        self.order_repo.save_changed().await?;
        tracing::info!("Deleted {order}");
        Ok(())
    }
}
