use architecture::repository::{DBRepository, MutableRepository, ReadOnlyRepository};
use database_model::estate::prelude::*;
use domain_estate::{model::entity::Order, repository::OrderRepo};
use sea_orm::{prelude::*, ActiveValue::NotSet, QueryOrder, QueryTrait};

use crate::infrastructure::database::{store_error, OrmRepo};

#[async_trait::async_trait]
impl ReadOnlyRepository<Order> for OrmRepo {
    async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<Order>> {
        OrderEntity::find_by_id(id)
            .one(self.db.get_connection())
            .await?
            .map(TryInto::try_into)
            .transpose()
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Order>> {
        OrderEntity::find()
            .order_by_asc(OrderColumn::Id)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(TryInto::try_into)
            .collect()
    }
}

#[async_trait::async_trait]
impl MutableRepository<Order> for OrmRepo {
    async fn insert(&self, entity: &Order) -> anyhow::Result<Order> {
        let active_model = OrderActiveModel {
            id: NotSet,
            ..OrderModel::try_from(entity.to_owned())?.into_set()
        };
        active_model
            .insert(self.db.get_connection())
            .await
            .map_err(store_error)?
            .try_into()
    }

    /// `created_at` is written once, on insert.
    async fn update(&self, entity: &Order) -> anyhow::Result<()> {
        let active_model = OrderActiveModel {
            created_at: NotSet,
            ..OrderModel::try_from(entity.to_owned())?.into_set()
        };
        let stmt = OrderEntity::update(active_model)
            .build(self.db.get_connection().get_database_backend());
        self.push_statement(stmt).await;
        Ok(())
    }

    async fn delete_by_id(&self, id: i32) -> anyhow::Result<()> {
        let stmt = OrderEntity::delete_by_id(id)
            .build(self.db.get_connection().get_database_backend());
        self.push_statement(stmt).await;
        Ok(())
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        self.save_changed().await
    }
}

impl DBRepository<Order> for OrmRepo {}

impl OrderRepo for OrmRepo {}
