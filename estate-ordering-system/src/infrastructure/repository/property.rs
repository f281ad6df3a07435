use architecture::repository::{DBRepository, MutableRepository, ReadOnlyRepository};
use database_model::estate::prelude::*;
use domain_estate::{model::entity::Property, repository::PropertyRepo};
use sea_orm::{prelude::*, ActiveValue::NotSet, QueryOrder, QueryTrait};

use crate::infrastructure::database::{store_error, OrmRepo};

#[async_trait::async_trait]
impl ReadOnlyRepository<Property> for OrmRepo {
    async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<Property>> {
        PropertyEntity::find_by_id(id)
            .one(self.db.get_connection())
            .await?
            .map(TryInto::try_into)
            .transpose()
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Property>> {
        PropertyEntity::find()
            .order_by_asc(PropertyColumn::Id)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(TryInto::try_into)
            .collect()
    }
}

#[async_trait::async_trait]
impl MutableRepository<Property> for OrmRepo {
    async fn insert(&self, entity: &Property) -> anyhow::Result<Property> {
        let active_model = PropertyActiveModel {
            id: NotSet,
            ..PropertyModel::try_from(entity.to_owned())?.into_set()
        };
        active_model
            .insert(self.db.get_connection())
            .await
            .map_err(store_error)?
            .try_into()
    }

    async fn update(&self, entity: &Property) -> anyhow::Result<()> {
        let active_model = PropertyModel::try_from(entity.to_owned())?.into_set();
        let stmt = PropertyEntity::update(active_model)
            .build(self.db.get_connection().get_database_backend());
        self.push_statement(stmt).await;
        Ok(())
    }

    async fn delete_by_id(&self, id: i32) -> anyhow::Result<()> {
        let stmt = PropertyEntity::delete_by_id(id)
            .build(self.db.get_connection().get_database_backend());
        self.push_statement(stmt).await;
        Ok(())
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        self.save_changed().await
    }
}

impl DBRepository<Property> for OrmRepo {}

impl PropertyRepo for OrmRepo {}
