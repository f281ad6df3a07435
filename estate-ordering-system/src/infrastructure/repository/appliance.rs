use architecture::repository::{DBRepository, MutableRepository, ReadOnlyRepository};
use database_model::estate::prelude::*;
use domain_estate::{model::entity::Appliance, repository::ApplianceRepo};
use sea_orm::{prelude::*, ActiveValue::NotSet, QueryOrder, QueryTrait};

use crate::infrastructure::database::{store_error, OrmRepo};

#[async_trait::async_trait]
impl ReadOnlyRepository<Appliance> for OrmRepo {
    async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<Appliance>> {
        ApplianceEntity::find_by_id(id)
            .one(self.db.get_connection())
            .await?
            .map(TryInto::try_into)
            .transpose()
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Appliance>> {
        ApplianceEntity::find()
            .order_by_asc(ApplianceColumn::Id)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(TryInto::try_into)
            .collect()
    }
}

#[async_trait::async_trait]
impl MutableRepository<Appliance> for OrmRepo {
    async fn insert(&self, entity: &Appliance) -> anyhow::Result<Appliance> {
        let active_model = ApplianceActiveModel {
            id: NotSet,
            ..ApplianceModel::try_from(entity.to_owned())?.into_set()
        };
        active_model
            .insert(self.db.get_connection())
            .await
            .map_err(store_error)?
            .try_into()
    }

    async fn update(&self, entity: &Appliance) -> anyhow::Result<()> {
        let active_model = ApplianceModel::try_from(entity.to_owned())?.into_set();
        let stmt = ApplianceEntity::update(active_model)
            .build(self.db.get_connection().get_database_backend());
        self.push_statement(stmt).await;
        Ok(())
    }

    async fn delete_by_id(&self, id: i32) -> anyhow::Result<()> {
        let stmt = ApplianceEntity::delete_by_id(id)
            .build(self.db.get_connection().get_database_backend());
        self.push_statement(stmt).await;
        Ok(())
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        self.save_changed().await
    }
}

impl DBRepository<Appliance> for OrmRepo {}

#[async_trait::async_trait]
impl ApplianceRepo for OrmRepo {
    async fn get_all_by_property_ids(&self, property_ids: &[i32]) -> anyhow::Result<Vec<Appliance>> {
        if property_ids.is_empty() {
            return Ok(vec![]);
        }
        ApplianceEntity::find()
            .filter(ApplianceColumn::PropertyId.is_in(property_ids.iter().copied()))
            .order_by_asc(ApplianceColumn::Id)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(TryInto::try_into)
            .collect()
    }
}
