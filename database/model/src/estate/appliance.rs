use crate::estate::prelude::*;
use domain_estate::model::entity::Appliance;
use sea_orm::{entity::prelude::*, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "appliance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub property_id: i32,
    #[sea_orm(column_type = "String(Some(100))")]
    pub name: String,
    #[sea_orm(column_type = "String(Some(100))")]
    pub brand: String,
    #[sea_orm(column_type = "String(Some(100))")]
    pub model_number: String,
    #[sea_orm(column_type = "String(Some(50))", nullable)]
    pub usage: Option<String>,
    #[sea_orm(column_type = "String(Some(100))", nullable)]
    pub image: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "PropertyEntity",
        from = "Column::PropertyId",
        to = "PropertyColumn::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Property,
    #[sea_orm(has_many = "OrderEntity")]
    Order,
}

impl Related<PropertyEntity> for Entity {
    fn to() -> RelationDef {
        Relation::Property.def()
    }
}

impl Related<OrderEntity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryInto<Appliance> for Model {
    type Error = anyhow::Error;

    fn try_into(self) -> Result<Appliance, Self::Error> {
        Ok(Appliance {
            id: self.id,
            property_id: self.property_id,
            name: self.name,
            brand: self.brand,
            model_number: self.model_number,
            usage: self.usage,
            image: self.image,
        })
    }
}

impl TryFrom<Appliance> for Model {
    type Error = anyhow::Error;

    fn try_from(a: Appliance) -> Result<Self, Self::Error> {
        Ok(Self {
            id: a.id,
            property_id: a.property_id,
            name: a.name,
            brand: a.brand,
            model_number: a.model_number,
            usage: a.usage,
            image: a.image,
        })
    }
}

impl Model {
    pub fn into_set(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            property_id: Set(self.property_id),
            name: Set(self.name),
            brand: Set(self.brand),
            model_number: Set(self.model_number),
            usage: Set(self.usage),
            image: Set(self.image),
        }
    }
}
