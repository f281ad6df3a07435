use crate::estate::prelude::*;
use domain_estate::model::entity::Property;
use sea_orm::{entity::prelude::*, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "property")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(Some(200))")]
    pub name: String,
    #[sea_orm(column_type = "String(Some(300))", nullable)]
    pub address: Option<String>,
    /// Uploaded shipping label reference
    #[sea_orm(column_type = "String(Some(100))", nullable)]
    pub shipping_label: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "ApplianceEntity")]
    Appliance,
    #[sea_orm(has_many = "OrderEntity")]
    Order,
}

impl Related<ApplianceEntity> for Entity {
    fn to() -> RelationDef {
        Relation::Appliance.def()
    }
}

impl Related<OrderEntity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryInto<Property> for Model {
    type Error = anyhow::Error;

    fn try_into(self) -> Result<Property, Self::Error> {
        Ok(Property {
            id: self.id,
            name: self.name,
            address: self.address,
            shipping_label: self.shipping_label,
        })
    }
}

impl TryFrom<Property> for Model {
    type Error = anyhow::Error;

    fn try_from(p: Property) -> Result<Self, Self::Error> {
        Ok(Self {
            id: p.id,
            name: p.name,
            address: p.address,
            shipping_label: p.shipping_label,
        })
    }
}

impl Model {
    pub fn into_set(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            name: Set(self.name),
            address: Set(self.address),
            shipping_label: Set(self.shipping_label),
        }
    }
}
