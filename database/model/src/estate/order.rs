use crate::estate::prelude::*;
use domain_estate::model::entity::Order;
use sea_orm::{entity::prelude::*, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "order")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub property_id: i32,
    pub appliance_id: i32,
    pub replacement_id: i32,
    pub scheduled_date: Option<Date>,
    pub scheduled_time: Option<Time>,
    pub created_at: DateTimeUtc,
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
    #[sea_orm(
        belongs_to = "ApplianceEntity",
        from = "Column::ApplianceId",
        to = "ApplianceColumn::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Appliance,
    #[sea_orm(
        belongs_to = "ReplacementOptionEntity",
        from = "Column::ReplacementId",
        to = "ReplacementOptionColumn::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ReplacementOption,
}

impl Related<PropertyEntity> for Entity {
    fn to() -> RelationDef {
        Relation::Property.def()
    }
}

impl Related<ApplianceEntity> for Entity {
    fn to() -> RelationDef {
        Relation::Appliance.def()
    }
}

impl Related<ReplacementOptionEntity> for Entity {
    fn to() -> RelationDef {
        Relation::ReplacementOption.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryInto<Order> for Model {
    type Error = anyhow::Error;

    fn try_into(self) -> Result<Order, Self::Error> {
        Ok(Order {
            id: self.id,
            property_id: self.property_id,
            appliance_id: self.appliance_id,
            replacement_id: self.replacement_id,
            scheduled_date: self.scheduled_date,
            scheduled_time: self.scheduled_time,
            created_at: self.created_at,
        })
    }
}

impl TryFrom<Order> for Model {
    type Error = anyhow::Error;

    fn try_from(o: Order) -> Result<Self, Self::Error> {
        Ok(Self {
            id: o.id,
            property_id: o.property_id,
            appliance_id: o.appliance_id,
            replacement_id: o.replacement_id,
            scheduled_date: o.scheduled_date,
            scheduled_time: o.scheduled_time,
            created_at: o.created_at,
        })
    }
}

impl Model {
    pub fn into_set(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            property_id: Set(self.property_id),
            appliance_id: Set(self.appliance_id),
            replacement_id: Set(self.replacement_id),
            scheduled_date: Set(self.scheduled_date),
            scheduled_time: Set(self.scheduled_time),
            created_at: Set(self.created_at),
        }
    }
}
