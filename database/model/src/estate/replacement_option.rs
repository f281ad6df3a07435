use crate::estate::prelude::*;
use domain_estate::model::{entity::ReplacementOption, vo::price::normalize_price};
use sea_orm::{entity::prelude::*, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "replacement_option")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(Some(100))")]
    pub name: String,
    #[sea_orm(column_type = "String(Some(100))")]
    pub brand: String,
    #[sea_orm(column_type = "String(Some(100))")]
    pub model_number: String,
    #[sea_orm(column_type = "Decimal(Some((8, 2)))")]
    pub price: Decimal,
    #[sea_orm(column_type = "String(Some(100))", nullable)]
    pub efficiency: Option<String>,
    pub matching_score: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "OrderEntity")]
    Order,
}

impl Related<OrderEntity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryInto<ReplacementOption> for Model {
    type Error = anyhow::Error;

    fn try_into(self) -> Result<ReplacementOption, Self::Error> {
        Ok(ReplacementOption {
            id: self.id,
            name: self.name,
            brand: self.brand,
            model_number: self.model_number,
            // Backends without a native decimal hand the value back through a float.
            price: normalize_price(self.price),
            efficiency: self.efficiency,
            matching_score: self.matching_score,
        })
    }
}

impl TryFrom<ReplacementOption> for Model {
    type Error = anyhow::Error;

    fn try_from(r: ReplacementOption) -> Result<Self, Self::Error> {
        anyhow::ensure!(
            r.matching_score >= 0,
            "Negative matching score {} for replacement option {}",
            r.matching_score,
            r.id
        );
        Ok(Self {
            id: r.id,
            name: r.name,
            brand: r.brand,
            model_number: r.model_number,
            price: r.price,
            efficiency: r.efficiency,
            matching_score: r.matching_score,
        })
    }
}

impl Model {
    pub fn into_set(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            name: Set(self.name),
            brand: Set(self.brand),
            model_number: Set(self.model_number),
            price: Set(self.price),
            efficiency: Set(self.efficiency),
            matching_score: Set(self.matching_score),
        }
    }
}
