mod appliance;
mod order;
mod property;
mod replacement_option;

pub mod prelude {
    pub use super::{
        appliance::{
            ActiveModel as ApplianceActiveModel, Column as ApplianceColumn,
            Entity as ApplianceEntity, Model as ApplianceModel,
            PrimaryKey as AppliancePrimaryKey, Relation as ApplianceRelation,
        },
        order::{
            ActiveModel as OrderActiveModel, Column as OrderColumn, Entity as OrderEntity,
            Model as OrderModel, PrimaryKey as OrderPrimaryKey, Relation as OrderRelation,
        },
        property::{
            ActiveModel as PropertyActiveModel, Column as PropertyColumn,
            Entity as PropertyEntity, Model as PropertyModel, PrimaryKey as PropertyPrimaryKey,
            Relation as PropertyRelation,
        },
        replacement_option::{
            ActiveModel as ReplacementOptionActiveModel, Column as ReplacementOptionColumn,
            Entity as ReplacementOptionEntity, Model as ReplacementOptionModel,
            PrimaryKey as ReplacementOptionPrimaryKey, Relation as ReplacementOptionRelation,
        },
    };
}
