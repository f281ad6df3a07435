use crate::model::entity::{Appliance, Property};

/// A property together with the appliances it currently holds.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDetail {
    pub property: Property,
    pub appliances: Vec<Appliance>,
}
