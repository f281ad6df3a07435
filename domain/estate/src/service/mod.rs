mod appliance;
mod order;
mod property;
mod replacement_option;

#[rustfmt::skip]
pub use {
    appliance::ApplianceService,
    order::OrderService,
    property::PropertyService,
    replacement_option::ReplacementOptionService,
};
