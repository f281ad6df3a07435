mod appliance;
mod order;
mod property;
mod reference;
mod replacement_option;

#[rustfmt::skip]
pub use {
    appliance::ApplianceServiceImpl,
    order::OrderServiceImpl,
    property::PropertyServiceImpl,
    replacement_option::ReplacementOptionServiceImpl,
};
