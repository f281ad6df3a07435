mod appliance;
mod order;
mod property;
mod replacement_option;

#[rustfmt::skip]
pub use {
    appliance::ApplianceRepo,
    order::OrderRepo,
    property::PropertyRepo,
    replacement_option::ReplacementOptionRepo,
};
