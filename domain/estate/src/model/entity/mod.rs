mod appliance;
mod order;
mod property;
mod replacement_option;

#[rustfmt::skip]
pub use {
    appliance::Appliance,
    order::Order,
    property::Property,
    replacement_option::ReplacementOption,
};
