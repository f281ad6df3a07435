pub mod payload;
pub mod price;
mod property_detail;
pub mod validation;

#[rustfmt::skip]
pub use {
    payload::{AppliancePayload, OrderPayload, PropertyPayload, ReplacementOptionPayload},
    price::DecimalInput,
    property_detail::PropertyDetail,
    validation::ValidationErrors,
};
