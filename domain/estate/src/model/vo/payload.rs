//! Write payloads accepted by the estate services.
//!
//! Every field is optional at the type level so that a missing field surfaces as a
//! field error instead of a deserialization failure. Fields are double `Option`s:
//! absent is `None`, explicit `null` is `Some(None)`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use super::price::{required_price, DecimalInput};
use super::validation::*;
use crate::model::entity::{Appliance, Order, Property, ReplacementOption};

fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Keeps what the client sent, otherwise takes the stored value.
fn or_stored<T: Clone>(sent: Option<Option<T>>, stored: &Option<T>) -> Option<Option<T>> {
    sent.or_else(|| Some(stored.clone()))
}

fn or_stored_required<T: Clone>(sent: Option<Option<T>>, stored: &T) -> Option<Option<T>> {
    sent.or_else(|| Some(Some(stored.clone())))
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PropertyPayload {
    #[serde(default, deserialize_with = "nullable")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub address: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub shipping_label: Option<Option<String>>,
}

impl PropertyPayload {
    /// Fills the optional fields the client left out from `base`. Used by full updates,
    /// where required fields must still be sent.
    pub fn fill_optional(self, base: &Property) -> Self {
        Self {
            address: or_stored(self.address, &base.address),
            shipping_label: or_stored(self.shipping_label, &base.shipping_label),
            ..self
        }
    }

    /// Fills every field the client left out from `base`.
    pub fn patch(self, base: &Property) -> Self {
        let payload = self.fill_optional(base);
        Self {
            name: or_stored_required(payload.name, &base.name),
            ..payload
        }
    }

    pub fn validate(self, id: i32) -> Result<Property, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let property = Property {
            id,
            name: required_text(&mut errors, "name", self.name, 200),
            address: optional_text(&mut errors, "address", self.address.flatten(), 300),
            shipping_label: optional_text(
                &mut errors,
                "shipping_label",
                self.shipping_label.flatten(),
                100,
            ),
        };
        errors.into_result(property)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppliancePayload {
    #[serde(rename = "property", default, deserialize_with = "nullable")]
    pub property_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub brand: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub model_number: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub usage: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub image: Option<Option<String>>,
}

impl AppliancePayload {
    pub fn fill_optional(self, base: &Appliance) -> Self {
        Self {
            usage: or_stored(self.usage, &base.usage),
            image: or_stored(self.image, &base.image),
            ..self
        }
    }

    pub fn patch(self, base: &Appliance) -> Self {
        let payload = self.fill_optional(base);
        Self {
            property_id: or_stored_required(payload.property_id, &base.property_id),
            name: or_stored_required(payload.name, &base.name),
            brand: or_stored_required(payload.brand, &base.brand),
            model_number: or_stored_required(payload.model_number, &base.model_number),
            ..payload
        }
    }

    /// Field rules only; whether the property exists is for the caller to check.
    pub fn validate(self, id: i32) -> Result<Appliance, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let appliance = Appliance {
            id,
            property_id: required_reference(&mut errors, "property", self.property_id),
            name: required_text(&mut errors, "name", self.name, 100),
            brand: required_text(&mut errors, "brand", self.brand, 100),
            model_number: required_text(&mut errors, "model_number", self.model_number, 100),
            usage: optional_text(&mut errors, "usage", self.usage.flatten(), 50),
            image: optional_text(&mut errors, "image", self.image.flatten(), 100),
        };
        errors.into_result(appliance)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReplacementOptionPayload {
    #[serde(default, deserialize_with = "nullable")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub brand: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub model_number: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub price: Option<Option<DecimalInput>>,
    #[serde(default, deserialize_with = "nullable")]
    pub efficiency: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub matching_score: Option<Option<i64>>,
}

impl ReplacementOptionPayload {
    pub fn fill_optional(self, base: &ReplacementOption) -> Self {
        Self {
            efficiency: or_stored(self.efficiency, &base.efficiency),
            matching_score: or_stored_required(
                self.matching_score,
                &i64::from(base.matching_score),
            ),
            ..self
        }
    }

    pub fn patch(self, base: &ReplacementOption) -> Self {
        let payload = self.fill_optional(base);
        Self {
            name: or_stored_required(payload.name, &base.name),
            brand: or_stored_required(payload.brand, &base.brand),
            model_number: or_stored_required(payload.model_number, &base.model_number),
            price: or_stored_required(payload.price, &base.price.into()),
            ..payload
        }
    }

    pub fn validate(self, id: i32) -> Result<ReplacementOption, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let option = ReplacementOption {
            id,
            name: required_text(&mut errors, "name", self.name, 100),
            brand: required_text(&mut errors, "brand", self.brand, 100),
            model_number: required_text(&mut errors, "model_number", self.model_number, 100),
            price: required_price(&mut errors, "price", self.price),
            efficiency: optional_text(&mut errors, "efficiency", self.efficiency.flatten(), 100),
            matching_score: non_negative_integer(&mut errors, "matching_score", self.matching_score),
        };
        errors.into_result(option)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OrderPayload {
    #[serde(rename = "property", default, deserialize_with = "nullable")]
    pub property_id: Option<Option<i32>>,
    #[serde(rename = "appliance", default, deserialize_with = "nullable")]
    pub appliance_id: Option<Option<i32>>,
    #[serde(rename = "replacement", default, deserialize_with = "nullable")]
    pub replacement_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    pub scheduled_date: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub scheduled_time: Option<Option<String>>,
}

impl OrderPayload {
    pub fn fill_optional(self, base: &Order) -> Self {
        Self {
            scheduled_date: self.scheduled_date.or_else(|| {
                Some(base.scheduled_date.map(|date| date.format("%Y-%m-%d").to_string()))
            }),
            scheduled_time: self.scheduled_time.or_else(|| {
                Some(base.scheduled_time.map(|time| time.format("%H:%M:%S%.f").to_string()))
            }),
            ..self
        }
    }

    pub fn patch(self, base: &Order) -> Self {
        let payload = self.fill_optional(base);
        Self {
            property_id: or_stored_required(payload.property_id, &base.property_id),
            appliance_id: or_stored_required(payload.appliance_id, &base.appliance_id),
            replacement_id: or_stored_required(payload.replacement_id, &base.replacement_id),
            ..payload
        }
    }

    /// Field rules only; whether the referenced rows exist is for the caller to check.
    pub fn validate(self, id: i32, created_at: DateTime<Utc>) -> Result<Order, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let order = Order {
            id,
            property_id: required_reference(&mut errors, "property", self.property_id),
            appliance_id: required_reference(&mut errors, "appliance", self.appliance_id),
            replacement_id: required_reference(&mut errors, "replacement", self.replacement_id),
            scheduled_date: optional_date(&mut errors, "scheduled_date", self.scheduled_date.flatten()),
            scheduled_time: optional_time(&mut errors, "scheduled_time", self.scheduled_time.flatten()),
            created_at,
        };
        errors.into_result(order)
    }
}
