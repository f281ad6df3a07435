use chrono::SecondsFormat;
use domain_estate::model::{
    entity::{Appliance, Order, ReplacementOption},
    vo::{price::normalize_price, PropertyDetail},
};
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct PropertyResponse {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub shipping_label: Option<String>,
    pub appliances: Vec<ApplianceResponse>,
}

impl From<PropertyDetail> for PropertyResponse {
    fn from(detail: PropertyDetail) -> Self {
        let PropertyDetail {
            property,
            appliances,
        } = detail;
        Self {
            id: property.id,
            name: property.name,
            address: property.address,
            shipping_label: property.shipping_label,
            appliances: appliances.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct ApplianceResponse {
    pub id: i32,
    pub property: i32,
    pub name: String,
    pub brand: String,
    pub model_number: String,
    pub usage: Option<String>,
    pub image: Option<String>,
}

impl From<Appliance> for ApplianceResponse {
    fn from(a: Appliance) -> Self {
        Self {
            id: a.id,
            property: a.property_id,
            name: a.name,
            brand: a.brand,
            model_number: a.model_number,
            usage: a.usage,
            image: a.image,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct ReplacementOptionResponse {
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub model_number: String,
    /// Decimal string with two fractional digits, e.g. `"300.00"`.
    pub price: String,
    pub efficiency: Option<String>,
    pub matching_score: i32,
}

impl From<ReplacementOption> for ReplacementOptionResponse {
    fn from(r: ReplacementOption) -> Self {
        Self {
            id: r.id,
            name: r.name,
            brand: r.brand,
            model_number: r.model_number,
            price: normalize_price(r.price).to_string(),
            efficiency: r.efficiency,
            matching_score: r.matching_score,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct OrderResponse {
    pub id: i32,
    pub property: i32,
    pub appliance: i32,
    pub replacement: i32,
    pub scheduled_date: Option<String>,
    pub scheduled_time: Option<String>,
    pub created_at: String,
}

impl From<Order> for OrderResponse {
    fn from(o: Order) -> Self {
        Self {
            id: o.id,
            property: o.property_id,
            appliance: o.appliance_id,
            replacement: o.replacement_id,
            scheduled_date: o.scheduled_date.map(|d| d.format("%Y-%m-%d").to_string()),
            scheduled_time: o.scheduled_time.map(|t| t.format("%H:%M:%S%.f").to_string()),
            created_at: o.created_at.to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}
