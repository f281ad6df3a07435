use std::fmt;

use architecture::AggregateRoot;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// An order placed for a replacement of an appliance.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub property_id: i32,
    pub appliance_id: i32,
    pub replacement_id: i32,
    /// Delivery date.
    pub scheduled_date: Option<NaiveDate>,
    /// Delivery time.
    pub scheduled_time: Option<NaiveTime>,
    /// Set once when the order is created.
    pub created_at: DateTime<Utc>,
}

impl AggregateRoot for Order {
    fn id(&self) -> i32 {
        self.id
    }
}

/// The replacement is named by id; the order does not load the option itself.
impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Order #{} - replacement #{}", self.id, self.replacement_id)
    }
}
