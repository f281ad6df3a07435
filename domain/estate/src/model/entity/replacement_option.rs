use std::fmt;

use architecture::AggregateRoot;
use rust_decimal::Decimal;

/// A recommended replacement for an appliance. Not owned by any property.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplacementOption {
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub model_number: String,
    /// Always carries exactly two fractional digits.
    pub price: Decimal,
    pub efficiency: Option<String>,
    /// How well the replacement matches, never negative.
    pub matching_score: i32,
}

impl AggregateRoot for ReplacementOption {
    fn id(&self) -> i32 {
        self.id
    }
}

impl fmt::Display for ReplacementOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.brand, self.model_number)
    }
}
