use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

use super::validation::{required, ValidationErrors};

pub const PRICE_MAX_DIGITS: u32 = 8;
pub const PRICE_DECIMAL_PLACES: u32 = 2;

/// A decimal as the client sent it, either a JSON string or a JSON number.
///
/// Kept textual so precision is judged on what was written, not on a float.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalInput(pub String);

impl From<Decimal> for DecimalInput {
    fn from(value: Decimal) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for DecimalInput {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl<'de> Deserialize<'de> for DecimalInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DecimalInputVisitor;

        impl<'de> Visitor<'de> for DecimalInputVisitor {
            type Value = DecimalInput;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a decimal number or a decimal string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(DecimalInput(v.to_owned()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(DecimalInput(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(DecimalInput(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(DecimalInput(v.to_string()))
            }
        }

        deserializer.deserialize_any(DecimalInputVisitor)
    }
}

/// Checks `value` against a `max_digits` / `decimal_places` column definition.
///
/// Trailing zeros count: `1.500` has three decimal places.
pub fn check_precision(value: &Decimal, max_digits: u32, decimal_places: u32) -> Result<(), String> {
    let mantissa = value.mantissa().unsigned_abs();
    let digits = if mantissa == 0 { 1 } else { mantissa.ilog10() + 1 };
    let scale = value.scale();
    let (total, decimals) = if scale > digits {
        (scale, scale)
    } else {
        (digits, scale)
    };
    let whole = total - decimals;
    let max_whole = max_digits - decimal_places;

    if total > max_digits {
        Err(format!(
            "Ensure that there are no more than {max_digits} digits in total."
        ))
    } else if decimals > decimal_places {
        Err(format!(
            "Ensure that there are no more than {decimal_places} decimal places."
        ))
    } else if whole > max_whole {
        Err(format!(
            "Ensure that there are no more than {max_whole} digits before the decimal point."
        ))
    } else {
        Ok(())
    }
}

/// Parses and checks a price, returning it with exactly two fractional digits.
pub fn required_price(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<Option<DecimalInput>>,
) -> Decimal {
    let Some(DecimalInput(raw)) = required(errors, field, value) else {
        return Decimal::ZERO;
    };
    let parsed = match Decimal::from_str(raw.trim()) {
        Ok(parsed) => parsed,
        Err(_) => {
            errors.add(field, "A valid number is required.");
            return Decimal::ZERO;
        }
    };
    if let Err(message) = check_precision(&parsed, PRICE_MAX_DIGITS, PRICE_DECIMAL_PLACES) {
        errors.add(field, message);
        return Decimal::ZERO;
    }
    normalize_price(parsed)
}

/// Rounds to and pads out two fractional digits.
pub fn normalize_price(value: Decimal) -> Decimal {
    let mut value = value.round_dp(PRICE_DECIMAL_PLACES);
    value.rescale(PRICE_DECIMAL_PLACES);
    value
}
