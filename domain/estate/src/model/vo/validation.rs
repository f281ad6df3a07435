use std::collections::BTreeMap;
use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

pub const REQUIRED: &str = "This field is required.";
pub const BLANK: &str = "This field may not be blank.";
pub const NULL: &str = "This field may not be null.";

/// Field name to error messages, sorted by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_owned()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn extend(&mut self, other: ValidationErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    /// `Ok(value)` only if nothing was recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    /// Folds a validation outcome into the errors collected so far.
    pub fn combine<T>(mut self, outcome: Result<T, ValidationErrors>) -> Result<T, ValidationErrors> {
        match outcome {
            Ok(value) => self.into_result(value),
            Err(errors) => {
                self.extend(errors);
                Err(self)
            }
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            first = false;
            write!(f, "{field}: {}", messages.join(" "))?;
        }
        Ok(())
    }
}

fn max_length_message(max_length: usize) -> String {
    format!("Ensure this field has no more than {max_length} characters.")
}

/// A field that must be sent and must not be `null`.
///
/// `None` is absent, `Some(None)` is an explicit `null`.
pub fn required<T>(errors: &mut ValidationErrors, field: &str, value: Option<Option<T>>) -> Option<T> {
    match value {
        None => {
            errors.add(field, REQUIRED);
            None
        }
        Some(None) => {
            errors.add(field, NULL);
            None
        }
        Some(value) => value,
    }
}

/// A required, non-blank string of at most `max_length` characters, whitespace trimmed.
pub fn required_text(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<Option<String>>,
    max_length: usize,
) -> String {
    let Some(value) = required(errors, field, value) else {
        return String::new();
    };
    let value = value.trim().to_owned();
    if value.is_empty() {
        errors.add(field, BLANK);
    } else if value.chars().count() > max_length {
        errors.add(field, max_length_message(max_length));
    }
    value
}

/// An optional string of at most `max_length` characters. Blank is allowed.
pub fn optional_text(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<String>,
    max_length: usize,
) -> Option<String> {
    let value = value?.trim().to_owned();
    if value.chars().count() > max_length {
        errors.add(field, max_length_message(max_length));
    }
    Some(value)
}

/// A required foreign key. Existence is checked by the caller against the store.
pub fn required_reference(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<Option<i32>>,
) -> i32 {
    required(errors, field, value).unwrap_or_default()
}

pub fn missing_reference_message(id: i32) -> String {
    format!("Invalid pk \"{id}\" - object does not exist.")
}

/// An integer in `0..=i32::MAX`, defaulting to `0` when absent. `null` is rejected.
pub fn non_negative_integer(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<Option<i64>>,
) -> i32 {
    let value = match value {
        None => 0,
        Some(None) => {
            errors.add(field, NULL);
            return 0;
        }
        Some(Some(value)) => value,
    };
    if value < 0 {
        errors.add(field, "Ensure this value is greater than or equal to 0.");
        return 0;
    }
    match i32::try_from(value) {
        Ok(value) => value,
        Err(_) => {
            errors.add(
                field,
                format!("Ensure this value is less than or equal to {}.", i32::MAX),
            );
            0
        }
    }
}

pub fn optional_date(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<String>,
) -> Option<NaiveDate> {
    let value = value?;
    match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            errors.add(
                field,
                "Date has wrong format. Use one of these formats instead: YYYY-MM-DD.",
            );
            None
        }
    }
}

/// Accepts `HH:MM`, `HH:MM:SS` and `HH:MM:SS.ffffff`.
pub fn optional_time(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<String>,
) -> Option<NaiveTime> {
    let value = value?;
    let value = value.trim();
    let parsed = NaiveTime::parse_from_str(value, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"));
    match parsed {
        Ok(time) => Some(time),
        Err(_) => {
            errors.add(
                field,
                "Time has wrong format. Use one of these formats instead: hh:mm[:ss[.uuuuuu]].",
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        let mut errors = ValidationErrors::default();
        required_text(&mut errors, "name", None, 10);
        required_text(&mut errors, "brand", Some(Some("  ".to_string())), 10);
        required_text(&mut errors, "model_number", Some(Some("x".repeat(11))), 10);
        required_text(&mut errors, "usage", Some(None), 10);
        assert_eq!(errors.get("name").unwrap(), [REQUIRED]);
        assert_eq!(errors.get("brand").unwrap(), [BLANK]);
        assert_eq!(errors.get("usage").unwrap(), [NULL]);
        assert_eq!(
            errors.get("model_number").unwrap(),
            ["Ensure this field has no more than 10 characters."]
        );

        let mut errors = ValidationErrors::default();
        let value = required_text(&mut errors, "name", Some(Some(" Flat #101 ".to_string())), 10);
        assert!(errors.is_empty());
        assert_eq!(value, "Flat #101");
    }

    #[test]
    fn test_length_counts_characters() {
        let mut errors = ValidationErrors::default();
        optional_text(&mut errors, "usage", Some("é".repeat(5)), 5);
        assert!(errors.is_empty());
        optional_text(&mut errors, "usage", Some(String::new()), 5);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_non_negative_integer() {
        let mut errors = ValidationErrors::default();
        assert_eq!(non_negative_integer(&mut errors, "score", None), 0);
        assert_eq!(non_negative_integer(&mut errors, "score", Some(Some(90))), 90);
        assert!(errors.is_empty());

        non_negative_integer(&mut errors, "score", Some(Some(-1)));
        assert_eq!(
            errors.get("score").unwrap(),
            ["Ensure this value is greater than or equal to 0."]
        );

        let mut errors = ValidationErrors::default();
        non_negative_integer(&mut errors, "score", Some(Some(i64::from(i32::MAX) + 1)));
        assert!(errors.get("score").is_some());

        let mut errors = ValidationErrors::default();
        assert_eq!(non_negative_integer(&mut errors, "score", Some(None)), 0);
        assert_eq!(errors.get("score").unwrap(), [NULL]);
    }

    #[test]
    fn test_schedule_formats() {
        let mut errors = ValidationErrors::default();
        assert_eq!(
            optional_date(&mut errors, "d", Some("2025-04-05".to_string())),
            NaiveDate::from_ymd_opt(2025, 4, 5)
        );
        assert_eq!(
            optional_time(&mut errors, "t", Some("10:30".to_string())),
            NaiveTime::from_hms_opt(10, 30, 0)
        );
        assert_eq!(
            optional_time(&mut errors, "t", Some("10:30:15".to_string())),
            NaiveTime::from_hms_opt(10, 30, 15)
        );
        assert!(errors.is_empty());

        optional_date(&mut errors, "d", Some("05/04/2025".to_string()));
        optional_time(&mut errors, "t", Some("25:00".to_string()));
        assert_eq!(errors.fields().collect::<Vec<_>>(), ["d", "t"]);
    }

    #[test]
    fn test_combine_keeps_both_sides() {
        let mut first = ValidationErrors::default();
        first.add("property", missing_reference_message(7));
        let mut second = ValidationErrors::default();
        second.add("name", REQUIRED);

        let errors = first.combine::<()>(Err(second)).unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), ["name", "property"]);
        assert_eq!(
            errors.get("property").unwrap(),
            ["Invalid pk \"7\" - object does not exist."]
        );
        assert_eq!(ValidationErrors::default().combine(Ok(1)), Ok(1));
    }
}
