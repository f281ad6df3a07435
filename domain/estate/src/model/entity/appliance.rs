use std::fmt;

use architecture::AggregateRoot;

/// An appliance installed in a property.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Appliance {
    pub id: i32,
    /// Owning property.
    pub property_id: i32,
    pub name: String,
    pub brand: String,
    pub model_number: String,
    /// Free-text usage intensity, e.g. "High".
    pub usage: Option<String>,
    /// Opaque reference to an uploaded image.
    pub image: Option<String>,
}

impl AggregateRoot for Appliance {
    fn id(&self) -> i32 {
        self.id
    }
}

impl fmt::Display for Appliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} - {})", self.name, self.brand, self.model_number)
    }
}
