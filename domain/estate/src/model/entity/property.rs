use std::fmt;

use architecture::AggregateRoot;

/// A property that holds appliances, e.g. "Blackhorse Mills / Flat #101".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Property {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    /// Opaque reference to an uploaded shipping label image.
    pub shipping_label: Option<String>,
}

impl AggregateRoot for Property {
    fn id(&self) -> i32 {
        self.id
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
