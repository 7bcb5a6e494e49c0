//! City value type.
//!
//! A city is picked from a small catalog on a separate screen.  The catalog
//! itself is configuration data; [`default_catalog`] returns the entries the
//! application ships with.

use serde::{Deserialize, Serialize};

/// Identifier of a city in the catalog (e.g. `"2"` for Jakarta).
pub type CityId = String;

/// A selectable city.
///
/// Equality compares both the identifier and the display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct City {
    /// Catalog identifier.
    pub id: CityId,
    /// Display name shown on the form.
    pub name: String,
}

impl City {
    /// Creates a city from its identifier and display name.
    pub fn new(id: impl Into<CityId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn bekasi() -> Self {
        Self::new("1", "Bekasi")
    }

    pub fn jakarta() -> Self {
        Self::new("2", "Jakarta")
    }

    pub fn semarang() -> Self {
        Self::new("3", "Semarang")
    }
}

/// Returns the built-in city catalog in display order.
pub fn default_catalog() -> Vec<City> {
    vec![City::bekasi(), City::jakarta(), City::semarang()]
}
