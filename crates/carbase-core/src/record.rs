//! Vehicle record model and field selectors.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CarbaseError;

/// Longest text token accepted from interactive input.
pub const MAX_FIELD_LEN: usize = 99;

/// Number of fields (and data-file lines) per record.
pub const FIELD_COUNT: usize = 7;

/// One vehicle entry. Every field is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleRecord {
    pub brand: String,
    pub model: String,
    pub year: i32,
    /// Engine capacity in cm³
    pub capacity: i32,
    pub fuel: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub registration: String,
}

impl VehicleRecord {
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        capacity: i32,
        fuel: impl Into<String>,
        vehicle_type: impl Into<String>,
        registration: impl Into<String>,
    ) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            year,
            capacity,
            fuel: fuel.into(),
            vehicle_type: vehicle_type.into(),
            registration: registration.into(),
        }
    }

    /// Borrow a text field. Returns `None` for numeric fields.
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Brand => Some(&self.brand),
            Field::Model => Some(&self.model),
            Field::Fuel => Some(&self.fuel),
            Field::VehicleType => Some(&self.vehicle_type),
            Field::Registration => Some(&self.registration),
            Field::Year | Field::Capacity => None,
        }
    }

    /// Read a numeric field. Returns `None` for text fields.
    pub fn number(&self, field: Field) -> Option<i32> {
        match field {
            Field::Year => Some(self.year),
            Field::Capacity => Some(self.capacity),
            _ => None,
        }
    }

    /// First text field that would not survive a save and reload: empty, or
    /// holding whitespace that splits it into several tokens.
    pub fn unsavable_field(&self) -> Option<Field> {
        Field::ALL.into_iter().find(|&field| {
            self.text(field)
                .is_some_and(|value| value.is_empty() || value.contains(char::is_whitespace))
        })
    }
}

/// Whether a field holds text or an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Numeric,
}

/// Field selector, in data-file and menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Brand,
    Model,
    Year,
    Capacity,
    Fuel,
    VehicleType,
    Registration,
}

impl Field {
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::Brand,
        Field::Model,
        Field::Year,
        Field::Capacity,
        Field::Fuel,
        Field::VehicleType,
        Field::Registration,
    ];

    pub fn kind(self) -> FieldKind {
        match self {
            Field::Year | Field::Capacity => FieldKind::Numeric,
            _ => FieldKind::Text,
        }
    }

    /// Stable lowercase name used by the CLI and JSON output.
    pub fn name(self) -> &'static str {
        match self {
            Field::Brand => "brand",
            Field::Model => "model",
            Field::Year => "year",
            Field::Capacity => "capacity",
            Field::Fuel => "fuel",
            Field::VehicleType => "type",
            Field::Registration => "registration",
        }
    }

    /// Human label as shown in record listings.
    pub fn label(self) -> &'static str {
        match self {
            Field::Brand => "Brand",
            Field::Model => "Model",
            Field::Year => "Year",
            Field::Capacity => "Engine capacity",
            Field::Fuel => "Fuel",
            Field::VehicleType => "Vehicle type",
            Field::Registration => "Registration number",
        }
    }

    /// Resolve a 1-based search sub-menu number (1 = brand .. 7 = registration).
    pub fn from_menu(number: u32) -> Result<Field, CarbaseError> {
        number
            .checked_sub(1)
            .and_then(|index| Field::ALL.get(index as usize).copied())
            .ok_or_else(|| CarbaseError::InvalidField(format!("menu option {}", number)))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = CarbaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "brand" => Ok(Field::Brand),
            "model" => Ok(Field::Model),
            "year" => Ok(Field::Year),
            "capacity" => Ok(Field::Capacity),
            "fuel" => Ok(Field::Fuel),
            "type" | "vehicle-type" | "vehicle_type" => Ok(Field::VehicleType),
            "registration" | "reg" => Ok(Field::Registration),
            _ => Err(CarbaseError::InvalidField(s.to_string())),
        }
    }
}
