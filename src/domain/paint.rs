use super::error::FieldError;
use super::measure::{normalize_measure, parse_measure};
use serde::{Deserialize, Serialize};

/// Unique identifier for a paint product
pub type PaintId = String;

/// A paint product that walls can be assigned to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Paint {
    pub id: PaintId,
    /// Display name shown in pickers and the summary.
    #[serde(default)]
    pub name: String,
    /// Manufacturer product code.
    #[serde(default)]
    pub code: String,
    /// Square meters covered by one liter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage: Option<f64>,
    /// Price per square meter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl Paint {
    /// A blank paint with a fresh id.
    pub fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: String::new(),
            code: String::new(),
            coverage: None,
            price: None,
        }
    }

    pub fn apply(&mut self, field: PaintField) {
        match field {
            PaintField::Name(name) => self.name = name,
            PaintField::Code(code) => self.code = code,
            PaintField::Coverage(coverage) => self.coverage = normalize_measure(coverage),
            PaintField::Price(price) => self.price = normalize_measure(price),
        }
    }
}

impl Default for Paint {
    fn default() -> Self {
        Self::new()
    }
}

/// A single-field update to a [`Paint`].
#[derive(Debug, Clone, PartialEq)]
pub enum PaintField {
    Name(String),
    Code(String),
    Coverage(Option<f64>),
    Price(Option<f64>),
}

impl PaintField {
    /// Build an update from a field key and the raw text typed by the user.
    pub fn from_input(field: &str, raw: &str) -> Result<Self, FieldError> {
        match field.trim().to_lowercase().as_str() {
            "name" => Ok(Self::Name(raw.to_string())),
            "code" => Ok(Self::Code(raw.to_string())),
            "coverage" => Ok(Self::Coverage(parse_measure(raw))),
            "price" => Ok(Self::Price(parse_measure(raw))),
            other => Err(FieldError::UnknownField {
                entity: "paint",
                field: other.to_string(),
            }),
        }
    }
}
