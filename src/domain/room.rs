use super::error::FieldError;
use super::measure::{normalize_measure, parse_measure};
use super::paint::PaintId;
use serde::{Deserialize, Serialize};

/// Unique identifier for a room
pub type RoomId = String;

/// Unique identifier for a wall within a room
pub type WallId = String;

pub const DEFAULT_ROOM_NAME: &str = "New Room";
pub const DEFAULT_WALL_NAME: &str = "New Wall";

/// A room and the walls it owns, in display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Room {
    pub id: RoomId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub walls: Vec<Wall>,
}

impl Room {
    pub fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: DEFAULT_ROOM_NAME.to_string(),
            walls: Vec::new(),
        }
    }

    pub fn apply(&mut self, field: RoomField) {
        match field {
            RoomField::Name(name) => self.name = name,
        }
    }
}

impl Default for Room {
    fn default() -> Self {
        Self::new()
    }
}

/// A paintable surface. Dimensions are in meters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Wall {
    pub id: WallId,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Assigned paint; empty means no paint selected. May dangle.
    #[serde(default)]
    pub paint_id: PaintId,
}

impl Wall {
    pub fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: DEFAULT_WALL_NAME.to_string(),
            length: None,
            height: None,
            paint_id: String::new(),
        }
    }

    /// Surface in square meters, once both dimensions are entered.
    pub fn area(&self) -> Option<f64> {
        Some(self.length? * self.height?)
    }

    /// The assigned paint id, if one was selected.
    pub fn paint(&self) -> Option<&str> {
        (!self.paint_id.is_empty()).then_some(self.paint_id.as_str())
    }

    pub fn apply(&mut self, field: WallField) {
        match field {
            WallField::Name(name) => self.name = name,
            WallField::Length(length) => self.length = normalize_measure(length),
            WallField::Height(height) => self.height = normalize_measure(height),
            WallField::PaintId(paint_id) => self.paint_id = paint_id,
        }
    }
}

impl Default for Wall {
    fn default() -> Self {
        Self::new()
    }
}

/// A single-field update to a [`Room`].
#[derive(Debug, Clone, PartialEq)]
pub enum RoomField {
    Name(String),
}

impl RoomField {
    pub fn from_input(field: &str, raw: &str) -> Result<Self, FieldError> {
        match field.trim().to_lowercase().as_str() {
            "name" => Ok(Self::Name(raw.to_string())),
            other => Err(FieldError::UnknownField {
                entity: "room",
                field: other.to_string(),
            }),
        }
    }
}

/// A single-field update to a [`Wall`].
#[derive(Debug, Clone, PartialEq)]
pub enum WallField {
    Name(String),
    Length(Option<f64>),
    Height(Option<f64>),
    PaintId(PaintId),
}

impl WallField {
    pub fn from_input(field: &str, raw: &str) -> Result<Self, FieldError> {
        match field.trim().to_lowercase().as_str() {
            "name" => Ok(Self::Name(raw.to_string())),
            "length" => Ok(Self::Length(parse_measure(raw))),
            "height" => Ok(Self::Height(parse_measure(raw))),
            "paintid" | "paint_id" | "paint" => Ok(Self::PaintId(raw.trim().to_string())),
            other => Err(FieldError::UnknownField {
                entity: "wall",
                field: other.to_string(),
            }),
        }
    }
}
