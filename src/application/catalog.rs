//! Paint catalog operations.
//!
//! Each operation consumes the current collection and hands back the
//! updated one. An id that matches nothing leaves the collection as it was.

use crate::domain::{Paint, PaintField};

pub fn add_paint(mut paints: Vec<Paint>) -> Vec<Paint> {
    paints.push(Paint::new());
    paints
}

pub fn update_paint(mut paints: Vec<Paint>, id: &str, field: PaintField) -> Vec<Paint> {
    if let Some(paint) = paints.iter_mut().find(|p| p.id == id) {
        paint.apply(field);
    }
    paints
}

/// Walls still pointing at the removed paint keep their reference.
pub fn delete_paint(mut paints: Vec<Paint>, id: &str) -> Vec<Paint> {
    paints.retain(|p| p.id != id);
    paints
}
