//! Paint requirement totals.
//!
//! Walls are matched to their paint by id. A wall only counts once its
//! length and height are entered and its paint has both coverage and
//! price; otherwise it is skipped as a whole, never counted as zero.

use crate::domain::{Paint, PaintId, Room, RoomId, WallId};
use std::collections::HashMap;

/// Accumulated requirement for one paint.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaintTotals {
    /// Square meters to cover.
    pub area: f64,
    /// Liters needed.
    pub liters: f64,
    /// Cost in euros.
    pub cost: f64,
}

/// Why a wall did not contribute to the totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionReason {
    /// No paint selected.
    NoPaint,
    /// The selected paint is not in the catalog anymore.
    UnknownPaint,
    /// Length or height not entered.
    MissingDimensions,
    /// The paint has no coverage or no price.
    PaintNotConfigured,
    ZeroCoverage,
}

impl std::fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            ExclusionReason::NoPaint => "no paint selected",
            ExclusionReason::UnknownPaint => "paint not found",
            ExclusionReason::MissingDimensions => "missing length or height",
            ExclusionReason::PaintNotConfigured => "paint has no coverage or price",
            ExclusionReason::ZeroCoverage => "paint coverage is zero",
        };
        write!(f, "{value}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedWall {
    pub room_id: RoomId,
    pub wall_id: WallId,
    pub reason: ExclusionReason,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Totals {
    pub per_paint: HashMap<PaintId, PaintTotals>,
    pub grand_total_cost: f64,
    pub skipped: Vec<SkippedWall>,
}

impl Totals {
    pub fn for_paint(&self, id: &str) -> Option<&PaintTotals> {
        self.per_paint.get(id)
    }
}

struct Contribution {
    area: f64,
    liters: f64,
    cost: f64,
}

pub fn compute_totals(paints: &[Paint], rooms: &[Room]) -> Totals {
    // First paint wins when a hand-edited record repeats an id.
    let mut catalog: HashMap<&str, &Paint> = HashMap::with_capacity(paints.len());
    for paint in paints {
        catalog.entry(paint.id.as_str()).or_insert(paint);
    }
    let mut totals = Totals::default();

    for room in rooms {
        for wall in &room.walls {
            let outcome = match wall.paint() {
                None => Err(ExclusionReason::NoPaint),
                Some(paint_id) => match catalog.get(paint_id) {
                    None => Err(ExclusionReason::UnknownPaint),
                    Some(paint) => contribution(wall.length, wall.height, paint),
                },
            };

            match outcome {
                Ok(c) => {
                    let bucket = totals.per_paint.entry(wall.paint_id.clone()).or_default();
                    bucket.area += c.area;
                    bucket.liters += c.liters;
                    bucket.cost += c.cost;
                    totals.grand_total_cost += c.cost;
                }
                Err(reason) => {
                    log::debug!("wall {} in room {} skipped: {}", wall.id, room.id, reason);
                    totals.skipped.push(SkippedWall {
                        room_id: room.id.clone(),
                        wall_id: wall.id.clone(),
                        reason,
                    });
                }
            }
        }
    }

    totals
}

fn contribution(
    length: Option<f64>,
    height: Option<f64>,
    paint: &Paint,
) -> Result<Contribution, ExclusionReason> {
    let (Some(length), Some(height)) = (usable(length), usable(height)) else {
        return Err(ExclusionReason::MissingDimensions);
    };
    let (Some(coverage), Some(price)) = (usable(paint.coverage), usable(paint.price)) else {
        return Err(ExclusionReason::PaintNotConfigured);
    };
    if coverage == 0.0 {
        return Err(ExclusionReason::ZeroCoverage);
    }

    let area = length * height;
    Ok(Contribution {
        area,
        liters: area / coverage,
        cost: area * price,
    })
}

// Persisted data is accepted as-is, so re-check what the setters guarantee.
fn usable(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v >= 0.0)
}
