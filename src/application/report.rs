//! Summary view of the totals, ready for display.

use super::totals::Totals;
use crate::domain::{PaintId, Plan};
use std::collections::HashSet;
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryLine {
    pub paint_id: PaintId,
    pub name: String,
    pub code: String,
    pub area: f64,
    pub liters: f64,
    pub cost: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub lines: Vec<SummaryLine>,
    pub grand_total_cost: f64,
}

/// Lines follow catalog order, one per paint id. Buckets without a
/// matching paint are left out.
pub fn summarize(plan: &Plan, totals: &Totals) -> Summary {
    let mut seen = HashSet::new();
    let lines = plan
        .paints
        .iter()
        .filter_map(|paint| {
            let bucket = totals.for_paint(&paint.id)?;
            if !seen.insert(paint.id.as_str()) {
                return None;
            }
            Some(SummaryLine {
                paint_id: paint.id.clone(),
                name: paint.name.clone(),
                code: paint.code.clone(),
                area: bucket.area,
                liters: bucket.liters,
                cost: bucket.cost,
            })
        })
        .collect();

    Summary {
        lines,
        grand_total_cost: totals.grand_total_cost,
    }
}

impl Summary {
    pub fn render(&self, currency: &str) -> String {
        let mut out = String::new();
        for line in &self.lines {
            let _ = writeln!(out, "{} ({})", display_name(&line.name), line.code);
            let _ = writeln!(out, "  Area:   {:.2} m²", line.area);
            let _ = writeln!(out, "  Amount: {:.2} L", line.liters);
            let _ = writeln!(out, "  Cost:   {currency}{:.2}", line.cost);
        }
        let _ = write!(out, "Total Cost: {currency}{:.2}", self.grand_total_cost);
        out
    }
}

fn display_name(name: &str) -> &str {
    if name.trim().is_empty() {
        "(unnamed)"
    } else {
        name
    }
}
