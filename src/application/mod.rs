//! Application layer (use-cases, policies).
//!
//! Pure operations over the plan: catalog and layout mutations, totals,
//! and the summary shown to the user. Nothing here touches storage.

pub mod catalog;
pub mod layout;
pub mod report;
pub mod totals;

pub use catalog::{add_paint, delete_paint, update_paint};
pub use layout::{add_room, add_wall, delete_room, delete_wall, update_room, update_wall};
pub use report::{Summary, SummaryLine, summarize};
pub use totals::{ExclusionReason, PaintTotals, SkippedWall, Totals, compute_totals};
