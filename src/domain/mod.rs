//! Domain types for PaintCalc
//! Defines paints, rooms, walls and the typed field updates applied to them.

pub mod error;
pub mod measure;
pub mod paint;
pub mod plan;
pub mod room;

pub use error::*;
pub use measure::*;
pub use paint::*;
pub use plan::*;
pub use room::*;
