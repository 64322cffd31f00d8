//! Shared value types for the maze walker: cell addresses, facings, view modes, colors.

mod types;

pub use types::{CellCoord, Color, Facing, ViewMode, normalize_degrees};
