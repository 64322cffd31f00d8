//! Maze kernel: authoritative game state and the per-frame update pipeline.
//!
//! # Invariants
//! - The logical player cell is committed when a move starts; the rendered
//!   position follows through interpolation.
//! - Turn and advance requests are ignored while a move is in transit.
//! - Completion is a one-way latch read from the logical cell.
//! - Per frame: completion check, then fade, then interpolation.

pub mod completion;
pub mod config;
pub mod game;
pub mod grid;
pub mod motion;
pub mod player;

pub use completion::CompletionTracker;
pub use config::{ConfigError, GameConfig};
pub use game::{GameError, GameEvent, GameState, MoveOutcome, MovementPhase};
pub use grid::{CellKind, GridMap, MapError};
pub use motion::MotionState;
pub use player::Player;
