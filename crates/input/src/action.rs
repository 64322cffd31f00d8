use mazewalk_common::ViewMode;
use serde::{Deserialize, Serialize};

/// A high-level action produced from input.
///
/// The game loop consumes actions, never raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Step one cell forward.
    Advance,
    /// Rotate 90 degrees counter-clockwise.
    TurnLeft,
    /// Rotate 90 degrees clockwise.
    TurnRight,
    /// Switch the active camera.
    SelectView(ViewMode),
    /// Leave the session.
    Quit,
}

impl Action {
    /// Whether the action moves or rotates the player.
    pub fn is_movement(self) -> bool {
        matches!(self, Action::Advance | Action::TurnLeft | Action::TurnRight)
    }
}
