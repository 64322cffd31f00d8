use mazewalk_common::{CellCoord, Facing, normalize_degrees};
use serde::{Deserialize, Serialize};

/// Logical player state: the committed cell plus orientation.
///
/// `facing` is always `Facing::from_heading(heading)`; both are only changed
/// together through [`Player::rotate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    cell: CellCoord,
    facing: Facing,
    heading: f32,
}

impl Player {
    /// Place a player on `cell`, facing up.
    pub fn new(cell: CellCoord) -> Self {
        Self {
            cell,
            facing: Facing::Up,
            heading: 0.0,
        }
    }

    pub fn cell(&self) -> CellCoord {
        self.cell
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Heading in degrees, in `[0, 360)`. 0 is up, 90 is right.
    pub fn heading(&self) -> f32 {
        self.heading
    }

    /// Cell one step ahead, if it does not underflow the grid origin.
    pub fn ahead(&self) -> Option<CellCoord> {
        self.cell.step(self.facing)
    }

    pub(crate) fn rotate(&mut self, delta_degrees: f32) {
        self.heading = normalize_degrees(self.heading + delta_degrees);
        self.facing = Facing::from_heading(self.heading);
    }

    pub(crate) fn set_cell(&mut self, cell: CellCoord) {
        self.cell = cell;
    }
}
