use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell address in the maze grid. Row 0 is the top edge of the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    pub row: usize,
    pub col: usize,
}

impl CellCoord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The neighbouring cell one step along `facing`, or `None` when the step
    /// would leave the non-negative quadrant. Upper bounds are the grid's concern.
    pub fn step(self, facing: Facing) -> Option<CellCoord> {
        let (dr, dc) = facing.offset();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(CellCoord { row, col })
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Discrete movement direction of the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    Up,
    Down,
    Left,
    Right,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::Up, Facing::Right, Facing::Down, Facing::Left];

    /// Quadrant mapping from a heading in degrees.
    ///
    /// `[315, 360) ∪ [0, 45)` is Up, `[45, 135)` Right, `[135, 225)` Down and
    /// `[225, 315)` Left. The heading is normalized first, so any finite
    /// angle maps to exactly one facing.
    pub fn from_heading(degrees: f32) -> Facing {
        let h = normalize_degrees(degrees);
        if !(45.0..315.0).contains(&h) {
            Facing::Up
        } else if h < 135.0 {
            Facing::Right
        } else if h < 225.0 {
            Facing::Down
        } else {
            Facing::Left
        }
    }

    /// Canonical heading of this facing (0 = up, clockwise).
    pub fn heading(self) -> f32 {
        match self {
            Facing::Up => 0.0,
            Facing::Right => 90.0,
            Facing::Down => 180.0,
            Facing::Left => 270.0,
        }
    }

    /// Row/column delta of one step in this direction.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Facing::Up => (-1, 0),
            Facing::Down => (1, 0),
            Facing::Left => (0, -1),
            Facing::Right => (0, 1),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Facing::Up => "up",
            Facing::Down => "down",
            Facing::Left => "left",
            Facing::Right => "right",
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Wrap an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Which camera drives the frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    FirstPerson,
    ThirdPerson,
    Overhead,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::FirstPerson, ViewMode::ThirdPerson, ViewMode::Overhead];

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::FirstPerson => "first-person",
            ViewMode::ThirdPerson => "third-person",
            ViewMode::Overhead => "overhead",
        }
    }

    /// Parse a user-facing view name (`first`, `third`, `overhead`, or `1`..`3`).
    pub fn parse(name: &str) -> Option<ViewMode> {
        match name.trim().to_ascii_lowercase().as_str() {
            "1" | "first" | "first-person" | "first_person" => Some(ViewMode::FirstPerson),
            "2" | "third" | "third-person" | "third_person" => Some(ViewMode::ThirdPerson),
            "3" | "overhead" | "global" | "top" => Some(ViewMode::Overhead),
            _ => None,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Linear RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WALL: Color = Color::rgb(0.9, 0.9, 0.9);
    pub const EXIT: Color = Color::rgb(1.0, 0.3, 0.3);
    pub const PLAYER: Color = Color::rgb(0.2, 1.0, 0.3);
    pub const BACKGROUND: Color = Color::rgb(0.15, 0.18, 0.2);
    pub const HINT: Color = Color::rgb(0.8, 0.8, 0.8);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facing_boundaries() {
        assert_eq!(Facing::from_heading(0.0), Facing::Up);
        assert_eq!(Facing::from_heading(44.999), Facing::Up);
        assert_eq!(Facing::from_heading(45.0), Facing::Right);
        assert_eq!(Facing::from_heading(135.0), Facing::Down);
        assert_eq!(Facing::from_heading(225.0), Facing::Left);
        assert_eq!(Facing::from_heading(315.0), Facing::Up);
        assert_eq!(Facing::from_heading(360.0), Facing::Up);
    }

    #[test]
    fn facing_mapping_is_total() {
        // Every tenth of a degree lands in exactly one quadrant.
        let mut counts = [0usize; 4];
        for i in 0..3600 {
            let h = i as f32 / 10.0;
            let idx = match Facing::from_heading(h) {
                Facing::Up => 0,
                Facing::Right => 1,
                Facing::Down => 2,
                Facing::Left => 3,
            };
            counts[idx] += 1;
        }
        assert_eq!(counts.iter().sum::<usize>(), 3600);
        assert_eq!(counts, [900, 900, 900, 900]);
    }

    #[test]
    fn canonical_headings_round_trip() {
        for facing in Facing::ALL {
            assert_eq!(Facing::from_heading(facing.heading()), facing);
        }
    }

    #[test]
    fn normalize_wraps_negative_and_large() {
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(450.0), 90.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        let tiny = normalize_degrees(-1e-9);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn step_stops_at_zero() {
        let origin = CellCoord::new(0, 0);
        assert_eq!(origin.step(Facing::Up), None);
        assert_eq!(origin.step(Facing::Left), None);
        assert_eq!(origin.step(Facing::Down), Some(CellCoord::new(1, 0)));
        assert_eq!(origin.step(Facing::Right), Some(CellCoord::new(0, 1)));
    }

    #[test]
    fn view_mode_parse() {
        assert_eq!(ViewMode::parse("third"), Some(ViewMode::ThirdPerson));
        assert_eq!(ViewMode::parse(" 3 "), Some(ViewMode::Overhead));
        assert_eq!(ViewMode::parse("sideways"), None);
        assert_eq!(ViewMode::default(), ViewMode::FirstPerson);
    }
}
