use mazewalk_common::{CellCoord, Facing, ViewMode};
use mazewalk_kernel::{GameState, MovementPhase};

/// Read-only queries against the game state for the HUD and tooling.
pub struct GameInspector;

impl GameInspector {
    pub fn summary(state: &GameState) -> GameSummary {
        let player = state.player();
        GameSummary {
            frame: state.frame(),
            cell: player.cell(),
            facing: player.facing(),
            heading: player.heading(),
            view_mode: state.view_mode(),
            phase: state.movement_phase(),
            progress: state.motion().progress(),
            completed: state.is_completed(),
            completion_alpha: state.completion_alpha(),
            pending_events: state.events().len(),
        }
    }
}

/// Snapshot of the player-facing state.
#[derive(Debug, Clone)]
pub struct GameSummary {
    pub frame: u64,
    pub cell: CellCoord,
    pub facing: Facing,
    pub heading: f32,
    pub view_mode: ViewMode,
    pub phase: MovementPhase,
    pub progress: f32,
    pub completed: bool,
    pub completion_alpha: f32,
    pub pending_events: usize,
}

impl GameSummary {
    /// The HUD status line.
    pub fn status_line(&self) -> String {
        format!(
            "View: {}  Cell: {}  Facing: {} ({:.0}°)",
            self.view_mode, self.cell, self.facing, self.heading
        )
    }
}

impl std::fmt::Display for GameSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Game: frame={} cell={} facing={} heading={:.0} view={} phase={:?} progress={:.2} completed={} alpha={:.2} pending_events={}",
            self.frame,
            self.cell,
            self.facing,
            self.heading,
            self.view_mode,
            self.phase,
            self.progress,
            self.completed,
            self.completion_alpha,
            self.pending_events,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazewalk_kernel::{GameConfig, GridMap};

    fn game() -> GameState {
        GameState::new(GridMap::builtin(), GameConfig::default()).unwrap()
    }

    #[test]
    fn summary_fresh_game() {
        let s = GameInspector::summary(&game());
        assert_eq!(s.frame, 0);
        assert_eq!(s.cell, CellCoord::new(9, 1));
        assert_eq!(s.phase, MovementPhase::Idle);
        assert!(!s.completed);
    }

    #[test]
    fn summary_tracks_moves() {
        let mut g = game();
        g.try_advance();
        g.tick(0.1);
        let s = GameInspector::summary(&g);
        assert_eq!(s.frame, 1);
        assert_eq!(s.cell, CellCoord::new(8, 1));
        assert_eq!(s.phase, MovementPhase::InTransit);
        assert_eq!(s.pending_events, 1);
    }

    #[test]
    fn status_line_format() {
        let mut g = game();
        g.turn_right();
        let line = GameInspector::summary(&g).status_line();
        assert_eq!(line, "View: first-person  Cell: (9, 1)  Facing: right (90°)");
    }

    #[test]
    fn summary_display() {
        let s = format!("{}", GameInspector::summary(&game()));
        assert!(s.contains("frame=0"));
        assert!(s.contains("completed=false"));
    }
}
