use crate::completion::CompletionTracker;
use crate::config::{ConfigError, GameConfig};
use crate::grid::{CellKind, GridMap, MapError};
use crate::motion::MotionState;
use crate::player::Player;
use glam::Vec3;
use mazewalk_common::{CellCoord, Facing, ViewMode};
use serde::{Deserialize, Serialize};

/// A record of every observable change to the game state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The player rotated in place.
    Turned { heading: f32, facing: Facing },
    /// A move between cells began. The logical cell is already `to`.
    MoveStarted { from: CellCoord, to: CellCoord },
    /// The visual interpolation reached its destination cell.
    MoveFinished { cell: CellCoord },
    /// An advance was refused because the cell ahead is a wall or off the map.
    Blocked { from: CellCoord, facing: Facing },
    /// The active camera changed.
    ViewChanged { mode: ViewMode },
    /// The player stood on an exit cell. Emitted exactly once.
    Completed { cell: CellCoord, frame: u64 },
}

/// Result of a movement request. Callers may ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Turned(Facing),
    Started { from: CellCoord, to: CellCoord },
    Blocked,
    /// Rejected because a move is still animating.
    Busy,
}

/// Whether the player is free to act or still animating between cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementPhase {
    Idle,
    InTransit,
}

/// Errors from building a game.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("map error: {0}")]
    Map(#[from] MapError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("no exit cell is reachable from start {start}")]
    NoReachableExit { start: CellCoord },
}

/// The whole mutable state of one maze session, owned by the frame loop.
///
/// Movement requests update the logical cell eagerly; the rendered position
/// trails behind through [`MotionState`]. Completion always reads the logical
/// cell, so it can latch while the visual move is still in flight.
#[derive(Debug, Clone)]
pub struct GameState {
    map: GridMap,
    config: GameConfig,
    player: Player,
    motion: MotionState,
    completion: CompletionTracker,
    view_mode: ViewMode,
    frame: u64,
    event_log: Vec<GameEvent>,
}

impl GameState {
    /// Start a session on `map`.
    ///
    /// A map without a start cell places the player at the origin (with a
    /// warning). A map whose exits cannot be reached from the start is rejected.
    pub fn new(map: GridMap, config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;

        let start = match map.start() {
            Some(cell) => cell,
            None => {
                tracing::warn!("no start cell found in map, using (0, 0)");
                CellCoord::new(0, 0)
            }
        };

        if map.reachable_exits(start).is_empty() {
            return Err(GameError::NoReachableExit { start });
        }

        let position = map.cell_center(start, config.block_length);
        tracing::info!(
            width = map.width(),
            height = map.height(),
            %start,
            "maze loaded"
        );

        Ok(Self {
            player: Player::new(start),
            motion: MotionState::at_rest(position, config.move_rate),
            completion: CompletionTracker::new(config.fade_rate),
            view_mode: ViewMode::default(),
            frame: 0,
            event_log: Vec::new(),
            map,
            config,
        })
    }

    pub fn map(&self) -> &GridMap {
        &self.map
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn motion(&self) -> &MotionState {
        &self.motion
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Number of ticks run so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn is_completed(&self) -> bool {
        self.completion.is_completed()
    }

    /// Completion overlay alpha in `[0, 1]`.
    pub fn completion_alpha(&self) -> f32 {
        self.completion.alpha()
    }

    pub fn movement_phase(&self) -> MovementPhase {
        if self.motion.in_transit() {
            MovementPhase::InTransit
        } else {
            MovementPhase::Idle
        }
    }

    /// Interpolated world position of the player for rendering.
    pub fn visual_position(&self) -> Vec3 {
        self.motion.position()
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.event_log
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.event_log)
    }

    /// Rotate 90 degrees counter-clockwise.
    pub fn turn_left(&mut self) -> MoveOutcome {
        self.turn(-90.0)
    }

    /// Rotate 90 degrees clockwise.
    pub fn turn_right(&mut self) -> MoveOutcome {
        self.turn(90.0)
    }

    fn turn(&mut self, delta: f32) -> MoveOutcome {
        if self.motion.in_transit() {
            return MoveOutcome::Busy;
        }
        self.player.rotate(delta);
        let (heading, facing) = (self.player.heading(), self.player.facing());
        tracing::debug!(heading, %facing, "turned");
        self.event_log.push(GameEvent::Turned { heading, facing });
        MoveOutcome::Turned(facing)
    }

    /// Step one cell along the current facing if the cell ahead is open.
    pub fn try_advance(&mut self) -> MoveOutcome {
        if self.motion.in_transit() {
            return MoveOutcome::Busy;
        }

        let from = self.player.cell();
        let facing = self.player.facing();
        let Some(to) = self.player.ahead().filter(|cell| self.map.is_passable(*cell)) else {
            tracing::debug!(%from, %facing, "advance blocked");
            self.event_log.push(GameEvent::Blocked { from, facing });
            return MoveOutcome::Blocked;
        };

        let block = self.config.block_length;
        self.motion
            .begin(self.map.cell_center(from, block), self.map.cell_center(to, block));
        self.player.set_cell(to);
        tracing::debug!(%from, %to, "move started");
        self.event_log.push(GameEvent::MoveStarted { from, to });
        MoveOutcome::Started { from, to }
    }

    /// Switch the active camera. View changes are allowed in every state.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if self.view_mode == mode {
            return;
        }
        self.view_mode = mode;
        tracing::debug!(%mode, "view changed");
        self.event_log.push(GameEvent::ViewChanged { mode });
    }

    /// Run one frame: completion check, fade, then interpolation.
    ///
    /// Negative `dt` counts as zero. Capping long frames is left to the host.
    pub fn tick(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        self.frame += 1;

        let cell = self.player.cell();
        let kind = self.map.get(cell).unwrap_or(CellKind::Empty);
        if self.completion.check(kind) {
            tracing::info!(%cell, frame = self.frame, "maze completed");
            self.event_log.push(GameEvent::Completed {
                cell,
                frame: self.frame,
            });
        }

        self.completion.advance_fade(dt);

        if self.motion.tick(dt) {
            self.event_log.push(GameEvent::MoveFinished { cell });
        }

        tracing::trace!(
            frame = self.frame,
            progress = self.motion.progress(),
            alpha = self.completion.alpha(),
            "tick"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn builtin() -> GameState {
        GameState::new(GridMap::builtin(), GameConfig::default()).unwrap()
    }

    fn settle(game: &mut GameState) {
        while game.motion().in_transit() {
            game.tick(DT);
        }
    }

    /// Walk a route of (turns, steps) pairs, settling after every step.
    fn walk(game: &mut GameState, route: &[&str]) {
        for step in route {
            match *step {
                "L" => assert!(matches!(game.turn_left(), MoveOutcome::Turned(_))),
                "R" => assert!(matches!(game.turn_right(), MoveOutcome::Turned(_))),
                "F" => {
                    assert!(
                        matches!(game.try_advance(), MoveOutcome::Started { .. }),
                        "blocked at {}",
                        game.player().cell()
                    );
                    settle(game);
                }
                other => panic!("bad step {other}"),
            }
        }
    }

    #[test]
    fn starts_on_start_cell() {
        let game = builtin();
        assert_eq!(game.player().cell(), CellCoord::new(9, 1));
        assert_eq!(game.player().facing(), Facing::Up);
        assert_eq!(game.movement_phase(), MovementPhase::Idle);
        assert_eq!(game.visual_position(), Vec3::new(60.0, 20.0, 0.0));
    }

    #[test]
    fn advance_from_start_moves_up() {
        let mut game = builtin();
        let outcome = game.try_advance();
        assert_eq!(
            outcome,
            MoveOutcome::Started {
                from: CellCoord::new(9, 1),
                to: CellCoord::new(8, 1)
            }
        );
        assert_eq!(game.player().cell(), CellCoord::new(8, 1));
        assert_eq!(game.movement_phase(), MovementPhase::InTransit);
        assert_eq!(game.motion().progress(), 0.0);
        // Visual position has not moved yet.
        assert_eq!(game.visual_position(), Vec3::new(60.0, 20.0, 0.0));
    }

    #[test]
    fn requests_are_ignored_in_transit() {
        let mut game = builtin();
        game.try_advance();
        let player = *game.player();
        assert_eq!(game.try_advance(), MoveOutcome::Busy);
        assert_eq!(game.turn_left(), MoveOutcome::Busy);
        assert_eq!(game.turn_right(), MoveOutcome::Busy);
        assert_eq!(*game.player(), player);

        settle(&mut game);
        assert_eq!(game.movement_phase(), MovementPhase::Idle);
        assert_eq!(game.visual_position(), Vec3::new(60.0, 60.0, 0.0));
        assert!(matches!(game.turn_right(), MoveOutcome::Turned(Facing::Right)));
    }

    #[test]
    fn blocked_advance_changes_nothing() {
        let mut game = builtin();
        game.turn_right();
        let player = *game.player();
        let motion = *game.motion();
        assert_eq!(game.try_advance(), MoveOutcome::Blocked);
        assert_eq!(*game.player(), player);
        assert_eq!(*game.motion(), motion);
        assert!(matches!(
            game.events().last(),
            Some(GameEvent::Blocked { .. })
        ));
    }

    #[test]
    fn never_enters_walls_or_leaves_map() {
        // Every open cell of a small map, every facing.
        let map = GridMap::parse("0010\n2103\n0000\n").unwrap();
        for (cell, kind) in map.cells() {
            if !kind.is_passable() {
                continue;
            }
            for turns in 0..4 {
                let mut game = GameState::new(map.clone(), GameConfig::default()).unwrap();
                game.player.set_cell(cell);
                for _ in 0..turns {
                    game.turn_right();
                }
                let before = *game.player();
                let ahead = before.ahead();
                let outcome = game.try_advance();
                let open = ahead.is_some_and(|c| map.is_passable(c));
                if open {
                    assert!(matches!(outcome, MoveOutcome::Started { .. }));
                } else {
                    assert_eq!(outcome, MoveOutcome::Blocked);
                    assert_eq!(*game.player(), before);
                    assert!(!game.motion().in_transit());
                }
                assert!(map.is_passable(game.player().cell()));
            }
        }
    }

    #[test]
    fn top_edge_is_out_of_bounds() {
        let map = GridMap::parse("0300\n0200\n").unwrap();
        let mut game = GameState::new(map, GameConfig::default()).unwrap();
        walk(&mut game, &["F"]);
        assert_eq!(game.player().cell(), CellCoord::new(0, 1));
        // The exit is on row 0; walking up again would leave the map.
        let before = *game.player();
        assert_eq!(game.try_advance(), MoveOutcome::Blocked);
        assert_eq!(*game.player(), before);
    }

    #[test]
    fn two_right_turns_face_down() {
        let mut game = builtin();
        game.turn_right();
        game.turn_right();
        assert_eq!(game.player().heading(), 180.0);
        assert_eq!(game.player().facing(), Facing::Down);
    }

    #[test]
    fn left_right_round_trip() {
        let mut game = builtin();
        for _ in 0..5 {
            let h = game.player().heading();
            game.turn_left();
            game.turn_right();
            assert_eq!(game.player().heading(), h);
            game.turn_right();
            game.turn_left();
            assert_eq!(game.player().heading(), h);
            game.turn_right();
        }
    }

    #[test]
    fn completion_latches_on_logical_cell() {
        let map = GridMap::parse("3\n2\n").unwrap();
        let mut game = GameState::new(map, GameConfig::default()).unwrap();
        game.tick(DT);
        assert!(!game.is_completed());

        game.try_advance();
        assert!(!game.is_completed());
        game.tick(DT);
        // Latched on the first tick after the move, while still animating.
        assert!(game.is_completed());
        assert!(game.motion().in_transit());
        let first_alpha = game.completion_alpha();
        assert!(first_alpha > 0.0);

        game.tick(DT);
        assert!(game.completion_alpha() > first_alpha);
        for _ in 0..200 {
            game.tick(DT);
            assert!(game.is_completed());
        }
        assert_eq!(game.completion_alpha(), 1.0);

        let completed: Vec<_> = game
            .events()
            .iter()
            .filter(|e| matches!(e, GameEvent::Completed { .. }))
            .collect();
        assert_eq!(completed.len(), 1);
    }

    #[test]
    fn builtin_maze_is_solvable() {
        let mut game = builtin();
        walk(
            &mut game,
            &[
                "F", "F", "R", "F", "L", "F", "F", "R", "F", "F", "R", "F", "F", "F", "L", "F", "F",
                "L", "F", "F", "F", "F", "F", "L", "F", "F", "F", "R", "F", "F", "F",
            ],
        );
        game.tick(DT);
        assert_eq!(game.player().cell(), CellCoord::new(0, 3));
        assert!(game.is_completed());
    }

    #[test]
    fn missing_start_falls_back_to_origin() {
        let map = GridMap::parse("03\n00\n").unwrap();
        let game = GameState::new(map, GameConfig::default()).unwrap();
        assert_eq!(game.player().cell(), CellCoord::new(0, 0));
    }

    #[test]
    fn unreachable_exit_is_rejected() {
        let walled = GridMap::parse("213\n").unwrap();
        assert!(matches!(
            GameState::new(walled, GameConfig::default()),
            Err(GameError::NoReachableExit { .. })
        ));
        let no_exit = GridMap::parse("20\n").unwrap();
        assert!(GameState::new(no_exit, GameConfig::default()).is_err());
    }

    #[test]
    fn long_frame_finishes_move() {
        let mut game = builtin();
        game.try_advance();
        game.tick(0.5);
        assert_eq!(game.motion().progress(), 1.0);
        assert_eq!(game.movement_phase(), MovementPhase::Idle);
        assert!(game.events().contains(&GameEvent::MoveFinished {
            cell: CellCoord::new(8, 1)
        }));
    }

    #[test]
    fn long_frame_advances_fade_in_full() {
        let map = GridMap::parse("3\n2\n").unwrap();
        let mut game = GameState::new(map, GameConfig::default()).unwrap();
        game.try_advance();
        game.tick(0.5);
        assert!(game.is_completed());
        assert!((game.completion_alpha() - 0.75).abs() < 1e-5);
    }

    #[test]
    fn negative_frame_delta_is_ignored() {
        let mut game = builtin();
        game.try_advance();
        game.tick(-1.0);
        assert_eq!(game.motion().progress(), 0.0);
        assert_eq!(game.frame(), 1);
    }

    #[test]
    fn view_changes_are_logged_once() {
        let mut game = builtin();
        game.set_view_mode(ViewMode::Overhead);
        game.set_view_mode(ViewMode::Overhead);
        assert_eq!(game.view_mode(), ViewMode::Overhead);
        assert_eq!(
            game.drain_events(),
            vec![GameEvent::ViewChanged {
                mode: ViewMode::Overhead
            }]
        );
        assert!(game.events().is_empty());
    }
}
