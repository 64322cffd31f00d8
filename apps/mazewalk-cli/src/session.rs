use mazewalk_input::{Action, Key, KeyMap};
use mazewalk_kernel::{GameState, MoveOutcome};
use mazewalk_render::{
    DebugTextRenderer, Frame, RenderSettings, Renderer, SceneTextures, build_frame,
};

/// Whether the session keeps running after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One headless maze session: game state, key bindings and scene inputs.
///
/// Input is dispatched here rather than in the kernel. Once the maze is
/// complete, movement actions are dropped; view switching and quitting
/// still work.
pub struct Session {
    state: GameState,
    keymap: KeyMap,
    textures: SceneTextures,
    render: RenderSettings,
}

impl Session {
    pub fn new(
        state: GameState,
        keymap: KeyMap,
        textures: SceneTextures,
        render: RenderSettings,
    ) -> Self {
        Self {
            state,
            keymap,
            textures,
            render,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Feed one key event through the bindings.
    pub fn handle_key(&mut self, key: Key, pressed: bool) -> Flow {
        match self.keymap.map(key, pressed) {
            Some(action) => self.apply(action),
            None => Flow::Continue,
        }
    }

    pub fn apply(&mut self, action: Action) -> Flow {
        if action.is_movement() && self.state.is_completed() {
            tracing::debug!(?action, "ignored after completion");
            return Flow::Continue;
        }
        let outcome = match action {
            Action::Quit => return Flow::Quit,
            Action::SelectView(mode) => {
                self.state.set_view_mode(mode);
                return Flow::Continue;
            }
            Action::Advance => self.state.try_advance(),
            Action::TurnLeft => self.state.turn_left(),
            Action::TurnRight => self.state.turn_right(),
        };
        if outcome == MoveOutcome::Busy {
            tracing::trace!(?action, "dropped while in transit");
        }
        Flow::Continue
    }

    /// Advance the frame loop `frames` times with a fixed timestep, capped at
    /// the configured `max_frame_dt`.
    pub fn run_frames(&mut self, frames: u32, dt: f32) {
        let max = self.state.config().max_frame_dt;
        if dt > max {
            tracing::debug!(dt, max, "frame delta capped");
        }
        let dt = dt.min(max);
        for _ in 0..frames {
            self.state.tick(dt);
        }
    }

    /// Draw data for the current state.
    pub fn frame(&self) -> Frame {
        build_frame(&self.state, &self.textures, &self.render)
    }

    /// The current frame as debug text. `verbose` also lists every cube.
    pub fn render_text(&self, verbose: bool) -> String {
        let renderer = if verbose {
            DebugTextRenderer::verbose()
        } else {
            DebugTextRenderer::new()
        };
        renderer.render(&self.frame())
    }
}
