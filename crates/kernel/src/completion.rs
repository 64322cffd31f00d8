use crate::grid::CellKind;
use serde::{Deserialize, Serialize};

/// One-way completion latch with a fade-in alpha for the end screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompletionTracker {
    completed: bool,
    alpha: f32,
    fade_rate: f32,
}

impl CompletionTracker {
    pub fn new(fade_rate: f32) -> Self {
        Self {
            completed: false,
            alpha: 0.0,
            fade_rate,
        }
    }

    /// Latch if `kind` is an exit. Returns true only on the call that latches.
    pub fn check(&mut self, kind: CellKind) -> bool {
        if self.completed || kind != CellKind::End {
            return false;
        }
        self.completed = true;
        true
    }

    /// Raise alpha by `dt * fade_rate`, clamped to 1. No-op until latched.
    pub fn advance_fade(&mut self, dt: f32) {
        if !self.completed {
            return;
        }
        self.alpha = (self.alpha + dt.max(0.0) * self.fade_rate).min(1.0);
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }
}
