use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Fixed-rate interpolation between two world positions.
///
/// Progress runs from 0 to 1 at `rate` units per second. When it reaches 1
/// the motion is no longer in transit and `position()` rests on the destination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionState {
    source: Vec3,
    destination: Vec3,
    progress: f32,
    in_transit: bool,
    rate: f32,
}

impl MotionState {
    /// An idle motion resting at `position`.
    pub fn at_rest(position: Vec3, rate: f32) -> Self {
        Self {
            source: position,
            destination: position,
            progress: 1.0,
            in_transit: false,
            rate,
        }
    }

    /// Arm a new move from `from` to `to` with progress reset to 0.
    pub fn begin(&mut self, from: Vec3, to: Vec3) {
        self.source = from;
        self.destination = to;
        self.progress = 0.0;
        self.in_transit = true;
    }

    /// Advance progress by `dt * rate`. Returns true on the tick the move finishes.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.in_transit {
            return false;
        }
        self.progress = (self.progress + dt.max(0.0) * self.rate).min(1.0);
        if self.progress >= 1.0 {
            self.in_transit = false;
            return true;
        }
        false
    }

    /// Interpolated position for the current progress.
    pub fn position(&self) -> Vec3 {
        if self.progress <= 0.0 {
            self.source
        } else if self.progress >= 1.0 {
            self.destination
        } else {
            self.source.lerp(self.destination, self.progress)
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn in_transit(&self) -> bool {
        self.in_transit
    }

    pub fn source(&self) -> Vec3 {
        self.source
    }

    pub fn destination(&self) -> Vec3 {
        self.destination
    }
}
