//! Rendering adapter: renderer-agnostic frame data.
//!
//! # Invariants
//! - Renderers cannot mutate game state; frames derive from it.
//! - Cameras are recomputed from the interpolated position every frame.
//! - Exactly one camera is active per frame, chosen by the game's view mode.

mod camera;
mod inspector;
mod renderer;
mod scene;

pub use camera::{CameraConfig, CameraRig, CameraSettings, heading_direction};
pub use inspector::{GameInspector, GameSummary};
pub use renderer::{DebugTextRenderer, Renderer};
pub use scene::{Cuboid, Frame, Overlay, RenderSettings, SceneTextures, TextSize, build_frame};
