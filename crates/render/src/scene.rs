use crate::camera::{CameraConfig, CameraRig, CameraSettings};
use crate::inspector::GameInspector;
use glam::{Vec2, Vec3};
use mazewalk_assets::TextureHandle;
use mazewalk_common::{Color, ViewMode};
use mazewalk_kernel::{CellKind, GameState};
use serde::{Deserialize, Serialize};

/// Viewport size and camera constants used to build a frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    pub camera: CameraSettings,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            camera: CameraSettings::default(),
        }
    }
}

/// Textures the scene may use. Missing entries draw untextured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SceneTextures {
    pub wall: Option<TextureHandle>,
    pub complete: Option<TextureHandle>,
}

/// An axis-aligned cube, optionally rotated about its vertical center line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cuboid {
    /// Minimum corner before rotation.
    pub min: Vec3,
    pub size: f32,
    pub color: Color,
    pub texture: Option<TextureHandle>,
    /// Rotation about +Z through the cube center, in degrees.
    pub rotation_deg: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Small,
    Large,
}

/// 2D draw command in screen pixels, origin at the bottom-left corner.
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    Quad {
        min: Vec2,
        max: Vec2,
        color: Color,
    },
    TexturedQuad {
        min: Vec2,
        max: Vec2,
        texture: TextureHandle,
        tint: Color,
    },
    Text {
        position: Vec2,
        text: String,
        color: Color,
        size: TextSize,
    },
}

/// Everything a renderer needs for one frame. Built fresh from game state.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub view_mode: ViewMode,
    pub camera: CameraConfig,
    pub clear_color: Color,
    pub width: u32,
    pub height: u32,
    pub cuboids: Vec<Cuboid>,
    pub overlay: Vec<Overlay>,
}

const HUD_BAR_HEIGHT: f32 = 25.0;
const COMPLETE_IMAGE_SIZE: Vec2 = Vec2::new(400.0, 300.0);
const COMPLETE_IMAGE_ALPHA: f32 = 0.3;
const COMPLETE_TEXT_ALPHA: f32 = 0.5;

/// Build the draw data for the current state: maze blocks, player, HUD and
/// the completion screen.
pub fn build_frame(state: &GameState, textures: &SceneTextures, settings: &RenderSettings) -> Frame {
    let rig = CameraRig::from_state(state, &settings.camera);
    let view_mode = state.view_mode();

    let mut frame = Frame {
        view_mode,
        camera: *rig.select(view_mode),
        clear_color: Color::BACKGROUND,
        width: settings.width,
        height: settings.height,
        cuboids: Vec::new(),
        overlay: Vec::new(),
    };

    push_maze(&mut frame, state, textures);
    push_player(&mut frame, state);
    push_hud(&mut frame, state);
    if state.is_completed() {
        push_completion(&mut frame, state, textures);
    }

    tracing::trace!(
        cuboids = frame.cuboids.len(),
        overlay = frame.overlay.len(),
        "frame built"
    );
    frame
}

fn push_maze(frame: &mut Frame, state: &GameState, textures: &SceneTextures) {
    let map = state.map();
    let block = state.config().block_length;
    for (cell, kind) in map.cells() {
        let (color, texture) = match kind {
            CellKind::Wall => (Color::WALL, textures.wall),
            // The exit block disappears once reached.
            CellKind::End if !state.is_completed() => (Color::EXIT, None),
            _ => continue,
        };
        frame.cuboids.push(Cuboid {
            min: map.cell_origin(cell, block),
            size: block,
            color,
            texture,
            rotation_deg: 0.0,
        });
    }
}

fn push_player(frame: &mut Frame, state: &GameState) {
    let size = state.config().player_size();
    let center = state.visual_position();
    frame.cuboids.push(Cuboid {
        min: Vec3::new(center.x - size / 2.0, center.y - size / 2.0, 0.0),
        size,
        color: Color::PLAYER,
        texture: None,
        rotation_deg: state.player().heading(),
    });
}

fn push_hud(frame: &mut Frame, state: &GameState) {
    let (w, h) = (frame.width as f32, frame.height as f32);
    let summary = GameInspector::summary(state);

    frame.overlay.push(Overlay::Quad {
        min: Vec2::new(0.0, h - HUD_BAR_HEIGHT),
        max: Vec2::new(w, h),
        color: Color::BLACK.with_alpha(0.5),
    });
    frame.overlay.push(Overlay::Text {
        position: Vec2::new(10.0, h - 20.0),
        text: summary.status_line(),
        color: Color::WHITE,
        size: TextSize::Small,
    });

    let (hint, color) = if summary.completed {
        ("Maze complete! Press Esc to quit.", Color::PLAYER)
    } else {
        ("Advance: Up | Turn: Left/Right | View: 1/2/3", Color::HINT)
    };
    frame.overlay.push(Overlay::Text {
        position: Vec2::new(10.0, h - 40.0),
        text: hint.to_string(),
        color,
        size: TextSize::Small,
    });
}

fn push_completion(frame: &mut Frame, state: &GameState, textures: &SceneTextures) {
    let alpha = state.completion_alpha();
    if alpha <= 0.0 {
        return;
    }
    let screen = Vec2::new(frame.width as f32, frame.height as f32);
    let center = screen / 2.0;

    frame.overlay.push(Overlay::Quad {
        min: Vec2::ZERO,
        max: screen,
        color: Color::BLACK.with_alpha(alpha * 0.8),
    });

    if let Some(texture) = textures.complete.filter(|_| alpha >= COMPLETE_IMAGE_ALPHA) {
        let min = center - COMPLETE_IMAGE_SIZE / 2.0;
        frame.overlay.push(Overlay::TexturedQuad {
            min,
            max: min + COMPLETE_IMAGE_SIZE,
            texture,
            tint: Color::WHITE.with_alpha(alpha),
        });
    }

    if alpha >= COMPLETE_TEXT_ALPHA {
        let lines = [
            ("Congratulations!", Vec2::new(-30.0, 180.0), Color::PLAYER, TextSize::Large),
            ("You found the exit!", Vec2::new(-50.0, 150.0), Color::WHITE, TextSize::Small),
            ("Press Esc to quit", Vec2::new(-60.0, -180.0), Color::WHITE, TextSize::Small),
        ];
        for (text, offset, color, size) in lines {
            frame.overlay.push(Overlay::Text {
                position: center + offset,
                text: text.to_string(),
                color: color.with_alpha(alpha),
                size,
            });
        }
    }
}
