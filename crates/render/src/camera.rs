use glam::{Mat4, Vec3};
use mazewalk_common::ViewMode;
use mazewalk_kernel::{GameConfig, GameState};
use serde::{Deserialize, Serialize};

/// Camera placement constants. Heights are multiples of the player cube size,
/// overhead offsets are multiples of the block length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub first_person_eye_height: f32,
    pub first_person_look_ahead: f32,
    pub target_height: f32,
    pub chase_distance: f32,
    pub chase_height: f32,
    pub chase_look_ahead: f32,
    pub overhead_back_blocks: f32,
    pub overhead_height_blocks: f32,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            first_person_eye_height: 1.5,
            first_person_look_ahead: 20.0,
            target_height: 1.0,
            chase_distance: 60.0,
            chase_height: 5.0,
            chase_look_ahead: 10.0,
            overhead_back_blocks: 10.0,
            overhead_height_blocks: 15.0,
            fov_degrees: 60.0,
            near: 1.0,
            far: 5000.0,
        }
    }
}

/// One camera: where it sits and what it looks at. World space is Z-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    pub eye: Vec3,
    pub target: Vec3,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl CameraConfig {
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Z)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_degrees.to_radians(), aspect, self.near, self.far)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }
}

/// Unit vector on the ground plane for a heading in degrees (0 = +Y, 90 = +X).
pub fn heading_direction(heading: f32) -> Vec3 {
    let rad = heading.to_radians();
    Vec3::new(rad.sin(), rad.cos(), 0.0)
}

/// All three cameras, derived from scratch every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub first_person: CameraConfig,
    pub third_person: CameraConfig,
    pub overhead: CameraConfig,
}

impl CameraRig {
    /// Derive cameras for a player at `position` looking along `heading`.
    pub fn derive(
        position: Vec3,
        heading: f32,
        game: &GameConfig,
        settings: &CameraSettings,
    ) -> Self {
        let dir = heading_direction(heading);
        let size = game.player_size();
        let block = game.block_length;
        let ground = Vec3::new(position.x, position.y, 0.0);
        let at_height = |p: Vec3, h: f32| Vec3::new(p.x, p.y, h);

        let camera = |eye: Vec3, target: Vec3| CameraConfig {
            eye,
            target,
            fov_degrees: settings.fov_degrees,
            near: settings.near,
            far: settings.far,
        };

        let target_z = size * settings.target_height;

        let first_person = camera(
            at_height(ground, size * settings.first_person_eye_height),
            at_height(ground + dir * settings.first_person_look_ahead, target_z),
        );

        let third_person = camera(
            at_height(ground - dir * settings.chase_distance, size * settings.chase_height),
            at_height(ground + dir * settings.chase_look_ahead, target_z),
        );

        let overhead = camera(
            Vec3::new(
                ground.x,
                ground.y - block * settings.overhead_back_blocks,
                block * settings.overhead_height_blocks,
            ),
            ground,
        );

        Self {
            first_person,
            third_person,
            overhead,
        }
    }

    /// Derive cameras from the game's interpolated position and current heading.
    pub fn from_state(state: &GameState, settings: &CameraSettings) -> Self {
        Self::derive(
            state.visual_position(),
            state.player().heading(),
            state.config(),
            settings,
        )
    }

    pub fn select(&self, mode: ViewMode) -> &CameraConfig {
        match mode {
            ViewMode::FirstPerson => &self.first_person,
            ViewMode::ThirdPerson => &self.third_person,
            ViewMode::Overhead => &self.overhead,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-3
    }

    fn rig(heading: f32) -> CameraRig {
        CameraRig::derive(
            Vec3::new(60.0, 20.0, 0.0),
            heading,
            &GameConfig::default(),
            &CameraSettings::default(),
        )
    }

    #[test]
    fn heading_zero_looks_along_y() {
        assert!(close(heading_direction(0.0), Vec3::Y));
        assert!(close(heading_direction(90.0), Vec3::X));
        assert!(close(heading_direction(180.0), -Vec3::Y));
        assert!(close(heading_direction(270.0), -Vec3::X));
    }

    #[test]
    fn first_person_looks_ahead() {
        let size = GameConfig::default().player_size();
        let cam = rig(0.0).first_person;
        assert!(close(cam.eye, Vec3::new(60.0, 20.0, size * 1.5)));
        assert!(close(cam.target, Vec3::new(60.0, 40.0, size)));
    }

    #[test]
    fn third_person_sits_behind() {
        let size = GameConfig::default().player_size();
        let cam = rig(90.0).third_person;
        assert!(close(cam.eye, Vec3::new(0.0, 20.0, size * 5.0)));
        assert!(close(cam.target, Vec3::new(70.0, 20.0, size)));
    }

    #[test]
    fn overhead_ignores_heading() {
        let a = rig(0.0).overhead;
        let b = rig(270.0).overhead;
        assert_eq!(a, b);
        assert!(close(a.eye, Vec3::new(60.0, -380.0, 600.0)));
        assert!(close(a.target, Vec3::new(60.0, 20.0, 0.0)));
    }

    #[test]
    fn select_matches_mode() {
        let r = rig(0.0);
        assert_eq!(*r.select(ViewMode::FirstPerson), r.first_person);
        assert_eq!(*r.select(ViewMode::ThirdPerson), r.third_person);
        assert_eq!(*r.select(ViewMode::Overhead), r.overhead);
    }

    #[test]
    fn view_projection_is_finite() {
        for mode in ViewMode::ALL {
            let vp = rig(45.0).select(mode).view_projection(1.0);
            assert!(vp.is_finite());
        }
    }
}
