use crate::scene::{Frame, Overlay};

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer consumes a finished [`Frame`] and produces output. It never
/// sees or mutates game state; frames are derived from it beforehand.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame.
    fn render(&self, frame: &Frame) -> Self::Output;
}

/// Text renderer for headless runs, logging and tests.
#[derive(Debug, Default)]
pub struct DebugTextRenderer {
    /// Also list every cuboid, not just the counts.
    pub verbose: bool,
}

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verbose() -> Self {
        Self { verbose: true }
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, frame: &Frame) -> String {
        let mut out = String::new();
        let textured = frame.cuboids.iter().filter(|c| c.texture.is_some()).count();
        out.push_str(&format!(
            "=== Frame {}x{} (view={}) ===\n",
            frame.width, frame.height, frame.view_mode
        ));
        let cam = &frame.camera;
        out.push_str(&format!(
            "Camera: eye=({:.1}, {:.1}, {:.1}) target=({:.1}, {:.1}, {:.1}) fov={:.0}\n",
            cam.eye.x, cam.eye.y, cam.eye.z, cam.target.x, cam.target.y, cam.target.z, cam.fov_degrees
        ));
        out.push_str(&format!(
            "Cuboids: {} ({} textured)\n",
            frame.cuboids.len(),
            textured
        ));

        if self.verbose {
            for c in &frame.cuboids {
                out.push_str(&format!(
                    "  cube min=({:.1}, {:.1}, {:.1}) size={:.1} rgb=({:.2}, {:.2}, {:.2}) rot={:.0}\n",
                    c.min.x, c.min.y, c.min.z, c.size, c.color.r, c.color.g, c.color.b, c.rotation_deg
                ));
            }
        }

        for o in &frame.overlay {
            match o {
                Overlay::Quad { min, max, color } => {
                    out.push_str(&format!(
                        "  quad ({:.0}, {:.0})-({:.0}, {:.0}) alpha={:.2}\n",
                        min.x, min.y, max.x, max.y, color.a
                    ));
                }
                Overlay::TexturedQuad { min, max, tint, .. } => {
                    out.push_str(&format!(
                        "  image ({:.0}, {:.0})-({:.0}, {:.0}) alpha={:.2}\n",
                        min.x, min.y, max.x, max.y, tint.a
                    ));
                }
                Overlay::Text { text, .. } => {
                    out.push_str(&format!("  text {text:?}\n"));
                }
            }
        }

        out
    }
}
