//! Vello-based guide overlay.

use crate::renderer::{GuideStyle, OverlayItem, OverlayRecorder, RenderResult};
use kurbo::{Affine, Stroke};
use snapline_core::{GuideLine, GuidePoint, GuideRenderer};
use vello::Scene;

/// Guide renderer that strokes the overlay into a Vello scene.
///
/// Draw calls only record items; the scene is stroked once, the next time
/// it is requested.
pub struct VelloGuideRenderer {
    /// The Vello scene being built.
    scene: Scene,
    recorder: OverlayRecorder,
    /// Camera transform (canvas to screen).
    transform: Affine,
    /// Recorded items changed since the scene was last stroked.
    dirty: bool,
}

impl VelloGuideRenderer {
    /// Create a new renderer with the given style.
    pub fn new(style: GuideStyle) -> RenderResult<Self> {
        Ok(Self {
            scene: Scene::new(),
            recorder: OverlayRecorder::with_style(style)?,
            transform: Affine::IDENTITY,
            dirty: false,
        })
    }

    /// Set the camera transform used when stroking.
    pub fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
        self.dirty = true;
    }

    /// Check if the next `scene` call has to restroke the overlay.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Get the built scene for rendering.
    pub fn scene(&mut self) -> &Scene {
        self.build();
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        self.build();
        std::mem::replace(&mut self.scene, Scene::new())
    }

    fn build(&mut self) {
        if !self.dirty {
            return;
        }
        self.scene.reset();
        for item in self.recorder.items() {
            let stroke = match item {
                OverlayItem::Line {
                    width,
                    dash: Some(dash),
                    ..
                } => Stroke::new(*width).with_dashes(0.0, [*dash, *dash]),
                _ => Stroke::new(item.width()),
            };
            for segment in item.segments() {
                self.scene
                    .stroke(&stroke, self.transform, item.color(), None, &segment);
            }
        }
        self.dirty = false;
        log::trace!("stroked {} overlay items", self.recorder.items().len());
    }
}

impl GuideRenderer for VelloGuideRenderer {
    fn clear_overlay(&mut self) {
        self.recorder.clear_overlay();
        self.scene.reset();
        self.dirty = false;
    }

    fn draw_vertical_line(&mut self, line: &GuideLine, zoom: f64) {
        self.recorder.draw_vertical_line(line, zoom);
        self.dirty = true;
    }

    fn draw_horizontal_line(&mut self, line: &GuideLine, zoom: f64) {
        self.recorder.draw_horizontal_line(line, zoom);
        self.dirty = true;
    }

    fn draw_points(&mut self, points: &[GuidePoint], zoom: f64) {
        self.recorder.draw_points(points, zoom);
        self.dirty = true;
    }
}
