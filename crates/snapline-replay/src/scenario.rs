//! Scripted gesture scenarios and their replay through the engine.

use crate::drag::{drag_handle, scale_action};
use kurbo::{Size, Vec2};
use serde::{Deserialize, Serialize};
use snapline_core::{
    AlignmentGuides, CanvasEvent, Corner, Ellipse, Frame, GuideConfig, GuideLine, GuidePoint,
    GuideRenderer, Image, Modifiers, Rectangle, Scene, Shape, ShapeId, Snappable, TransformAction,
    TransformEvent,
};
use snapline_render::OverlayRecorder;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Replay errors.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Unknown shape: {0}")]
    UnknownShape(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("Output error: {0}")]
    Output(String),
}

/// Result type for replay operations.
pub type ReplayResult<T> = Result<T, ReplayError>;

/// Kind of a scenario shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Rectangle,
    Ellipse,
    Image,
}

/// A named shape placed in the scenario scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeSpec {
    pub name: String,
    #[serde(default)]
    pub kind: ShapeKind,
    #[serde(flatten)]
    pub frame: Frame,
}

impl ShapeSpec {
    fn build(&self) -> Shape {
        let mut shape: Shape = match self.kind {
            ShapeKind::Rectangle => Rectangle::new(self.frame.position, 0.0, 0.0).into(),
            ShapeKind::Ellipse => Ellipse::new(self.frame.position, 0.0, 0.0).into(),
            ShapeKind::Image => Image::new(self.frame.position, 0, 0).into(),
        };
        *shape.frame_mut() = self.frame.clone();
        shape
    }
}

/// One scripted input step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Step {
    /// Move a shape by a canvas delta.
    Move { shape: String, dx: f64, dy: f64 },
    /// Drag a handle with a scale gesture.
    Scale {
        shape: String,
        corner: Corner,
        dx: f64,
        dy: f64,
        #[serde(default)]
        modifiers: Modifiers,
    },
    /// Drag a handle with a resize gesture.
    Resize {
        shape: String,
        corner: Corner,
        dx: f64,
        dy: f64,
        #[serde(default)]
        modifiers: Modifiers,
    },
    /// Paint a frame and report the guides drawn.
    Render,
    /// Release the pointer.
    Release,
}

fn default_zoom() -> f64 {
    1.0
}

/// A scene plus the input script to replay against it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub config: GuideConfig,
    #[serde(default)]
    pub canvas: Option<Size>,
    #[serde(default = "default_zoom")]
    pub zoom: f64,
    #[serde(default)]
    pub uniform_scaling: bool,
    pub shapes: Vec<ShapeSpec>,
    #[serde(default)]
    pub events: Vec<Step>,
}

/// Parse a scenario from JSON.
pub fn parse_scenario(json: &str) -> ReplayResult<Scenario> {
    serde_json::from_str(json).map_err(|e| ReplayError::Parse(e.to_string()))
}

/// Read and parse a scenario file.
pub fn load_scenario(path: &Path) -> ReplayResult<Scenario> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| ReplayError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
    parse_scenario(&json)
}

/// Guides painted in one rendered frame.
#[derive(Debug, Clone, Serialize)]
pub struct FrameReport {
    /// Index of the render step in the script.
    pub step: usize,
    /// Name of the shape under gesture.
    pub target: Option<String>,
    /// Geometry of that shape after snapping.
    pub frame: Option<Frame>,
    pub vertical: Vec<GuideLine>,
    pub horizontal: Vec<GuideLine>,
    pub points: Vec<GuidePoint>,
    /// Primitives recorded by the overlay renderer.
    pub overlay_items: usize,
}

/// Overlay renderer that also keeps the guide descriptors it was given.
#[derive(Debug, Default)]
struct Capture {
    overlay: OverlayRecorder,
    vertical: Vec<GuideLine>,
    horizontal: Vec<GuideLine>,
    points: Vec<GuidePoint>,
}

impl GuideRenderer for Capture {
    fn clear_overlay(&mut self) {
        self.overlay.clear_overlay();
        self.vertical.clear();
        self.horizontal.clear();
        self.points.clear();
    }

    fn draw_vertical_line(&mut self, line: &GuideLine, zoom: f64) {
        self.overlay.draw_vertical_line(line, zoom);
        self.vertical.push(*line);
    }

    fn draw_horizontal_line(&mut self, line: &GuideLine, zoom: f64) {
        self.overlay.draw_horizontal_line(line, zoom);
        self.horizontal.push(*line);
    }

    fn draw_points(&mut self, points: &[GuidePoint], zoom: f64) {
        self.overlay.draw_points(points, zoom);
        self.points.extend_from_slice(points);
    }
}

/// A scenario being replayed.
pub struct Replay {
    scene: Scene,
    engine: AlignmentGuides,
    capture: Capture,
    names: HashMap<String, ShapeId>,
    target: Option<String>,
}

impl Replay {
    /// Build the scene and engine described by `scenario`.
    pub fn new(scenario: &Scenario) -> ReplayResult<Self> {
        let engine = AlignmentGuides::new(scenario.config.clone())
            .map_err(|e| ReplayError::Config(e.to_string()))?;
        if !scenario.zoom.is_finite() || scenario.zoom <= 0.0 {
            return Err(ReplayError::Config(format!(
                "zoom must be positive, got {}",
                scenario.zoom
            )));
        }

        let mut scene: Scene = match scenario.canvas {
            Some(size) => Scene::with_canvas(size),
            None => Scene::new(),
        };
        scene.camera.zoom = scenario.zoom;
        scene.uniform_scaling = scenario.uniform_scaling;

        let mut names = HashMap::new();
        for spec in &scenario.shapes {
            let id = scene.add_shape(spec.build());
            if names.insert(spec.name.clone(), id).is_some() {
                return Err(ReplayError::Parse(format!("duplicate shape name '{}'", spec.name)));
            }
        }
        log::info!("replaying {} shapes", names.len());

        Ok(Self {
            scene,
            engine,
            capture: Capture::default(),
            names,
            target: None,
        })
    }

    /// Replay a whole scenario, returning one report per render step.
    pub fn run(scenario: &Scenario) -> ReplayResult<Vec<FrameReport>> {
        let mut replay = Self::new(scenario)?;
        let mut reports = Vec::new();
        for (index, step) in scenario.events.iter().enumerate() {
            if let Some(report) = replay.step(index, step)? {
                reports.push(report);
            }
        }
        Ok(reports)
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Look up a shape by scenario name.
    pub fn shape(&self, name: &str) -> ReplayResult<&Shape> {
        let id = self.id(name)?;
        self.scene
            .get_shape(id)
            .ok_or_else(|| ReplayError::UnknownShape(name.to_string()))
    }

    fn id(&self, name: &str) -> ReplayResult<ShapeId> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| ReplayError::UnknownShape(name.to_string()))
    }

    /// Apply one step. Render steps produce a report.
    pub fn step(&mut self, index: usize, step: &Step) -> ReplayResult<Option<FrameReport>> {
        match step {
            Step::Move { shape, dx, dy } => {
                let id = self.id(shape)?;
                self.frame_mut(id, shape)?.translate(Vec2::new(*dx, *dy));
                self.target = Some(shape.clone());
                self.dispatch(&CanvasEvent::Moving { target: id });
            }
            Step::Scale {
                shape,
                corner,
                dx,
                dy,
                modifiers,
            } => {
                let delta = Vec2::new(*dx, *dy);
                let event = self.drag(shape, *corner, delta, scale_action(*corner), *modifiers)?;
                self.dispatch(&CanvasEvent::Scaling(event));
            }
            Step::Resize {
                shape,
                corner,
                dx,
                dy,
                modifiers,
            } => {
                let delta = Vec2::new(*dx, *dy);
                let event = self.drag(shape, *corner, delta, TransformAction::Resize, *modifiers)?;
                self.dispatch(&CanvasEvent::Resizing(event));
            }
            Step::Render => {
                self.dispatch(&CanvasEvent::BeforeRender);
                self.dispatch(&CanvasEvent::AfterRender);
                return Ok(Some(self.report(index)));
            }
            Step::Release => {
                self.dispatch(&CanvasEvent::MouseUp);
                self.target = None;
            }
        }
        Ok(None)
    }

    fn frame_mut(&mut self, id: ShapeId, name: &str) -> ReplayResult<&mut Frame> {
        self.scene
            .get_shape_mut(id)
            .map(|shape| shape.frame_mut())
            .ok_or_else(|| ReplayError::UnknownShape(name.to_string()))
    }

    fn drag(
        &mut self,
        name: &str,
        corner: Corner,
        delta: Vec2,
        action: TransformAction,
        modifiers: Modifiers,
    ) -> ReplayResult<TransformEvent> {
        let id = self.id(name)?;
        drag_handle(self.frame_mut(id, name)?, corner, delta, action);
        self.target = Some(name.to_string());
        Ok(TransformEvent {
            target: id,
            corner,
            action,
            modifiers,
        })
    }

    fn dispatch(&mut self, event: &CanvasEvent) {
        self.engine.handle_event(&mut self.scene, &mut self.capture, event);
    }

    fn report(&self, step: usize) -> FrameReport {
        let frame = self
            .target
            .as_deref()
            .and_then(|name| self.shape(name).ok())
            .map(|shape| shape.frame().clone());
        FrameReport {
            step,
            target: self.target.clone(),
            frame,
            vertical: self.capture.vertical.clone(),
            horizontal: self.capture.horizontal.clone(),
            points: self.capture.points.clone(),
            overlay_items: self.capture.overlay.items().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CANVAS_CENTER: &str = include_str!("../../../demos/canvas_center.json");

    #[test]
    fn test_canvas_center_demo() {
        let scenario = parse_scenario(CANVAS_CENTER).unwrap();
        let reports = Replay::run(&scenario).unwrap();
        assert_eq!(reports.len(), 2);

        let snapped = &reports[0];
        assert_eq!(snapped.target.as_deref(), Some("b"));
        assert_eq!(snapped.frame.as_ref().unwrap().position.x, 400.0);
        assert!(!snapped.vertical.is_empty());
        assert!(snapped.vertical.iter().all(|g| g.is_canvas_snap()));
        assert_eq!(snapped.overlay_items, snapped.vertical.len() * 3);

        let released = &reports[1];
        assert!(released.vertical.is_empty());
        assert_eq!(released.overlay_items, 0);
    }

    #[test]
    fn test_midpoint_scale_reports_points() {
        let scenario = parse_scenario(
            r#"{
                "config": {"margin": 4},
                "shapes": [
                    {"name": "a", "position": {"x": 0, "y": 0}, "width": 100, "height": 50},
                    {"name": "b", "position": {"x": 102, "y": 300}, "width": 10, "height": 10}
                ],
                "events": [
                    {"type": "scale", "shape": "a", "corner": "mr", "dx": 1, "dy": 0},
                    {"type": "render"}
                ]
            }"#,
        )
        .unwrap();
        let reports = Replay::run(&scenario).unwrap();
        let report = &reports[0];
        // Both left corners of "b" sit on the snapped handle's x.
        assert_eq!(report.points.len(), 2);
        assert!(report.points.iter().all(|p| p.target.point.x == 102.0));
        assert_eq!(report.overlay_items, 4);
        assert!(report.vertical.is_empty());
        assert!((report.frame.as_ref().unwrap().scale_x - 1.02).abs() < 1e-9);
    }

    #[test]
    fn test_resize_snaps_width() {
        let scenario = parse_scenario(
            r#"{
                "config": {"margin": 4},
                "shapes": [
                    {
                        "name": "a", "kind": "ellipse",
                        "position": {"x": 0, "y": 0}, "width": 100, "height": 50
                    },
                    {
                        "name": "b", "kind": "image",
                        "position": {"x": 150, "y": 300}, "width": 20, "height": 20
                    }
                ],
                "events": [
                    {"type": "resize", "shape": "a", "corner": "br", "dx": 48, "dy": 0},
                    {"type": "render"},
                    {"type": "release"}
                ]
            }"#,
        )
        .unwrap();
        let mut replay = Replay::new(&scenario).unwrap();
        for (i, step) in scenario.events.iter().enumerate() {
            replay.step(i, step).unwrap();
        }
        let frame = replay.shape("a").unwrap().frame();
        assert!((frame.width - 150.0).abs() < 1e-9);
        assert_eq!(frame.position, Point::ZERO);
        assert_eq!(replay.scene().render_requests(), 1);
    }

    #[test]
    fn test_unknown_shape() {
        let scenario = parse_scenario(
            r#"{"shapes": [], "events": [{"type": "move", "shape": "ghost", "dx": 1, "dy": 0}]}"#,
        )
        .unwrap();
        assert!(matches!(
            Replay::run(&scenario),
            Err(ReplayError::UnknownShape(name)) if name == "ghost"
        ));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let scenario = parse_scenario(
            r#"{"shapes": [
                {"name": "a", "position": {"x": 0, "y": 0}, "width": 1, "height": 1},
                {"name": "a", "position": {"x": 5, "y": 0}, "width": 1, "height": 1}
            ]}"#,
        )
        .unwrap();
        assert!(matches!(Replay::new(&scenario), Err(ReplayError::Parse(_))));
    }

    #[test]
    fn test_invalid_config() {
        let scenario = parse_scenario(r#"{"config": {"margin": -2}, "shapes": []}"#).unwrap();
        assert!(matches!(Replay::new(&scenario), Err(ReplayError::Config(_))));
        let scenario = parse_scenario(r#"{"zoom": 0, "shapes": []}"#).unwrap();
        assert!(matches!(Replay::new(&scenario), Err(ReplayError::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(CANVAS_CENTER.as_bytes()).unwrap();
        let scenario = load_scenario(file.path()).unwrap();
        assert_eq!(scenario.shapes.len(), 2);
        assert_eq!(scenario.canvas, Some(Size::new(800.0, 600.0)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_scenario(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(ReplayError::Io(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(parse_scenario("{"), Err(ReplayError::Parse(_))));
    }
}
