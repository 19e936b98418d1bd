//! The host scene as seen by the alignment engine.

use crate::camera::Camera;
use crate::shapes::{Shape, ShapeId};
use crate::snappable::Snappable;
use kurbo::Size;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Everything the engine reads from, or asks of, the host scene.
///
/// Only the shape under gesture is ever handed out mutably.
pub trait SnapScene {
    type Shape: Snappable;

    /// Current zoom factor (1.0 = 100%).
    fn zoom(&self) -> f64;

    /// Convert a screen-pixel length to canvas units at the current zoom.
    fn world_tolerance(&self, screen_px: f64) -> f64 {
        Camera::with_zoom(self.zoom()).world_tolerance(screen_px)
    }

    /// Canvas-level uniform scaling setting.
    fn uniform_scaling(&self) -> bool;

    fn shape(&self, id: ShapeId) -> Option<&Self::Shape>;

    fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Self::Shape>;

    /// All shapes, back to front.
    fn shapes(&self) -> impl Iterator<Item = &Self::Shape>;

    /// Shapes offered as snap candidates while `target` is under gesture.
    fn candidates(&self, target: ShapeId) -> Vec<&Self::Shape> {
        self.shapes()
            .filter(|shape| shape.id() != target && shape.participates_in_snapping())
            .collect()
    }

    /// Size of the canvas frame, if the scene has one.
    fn canvas_size(&self) -> Option<Size> {
        None
    }

    /// Ask the host to repaint.
    fn request_render(&mut self);
}

/// Reference scene: shapes by id with a z-order, a camera and a canvas frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene<S = Shape> {
    /// All shapes, keyed by ID.
    pub shapes: HashMap<ShapeId, S>,
    /// Z-order of shapes (back to front).
    pub z_order: Vec<ShapeId>,
    pub camera: Camera,
    /// Canvas frame size, `None` for an unbounded canvas.
    pub canvas_size: Option<Size>,
    pub uniform_scaling: bool,
    /// Number of repaints requested by the engine.
    #[serde(skip)]
    render_requests: usize,
}

impl<S> Default for Scene<S> {
    fn default() -> Self {
        Self {
            shapes: HashMap::new(),
            z_order: Vec::new(),
            camera: Camera::new(),
            canvas_size: None,
            uniform_scaling: false,
            render_requests: 0,
        }
    }
}

impl<S: Snappable> Scene<S> {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty scene with a canvas frame of the given size.
    pub fn with_canvas(size: Size) -> Self {
        Self {
            canvas_size: Some(size),
            ..Self::default()
        }
    }

    /// Add a shape on top of the others, returning its ID.
    pub fn add_shape(&mut self, shape: impl Into<S>) -> ShapeId {
        let shape = shape.into();
        let id = shape.id();
        self.z_order.push(id);
        self.shapes.insert(id, shape);
        id
    }

    /// Get a shape by ID.
    pub fn get_shape(&self, id: ShapeId) -> Option<&S> {
        self.shapes.get(&id)
    }

    /// Get a mutable reference to a shape by ID.
    pub fn get_shape_mut(&mut self, id: ShapeId) -> Option<&mut S> {
        self.shapes.get_mut(&id)
    }

    /// Get shapes in z-order (back to front).
    pub fn shapes_ordered(&self) -> impl Iterator<Item = &S> {
        self.z_order.iter().filter_map(|id| self.shapes.get(id))
    }

    pub fn render_requests(&self) -> usize {
        self.render_requests
    }
}

impl<S: Snappable> SnapScene for Scene<S> {
    type Shape = S;

    fn zoom(&self) -> f64 {
        self.camera.zoom
    }

    fn world_tolerance(&self, screen_px: f64) -> f64 {
        self.camera.world_tolerance(screen_px)
    }

    fn uniform_scaling(&self) -> bool {
        self.uniform_scaling
    }

    fn shape(&self, id: ShapeId) -> Option<&S> {
        self.get_shape(id)
    }

    fn shape_mut(&mut self, id: ShapeId) -> Option<&mut S> {
        self.get_shape_mut(id)
    }

    fn shapes(&self) -> impl Iterator<Item = &S> {
        self.shapes_ordered()
    }

    fn canvas_size(&self) -> Option<Size> {
        self.canvas_size
    }

    fn request_render(&mut self) {
        self.render_requests += 1;
    }
}
