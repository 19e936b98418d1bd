//! Rectangle shape.

use super::{Frame, ShapeId};
use crate::snappable::Snappable;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A rectangle shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rectangle {
    pub(crate) id: ShapeId,
    /// Placement on the canvas.
    pub frame: Frame,
}

impl Rectangle {
    /// Create a new rectangle.
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            frame: Frame::new(position, width, height),
        }
    }
}

impl Snappable for Rectangle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }
}
