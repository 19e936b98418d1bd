//! Ellipse shape.

use super::{Frame, ShapeId};
use crate::snappable::Snappable;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An ellipse inscribed in its frame.
///
/// Alignment uses the frame's box, so the quadrant points of the ellipse
/// coincide with the edge midpoints of the default anchor map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ellipse {
    pub(crate) id: ShapeId,
    pub frame: Frame,
}

impl Ellipse {
    /// Create an ellipse whose bounding box starts at `position`.
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            frame: Frame::new(position, width, height),
        }
    }
}

impl Snappable for Ellipse {
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
