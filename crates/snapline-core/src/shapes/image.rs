//! Image shape.

use super::{Frame, ShapeId};
use crate::snappable::Snappable;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A raster image placed on the canvas.
///
/// Images are scaled rather than resized, so `frame.width`/`height` keep
/// the source pixel size and the displayed size lives in the scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub(crate) id: ShapeId,
    pub frame: Frame,
}

impl Image {
    /// Create an image at its natural size.
    pub fn new(position: Point, source_width: u32, source_height: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            frame: Frame::new(position, f64::from(source_width), f64::from(source_height)),
        }
    }
}

impl Snappable for Image {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_size() {
        let image = Image::new(Point::new(5.0, 5.0), 400, 200);
        let size = image.frame.scaled_size();
        assert!((size.width - 400.0).abs() < f64::EPSILON);
        assert!((size.height - 200.0).abs() < f64::EPSILON);
        assert_eq!(image.coords()[2], Point::new(405.0, 205.0));
    }
}
