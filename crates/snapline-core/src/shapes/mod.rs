//! Shape definitions for the scene.

mod ellipse;
mod frame;
mod image;
mod rectangle;

pub use ellipse::Ellipse;
pub use frame::Frame;
pub use image::Image;
pub use rectangle::Rectangle;

use crate::snappable::Snappable;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Enum wrapper for all shape kinds (for serialization).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Shape {
    Rectangle(Rectangle),
    Ellipse(Ellipse),
    Image(Image),
}

impl Snappable for Shape {
    fn id(&self) -> ShapeId {
        match self {
            Shape::Rectangle(s) => s.id(),
            Shape::Ellipse(s) => s.id(),
            Shape::Image(s) => s.id(),
        }
    }

    fn frame(&self) -> &Frame {
        match self {
            Shape::Rectangle(s) => s.frame(),
            Shape::Ellipse(s) => s.frame(),
            Shape::Image(s) => s.frame(),
        }
    }

    fn frame_mut(&mut self) -> &mut Frame {
        match self {
            Shape::Rectangle(s) => s.frame_mut(),
            Shape::Ellipse(s) => s.frame_mut(),
            Shape::Image(s) => s.frame_mut(),
        }
    }

    fn participates_in_snapping(&self) -> bool {
        match self {
            Shape::Rectangle(s) => s.participates_in_snapping(),
            Shape::Ellipse(s) => s.participates_in_snapping(),
            Shape::Image(s) => s.participates_in_snapping(),
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(shape: Rectangle) -> Self {
        Shape::Rectangle(shape)
    }
}

impl From<Ellipse> for Shape {
    fn from(shape: Ellipse) -> Self {
        Shape::Ellipse(shape)
    }
}

impl From<Image> for Shape {
    fn from(shape: Image) -> Self {
        Shape::Image(shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    #[test]
    fn test_delegates_to_kind() {
        let mut rect = Rectangle::new(Point::ZERO, 10.0, 10.0);
        rect.frame.ignore_snapping = true;
        let id = rect.id();
        let mut shape = Shape::from(rect);
        assert_eq!(shape.id(), id);
        assert!(!shape.participates_in_snapping());
        shape.frame_mut().width = 20.0;
        assert_eq!(shape.coords()[1], Point::new(20.0, 0.0));
    }

    #[test]
    fn test_serde_roundtrip_keeps_frame() {
        let shape = Shape::from(Ellipse::new(Point::new(5.0, 6.0), 40.0, 20.0));
        let json = serde_json::to_string(&shape).unwrap();
        let back: Shape = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id(), shape.id());
        assert_eq!(back.frame(), shape.frame());
        assert!(matches!(back, Shape::Ellipse(_)));
    }
}
