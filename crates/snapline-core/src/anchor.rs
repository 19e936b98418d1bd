//! Anchor points: the corners and center a shape exposes for alignment.

use crate::handles::Corner;
use crate::shapes::ShapeId;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canvas axis a comparison is made on.
///
/// `X` compares x coordinates and produces vertical guides, `Y` compares
/// y coordinates and produces horizontal guides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Get the coordinate of a point on this axis.
    pub fn of(self, point: Point) -> f64 {
        match self {
            Axis::X => point.x,
            Axis::Y => point.y,
        }
    }

    /// The other axis.
    pub fn other(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Which anchor of a box a point is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnchorKind {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
    Center,
    /// The transform handle being dragged.
    Handle(Corner),
}

impl AnchorKind {
    /// Anchor kinds in coordinate order (corners clockwise, then center).
    pub const ALL: [AnchorKind; 5] = [
        AnchorKind::TopLeft,
        AnchorKind::TopRight,
        AnchorKind::BottomRight,
        AnchorKind::BottomLeft,
        AnchorKind::Center,
    ];
}

/// Where an anchor point came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnchorSource {
    /// A shape in the scene.
    Shape(ShapeId),
    /// The canvas frame itself.
    Canvas,
}

impl AnchorSource {
    /// Check if this anchor belongs to the canvas frame.
    pub fn is_canvas(&self) -> bool {
        matches!(self, AnchorSource::Canvas)
    }
}

/// A point in canvas coordinates tagged with its origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorPoint {
    pub point: Point,
    pub source: AnchorSource,
    pub kind: AnchorKind,
}

impl AnchorPoint {
    pub fn new(point: Point, source: AnchorSource, kind: AnchorKind) -> Self {
        Self {
            point,
            source,
            kind,
        }
    }

    /// Tag the five coordinates of a box (tl, tr, br, bl, center) with their source.
    pub fn tag_all(coords: &[Point; 5], source: AnchorSource) -> [AnchorPoint; 5] {
        std::array::from_fn(|i| AnchorPoint::new(coords[i], source, AnchorKind::ALL[i]))
    }

    /// Get the coordinate on an axis.
    pub fn coord(&self, axis: Axis) -> f64 {
        axis.of(self.point)
    }
}

/// Anchors of the canvas frame (corners plus center), tagged as canvas anchors.
pub fn canvas_anchors(size: kurbo::Size) -> [AnchorPoint; 5] {
    let coords = [
        Point::new(0.0, 0.0),
        Point::new(size.width, 0.0),
        Point::new(size.width, size.height),
        Point::new(0.0, size.height),
        Point::new(size.width / 2.0, size.height / 2.0),
    ];
    AnchorPoint::tag_all(&coords, AnchorSource::Canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;

    #[test]
    fn test_axis_of() {
        let p = Point::new(3.0, 7.0);
        assert_eq!(Axis::X.of(p), 3.0);
        assert_eq!(Axis::Y.of(p), 7.0);
        assert_eq!(Axis::X.other(), Axis::Y);
    }

    #[test]
    fn test_canvas_anchors() {
        let anchors = canvas_anchors(Size::new(800.0, 600.0));
        assert_eq!(anchors[2].point, Point::new(800.0, 600.0));
        assert_eq!(anchors[4].point, Point::new(400.0, 300.0));
        assert_eq!(anchors[4].kind, AnchorKind::Center);
        assert!(anchors.iter().all(|a| a.source.is_canvas()));
    }
}
