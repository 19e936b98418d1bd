//! Guide descriptors produced by the matchers and the per-frame registry
//! that collects them.

use crate::anchor::{AnchorKind, AnchorPoint, AnchorSource, Axis};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An active alignment between a moving anchor and a candidate.
///
/// On `Axis::X` this is a vertical line at `x = coordinate`, on `Axis::Y`
/// a horizontal line at `y = coordinate`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuideLine {
    pub axis: Axis,
    pub coordinate: f64,
    /// Anchor of the shape under gesture.
    pub origin: AnchorPoint,
    /// Candidate anchor it aligned with.
    pub target: AnchorPoint,
}

impl GuideLine {
    /// Guide on `axis` through the target's coordinate.
    pub fn new(axis: Axis, origin: AnchorPoint, target: AnchorPoint) -> Self {
        Self {
            axis,
            coordinate: target.coord(axis),
            origin,
            target,
        }
    }

    /// Check if the guide aligns with the canvas frame rather than a shape.
    pub fn is_canvas_snap(&self) -> bool {
        self.target.source.is_canvas()
    }

    /// End points of the drawn segment, both lying on the guide.
    pub fn span(&self) -> (Point, Point) {
        let other = self.axis.other();
        let a = other.of(self.origin.point);
        let b = other.of(self.target.point);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        match self.axis {
            Axis::X => (Point::new(self.coordinate, lo), Point::new(self.coordinate, hi)),
            Axis::Y => (Point::new(lo, self.coordinate), Point::new(hi, self.coordinate)),
        }
    }

    fn key(&self) -> GuideKey {
        GuideKey {
            axis: self.axis,
            coordinate: self.coordinate.to_bits(),
            origin: (self.origin.source, self.origin.kind),
            target: (self.target.source, self.target.kind),
        }
    }
}

/// An alignment shown as a pair of points instead of a line.
///
/// Used for edge-midpoint handles, where a line through the handle would
/// not say which edge it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuidePoint {
    pub origin: AnchorPoint,
    pub target: AnchorPoint,
}

impl From<&GuideLine> for GuidePoint {
    fn from(line: &GuideLine) -> Self {
        Self {
            origin: line.origin,
            target: line.target,
        }
    }
}

/// Structural identity of a guide within one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct GuideKey {
    axis: Axis,
    coordinate: u64,
    origin: (AnchorSource, AnchorKind),
    target: (AnchorSource, AnchorKind),
}

/// Insertion-ordered set of guides deduplicated by value.
#[derive(Debug, Clone, Default)]
pub struct GuideSet {
    lines: Vec<GuideLine>,
    seen: HashSet<GuideKey>,
}

impl GuideSet {
    /// Add a guide. Returns false if an equal guide is already present.
    pub fn insert(&mut self, line: GuideLine) -> bool {
        if !self.seen.insert(line.key()) {
            return false;
        }
        self.lines.push(line);
        true
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.seen.clear();
    }

    pub fn as_slice(&self) -> &[GuideLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Guides for the current frame, split by orientation.
#[derive(Debug, Clone, Default)]
pub struct GuideRegistry {
    vertical: GuideSet,
    horizontal: GuideSet,
    point_only: bool,
}

impl GuideRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a guide to the set matching its axis.
    pub fn insert(&mut self, line: GuideLine) -> bool {
        match line.axis {
            Axis::X => self.vertical.insert(line),
            Axis::Y => self.horizontal.insert(line),
        }
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = GuideLine>) {
        for line in lines {
            self.insert(line);
        }
    }

    /// Remove all guides and leave point-only mode.
    pub fn clear(&mut self) {
        self.vertical.clear();
        self.horizontal.clear();
        self.point_only = false;
    }

    /// Guides on the x axis (drawn vertically).
    pub fn vertical(&self) -> &[GuideLine] {
        self.vertical.as_slice()
    }

    /// Guides on the y axis (drawn horizontally).
    pub fn horizontal(&self) -> &[GuideLine] {
        self.horizontal.as_slice()
    }

    pub fn set_point_only(&mut self, point_only: bool) {
        self.point_only = point_only;
    }

    /// Check if the current guides should be drawn as points only.
    pub fn is_point_only(&self) -> bool {
        self.point_only
    }

    pub fn len(&self) -> usize {
        self.vertical.len() + self.horizontal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertical.is_empty() && self.horizontal.is_empty()
    }

    /// Guides as points, vertical first, skipping suppressed orientations.
    pub fn points(&self, close_v_line: bool, close_h_line: bool) -> Vec<GuidePoint> {
        let vertical: &[GuideLine] = if close_v_line { &[] } else { self.vertical() };
        let horizontal: &[GuideLine] = if close_h_line { &[] } else { self.horizontal() };
        vertical.iter().chain(horizontal).map(GuidePoint::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ShapeId;

    fn shape_anchor(id: ShapeId, kind: AnchorKind, x: f64, y: f64) -> AnchorPoint {
        AnchorPoint::new(Point::new(x, y), AnchorSource::Shape(id), kind)
    }

    #[test]
    fn test_duplicates_collapse() {
        let moving = ShapeId::new_v4();
        let other = ShapeId::new_v4();
        let origin = shape_anchor(moving, AnchorKind::TopLeft, 100.0, 10.0);
        let target = shape_anchor(other, AnchorKind::TopRight, 100.0, 200.0);
        let mut registry = GuideRegistry::new();
        assert!(registry.insert(GuideLine::new(Axis::X, origin, target)));
        assert!(!registry.insert(GuideLine::new(Axis::X, origin, target)));
        assert!(registry.insert(GuideLine::new(Axis::Y, origin, target)));
        assert_eq!(registry.vertical().len(), 1);
        assert_eq!(registry.horizontal().len(), 1);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_span_is_ordered() {
        let id = ShapeId::new_v4();
        let line = GuideLine::new(
            Axis::X,
            shape_anchor(id, AnchorKind::BottomLeft, 50.0, 300.0),
            AnchorPoint::new(Point::new(50.0, 20.0), AnchorSource::Canvas, AnchorKind::TopLeft),
        );
        assert_eq!(line.coordinate, 50.0);
        assert_eq!(line.span(), (Point::new(50.0, 20.0), Point::new(50.0, 300.0)));
        assert!(line.is_canvas_snap());
    }

    #[test]
    fn test_clear_resets_point_mode() {
        let id = ShapeId::new_v4();
        let a = shape_anchor(id, AnchorKind::Center, 0.0, 0.0);
        let mut registry = GuideRegistry::new();
        registry.insert(GuideLine::new(Axis::Y, a, a));
        registry.set_point_only(true);
        registry.clear();
        assert!(registry.is_empty());
        assert!(!registry.is_point_only());
    }

    #[test]
    fn test_points_respect_suppression() {
        let id = ShapeId::new_v4();
        let a = shape_anchor(id, AnchorKind::Center, 1.0, 2.0);
        let b = shape_anchor(id, AnchorKind::TopLeft, 1.0, 2.0);
        let mut registry = GuideRegistry::new();
        registry.insert(GuideLine::new(Axis::X, a, b));
        registry.insert(GuideLine::new(Axis::Y, b, a));
        assert_eq!(registry.points(false, false).len(), 2);
        let only_h = registry.points(true, false);
        assert_eq!(only_h.len(), 1);
        assert_eq!(only_h[0].origin, b);
        assert!(registry.points(true, true).is_empty());
    }
}
