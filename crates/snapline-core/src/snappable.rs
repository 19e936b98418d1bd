//! The capability set the alignment engine needs from a shape.

use crate::cache::GeometryKey;
use crate::handles::{Corner, OppositeCornerMap, default_opposite_map};
use crate::shapes::{Frame, ShapeId};
use kurbo::Point;
use std::collections::HashMap;

/// Mapping from handle to the canvas point it sits on.
pub type CornerMap = HashMap<Corner, Point>;

/// Shapes the engine can read as candidates and mutate as a gesture target.
///
/// The engine is generic over this trait and never looks at concrete shape
/// kinds. Everything besides `id`, `frame` and `frame_mut` has a default
/// based on the frame's bounding-box model; shape kinds with other anchor
/// layouts override `corner_map` / `opposite_corner_map`.
pub trait Snappable {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Get the placement geometry.
    fn frame(&self) -> &Frame;

    /// Get the mutable placement geometry.
    fn frame_mut(&mut self) -> &mut Frame;

    /// Whether this shape may be offered as a snap candidate.
    fn participates_in_snapping(&self) -> bool {
        !self.frame().ignore_snapping
    }

    /// Corners (tl, tr, br, bl) and center in canvas coordinates.
    fn coords(&self) -> [Point; 5] {
        self.frame().coords()
    }

    /// Value key that changes whenever `coords` would.
    fn cache_key(&self) -> GeometryKey {
        self.frame().cache_key()
    }

    /// Canvas position of every transform handle.
    fn corner_map(&self) -> CornerMap {
        corner_map_from_coords(&self.coords())
    }

    /// Handle that stays fixed while a given handle is dragged.
    fn opposite_corner_map(&self) -> OppositeCornerMap {
        default_opposite_map()
    }

    /// Recompute any coordinates the shape caches after its geometry changed.
    fn set_coords(&mut self) {}
}

/// Build the eight handle positions from box corners.
pub fn corner_map_from_coords(coords: &[Point; 5]) -> CornerMap {
    let [tl, tr, br, bl, _] = *coords;
    HashMap::from([
        (Corner::TopLeft, tl),
        (Corner::TopRight, tr),
        (Corner::BottomRight, br),
        (Corner::BottomLeft, bl),
        (Corner::MiddleTop, tl.midpoint(tr)),
        (Corner::MiddleRight, tr.midpoint(br)),
        (Corner::MiddleBottom, br.midpoint(bl)),
        (Corner::MiddleLeft, bl.midpoint(tl)),
    ])
}
