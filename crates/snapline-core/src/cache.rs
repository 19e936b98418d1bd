//! Memoized anchor points keyed by geometry value.

use crate::anchor::{AnchorPoint, AnchorSource};
use crate::snappable::Snappable;
use kurbo::{Affine, Point};
use std::collections::HashMap;

/// Value key for a shape's geometry: transform coefficients plus size and stroke.
///
/// Two shapes with identical geometry share a key. Any change to position,
/// size, scale, rotation or stroke yields a different key, so stale entries
/// are never returned and no explicit invalidation is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeometryKey([u64; 10]);

impl GeometryKey {
    pub fn new(
        matrix: Affine,
        width: f64,
        height: f64,
        stroke_width: f64,
        stroke_uniform: bool,
    ) -> Self {
        let c = matrix.as_coeffs();
        Self([
            bits(c[0]),
            bits(c[1]),
            bits(c[2]),
            bits(c[3]),
            bits(c[4]),
            bits(c[5]),
            bits(width),
            bits(height),
            bits(stroke_width),
            u64::from(stroke_uniform),
        ])
    }
}

/// Bit pattern of a float, with both zeros mapped to the same key.
fn bits(value: f64) -> u64 {
    if value == 0.0 { 0 } else { value.to_bits() }
}

/// Cache of shape corners and centers.
///
/// Entries live until [`GeometryCache::clear`], which the orchestrator calls
/// when a gesture is released.
#[derive(Debug, Default)]
pub struct GeometryCache {
    entries: HashMap<GeometryKey, [Point; 5]>,
}

impl GeometryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Corners and center of a shape, computed once per distinct geometry.
    pub fn coords<S: Snappable + ?Sized>(&mut self, shape: &S) -> [Point; 5] {
        let key = shape.cache_key();
        if let Some(coords) = self.entries.get(&key) {
            log::trace!("anchor cache hit for {}", shape.id());
            return *coords;
        }
        log::trace!("anchor cache miss for {}", shape.id());
        let coords = shape.coords();
        self.entries.insert(key, coords);
        coords
    }

    /// Anchor points of a shape (tl, tr, br, bl, center), tagged with its id.
    pub fn get<S: Snappable + ?Sized>(&mut self, shape: &S) -> [AnchorPoint; 5] {
        let coords = self.coords(shape);
        AnchorPoint::tag_all(&coords, AnchorSource::Shape(shape.id()))
    }

    /// Drop every cached entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::handles::{Corner, OppositeCornerMap};
    use crate::shapes::{Frame, ShapeId};
    use crate::snappable::CornerMap;
    use std::cell::Cell;

    /// Shape that counts calls to its coordinate accessor and can drop handles
    /// from its maps.
    pub(crate) struct CountingShape {
        pub id: ShapeId,
        pub frame: Frame,
        pub coord_calls: Cell<usize>,
        pub missing: Option<Corner>,
    }

    impl CountingShape {
        pub fn new(frame: Frame) -> Self {
            Self {
                id: ShapeId::new_v4(),
                frame,
                coord_calls: Cell::new(0),
                missing: None,
            }
        }
    }

    impl Snappable for CountingShape {
        fn id(&self) -> ShapeId {
            self.id
        }

        fn frame(&self) -> &Frame {
            &self.frame
        }

        fn frame_mut(&mut self) -> &mut Frame {
            &mut self.frame
        }

        fn coords(&self) -> [Point; 5] {
            self.coord_calls.set(self.coord_calls.get() + 1);
            self.frame.coords()
        }

        fn corner_map(&self) -> CornerMap {
            let mut map = crate::snappable::corner_map_from_coords(&self.frame.coords());
            if let Some(corner) = self.missing {
                map.remove(&corner);
            }
            map
        }

        fn opposite_corner_map(&self) -> OppositeCornerMap {
            let mut map = crate::handles::default_opposite_map();
            if let Some(corner) = self.missing {
                map.remove(&corner);
            }
            map
        }
    }

    #[test]
    fn test_unchanged_shape_is_computed_once() {
        let shape = CountingShape::new(Frame::new(Point::new(10.0, 10.0), 50.0, 50.0));
        let mut cache = GeometryCache::new();
        let first = cache.get(&shape);
        let second = cache.get(&shape);
        assert_eq!(first, second);
        assert_eq!(shape.coord_calls.get(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_changed_geometry_recomputes() {
        let mut shape = CountingShape::new(Frame::new(Point::ZERO, 50.0, 50.0));
        let mut cache = GeometryCache::new();
        cache.get(&shape);
        shape.frame.width = 60.0;
        let anchors = cache.get(&shape);
        assert_eq!(shape.coord_calls.get(), 2);
        assert_eq!(anchors[1].point, Point::new(60.0, 0.0));
    }

    #[test]
    fn test_clear_forces_recompute() {
        let shape = CountingShape::new(Frame::new(Point::ZERO, 50.0, 50.0));
        let mut cache = GeometryCache::new();
        cache.get(&shape);
        cache.clear();
        assert!(cache.is_empty());
        cache.get(&shape);
        assert_eq!(shape.coord_calls.get(), 2);
    }

    #[test]
    fn test_anchors_tagged_with_requesting_shape() {
        let a = CountingShape::new(Frame::new(Point::ZERO, 50.0, 50.0));
        let b = CountingShape::new(Frame::new(Point::ZERO, 50.0, 50.0));
        let mut cache = GeometryCache::new();
        cache.get(&a);
        let anchors = cache.get(&b);
        assert_eq!(b.coord_calls.get(), 0);
        assert_eq!(anchors[0].source, AnchorSource::Shape(b.id));
    }
}
