//! Matchers that snap the shape under gesture onto candidate anchors.

mod transform;
mod translate;

pub use transform::{TransformSnap, snap_transform};
pub use translate::snap_translation;

use crate::anchor::{AnchorPoint, canvas_anchors};
use crate::cache::GeometryCache;
use crate::scene::SnapScene;
use crate::shapes::ShapeId;

/// Pool the anchors of every candidate of `target`, plus the canvas frame
/// when `with_canvas` is set and the scene has one.
pub fn candidate_pool<S: SnapScene>(
    scene: &S,
    cache: &mut GeometryCache,
    target: ShapeId,
    with_canvas: bool,
) -> Vec<AnchorPoint> {
    let mut pool: Vec<AnchorPoint> = scene
        .candidates(target)
        .into_iter()
        .flat_map(|shape| cache.get(shape))
        .collect();
    if with_canvas {
        if let Some(size) = scene.canvas_size() {
            pool.extend(canvas_anchors(size));
        }
    }
    pool
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::anchor::AnchorSource;
    use crate::scene::Scene;
    use crate::shapes::Rectangle;
    use kurbo::{Point, Size};

    /// Point comparison with an epsilon.
    pub(crate) fn assert_near(actual: Point, expected: Point) {
        assert!(
            (actual.x - expected.x).abs() < 1e-9 && (actual.y - expected.y).abs() < 1e-9,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_pool_excludes_target() {
        let mut scene: Scene = Scene::new();
        let target = scene.add_shape(Rectangle::new(Point::ZERO, 10.0, 10.0));
        let other = scene.add_shape(Rectangle::new(Point::new(50.0, 0.0), 10.0, 10.0));
        let mut cache = GeometryCache::new();
        let pool = candidate_pool(&scene, &mut cache, target, true);
        assert_eq!(pool.len(), 5);
        assert!(pool.iter().all(|a| a.source == AnchorSource::Shape(other)));
    }

    #[test]
    fn test_pool_with_canvas_frame() {
        let mut scene: Scene = Scene::with_canvas(Size::new(800.0, 600.0));
        let target = scene.add_shape(Rectangle::new(Point::ZERO, 10.0, 10.0));
        let mut cache = GeometryCache::new();
        let pool = candidate_pool(&scene, &mut cache, target, true);
        assert_eq!(pool.len(), 5);
        assert!(pool.iter().all(|a| a.source.is_canvas()));
        assert!(candidate_pool(&scene, &mut cache, target, false).is_empty());
    }
}
