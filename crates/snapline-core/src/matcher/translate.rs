//! Snapping for move gestures.

use crate::anchor::{AnchorPoint, Axis};
use crate::cache::GeometryCache;
use crate::distance::{Resolution, resolve};
use crate::error::{AlignError, AlignResult};
use crate::guides::GuideLine;
use crate::scene::SnapScene;
use crate::shapes::ShapeId;
use crate::snappable::Snappable;
use kurbo::Vec2;

/// Snap the moving shape onto the nearest candidate anchors, x then y.
///
/// Each axis is resolved on its own: the five anchors of the shape are
/// compared against `pool` and, if the best distance is within `margin`,
/// the shape is shifted once so that the first anchor at that distance lands
/// on its first match. Every anchor at the best distance yields one guide
/// per matched candidate.
///
/// Guides are returned with their origins taken from the snapped geometry.
pub fn snap_translation<S: SnapScene>(
    scene: &mut S,
    cache: &mut GeometryCache,
    target: ShapeId,
    pool: &[AnchorPoint],
    margin: f64,
) -> AlignResult<Vec<GuideLine>> {
    // (axis, index of the moving anchor, matched candidate)
    let mut hits: Vec<(Axis, usize, AnchorPoint)> = Vec::new();

    for axis in [Axis::X, Axis::Y] {
        let shape = scene.shape(target).ok_or(AlignError::ShapeNotFound(target))?;
        let moving = cache.get(shape);
        let resolutions: Vec<Resolution> =
            moving.iter().map(|anchor| resolve(anchor.point, pool, axis)).collect();

        let best = resolutions
            .iter()
            .map(|r| r.distance)
            .fold(f64::INFINITY, f64::min);
        if !(best <= margin) {
            continue;
        }

        let tied: Vec<usize> = (0..moving.len())
            .filter(|&i| resolutions[i].distance == best)
            .collect();
        let Some(&first) = tied.first() else {
            continue;
        };
        let Some(first_match) = resolutions[first].first().copied() else {
            continue;
        };

        let offset = first_match.coord(axis) - moving[first].coord(axis);
        if !offset.is_finite() {
            return Err(AlignError::NonFinite(axis));
        }
        log::debug!("snap {target} on {axis} by {offset} (distance {best})");

        let shape = scene
            .shape_mut(target)
            .ok_or(AlignError::ShapeNotFound(target))?;
        let delta = match axis {
            Axis::X => Vec2::new(offset, 0.0),
            Axis::Y => Vec2::new(0.0, offset),
        };
        shape.frame_mut().translate(delta);
        shape.set_coords();

        for &i in &tied {
            hits.extend(resolutions[i].matches.iter().map(|m| (axis, i, *m)));
        }
    }

    if hits.is_empty() {
        return Ok(Vec::new());
    }
    let shape = scene.shape(target).ok_or(AlignError::ShapeNotFound(target))?;
    let snapped = cache.get(shape);
    Ok(hits
        .into_iter()
        .map(|(axis, i, candidate)| GuideLine::new(axis, snapped[i], candidate))
        .collect())
}
