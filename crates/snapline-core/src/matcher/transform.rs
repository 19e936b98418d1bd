//! Snapping for scale and resize gestures.

use crate::anchor::{AnchorKind, AnchorPoint, AnchorSource, Axis};
use crate::distance::resolve;
use crate::error::{AlignError, AlignResult};
use crate::guides::GuideLine;
use crate::handles::{Corner, RelativeOrigin};
use crate::input::{TransformAction, TransformEvent};
use crate::scene::SnapScene;
use crate::shapes::{Frame, ShapeId};
use crate::snappable::Snappable;
use kurbo::Point;

/// Guides still counted as aligned after both axes have been snapped.
const ALIGN_EPSILON: f64 = 1e-6;

/// Smallest usable projection of a local axis onto a canvas axis.
const DIRECTION_EPSILON: f64 = 1e-9;

/// Outcome of a transform snap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformSnap {
    pub guides: Vec<GuideLine>,
    /// Guides belong to an edge-midpoint handle and are drawn as points.
    pub point_only: bool,
}

/// Snap the dragged handle of a scale/resize gesture onto candidate anchors.
///
/// The handle is matched on each local axis it moves. A match changes the
/// scale (or size) along that axis so the handle lands on the candidate,
/// then the shape is re-anchored so that the opposite handle stays where it
/// was. With `uniform` set the other axis receives the same ratio.
///
/// `origin` maps a handle to the relative origin used for re-anchoring.
/// On error the shape's frame is left exactly as it was.
pub fn snap_transform<S, F>(
    scene: &mut S,
    event: &TransformEvent,
    pool: &[AnchorPoint],
    margin: f64,
    uniform: bool,
    origin: F,
) -> AlignResult<TransformSnap>
where
    S: SnapScene,
    F: Fn(Corner) -> RelativeOrigin,
{
    let target = event.target;
    let shape = scene.shape(target).ok_or(AlignError::ShapeNotFound(target))?;
    let frame = shape.frame();
    let corner = event.corner.for_flip(frame.is_flipped_x(), frame.is_flipped_y());
    let point_only = corner.is_midpoint();

    if point_only && !frame.is_axis_aligned() {
        log::debug!("midpoint {corner:?} on rotated {target}, no guides");
        return Ok(TransformSnap {
            guides: Vec::new(),
            point_only,
        });
    }

    let corners = shape.corner_map();
    let opposite = shape
        .opposite_corner_map()
        .get(&corner)
        .copied()
        .ok_or(AlignError::UnknownCorner(corner))?;
    if !corners.contains_key(&corner) {
        return Err(AlignError::UnknownCorner(corner));
    }
    let diagonal = corners
        .get(&opposite)
        .copied()
        .ok_or(AlignError::UnknownCorner(opposite))?;

    let original = frame.clone();
    let stretch = Stretch {
        target,
        corner,
        diagonal,
        origin: origin(corner),
        action: event.action,
        uniform: uniform && !point_only,
    };
    match stretch.apply(scene, pool, margin) {
        Ok(hits) => {
            let guides = aligned_guides(scene, target, corner, hits)?;
            Ok(TransformSnap { guides, point_only })
        }
        Err(err) => {
            if let Some(shape) = scene.shape_mut(target) {
                *shape.frame_mut() = original;
                shape.set_coords();
            }
            Err(err)
        }
    }
}

/// One handle drag, resolved axis by axis.
struct Stretch {
    target: ShapeId,
    corner: Corner,
    diagonal: Point,
    origin: RelativeOrigin,
    action: TransformAction,
    uniform: bool,
}

impl Stretch {
    /// Snap each local axis the handle moves, returning `(canvas axis, candidate)` hits.
    ///
    /// The handle moves onto the first match; every match at the same
    /// distance is returned so ties on one line all get a guide.
    fn apply<S: SnapScene>(
        &self,
        scene: &mut S,
        pool: &[AnchorPoint],
        margin: f64,
    ) -> AlignResult<Vec<(Axis, AnchorPoint)>> {
        let mut hits = Vec::new();
        let local_axes = [
            (Axis::X, self.corner.moves_x()),
            (Axis::Y, self.corner.moves_y()),
        ];
        for (local, moves) in local_axes {
            if !moves {
                continue;
            }
            let shape = scene
                .shape_mut(self.target)
                .ok_or(AlignError::ShapeNotFound(self.target))?;
            let dragged = shape
                .corner_map()
                .get(&self.corner)
                .copied()
                .ok_or(AlignError::UnknownCorner(self.corner))?;

            let direction = shape.frame().local_direction(local);
            let canvas = match local {
                Axis::X if direction.x.abs() >= direction.y.abs() => Axis::X,
                Axis::X => Axis::Y,
                Axis::Y if direction.y.abs() >= direction.x.abs() => Axis::Y,
                Axis::Y => Axis::X,
            };

            let resolution = resolve(dragged, pool, canvas);
            if !resolution.within(margin) {
                continue;
            }
            let Some(candidate) = resolution.first().copied() else {
                continue;
            };

            let offset = candidate.coord(canvas) - canvas.of(dragged);
            let ratio = self.ratio(shape.frame(), local, canvas, offset)?;
            log::debug!(
                "snap {:?} of {} on {canvas}: ratio {ratio} (distance {})",
                self.corner,
                self.target,
                resolution.distance
            );

            let frame = shape.frame_mut();
            self.rescale(frame, local, ratio);
            frame.set_relative_position(self.diagonal, self.origin);
            shape.set_coords();
            hits.extend(resolution.matches.into_iter().map(|m| (canvas, m)));
        }
        Ok(hits)
    }

    /// Ratio that moves the handle by `offset` along the `canvas` axis.
    fn ratio(&self, frame: &Frame, local: Axis, canvas: Axis, offset: f64) -> AlignResult<f64> {
        let outward = match local {
            Axis::X if self.corner.has_right() => 1.0,
            Axis::X => -1.0,
            Axis::Y if self.corner.has_bottom() => 1.0,
            Axis::Y => -1.0,
        };
        let direction = frame.local_direction(local);
        let along = outward
            * match canvas {
                Axis::X => direction.x,
                Axis::Y => direction.y,
            };
        if along.abs() < DIRECTION_EPSILON {
            return Err(AlignError::NonFinite(local));
        }
        let growth = offset / along;
        let part = if self.action.is_scale() {
            frame.scalable_extent(local)
        } else {
            frame.resizable_extent(local)
        };
        let ratio = (part + growth) / part;
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(AlignError::NonFinite(local));
        }
        Ok(ratio)
    }

    fn rescale(&self, frame: &mut Frame, local: Axis, ratio: f64) {
        let axes: &[Axis] = if self.uniform {
            &[Axis::X, Axis::Y]
        } else {
            std::slice::from_ref(&local)
        };
        for &axis in axes {
            match (self.action.is_scale(), axis) {
                (true, Axis::X) => frame.scale_x *= ratio,
                (true, Axis::Y) => frame.scale_y *= ratio,
                (false, Axis::X) => frame.width *= ratio,
                (false, Axis::Y) => frame.height *= ratio,
            }
        }
    }
}

/// Build guides from the final handle position, dropping any a later axis
/// pulled out of alignment.
fn aligned_guides<S: SnapScene>(
    scene: &S,
    target: ShapeId,
    corner: Corner,
    hits: Vec<(Axis, AnchorPoint)>,
) -> AlignResult<Vec<GuideLine>> {
    if hits.is_empty() {
        return Ok(Vec::new());
    }
    let shape = scene.shape(target).ok_or(AlignError::ShapeNotFound(target))?;
    let handle = shape
        .corner_map()
        .get(&corner)
        .copied()
        .ok_or(AlignError::UnknownCorner(corner))?;
    let origin = AnchorPoint::new(handle, AnchorSource::Shape(target), AnchorKind::Handle(corner));
    Ok(hits
        .into_iter()
        .filter(|(axis, candidate)| {
            (origin.coord(*axis) - candidate.coord(*axis)).abs() <= ALIGN_EPSILON
        })
        .map(|(axis, candidate)| GuideLine::new(axis, origin, candidate))
        .collect())
}
