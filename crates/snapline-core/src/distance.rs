//! Single-axis nearest-candidate search.

use crate::anchor::{AnchorPoint, Axis};
use kurbo::Point;

/// Closest candidates to a point along one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Minimum `|point[axis] - candidate[axis]|`, `+inf` without candidates.
    pub distance: f64,
    /// Every candidate at `distance`, in input order.
    pub matches: Vec<AnchorPoint>,
}

impl Resolution {
    /// Check if the nearest candidate lies within `margin`.
    pub fn within(&self, margin: f64) -> bool {
        self.distance <= margin
    }

    /// First candidate at the minimum distance.
    pub fn first(&self) -> Option<&AnchorPoint> {
        self.matches.first()
    }
}

/// Find the candidates nearest to `point` on `axis`, keeping ties.
pub fn resolve(point: Point, candidates: &[AnchorPoint], axis: Axis) -> Resolution {
    let mut distance = f64::INFINITY;
    let mut matches = Vec::new();
    for candidate in candidates {
        let d = (axis.of(point) - candidate.coord(axis)).abs();
        if d < distance {
            distance = d;
            matches.clear();
            matches.push(*candidate);
        } else if d == distance {
            matches.push(*candidate);
        }
    }
    Resolution { distance, matches }
}
