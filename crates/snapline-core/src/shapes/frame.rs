//! Placement of a shape on the canvas: position, size, scale, rotation, stroke.

use crate::anchor::Axis;
use crate::cache::GeometryKey;
use crate::handles::RelativeOrigin;
use kurbo::{Affine, Point, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Tolerance for treating an angle as a multiple of 90°.
const ANGLE_EPSILON: f64 = 1e-9;

/// Geometry shared by every shape kind.
///
/// `position` is the canvas location of the shape's geometric top-left
/// corner, around which the shape is rotated. A negative scale flips the
/// shape along that axis, so on a horizontally flipped shape the geometric
/// top-left corner is drawn on the right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Canvas position of the geometric top-left corner.
    pub position: Point,
    /// Unscaled width.
    pub width: f64,
    /// Unscaled height.
    pub height: f64,
    #[serde(default = "default_scale")]
    pub scale_x: f64,
    #[serde(default = "default_scale")]
    pub scale_y: f64,
    /// Rotation in degrees, clockwise in canvas space.
    #[serde(default)]
    pub angle: f64,
    #[serde(default)]
    pub stroke_width: f64,
    /// Stroke keeps its canvas width instead of scaling with the shape.
    #[serde(default)]
    pub stroke_uniform: bool,
    /// Shape is never offered as a snap candidate (guide/grid decorations).
    #[serde(default)]
    pub ignore_snapping: bool,
}

fn default_scale() -> f64 {
    1.0
}

impl Frame {
    /// Create an unrotated, unscaled frame without stroke.
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            position,
            width,
            height,
            scale_x: 1.0,
            scale_y: 1.0,
            angle: 0.0,
            stroke_width: 0.0,
            stroke_uniform: false,
            ignore_snapping: false,
        }
    }

    /// Stroke that scales together with the shape.
    fn scaling_stroke(&self) -> f64 {
        if self.stroke_uniform { 0.0 } else { self.stroke_width }
    }

    /// Stroke that stays constant in canvas units.
    fn fixed_stroke(&self) -> f64 {
        if self.stroke_uniform { self.stroke_width } else { 0.0 }
    }

    /// Canvas extent of the shape (stroke included) along its local axes.
    pub fn scaled_size(&self) -> Size {
        Size::new(
            (self.width + self.scaling_stroke()) * self.scale_x.abs() + self.fixed_stroke(),
            (self.height + self.scaling_stroke()) * self.scale_y.abs() + self.fixed_stroke(),
        )
    }

    /// Part of the local extent that a scale gesture multiplies.
    pub fn scalable_extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => (self.width + self.scaling_stroke()) * self.scale_x.abs(),
            Axis::Y => (self.height + self.scaling_stroke()) * self.scale_y.abs(),
        }
    }

    /// Part of the local extent that a resize gesture multiplies.
    pub fn resizable_extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.width * self.scale_x.abs(),
            Axis::Y => self.height * self.scale_y.abs(),
        }
    }

    pub fn is_flipped_x(&self) -> bool {
        self.scale_x.is_sign_negative()
    }

    pub fn is_flipped_y(&self) -> bool {
        self.scale_y.is_sign_negative()
    }

    /// Check if the rotation is an exact multiple of 90°.
    pub fn is_axis_aligned(&self) -> bool {
        let rem = self.angle.rem_euclid(90.0);
        rem < ANGLE_EPSILON || 90.0 - rem < ANGLE_EPSILON
    }

    /// Canvas direction of the local axis, flip included.
    pub fn local_direction(&self, axis: Axis) -> Vec2 {
        let (sin, cos) = self.angle.to_radians().sin_cos();
        match axis {
            Axis::X => Vec2::new(cos, sin) * self.scale_x.signum(),
            Axis::Y => Vec2::new(-sin, cos) * self.scale_y.signum(),
        }
    }

    /// Canvas vectors spanning the local box (top edge, left edge).
    fn edges(&self) -> (Vec2, Vec2) {
        let size = self.scaled_size();
        (
            self.local_direction(Axis::X) * size.width,
            self.local_direction(Axis::Y) * size.height,
        )
    }

    /// Canvas position of a fractional point in the local box.
    pub fn relative_point(&self, fx: f64, fy: f64) -> Point {
        let (ex, ey) = self.edges();
        self.position + ex * fx + ey * fy
    }

    /// Corners (tl, tr, br, bl) and center in canvas coordinates.
    pub fn coords(&self) -> [Point; 5] {
        [
            self.relative_point(0.0, 0.0),
            self.relative_point(1.0, 0.0),
            self.relative_point(1.0, 1.0),
            self.relative_point(0.0, 1.0),
            self.relative_point(0.5, 0.5),
        ]
    }

    /// Move the frame so that the local point named by `origin` lands on `point`.
    pub fn set_relative_position(&mut self, point: Point, origin: RelativeOrigin) {
        let (fx, fy) = origin.fraction();
        let (ex, ey) = self.edges();
        self.position = point - ex * fx - ey * fy;
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Local-to-canvas transform (before stroke is added to the extent).
    pub fn transform_matrix(&self) -> Affine {
        Affine::translate(self.position.to_vec2())
            * Affine::rotate(self.angle.to_radians())
            * Affine::scale_non_uniform(self.scale_x, self.scale_y)
    }

    /// Value key identifying this geometry for the anchor cache.
    pub fn cache_key(&self) -> GeometryKey {
        GeometryKey::new(
            self.transform_matrix(),
            self.width,
            self.height,
            self.stroke_width,
            self.stroke_uniform,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handles::{OriginX, OriginY};

    fn approx(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn test_coords_unrotated() {
        let frame = Frame::new(Point::new(10.0, 20.0), 100.0, 50.0);
        let [tl, tr, br, bl, c] = frame.coords();
        assert!(approx(tl, Point::new(10.0, 20.0)));
        assert!(approx(tr, Point::new(110.0, 20.0)));
        assert!(approx(br, Point::new(110.0, 70.0)));
        assert!(approx(bl, Point::new(10.0, 70.0)));
        assert!(approx(c, Point::new(60.0, 45.0)));
    }

    #[test]
    fn test_scaled_size_with_stroke() {
        let mut frame = Frame::new(Point::ZERO, 100.0, 50.0);
        frame.scale_x = 2.0;
        frame.stroke_width = 4.0;
        assert!((frame.scaled_size().width - 208.0).abs() < 1e-9);
        frame.stroke_uniform = true;
        assert!((frame.scaled_size().width - 204.0).abs() < 1e-9);
        assert!((frame.scalable_extent(Axis::X) - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_rotated_coords() {
        let mut frame = Frame::new(Point::ZERO, 100.0, 50.0);
        frame.angle = 90.0;
        let [_, tr, _, bl, _] = frame.coords();
        assert!(approx(tr, Point::new(0.0, 100.0)));
        assert!(approx(bl, Point::new(-50.0, 0.0)));
        assert!(frame.is_axis_aligned());
        frame.angle = 45.0;
        assert!(!frame.is_axis_aligned());
    }

    #[test]
    fn test_flipped_coords() {
        let mut frame = Frame::new(Point::new(100.0, 0.0), 100.0, 50.0);
        frame.scale_x = -1.0;
        let [tl, tr, ..] = frame.coords();
        assert!(approx(tl, Point::new(100.0, 0.0)));
        assert!(approx(tr, Point::new(0.0, 0.0)));
        assert!(frame.is_flipped_x());
        assert!(!frame.is_flipped_y());
    }

    #[test]
    fn test_set_relative_position() {
        let mut frame = Frame::new(Point::ZERO, 100.0, 50.0);
        frame.set_relative_position(
            Point::new(300.0, 200.0),
            RelativeOrigin::new(OriginX::Right, OriginY::Bottom),
        );
        assert!(approx(frame.position, Point::new(200.0, 150.0)));
        assert!(approx(frame.coords()[2], Point::new(300.0, 200.0)));
    }

    #[test]
    fn test_negative_quarter_turn_is_axis_aligned() {
        let mut frame = Frame::new(Point::ZERO, 1.0, 1.0);
        frame.angle = -90.0;
        assert!(frame.is_axis_aligned());
        frame.angle = 450.0;
        assert!(frame.is_axis_aligned());
    }

    #[test]
    fn test_cache_key_changes_with_geometry() {
        let mut frame = Frame::new(Point::ZERO, 100.0, 50.0);
        let key = frame.cache_key();
        assert_eq!(key, frame.clone().cache_key());
        frame.translate(Vec2::new(1.0, 0.0));
        assert_ne!(key, frame.cache_key());

        frame.stroke_width = 2.0;
        let stroked = frame.cache_key();
        frame.stroke_uniform = true;
        assert_ne!(stroked, frame.cache_key());
    }
}
