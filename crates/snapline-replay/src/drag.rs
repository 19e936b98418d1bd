//! Host-side handle dragging: what the editor does to a shape before it
//! reports a scale or resize event.

use kurbo::Vec2;
use snapline_core::handles::default_origin;
use snapline_core::{Axis, Corner, Frame, TransformAction};

/// Action reported for a scale drag from `corner`.
pub fn scale_action(corner: Corner) -> TransformAction {
    match corner {
        Corner::MiddleLeft | Corner::MiddleRight => TransformAction::ScaleX,
        Corner::MiddleTop | Corner::MiddleBottom => TransformAction::ScaleY,
        _ => TransformAction::Scale,
    }
}

/// Move the handle drawn at `corner` by `delta` (canvas units), keeping the
/// opposite handle in place.
pub fn drag_handle(frame: &mut Frame, corner: Corner, delta: Vec2, action: TransformAction) {
    let corner = corner.for_flip(frame.is_flipped_x(), frame.is_flipped_y());
    let origin = default_origin(corner);
    let (fx, fy) = origin.fraction();
    let anchor = frame.relative_point(fx, fy);

    let axes = [
        (Axis::X, corner.moves_x(), if corner.has_right() { 1.0 } else { -1.0 }),
        (Axis::Y, corner.moves_y(), if corner.has_bottom() { 1.0 } else { -1.0 }),
    ];
    for (axis, moves, outward) in axes {
        if !moves {
            continue;
        }
        let growth = outward * delta.dot(frame.local_direction(axis));
        let part = if action.is_scale() {
            frame.scalable_extent(axis)
        } else {
            frame.resizable_extent(axis)
        };
        let ratio = (part + growth) / part;
        if !ratio.is_finite() || ratio <= 0.0 {
            log::debug!("ignoring degenerate drag of {corner:?} on {axis}");
            continue;
        }
        match (action.is_scale(), axis) {
            (true, Axis::X) => frame.scale_x *= ratio,
            (true, Axis::Y) => frame.scale_y *= ratio,
            (false, Axis::X) => frame.width *= ratio,
            (false, Axis::Y) => frame.height *= ratio,
        }
    }
    frame.set_relative_position(anchor, origin);
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    fn near(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn test_corner_scale_keeps_opposite() {
        let mut frame = Frame::new(Point::ZERO, 100.0, 100.0);
        drag_handle(&mut frame, Corner::BottomRight, Vec2::new(10.0, 5.0), TransformAction::Scale);
        assert!((frame.scale_x - 1.1).abs() < 1e-9);
        assert!((frame.scale_y - 1.05).abs() < 1e-9);
        assert!(near(frame.coords()[0], Point::ZERO));
    }

    #[test]
    fn test_left_resize_moves_position() {
        let mut frame = Frame::new(Point::ZERO, 100.0, 100.0);
        drag_handle(&mut frame, Corner::TopLeft, Vec2::new(-10.0, 0.0), TransformAction::Resize);
        assert!((frame.width - 110.0).abs() < 1e-9);
        assert!(near(frame.position, Point::new(-10.0, 0.0)));
        assert!(near(frame.coords()[2], Point::new(100.0, 100.0)));
    }

    #[test]
    fn test_flipped_visual_handle() {
        let mut frame = Frame::new(Point::new(200.0, 0.0), 100.0, 50.0);
        frame.scale_x = -1.0;
        drag_handle(&mut frame, Corner::TopLeft, Vec2::new(-10.0, 0.0), TransformAction::Scale);
        assert!((frame.scale_x + 1.1).abs() < 1e-9);
        assert!(near(frame.coords()[1], Point::new(90.0, 0.0)));
    }

    #[test]
    fn test_midpoint_moves_one_axis() {
        let mut frame = Frame::new(Point::ZERO, 100.0, 50.0);
        let delta = Vec2::new(30.0, 10.0);
        drag_handle(&mut frame, Corner::MiddleBottom, delta, TransformAction::ScaleY);
        assert!((frame.scale_x - 1.0).abs() < 1e-9);
        assert!((frame.scale_y - 1.2).abs() < 1e-9);
        assert_eq!(scale_action(Corner::MiddleBottom), TransformAction::ScaleY);
        assert_eq!(scale_action(Corner::TopRight), TransformAction::Scale);
    }
}
