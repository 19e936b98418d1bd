//! Drawing seam between the engine and the host's overlay surface.

use crate::guides::{GuideLine, GuidePoint};

/// Surface the orchestrator paints guides onto.
///
/// Coordinates are canvas coordinates; `zoom` is passed so implementations
/// can keep stroke widths constant on screen.
pub trait GuideRenderer {
    /// Erase everything drawn on the overlay.
    fn clear_overlay(&mut self);

    /// Draw a guide on the x axis.
    fn draw_vertical_line(&mut self, line: &GuideLine, zoom: f64);

    /// Draw a guide on the y axis.
    fn draw_horizontal_line(&mut self, line: &GuideLine, zoom: f64);

    /// Draw point-only guides.
    fn draw_points(&mut self, points: &[GuidePoint], zoom: f64);
}
