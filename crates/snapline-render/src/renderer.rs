//! Backend-agnostic guide overlay.

use kurbo::{Line, Point, Vec2};
use peniko::Color;
use snapline_core::{GuideLine, GuidePoint, GuideRenderer};
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Invalid guide style: {0}")]
    InvalidStyle(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Colors and screen-space sizes of guide overlays.
#[derive(Debug, Clone, Copy)]
pub struct GuideStyle {
    /// Guides aligning with another shape.
    pub line_color: Color,
    /// Guides aligning with the canvas frame.
    pub canvas_color: Color,
    /// Stroke width in screen pixels.
    pub stroke_width: f64,
    /// Half-size of the "x" markers in screen pixels.
    pub marker_size: f64,
    /// Dash length for canvas guides in screen pixels (0 = solid).
    pub canvas_dash: f64,
}

impl Default for GuideStyle {
    fn default() -> Self {
        Self {
            line_color: Color::from_rgba8(255, 95, 95, 255),
            canvas_color: Color::from_rgba8(255, 0, 0, 255),
            stroke_width: 1.0,
            marker_size: 2.4,
            canvas_dash: 5.0,
        }
    }
}

impl GuideStyle {
    /// Check that all sizes are usable.
    pub fn validate(&self) -> RenderResult<()> {
        let sizes = [
            ("stroke_width", self.stroke_width),
            ("marker_size", self.marker_size),
            ("canvas_dash", self.canvas_dash),
        ];
        for (name, value) in sizes {
            if !value.is_finite() || value < 0.0 {
                return Err(RendererError::InvalidStyle(format!("{name} = {value}")));
            }
        }
        if self.stroke_width == 0.0 {
            return Err(RendererError::InvalidStyle("stroke_width = 0".to_string()));
        }
        Ok(())
    }

    fn color_for(&self, canvas_snap: bool) -> Color {
        if canvas_snap { self.canvas_color } else { self.line_color }
    }
}

/// One primitive of the guide overlay, in canvas coordinates.
///
/// Widths and sizes are already divided by zoom.
#[derive(Debug, Clone, Copy)]
pub enum OverlayItem {
    Line {
        line: Line,
        color: Color,
        width: f64,
        /// Dash length, `None` for a solid line.
        dash: Option<f64>,
    },
    /// An "x" marker centered on a point.
    Marker {
        center: Point,
        size: f64,
        color: Color,
        width: f64,
    },
}

impl OverlayItem {
    /// The two strokes of a marker, or the line itself.
    pub fn segments(&self) -> Vec<Line> {
        match *self {
            OverlayItem::Line { line, .. } => vec![line],
            OverlayItem::Marker { center, size, .. } => {
                let a = Vec2::new(size, size);
                let b = Vec2::new(size, -size);
                vec![
                    Line::new(center - a, center + a),
                    Line::new(center - b, center + b),
                ]
            }
        }
    }

    pub fn color(&self) -> Color {
        match *self {
            OverlayItem::Line { color, .. } | OverlayItem::Marker { color, .. } => color,
        }
    }

    pub fn width(&self) -> f64 {
        match *self {
            OverlayItem::Line { width, .. } | OverlayItem::Marker { width, .. } => width,
        }
    }
}

/// Guide renderer that records overlay primitives.
///
/// Backends turn the recorded items into draw calls; tests and headless
/// tools inspect them directly.
#[derive(Debug, Clone, Default)]
pub struct OverlayRecorder {
    style: GuideStyle,
    items: Vec<OverlayItem>,
}

impl OverlayRecorder {
    /// Create a recorder with the default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recorder with a custom style.
    pub fn with_style(style: GuideStyle) -> RenderResult<Self> {
        style.validate()?;
        Ok(Self {
            style,
            items: Vec::new(),
        })
    }

    pub fn style(&self) -> &GuideStyle {
        &self.style
    }

    /// Items recorded since the overlay was last cleared.
    pub fn items(&self) -> &[OverlayItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn marker(&self, center: Point, color: Color, zoom: f64) -> OverlayItem {
        OverlayItem::Marker {
            center,
            size: self.style.marker_size / zoom,
            color,
            width: self.style.stroke_width / zoom,
        }
    }

    fn push_line(&mut self, guide: &GuideLine, zoom: f64) {
        let zoom = sanitize_zoom(zoom);
        let canvas_snap = guide.is_canvas_snap();
        let color = self.style.color_for(canvas_snap);
        let (start, end) = guide.span();
        let dash = (canvas_snap && self.style.canvas_dash > 0.0)
            .then(|| self.style.canvas_dash / zoom);
        self.items.push(OverlayItem::Line {
            line: Line::new(start, end),
            color,
            width: self.style.stroke_width / zoom,
            dash,
        });
        let markers = [self.marker(start, color, zoom), self.marker(end, color, zoom)];
        self.items.extend(markers);
    }
}

fn sanitize_zoom(zoom: f64) -> f64 {
    if zoom.is_finite() && zoom > 0.0 { zoom } else { 1.0 }
}

impl GuideRenderer for OverlayRecorder {
    fn clear_overlay(&mut self) {
        self.items.clear();
    }

    fn draw_vertical_line(&mut self, line: &GuideLine, zoom: f64) {
        self.push_line(line, zoom);
    }

    fn draw_horizontal_line(&mut self, line: &GuideLine, zoom: f64) {
        self.push_line(line, zoom);
    }

    fn draw_points(&mut self, points: &[GuidePoint], zoom: f64) {
        let zoom = sanitize_zoom(zoom);
        for point in points {
            let color = self.style.color_for(point.target.source.is_canvas());
            let markers = [
                self.marker(point.origin.point, color, zoom),
                self.marker(point.target.point, color, zoom),
            ];
            self.items.extend(markers);
        }
        log::trace!("recorded {} guide points", points.len());
    }
}
