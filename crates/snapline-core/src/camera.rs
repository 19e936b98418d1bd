//! View zoom and screen-to-canvas length conversion.

use serde::{Deserialize, Serialize};

/// View state the alignment engine depends on.
///
/// The alignment margin is configured in screen pixels and converted to
/// canvas units through [`Camera::world_tolerance`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Current zoom level (1.0 = 100%)
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { zoom: 1.0 }
    }
}

impl Camera {
    /// Create a new camera at 100%.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_zoom(zoom: f64) -> Self {
        Self { zoom }
    }

    /// Convert a length in screen pixels to canvas units.
    ///
    /// A zoom that is not a positive finite number is treated as 100%.
    pub fn world_tolerance(&self, screen_px: f64) -> f64 {
        if self.zoom.is_finite() && self.zoom > 0.0 {
            screen_px / self.zoom
        } else {
            screen_px
        }
    }
}
