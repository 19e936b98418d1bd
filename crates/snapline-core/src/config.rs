//! Engine configuration.

use crate::error::{AlignError, AlignResult};
use crate::handles::{Corner, RelativeOrigin, default_origin};
use crate::input::ModifierKey;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default snapping tolerance in screen pixels.
pub const DEFAULT_MARGIN: f64 = 4.0;

/// Options recognized by the alignment engine.
///
/// Every field has a default, so a partial JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuideConfig {
    /// Snapping tolerance in screen pixels, divided by zoom before use.
    pub margin: f64,
    /// Do not draw vertical guides.
    pub close_v_line: bool,
    /// Do not draw horizontal guides.
    pub close_h_line: bool,
    /// Offer the canvas frame (corners and center) as candidates.
    pub snap_to_canvas: bool,
    /// Modifier that toggles uniform scaling.
    pub uni_scale_key: ModifierKey,
    /// Per-handle origin kept fixed after a transform snap.
    pub contrary_origin_map: Option<HashMap<Corner, RelativeOrigin>>,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            close_v_line: false,
            close_h_line: false,
            snap_to_canvas: true,
            uni_scale_key: ModifierKey::Shift,
            contrary_origin_map: None,
        }
    }
}

impl GuideConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> AlignResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| AlignError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject margins that would make every comparison meaningless.
    pub fn validate(&self) -> AlignResult<()> {
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(AlignError::InvalidConfig(format!(
                "margin must be a finite non-negative number, got {}",
                self.margin
            )));
        }
        Ok(())
    }

    /// Origin to re-anchor at when `corner` is dragged.
    pub fn origin_for(&self, corner: Corner) -> RelativeOrigin {
        self.contrary_origin_map
            .as_ref()
            .and_then(|map| map.get(&corner).copied())
            .unwrap_or_else(|| default_origin(corner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handles::{OriginX, OriginY};

    #[test]
    fn test_defaults() {
        let config = GuideConfig::default();
        assert!((config.margin - DEFAULT_MARGIN).abs() < f64::EPSILON);
        assert!(!config.close_v_line);
        assert!(!config.close_h_line);
        assert!(config.snap_to_canvas);
        assert_eq!(config.uni_scale_key, ModifierKey::Shift);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config = GuideConfig::from_json(r#"{"margin": 10, "close_h_line": true}"#).unwrap();
        assert!((config.margin - 10.0).abs() < f64::EPSILON);
        assert!(config.close_h_line);
        assert!(!config.close_v_line);
        assert!(config.snap_to_canvas);
    }

    #[test]
    fn test_invalid_margin_rejected() {
        let err = GuideConfig::from_json(r#"{"margin": -1}"#).unwrap_err();
        assert!(matches!(err, AlignError::InvalidConfig(_)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            GuideConfig::from_json("{margin"),
            Err(AlignError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_origin_override() {
        let config = GuideConfig::from_json(
            r#"{"contrary_origin_map": {"br": {"x": "center", "y": "center"}}}"#,
        )
        .unwrap();
        assert_eq!(
            config.origin_for(Corner::BottomRight),
            RelativeOrigin::new(OriginX::Center, OriginY::Center)
        );
        assert_eq!(config.origin_for(Corner::TopLeft), default_origin(Corner::TopLeft));
    }
}
