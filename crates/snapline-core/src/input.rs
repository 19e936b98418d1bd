//! Gesture events delivered by the host canvas.

use crate::handles::Corner;
use crate::shapes::ShapeId;
use serde::{Deserialize, Serialize};

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub meta: bool,
}

/// A single modifier key, as named in configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModifierKey {
    #[default]
    Shift,
    Ctrl,
    Alt,
    Meta,
}

impl ModifierKey {
    /// Check if this key is held in the given modifier state.
    pub fn is_pressed(self, modifiers: &Modifiers) -> bool {
        match self {
            ModifierKey::Shift => modifiers.shift,
            ModifierKey::Ctrl => modifiers.ctrl,
            ModifierKey::Alt => modifiers.alt,
            ModifierKey::Meta => modifiers.meta,
        }
    }
}

/// What a transform handle drag changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformAction {
    /// Corner drag changing both scale factors.
    Scale,
    /// Edge drag changing `scale_x`.
    ScaleX,
    /// Edge drag changing `scale_y`.
    ScaleY,
    /// Drag changing width/height directly.
    Resize,
}

impl TransformAction {
    /// Check if the gesture multiplies scale factors rather than size.
    pub fn is_scale(self) -> bool {
        !matches!(self, TransformAction::Resize)
    }
}

/// A scale or resize step on a shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformEvent {
    pub target: ShapeId,
    /// Handle under the pointer, as drawn on screen.
    pub corner: Corner,
    pub action: TransformAction,
    #[serde(default)]
    pub modifiers: Modifiers,
}

/// Events the alignment engine subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CanvasEvent {
    /// The target was moved by the host.
    Moving { target: ShapeId },
    /// The target was scaled by the host.
    Scaling(TransformEvent),
    /// The target was resized by the host.
    Resizing(TransformEvent),
    /// The host is about to paint.
    BeforeRender,
    /// The host finished painting shapes; overlays go on top.
    AfterRender,
    /// Pointer released, the gesture is over.
    MouseUp,
}

impl CanvasEvent {
    /// Shape under gesture, if the event carries one.
    pub fn target(&self) -> Option<ShapeId> {
        match self {
            CanvasEvent::Moving { target } => Some(*target),
            CanvasEvent::Scaling(e) | CanvasEvent::Resizing(e) => Some(e.target),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_key_pressed() {
        let mods = Modifiers {
            alt: true,
            ..Default::default()
        };
        assert!(ModifierKey::Alt.is_pressed(&mods));
        assert!(!ModifierKey::Shift.is_pressed(&mods));
    }

    #[test]
    fn test_transform_action_kind() {
        assert!(TransformAction::Scale.is_scale());
        assert!(TransformAction::ScaleY.is_scale());
        assert!(!TransformAction::Resize.is_scale());
    }

    #[test]
    fn test_event_target() {
        let id = ShapeId::new_v4();
        assert_eq!(CanvasEvent::Moving { target: id }.target(), Some(id));
        assert_eq!(CanvasEvent::MouseUp.target(), None);
    }

    #[test]
    fn test_modifier_key_from_config_name() {
        let key: ModifierKey = serde_json::from_str("\"ctrl\"").unwrap();
        assert_eq!(key, ModifierKey::Ctrl);
    }
}
