//! Snapline Core Library
//!
//! Alignment guides ("smart guides") for interactive 2D scene editors: while
//! a shape is moved, scaled or resized, its corners and center are matched
//! against other shapes and the canvas frame, the shape is snapped into
//! alignment, and guide lines are handed to an overlay renderer.

pub mod anchor;
pub mod cache;
pub mod camera;
pub mod config;
pub mod distance;
pub mod engine;
pub mod error;
pub mod guides;
pub mod handles;
pub mod input;
pub mod matcher;
pub mod render;
pub mod scene;
pub mod shapes;
pub mod snappable;

pub use anchor::{AnchorKind, AnchorPoint, AnchorSource, Axis};
pub use cache::GeometryCache;
pub use camera::Camera;
pub use config::GuideConfig;
pub use distance::{Resolution, resolve};
pub use engine::{AlignmentGuides, GestureState};
pub use error::{AlignError, AlignResult};
pub use guides::{GuideLine, GuidePoint, GuideRegistry};
pub use handles::{Corner, OriginX, OriginY, RelativeOrigin};
pub use input::{CanvasEvent, ModifierKey, Modifiers, TransformAction, TransformEvent};
pub use render::GuideRenderer;
pub use scene::{Scene, SnapScene};
pub use shapes::{Ellipse, Frame, Image, Rectangle, Shape, ShapeId};
pub use snappable::Snappable;
