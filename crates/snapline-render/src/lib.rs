//! Snapline Render Library
//!
//! Overlay renderers for alignment guides.
//! The Vello implementation is available behind the `vello-renderer` feature.

mod renderer;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use renderer::{GuideStyle, OverlayItem, OverlayRecorder, RenderResult, RendererError};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloGuideRenderer;
