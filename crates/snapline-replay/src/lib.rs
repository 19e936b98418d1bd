//! Snapline Replay
//!
//! Drives the alignment engine from scripted gesture scenarios, without a
//! window. Used for demos and for checking snapping behavior end to end.

pub mod drag;
pub mod scenario;

pub use drag::{drag_handle, scale_action};
pub use scenario::{
    FrameReport, Replay, ReplayError, ReplayResult, Scenario, ShapeKind, ShapeSpec, Step,
    load_scenario, parse_scenario,
};
