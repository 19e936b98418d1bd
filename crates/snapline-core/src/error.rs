//! Error types for the alignment engine.

use crate::anchor::Axis;
use crate::handles::Corner;
use crate::shapes::ShapeId;
use thiserror::Error;

/// Conditions that stop a single matcher call.
///
/// None of these are fatal: the orchestrator logs them and treats the
/// frame as a no-snap outcome.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlignError {
    #[error("Shape not found: {0}")]
    ShapeNotFound(ShapeId),
    #[error("Corner {0:?} is missing from the shape's anchor maps")]
    UnknownCorner(Corner),
    #[error("Non-finite geometry while snapping on the {0} axis")]
    NonFinite(Axis),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for alignment operations.
pub type AlignResult<T> = Result<T, AlignError>;
