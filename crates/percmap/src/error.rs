//! Engine error taxonomy.
//!
//! All failures are value-returned; none are used for ordinary control flow.
//! Floating-point edge effects (near-zero slopes, near-boundary
//! intersections) are handled by the epsilon/clamp policy in `geom` and
//! never surface here.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Reference indices equal, out of range, or pointing at coincident
    /// points: the connector is undefined and no geometry is returned.
    #[error("invalid reference points: {reason}")]
    InvalidReferencePoints { reason: String },

    /// The line's direction/edge-crossing combination matched none of the
    /// ten viewport cases. Unreachable for well-formed inputs, but checked
    /// rather than assumed; the raw coefficients are kept for diagnosis.
    #[error("line matches no viewport case (slope={slope}, intercept={intercept})")]
    UnclassifiableLine { slope: f64, intercept: f64 },

    /// Segmentation was invoked on unusable geometry (non-finite line
    /// coefficients or a zero-length connector). Build the reference
    /// geometry first.
    #[error("segmentation requires built reference geometry")]
    SegmentationPrecondition,

    /// Viewport bounds violate `x_min < x_max`, `y_min < y_max`.
    #[error("invalid viewport: {reason}")]
    InvalidViewport { reason: String },
}

pub type Result<T> = std::result::Result<T, EngineError>;
