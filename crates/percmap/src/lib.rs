//! Reference-line geometry and population segmentation for perceptual maps.
//!
//! Purpose
//! - Given two reference points in a 2D plotting plane and a rectangular
//!   viewport, derive the perpendicular bisector and a parallel corridor,
//!   clip each line to a finite, case-classified segment, and classify a
//!   population of scored individuals into seven independent segment
//!   systems with per-category percentage summaries.
//!
//! Layout
//! - `geom`: line construction and viewport clipping (the branch-heavy part).
//! - `segment`: per-individual classification and percentage aggregation.
//! - `engine`: the one-call pipeline wiring the two together.
//!
//! The engine is pure and synchronous; the single source of randomness
//! (the corner tie-break in `geom::clip`) is injected via a replay token.

pub mod engine;
pub mod error;
pub mod geom;
pub mod segment;

pub mod api;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{EngineError, Result};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::engine::{analyze, Analysis, EngineCfg};
    pub use crate::error::{EngineError, Result};
    pub use crate::geom::{
        build_reference_geometry, clip_line, ClippedLine, CorridorLines, Direction, GeomCfg, Line,
        LineCase, ReferenceGeometry, ReferencePair, TieToken, Viewport,
    };
    pub use crate::segment::{
        aggregate, classify, Individual, SegmentPercentages, SegmentSystem, SegmentTable,
    };
    pub use nalgebra::Vector2 as Vec2;
}
