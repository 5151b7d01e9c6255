//! Reference-line geometry: builders and viewport clipping.
//!
//! Purpose
//! - Build the connector through the two reference points, its
//!   perpendicular bisector, and the two parallel corridor boundaries,
//!   then clip each conceptually infinite line against the viewport into
//!   a finite, case-classified segment.
//!
//! Numeric policy
//! - Degenerate slopes are epsilon-guarded (`GeomCfg::eps_slope`), never a
//!   raw division by zero; directions are tracked explicitly in
//!   `Direction` rather than inferred from perturbed slopes.
//! - Corner-exact crossings are resolved by an injected RNG (`TieToken`),
//!   the only nondeterminism in the crate.

mod build;
mod clip;
mod types;

pub use build::{
    build_bisector, build_connector, build_corridor, build_reference_geometry, ReferenceGeometry,
};
pub use clip::{clip_line, ClippedLine, EdgeCrossings, TieToken};
pub use types::{
    CorridorLines, Direction, DividerPair, GeomCfg, Line, LineCase, ReferencePair, Viewport,
};

#[cfg(test)]
mod tests;
