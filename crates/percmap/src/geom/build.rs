//! Reference-line builders: connector, perpendicular bisector, corridor.
//!
//! All constructors are pure; degenerate orientations go through the
//! `GeomCfg::eps_slope` guard and carry their `Direction` explicitly so no
//! downstream logic reads a perturbed slope to decide orientation.

use nalgebra::Vector2;

use super::types::{CorridorLines, Direction, DividerPair, GeomCfg, Line, ReferencePair};
use crate::error::{EngineError, Result};

/// Everything segmentation and clipping need about one reference pair.
///
/// Rebuilt whole whenever the pair, tolerances, or point set change;
/// never mutated incrementally.
#[derive(Clone, Debug)]
pub struct ReferenceGeometry {
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
    pub midpoint: Vector2<f64>,
    pub connector: Line,
    pub bisector: Line,
    pub corridor: CorridorLines,
    pub connector_length: f64,
    /// `connector_length × core_tolerance`: radius of the circular core
    /// region around each reference point.
    pub core_radius: f64,
    pub dividers: DividerPair,
    /// Sign `s` with `s × bisector.side_of(a) > 0`. Orients every side test
    /// in segmentation toward reference point `a`, replacing per-direction
    /// comparison tables.
    pub side_toward_a: f64,
    pub cfg: GeomCfg,
}

/// Sign of `a`'s side of the bisector family, `+1` on the non-negative side.
#[inline]
fn side_sign(bisector: &Line, a: Vector2<f64>, cfg: GeomCfg) -> f64 {
    if bisector.side_of(a, cfg) >= 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// Line through the two reference points.
///
/// A zero x-span substitutes `eps_slope` for the denominator; the
/// `Vertical` direction is set explicitly rather than derived from the
/// resulting huge slope.
pub fn build_connector(a: Vector2<f64>, b: Vector2<f64>, cfg: GeomCfg) -> Line {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let direction = if dy == 0.0 {
        Direction::Flat
    } else if dx == 0.0 {
        Direction::Vertical
    } else if dy / dx > 0.0 {
        Direction::UpwardSlope
    } else {
        Direction::DownwardSlope
    };
    let denom = if dx == 0.0 { cfg.eps_slope } else { dx };
    let slope = dy / denom;
    Line {
        slope,
        intercept: a.y - slope * a.x,
        direction,
    }
}

/// Perpendicular bisector: slope `−1/connector.slope` (epsilon-guarded),
/// through the midpoint, direction inverted from the connector's.
///
/// The inversion (Flat↔Vertical, Upward↔Downward) is a hard invariant.
pub fn build_bisector(connector: &Line, midpoint: Vector2<f64>, cfg: GeomCfg) -> Line {
    let denom = if connector.slope == 0.0 {
        cfg.eps_slope
    } else {
        connector.slope
    };
    let slope = -1.0 / denom;
    Line {
        slope,
        intercept: midpoint.y - slope * midpoint.x,
        direction: connector.direction.inverted(),
    }
}

/// Two lines parallel to the bisector, offset by `tolerance ×
/// connector_length`, bounding the battleground corridor. `west` is the
/// boundary nearer reference point `a`, `east` nearer `b`.
pub fn build_corridor(
    bisector: &Line,
    midpoint: Vector2<f64>,
    a: Vector2<f64>,
    tolerance: f64,
    connector_length: f64,
    cfg: GeomCfg,
) -> CorridorLines {
    let offset = tolerance * connector_length;
    // Which side of the bisector `a` sits on, in the axis matching the
    // bisector's direction.
    let s = side_sign(bisector, a, cfg);
    let (intercept_west, intercept_east) = match bisector.direction {
        // Shift along x: pass through (mx ± offset, my).
        Direction::Vertical => (
            midpoint.y - bisector.slope * (midpoint.x + s * offset),
            midpoint.y - bisector.slope * (midpoint.x - s * offset),
        ),
        // Shift along y: pass through (mx, my ± offset).
        Direction::Flat => (
            (midpoint.y + s * offset) - bisector.slope * midpoint.x,
            (midpoint.y - s * offset) - bisector.slope * midpoint.x,
        ),
        // Sloped: shift the intercept along y.
        Direction::UpwardSlope | Direction::DownwardSlope => (
            bisector.intercept + s * offset,
            bisector.intercept - s * offset,
        ),
    };
    let parallel = |intercept: f64| Line {
        slope: bisector.slope,
        intercept,
        direction: bisector.direction,
    };
    CorridorLines {
        west: parallel(intercept_west),
        east: parallel(intercept_east),
    }
}

/// Build the full reference geometry for one pair.
///
/// Errors with `InvalidReferencePoints` when the indices coincide, fall
/// out of range, or address coincident points (zero-length connector).
pub fn build_reference_geometry(
    points: &[Vector2<f64>],
    pair: ReferencePair,
    tolerance: f64,
    core_tolerance: f64,
    cfg: GeomCfg,
) -> Result<ReferenceGeometry> {
    pair.validate(points.len())?;
    let a = points[pair.a];
    let b = points[pair.b];
    let connector_length = (b - a).norm();
    if connector_length == 0.0 {
        return Err(EngineError::InvalidReferencePoints {
            reason: format!("points {} and {} coincide at ({}, {})", pair.a, pair.b, a.x, a.y),
        });
    }
    let midpoint = (a + b) * 0.5;
    let connector = build_connector(a, b, cfg);
    let bisector = build_bisector(&connector, midpoint, cfg);
    let corridor = build_corridor(&bisector, midpoint, a, tolerance, connector_length, cfg);
    let side_toward_a = side_sign(&bisector, a, cfg);
    Ok(ReferenceGeometry {
        a,
        b,
        midpoint,
        connector,
        bisector,
        corridor,
        connector_length,
        core_radius: connector_length * core_tolerance,
        dividers: DividerPair {
            dim1: (a.x + b.x) * 0.5,
            dim2: (a.y + b.y) * 0.5,
        },
        side_toward_a,
        cfg,
    })
}
