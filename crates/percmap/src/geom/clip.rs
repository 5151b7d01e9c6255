//! Viewport clipping and topological case classification.
//!
//! Purpose
//! - Turn an infinite `Line` into a finite segment inside the `Viewport`,
//!   labeled with one of the ten `LineCase`s. The case selects the pair of
//!   clip edges and fixes the start/end order for deterministic rendering.
//!
//! Corner tie-break
//! - When an intersection lands exactly on a viewport corner (within
//!   `GeomCfg::eps_corner`), edge classification is ambiguous: one of the
//!   two adjacent edges is chosen uniformly at random. The RNG is injected;
//!   seed it via `TieToken` when reproducibility matters.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Direction, GeomCfg, Line, LineCase, Viewport};
use crate::error::{EngineError, Result};

/// Replay token seeding the corner tie-break RNG.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TieToken {
    pub seed: u64,
}

impl TieToken {
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ 0x9e3779b97f4a7c15))
    }
}

/// Which viewport edges the infinite line crosses strictly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EdgeCrossings {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

/// A line clipped to the viewport: case, crossings, finite endpoints.
/// Rebuilt whole on every geometry change.
#[derive(Clone, Copy, Debug)]
pub struct ClippedLine {
    pub line: Line,
    pub case: LineCase,
    pub crossings: EdgeCrossings,
    pub start: Vector2<f64>,
    pub end: Vector2<f64>,
}

#[inline]
fn near(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

/// Resolve a corner hit: exactly one of the two adjacent edges gets the
/// crossing, chosen uniformly.
#[inline]
fn pick_edge<R: Rng>(rng: &mut R, x_edge: &mut bool, y_edge: &mut bool) {
    if rng.gen::<bool>() {
        *x_edge = true;
        *y_edge = false;
    } else {
        *y_edge = true;
        *x_edge = false;
    }
}

/// Clip `line` against `viewport` and classify it.
///
/// Total for any line with a finite slope/intercept that crosses the
/// viewport interior; a sloped line missing the viewport (or merely grazing
/// a corner) yields `UnclassifiableLine`.
pub fn clip_line<R: Rng>(
    line: &Line,
    viewport: &Viewport,
    cfg: GeomCfg,
    rng: &mut R,
) -> Result<ClippedLine> {
    // Candidate intersections with the four edge lines.
    let y_left = line.y_at(viewport.x_min);
    let y_right = line.y_at(viewport.x_max);
    let x_bottom = line.x_at(viewport.y_min, cfg);
    let x_top = line.x_at(viewport.y_max, cfg);

    // An edge is crossed when the intersection falls strictly inside the
    // viewport's other-axis range.
    let mut left = viewport.y_min < y_left && y_left < viewport.y_max;
    let mut right = viewport.y_min < y_right && y_right < viewport.y_max;
    let mut bottom = viewport.x_min < x_bottom && x_bottom < viewport.x_max;
    let mut top = viewport.x_min < x_top && x_top < viewport.x_max;

    if matches!(
        line.direction,
        Direction::UpwardSlope | Direction::DownwardSlope
    ) {
        // Corner hits satisfy an x-edge and a y-edge condition at once;
        // both strict tests above came out false. Award exactly one edge.
        if near(y_left, viewport.y_min, cfg.eps_corner) {
            pick_edge(rng, &mut left, &mut bottom);
        }
        if near(y_left, viewport.y_max, cfg.eps_corner) {
            pick_edge(rng, &mut left, &mut top);
        }
        if near(y_right, viewport.y_min, cfg.eps_corner) {
            pick_edge(rng, &mut right, &mut bottom);
        }
        if near(y_right, viewport.y_max, cfg.eps_corner) {
            pick_edge(rng, &mut right, &mut top);
        }
    }

    let case = match line.direction {
        Direction::Flat => {
            left = true;
            right = true;
            bottom = false;
            top = false;
            LineCase::ZeroA
        }
        Direction::Vertical => {
            top = true;
            bottom = true;
            left = false;
            right = false;
            LineCase::ZeroB
        }
        Direction::UpwardSlope => {
            if left && right {
                LineCase::Ia
            } else if left && top {
                LineCase::IIa
            } else if bottom && right {
                LineCase::IIIa
            } else if bottom && top {
                LineCase::IVa
            } else {
                return Err(EngineError::UnclassifiableLine {
                    slope: line.slope,
                    intercept: line.intercept,
                });
            }
        }
        Direction::DownwardSlope => {
            if left && right {
                LineCase::Ib
            } else if left && bottom {
                LineCase::IIb
            } else if top && right {
                LineCase::IIIb
            } else if top && bottom {
                LineCase::IVb
            } else {
                return Err(EngineError::UnclassifiableLine {
                    slope: line.slope,
                    intercept: line.intercept,
                });
            }
        }
    };

    // Endpoints in fixed, case-defined order (not coordinate-sorted).
    let (start, end) = match case {
        LineCase::ZeroA | LineCase::Ia | LineCase::Ib => (
            Vector2::new(viewport.x_min, y_left),
            Vector2::new(viewport.x_max, y_right),
        ),
        LineCase::ZeroB | LineCase::IVb => (
            Vector2::new(x_top, viewport.y_max),
            Vector2::new(x_bottom, viewport.y_min),
        ),
        LineCase::IIa => (
            Vector2::new(viewport.x_min, y_left),
            Vector2::new(x_top, viewport.y_max),
        ),
        LineCase::IIIa => (
            Vector2::new(x_bottom, viewport.y_min),
            Vector2::new(viewport.x_max, y_right),
        ),
        LineCase::IVa => (
            Vector2::new(x_bottom, viewport.y_min),
            Vector2::new(x_top, viewport.y_max),
        ),
        LineCase::IIb => (
            Vector2::new(viewport.x_min, y_left),
            Vector2::new(x_bottom, viewport.y_min),
        ),
        LineCase::IIIb => (
            Vector2::new(x_top, viewport.y_max),
            Vector2::new(viewport.x_max, y_right),
        ),
    };

    Ok(ClippedLine {
        line: *line,
        case,
        crossings: EdgeCrossings {
            top,
            bottom,
            left,
            right,
        },
        // Clamp away floating-point overshoot past the boundary.
        start: viewport.clamp(start),
        end: viewport.clamp(end),
    })
}
