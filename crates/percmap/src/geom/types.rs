//! Basic geometry types and tolerances.
//!
//! - `GeomCfg`: centralizes the epsilon policy (degenerate slopes, corner
//!   coincidence).
//! - `Line`: infinite line as slope/intercept plus an explicit `Direction`.
//! - `Viewport`: axis-aligned clip rectangle.
//! - `ReferencePair`, `CorridorLines`, `DividerPair`: small input/output
//!   bundles shared with the segmentation layer.

use nalgebra::Vector2;

use crate::error::{EngineError, Result};

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Substitute denominator for degenerate slopes (the "fudge factor").
    pub eps_slope: f64,
    /// Tolerance for detecting an intersection landing on a viewport corner.
    pub eps_corner: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_slope: 1e-23,
            eps_corner: 1e-9,
        }
    }
}

/// Orientation class of a line. Tracked explicitly so that direction logic
/// never depends on an epsilon-perturbed slope value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Flat,
    Vertical,
    UpwardSlope,
    DownwardSlope,
}

impl Direction {
    /// Direction of a perpendicular line. Invariant: Flat↔Vertical,
    /// UpwardSlope↔DownwardSlope.
    #[inline]
    pub fn inverted(self) -> Direction {
        match self {
            Direction::Flat => Direction::Vertical,
            Direction::Vertical => Direction::Flat,
            Direction::UpwardSlope => Direction::DownwardSlope,
            Direction::DownwardSlope => Direction::UpwardSlope,
        }
    }
}

/// Topological classification of how a line crosses the viewport.
///
/// `ZeroA`/`ZeroB` are the axis-aligned cases; the A-series covers
/// non-negative (upward) slopes, the B-series downward slopes. The case is
/// used purely to select the pair of clip edges and the endpoint order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(clippy::upper_case_acronyms)]
pub enum LineCase {
    /// Flat line: crosses left and right.
    ZeroA,
    /// Vertical line: crosses top and bottom.
    ZeroB,
    /// Upward, left and right.
    Ia,
    /// Upward, left and top.
    IIa,
    /// Upward, bottom and right.
    IIIa,
    /// Upward, bottom and top.
    IVa,
    /// Downward, left and right.
    Ib,
    /// Downward, left and bottom.
    IIb,
    /// Downward, top and right.
    IIIb,
    /// Downward, top and bottom.
    IVb,
}

impl LineCase {
    /// Canonical label, stable for reporting.
    pub fn label(self) -> &'static str {
        match self {
            LineCase::ZeroA => "ZeroA",
            LineCase::ZeroB => "ZeroB",
            LineCase::Ia => "Ia",
            LineCase::IIa => "IIa",
            LineCase::IIIa => "IIIa",
            LineCase::IVa => "IVa",
            LineCase::Ib => "Ib",
            LineCase::IIb => "IIb",
            LineCase::IIIb => "IIIb",
            LineCase::IVb => "IVb",
        }
    }
}

/// Conceptually infinite line in slope/intercept form.
///
/// For `Vertical` lines the slope is the epsilon-guarded huge value from the
/// builder; recover x positions through `x_at`, which divides the
/// perturbation back out.
#[derive(Clone, Copy, Debug)]
pub struct Line {
    pub slope: f64,
    pub intercept: f64,
    pub direction: Direction,
}

impl Line {
    #[inline]
    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// x position at height `y`; a zero slope is substituted with
    /// `cfg.eps_slope` so the division stays finite.
    #[inline]
    pub fn x_at(&self, y: f64, cfg: GeomCfg) -> f64 {
        let denom = if self.slope == 0.0 {
            cfg.eps_slope
        } else {
            self.slope
        };
        (y - self.intercept) / denom
    }

    /// Signed side value of `p` relative to the line, in the axis matching
    /// the line's direction: y-offset for `Flat` and sloped lines, x-offset
    /// for `Vertical`. Zero means exactly on the line.
    #[inline]
    pub fn side_of(&self, p: Vector2<f64>, cfg: GeomCfg) -> f64 {
        match self.direction {
            Direction::Flat => p.y - self.intercept,
            Direction::Vertical => p.x - self.x_at(p.y, cfg),
            Direction::UpwardSlope | Direction::DownwardSlope => p.y - self.y_at(p.x),
        }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.slope.is_finite() && self.intercept.is_finite()
    }
}

/// Axis-aligned clip rectangle. Invariants: `x_min < x_max`, `y_min < y_max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Viewport {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Viewport> {
        if !(x_min < x_max && y_min < y_max) {
            return Err(EngineError::InvalidViewport {
                reason: format!("x: [{x_min}, {x_max}], y: [{y_min}, {y_max}]"),
            });
        }
        Ok(Viewport {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    /// Symmetric square viewport around the configuration: maximum absolute
    /// coordinate, rounded up, plus `margin` on every side.
    pub fn around(points: &[Vector2<f64>], margin: f64) -> Result<Viewport> {
        let max_abs = points
            .iter()
            .flat_map(|p| [p.x.abs(), p.y.abs()])
            .fold(0.0_f64, f64::max);
        let half = max_abs.ceil() + margin.max(0.0);
        Viewport::new(-half, half, -half, half)
    }

    /// Clamp a point into the rectangle (post-clip endpoint correction).
    #[inline]
    pub fn clamp(&self, p: Vector2<f64>) -> Vector2<f64> {
        Vector2::new(
            p.x.clamp(self.x_min, self.x_max),
            p.y.clamp(self.y_min, self.y_max),
        )
    }

    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        self.x_min <= p.x && p.x <= self.x_max && self.y_min <= p.y && p.y <= self.y_max
    }
}

/// Indices of the two anchor points within the point set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReferencePair {
    pub a: usize,
    pub b: usize,
}

impl ReferencePair {
    pub fn validate(&self, point_count: usize) -> Result<()> {
        if self.a == self.b {
            return Err(EngineError::InvalidReferencePoints {
                reason: format!("indices coincide ({})", self.a),
            });
        }
        if self.a >= point_count || self.b >= point_count {
            return Err(EngineError::InvalidReferencePoints {
                reason: format!(
                    "index out of range (a={}, b={}, points={point_count})",
                    self.a, self.b
                ),
            });
        }
        Ok(())
    }
}

/// The two corridor boundaries, parallel to the bisector. `west` is the
/// boundary nearer reference point `a`, `east` nearer `b`.
#[derive(Clone, Copy, Debug)]
pub struct CorridorLines {
    pub west: Line,
    pub east: Line,
}

/// Per-axis midpoints of the bounding box spanned by the reference pair.
/// Used only by the OnlyDim1/OnlyDim2 segment systems, independent of the
/// bisector geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DividerPair {
    pub dim1: f64,
    pub dim2: f64,
}
