//! One-call pipeline: builder → clipper → classifier → aggregator.

use nalgebra::Vector2;

use crate::error::Result;
use crate::geom::{
    build_reference_geometry, clip_line, ClippedLine, GeomCfg, ReferenceGeometry, ReferencePair,
    TieToken, Viewport,
};
use crate::segment::{aggregate, classify, Individual, SegmentPercentages, SegmentTable};

/// Engine configuration: corridor half-width and core radius as fractions
/// of the connector length, plus the numeric policy.
#[derive(Clone, Copy, Debug)]
pub struct EngineCfg {
    pub tolerance: f64,
    pub core_tolerance: f64,
    pub geom: GeomCfg,
}

impl Default for EngineCfg {
    fn default() -> Self {
        Self {
            tolerance: 0.25,
            core_tolerance: 0.2,
            geom: GeomCfg::default(),
        }
    }
}

/// Full engine output: clipped lines for rendering, the segment table, and
/// the per-system percentage summary for reporting.
#[derive(Clone, Debug)]
pub struct Analysis {
    pub geometry: ReferenceGeometry,
    pub bisector: ClippedLine,
    pub west: ClippedLine,
    pub east: ClippedLine,
    pub table: SegmentTable,
    pub percentages: SegmentPercentages,
}

/// Run the whole engine for one reference pair and individual table.
pub fn analyze(
    points: &[Vector2<f64>],
    pair: ReferencePair,
    viewport: Viewport,
    individuals: &[Individual],
    cfg: EngineCfg,
    token: TieToken,
) -> Result<Analysis> {
    let geometry =
        build_reference_geometry(points, pair, cfg.tolerance, cfg.core_tolerance, cfg.geom)?;
    let mut rng = token.to_std_rng();
    let bisector = clip_line(&geometry.bisector, &viewport, cfg.geom, &mut rng)?;
    let west = clip_line(&geometry.corridor.west, &viewport, cfg.geom, &mut rng)?;
    let east = clip_line(&geometry.corridor.east, &viewport, cfg.geom, &mut rng)?;
    let table = classify(&geometry, individuals)?;
    let percentages = aggregate(&table);
    Ok(Analysis {
        geometry,
        bisector,
        west,
        east,
        table,
        percentages,
    })
}
