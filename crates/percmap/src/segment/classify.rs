//! Per-individual classification against the reference geometry.
//!
//! All side tests are signed values oriented by
//! `ReferenceGeometry::side_toward_a`, so one formula per system covers all
//! four line directions.
//!
//! Boundary convention (explicit, pinned by tests): an individual exactly
//! on a dividing line is never "beyond" it. On the bisector ⇒ Likely
//! `Right`, Convertible `Neither`; on a corridor boundary ⇒ Base `Center`,
//! Battleground `Inside`; exactly on a core circle ⇒ outside it;
//! `dim1 == divider` ⇒ `Right`; `dim2 == divider` ⇒ `Down`.

use nalgebra::Vector2;

use crate::error::{EngineError, Result};
use crate::geom::ReferenceGeometry;

use super::types::{
    BaseSegment, BattlegroundSegment, ConvertibleSegment, CoreSegment, Dim1Segment, Dim2Segment,
    Individual, LikelySegment, SegmentRow, SegmentTable,
};

/// Classify every individual in all seven systems.
///
/// Fails fast with `SegmentationPrecondition` when the geometry is
/// unusable (non-finite line coefficients or a zero-length connector)
/// instead of producing default categories.
pub fn classify(geometry: &ReferenceGeometry, individuals: &[Individual]) -> Result<SegmentTable> {
    let usable = geometry.connector.is_finite()
        && geometry.bisector.is_finite()
        && geometry.corridor.west.is_finite()
        && geometry.corridor.east.is_finite()
        && geometry.connector_length > 0.0
        && geometry.core_radius.is_finite();
    if !usable {
        return Err(EngineError::SegmentationPrecondition);
    }
    let rows = individuals
        .iter()
        .map(|ind| classify_one(geometry, *ind))
        .collect();
    Ok(SegmentTable { rows })
}

fn classify_one(g: &ReferenceGeometry, ind: Individual) -> SegmentRow {
    let p = Vector2::new(ind.dim1, ind.dim2);
    let s = g.side_toward_a;
    // Oriented side values: positive means "on a's side of" the bisector,
    // "beyond west toward a", and "beyond east toward b" respectively.
    let v_bis = s * g.bisector.side_of(p, g.cfg);
    let v_west = s * g.corridor.west.side_of(p, g.cfg);
    let v_east = -s * g.corridor.east.side_of(p, g.cfg);

    let base = if v_west > 0.0 {
        BaseSegment::Left
    } else if v_east > 0.0 {
        BaseSegment::Right
    } else {
        BaseSegment::Center
    };

    let convertible = if v_bis > 0.0 && v_west <= 0.0 {
        ConvertibleSegment::Left
    } else if v_bis < 0.0 && v_east <= 0.0 {
        ConvertibleSegment::Right
    } else {
        ConvertibleSegment::Neither
    };

    let d_a = (p - g.a).norm();
    let d_b = (p - g.b).norm();
    let in_a = d_a < g.core_radius;
    let in_b = d_b < g.core_radius;
    let core = match (in_a, in_b) {
        (true, false) => CoreSegment::Left,
        (false, true) => CoreSegment::Right,
        _ => CoreSegment::Neither,
    };

    let battleground = if v_west > 0.0 || v_east > 0.0 {
        BattlegroundSegment::Outside
    } else {
        BattlegroundSegment::Inside
    };

    let only_dim1 = if ind.dim1 < g.dividers.dim1 {
        Dim1Segment::Left
    } else {
        Dim1Segment::Right
    };
    let only_dim2 = if ind.dim2 > g.dividers.dim2 {
        Dim2Segment::Up
    } else {
        Dim2Segment::Down
    };

    let likely = if v_bis > 0.0 {
        LikelySegment::Left
    } else {
        LikelySegment::Right
    };

    SegmentRow {
        base,
        convertible,
        core,
        battleground,
        only_dim1,
        only_dim2,
        likely,
    }
}
