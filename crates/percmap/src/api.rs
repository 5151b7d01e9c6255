//! Curated re-export surface for callers (UI layer, CLI, experiments).

// Geometry: builders and clipping
pub use crate::geom::{
    build_bisector, build_connector, build_corridor, build_reference_geometry, clip_line,
    ClippedLine, CorridorLines, Direction, DividerPair, EdgeCrossings, GeomCfg, Line, LineCase,
    ReferenceGeometry, ReferencePair, TieToken, Viewport,
};
// Segmentation and aggregation
pub use crate::segment::{
    aggregate, classify, BaseSegment, BattlegroundSegment, ConvertibleSegment, CoreSegment,
    Dim1Segment, Dim2Segment, Individual, LikelySegment, SegmentPercentages, SegmentRow,
    SegmentSystem, SegmentTable,
};
// Pipeline
pub use crate::engine::{analyze, Analysis, EngineCfg};
pub use crate::error::{EngineError, Result};
