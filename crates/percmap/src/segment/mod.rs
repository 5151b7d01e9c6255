//! Population segmentation: seven independent category systems plus
//! percentage aggregation.
//!
//! Each system classifies every individual against the reference geometry
//! (bisector, corridor, core circles, axis dividers) on its own; no system
//! reads another system's result, and the per-individual work is
//! embarrassingly parallel if scale ever demands it.

mod classify;
mod percent;
mod types;

pub use classify::classify;
pub use percent::{aggregate, SegmentPercentages};
pub use types::{
    BaseSegment, BattlegroundSegment, ConvertibleSegment, CoreSegment, Dim1Segment, Dim2Segment,
    Individual, LikelySegment, SegmentRow, SegmentSystem, SegmentTable,
};
