//! Segment-system data types.
//!
//! Every category set is a closed enum carrying its reporting code as the
//! discriminant, so classification is exhaustive by construction and the
//! aggregator can enumerate valid codes per system.

/// One respondent: two coordinate scores on the displayed dimensions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Individual {
    pub dim1: f64,
    pub dim2: f64,
}

impl Individual {
    #[inline]
    pub fn new(dim1: f64, dim2: f64) -> Self {
        Self { dim1, dim2 }
    }
}

/// Position relative to the corridor boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BaseSegment {
    /// Beyond `west`, on reference point `a`'s side.
    Left = 1,
    /// Inside the corridor.
    Center = 2,
    /// Beyond `east`, on reference point `b`'s side.
    Right = 3,
}

/// Between the bisector and one corridor boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConvertibleSegment {
    Left = 1,
    Right = 2,
    Neither = 3,
}

/// Within the core radius of exactly one reference point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoreSegment {
    Left = 1,
    Neither = 2,
    Right = 3,
}

/// Inside vs outside the corridor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BattlegroundSegment {
    Inside = 1,
    Outside = 2,
}

/// Horizontal split at the dim1 divider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dim1Segment {
    Left = 1,
    Right = 2,
}

/// Vertical split at the dim2 divider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dim2Segment {
    Up = 1,
    Down = 2,
}

/// Side of the bisector alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LikelySegment {
    Left = 1,
    Right = 2,
}

/// The seven independent segment systems.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SegmentSystem {
    Base,
    Convertible,
    Core,
    Battleground,
    OnlyDim1,
    OnlyDim2,
    Likely,
}

impl SegmentSystem {
    pub const ALL: [SegmentSystem; 7] = [
        SegmentSystem::Base,
        SegmentSystem::Convertible,
        SegmentSystem::Core,
        SegmentSystem::Battleground,
        SegmentSystem::OnlyDim1,
        SegmentSystem::OnlyDim2,
        SegmentSystem::Likely,
    ];

    /// Valid category codes for this system, ascending.
    pub fn codes(self) -> &'static [u8] {
        match self {
            SegmentSystem::Base | SegmentSystem::Convertible | SegmentSystem::Core => &[1, 2, 3],
            SegmentSystem::Battleground
            | SegmentSystem::OnlyDim1
            | SegmentSystem::OnlyDim2
            | SegmentSystem::Likely => &[1, 2],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SegmentSystem::Base => "base",
            SegmentSystem::Convertible => "convertible",
            SegmentSystem::Core => "core",
            SegmentSystem::Battleground => "battleground",
            SegmentSystem::OnlyDim1 => "only_dim1",
            SegmentSystem::OnlyDim2 => "only_dim2",
            SegmentSystem::Likely => "likely",
        }
    }
}

/// One individual's category in every system.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SegmentRow {
    pub base: BaseSegment,
    pub convertible: ConvertibleSegment,
    pub core: CoreSegment,
    pub battleground: BattlegroundSegment,
    pub only_dim1: Dim1Segment,
    pub only_dim2: Dim2Segment,
    pub likely: LikelySegment,
}

impl SegmentRow {
    /// Reporting code of this row's category in `system`.
    pub fn code(&self, system: SegmentSystem) -> u8 {
        match system {
            SegmentSystem::Base => self.base as u8,
            SegmentSystem::Convertible => self.convertible as u8,
            SegmentSystem::Core => self.core as u8,
            SegmentSystem::Battleground => self.battleground as u8,
            SegmentSystem::OnlyDim1 => self.only_dim1 as u8,
            SegmentSystem::OnlyDim2 => self.only_dim2 as u8,
            SegmentSystem::Likely => self.likely as u8,
        }
    }
}

/// One row per individual; consumed read-only by the aggregator.
#[derive(Clone, Debug, Default)]
pub struct SegmentTable {
    pub rows: Vec<SegmentRow>,
}

impl SegmentTable {
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
