//! Percentage aggregation over a segment table.

use std::collections::BTreeMap;

use super::types::{SegmentSystem, SegmentTable};

/// Per-system category percentages, keyed by category code.
///
/// Every valid code for a system is present, backfilled with `0.0` when no
/// individual received it; BTreeMap ordering keeps presentation
/// deterministic.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SegmentPercentages {
    pub systems: BTreeMap<SegmentSystem, BTreeMap<u8, f64>>,
}

impl SegmentPercentages {
    /// Percentage for one category; 0.0 for codes not in the system.
    pub fn share(&self, system: SegmentSystem, code: u8) -> f64 {
        self.systems
            .get(&system)
            .and_then(|shares| shares.get(&code))
            .copied()
            .unwrap_or(0.0)
    }
}

/// Count categories per system and normalize to percentages.
///
/// An empty table yields all-zero percentages; for non-empty input each
/// system's shares sum to 100 up to floating-point error.
pub fn aggregate(table: &SegmentTable) -> SegmentPercentages {
    let total = table.len();
    let mut systems = BTreeMap::new();
    for system in SegmentSystem::ALL {
        let mut shares: BTreeMap<u8, f64> =
            system.codes().iter().map(|&code| (code, 0.0)).collect();
        if total > 0 {
            let step = 100.0 / total as f64;
            for row in &table.rows {
                *shares.entry(row.code(system)).or_insert(0.0) += step;
            }
        }
        systems.insert(system, shares);
    }
    SegmentPercentages { systems }
}
