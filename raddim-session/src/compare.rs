//! Projection of the session history into chart-ready comparison rows.

use serde::{Deserialize, Serialize};

use crate::history::SimulationRecord;

/// One chart row per simulation run.
///
/// A charting surface renders one series per numeric field, keyed by
/// `label`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Positional label, `"Simulation N"` with N 1-based. Labels are
    /// recomputed from the position at projection time, never stored on
    /// the record: they reflect relative ordering, not identity.
    pub label: String,
    /// Cell radius in kilometers
    pub radius_km: f64,
    /// Required site count
    pub num_sites: u32,
    /// Coverage area in square kilometers
    pub coverage_km2: f64,
    /// Per-site throughput in Mbps
    pub throughput_mbps: f64,
}

/// Maps a history snapshot into comparison rows, one per record, order
/// preserved. An empty history projects to an empty sequence.
pub fn project(records: &[SimulationRecord]) -> Vec<ComparisonRow> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let kpis = record.kpis();
            ComparisonRow {
                label: format!("Simulation {}", index + 1),
                radius_km: record.result.radius_km,
                num_sites: record.result.num_sites,
                coverage_km2: kpis.coverage_km2,
                throughput_mbps: kpis.throughput_mbps,
            }
        })
        .collect()
}
