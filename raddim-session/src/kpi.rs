//! Derived performance indicators.
//!
//! KPIs are a pure function of a `(parameters, result)` pair and are
//! recomputed wherever they are needed rather than cached, so they can
//! never drift out of sync with their source pair.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::client::CalculationResult;
use crate::params::DimensioningParameters;

/// Secondary indicators derived from a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedKpis {
    /// Coverage area of one cell in square kilometers
    pub coverage_km2: f64,
    /// Per-site throughput in Mbps
    pub throughput_mbps: f64,
}

/// Derives KPIs from a validated parameter/result pair.
///
/// Total for validated inputs: the calculation client guarantees
/// `num_sites > 0`, so the throughput division is always defined.
pub fn derive(params: &DimensioningParameters, result: &CalculationResult) -> DerivedKpis {
    DerivedKpis {
        coverage_km2: PI * result.radius_km * result.radius_km,
        throughput_mbps: params.bandwidth_mhz * 1000.0 / result.num_sites as f64,
    }
}
