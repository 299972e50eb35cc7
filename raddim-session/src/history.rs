//! Append-only session history of simulation runs.
//!
//! One [`SimulationRecord`] is created, atomically, for each submission
//! whose calculation succeeded. Records are immutable and never deleted;
//! the history lives for the duration of the session.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::CalculationResult;
use crate::kpi::{self, DerivedKpis};
use crate::params::DimensioningParameters;

/// One completed, successful simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRecord {
    /// Creation-time identifier: milliseconds since the Unix epoch, bumped
    /// past the previous id when two runs land in the same millisecond.
    /// Unique within a session and strictly increasing in append order.
    pub id: u64,
    /// Parameter snapshot this run was submitted with
    pub parameters: DimensioningParameters,
    /// Result received from the calculation service
    pub result: CalculationResult,
}

impl SimulationRecord {
    /// Recomputes the derived KPIs for this run.
    pub fn kpis(&self) -> DerivedKpis {
        kpi::derive(&self.parameters, &self.result)
    }
}

/// Ordered, append-only log of the session's simulation runs.
///
/// Insertion order is chronological order: records are appended as
/// calculation responses arrive. There is no update or delete operation.
#[derive(Debug, Default)]
pub struct SessionHistory {
    records: Vec<SimulationRecord>,
    last_id: u64,
}

impl SessionHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record for a successful run and returns it.
    ///
    /// This is the sole mutation entry point of the history.
    pub fn append(
        &mut self,
        parameters: DimensioningParameters,
        result: CalculationResult,
    ) -> SimulationRecord {
        let id = self.mint_id();
        let record = SimulationRecord {
            id,
            parameters,
            result,
        };
        self.records.push(record.clone());
        debug!("Appended simulation record {id} ({} total)", self.records.len());
        record
    }

    /// Returns a snapshot of the history in insertion order.
    ///
    /// The snapshot is owned: later `append` calls are not reflected in a
    /// previously returned sequence.
    pub fn all(&self) -> Vec<SimulationRecord> {
        self.records.clone()
    }

    /// Number of recorded runs.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no run has completed yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Most recently appended record, if any.
    pub fn latest(&self) -> Option<&SimulationRecord> {
        self.records.last()
    }

    fn mint_id(&mut self) -> u64 {
        let now_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        self.last_id = if now_ms > self.last_id {
            now_ms
        } else {
            self.last_id + 1
        };
        self.last_id
    }
}
