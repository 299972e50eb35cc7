//! Session controller: the dimensioning state a UI layer binds to.
//!
//! Owns the current editable parameters, the append-only history, the most
//! recent result or error, and the in-progress flag. The controller never
//! references rendering; presentation layers read its accessors and decide
//! what to draw.

use tracing::{info, warn};

use raddim_common::GeoPoint;

use crate::client::{CalculationClient, CalculationResult};
use crate::compare::{project, ComparisonRow};
use crate::error::SessionError;
use crate::history::{SessionHistory, SimulationRecord};
use crate::overlay::{build_overlay, MapOverlay};
use crate::params::{normalize, DimensioningParameters, RawFormInput};

/// Per-session dimensioning state and submission workflow.
///
/// A submission either fully succeeds (one new [`SimulationRecord`]) or
/// fully fails (no history mutation, prior result left in place). Errors
/// are never fatal; every submission is independently retryable.
#[derive(Debug)]
pub struct DimensioningSession {
    client: CalculationClient,
    map_center: GeoPoint,
    parameters: DimensioningParameters,
    history: SessionHistory,
    last_result: Option<CalculationResult>,
    last_error: Option<String>,
    in_progress: bool,
}

impl DimensioningSession {
    /// Creates a session with the default parameter baseline.
    ///
    /// Defaults apply only to this very first parameter set; afterwards the
    /// last-submitted values persist as the editable baseline.
    pub fn new(client: CalculationClient, map_center: GeoPoint) -> Self {
        Self {
            client,
            map_center,
            parameters: DimensioningParameters::default(),
            history: SessionHistory::new(),
            last_result: None,
            last_error: None,
            in_progress: false,
        }
    }

    /// Current editable parameter baseline.
    pub fn parameters(&self) -> &DimensioningParameters {
        &self.parameters
    }

    /// Current baseline rendered back as editable form input.
    pub fn form_input(&self) -> RawFormInput {
        RawFormInput::from(&self.parameters)
    }

    /// Most recent successful result, if any.
    pub fn last_result(&self) -> Option<&CalculationResult> {
        self.last_result.as_ref()
    }

    /// Message of the most recent failed submission, cleared on the next
    /// submission attempt.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// True while a calculation request is in flight.
    pub fn in_progress(&self) -> bool {
        self.in_progress
    }

    /// Snapshot of the full history in insertion order.
    pub fn history(&self) -> Vec<SimulationRecord> {
        self.history.all()
    }

    /// Number of completed simulation runs.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Validates and submits one form submission end to end.
    ///
    /// Normalization failure surfaces before any network call is issued.
    pub async fn submit_form(
        &mut self,
        input: &RawFormInput,
    ) -> Result<SimulationRecord, SessionError> {
        let params = match normalize(input) {
            Ok(params) => params,
            Err(e) => {
                warn!("Rejected form input: {e}");
                self.last_error = Some(e.to_string());
                return Err(e.into());
            }
        };
        self.submit(params).await
    }

    /// Submits an already-normalized parameter set.
    ///
    /// On success the result is recorded and appended to the history; on
    /// failure the history and the prior result are left untouched and the
    /// error message is retained for display.
    pub async fn submit(
        &mut self,
        params: DimensioningParameters,
    ) -> Result<SimulationRecord, SessionError> {
        // The submitted set becomes the editable baseline whether or not
        // the calculation succeeds.
        self.parameters = params.clone();
        self.last_error = None;
        self.in_progress = true;
        let outcome = self.client.submit(&params).await;
        self.in_progress = false;

        match outcome {
            Ok(result) => {
                let record = self.history.append(params, result);
                self.last_result = Some(result);
                info!(
                    "Simulation {} complete: radius {} km, {} sites",
                    self.history.len(),
                    result.radius_km,
                    result.num_sites
                );
                Ok(record)
            }
            Err(e) => {
                warn!("Calculation failed: {e}");
                self.last_error = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Chart rows for every completed simulation, in insertion order.
    pub fn comparison(&self) -> Vec<ComparisonRow> {
        project(&self.history.all())
    }

    /// Map overlay for the latest run around the configured reference
    /// point, or the pre-calculation default when no run has completed.
    pub fn map_overlay(&self) -> MapOverlay {
        build_overlay(self.history.latest(), self.map_center)
    }
}
