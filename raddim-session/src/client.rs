//! HTTP client for the external calculation service.
//!
//! The propagation calculation itself (Okumura-Hata, COST231, TR 36.814)
//! lives in an external service; this client serializes a parameter set,
//! issues a single `POST /calculate`, and validates the response. It keeps
//! no local state, so overlapping submissions are independent.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use raddim_common::config::ServiceConfig;

use crate::error::CalculationError;
use crate::params::DimensioningParameters;

/// Validated output of the external calculation service.
///
/// Received once per successful submission and never mutated; the service
/// response is treated as opaque beyond these two fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Effective cell radius in kilometers (always positive and finite)
    pub radius_km: f64,
    /// Sites required to cover the requested area (always positive)
    pub num_sites: u32,
}

/// Raw response body before domain validation.
#[derive(Debug, Deserialize)]
struct CalculationResponse {
    radius_km: f64,
    num_sites: i64,
}

/// Client for the calculation service's `POST /calculate` operation.
#[derive(Debug, Clone)]
pub struct CalculationClient {
    http: reqwest::Client,
    endpoint: String,
}

impl CalculationClient {
    /// Creates a client for the configured service endpoint.
    ///
    /// The transport timeout from the configuration applies to every
    /// request; expiry surfaces as a transport error.
    pub fn new(config: &ServiceConfig) -> Result<Self, CalculationError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let endpoint = format!("{}/calculate", config.base_url.trim_end_matches('/'));
        Ok(Self { http, endpoint })
    }

    /// Returns the full URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submits one calculation request.
    ///
    /// # Errors
    ///
    /// Fails with a [`CalculationError`] on transport failure, a non-2xx
    /// status, a malformed response body, or an invalid-domain result
    /// (non-positive radius or site count).
    pub async fn submit(
        &self,
        params: &DimensioningParameters,
    ) -> Result<CalculationResult, CalculationError> {
        debug!(
            "Submitting calculation: model={}, environment={}, area={} km2",
            params.propagation_model, params.environment, params.area_km2
        );

        let response = self.http.post(&self.endpoint).json(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CalculationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: CalculationResponse =
            response
                .json()
                .await
                .map_err(|e| CalculationError::MalformedBody {
                    reason: e.to_string(),
                })?;
        validate(body)
    }
}

/// Checks the domain invariants the rest of the session relies on:
/// `radius_km > 0` and finite, `num_sites > 0`.
fn validate(body: CalculationResponse) -> Result<CalculationResult, CalculationError> {
    if !body.radius_km.is_finite() || body.radius_km <= 0.0 {
        return Err(CalculationError::InvalidRadius {
            radius_km: body.radius_km,
        });
    }
    if body.num_sites <= 0 || body.num_sites > u32::MAX as i64 {
        return Err(CalculationError::InvalidSiteCount {
            num_sites: body.num_sites,
        });
    }
    Ok(CalculationResult {
        radius_km: body.radius_km,
        num_sites: body.num_sites as u32,
    })
}
