//! Error types for dimensioning sessions
//!
//! Defines the error hierarchy for parameter normalization and
//! calculation-service interaction. Every error is recoverable at the
//! submission boundary: a failed submission never mutates the history.

use thiserror::Error;

/// Top-level session error type
#[derive(Debug, Error)]
pub enum SessionError {
    /// Form input failed normalization
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),

    /// Calculation request failed
    #[error("Calculation failed: {0}")]
    Calculation(#[from] CalculationError),
}

/// Errors raised while normalizing raw form input
#[derive(Debug, Error)]
pub enum ParameterError {
    /// An enum field holds a value outside the declared variants
    #[error("Invalid value for {field}: {value:?} is not a known variant")]
    InvalidEnum {
        /// Name of the offending form field
        field: &'static str,
        /// The rejected input
        value: String,
    },

    /// A numeric field failed to parse or is not finite
    #[error("Invalid number for {field}: {value:?}")]
    InvalidNumber {
        /// Name of the offending form field
        field: &'static str,
        /// The rejected input
        value: String,
    },
}

impl ParameterError {
    /// Returns the name of the form field that was rejected.
    pub fn field(&self) -> &'static str {
        match self {
            ParameterError::InvalidEnum { field, .. } => field,
            ParameterError::InvalidNumber { field, .. } => field,
        }
    }
}

/// Errors raised while talking to the calculation service
///
/// All variants surface to the user as a failed calculation; the variant
/// distinguishes the cause for logging and display.
#[derive(Debug, Error)]
pub enum CalculationError {
    /// Request could not be built or transported (includes timeouts)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Service answered with a non-success status
    #[error("Service returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, surfaced verbatim
        body: String,
    },

    /// Response body was not the expected JSON shape
    #[error("Malformed response body: {reason}")]
    MalformedBody {
        /// Description of the parse failure
        reason: String,
    },

    /// Service returned a non-positive or non-finite cell radius
    #[error("Service returned invalid cell radius: {radius_km}")]
    InvalidRadius {
        /// The rejected radius value
        radius_km: f64,
    },

    /// Service returned a non-positive site count
    #[error("Service returned invalid site count: {num_sites}")]
    InvalidSiteCount {
        /// The rejected site count
        num_sites: i64,
    },
}
