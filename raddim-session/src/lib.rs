//! raddim-session - Dimensioning Session Manager
//!
//! This crate implements the core of the raddim radio-network planning
//! tool: it validates user-entered propagation and traffic parameters,
//! submits them to an external calculation service, derives secondary
//! KPIs, accumulates a per-session history of simulation runs, and
//! produces the datasets a charting or map surface consumes.
//!
//! # Data flow
//!
//! ```text
//!  form input
//!      │ normalize
//!      ▼
//!  DimensioningParameters ──► CalculationClient ──► CalculationResult
//!                                                        │
//!                      ┌─────────────────────────────────┤
//!                      ▼                                 ▼
//!                 KPI deriver                     SessionHistory
//!                                                        │
//!                                    ┌───────────────────┤
//!                                    ▼                   ▼
//!                             ComparisonRow[]        MapOverlay
//!                             (chart surface)       (map surface)
//! ```
//!
//! The propagation calculation itself is an external collaborator reached
//! over HTTP; chart and map rendering consume the projected data but are
//! not part of this crate.

pub mod client;
pub mod compare;
pub mod error;
pub mod history;
pub mod kpi;
pub mod overlay;
pub mod params;
pub mod session;

pub use client::{CalculationClient, CalculationResult};
pub use compare::{project, ComparisonRow};
pub use error::{CalculationError, ParameterError, SessionError};
pub use history::{SessionHistory, SimulationRecord};
pub use kpi::{derive, DerivedKpis};
pub use overlay::{build_overlay, MapOverlay, DEFAULT_RADIUS_M};
pub use params::{
    normalize, DimensioningParameters, Environment, PropagationModel, RawFormInput,
};
pub use session::DimensioningSession;
