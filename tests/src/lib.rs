//! Integration test framework for raddim
#![allow(missing_docs)]
//!
//! This crate exercises the full dimensioning workflow end to end: form
//! normalization, the HTTP round trip to a calculation service, KPI
//! derivation, session history, and the chart and map projections.
//!
//! # Components
//!
//! - [`mock_service`] - In-process HTTP stand-in for the calculation service
//!
//! # Test Categories
//!
//! 1. **Submission Tests** - Full submit workflow against the mock service
//! 2. **Failure Tests** - Transport, status, and malformed-body handling
//! 3. **Projection Tests** - History, comparison rows, and map overlay state

pub mod mock_service;

#[cfg(test)]
mod submission_flow;

pub use mock_service::{MockCalculationService, MockResponse};
