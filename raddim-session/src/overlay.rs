//! Geospatial overlay for the most recent simulation.
//!
//! A map surface renders the overlay as a circle of `radius_m` around
//! `center` plus a marker at `center`. The center is a caller-supplied
//! fixed reference point; this system does not compute site placement.

use serde::{Deserialize, Serialize};

use raddim_common::GeoPoint;

use crate::history::SimulationRecord;

/// Radius rendered before any simulation has completed, in meters.
pub const DEFAULT_RADIUS_M: f64 = 1000.0;

/// Circle-plus-marker overlay for a map surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapOverlay {
    /// Fixed reference point the coverage circle is drawn around
    pub center: GeoPoint,
    /// Coverage radius in meters
    pub radius_m: f64,
    /// Popup text for the coverage circle
    pub popup_text: String,
}

/// Builds the overlay for the given record around the given center.
///
/// Without a record (no successful simulation yet) the overlay falls back
/// to a 1000 m circle with a popup reporting a radius of 0 km, preserving
/// a sane default rendering.
pub fn build_overlay(record: Option<&SimulationRecord>, center: GeoPoint) -> MapOverlay {
    match record {
        Some(record) => MapOverlay {
            center,
            radius_m: record.result.radius_km * 1000.0,
            popup_text: format!("Coverage radius: {} km", record.result.radius_km),
        },
        None => MapOverlay {
            center,
            radius_m: DEFAULT_RADIUS_M,
            popup_text: "Coverage radius: 0 km".to_string(),
        },
    }
}
