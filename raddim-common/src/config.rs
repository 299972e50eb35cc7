//! Configuration structures for the dimensioning front-end
//!
//! This module provides the configuration types for raddim: the endpoint of
//! the external calculation service and the map display defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::types::GeoPoint;

/// Default calculation service endpoint.
pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:5000";

/// Default request timeout for the calculation service, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default map reference point (Dakar, Senegal).
pub const DEFAULT_MAP_CENTER: GeoPoint = GeoPoint::new(14.7167, -17.4677);

/// Default map zoom level.
pub const DEFAULT_MAP_ZOOM: u8 = 10;

/// Calculation service configuration.
///
/// Defines how the calculation client reaches the external service that runs
/// the propagation models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the calculation service (the client appends `/calculate`)
    #[serde(default = "default_service_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_service_url() -> String {
    DEFAULT_SERVICE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_service_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Map display configuration.
///
/// The center is the fixed reference point the coverage circle is drawn
/// around; site placement is not computed by this system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Reference point for the coverage overlay
    #[serde(default = "default_map_center")]
    pub center: GeoPoint,
    /// Initial zoom level for the map surface
    #[serde(default = "default_map_zoom")]
    pub zoom: u8,
}

fn default_map_center() -> GeoPoint {
    DEFAULT_MAP_CENTER
}

fn default_map_zoom() -> u8 {
    DEFAULT_MAP_ZOOM
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: DEFAULT_MAP_CENTER,
            zoom: DEFAULT_MAP_ZOOM,
        }
    }
}

/// Top-level raddim configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RaddimConfig {
    /// Calculation service settings
    #[serde(default)]
    pub service: ServiceConfig,
    /// Map display settings
    #[serde(default)]
    pub map: MapConfig,
}

impl RaddimConfig {
    /// Parses a configuration from a YAML string.
    ///
    /// # Example
    /// ```
    /// use raddim_common::RaddimConfig;
    ///
    /// let yaml = r#"
    /// service:
    ///   base_url: http://10.0.0.5:5000
    ///   timeout_secs: 10
    /// map:
    ///   center:
    ///     lat_deg: 14.7167
    ///     lon_deg: -17.4677
    ///   zoom: 10
    /// "#;
    ///
    /// let config = RaddimConfig::from_yaml(yaml).unwrap();
    /// assert_eq!(config.service.timeout_secs, 10);
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self, Error> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads a configuration from a YAML file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Serializes the configuration to a YAML string.
    pub fn to_yaml(&self) -> Result<String, Error> {
        Ok(serde_yaml::to_string(self)?)
    }
}
