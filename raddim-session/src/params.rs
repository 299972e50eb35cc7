//! Dimensioning input parameters: enums, defaults, and normalization.
//!
//! A [`DimensioningParameters`] value is constructed fresh for each
//! submission from the raw form state and is immutable once sent. The
//! serialized field names are the exact keys of the calculation service's
//! request payload.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParameterError;

/// Propagation model evaluated by the external calculation service.
///
/// The service treats the model as an opaque selector; this system never
/// evaluates the formulas itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PropagationModel {
    /// Okumura-Hata empirical model
    #[default]
    #[serde(rename = "OKUMURA_HATA")]
    OkumuraHata,
    /// COST231-Hata extension for higher frequencies
    #[serde(rename = "COST231_HATA")]
    Cost231Hata,
    /// 3GPP TR 36.814 model
    #[serde(rename = "TR36_814")]
    Tr36814,
}

impl PropagationModel {
    /// Returns the wire name of this model.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropagationModel::OkumuraHata => "OKUMURA_HATA",
            PropagationModel::Cost231Hata => "COST231_HATA",
            PropagationModel::Tr36814 => "TR36_814",
        }
    }
}

impl fmt::Display for PropagationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PropagationModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OKUMURA_HATA" => Ok(PropagationModel::OkumuraHata),
            "COST231_HATA" => Ok(PropagationModel::Cost231Hata),
            "TR36_814" => Ok(PropagationModel::Tr36814),
            _ => Err(format!("unknown propagation model: {s}")),
        }
    }
}

/// Deployment environment the propagation model is corrected for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Environment {
    /// Urban deployment
    #[default]
    #[serde(rename = "URBAN")]
    Urban,
    /// Suburban deployment
    #[serde(rename = "SUBURBAN")]
    Suburban,
    /// Rural deployment
    #[serde(rename = "RURAL")]
    Rural,
    /// Dense urban deployment
    #[serde(rename = "DENSE_URBAN")]
    DenseUrban,
}

impl Environment {
    /// Returns the wire name of this environment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Urban => "URBAN",
            Environment::Suburban => "SUBURBAN",
            Environment::Rural => "RURAL",
            Environment::DenseUrban => "DENSE_URBAN",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "URBAN" => Ok(Environment::Urban),
            "SUBURBAN" => Ok(Environment::Suburban),
            "RURAL" => Ok(Environment::Rural),
            "DENSE_URBAN" => Ok(Environment::DenseUrban),
            _ => Err(format!("unknown environment: {s}")),
        }
    }
}

/// Validated dimensioning input parameters, one set per submission.
///
/// Serialized field names match the calculation service's request payload
/// exactly (`tx_power`, `h_bs`, and so on).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensioningParameters {
    /// Propagation model selector
    pub propagation_model: PropagationModel,
    /// Deployment environment
    pub environment: Environment,
    /// Transmit power in dBm
    #[serde(rename = "tx_power")]
    pub tx_power_dbm: f64,
    /// Receiver sensitivity in dBm
    #[serde(rename = "rx_sensitivity")]
    pub rx_sensitivity_dbm: f64,
    /// Carrier frequency in MHz
    #[serde(rename = "frequency")]
    pub frequency_mhz: f64,
    /// Base station antenna height in meters
    #[serde(rename = "h_bs")]
    pub base_station_height_m: f64,
    /// User equipment antenna height in meters
    #[serde(rename = "h_ue")]
    pub ue_height_m: f64,
    /// Subscriber density per square kilometer
    #[serde(rename = "user_density")]
    pub user_density_per_km2: f64,
    /// Deployment area in square kilometers
    pub area_km2: f64,
    /// Channel bandwidth in MHz
    #[serde(rename = "bandwidth")]
    pub bandwidth_mhz: f64,
}

impl Default for DimensioningParameters {
    /// The initial form values of a fresh session.
    fn default() -> Self {
        Self {
            propagation_model: PropagationModel::OkumuraHata,
            environment: Environment::Urban,
            tx_power_dbm: 43.0,
            rx_sensitivity_dbm: -100.0,
            frequency_mhz: 2600.0,
            base_station_height_m: 30.0,
            ue_height_m: 1.5,
            user_density_per_km2: 1000.0,
            area_km2: 10.0,
            bandwidth_mhz: 10.0,
        }
    }
}

/// Raw form state as a UI layer submits it: every field a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFormInput {
    /// Propagation model wire name
    pub propagation_model: String,
    /// Environment wire name
    pub environment: String,
    /// Transmit power in dBm
    pub tx_power: String,
    /// Receiver sensitivity in dBm
    pub rx_sensitivity: String,
    /// Carrier frequency in MHz
    pub frequency: String,
    /// Base station height in meters
    pub h_bs: String,
    /// User equipment height in meters
    pub h_ue: String,
    /// Subscriber density per square kilometer
    pub user_density: String,
    /// Deployment area in square kilometers
    pub area_km2: String,
    /// Channel bandwidth in MHz
    pub bandwidth: String,
}

impl From<&DimensioningParameters> for RawFormInput {
    fn from(params: &DimensioningParameters) -> Self {
        Self {
            propagation_model: params.propagation_model.as_str().to_string(),
            environment: params.environment.as_str().to_string(),
            tx_power: params.tx_power_dbm.to_string(),
            rx_sensitivity: params.rx_sensitivity_dbm.to_string(),
            frequency: params.frequency_mhz.to_string(),
            h_bs: params.base_station_height_m.to_string(),
            h_ue: params.ue_height_m.to_string(),
            user_density: params.user_density_per_km2.to_string(),
            area_km2: params.area_km2.to_string(),
            bandwidth: params.bandwidth_mhz.to_string(),
        }
    }
}

impl Default for RawFormInput {
    fn default() -> Self {
        Self::from(&DimensioningParameters::default())
    }
}

/// Normalizes raw form input into a validated parameter set.
///
/// Enum fields must match one of the declared wire names; all other fields
/// must parse to a finite real number. The failing field is named in the
/// error. No range clamping is performed here; range policy is left to the
/// caller.
pub fn normalize(raw: &RawFormInput) -> Result<DimensioningParameters, ParameterError> {
    let propagation_model =
        raw.propagation_model
            .parse()
            .map_err(|_| ParameterError::InvalidEnum {
                field: "propagation_model",
                value: raw.propagation_model.clone(),
            })?;
    let environment = raw
        .environment
        .parse()
        .map_err(|_| ParameterError::InvalidEnum {
            field: "environment",
            value: raw.environment.clone(),
        })?;

    Ok(DimensioningParameters {
        propagation_model,
        environment,
        tx_power_dbm: parse_number("tx_power", &raw.tx_power)?,
        rx_sensitivity_dbm: parse_number("rx_sensitivity", &raw.rx_sensitivity)?,
        frequency_mhz: parse_number("frequency", &raw.frequency)?,
        base_station_height_m: parse_number("h_bs", &raw.h_bs)?,
        ue_height_m: parse_number("h_ue", &raw.h_ue)?,
        user_density_per_km2: parse_number("user_density", &raw.user_density)?,
        area_km2: parse_number("area_km2", &raw.area_km2)?,
        bandwidth_mhz: parse_number("bandwidth", &raw.bandwidth)?,
    })
}

/// Parses one numeric form field, rejecting non-numeric and non-finite input.
fn parse_number(field: &'static str, value: &str) -> Result<f64, ParameterError> {
    let parsed: f64 = value
        .trim()
        .parse()
        .map_err(|_| ParameterError::InvalidNumber {
            field,
            value: value.to_string(),
        })?;
    if !parsed.is_finite() {
        return Err(ParameterError::InvalidNumber {
            field,
            value: value.to_string(),
        });
    }
    Ok(parsed)
}
