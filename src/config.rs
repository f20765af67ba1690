// Process configuration, read once at startup.
//
// Sources, in order: a `.env` file if present (dotenvy), then the process environment.
// Every setting has a default so a bare `cargo run` serves a usable instance.

use crate::modules::attendance::core::geofence::GeofencePolicy;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid environment: {0}")]
    Env(#[from] envy::Error),

    #[error("max distance must be a positive number of meters, got {0}")]
    NonPositiveRadius(f64),

    #[error("office latitude must be within [-90, 90], got {0}")]
    Latitude(f64),

    #[error("office longitude must be within [-180, 180], got {0}")]
    Longitude(f64),
}

/// Office anchor and allowed radius. Read-only after startup.
#[derive(Debug, Clone, PartialEq)]
pub struct GeofenceConfig {
    pub office_latitude: f64,
    pub office_longitude: f64,
    pub max_distance_meters: f64,
}

impl GeofenceConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_distance_meters.is_finite() || self.max_distance_meters <= 0.0 {
            return Err(ConfigError::NonPositiveRadius(self.max_distance_meters));
        }
        if !(-90.0..=90.0).contains(&self.office_latitude) {
            return Err(ConfigError::Latitude(self.office_latitude));
        }
        if !(-180.0..=180.0).contains(&self.office_longitude) {
            return Err(ConfigError::Longitude(self.office_longitude));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_office_latitude")]
    pub office_latitude: f64,
    #[serde(default = "default_office_longitude")]
    pub office_longitude: f64,
    #[serde(default = "default_max_distance_meters")]
    pub max_distance_meters: f64,
    #[serde(default = "default_server_addr")]
    pub server_addr: String,
    #[serde(default = "default_ledger_topic")]
    pub ledger_topic: String,
}

fn default_office_latitude() -> f64 {
    28.6139
}

fn default_office_longitude() -> f64 {
    77.209
}

fn default_max_distance_meters() -> f64 {
    100.0
}

fn default_server_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_ledger_topic() -> String {
    "attendance.v1".to_string()
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config: AppConfig = envy::from_iter(vars)?;
        config.geofence().validate()?;
        Ok(config)
    }

    pub fn geofence(&self) -> GeofenceConfig {
        GeofenceConfig {
            office_latitude: self.office_latitude,
            office_longitude: self.office_longitude,
            max_distance_meters: self.max_distance_meters,
        }
    }

    pub fn geofence_policy(&self) -> GeofencePolicy {
        GeofencePolicy::new(&self.geofence())
    }
}
