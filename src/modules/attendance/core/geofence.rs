use crate::config::GeofenceConfig;
use crate::shared::core::geo::{GeoCoordinate, distance_meters};
use serde::Serialize;

/// Circle around the office. Readings outside it need a remote-work justification.
#[derive(Debug, Clone, PartialEq)]
pub struct GeofencePolicy {
    office: GeoCoordinate,
    max_distance_meters: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeofenceClassification {
    pub distance_meters: f64,
    pub within_geofence: bool,
}

impl GeofencePolicy {
    /// Expects a validated config; see [`GeofenceConfig::validate`].
    pub fn new(config: &GeofenceConfig) -> Self {
        Self {
            office: GeoCoordinate::anchor(config.office_latitude, config.office_longitude),
            max_distance_meters: config.max_distance_meters,
        }
    }

    pub fn office(&self) -> &GeoCoordinate {
        &self.office
    }

    pub fn max_distance_meters(&self) -> f64 {
        self.max_distance_meters
    }

    /// The boundary itself counts as inside.
    pub fn classify(&self, reading: &GeoCoordinate) -> GeofenceClassification {
        let distance_meters = distance_meters(reading, &self.office);
        GeofenceClassification {
            distance_meters,
            within_geofence: distance_meters <= self.max_distance_meters,
        }
    }
}
