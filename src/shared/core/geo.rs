use serde::{Deserialize, Serialize};

pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A single location reading. Accuracy is the radius of uncertainty reported by the device.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy_meters: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64, accuracy_meters: f64) -> Self {
        Self {
            latitude,
            longitude,
            accuracy_meters,
        }
    }

    /// A device reading, or `None` when it is off the globe or reports a negative
    /// or non-finite accuracy.
    pub fn reading(latitude: f64, longitude: f64, accuracy_meters: f64) -> Option<Self> {
        let on_globe = (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude);
        let sane_accuracy = accuracy_meters.is_finite() && accuracy_meters >= 0.0;
        (on_globe && sane_accuracy).then(|| Self::new(latitude, longitude, accuracy_meters))
    }

    /// A fixed reference point such as an office, with no uncertainty.
    pub fn anchor(latitude: f64, longitude: f64) -> Self {
        Self::new(latitude, longitude, 0.0)
    }
}

/// Great-circle distance in meters (Haversine, spherical earth), rounded to 2 decimals.
pub fn distance_meters(a: &GeoCoordinate, b: &GeoCoordinate) -> f64 {
    let phi_a = a.latitude.to_radians();
    let phi_b = b.latitude.to_radians();
    let delta_phi = (b.latitude - a.latitude).to_radians();
    let delta_lambda = (b.longitude - a.longitude).to_radians();

    let h = (delta_phi / 2.0).sin().powi(2)
        + phi_a.cos() * phi_b.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    round_to_cents(EARTH_RADIUS_METERS * c)
}

pub(crate) fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
