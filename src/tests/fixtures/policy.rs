use crate::config::GeofenceConfig;
use crate::modules::attendance::core::geofence::GeofencePolicy;
use crate::tests::fixtures::commands::punch_attempt::{OFFICE_LATITUDE, OFFICE_LONGITUDE};

pub fn office_policy(max_distance_meters: f64) -> GeofencePolicy {
    GeofencePolicy::new(&GeofenceConfig {
        office_latitude: OFFICE_LATITUDE,
        office_longitude: OFFICE_LONGITUDE,
        max_distance_meters,
    })
}
