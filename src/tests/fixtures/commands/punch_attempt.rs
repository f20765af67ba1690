// Shared test fixture for the PunchAttempt command.
// Seeded from json/punch_attempt.json: an on-site, fully captured attempt.

use crate::modules::attendance::use_cases::punch::command::PunchAttempt;
use crate::shared::core::geo::{EARTH_RADIUS_METERS, GeoCoordinate};
use crate::shared::infrastructure::capture::PhotoPayload;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use serde::Deserialize;

pub const OFFICE_LATITUDE: f64 = 28.6139;
pub const OFFICE_LONGITUDE: f64 = 77.209;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct PunchAttemptDto {
    pub employee_id: String,
    pub photo_base64: String,
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy_meters: f64,
    pub captured_at: DateTime<Utc>,
}

pub struct PunchAttemptBuilder {
    inner: PunchAttempt,
}

impl PunchAttemptBuilder {
    pub fn new() -> Self {
        let dto: PunchAttemptDto =
            serde_json::from_str(include_str!("json/punch_attempt.json")).unwrap();
        let photo = STANDARD.decode(dto.photo_base64).unwrap();

        Self {
            inner: PunchAttempt {
                employee_id: dto.employee_id,
                photo: Some(PhotoPayload::new(photo)),
                location: Some(GeoCoordinate::new(
                    dto.latitude,
                    dto.longitude,
                    dto.accuracy_meters,
                )),
                remote_justification: None,
                captured_at: dto.captured_at,
            },
        }
    }

    pub fn employee_id(mut self, v: impl Into<String>) -> Self {
        self.inner.employee_id = v.into();
        self
    }

    pub fn photo(mut self, v: Option<PhotoPayload>) -> Self {
        self.inner.photo = v;
        self
    }

    pub fn location(mut self, v: Option<GeoCoordinate>) -> Self {
        self.inner.location = v;
        self
    }

    pub fn remote_justification(mut self, v: Option<&str>) -> Self {
        self.inner.remote_justification = v.map(str::to_string);
        self
    }

    pub fn build(self) -> PunchAttempt {
        self.inner
    }
}

/// A reading due north of the fixture office, `meters` away along the meridian.
pub fn meters_from_office(meters: f64) -> GeoCoordinate {
    GeoCoordinate::new(
        OFFICE_LATITUDE + (meters / EARTH_RADIUS_METERS).to_degrees(),
        OFFICE_LONGITUDE,
        10.0,
    )
}
