use crate::shared::core::geo::GeoCoordinate;
use crate::shared::infrastructure::capture::{
    CaptureError, LocationProvider, PhotoCapture, PhotoPayload,
};

/// Capabilities that replay a preset outcome. Used by tests and by the HTTP shell,
/// where the presentation layer has already captured the photo and the fix.
#[derive(Debug, Clone)]
pub struct FixedPhoto(pub Result<PhotoPayload, CaptureError>);

#[derive(Debug, Clone)]
pub struct FixedLocation(pub Result<GeoCoordinate, CaptureError>);

impl FixedPhoto {
    pub fn from_option(photo: Option<PhotoPayload>) -> Self {
        Self(photo.ok_or_else(|| CaptureError::Unavailable("no photo supplied".into())))
    }
}

impl FixedLocation {
    pub fn from_option(location: Option<GeoCoordinate>) -> Self {
        Self(location.ok_or_else(|| CaptureError::Unavailable("no location fix".into())))
    }
}

#[async_trait::async_trait]
impl PhotoCapture for FixedPhoto {
    async fn capture(&self) -> Result<PhotoPayload, CaptureError> {
        self.0.clone()
    }
}

#[async_trait::async_trait]
impl LocationProvider for FixedLocation {
    async fn current_location(&self) -> Result<GeoCoordinate, CaptureError> {
        self.0.clone()
    }
}
