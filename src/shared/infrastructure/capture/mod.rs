// Device capabilities consumed by a punch attempt: a camera and a location fix.
//
// Both are suspension points owned by the device; the core never times them out.

use crate::shared::core::geo::GeoCoordinate;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CaptureError {
    #[error("permission denied")]
    PermissionDenied,

    #[error("capability unavailable: {0}")]
    Unavailable(String),
}

/// Opaque image bytes. The engine only checks that something was captured.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct PhotoPayload(Vec<u8>);

impl PhotoPayload {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl std::fmt::Debug for PhotoPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PhotoPayload({} bytes)", self.len())
    }
}

#[async_trait]
pub trait PhotoCapture: Send + Sync {
    async fn capture(&self) -> Result<PhotoPayload, CaptureError>;
}

#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn current_location(&self) -> Result<GeoCoordinate, CaptureError>;
}

pub mod fixed;
