use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use topup_config::camera::CameraConfig;
use topup_types::CameraConstraints;

/// Encoded frame handed from the camera boundary to recognition.
#[derive(Debug, Clone)]
pub struct Frame {
    pub bytes: Vec<u8>,
    pub format: FrameFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameFormat {
    Jpeg,
    Png,
}

impl FrameFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jpeg => "jpeg",
            Self::Png => "png",
        }
    }

    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("png") => Self::Png,
            _ => Self::Jpeg,
        }
    }
}

/// Camera acquisition failures, surfaced to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AcquireError {
    #[error("camera permission was denied")]
    PermissionDenied,
    #[error("no camera found on this device")]
    NoDevice,
    #[error("camera is already in use by another application")]
    DeviceBusy,
    #[error("camera does not satisfy the requested constraints")]
    Unsatisfiable,
    #[error("camera error: {0}")]
    Other(String),
}

/// Frame acquisition stage. The platform owns the device; implementations
/// adapt whatever capture surface the deployment has.
#[async_trait]
pub trait FrameSource: Send + Sync {
    async fn acquire(&self, constraints: &CameraConstraints) -> Result<Frame, AcquireError>;
}

/// Acquires with the configured constraints, retrying once with relaxed
/// constraints when they are unsatisfiable and the config allows it. No
/// other failure is retried.
pub async fn acquire_with_fallback(
    source: &dyn FrameSource,
    config: &CameraConfig,
) -> Result<Frame, AcquireError> {
    match source.acquire(&config.constraints()).await {
        Err(AcquireError::Unsatisfiable) if config.fallback_to_default => {
            tracing::warn!("preferred camera constraints unsatisfiable, retrying relaxed");
            source.acquire(&CameraConstraints::relaxed()).await
        }
        other => other,
    }
}

/// File-backed frame source for tests, the `test_scan` binary, and
/// deployments without a wired-in camera.
pub struct StillSource {
    path: PathBuf,
}

impl StillSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl FrameSource for StillSource {
    async fn acquire(&self, _constraints: &CameraConstraints) -> Result<Frame, AcquireError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => AcquireError::NoDevice,
            std::io::ErrorKind::PermissionDenied => AcquireError::PermissionDenied,
            _ => AcquireError::Other(e.to_string()),
        })?;

        Ok(Frame {
            format: FrameFormat::from_path(&self.path),
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Fails the first acquire with a fixed error, then succeeds.
    struct FlakySource {
        first_error: AcquireError,
        calls: AtomicUsize,
    }

    impl FlakySource {
        fn new(first_error: AcquireError) -> Self {
            Self {
                first_error,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl FrameSource for FlakySource {
        async fn acquire(&self, _constraints: &CameraConstraints) -> Result<Frame, AcquireError> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(self.first_error.clone())
            } else {
                Ok(Frame {
                    bytes: vec![0xff],
                    format: FrameFormat::Jpeg,
                })
            }
        }
    }

    #[tokio::test]
    async fn unsatisfiable_retries_once_relaxed() {
        let source = FlakySource::new(AcquireError::Unsatisfiable);
        let config = CameraConfig::new();

        let frame = acquire_with_fallback(&source, &config).await.unwrap();
        assert_eq!(frame.bytes, vec![0xff]);
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn fallback_disabled_fails_on_first_error() {
        let source = FlakySource::new(AcquireError::Unsatisfiable);
        let config = CameraConfig {
            fallback_to_default: false,
            ..CameraConfig::default()
        };

        let result = acquire_with_fallback(&source, &config).await;
        assert_eq!(result.unwrap_err(), AcquireError::Unsatisfiable);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn busy_device_is_not_retried() {
        let source = FlakySource::new(AcquireError::DeviceBusy);
        let config = CameraConfig::new();

        let result = acquire_with_fallback(&source, &config).await;
        assert_eq!(result.unwrap_err(), AcquireError::DeviceBusy);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn still_source_maps_missing_file_to_no_device() {
        let source = StillSource::new("definitely-missing-frame.jpg");
        let result = source.acquire(&CameraConstraints::default()).await;
        assert_eq!(result.unwrap_err(), AcquireError::NoDevice);
    }
}
