use thiserror::Error;
use tokio_util::sync::CancellationToken;
use topup_config::Config;
use topup_core::extract::extract_key;
use topup_core::preprocess::{DefaultPreprocessor, Preprocessor};
use topup_core::types::RechargeKey;
use uuid::Uuid;

use crate::capture::{AcquireError, FrameSource, acquire_with_fallback};
use crate::recognize::{RecognizeError, Recognizer};

/// Result of one scan attempt. `key` is `None` when recognition succeeded
/// but no digit run satisfied the key policy.
#[derive(Debug)]
pub struct ScanOutcome {
    pub attempt: Uuid,
    pub raw_text: String,
    pub key: Option<RechargeKey>,
}

/// Terminal failures of a scan attempt. Nothing here is retried
/// automatically; the user starts a new attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error(transparent)]
    Acquisition(#[from] AcquireError),
    #[error(transparent)]
    Recognition(#[from] RecognizeError),
    #[error("scan cancelled")]
    Cancelled,
}

/// Runs one capture → recognize → extract attempt. The stages are strictly
/// sequential: capture completes before recognition starts, recognition
/// completes before extraction runs. The token aborts between and during
/// stages.
pub async fn scan(
    source: &dyn FrameSource,
    recognizer: &dyn Recognizer,
    config: &Config,
    cancel: &CancellationToken,
) -> Result<ScanOutcome, ScanError> {
    let attempt = Uuid::new_v4();

    let frame = tokio::select! {
        biased;
        _ = cancel.cancelled() => return Err(ScanError::Cancelled),
        frame = acquire_with_fallback(source, &config.camera) => frame?,
    };

    tracing::debug!(%attempt, bytes = frame.bytes.len(), "frame acquired");

    let text = tokio::select! {
        biased;
        _ = cancel.cancelled() => return Err(ScanError::Cancelled),
        text = recognizer.recognize(&frame, &config.ocr) => text?,
    };

    tracing::debug!(%attempt, chars = text.len(), "text recognized");

    let normalized = DefaultPreprocessor.process(&text);
    let key = extract_key(&normalized, &config.key);

    Ok(ScanOutcome {
        attempt,
        raw_text: text,
        key,
    })
}
