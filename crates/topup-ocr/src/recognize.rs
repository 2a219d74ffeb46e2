use async_trait::async_trait;
use thiserror::Error;
use topup_config::ocr::OcrConfig;

use crate::capture::Frame;

/// Recognition failures, surfaced to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecognizeError {
    #[error("ocr service unreachable: {0}")]
    Unavailable(String),
    #[error("ocr engine failed: {0}")]
    Engine(String),
}

/// Text recognition stage. The engine is an external collaborator; the
/// config hints (language, whitelist, segmentation mode) pass through
/// unparsed.
#[async_trait]
pub trait Recognizer: Send + Sync {
    async fn recognize(&self, frame: &Frame, config: &OcrConfig) -> Result<String, RecognizeError>;
}
