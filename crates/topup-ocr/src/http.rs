use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use topup_config::ocr::OcrConfig;

use crate::capture::Frame;
use crate::recognize::{RecognizeError, Recognizer};

/// JSON client for an HTTP OCR service.
#[derive(Clone)]
pub struct HttpOcr {
    base_url: String,
    client: reqwest::Client,
}

impl HttpOcr {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Serialize)]
struct RecognizeRequest<'a> {
    image: String,
    format: &'a str,
    language: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    whitelist: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    segmentation_mode: Option<u8>,
    preprocess_level: u8,
}

#[derive(Deserialize)]
struct RecognizeResponse {
    text: Option<String>,
    error: Option<String>,
}

impl RecognizeResponse {
    fn into_result(self) -> Result<String, RecognizeError> {
        if let Some(error) = self.error {
            return Err(RecognizeError::Engine(error));
        }

        self.text
            .ok_or_else(|| RecognizeError::Engine("service returned no text".to_string()))
    }
}

#[async_trait]
impl Recognizer for HttpOcr {
    async fn recognize(&self, frame: &Frame, config: &OcrConfig) -> Result<String, RecognizeError> {
        let request = RecognizeRequest {
            image: STANDARD.encode(&frame.bytes),
            format: frame.format.as_str(),
            language: &config.language,
            whitelist: config.whitelist.as_deref(),
            segmentation_mode: config.segmentation_mode,
            preprocess_level: config.preprocess_level,
        };

        let response = self
            .client
            .post(&self.base_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| RecognizeError::Unavailable(e.to_string()))?;

        response
            .json::<RecognizeResponse>()
            .await
            .map_err(|e| RecognizeError::Unavailable(e.to_string()))?
            .into_result()
    }
}
