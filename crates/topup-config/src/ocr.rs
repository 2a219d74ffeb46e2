use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_language() -> String {
    "eng".to_string()
}

fn default_endpoint() -> String {
    "http://localhost:8884/recognize".to_string()
}

fn default_whitelist() -> Option<String> {
    Some("0123456789".to_string())
}

fn default_preprocess_level() -> u8 {
    1
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OcrConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_language")]
    pub language: String,
    /// OCR service URL the recognizer posts frames to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Character whitelist hint, forwarded to the engine unparsed
    #[serde(default = "default_whitelist")]
    pub whitelist: Option<String>,
    /// Page segmentation mode hint, forwarded to the engine unparsed
    pub segmentation_mode: Option<u8>,
    #[serde(default = "default_preprocess_level")]
    pub preprocess_level: u8,
}

impl OcrConfig {
    pub fn new() -> Self {
        let endpoint = env::var("OCR_ENDPOINT").unwrap_or_else(|_| default_endpoint());

        Self {
            endpoint,
            ..Self::default()
        }
    }
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            language: default_language(),
            endpoint: default_endpoint(),
            whitelist: default_whitelist(),
            segmentation_mode: None,
            preprocess_level: default_preprocess_level(),
        }
    }
}
