use std::env;

use serde::{Deserialize, Serialize};

use self::camera::CameraConfig;
use self::dial::DialConfig;
use self::key::KeyPolicy;
use self::ocr::OcrConfig;
use self::phone::PhoneRule;

pub mod camera;
pub mod dial;
pub mod key;
pub mod ocr;
pub mod phone;

#[derive(Serialize, Deserialize, Clone)]
pub struct Config {
    pub camera: CameraConfig,
    pub ocr: OcrConfig,
    pub key: KeyPolicy,
    pub phone: PhoneRule,
    pub dial: DialConfig,

    /// Hard deadline for a whole scan attempt
    pub timeout_seconds: u64,
}

impl Config {
    pub fn new() -> Self {
        let timeout_seconds = env::var("SCAN_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30); // 30 seconds default

        Config {
            camera: CameraConfig::new(),
            ocr: OcrConfig::new(),
            key: KeyPolicy::default(),
            phone: PhoneRule::default(),
            dial: DialConfig::new(),

            timeout_seconds,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
