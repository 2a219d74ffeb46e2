use std::sync::Arc;
use std::time::SystemTime;

use tokio::sync::RwLock;

/// Scan pipeline status information
#[derive(Clone, Debug, Default)]
pub struct ScanStatus {
    pub scanning: bool,
    pub last_scan_time: Option<SystemTime>,
    pub scan_count: u64,
    pub error_count: u64,
    pub current_message: String,
}

/// Application status
pub struct AppStatus {
    pub scan: Arc<RwLock<ScanStatus>>,
}

impl AppStatus {
    pub fn new() -> Self {
        Self {
            scan: Arc::new(RwLock::new(ScanStatus::default())),
        }
    }
}

impl Default for AppStatus {
    fn default() -> Self {
        Self::new()
    }
}
