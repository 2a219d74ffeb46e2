use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use tokio::sync::{Mutex, RwLock};
use topup_config::Config;
use topup_core::session::ScanSession;

use crate::status::AppStatus;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub session: Mutex<ScanSession>,
    pub scanning: AtomicBool,
    pub status: AppStatus,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            session: Mutex::new(ScanSession::new()),
            scanning: AtomicBool::new(false),
            status: AppStatus::new(),
        }
    }
}
