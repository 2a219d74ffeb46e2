
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use topup_config::Config;
use topup_config::ocr::OcrConfig;
use topup_ocr::{AcquireError, Frame, FrameFormat, FrameSource, RecognizeError, Recognizer};
use topup_types::{AppEvent, CameraConstraints};

use crate::events::event_loop;
use crate::state::AppState;

pub(crate) struct FixedSource;

#[async_trait]
impl FrameSource for FixedSource {
    async fn acquire(&self, _constraints: &CameraConstraints) -> Result<Frame, AcquireError> {
        Ok(Frame {
            bytes: vec![1, 2, 3],
            format: FrameFormat::Jpeg,
        })
    }
}

pub(crate) struct DeniedSource;

#[async_trait]
impl FrameSource for DeniedSource {
    async fn acquire(&self, _constraints: &CameraConstraints) -> Result<Frame, AcquireError> {
        Err(AcquireError::PermissionDenied)
    }
}

pub(crate) struct FixedRecognizer(pub String);

#[async_trait]
impl Recognizer for FixedRecognizer {
    async fn recognize(
        &self,
        _frame: &Frame,
        _config: &OcrConfig,
    ) -> Result<String, RecognizeError> {
        Ok(self.0.clone())
    }
}

pub(crate) struct TestHarness {
    pub ui_tx: AsyncSender<AppEvent>,
    pub app_rx: AsyncReceiver<AppEvent>,
    pub state: Arc<AppState>,
    pub cancel: CancellationToken,
    pub handle: JoinHandle<anyhow::Result<()>>,
}

pub(crate) fn spawn_event_loop(
    source: Arc<dyn FrameSource>,
    recognizer: Arc<dyn Recognizer>,
) -> TestHarness {
    let state = Arc::new(AppState::new(Config::new()));
    let (ui_tx, ui_rx) = kanal::bounded_async(64);
    let (app_tx, app_rx) = kanal::bounded_async(256);
    let cancel = CancellationToken::new();

    let handle = tokio::spawn(event_loop(
        state.clone(),
        ui_rx,
        app_tx,
        source,
        recognizer,
        cancel.clone(),
    ));

    TestHarness {
        ui_tx,
        app_rx,
        state,
        cancel,
        handle,
    }
}

pub(crate) async fn next_event(rx: &AsyncReceiver<AppEvent>) -> AppEvent {
    tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for event")
        .expect("channel closed")
}
