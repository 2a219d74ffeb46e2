use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;
use topup_ocr::{FrameSource, Recognizer};
use topup_types::AppEvent;

use crate::state::AppState;

pub mod clear;
pub mod dial;
pub mod start_scan;

use clear::{handle_clear_key, handle_clear_number};
use dial::handle_dial;
use start_scan::handle_start_scan;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    source: Arc<dyn FrameSource>,
    recognizer: Arc<dyn Recognizer>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    tracing::info!("event loop started, waiting for events");

    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("event loop stopping");
                return Ok(());
            }
            event = ui_to_app_rx.recv() => event?,
        };

        if matches!(event, AppEvent::Shutdown) {
            tracing::info!("shutdown requested");
            return Ok(());
        }

        handle_event(
            &state,
            &app_to_ui_tx,
            source.as_ref(),
            recognizer.as_ref(),
            &cancel,
            event,
        )
        .await?;
    }
}

async fn handle_event(
    state: &Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    source: &dyn FrameSource,
    recognizer: &dyn Recognizer,
    cancel: &CancellationToken,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::StartScan => {
            handle_start_scan(state, app_to_ui_tx, source, recognizer, cancel).await?;
        }
        AppEvent::NumberInput(number) => {
            let mut session = state.session.lock().await;
            session.set_number_input(number);
            let ready = session.dial_ready();
            drop(session);

            let status = if ready {
                "Ready to dial.".to_string()
            } else {
                "Mobile number noted. Scan a recharge card to continue.".to_string()
            };
            let _ = app_to_ui_tx
                .send(AppEvent::StatusUpdate {
                    status,
                    scanning: false,
                })
                .await;
        }
        AppEvent::Dial => {
            handle_dial(state, app_to_ui_tx).await?;
        }
        AppEvent::ClearKey => {
            handle_clear_key(state, app_to_ui_tx).await?;
        }
        AppEvent::ClearNumber => {
            handle_clear_number(state, app_to_ui_tx).await?;
        }
        AppEvent::ConfigChanged => {}
        // App-to-ui events are handled by the presenter, not here
        AppEvent::KeyCaptured { .. }
        | AppEvent::StatusUpdate { .. }
        | AppEvent::ShowDial(_)
        | AppEvent::Shutdown => {}
    }

    Ok(())
}
