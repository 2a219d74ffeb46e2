use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::{Duration, SystemTime};

use kanal::AsyncSender;
use tokio_util::sync::CancellationToken;
use topup_ocr::{FrameSource, Recognizer, ScanError, scan};
use topup_types::AppEvent;

use crate::state::AppState;

pub async fn handle_start_scan(
    state: &Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    source: &dyn FrameSource,
    recognizer: &dyn Recognizer,
    cancel: &CancellationToken,
) -> anyhow::Result<()> {
    let config = { state.config.read().await.clone() };

    if !config.ocr.enabled {
        let _ = app_to_ui_tx
            .send(AppEvent::StatusUpdate {
                status: "Scanning is disabled in this deployment.".to_string(),
                scanning: false,
            })
            .await;
        return Ok(());
    }

    // Guards reentry when several input surfaces share the state
    if state.scanning.swap(true, Ordering::SeqCst) {
        tracing::warn!("scan already in progress, ignoring request");
        return Ok(());
    }
    {
        let mut status = state.status.scan.write().await;
        status.scanning = true;
        status.current_message = "Processing...".to_string();
    }
    let _ = app_to_ui_tx
        .send(AppEvent::StatusUpdate {
            status: "Processing...".to_string(),
            scanning: true,
        })
        .await;

    let deadline = Duration::from_secs(config.timeout_seconds);
    let result = tokio::time::timeout(deadline, scan(source, recognizer, &config, cancel)).await;

    state.scanning.store(false, Ordering::SeqCst);

    // Collapse the timeout layer into the attempt outcome
    let (message, event, failed) = match result {
        Ok(Ok(outcome)) => {
            tracing::debug!(attempt = %outcome.attempt, chars = outcome.raw_text.len(), "scan finished");
            match outcome.key {
                Some(key) => {
                    let preview = key.preview();
                    // A fresh scan always overwrites a stale key
                    state.session.lock().await.set_key(key);
                    (
                        format!("Recharge key captured ({preview})"),
                        Some(AppEvent::KeyCaptured { preview }),
                        false,
                    )
                }
                None => {
                    let message = "No valid recharge key found. Please try again.".to_string();
                    (
                        message.clone(),
                        Some(AppEvent::StatusUpdate {
                            status: message,
                            scanning: false,
                        }),
                        true,
                    )
                }
            }
        }
        Ok(Err(ScanError::Cancelled)) => {
            tracing::info!("scan cancelled");
            ("Scan cancelled.".to_string(), None, false)
        }
        Ok(Err(e)) => {
            tracing::error!("scan failed: {e}");
            let message = format!("{e}. Please try again.");
            (
                message.clone(),
                Some(AppEvent::StatusUpdate {
                    status: message,
                    scanning: false,
                }),
                true,
            )
        }
        Err(_elapsed) => {
            tracing::error!("scan timed out after {}s", config.timeout_seconds);
            let message = "Scan timed out. Please try again.".to_string();
            (
                message.clone(),
                Some(AppEvent::StatusUpdate {
                    status: message,
                    scanning: false,
                }),
                true,
            )
        }
    };

    {
        let mut status = state.status.scan.write().await;
        status.scanning = false;
        status.last_scan_time = Some(SystemTime::now());
        status.scan_count += 1;
        if failed {
            status.error_count += 1;
        }
        status.current_message = message;
    }

    if let Some(event) = event {
        let _ = app_to_ui_tx.send(event).await;
    }

    Ok(())
}
