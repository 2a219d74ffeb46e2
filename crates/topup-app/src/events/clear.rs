use std::sync::Arc;

use kanal::AsyncSender;
use topup_types::AppEvent;

use crate::state::AppState;

pub async fn handle_clear_key(
    state: &Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    state.session.lock().await.clear_key();

    {
        let mut status = state.status.scan.write().await;
        status.current_message.clear();
    }

    let _ = app_to_ui_tx
        .send(AppEvent::StatusUpdate {
            status: "Results cleared.".to_string(),
            scanning: false,
        })
        .await;

    Ok(())
}

pub async fn handle_clear_number(
    state: &Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    state.session.lock().await.clear_number();

    let _ = app_to_ui_tx
        .send(AppEvent::StatusUpdate {
            status: "Mobile number cleared.".to_string(),
            scanning: false,
        })
        .await;

    Ok(())
}
