use std::sync::Arc;

use kanal::AsyncSender;
use topup_core::error::SessionError;
use topup_types::AppEvent;

use crate::state::AppState;

pub async fn handle_dial(
    state: &Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let (dial_config, phone_rule) = {
        let config = state.config.read().await;
        (config.dial.clone(), config.phone.clone())
    };

    let mut session = state.session.lock().await;
    let built = session.build_dial(&dial_config, &phone_rule);

    match built {
        Ok(code) => {
            if dial_config.clear_key_after_dial {
                session.clear_key();
            }
            drop(session);

            tracing::info!(code = %code, "handing dial string to the dialer");
            {
                let mut status = state.status.scan.write().await;
                status.current_message = format!("Dialing: {code}");
            }
            let _ = app_to_ui_tx.send(AppEvent::ShowDial(code.to_string())).await;
        }
        Err(e) => {
            drop(session);

            tracing::warn!("dial refused: {e}");
            {
                let mut status = state.status.scan.write().await;
                status.error_count += 1;
                status.current_message = e.to_string();
            }
            let _ = app_to_ui_tx
                .send(AppEvent::StatusUpdate {
                    status: dial_error_message(&e),
                    scanning: false,
                })
                .await;
        }
    }

    Ok(())
}

fn dial_error_message(err: &SessionError) -> String {
    match err {
        SessionError::NoKey => "Please scan a recharge card first.".to_string(),
        SessionError::NoNumber => "Please enter a mobile number.".to_string(),
        SessionError::Number(e) => format!("Invalid mobile number: {e}."),
    }
}
