use kanal::AsyncReceiver;
use topup_types::AppEvent;

/// Terminal presenter: renders app-to-ui events as status lines. Stands in
/// for the capture UI, which is owned by the host platform.
pub async fn ui_loop(app_to_ui_rx: AsyncReceiver<AppEvent>) -> anyhow::Result<()> {
    while let Ok(event) = app_to_ui_rx.recv().await {
        match event {
            AppEvent::StatusUpdate { status, scanning } => {
                if scanning {
                    println!("[scanning] {status}");
                } else if !status.is_empty() {
                    println!("{status}");
                }
            }
            AppEvent::KeyCaptured { preview } => {
                println!("Recharge Key: {preview}");
            }
            AppEvent::ShowDial(code) => {
                println!("Dialing: tel:{code}");
            }
            _ => {}
        }
    }

    Ok(())
}
