use anyhow::Context;
use kanal::AsyncSender;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;
use topup_types::AppEvent;

/// Reads operator commands from stdin and turns them into app events.
/// `scan`, `dial`, `clear`, `clear-number`, `quit`; a bare digit string is
/// taken as the mobile number input.
pub async fn watcher_io(
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        let line = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("stdin watcher stopping");
                return Ok(());
            }
            line = lines.next_line() => line.context("failed to read stdin")?,
        };

        let Some(line) = line else {
            tracing::info!("stdin closed, requesting shutdown");
            event_tx.send(AppEvent::Shutdown).await?;
            return Ok(());
        };

        let Some(event) = parse_command(&line) else {
            if !line.trim().is_empty() {
                tracing::warn!("unrecognized command: {line:?}");
            }
            continue;
        };

        event_tx.send(event).await?;
    }
}

fn parse_command(line: &str) -> Option<AppEvent> {
    let line = line.trim();
    match line {
        "" => None,
        "scan" => Some(AppEvent::StartScan),
        "dial" => Some(AppEvent::Dial),
        "clear" => Some(AppEvent::ClearKey),
        "clear-number" => Some(AppEvent::ClearNumber),
        "quit" | "exit" => Some(AppEvent::Shutdown),
        other if other.chars().all(|c| c.is_ascii_digit()) => {
            Some(AppEvent::NumberInput(other.to_string()))
        }
        _ => None,
    }
}
