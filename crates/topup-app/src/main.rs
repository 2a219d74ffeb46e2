use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use topup_ocr::{FrameSource, HttpOcr, Recognizer, StillSource};

mod controller;
mod events;
mod io;
mod profile;
mod state;
mod status;
mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

/// Recharge-card scan-and-dial engine
#[derive(Parser)]
#[command(name = "topup", version)]
struct Cli {
    /// Deployment profile name
    #[arg(long, default_value = "main")]
    profile: String,

    /// Scan a still image once and exit
    #[arg(long)]
    image: Option<PathBuf>,

    /// Mobile number for the one-shot dial-code output
    #[arg(long)]
    number: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = profile::init_user_config() {
        tracing::warn!("could not initialize user config: {e}");
    }
    let config = profile::load_user_profile(&cli.profile)?;

    let state = Arc::new(AppState::new(config));

    if let Some(image) = cli.image {
        return run_once(state, image, cli.number).await;
    }

    run(state).await
}

async fn run(state: Arc<AppState>) -> anyhow::Result<()> {
    let (still_path, endpoint) = {
        let config = state.config.read().await;
        (
            config.camera.still_path.clone(),
            config.ocr.endpoint.clone(),
        )
    };

    let Some(still_path) = still_path else {
        anyhow::bail!(
            "no frame source configured: set camera.still_path or embed a platform FrameSource"
        );
    };

    let source: Arc<dyn FrameSource> = Arc::new(StillSource::new(still_path));
    let recognizer: Arc<dyn Recognizer> = Arc::new(HttpOcr::new(endpoint));

    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(source, recognizer);

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("shutdown requested");
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::info!("task finished"),
                Some(Ok(Err(e))) => tracing::error!("task failed: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
        }
    }

    controller.shutdown();
    while tasks.join_next().await.is_some() {}

    Ok(())
}

/// Headless single attempt: scan the given still image, print the key, and
/// when a number is supplied, print the dial string as well.
async fn run_once(
    state: Arc<AppState>,
    image: PathBuf,
    number: Option<String>,
) -> anyhow::Result<()> {
    let config = { state.config.read().await.clone() };

    let source = StillSource::new(image);
    let recognizer = HttpOcr::new(config.ocr.endpoint.clone());
    let cancel = CancellationToken::new();

    let outcome = topup_ocr::scan(&source, &recognizer, &config, &cancel).await?;

    let Some(key) = outcome.key else {
        anyhow::bail!("no valid recharge key found");
    };

    println!("Recharge Key: {key}");

    if let Some(number) = number {
        let mut session = state.session.lock().await;
        session.set_key(key);
        session.set_number_input(number);
        let code = session.build_dial(&config.dial, &config.phone)?;
        println!("Dialing: tel:{code}");
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if atty::is(atty::Stream::Stdout) {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    }
}
