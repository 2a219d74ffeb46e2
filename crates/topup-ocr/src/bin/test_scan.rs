//! One-shot scan against a still image - run with:
//! cargo run -p topup-ocr --bin test_scan -- <image> [endpoint]

use anyhow::Result;
use tokio_util::sync::CancellationToken;
use topup_config::Config;
use topup_ocr::{HttpOcr, StillSource, scan};

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let image = args.next().unwrap_or_else(|| "card.jpg".to_string());

    let mut config = Config::new();
    if let Some(endpoint) = args.next() {
        config.ocr.endpoint = endpoint;
    }

    let source = StillSource::new(&image);
    let recognizer = HttpOcr::new(config.ocr.endpoint.clone());

    let start = std::time::Instant::now();
    let outcome = scan(&source, &recognizer, &config, &CancellationToken::new()).await?;

    println!("scanned {} in {:?}", image, start.elapsed());
    println!("raw text ({} chars):", outcome.raw_text.len());
    for line in outcome.raw_text.lines().take(10) {
        println!("  > {line}");
    }

    match outcome.key {
        Some(key) => println!("recharge key: {key}"),
        None => println!("no valid recharge key found"),
    }

    Ok(())
}
