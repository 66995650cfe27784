use std::env;
use std::fs;
use std::io::Read;

use anyhow::Context;
use tracing::info;
use transcript_core::TranscriptDocument;
use transcript_render::{RenderConfig, SessionRenderer};

fn main() -> anyhow::Result<()> {
    init_logging();

    let raw = read_input().context("failed to read transcript document")?;
    let document = TranscriptDocument::from_json_str(&raw)
        .context("failed to decode transcript document")?;

    let renderer = SessionRenderer::new(RenderConfig::from_env());
    info!(
        transcripts = document.transcriptions.len(),
        started_at = document.started_at,
        "rendering session"
    );
    let session = renderer.render(&document);

    let json =
        serde_json::to_string_pretty(&session).context("failed to encode rendered session")?;
    println!("{json}");
    Ok(())
}

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .try_init();
}

/// Reads the document JSON from the path argument, or stdin when absent.
fn read_input() -> anyhow::Result<String> {
    let mut args = env::args().skip(1);
    match args.next() {
        Some(path) => {
            fs::read_to_string(&path).with_context(|| format!("failed to read '{path}'"))
        }
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read stdin")?;
            Ok(raw)
        }
    }
}
