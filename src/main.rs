// Entrypoint for the `scan-food` binary.
// - Keeps `main` small: parse arguments, build the config and client,
//   hand off to the UI layer.
// - All webhook failures are printed by the UI layer rather than
//   propagated, so the process exits 0 either way.

use clap::Parser;
use foodscan::{api::WebhookClient, config::Config, ui};
use std::path::PathBuf;

/// Send a food image path and question to the n8n webhook.
#[derive(Parser, Debug)]
#[command(name = "scan-food", version)]
struct Args {
    /// Path to the image file (local path)
    image_path: PathBuf,

    /// Question to ask about the image
    #[arg(short, long)]
    question: Option<String>,

    /// Webhook URL (default: local n8n webhook)
    #[arg(long)]
    url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let args = Args::parse();

    // Defaults come from `Config`; the flags override per invocation.
    let mut cfg = Config::from_env();
    if let Some(url) = args.url {
        cfg.webhook_url = url;
    }
    let question = args.question.unwrap_or_else(|| cfg.question.clone());

    let client = WebhookClient::new(&cfg)?;
    ui::run_scan(&client, &args.image_path, &question);
    Ok(())
}
