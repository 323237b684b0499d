// UI layer: console rendering for the scan flow. The functions are
// small and synchronous to make the flow easy to follow; every failure
// path prints a message instead of propagating, so the binary always
// exits 0.

use crate::api::{Outcome, WebhookClient};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Drive one scan end to end: precondition check, request, rendering.
///
/// A spinner runs while the request is in flight; the webhook can take
/// a while when the workflow has to call out to the vision model.
pub fn run_scan(client: &WebhookClient, image_path: &Path, question: &str) {
    if !image_path.exists() {
        println!("❌ File not found: {}", image_path.display());
        return;
    }

    println!("🚀 Sending to AI Brain...");
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message("Waiting for the AI nutritionist...");

    let outcome = client.analyze(image_path, question);
    spinner.finish_and_clear();

    match outcome {
        Ok(outcome) => print_outcome(&outcome),
        // Transport failures (refused, timeout, DNS) land here.
        Err(e) => println!("❌ {:#}", e),
    }
}

/// Print a webhook outcome the way the original terminal flow did.
pub fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Report(body) => {
            println!("\n✅ AI NUTRITIONIST REPORT:");
            println!("{}", body.render());
        }
        Outcome::Rejected { status, body } => {
            println!("❌ Error: {} - {}", status.as_u16(), body);
        }
    }
}
