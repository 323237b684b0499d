// API client module: contains a small blocking HTTP client that talks to
// the n8n food-analysis webhook. It is intentionally small and
// synchronous: one request per invocation, no retries.

use anyhow::{Context, Result};
use log::debug;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

use crate::config::Config;

/// Payload POSTed to the webhook. The image travels as a path string,
/// not as binary content; the workflow on the other end reads the file
/// itself.
#[derive(Serialize, Debug, Clone)]
pub struct AnalyzeRequest {
    pub image_path: String,
    pub question: String,
}

/// The two shapes of a response body this tool understands: parseable
/// JSON, or opaque text. Decoding failure is a first-class branch, not
/// an error.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportBody {
    Structured(Value),
    Raw(String),
}

impl ReportBody {
    /// Try to parse the body as JSON, falling back to the raw text.
    pub fn decode(text: &str) -> ReportBody {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => ReportBody::Structured(value),
            Err(_) => ReportBody::Raw(text.to_string()),
        }
    }

    /// Human-readable rendering: structured bodies are pretty-printed,
    /// raw bodies pass through verbatim.
    pub fn render(&self) -> String {
        match self {
            ReportBody::Structured(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            ReportBody::Raw(text) => text.clone(),
        }
    }
}

/// Result of one delivered request. Transport failures and a missing
/// image file surface as errors instead; an `Outcome` means the webhook
/// answered.
#[derive(Debug)]
pub enum Outcome {
    /// 2xx response, body already decoded.
    Report(ReportBody),
    /// Non-2xx response, body kept verbatim for display.
    Rejected { status: StatusCode, body: String },
}

/// Webhook client holding a reqwest blocking client and the target URL.
#[derive(Clone)]
pub struct WebhookClient {
    client: Client,
    url: String,
}

impl WebhookClient {
    /// Build a client from the configuration. The timeout covers the
    /// whole request, connection setup included.
    pub fn new(cfg: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(cfg.request_timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(WebhookClient {
            client,
            url: cfg.webhook_url.clone(),
        })
    }

    /// Send one analysis request and classify the response.
    ///
    /// The image path must exist locally before any network traffic
    /// happens; a missing file is reported without touching the socket.
    pub fn analyze(&self, image_path: &Path, question: &str) -> Result<Outcome> {
        if !image_path.exists() {
            anyhow::bail!("File not found: {}", image_path.display());
        }

        let payload = AnalyzeRequest {
            image_path: image_path.to_string_lossy().into_owned(),
            question: question.to_string(),
        };
        debug!("POST {} {:?}", self.url, payload);

        let res = self
            .client
            .post(&self.url)
            .json(&payload)
            .send()
            .context("Network error")?;

        let status = res.status();
        let body = res.text().unwrap_or_else(|_| "".into());
        debug!("webhook answered {} ({} bytes)", status, body.len());

        if status.is_success() {
            Ok(Outcome::Report(ReportBody::decode(&body)))
        } else {
            Ok(Outcome::Rejected { status, body })
        }
    }
}
