//! Shared plumbing for the feed pipelines: the outbound HTTP client and the
//! error taxonomy.

use reqwest::StatusCode;
use std::time::Duration;

pub type HttpClient = reqwest::Client;

/// Outbound identity used when `USER_AGENT` is not set in the environment.
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; curvefeed/0.1)";

/// Per-request cap on outbound calls; upstreams occasionally hang instead of
/// answering, and the pipelines must still return.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the HTTP client shared by every pipeline invocation.
pub fn build_client() -> Result<HttpClient, FeedError> {
    let user_agent =
        dotenv::var("USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());
    let client = reqwest::ClientBuilder::new()
        .user_agent(user_agent)
        .timeout(REQUEST_TIMEOUT)
        .build()?;
    Ok(client)
}

/// How a feed unit (one Treasury year, one ticker) can fail.
///
/// Every variant is recovered inside the pipelines: the failing unit is
/// logged and contributes an empty result. Only a defect outside those
/// guards reaches a caller.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// The endpoint (and its mirror, where one exists) answered with a
    /// non-success status.
    #[error("[{unit}] upstream responded with HTTP {status}")]
    Upstream { unit: String, status: StatusCode },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The Treasury file header omits a required column; the whole file is
    /// structurally unusable rather than a per-row gap.
    #[error("source header is missing required column `{0}`")]
    MissingColumn(&'static str),
}
