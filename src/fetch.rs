//! Blocking retrieval of the remote structure document.

use anyhow::{Context, Result};
use std::io::Read;
use std::time::Duration;

/// Fetch the source document as UTF-8 text. Any transport or status failure
/// is fatal — the pipeline must not run on a partial document.
pub fn fetch(url: &str) -> Result<String> {
    let agent = ureq::AgentBuilder::new()
        .timeout(Duration::from_secs(60))
        .build();

    let response = agent
        .get(url)
        .call()
        .with_context(|| format!("failed to fetch {url}"))?;

    // into_string() caps the body at 10 MiB; the structure document is large,
    // so read through the reader instead.
    let mut body = String::new();
    response
        .into_reader()
        .read_to_string(&mut body)
        .with_context(|| format!("failed to read response body from {url}"))?;

    Ok(body)
}
