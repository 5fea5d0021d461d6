// crates/parkmap-core/src/loader/fetch.rs
#![cfg(feature = "fetch")]

use crate::error::Result;
use reqwest::blocking::Client;
use tracing::info;

/// GET `url` and return the body as text. Non-2xx statuses are errors.
pub(crate) fn fetch_text(url: &str) -> Result<String> {
    let client = Client::builder()
        .user_agent(concat!("parkmap/", env!("CARGO_PKG_VERSION")))
        .build()?;
    let resp = client.get(url).send()?.error_for_status()?;
    let text = resp.text()?;
    info!(url, bytes = text.len(), "fetched parking CSV");
    Ok(text)
}
