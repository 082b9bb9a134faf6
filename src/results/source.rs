//! Loading results pages from disk or the web.

use crate::error::ResultsError;
use std::fs;
use tracing::info;

const USER_AGENT: &str = "drawsim-results";

/// Read `source` as a local file, or fetch it when it is an http(s) URL.
pub fn load_source(source: &str) -> Result<String, ResultsError> {
    if is_url(source) {
        info!(url = source, "fetching results page");
        let body = ureq::get(source)
            .set("User-Agent", USER_AGENT)
            .call()?
            .into_string()?;
        Ok(body)
    } else {
        info!(path = source, "reading results page");
        Ok(fs::read_to_string(source)?)
    }
}

fn is_url(source: &str) -> bool {
    let lower = source.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
