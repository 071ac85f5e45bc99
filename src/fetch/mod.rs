//! Page fetching module
//!
//! Turns a source reference (URL or local path) into page text for the
//! extractor. Failures are reported to the caller, which skips the source.

mod html;
mod web;

pub use html::{html_to_text, looks_like_html};
pub use web::WebFetcher;

use async_trait::async_trait;

/// Trait for page text providers
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the visible text of a source
    async fn fetch_text(&self, source: &str) -> anyhow::Result<String>;
}

/// Whether a source should be fetched over HTTP
pub fn is_remote(source: &str) -> bool {
    let lower = source.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
