//! HTTP and filesystem page fetcher

use super::{html_to_text, is_remote, looks_like_html, PageFetcher};
use crate::config::FetchConfig;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use tokio::io::AsyncReadExt;

/// Fetches `http(s)://` sources with reqwest and reads anything else from disk
///
/// Bodies are read up to `max_body_bytes`; anything past that is discarded
/// before decoding.
pub struct WebFetcher {
    client: Client,
    max_body_bytes: usize,
}

impl WebFetcher {
    /// Create a fetcher with the configured timeout and user agent
    pub fn new(config: &FetchConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            max_body_bytes: config.max_body_bytes,
        })
    }

    async fn fetch_remote(&self, url: &str) -> anyhow::Result<String> {
        tracing::debug!(url = %url, "Fetching page");

        let mut response = self
            .client
            .get(url)
            .send()
            .await
            .context("HTTP request failed")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("HTTP {} for {}", status, url);
        }

        let is_html_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains("html"));

        let mut buf: Vec<u8> = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .context("Failed to read response body")?
        {
            let room = self.max_body_bytes - buf.len();
            if chunk.len() >= room {
                buf.extend_from_slice(&chunk[..room]);
                tracing::debug!(url = %url, limit = self.max_body_bytes, "Body truncated");
                break;
            }
            buf.extend_from_slice(&chunk);
        }

        let body = String::from_utf8_lossy(&buf);
        if is_html_type || looks_like_html(&body) {
            Ok(html_to_text(&body))
        } else {
            Ok(body.into_owned())
        }
    }

    async fn read_local(&self, path: &str) -> anyhow::Result<String> {
        let file = tokio::fs::File::open(path)
            .await
            .with_context(|| format!("Failed to open {}", path))?;

        let mut buf: Vec<u8> = Vec::new();
        file.take(self.max_body_bytes as u64)
            .read_to_end(&mut buf)
            .await
            .with_context(|| format!("Failed to read {}", path))?;
        let body = String::from_utf8_lossy(&buf);

        let is_html_ext = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"));

        if is_html_ext || looks_like_html(&body) {
            Ok(html_to_text(&body))
        } else {
            Ok(body.into_owned())
        }
    }
}

#[async_trait]
impl PageFetcher for WebFetcher {
    async fn fetch_text(&self, source: &str) -> anyhow::Result<String> {
        if is_remote(source) {
            self.fetch_remote(source.trim()).await
        } else {
            self.read_local(source).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tokio::io::AsyncWriteExt;
    use tokio::net::TcpListener;

    fn fetcher() -> WebFetcher {
        WebFetcher::new(&FetchConfig::default()).unwrap()
    }

    fn capped_fetcher(max_body_bytes: usize) -> WebFetcher {
        WebFetcher::new(&FetchConfig {
            max_body_bytes,
            ..FetchConfig::default()
        })
        .unwrap()
    }

    /// Answer a single HTTP request with `status` and a plain-text `body`
    async fn serve_once(status: &'static str, body: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 2048];
            let _ = socket.read(&mut request).await;

            let head = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                status,
                body.len()
            );
            let _ = socket.write_all(head.as_bytes()).await;
            let _ = socket.write_all(body.as_bytes()).await;
        });

        format!("http://{}/", addr)
    }

    #[tokio::test]
    async fn test_read_plain_text_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Price: Rs. 2,300").unwrap();

        let text = fetcher()
            .fetch_text(file.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(text, "Price: Rs. 2,300");
    }

    #[tokio::test]
    async fn test_read_html_file_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".html").tempfile().unwrap();
        write!(file, "<div>Only <span>$40</span></div>").unwrap();

        let text = fetcher()
            .fetch_text(file.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(text, "Only $40");
    }

    #[tokio::test]
    async fn test_missing_file_is_error() {
        let result = fetcher().fetch_text("/nonexistent/page.txt").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_local_file_read_is_capped() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Rs 100 {}", "x".repeat(10_000)).unwrap();

        let text = capped_fetcher(6)
            .fetch_text(file.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(text, "Rs 100");
    }

    #[tokio::test]
    async fn test_remote_body_is_capped() {
        let body = "₹250 ".repeat(4_000);
        let url = serve_once("200 OK", body.clone()).await;

        // nine whole "₹250 " repeats
        let text = capped_fetcher(63).fetch_text(&url).await.unwrap();
        assert_eq!(text, body[..63]);
    }

    #[tokio::test]
    async fn test_remote_body_under_cap_is_whole() {
        let url = serve_once("200 OK", "Tickets from $15".to_string()).await;

        let text = fetcher().fetch_text(&url).await.unwrap();
        assert_eq!(text, "Tickets from $15");
    }

    #[tokio::test]
    async fn test_remote_error_status() {
        let url = serve_once("404 Not Found", "gone".to_string()).await;

        let result = fetcher().fetch_text(&url).await;
        assert!(result.is_err());
    }
}
