//! HTTP access to the two service endpoints.
//!
//! `ShellService` owns the HTTP client and the normalized base URL and
//! maps transport-level failures into the shared error taxonomy. It knows
//! nothing about sessions or terminals; that is the bridge's job.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use psh_core::error::{ShellError, ShellResult};
use psh_core::protocol::{
    SendLineReply, StartSessionReply, PARAM_LINE, PARAM_UID, SEND_LINE_PATH, START_SESSION_PATH,
};

/// HTTP wrapper around a polyglot-shell execution service.
pub struct ShellService {
    client: Client,
    base_url: String,
}

impl ShellService {
    /// Create a service handle for `base_url`.
    ///
    /// A bare `host:port` is promoted to `http://host:port` and a trailing
    /// slash is dropped. No request timeout is installed: a request may
    /// wait indefinitely (see [`ShellService::with_timeout`]).
    pub fn new(base_url: &str) -> Self {
        Self::build(base_url, None)
    }

    /// Like [`ShellService::new`], with a per-request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        Self::build(base_url, Some(timeout))
    }

    fn build(base_url: &str, timeout: Option<Duration>) -> Self {
        let mut builder = Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let client = builder.build().unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: normalize_base_url(base_url),
        }
    }

    /// The normalized base URL this service talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}/start-session`.
    pub async fn start_session(&self) -> ShellResult<StartSessionReply> {
        let url = format!("{}/{START_SESSION_PATH}", self.base_url);
        let body = self.get_checked(&url).await?;
        serde_json::from_str(&body)
            .map_err(|e| ShellError::Decode(format!("bad start-session reply: {e}")))
    }

    /// `GET {base}/send-line?uid={uid}&line={line}`, line percent-encoded.
    pub async fn send_line(&self, uid: &str, line: &str) -> ShellResult<SendLineReply> {
        let url = format!(
            "{}/{SEND_LINE_PATH}?{PARAM_UID}={}&{PARAM_LINE}={}",
            self.base_url,
            urlencoding::encode(uid),
            urlencoding::encode(line),
        );
        let body = self.get_checked(&url).await?;
        serde_json::from_str(&body)
            .map_err(|e| ShellError::Decode(format!("bad send-line reply: {e}")))
    }

    /// Issue a GET and return the raw body text.
    ///
    /// Network failures become [`ShellError::Transport`]; non-success
    /// statuses become [`ShellError::Http`] with the canonical reason
    /// phrase for the status code.
    async fn get_checked(&self, url: &str) -> ShellResult<String> {
        debug!(url = %url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ShellError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ShellError::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ShellError::Transport(e.to_string()))?;
        debug!(body = %body, "reply");
        Ok(body)
    }
}

/// Default the scheme to http and drop any trailing slash.
fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_host_gets_http_scheme() {
        assert_eq!(
            normalize_base_url("shell.example.org:8080"),
            "http://shell.example.org:8080"
        );
    }

    #[test]
    fn explicit_scheme_is_kept() {
        assert_eq!(
            normalize_base_url("https://shell.example.org"),
            "https://shell.example.org"
        );
    }

    #[test]
    fn trailing_slash_is_dropped() {
        assert_eq!(
            normalize_base_url("http://shell.example.org/"),
            "http://shell.example.org"
        );
    }

    #[test]
    fn service_exposes_normalized_url() {
        let service = ShellService::new("shell.example.org/");
        assert_eq!(service.base_url(), "http://shell.example.org");
    }
}
