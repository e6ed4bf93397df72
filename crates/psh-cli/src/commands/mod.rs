//! CLI command implementations.

pub mod exec;
pub mod repl;

use std::time::Duration;

use psh_client::ShellService;

/// Build a service handle for `url`, honoring the configured timeout
/// (0 seconds = wait forever).
pub(crate) fn service_for(url: &str, timeout_secs: u64) -> ShellService {
    if timeout_secs == 0 {
        ShellService::new(url)
    } else {
        ShellService::with_timeout(url, Duration::from_secs(timeout_secs))
    }
}
