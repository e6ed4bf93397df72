//! `psh <url> -c <line>` — one-off line execution.
//!
//! Establishes a session, submits a single line, prints the result, and
//! exits nonzero if the service reported a failure.

use anyhow::{Context, Result};
use tracing::info;

use psh_client::{LineOutcome, ShellBridge};

use crate::terminal::StdoutTerminal;

/// Execute one line against the service at `url` and print its output.
pub async fn run(url: &str, timeout_secs: u64, prompt: &str, line: &str) -> Result<()> {
    info!(url = %url, line = %line, "exec");

    let service = super::service_for(url, timeout_secs);
    let mut bridge = ShellBridge::new(service).with_prompt(prompt);
    let mut term = StdoutTerminal::new(false);

    bridge
        .establish_session(&mut term)
        .await
        .context("failed to establish shell session")?;

    let outcome = bridge.send_line(&mut term, line).await?;
    match outcome {
        LineOutcome::Executed | LineOutcome::Echoed => Ok(()),
        LineOutcome::Failed | LineOutcome::Terminated | LineOutcome::TransportFailed => {
            // The failure text has already been echoed by the bridge.
            std::process::exit(1);
        }
    }
}
