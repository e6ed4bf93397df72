//! `psh <url>` — interactive multi-language shell session.
//!
//! Establishes a session with the shell service, then reads lines from
//! stdin and hands them to the bridge until EOF or until the service
//! terminates the session. The prompt tracks the active language.

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use psh_client::{LineOutcome, ShellBridge};
use psh_core::GREETING;

use crate::terminal::StdoutTerminal;

/// Run an interactive shell session against the service at `url`.
pub async fn run(url: &str, timeout_secs: u64, prompt: &str) -> Result<()> {
    let service = super::service_for(url, timeout_secs);
    let mut bridge = ShellBridge::new(service).with_prompt(prompt);
    let mut term = StdoutTerminal::for_stdout();

    bridge
        .establish_session(&mut term)
        .await
        .context("failed to establish shell session")?;

    if term.is_interactive() {
        println!("{GREETING}");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        term.show_prompt();
        let Some(line) = lines.next_line().await? else {
            debug!("stdin closed");
            break;
        };

        let outcome = bridge.send_line(&mut term, &line).await?;
        if outcome == LineOutcome::Terminated {
            anyhow::bail!("session terminated by the service");
        }
    }

    // Leave the shell on a fresh line after Ctrl+D.
    if term.is_interactive() {
        println!();
    }
    Ok(())
}
