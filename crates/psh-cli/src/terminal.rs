//! Line terminal backed by stdout.
//!
//! Renders bridge effects for a console: echoed lines go to stdout, the
//! prompt is repainted between reads, and freezing suppresses the prompt
//! while a request is in flight.

use std::io::Write;

use crossterm::tty::IsTty;

use psh_core::terminal::LineTerminal;

/// [`LineTerminal`] writing to the process stdout.
///
/// Starts frozen; the session bridge unfreezes it once a session exists.
pub struct StdoutTerminal {
    prompt: String,
    frozen: bool,
    interactive: bool,
}

impl StdoutTerminal {
    /// Terminal with explicit interactivity (used for one-shot mode and tests).
    pub fn new(interactive: bool) -> Self {
        Self {
            prompt: String::new(),
            frozen: true,
            interactive,
        }
    }

    /// Terminal for the process stdout, interactive when both stdin and
    /// stdout are TTYs.
    pub fn for_stdout() -> Self {
        Self::new(std::io::stdin().is_tty() && std::io::stdout().is_tty())
    }

    /// Whether prompts and the greeting should be shown.
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Repaint the prompt, unless frozen or non-interactive.
    pub fn show_prompt(&self) {
        if self.interactive && !self.frozen {
            let mut stdout = std::io::stdout();
            let _ = write!(stdout, "{}", self.prompt);
            let _ = stdout.flush();
        }
    }
}

impl LineTerminal for StdoutTerminal {
    fn echo(&mut self, line: &str) {
        println!("{line}");
    }

    fn set_prompt(&mut self, prompt: &str) {
        self.prompt = prompt.to_string();
    }

    fn freeze(&mut self, frozen: bool) {
        self.frozen = frozen;
    }
}
