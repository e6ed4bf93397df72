//! The line-terminal seam the bridge renders into.
//!
//! The bridge never talks to a concrete UI. It drives this trait, which a
//! frontend implements over whatever line-oriented surface it has:
//! psh-cli implements it over stdin/stdout, tests implement a recording
//! double.

/// A line-oriented terminal as the bridge sees it.
pub trait LineTerminal {
    /// Append `line` to the scrollback. May contain embedded newlines.
    fn echo(&mut self, line: &str);

    /// Replace the prompt string shown before user input.
    fn set_prompt(&mut self, prompt: &str);

    /// Disable (`true`) or re-enable (`false`) user input.
    ///
    /// While frozen the terminal must reject input. The bridge freezes for
    /// the duration of each round trip, and for good once the session
    /// terminates.
    fn freeze(&mut self, frozen: bool);
}
