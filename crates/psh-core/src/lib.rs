//! psh-core: Shared protocol library for the Polyglot Shell client.
//!
//! Provides the JSON reply types for the two service endpoints, the shared
//! error taxonomy, prompt derivation, output unescaping, and the abstract
//! line-terminal trait the bridge renders into.

pub mod error;
pub mod escape;
pub mod prompt;
pub mod protocol;
pub mod terminal;

// Re-export commonly used items at crate root.
pub use error::{ShellError, ShellResult};
pub use escape::unescape_output;
pub use prompt::{prompt_for_language, DEFAULT_PROMPT, GREETING};
pub use protocol::{SendLineReply, StartSessionReply};
pub use terminal::LineTerminal;
