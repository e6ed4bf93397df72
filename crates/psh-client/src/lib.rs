//! psh-client: session bridge to a remote polyglot shell service.
//!
//! [`ShellService`] wraps the service's two HTTP endpoints; [`ShellBridge`]
//! owns one session and renders every round trip into a
//! [`psh_core::LineTerminal`].
//!
//! # Quick Start
//!
//! ```no_run
//! use psh_client::{ShellBridge, ShellService};
//! use psh_core::LineTerminal;
//!
//! struct PrintTerminal;
//!
//! impl LineTerminal for PrintTerminal {
//!     fn echo(&mut self, line: &str) {
//!         println!("{line}");
//!     }
//!     fn set_prompt(&mut self, _prompt: &str) {}
//!     fn freeze(&mut self, _frozen: bool) {}
//! }
//!
//! # async fn example() -> psh_core::ShellResult<()> {
//! let service = ShellService::new("http://localhost:8080/shell");
//! let mut bridge = ShellBridge::new(service);
//! let mut term = PrintTerminal;
//!
//! bridge.establish_session(&mut term).await?;
//! bridge.send_line(&mut term, "1 + 1").await?;
//! # Ok(())
//! # }
//! ```

pub mod bridge;
pub mod service;

// Re-export primary public types.
pub use bridge::{BridgeState, LineOutcome, ShellBridge};
pub use service::ShellService;

// Re-export psh-core error types for convenience.
pub use psh_core::{ShellError, ShellResult};
