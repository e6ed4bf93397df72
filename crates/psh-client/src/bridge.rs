//! The bridge between a line terminal and the remote execution service.
//!
//! One `ShellBridge` exists per terminal. It owns the session identifier,
//! the current prompt, and the session state, and renders every effect of
//! a round trip into the [`LineTerminal`] it is handed. Because both
//! operations take `&mut self`, at most one request can ever be in flight
//! per bridge, which is what keeps responses in submission order.

use tracing::{debug, error, info};

use psh_core::error::{ShellError, ShellResult};
use psh_core::escape::unescape_output;
use psh_core::prompt::{prompt_for_language, DEFAULT_PROMPT};
use psh_core::protocol::{SendLineReply, StartSessionReply};
use psh_core::terminal::LineTerminal;

use crate::service::ShellService;

/// The lifecycle of one session, as the bridge tracks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeState {
    /// No session: nothing attempted yet, or the last attempt failed.
    Uninitialized,
    /// `start-session` is in flight.
    AwaitingSession,
    /// A session is live and the terminal accepts input.
    Ready,
    /// A line is in flight; the terminal is frozen.
    AwaitingResponse,
    /// The service ended the session; the terminal stays frozen for good.
    Terminated,
}

/// What a submitted line amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// Empty input, echoed locally; no request was made.
    Echoed,
    /// The service ran the line and its output was displayed.
    Executed,
    /// The service reported an error; the session continues.
    Failed,
    /// The service reported an error and ended the session.
    Terminated,
    /// The round trip itself failed; the failure was echoed inline and
    /// the terminal re-enabled.
    TransportFailed,
}

/// Session-holding bridge between a [`LineTerminal`] and the service.
pub struct ShellBridge {
    service: ShellService,
    /// Session identifier, present from establishment on.
    uid: Option<String>,
    /// Prompt to restore whenever the terminal is unfrozen.
    prompt: String,
    state: BridgeState,
}

impl ShellBridge {
    /// Create an inert bridge for `service`. No request is made until
    /// [`ShellBridge::establish_session`].
    pub fn new(service: ShellService) -> Self {
        Self {
            service,
            uid: None,
            prompt: DEFAULT_PROMPT.to_string(),
            state: BridgeState::Uninitialized,
        }
    }

    /// Replace the initial prompt (defaults to [`DEFAULT_PROMPT`]).
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Current session state.
    pub fn state(&self) -> BridgeState {
        self.state
    }

    /// The prompt that will be restored on the next unfreeze.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The session identifier, once established.
    pub fn uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }

    /// Establish a session with the service.
    ///
    /// On success the bridge becomes [`BridgeState::Ready`] and the
    /// terminal is unfrozen with the initial prompt applied. On refusal or
    /// transport failure the error is logged and returned, and the bridge
    /// drops back to [`BridgeState::Uninitialized`]; no retry is made.
    pub async fn establish_session(&mut self, term: &mut dyn LineTerminal) -> ShellResult<()> {
        info!(service = %self.service.base_url(), "establishing shell session");
        self.state = BridgeState::AwaitingSession;

        let started = self
            .service
            .start_session()
            .await
            .and_then(StartSessionReply::into_result);

        let uid = match started {
            Ok(uid) => uid,
            Err(e) => {
                error!(error = %e, "session establishment failed");
                self.state = BridgeState::Uninitialized;
                return Err(e);
            }
        };

        debug!(uid = %uid, "session established");
        self.uid = Some(uid);
        self.state = BridgeState::Ready;
        term.set_prompt(&self.prompt);
        term.freeze(false);
        Ok(())
    }

    /// Submit one line.
    ///
    /// Empty lines are echoed locally and never leave the process. For
    /// anything else the terminal is frozen, with the prompt cleared, for
    /// exactly the duration of the round trip.
    pub async fn send_line(
        &mut self,
        term: &mut dyn LineTerminal,
        line: &str,
    ) -> ShellResult<LineOutcome> {
        if line.is_empty() {
            term.echo("");
            return Ok(LineOutcome::Echoed);
        }

        let uid = match self.state {
            BridgeState::Ready => self.uid.clone().ok_or(ShellError::NotEstablished)?,
            BridgeState::Terminated => return Err(ShellError::Terminated),
            _ => return Err(ShellError::NotEstablished),
        };

        term.freeze(true);
        term.set_prompt("");
        self.state = BridgeState::AwaitingResponse;

        match self.service.send_line(&uid, line).await {
            Ok(reply) => Ok(self.apply_reply(term, reply)),
            Err(e) => {
                // HTTP-layer failures are surfaced inline and the terminal
                // is unconditionally re-enabled; recovery is manual.
                debug!(error = %e, "send-line round trip failed");
                term.echo(&failure_line(&e));
                self.unfreeze(term);
                Ok(LineOutcome::TransportFailed)
            }
        }
    }

    /// Render one reply into the terminal and step the state machine.
    fn apply_reply(&mut self, term: &mut dyn LineTerminal, reply: SendLineReply) -> LineOutcome {
        // A language in the reply applies to whatever prompt is restored
        // next, even when the reply is an error.
        if let Some(language) = &reply.language {
            self.prompt = prompt_for_language(language);
        }

        if let Some(message) = &reply.error {
            term.echo(message);
            if reply.terminate {
                info!("session terminated by service");
                self.state = BridgeState::Terminated;
                return LineOutcome::Terminated;
            }
            self.unfreeze(term);
            return LineOutcome::Failed;
        }

        let payload = reply.output.unwrap_or_default();
        match unescape_output(&payload) {
            Ok(text) => {
                term.echo(&text);
                self.unfreeze(term);
                LineOutcome::Executed
            }
            Err(e) => {
                debug!(error = %e, "undecodable output payload");
                term.echo(&failure_line(&e));
                self.unfreeze(term);
                LineOutcome::TransportFailed
            }
        }
    }

    fn unfreeze(&mut self, term: &mut dyn LineTerminal) {
        term.freeze(false);
        term.set_prompt(&self.prompt);
        self.state = BridgeState::Ready;
    }
}

/// The synthetic line echoed for a failed round trip.
fn failure_line(e: &ShellError) -> String {
    match e {
        ShellError::Http { status, reason } => {
            format!("Server error code {status}: {reason}")
        }
        other => format!("Server error: {other}"),
    }
}
