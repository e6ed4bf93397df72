//! JSON reply shapes for the two service endpoints.
//!
//! The service speaks plain HTTP GET: `start-session` opens an execution
//! context and `send-line` submits one command line within it. Both reply
//! with a small JSON object; interpreter-level failures travel in the
//! body's `error` field rather than in the HTTP status.

use serde::{Deserialize, Serialize};

use crate::error::{ShellError, ShellResult};

/// Path of the session-establishment endpoint.
pub const START_SESSION_PATH: &str = "start-session";

/// Path of the line-execution endpoint.
pub const SEND_LINE_PATH: &str = "send-line";

/// Query parameter carrying the session identifier.
pub const PARAM_UID: &str = "uid";

/// Query parameter carrying the percent-encoded command line.
pub const PARAM_LINE: &str = "line";

/// Reply to `GET {base}/start-session`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartSessionReply {
    /// Session identifier, present when a session was opened.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    /// Failure reason, present when the service refuses a session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StartSessionReply {
    /// Collapse the reply into a session id.
    ///
    /// Refusals win: a reply carrying both fields is treated as refused.
    pub fn into_result(self) -> ShellResult<String> {
        if let Some(reason) = self.error {
            return Err(ShellError::SessionRefused(reason));
        }
        self.uid.ok_or_else(|| {
            ShellError::Decode("start-session reply carries neither uid nor error".into())
        })
    }
}

/// Reply to `GET {base}/send-line`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendLineReply {
    /// Command output, as a JSON-string-escaped payload
    /// (see [`crate::escape::unescape_output`]).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    /// Interpreter language now active, when the command switched it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Error text reported by the remote interpreter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Set when the session is over and no further lines will be accepted.
    #[serde(default)]
    pub terminate: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_reply_with_uid() {
        let reply: StartSessionReply = serde_json::from_str(r#"{"uid":"u-77"}"#).unwrap();
        assert_eq!(reply.clone().uid.as_deref(), Some("u-77"));
        assert_eq!(reply.into_result().unwrap(), "u-77");
    }

    #[test]
    fn start_reply_with_error_is_refused() {
        let reply: StartSessionReply =
            serde_json::from_str(r#"{"error":"no capacity"}"#).unwrap();
        match reply.into_result() {
            Err(ShellError::SessionRefused(reason)) => assert_eq!(reason, "no capacity"),
            other => panic!("expected refusal, got {other:?}"),
        }
    }

    #[test]
    fn start_reply_error_wins_over_uid() {
        let reply: StartSessionReply =
            serde_json::from_str(r#"{"uid":"u-1","error":"shutting down"}"#).unwrap();
        assert!(matches!(
            reply.into_result(),
            Err(ShellError::SessionRefused(_))
        ));
    }

    #[test]
    fn start_reply_with_neither_field_is_a_decode_error() {
        let reply: StartSessionReply = serde_json::from_str("{}").unwrap();
        assert!(matches!(reply.into_result(), Err(ShellError::Decode(_))));
    }

    #[test]
    fn line_reply_success_shape() {
        let reply: SendLineReply =
            serde_json::from_str(r#"{"output":"4","language":"ruby"}"#).unwrap();
        assert_eq!(reply.output.as_deref(), Some("4"));
        assert_eq!(reply.language.as_deref(), Some("ruby"));
        assert_eq!(reply.error, None);
        assert!(!reply.terminate);
    }

    #[test]
    fn line_reply_error_shape() {
        let reply: SendLineReply =
            serde_json::from_str(r#"{"error":"fatal","terminate":true}"#).unwrap();
        assert_eq!(reply.error.as_deref(), Some("fatal"));
        assert!(reply.terminate);
    }

    #[test]
    fn terminate_defaults_to_false() {
        let reply: SendLineReply = serde_json::from_str(r#"{"error":"oops"}"#).unwrap();
        assert!(!reply.terminate);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let reply: SendLineReply =
            serde_json::from_str(r#"{"output":"hi","elapsed_ms":12}"#).unwrap();
        assert_eq!(reply.output.as_deref(), Some("hi"));
    }
}
