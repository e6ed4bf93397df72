use thiserror::Error;

/// Errors produced by the shell protocol layer.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("session refused: {0}")]
    SessionRefused(String),

    #[error("server error code {status}: {reason}")]
    Http { status: u16, reason: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("session terminated")]
    Terminated,

    #[error("no session established")]
    NotEstablished,
}

pub type ShellResult<T> = Result<T, ShellError>;
