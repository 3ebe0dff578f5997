// src/errors.rs

//! Defines the primary error type for the entire client.

use std::num::{ParseFloatError, ParseIntError};
use std::sync::Arc;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T, E = LazuliteError> = std::result::Result<T, E>;

/// The main error enum, representing all possible failures within the client.
/// Using `thiserror` allows for clean error definitions and automatic `From` trait implementations.
#[derive(Error, Debug)]
pub enum LazuliteError {
    #[error("IO Error: {0}")]
    Io(Arc<std::io::Error>),

    #[error("Incomplete data in stream")]
    IncompleteData,

    #[error("Connection attempt timed out")]
    ConnectTimeout,

    #[error("Connection closed by peer")]
    ConnectionClosed,

    #[error("Client is not connected")]
    NotConnected,

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("{0}")]
    Server(String),

    #[error("WRONGTYPE Operation against a key holding the wrong kind of value")]
    WrongType,

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Unexpected reply: {0}")]
    UnexpectedReply(String),

    #[error("Key must not be empty")]
    EmptyKey,

    #[error("Wrong number of arguments for '{0}' command")]
    WrongArgumentCount(String),

    #[error("Value is not an integer or out of range")]
    NotAnInteger,

    #[error("value is not a valid float")]
    NotAFloat,

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl LazuliteError {
    /// True for failures that invalidate the underlying transport. The
    /// connection manager drops its handle on these so the next command
    /// reconnects; server-reported errors leave the connection up.
    pub fn is_connection_fatal(&self) -> bool {
        matches!(
            self,
            LazuliteError::Io(_)
                | LazuliteError::IncompleteData
                | LazuliteError::ConnectTimeout
                | LazuliteError::ConnectionClosed
                | LazuliteError::Protocol(_)
        )
    }
}

// Manual implementation of Clone because `std::io::Error` is not cloneable.
// We wrap it in an Arc to allow for cheap, shared cloning.
impl Clone for LazuliteError {
    fn clone(&self) -> Self {
        match self {
            LazuliteError::Io(e) => LazuliteError::Io(Arc::clone(e)),
            LazuliteError::IncompleteData => LazuliteError::IncompleteData,
            LazuliteError::ConnectTimeout => LazuliteError::ConnectTimeout,
            LazuliteError::ConnectionClosed => LazuliteError::ConnectionClosed,
            LazuliteError::NotConnected => LazuliteError::NotConnected,
            LazuliteError::AuthenticationFailed(s) => LazuliteError::AuthenticationFailed(s.clone()),
            LazuliteError::Server(s) => LazuliteError::Server(s.clone()),
            LazuliteError::WrongType => LazuliteError::WrongType,
            LazuliteError::Protocol(s) => LazuliteError::Protocol(s.clone()),
            LazuliteError::UnexpectedReply(s) => LazuliteError::UnexpectedReply(s.clone()),
            LazuliteError::EmptyKey => LazuliteError::EmptyKey,
            LazuliteError::WrongArgumentCount(s) => LazuliteError::WrongArgumentCount(s.clone()),
            LazuliteError::NotAnInteger => LazuliteError::NotAnInteger,
            LazuliteError::NotAFloat => LazuliteError::NotAFloat,
            LazuliteError::Config(s) => LazuliteError::Config(s.clone()),
        }
    }
}

impl PartialEq for LazuliteError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (LazuliteError::Io(e1), LazuliteError::Io(e2)) => e1.to_string() == e2.to_string(),
            (LazuliteError::AuthenticationFailed(s1), LazuliteError::AuthenticationFailed(s2)) => {
                s1 == s2
            }
            (LazuliteError::Server(s1), LazuliteError::Server(s2)) => s1 == s2,
            (LazuliteError::Protocol(s1), LazuliteError::Protocol(s2)) => s1 == s2,
            (LazuliteError::UnexpectedReply(s1), LazuliteError::UnexpectedReply(s2)) => s1 == s2,
            (LazuliteError::WrongArgumentCount(s1), LazuliteError::WrongArgumentCount(s2)) => {
                s1 == s2
            }
            (LazuliteError::Config(s1), LazuliteError::Config(s2)) => s1 == s2,
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

// --- From trait implementations for easy error conversion ---

impl From<std::io::Error> for LazuliteError {
    fn from(e: std::io::Error) -> Self {
        LazuliteError::Io(Arc::new(e))
    }
}

impl From<ParseIntError> for LazuliteError {
    fn from(_: ParseIntError) -> Self {
        LazuliteError::NotAnInteger
    }
}

impl From<ParseFloatError> for LazuliteError {
    fn from(_: ParseFloatError) -> Self {
        LazuliteError::NotAFloat
    }
}

/// Extension collapsing a result into the legacy boolean success flag used by
/// call sites ported from boolean-style client facades.
pub trait SuccessFlag {
    /// `true` on success, `false` on any failure, discarding the value.
    fn success(self) -> bool;
}

impl<T> SuccessFlag for Result<T> {
    fn success(self) -> bool {
        self.is_ok()
    }
}
