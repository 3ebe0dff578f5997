// src/commands/args.rs

//! Assembles RESP command frames: the command name plus binary-safe
//! arguments, with the local precondition checks wrappers apply before
//! anything reaches the store.

use crate::errors::{LazuliteError, Result};
use crate::protocol::RespFrame;
use bytes::Bytes;

/// One store command under assembly. Keys go through [`Command::key`] so an
/// empty key is rejected without a roundtrip.
#[derive(Debug, Clone)]
pub struct Command {
    parts: Vec<Bytes>,
}

impl Command {
    pub fn new(name: &'static str) -> Self {
        Self {
            parts: vec![Bytes::from_static(name.as_bytes())],
        }
    }

    /// Appends a key, rejecting empty keys locally.
    pub fn key(mut self, key: impl AsRef<[u8]>) -> Result<Self> {
        let key = key.as_ref();
        if key.is_empty() {
            return Err(LazuliteError::EmptyKey);
        }
        self.parts.push(Bytes::copy_from_slice(key));
        Ok(self)
    }

    pub fn arg(mut self, arg: impl AsRef<[u8]>) -> Self {
        self.parts.push(Bytes::copy_from_slice(arg.as_ref()));
        self
    }

    pub fn arg_int(mut self, value: i64) -> Self {
        self.parts
            .push(Bytes::copy_from_slice(itoa::Buffer::new().format(value).as_bytes()));
        self
    }

    pub fn arg_uint(mut self, value: u64) -> Self {
        self.parts
            .push(Bytes::copy_from_slice(itoa::Buffer::new().format(value).as_bytes()));
        self
    }

    pub fn arg_float(mut self, value: f64) -> Self {
        self.parts
            .push(Bytes::copy_from_slice(ryu::Buffer::new().format(value).as_bytes()));
        self
    }

    pub fn arg_bound(mut self, bound: ScoreBound) -> Self {
        self.parts.push(bound.to_arg());
        self
    }

    pub fn into_frame(self) -> RespFrame {
        RespFrame::Array(self.parts.into_iter().map(RespFrame::BulkString).collect())
    }
}

/// Rejects an empty sequence for variadic commands before building a frame
/// the store would only bounce back.
pub fn require_nonempty<T>(items: &[T], command: &str) -> Result<()> {
    if items.is_empty() {
        return Err(LazuliteError::WrongArgumentCount(command.to_string()));
    }
    Ok(())
}

/// Score range boundary in the store's grammar: plain value for inclusive,
/// `(`-prefixed for exclusive, `-inf`/`+inf` for the open ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoreBound {
    NegInf,
    PosInf,
    Incl(f64),
    Excl(f64),
}

impl ScoreBound {
    pub fn to_arg(self) -> Bytes {
        match self {
            ScoreBound::NegInf => Bytes::from_static(b"-inf"),
            ScoreBound::PosInf => Bytes::from_static(b"+inf"),
            ScoreBound::Incl(score) => {
                Bytes::from(ryu::Buffer::new().format(score).to_string())
            }
            ScoreBound::Excl(score) => {
                Bytes::from(format!("({}", ryu::Buffer::new().format(score)))
            }
        }
    }
}

/// Pivot side for LINSERT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    Before,
    After,
}

impl InsertPosition {
    pub fn as_arg(self) -> &'static str {
        match self {
            InsertPosition::Before => "BEFORE",
            InsertPosition::After => "AFTER",
        }
    }
}
