// src/protocol/frame.rs

//! RESP (REdis Serialization Protocol) frames and the `Encoder`/`Decoder`
//! pair the client uses on its TCP stream. Requests are arrays of bulk
//! strings; replies can be any frame kind, including nested arrays.

use crate::errors::LazuliteError;
use bytes::{Buf, Bytes, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

const CRLF: &[u8] = b"\r\n";
const CRLF_LEN: usize = 2;

// Limits on what we accept from the wire. A reply exceeding these is treated
// as a protocol violation rather than buffered indefinitely.
const MAX_BULK_LEN: usize = 512 * 1024 * 1024; // the store's own bulk cap
const MAX_ARRAY_ELEMENTS: usize = 1_024 * 1_024;
const MAX_PARSE_DEPTH: usize = 64;

/// A single RESP frame, request or reply side.
#[derive(Debug, Clone, PartialEq)]
pub enum RespFrame {
    SimpleString(String),
    Error(String),
    Integer(i64),
    BulkString(Bytes),
    Null,
    NullArray,
    Array(Vec<RespFrame>),
}

impl RespFrame {
    /// Bulk string frame from any byte-ish value.
    pub fn bulk(data: impl Into<Bytes>) -> Self {
        RespFrame::BulkString(data.into())
    }

    /// The `+OK` acknowledgment most write commands reply with.
    pub fn ok() -> Self {
        RespFrame::SimpleString("OK".to_string())
    }
}

/// Stateless codec turning `RespFrame`s into wire bytes and back.
/// Decoding is incremental: a partial frame yields `Ok(None)` so the framed
/// reader waits for more input.
#[derive(Debug, Default)]
pub struct RespCodec;

impl Encoder<RespFrame> for RespCodec {
    type Error = LazuliteError;

    fn encode(&mut self, item: RespFrame, dst: &mut BytesMut) -> Result<(), Self::Error> {
        match item {
            RespFrame::SimpleString(s) => {
                dst.extend_from_slice(b"+");
                dst.extend_from_slice(s.as_bytes());
                dst.extend_from_slice(CRLF);
            }
            RespFrame::Error(s) => {
                dst.extend_from_slice(b"-");
                dst.extend_from_slice(s.as_bytes());
                dst.extend_from_slice(CRLF);
            }
            RespFrame::Integer(i) => {
                dst.extend_from_slice(b":");
                dst.extend_from_slice(itoa::Buffer::new().format(i).as_bytes());
                dst.extend_from_slice(CRLF);
            }
            RespFrame::BulkString(data) => {
                dst.extend_from_slice(b"$");
                dst.extend_from_slice(itoa::Buffer::new().format(data.len()).as_bytes());
                dst.extend_from_slice(CRLF);
                dst.extend_from_slice(&data);
                dst.extend_from_slice(CRLF);
            }
            RespFrame::Null => dst.extend_from_slice(b"$-1\r\n"),
            RespFrame::NullArray => dst.extend_from_slice(b"*-1\r\n"),
            RespFrame::Array(items) => {
                dst.extend_from_slice(b"*");
                dst.extend_from_slice(itoa::Buffer::new().format(items.len()).as_bytes());
                dst.extend_from_slice(CRLF);
                for item in items {
                    self.encode(item, dst)?;
                }
            }
        }
        Ok(())
    }
}

impl Decoder for RespCodec {
    type Item = RespFrame;
    type Error = LazuliteError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if src.is_empty() {
            return Ok(None);
        }

        let mut input = &src[..];
        match parse_frame(&mut input, 0) {
            Ok(frame) => {
                let consumed = src.len() - input.len();
                src.advance(consumed);
                Ok(Some(frame))
            }
            Err(LazuliteError::IncompleteData) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Parses one frame from `input`, advancing the slice past the consumed
/// bytes. `IncompleteData` means the caller should wait for more input.
fn parse_frame(input: &mut &[u8], depth: usize) -> Result<RespFrame, LazuliteError> {
    if depth > MAX_PARSE_DEPTH {
        return Err(LazuliteError::Protocol(
            "reply nesting exceeds depth limit".to_string(),
        ));
    }

    let Some(kind) = input.first().copied() else {
        return Err(LazuliteError::IncompleteData);
    };
    *input = &input[1..];

    match kind {
        b'+' => Ok(RespFrame::SimpleString(
            String::from_utf8_lossy(read_line(input)?).to_string(),
        )),
        b'-' => Ok(RespFrame::Error(
            String::from_utf8_lossy(read_line(input)?).to_string(),
        )),
        b':' => {
            let line = read_line(input)?;
            let value = std::str::from_utf8(line)
                .ok()
                .and_then(|s| s.parse::<i64>().ok())
                .ok_or_else(|| LazuliteError::Protocol("malformed integer reply".to_string()))?;
            Ok(RespFrame::Integer(value))
        }
        b'$' => parse_bulk(input),
        b'*' => parse_array(input, depth),
        other => Err(LazuliteError::Protocol(format!(
            "unknown frame type byte 0x{other:02x}"
        ))),
    }
}

/// Returns the bytes up to the next CRLF and advances past it.
fn read_line<'a>(input: &mut &'a [u8]) -> Result<&'a [u8], LazuliteError> {
    let pos = input
        .windows(CRLF_LEN)
        .position(|window| window == CRLF)
        .ok_or(LazuliteError::IncompleteData)?;
    let line = &input[..pos];
    *input = &input[pos + CRLF_LEN..];
    Ok(line)
}

/// Parses the signed length header shared by bulk strings and arrays.
/// `-1` marks the null variants.
fn read_length(input: &mut &[u8], what: &str) -> Result<isize, LazuliteError> {
    let line = read_line(input)?;
    std::str::from_utf8(line)
        .ok()
        .and_then(|s| s.parse::<isize>().ok())
        .ok_or_else(|| LazuliteError::Protocol(format!("malformed {what} length")))
}

fn parse_bulk(input: &mut &[u8]) -> Result<RespFrame, LazuliteError> {
    let len = read_length(input, "bulk string")?;
    if len == -1 {
        return Ok(RespFrame::Null);
    }
    let len = usize::try_from(len)
        .map_err(|_| LazuliteError::Protocol("negative bulk string length".to_string()))?;
    if len > MAX_BULK_LEN {
        return Err(LazuliteError::Protocol(
            "bulk string exceeds size limit".to_string(),
        ));
    }

    if input.len() < len + CRLF_LEN {
        return Err(LazuliteError::IncompleteData);
    }
    if &input[len..len + CRLF_LEN] != CRLF {
        return Err(LazuliteError::Protocol(
            "bulk string missing CRLF terminator".to_string(),
        ));
    }

    let data = Bytes::copy_from_slice(&input[..len]);
    *input = &input[len + CRLF_LEN..];
    Ok(RespFrame::BulkString(data))
}

fn parse_array(input: &mut &[u8], depth: usize) -> Result<RespFrame, LazuliteError> {
    let len = read_length(input, "array")?;
    if len == -1 {
        return Ok(RespFrame::NullArray);
    }
    let len = usize::try_from(len)
        .map_err(|_| LazuliteError::Protocol("negative array length".to_string()))?;
    if len > MAX_ARRAY_ELEMENTS {
        return Err(LazuliteError::Protocol(
            "array exceeds element limit".to_string(),
        ));
    }

    let mut items = Vec::with_capacity(len);
    for _ in 0..len {
        items.push(parse_frame(input, depth + 1)?);
    }
    Ok(RespFrame::Array(items))
}
