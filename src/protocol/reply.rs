// src/protocol/reply.rs

//! Converts reply frames into the shapes command wrappers return, and turns
//! server `-ERR` style frames into typed errors. Every extractor rejects a
//! shape the store would never produce for the command in question.

use crate::errors::{LazuliteError, Result};
use crate::protocol::frame::RespFrame;
use bytes::Bytes;

/// Maps a server error line onto the error taxonomy. Wrong-type and
/// authentication rejections get their own variants so callers can react
/// without string matching; everything else stays a verbatim server error.
pub fn classify_server_error(message: String) -> LazuliteError {
    if message.starts_with("WRONGTYPE") {
        LazuliteError::WrongType
    } else if message.starts_with("NOAUTH")
        || message.starts_with("WRONGPASS")
        || message.starts_with("ERR invalid password")
    {
        LazuliteError::AuthenticationFailed(message)
    } else {
        LazuliteError::Server(message)
    }
}

fn frame_name(frame: &RespFrame) -> &'static str {
    match frame {
        RespFrame::SimpleString(_) => "simple string",
        RespFrame::Error(_) => "error",
        RespFrame::Integer(_) => "integer",
        RespFrame::BulkString(_) => "bulk string",
        RespFrame::Null => "null",
        RespFrame::NullArray => "null array",
        RespFrame::Array(_) => "array",
    }
}

fn unexpected(expected: &str, got: &RespFrame) -> LazuliteError {
    LazuliteError::UnexpectedReply(format!("expected {expected}, got {}", frame_name(got)))
}

/// Fails early when the server answered with an error frame.
fn reject_error(frame: RespFrame) -> Result<RespFrame> {
    match frame {
        RespFrame::Error(message) => Err(classify_server_error(message)),
        other => Ok(other),
    }
}

fn parse_f64(data: &[u8]) -> Result<f64> {
    let s = std::str::from_utf8(data).map_err(|_| LazuliteError::NotAFloat)?;
    Ok(s.parse::<f64>()?)
}

fn parse_u64(data: &[u8]) -> Result<u64> {
    let s = std::str::from_utf8(data).map_err(|_| LazuliteError::NotAnInteger)?;
    Ok(s.parse::<u64>()?)
}

/// `+OK` acknowledgment.
pub fn expect_ok(frame: RespFrame) -> Result<()> {
    match reject_error(frame)? {
        RespFrame::SimpleString(s) if s == "OK" => Ok(()),
        other => Err(unexpected("+OK acknowledgment", &other)),
    }
}

pub fn as_int(frame: RespFrame) -> Result<i64> {
    match reject_error(frame)? {
        RespFrame::Integer(n) => Ok(n),
        other => Err(unexpected("integer reply", &other)),
    }
}

/// Integer reply where the store documents a 0/1 predicate.
pub fn as_bool(frame: RespFrame) -> Result<bool> {
    Ok(as_int(frame)? != 0)
}

/// Integer reply that is null when the queried item is absent (ZRANK).
pub fn as_opt_int(frame: RespFrame) -> Result<Option<i64>> {
    match reject_error(frame)? {
        RespFrame::Integer(n) => Ok(Some(n)),
        RespFrame::Null | RespFrame::NullArray => Ok(None),
        other => Err(unexpected("integer or null reply", &other)),
    }
}

/// Bulk reply carrying a number (INCRBYFLOAT, ZINCRBY).
pub fn as_float(frame: RespFrame) -> Result<f64> {
    match reject_error(frame)? {
        RespFrame::BulkString(data) => parse_f64(&data),
        other => Err(unexpected("bulk float reply", &other)),
    }
}

/// Bulk float that is null when the member is absent (ZSCORE).
pub fn as_opt_float(frame: RespFrame) -> Result<Option<f64>> {
    match reject_error(frame)? {
        RespFrame::BulkString(data) => Ok(Some(parse_f64(&data)?)),
        RespFrame::Null => Ok(None),
        other => Err(unexpected("bulk float or null reply", &other)),
    }
}

/// Bulk reply that may be null (GET, LPOP, SPOP, ...).
pub fn as_opt_bulk(frame: RespFrame) -> Result<Option<Bytes>> {
    match reject_error(frame)? {
        RespFrame::BulkString(data) => Ok(Some(data)),
        RespFrame::Null | RespFrame::NullArray => Ok(None),
        other => Err(unexpected("bulk or null reply", &other)),
    }
}

/// Bulk reply the store guarantees to be present (GETRANGE).
pub fn as_bulk(frame: RespFrame) -> Result<Bytes> {
    match reject_error(frame)? {
        RespFrame::BulkString(data) => Ok(data),
        other => Err(unexpected("bulk reply", &other)),
    }
}

fn elements(frame: RespFrame, expected: &str) -> Result<Vec<RespFrame>> {
    match reject_error(frame)? {
        RespFrame::Array(items) => Ok(items),
        RespFrame::NullArray => Ok(Vec::new()),
        other => Err(unexpected(expected, &other)),
    }
}

/// Array of bulk strings (LRANGE, SMEMBERS, HKEYS, ...).
pub fn as_bulk_array(frame: RespFrame) -> Result<Vec<Bytes>> {
    elements(frame, "array of bulk strings")?
        .into_iter()
        .map(|item| match item {
            RespFrame::BulkString(data) => Ok(data),
            other => Err(unexpected("bulk string element", &other)),
        })
        .collect()
}

/// Array with per-position misses (MGET, HMGET).
pub fn as_opt_bulk_array(frame: RespFrame) -> Result<Vec<Option<Bytes>>> {
    elements(frame, "array of optional bulk strings")?
        .into_iter()
        .map(|item| match item {
            RespFrame::BulkString(data) => Ok(Some(data)),
            RespFrame::Null => Ok(None),
            other => Err(unexpected("bulk string or null element", &other)),
        })
        .collect()
}

/// Flat field/value array (HGETALL).
pub fn as_pairs(frame: RespFrame) -> Result<Vec<(Bytes, Bytes)>> {
    let items = as_bulk_array(frame)?;
    if items.len() % 2 != 0 {
        return Err(LazuliteError::UnexpectedReply(
            "pair array has odd length".to_string(),
        ));
    }
    let mut pairs = Vec::with_capacity(items.len() / 2);
    let mut iter = items.into_iter();
    while let (Some(field), Some(value)) = (iter.next(), iter.next()) {
        pairs.push((field, value));
    }
    Ok(pairs)
}

/// Flat member/score array (WITHSCORES range variants).
pub fn as_scored_pairs(frame: RespFrame) -> Result<Vec<(Bytes, f64)>> {
    let items = as_bulk_array(frame)?;
    if items.len() % 2 != 0 {
        return Err(LazuliteError::UnexpectedReply(
            "scored array has odd length".to_string(),
        ));
    }
    let mut pairs = Vec::with_capacity(items.len() / 2);
    let mut iter = items.into_iter();
    while let (Some(member), Some(score)) = (iter.next(), iter.next()) {
        pairs.push((member, parse_f64(&score)?));
    }
    Ok(pairs)
}

/// Two-element blocking-pop reply, or null when the timeout expired (BLPOP).
pub fn as_popped_pair(frame: RespFrame) -> Result<Option<(Bytes, Bytes)>> {
    match reject_error(frame)? {
        RespFrame::Null | RespFrame::NullArray => Ok(None),
        RespFrame::Array(items) => {
            let mut bulks = items.into_iter().map(|item| match item {
                RespFrame::BulkString(data) => Ok(data),
                other => Err(unexpected("bulk string element", &other)),
            });
            match (bulks.next(), bulks.next(), bulks.next()) {
                (Some(key), Some(value), None) => Ok(Some((key?, value?))),
                _ => Err(LazuliteError::UnexpectedReply(
                    "blocking pop reply is not a two-element array".to_string(),
                )),
            }
        }
        other => Err(unexpected("two-element array or null reply", &other)),
    }
}

/// `[cursor, items]` scan reply, items left raw for the caller to shape.
fn scan_parts(frame: RespFrame) -> Result<(u64, RespFrame)> {
    let mut items = elements(frame, "scan reply")?.into_iter();
    match (items.next(), items.next(), items.next()) {
        (Some(RespFrame::BulkString(cursor)), Some(rest), None) => {
            Ok((parse_u64(&cursor)?, rest))
        }
        _ => Err(LazuliteError::UnexpectedReply(
            "scan reply is not [cursor, items]".to_string(),
        )),
    }
}

/// SSCAN shape: cursor plus members.
pub fn as_scan_bulks(frame: RespFrame) -> Result<(u64, Vec<Bytes>)> {
    let (cursor, items) = scan_parts(frame)?;
    Ok((cursor, as_bulk_array(items)?))
}

/// ZSCAN shape: cursor plus flattened member/score pairs.
pub fn as_scan_scored(frame: RespFrame) -> Result<(u64, Vec<(Bytes, f64)>)> {
    let (cursor, items) = scan_parts(frame)?;
    Ok((cursor, as_scored_pairs(items)?))
}
