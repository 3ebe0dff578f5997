// src/commands/lists.rs

//! List-family command wrappers, including the blocking pop variants.

use crate::commands::args::{Command, InsertPosition};
use crate::connection::ConnectionManager;
use crate::errors::Result;
use crate::protocol::reply;
use bytes::Bytes;

/// List commands, obtained from [`Client::lists`](crate::Client::lists).
pub struct ListCommands<'a> {
    manager: &'a ConnectionManager,
}

impl<'a> ListCommands<'a> {
    pub(crate) fn new(manager: &'a ConnectionManager) -> Self {
        Self { manager }
    }

    /// Pushes to the head, returning the list length afterwards.
    pub async fn lpush(&self, key: impl AsRef<[u8]>, value: impl AsRef<[u8]>) -> Result<i64> {
        let cmd = Command::new("LPUSH").key(key)?.arg(value);
        reply::as_int(self.manager.dispatch(cmd).await?)
    }

    /// Pushes to the tail, returning the list length afterwards.
    pub async fn rpush(&self, key: impl AsRef<[u8]>, value: impl AsRef<[u8]>) -> Result<i64> {
        let cmd = Command::new("RPUSH").key(key)?.arg(value);
        reply::as_int(self.manager.dispatch(cmd).await?)
    }

    /// Head push that only succeeds when the list already exists; returns 0
    /// otherwise.
    pub async fn lpushx(&self, key: impl AsRef<[u8]>, value: impl AsRef<[u8]>) -> Result<i64> {
        let cmd = Command::new("LPUSHX").key(key)?.arg(value);
        reply::as_int(self.manager.dispatch(cmd).await?)
    }

    /// Tail push that only succeeds when the list already exists; returns 0
    /// otherwise.
    pub async fn rpushx(&self, key: impl AsRef<[u8]>, value: impl AsRef<[u8]>) -> Result<i64> {
        let cmd = Command::new("RPUSHX").key(key)?.arg(value);
        reply::as_int(self.manager.dispatch(cmd).await?)
    }

    /// Elements between `start` and `stop` inclusive; `(0, -1)` is the whole
    /// list.
    pub async fn lrange(&self, key: impl AsRef<[u8]>, start: i64, stop: i64) -> Result<Vec<Bytes>> {
        let cmd = Command::new("LRANGE").key(key)?.arg_int(start).arg_int(stop);
        reply::as_bulk_array(self.manager.dispatch(cmd).await?)
    }

    pub async fn lpop(&self, key: impl AsRef<[u8]>) -> Result<Option<Bytes>> {
        let cmd = Command::new("LPOP").key(key)?;
        reply::as_opt_bulk(self.manager.dispatch(cmd).await?)
    }

    pub async fn rpop(&self, key: impl AsRef<[u8]>) -> Result<Option<Bytes>> {
        let cmd = Command::new("RPOP").key(key)?;
        reply::as_opt_bulk(self.manager.dispatch(cmd).await?)
    }

    /// Head pop that blocks server-side up to `timeout_secs` (0 waits
    /// forever). Returns the `(key, value)` pair the store reports, or `None`
    /// when the timeout expired. The shared connection is held for the whole
    /// wait.
    pub async fn blpop(
        &self,
        key: impl AsRef<[u8]>,
        timeout_secs: f64,
    ) -> Result<Option<(Bytes, Bytes)>> {
        let cmd = Command::new("BLPOP").key(key)?.arg_float(timeout_secs);
        reply::as_popped_pair(self.manager.dispatch(cmd).await?)
    }

    /// Tail-pop counterpart of [`blpop`](Self::blpop).
    pub async fn brpop(
        &self,
        key: impl AsRef<[u8]>,
        timeout_secs: f64,
    ) -> Result<Option<(Bytes, Bytes)>> {
        let cmd = Command::new("BRPOP").key(key)?.arg_float(timeout_secs);
        reply::as_popped_pair(self.manager.dispatch(cmd).await?)
    }

    /// Atomically moves the tail of `source` to the head of `destination`,
    /// returning the moved element.
    pub async fn rpoplpush(
        &self,
        source: impl AsRef<[u8]>,
        destination: impl AsRef<[u8]>,
    ) -> Result<Option<Bytes>> {
        let cmd = Command::new("RPOPLPUSH").key(source)?.key(destination)?;
        reply::as_opt_bulk(self.manager.dispatch(cmd).await?)
    }

    /// Blocking [`rpoplpush`](Self::rpoplpush); `None` when `timeout_secs`
    /// expired (0 waits forever).
    pub async fn brpoplpush(
        &self,
        source: impl AsRef<[u8]>,
        destination: impl AsRef<[u8]>,
        timeout_secs: f64,
    ) -> Result<Option<Bytes>> {
        let cmd = Command::new("BRPOPLPUSH")
            .key(source)?
            .key(destination)?
            .arg_float(timeout_secs);
        reply::as_opt_bulk(self.manager.dispatch(cmd).await?)
    }

    pub async fn llen(&self, key: impl AsRef<[u8]>) -> Result<i64> {
        let cmd = Command::new("LLEN").key(key)?;
        reply::as_int(self.manager.dispatch(cmd).await?)
    }

    /// Element at `index`; negative indices count from the tail.
    pub async fn lindex(&self, key: impl AsRef<[u8]>, index: i64) -> Result<Option<Bytes>> {
        let cmd = Command::new("LINDEX").key(key)?.arg_int(index);
        reply::as_opt_bulk(self.manager.dispatch(cmd).await?)
    }

    /// Replaces the element at `index`. The store rejects out-of-range
    /// indices and missing keys.
    pub async fn lset(
        &self,
        key: impl AsRef<[u8]>,
        index: i64,
        value: impl AsRef<[u8]>,
    ) -> Result<()> {
        let cmd = Command::new("LSET").key(key)?.arg_int(index).arg(value);
        reply::expect_ok(self.manager.dispatch(cmd).await?)
    }

    /// Inserts `value` before or after the first occurrence of `pivot`.
    /// Returns the new length, or -1 when the pivot was not found.
    pub async fn linsert(
        &self,
        key: impl AsRef<[u8]>,
        position: InsertPosition,
        pivot: impl AsRef<[u8]>,
        value: impl AsRef<[u8]>,
    ) -> Result<i64> {
        let cmd = Command::new("LINSERT")
            .key(key)?
            .arg(position.as_arg())
            .arg(pivot)
            .arg(value);
        reply::as_int(self.manager.dispatch(cmd).await?)
    }

    /// Removes up to `count` occurrences of `value`: positive counts scan
    /// from the head, negative from the tail, zero removes all. Returns how
    /// many were removed.
    pub async fn lrem(
        &self,
        key: impl AsRef<[u8]>,
        count: i64,
        value: impl AsRef<[u8]>,
    ) -> Result<i64> {
        let cmd = Command::new("LREM").key(key)?.arg_int(count).arg(value);
        reply::as_int(self.manager.dispatch(cmd).await?)
    }

    /// Trims the list to the elements between `start` and `stop` inclusive.
    pub async fn ltrim(&self, key: impl AsRef<[u8]>, start: i64, stop: i64) -> Result<()> {
        let cmd = Command::new("LTRIM").key(key)?.arg_int(start).arg_int(stop);
        reply::expect_ok(self.manager.dispatch(cmd).await?)
    }
}
