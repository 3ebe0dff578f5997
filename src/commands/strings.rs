// src/commands/strings.rs

//! String-family command wrappers, including the generic key commands
//! (DEL, EXISTS) the facade groups with them.

use crate::commands::args::{Command, require_nonempty};
use crate::connection::ConnectionManager;
use crate::errors::Result;
use crate::protocol::reply;
use bytes::Bytes;

/// String commands, obtained from [`Client::strings`](crate::Client::strings).
pub struct StringCommands<'a> {
    manager: &'a ConnectionManager,
}

impl<'a> StringCommands<'a> {
    pub(crate) fn new(manager: &'a ConnectionManager) -> Self {
        Self { manager }
    }

    pub async fn get(&self, key: impl AsRef<[u8]>) -> Result<Option<Bytes>> {
        let cmd = Command::new("GET").key(key)?;
        reply::as_opt_bulk(self.manager.dispatch(cmd).await?)
    }

    pub async fn set(&self, key: impl AsRef<[u8]>, value: impl AsRef<[u8]>) -> Result<()> {
        let cmd = Command::new("SET").key(key)?.arg(value);
        reply::expect_ok(self.manager.dispatch(cmd).await?)
    }

    /// Sets `key` with a time-to-live in seconds.
    pub async fn setex(
        &self,
        key: impl AsRef<[u8]>,
        seconds: u64,
        value: impl AsRef<[u8]>,
    ) -> Result<()> {
        let cmd = Command::new("SETEX").key(key)?.arg_uint(seconds).arg(value);
        reply::expect_ok(self.manager.dispatch(cmd).await?)
    }

    /// Sets `key` with a time-to-live in milliseconds.
    pub async fn psetex(
        &self,
        key: impl AsRef<[u8]>,
        milliseconds: u64,
        value: impl AsRef<[u8]>,
    ) -> Result<()> {
        let cmd = Command::new("PSETEX")
            .key(key)?
            .arg_uint(milliseconds)
            .arg(value);
        reply::expect_ok(self.manager.dispatch(cmd).await?)
    }

    /// Sets `key` only if it does not exist yet. Returns whether it was set.
    pub async fn setnx(&self, key: impl AsRef<[u8]>, value: impl AsRef<[u8]>) -> Result<bool> {
        let cmd = Command::new("SETNX").key(key)?.arg(value);
        reply::as_bool(self.manager.dispatch(cmd).await?)
    }

    /// Sets `key` and returns the previous value, if any.
    pub async fn getset(
        &self,
        key: impl AsRef<[u8]>,
        value: impl AsRef<[u8]>,
    ) -> Result<Option<Bytes>> {
        let cmd = Command::new("GETSET").key(key)?.arg(value);
        reply::as_opt_bulk(self.manager.dispatch(cmd).await?)
    }

    /// Overwrites part of the string at `key` starting at `offset`, returning
    /// the resulting length.
    pub async fn setrange(
        &self,
        key: impl AsRef<[u8]>,
        offset: u64,
        value: impl AsRef<[u8]>,
    ) -> Result<i64> {
        let cmd = Command::new("SETRANGE").key(key)?.arg_uint(offset).arg(value);
        reply::as_int(self.manager.dispatch(cmd).await?)
    }

    /// Substring of `key` between `start` and `end` inclusive; negative
    /// offsets count from the end.
    pub async fn getrange(&self, key: impl AsRef<[u8]>, start: i64, end: i64) -> Result<Bytes> {
        let cmd = Command::new("GETRANGE").key(key)?.arg_int(start).arg_int(end);
        reply::as_bulk(self.manager.dispatch(cmd).await?)
    }

    /// Sets every key/value pair in one roundtrip.
    pub async fn mset<K, V>(&self, pairs: &[(K, V)]) -> Result<()>
    where
        K: AsRef<[u8]>,
        V: AsRef<[u8]>,
    {
        require_nonempty(pairs, "mset")?;
        let mut cmd = Command::new("MSET");
        for (key, value) in pairs {
            cmd = cmd.key(key)?.arg(value);
        }
        reply::expect_ok(self.manager.dispatch(cmd).await?)
    }

    /// Like [`mset`](Self::mset) but refuses to overwrite: all pairs are set
    /// or none is. Returns whether the set happened.
    pub async fn msetnx<K, V>(&self, pairs: &[(K, V)]) -> Result<bool>
    where
        K: AsRef<[u8]>,
        V: AsRef<[u8]>,
    {
        require_nonempty(pairs, "msetnx")?;
        let mut cmd = Command::new("MSETNX");
        for (key, value) in pairs {
            cmd = cmd.key(key)?.arg(value);
        }
        reply::as_bool(self.manager.dispatch(cmd).await?)
    }

    /// Values for every key, position by position; `None` where a key is
    /// absent or holds a non-string.
    pub async fn mget<K: AsRef<[u8]>>(&self, keys: &[K]) -> Result<Vec<Option<Bytes>>> {
        require_nonempty(keys, "mget")?;
        let mut cmd = Command::new("MGET");
        for key in keys {
            cmd = cmd.key(key)?;
        }
        reply::as_opt_bulk_array(self.manager.dispatch(cmd).await?)
    }

    pub async fn strlen(&self, key: impl AsRef<[u8]>) -> Result<i64> {
        let cmd = Command::new("STRLEN").key(key)?;
        reply::as_int(self.manager.dispatch(cmd).await?)
    }

    /// Increments `key` by one, creating it as 1 when absent.
    pub async fn incr(&self, key: impl AsRef<[u8]>) -> Result<i64> {
        let cmd = Command::new("INCR").key(key)?;
        reply::as_int(self.manager.dispatch(cmd).await?)
    }

    /// Increments `key` by `delta`. A delta of exactly 1 issues the plain
    /// one-argument INCR.
    pub async fn incr_by(&self, key: impl AsRef<[u8]>, delta: i64) -> Result<i64> {
        let cmd = if delta == 1 {
            Command::new("INCR").key(key)?
        } else {
            Command::new("INCRBY").key(key)?.arg_int(delta)
        };
        reply::as_int(self.manager.dispatch(cmd).await?)
    }

    pub async fn incr_by_float(&self, key: impl AsRef<[u8]>, delta: f64) -> Result<f64> {
        let cmd = Command::new("INCRBYFLOAT").key(key)?.arg_float(delta);
        reply::as_float(self.manager.dispatch(cmd).await?)
    }

    /// Decrements `key` by one, creating it as -1 when absent.
    pub async fn decr(&self, key: impl AsRef<[u8]>) -> Result<i64> {
        let cmd = Command::new("DECR").key(key)?;
        reply::as_int(self.manager.dispatch(cmd).await?)
    }

    /// Decrements `key` by `delta`. A delta of exactly 1 issues the plain
    /// one-argument DECR.
    pub async fn decr_by(&self, key: impl AsRef<[u8]>, delta: i64) -> Result<i64> {
        let cmd = if delta == 1 {
            Command::new("DECR").key(key)?
        } else {
            Command::new("DECRBY").key(key)?.arg_int(delta)
        };
        reply::as_int(self.manager.dispatch(cmd).await?)
    }

    /// Appends to the string at `key`, returning the resulting length.
    pub async fn append(&self, key: impl AsRef<[u8]>, value: impl AsRef<[u8]>) -> Result<i64> {
        let cmd = Command::new("APPEND").key(key)?.arg(value);
        reply::as_int(self.manager.dispatch(cmd).await?)
    }

    /// Deletes the given keys, returning how many existed.
    pub async fn del<K: AsRef<[u8]>>(&self, keys: &[K]) -> Result<i64> {
        require_nonempty(keys, "del")?;
        let mut cmd = Command::new("DEL");
        for key in keys {
            cmd = cmd.key(key)?;
        }
        reply::as_int(self.manager.dispatch(cmd).await?)
    }

    pub async fn exists(&self, key: impl AsRef<[u8]>) -> Result<bool> {
        let cmd = Command::new("EXISTS").key(key)?;
        reply::as_bool(self.manager.dispatch(cmd).await?)
    }
}
