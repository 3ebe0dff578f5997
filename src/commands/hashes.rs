// src/commands/hashes.rs

//! Hash-family command wrappers.

use crate::commands::args::{Command, require_nonempty};
use crate::connection::ConnectionManager;
use crate::errors::Result;
use crate::protocol::reply;
use bytes::Bytes;

/// Hash commands, obtained from [`Client::hashes`](crate::Client::hashes).
pub struct HashCommands<'a> {
    manager: &'a ConnectionManager,
}

impl<'a> HashCommands<'a> {
    pub(crate) fn new(manager: &'a ConnectionManager) -> Self {
        Self { manager }
    }

    /// Sets one field. Returns 1 when the field is new, 0 when it was
    /// overwritten.
    pub async fn hset(
        &self,
        key: impl AsRef<[u8]>,
        field: impl AsRef<[u8]>,
        value: impl AsRef<[u8]>,
    ) -> Result<i64> {
        let cmd = Command::new("HSET").key(key)?.arg(field).arg(value);
        reply::as_int(self.manager.dispatch(cmd).await?)
    }

    pub async fn hget(
        &self,
        key: impl AsRef<[u8]>,
        field: impl AsRef<[u8]>,
    ) -> Result<Option<Bytes>> {
        let cmd = Command::new("HGET").key(key)?.arg(field);
        reply::as_opt_bulk(self.manager.dispatch(cmd).await?)
    }

    pub async fn hexists(
        &self,
        key: impl AsRef<[u8]>,
        field: impl AsRef<[u8]>,
    ) -> Result<bool> {
        let cmd = Command::new("HEXISTS").key(key)?.arg(field);
        reply::as_bool(self.manager.dispatch(cmd).await?)
    }

    /// Removes one field, returning how many were removed (0 or 1).
    pub async fn hdel(&self, key: impl AsRef<[u8]>, field: impl AsRef<[u8]>) -> Result<i64> {
        let cmd = Command::new("HDEL").key(key)?.arg(field);
        reply::as_int(self.manager.dispatch(cmd).await?)
    }

    /// Sets every field/value pair in one roundtrip.
    pub async fn hmset<F, V>(&self, key: impl AsRef<[u8]>, pairs: &[(F, V)]) -> Result<()>
    where
        F: AsRef<[u8]>,
        V: AsRef<[u8]>,
    {
        require_nonempty(pairs, "hmset")?;
        let mut cmd = Command::new("HMSET").key(key)?;
        for (field, value) in pairs {
            cmd = cmd.arg(field).arg(value);
        }
        reply::expect_ok(self.manager.dispatch(cmd).await?)
    }

    /// Values for every field, position by position; `None` where a field is
    /// absent.
    pub async fn hmget<F: AsRef<[u8]>>(
        &self,
        key: impl AsRef<[u8]>,
        fields: &[F],
    ) -> Result<Vec<Option<Bytes>>> {
        require_nonempty(fields, "hmget")?;
        let mut cmd = Command::new("HMGET").key(key)?;
        for field in fields {
            cmd = cmd.arg(field);
        }
        reply::as_opt_bulk_array(self.manager.dispatch(cmd).await?)
    }

    pub async fn hgetall(&self, key: impl AsRef<[u8]>) -> Result<Vec<(Bytes, Bytes)>> {
        let cmd = Command::new("HGETALL").key(key)?;
        reply::as_pairs(self.manager.dispatch(cmd).await?)
    }

    pub async fn hkeys(&self, key: impl AsRef<[u8]>) -> Result<Vec<Bytes>> {
        let cmd = Command::new("HKEYS").key(key)?;
        reply::as_bulk_array(self.manager.dispatch(cmd).await?)
    }

    pub async fn hvals(&self, key: impl AsRef<[u8]>) -> Result<Vec<Bytes>> {
        let cmd = Command::new("HVALS").key(key)?;
        reply::as_bulk_array(self.manager.dispatch(cmd).await?)
    }

    /// Sets a field only if it does not exist yet. Returns whether it was set.
    pub async fn hsetnx(
        &self,
        key: impl AsRef<[u8]>,
        field: impl AsRef<[u8]>,
        value: impl AsRef<[u8]>,
    ) -> Result<bool> {
        let cmd = Command::new("HSETNX").key(key)?.arg(field).arg(value);
        reply::as_bool(self.manager.dispatch(cmd).await?)
    }

    pub async fn hlen(&self, key: impl AsRef<[u8]>) -> Result<i64> {
        let cmd = Command::new("HLEN").key(key)?;
        reply::as_int(self.manager.dispatch(cmd).await?)
    }

    /// Increments a field by `delta`, creating it when absent.
    pub async fn hincr_by(
        &self,
        key: impl AsRef<[u8]>,
        field: impl AsRef<[u8]>,
        delta: i64,
    ) -> Result<i64> {
        let cmd = Command::new("HINCRBY").key(key)?.arg(field).arg_int(delta);
        reply::as_int(self.manager.dispatch(cmd).await?)
    }
}
