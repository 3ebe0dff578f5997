// src/commands/sets.rs

//! Set-family command wrappers.

use crate::commands::args::{Command, require_nonempty};
use crate::connection::ConnectionManager;
use crate::errors::Result;
use crate::protocol::reply;
use bytes::Bytes;

/// Set commands, obtained from [`Client::sets`](crate::Client::sets).
pub struct SetCommands<'a> {
    manager: &'a ConnectionManager,
}

impl<'a> SetCommands<'a> {
    pub(crate) fn new(manager: &'a ConnectionManager) -> Self {
        Self { manager }
    }

    /// Adds one member, returning 1 when it was new.
    pub async fn sadd(&self, key: impl AsRef<[u8]>, member: impl AsRef<[u8]>) -> Result<i64> {
        let cmd = Command::new("SADD").key(key)?.arg(member);
        reply::as_int(self.manager.dispatch(cmd).await?)
    }

    /// Removes one member, returning 1 when it was present.
    pub async fn srem(&self, key: impl AsRef<[u8]>, member: impl AsRef<[u8]>) -> Result<i64> {
        let cmd = Command::new("SREM").key(key)?.arg(member);
        reply::as_int(self.manager.dispatch(cmd).await?)
    }

    pub async fn smembers(&self, key: impl AsRef<[u8]>) -> Result<Vec<Bytes>> {
        let cmd = Command::new("SMEMBERS").key(key)?;
        reply::as_bulk_array(self.manager.dispatch(cmd).await?)
    }

    pub async fn sismember(
        &self,
        key: impl AsRef<[u8]>,
        member: impl AsRef<[u8]>,
    ) -> Result<bool> {
        let cmd = Command::new("SISMEMBER").key(key)?.arg(member);
        reply::as_bool(self.manager.dispatch(cmd).await?)
    }

    pub async fn scard(&self, key: impl AsRef<[u8]>) -> Result<i64> {
        let cmd = Command::new("SCARD").key(key)?;
        reply::as_int(self.manager.dispatch(cmd).await?)
    }

    /// Removes and returns a random member.
    pub async fn spop(&self, key: impl AsRef<[u8]>) -> Result<Option<Bytes>> {
        let cmd = Command::new("SPOP").key(key)?;
        reply::as_opt_bulk(self.manager.dispatch(cmd).await?)
    }

    /// Returns `count` random members without removing them. Positive counts
    /// yield distinct members, capped at the set's cardinality; negative
    /// counts yield exactly `|count|` members and may repeat them.
    pub async fn srandmember(&self, key: impl AsRef<[u8]>, count: i64) -> Result<Vec<Bytes>> {
        let cmd = Command::new("SRANDMEMBER").key(key)?.arg_int(count);
        reply::as_bulk_array(self.manager.dispatch(cmd).await?)
    }

    /// Moves `member` between sets. Returns whether the move happened.
    pub async fn smove(
        &self,
        source: impl AsRef<[u8]>,
        destination: impl AsRef<[u8]>,
        member: impl AsRef<[u8]>,
    ) -> Result<bool> {
        let cmd = Command::new("SMOVE").key(source)?.key(destination)?.arg(member);
        reply::as_bool(self.manager.dispatch(cmd).await?)
    }

    /// One incremental scan step. Returns the next cursor (0 when the
    /// iteration is complete) and a batch of members.
    pub async fn sscan(
        &self,
        key: impl AsRef<[u8]>,
        cursor: u64,
        pattern: Option<&str>,
        count: Option<u64>,
    ) -> Result<(u64, Vec<Bytes>)> {
        let mut cmd = Command::new("SSCAN").key(key)?.arg_uint(cursor);
        if let Some(pattern) = pattern {
            cmd = cmd.arg("MATCH").arg(pattern);
        }
        if let Some(count) = count {
            cmd = cmd.arg("COUNT").arg_uint(count);
        }
        reply::as_scan_bulks(self.manager.dispatch(cmd).await?)
    }

    /// Members of the first set that are in none of the others.
    pub async fn sdiff<K: AsRef<[u8]>>(&self, keys: &[K]) -> Result<Vec<Bytes>> {
        require_nonempty(keys, "sdiff")?;
        let mut cmd = Command::new("SDIFF");
        for key in keys {
            cmd = cmd.key(key)?;
        }
        reply::as_bulk_array(self.manager.dispatch(cmd).await?)
    }

    /// [`sdiff`](Self::sdiff) stored into `destination`; returns the stored
    /// cardinality.
    pub async fn sdiffstore<K: AsRef<[u8]>>(
        &self,
        destination: impl AsRef<[u8]>,
        keys: &[K],
    ) -> Result<i64> {
        require_nonempty(keys, "sdiffstore")?;
        let mut cmd = Command::new("SDIFFSTORE").key(destination)?;
        for key in keys {
            cmd = cmd.key(key)?;
        }
        reply::as_int(self.manager.dispatch(cmd).await?)
    }

    /// Members common to all the given sets.
    pub async fn sinter<K: AsRef<[u8]>>(&self, keys: &[K]) -> Result<Vec<Bytes>> {
        require_nonempty(keys, "sinter")?;
        let mut cmd = Command::new("SINTER");
        for key in keys {
            cmd = cmd.key(key)?;
        }
        reply::as_bulk_array(self.manager.dispatch(cmd).await?)
    }

    pub async fn sinterstore<K: AsRef<[u8]>>(
        &self,
        destination: impl AsRef<[u8]>,
        keys: &[K],
    ) -> Result<i64> {
        require_nonempty(keys, "sinterstore")?;
        let mut cmd = Command::new("SINTERSTORE").key(destination)?;
        for key in keys {
            cmd = cmd.key(key)?;
        }
        reply::as_int(self.manager.dispatch(cmd).await?)
    }

    /// Members present in any of the given sets.
    pub async fn sunion<K: AsRef<[u8]>>(&self, keys: &[K]) -> Result<Vec<Bytes>> {
        require_nonempty(keys, "sunion")?;
        let mut cmd = Command::new("SUNION");
        for key in keys {
            cmd = cmd.key(key)?;
        }
        reply::as_bulk_array(self.manager.dispatch(cmd).await?)
    }

    pub async fn sunionstore<K: AsRef<[u8]>>(
        &self,
        destination: impl AsRef<[u8]>,
        keys: &[K],
    ) -> Result<i64> {
        require_nonempty(keys, "sunionstore")?;
        let mut cmd = Command::new("SUNIONSTORE").key(destination)?;
        for key in keys {
            cmd = cmd.key(key)?;
        }
        reply::as_int(self.manager.dispatch(cmd).await?)
    }
}
