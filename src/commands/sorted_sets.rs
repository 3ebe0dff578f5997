// src/commands/sorted_sets.rs

//! Sorted-set-family command wrappers. Rank ranges take plain indices;
//! score ranges take [`ScoreBound`]s in the store's boundary grammar.

use crate::commands::args::{Command, ScoreBound, require_nonempty};
use crate::connection::ConnectionManager;
use crate::errors::Result;
use crate::protocol::reply;
use bytes::Bytes;

/// Sorted-set commands, obtained from
/// [`Client::sorted_sets`](crate::Client::sorted_sets).
pub struct SortedSetCommands<'a> {
    manager: &'a ConnectionManager,
}

impl<'a> SortedSetCommands<'a> {
    pub(crate) fn new(manager: &'a ConnectionManager) -> Self {
        Self { manager }
    }

    /// Adds every `(score, member)` entry, returning how many members were
    /// newly added.
    pub async fn zadd<M: AsRef<[u8]>>(
        &self,
        key: impl AsRef<[u8]>,
        entries: &[(f64, M)],
    ) -> Result<i64> {
        require_nonempty(entries, "zadd")?;
        let mut cmd = Command::new("ZADD").key(key)?;
        for (score, member) in entries {
            cmd = cmd.arg_float(*score).arg(member);
        }
        reply::as_int(self.manager.dispatch(cmd).await?)
    }

    /// Removes the given members, returning how many were present.
    pub async fn zrem<M: AsRef<[u8]>>(
        &self,
        key: impl AsRef<[u8]>,
        members: &[M],
    ) -> Result<i64> {
        require_nonempty(members, "zrem")?;
        let mut cmd = Command::new("ZREM").key(key)?;
        for member in members {
            cmd = cmd.arg(member);
        }
        reply::as_int(self.manager.dispatch(cmd).await?)
    }

    /// Members between rank `start` and `stop` inclusive, lowest scores
    /// first; `(0, -1)` is the whole set.
    pub async fn zrange(&self, key: impl AsRef<[u8]>, start: i64, stop: i64) -> Result<Vec<Bytes>> {
        let cmd = Command::new("ZRANGE").key(key)?.arg_int(start).arg_int(stop);
        reply::as_bulk_array(self.manager.dispatch(cmd).await?)
    }

    pub async fn zrange_with_scores(
        &self,
        key: impl AsRef<[u8]>,
        start: i64,
        stop: i64,
    ) -> Result<Vec<(Bytes, f64)>> {
        let cmd = Command::new("ZRANGE")
            .key(key)?
            .arg_int(start)
            .arg_int(stop)
            .arg("WITHSCORES");
        reply::as_scored_pairs(self.manager.dispatch(cmd).await?)
    }

    /// Like [`zrange`](Self::zrange) with highest scores first.
    pub async fn zrevrange(
        &self,
        key: impl AsRef<[u8]>,
        start: i64,
        stop: i64,
    ) -> Result<Vec<Bytes>> {
        let cmd = Command::new("ZREVRANGE").key(key)?.arg_int(start).arg_int(stop);
        reply::as_bulk_array(self.manager.dispatch(cmd).await?)
    }

    pub async fn zrevrange_with_scores(
        &self,
        key: impl AsRef<[u8]>,
        start: i64,
        stop: i64,
    ) -> Result<Vec<(Bytes, f64)>> {
        let cmd = Command::new("ZREVRANGE")
            .key(key)?
            .arg_int(start)
            .arg_int(stop)
            .arg("WITHSCORES");
        reply::as_scored_pairs(self.manager.dispatch(cmd).await?)
    }

    /// Members with scores between `min` and `max`, lowest first.
    pub async fn zrange_by_score(
        &self,
        key: impl AsRef<[u8]>,
        min: ScoreBound,
        max: ScoreBound,
    ) -> Result<Vec<Bytes>> {
        let cmd = Command::new("ZRANGEBYSCORE")
            .key(key)?
            .arg_bound(min)
            .arg_bound(max);
        reply::as_bulk_array(self.manager.dispatch(cmd).await?)
    }

    pub async fn zrange_by_score_with_scores(
        &self,
        key: impl AsRef<[u8]>,
        min: ScoreBound,
        max: ScoreBound,
    ) -> Result<Vec<(Bytes, f64)>> {
        let cmd = Command::new("ZRANGEBYSCORE")
            .key(key)?
            .arg_bound(min)
            .arg_bound(max)
            .arg("WITHSCORES");
        reply::as_scored_pairs(self.manager.dispatch(cmd).await?)
    }

    /// Members with scores between `max` and `min`, highest first. Note the
    /// store takes the bounds in max-then-min order here.
    pub async fn zrevrange_by_score(
        &self,
        key: impl AsRef<[u8]>,
        max: ScoreBound,
        min: ScoreBound,
    ) -> Result<Vec<Bytes>> {
        let cmd = Command::new("ZREVRANGEBYSCORE")
            .key(key)?
            .arg_bound(max)
            .arg_bound(min);
        reply::as_bulk_array(self.manager.dispatch(cmd).await?)
    }

    pub async fn zrevrange_by_score_with_scores(
        &self,
        key: impl AsRef<[u8]>,
        max: ScoreBound,
        min: ScoreBound,
    ) -> Result<Vec<(Bytes, f64)>> {
        let cmd = Command::new("ZREVRANGEBYSCORE")
            .key(key)?
            .arg_bound(max)
            .arg_bound(min)
            .arg("WITHSCORES");
        reply::as_scored_pairs(self.manager.dispatch(cmd).await?)
    }

    /// One incremental scan step. Returns the next cursor (0 when the
    /// iteration is complete) and a batch of `(member, score)` pairs.
    pub async fn zscan(
        &self,
        key: impl AsRef<[u8]>,
        cursor: u64,
        pattern: Option<&str>,
        count: Option<u64>,
    ) -> Result<(u64, Vec<(Bytes, f64)>)> {
        let mut cmd = Command::new("ZSCAN").key(key)?.arg_uint(cursor);
        if let Some(pattern) = pattern {
            cmd = cmd.arg("MATCH").arg(pattern);
        }
        if let Some(count) = count {
            cmd = cmd.arg("COUNT").arg_uint(count);
        }
        reply::as_scan_scored(self.manager.dispatch(cmd).await?)
    }

    pub async fn zcard(&self, key: impl AsRef<[u8]>) -> Result<i64> {
        let cmd = Command::new("ZCARD").key(key)?;
        reply::as_int(self.manager.dispatch(cmd).await?)
    }

    /// How many members have scores between `min` and `max`.
    pub async fn zcount(
        &self,
        key: impl AsRef<[u8]>,
        min: ScoreBound,
        max: ScoreBound,
    ) -> Result<i64> {
        let cmd = Command::new("ZCOUNT").key(key)?.arg_bound(min).arg_bound(max);
        reply::as_int(self.manager.dispatch(cmd).await?)
    }

    /// Score of `member`, or `None` when it is not in the set.
    pub async fn zscore(
        &self,
        key: impl AsRef<[u8]>,
        member: impl AsRef<[u8]>,
    ) -> Result<Option<f64>> {
        let cmd = Command::new("ZSCORE").key(key)?.arg(member);
        reply::as_opt_float(self.manager.dispatch(cmd).await?)
    }

    /// Rank of `member` with lowest score at rank 0, or `None` when absent.
    pub async fn zrank(
        &self,
        key: impl AsRef<[u8]>,
        member: impl AsRef<[u8]>,
    ) -> Result<Option<i64>> {
        let cmd = Command::new("ZRANK").key(key)?.arg(member);
        reply::as_opt_int(self.manager.dispatch(cmd).await?)
    }

    /// Rank counting from the highest score down.
    pub async fn zrevrank(
        &self,
        key: impl AsRef<[u8]>,
        member: impl AsRef<[u8]>,
    ) -> Result<Option<i64>> {
        let cmd = Command::new("ZREVRANK").key(key)?.arg(member);
        reply::as_opt_int(self.manager.dispatch(cmd).await?)
    }

    /// Removes members ranked between `start` and `stop` inclusive, returning
    /// how many were removed.
    pub async fn zrem_range_by_rank(
        &self,
        key: impl AsRef<[u8]>,
        start: i64,
        stop: i64,
    ) -> Result<i64> {
        let cmd = Command::new("ZREMRANGEBYRANK")
            .key(key)?
            .arg_int(start)
            .arg_int(stop);
        reply::as_int(self.manager.dispatch(cmd).await?)
    }

    /// Removes members with scores between `min` and `max`, returning how
    /// many were removed.
    pub async fn zrem_range_by_score(
        &self,
        key: impl AsRef<[u8]>,
        min: ScoreBound,
        max: ScoreBound,
    ) -> Result<i64> {
        let cmd = Command::new("ZREMRANGEBYSCORE")
            .key(key)?
            .arg_bound(min)
            .arg_bound(max);
        reply::as_int(self.manager.dispatch(cmd).await?)
    }

    /// Increments the score of `member` by `delta`, returning the new score.
    pub async fn zincr_by(
        &self,
        key: impl AsRef<[u8]>,
        delta: f64,
        member: impl AsRef<[u8]>,
    ) -> Result<f64> {
        let cmd = Command::new("ZINCRBY").key(key)?.arg_float(delta).arg(member);
        reply::as_float(self.manager.dispatch(cmd).await?)
    }

    /// Intersection of the source sets stored into `destination`; returns the
    /// stored cardinality.
    pub async fn zinterstore<K: AsRef<[u8]>>(
        &self,
        destination: impl AsRef<[u8]>,
        keys: &[K],
    ) -> Result<i64> {
        require_nonempty(keys, "zinterstore")?;
        let mut cmd = Command::new("ZINTERSTORE")
            .key(destination)?
            .arg_uint(keys.len() as u64);
        for key in keys {
            cmd = cmd.key(key)?;
        }
        reply::as_int(self.manager.dispatch(cmd).await?)
    }

    /// Union counterpart of [`zinterstore`](Self::zinterstore).
    pub async fn zunionstore<K: AsRef<[u8]>>(
        &self,
        destination: impl AsRef<[u8]>,
        keys: &[K],
    ) -> Result<i64> {
        require_nonempty(keys, "zunionstore")?;
        let mut cmd = Command::new("ZUNIONSTORE")
            .key(destination)?
            .arg_uint(keys.len() as u64);
        for key in keys {
            cmd = cmd.key(key)?;
        }
        reply::as_int(self.manager.dispatch(cmd).await?)
    }
}
