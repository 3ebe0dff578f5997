// tests/integration/set_commands_test.rs

//! Integration tests for set commands
//! Tests: SADD, SMEMBERS, SCARD, SISMEMBER, SREM, SPOP, SRANDMEMBER, SMOVE,
//!        SSCAN, SINTER, SUNION, SDIFF, SINTERSTORE, SUNIONSTORE, SDIFFSTORE

use super::test_helpers::TestContext;
use bytes::Bytes;
use lazulite::{Client, LazuliteError};
use std::collections::HashSet;

// ===== Helper Functions =====

/// Set replies are unordered in general, so compare membership.
fn assert_set_equals(actual: &[Bytes], expected: &[&str], message: &str) {
    let actual: HashSet<&[u8]> = actual.iter().map(|b| b.as_ref()).collect();
    let expected: HashSet<&[u8]> = expected.iter().map(|s| s.as_bytes()).collect();
    assert_eq!(actual, expected, "{}", message);
}

async fn seed(client: &Client, key: &str, members: &[&str]) {
    for member in members {
        client.sets().sadd(key, member).await.unwrap();
    }
}

// ===== Basic Membership Tests =====

#[tokio::test]
async fn test_sadd_ignores_duplicates() {
    let ctx = TestContext::new().await;

    assert_eq!(ctx.client.sets().sadd("s", "a").await.unwrap(), 1);
    assert_eq!(ctx.client.sets().sadd("s", "a").await.unwrap(), 0);
    assert_eq!(ctx.client.sets().scard("s").await.unwrap(), 1);
}

#[tokio::test]
async fn test_srem() {
    let ctx = TestContext::new().await;

    seed(&ctx.client, "s", &["a", "b"]).await;
    assert_eq!(ctx.client.sets().srem("s", "a").await.unwrap(), 1);
    assert_eq!(ctx.client.sets().srem("s", "a").await.unwrap(), 0);
    assert_eq!(ctx.client.sets().srem("missing", "a").await.unwrap(), 0);

    let members = ctx.client.sets().smembers("s").await.unwrap();
    assert_set_equals(&members, &["b"], "after srem");
}

#[tokio::test]
async fn test_smembers_missing_key_is_empty() {
    let ctx = TestContext::new().await;

    let members = ctx.client.sets().smembers("missing").await.unwrap();
    assert!(members.is_empty());
}

#[tokio::test]
async fn test_sismember() {
    let ctx = TestContext::new().await;

    seed(&ctx.client, "s", &["here"]).await;
    assert!(ctx.client.sets().sismember("s", "here").await.unwrap());
    assert!(!ctx.client.sets().sismember("s", "gone").await.unwrap());
    assert!(!ctx.client.sets().sismember("missing", "x").await.unwrap());
}

#[tokio::test]
async fn test_scard() {
    let ctx = TestContext::new().await;

    assert_eq!(ctx.client.sets().scard("missing").await.unwrap(), 0);
    seed(&ctx.client, "s", &["a", "b", "c"]).await;
    assert_eq!(ctx.client.sets().scard("s").await.unwrap(), 3);
}

// ===== Random Member Tests =====

#[tokio::test]
async fn test_spop_removes_a_member() {
    let ctx = TestContext::new().await;

    seed(&ctx.client, "s", &["a", "b", "c"]).await;
    let popped = ctx.client.sets().spop("s").await.unwrap().unwrap();
    assert!([&b"a"[..], &b"b"[..], &b"c"[..]].contains(&popped.as_ref()));
    assert_eq!(ctx.client.sets().scard("s").await.unwrap(), 2);
    assert!(!ctx.client.sets().sismember("s", &popped).await.unwrap());

    assert_eq!(ctx.client.sets().spop("missing").await.unwrap(), None);
}

#[tokio::test]
async fn test_srandmember_positive_count_yields_distinct_members() {
    let ctx = TestContext::new().await;

    seed(&ctx.client, "s", &["a", "b", "c"]).await;
    let members = ctx.client.sets().srandmember("s", 2).await.unwrap();
    assert_eq!(members.len(), 2);
    let distinct: HashSet<&[u8]> = members.iter().map(|m| m.as_ref()).collect();
    assert_eq!(distinct.len(), 2);
    for member in &members {
        assert!(ctx.client.sets().sismember("s", member).await.unwrap());
    }

    // The set itself is untouched.
    assert_eq!(ctx.client.sets().scard("s").await.unwrap(), 3);
}

#[tokio::test]
async fn test_srandmember_count_above_cardinality_returns_the_whole_set() {
    let ctx = TestContext::new().await;

    seed(&ctx.client, "s", &["a", "b"]).await;
    let members = ctx.client.sets().srandmember("s", 10).await.unwrap();
    assert_set_equals(&members, &["a", "b"], "count above cardinality");
}

#[tokio::test]
async fn test_srandmember_negative_count_may_repeat_members() {
    let ctx = TestContext::new().await;

    seed(&ctx.client, "s", &["only"]).await;
    let members = ctx.client.sets().srandmember("s", -3).await.unwrap();
    assert_eq!(members, vec![Bytes::from("only"); 3]);

    let members = ctx.client.sets().srandmember("missing", -3).await.unwrap();
    assert!(members.is_empty());
}

#[tokio::test]
async fn test_smove() {
    let ctx = TestContext::new().await;

    seed(&ctx.client, "src", &["a", "b"]).await;
    seed(&ctx.client, "dst", &["c"]).await;

    assert!(ctx.client.sets().smove("src", "dst", "a").await.unwrap());
    assert!(!ctx.client.sets().smove("src", "dst", "not_there").await.unwrap());

    let src = ctx.client.sets().smembers("src").await.unwrap();
    assert_set_equals(&src, &["b"], "source after smove");
    let dst = ctx.client.sets().smembers("dst").await.unwrap();
    assert_set_equals(&dst, &["a", "c"], "destination after smove");
}

// ===== Scan Tests =====

#[tokio::test]
async fn test_sscan_returns_everything_in_one_pass() {
    let ctx = TestContext::new().await;

    seed(&ctx.client, "s", &["one", "two", "three"]).await;
    let (cursor, members) = ctx.client.sets().sscan("s", 0, None, None).await.unwrap();
    assert_eq!(cursor, 0);
    assert_set_equals(&members, &["one", "two", "three"], "full scan");
}

#[tokio::test]
async fn test_sscan_with_match_pattern() {
    let ctx = TestContext::new().await;

    seed(&ctx.client, "s", &["user:1", "user:2", "order:1"]).await;
    let (cursor, members) = ctx
        .client
        .sets()
        .sscan("s", 0, Some("user:*"), Some(10))
        .await
        .unwrap();
    assert_eq!(cursor, 0);
    assert_set_equals(&members, &["user:1", "user:2"], "match scan");
}

// ===== Algebra Tests =====

#[tokio::test]
async fn test_sdiff_sinter_sunion() {
    let ctx = TestContext::new().await;

    seed(&ctx.client, "s1", &["a", "b", "c"]).await;
    seed(&ctx.client, "s2", &["b", "c", "d"]).await;

    let diff = ctx.client.sets().sdiff(&["s1", "s2"]).await.unwrap();
    assert_set_equals(&diff, &["a"], "sdiff");

    let inter = ctx.client.sets().sinter(&["s1", "s2"]).await.unwrap();
    assert_set_equals(&inter, &["b", "c"], "sinter");

    let union = ctx.client.sets().sunion(&["s1", "s2"]).await.unwrap();
    assert_set_equals(&union, &["a", "b", "c", "d"], "sunion");
}

#[tokio::test]
async fn test_set_algebra_with_missing_keys() {
    let ctx = TestContext::new().await;

    seed(&ctx.client, "s1", &["a"]).await;

    let diff = ctx.client.sets().sdiff(&["s1", "missing"]).await.unwrap();
    assert_set_equals(&diff, &["a"], "diff with missing");

    let inter = ctx.client.sets().sinter(&["s1", "missing"]).await.unwrap();
    assert!(inter.is_empty());
}

#[tokio::test]
async fn test_store_variants_write_the_destination() {
    let ctx = TestContext::new().await;

    seed(&ctx.client, "s1", &["a", "b", "c"]).await;
    seed(&ctx.client, "s2", &["b", "c", "d"]).await;

    let n = ctx
        .client
        .sets()
        .sdiffstore("diff_dst", &["s1", "s2"])
        .await
        .unwrap();
    assert_eq!(n, 1);
    let stored = ctx.client.sets().smembers("diff_dst").await.unwrap();
    assert_set_equals(&stored, &["a"], "sdiffstore result");

    let n = ctx
        .client
        .sets()
        .sinterstore("inter_dst", &["s1", "s2"])
        .await
        .unwrap();
    assert_eq!(n, 2);

    let n = ctx
        .client
        .sets()
        .sunionstore("union_dst", &["s1", "s2"])
        .await
        .unwrap();
    assert_eq!(n, 4);
}

#[tokio::test]
async fn test_algebra_rejects_empty_key_list() {
    let ctx = TestContext::new().await;

    let empty: &[&str] = &[];
    let err = ctx.client.sets().sinter(empty).await.unwrap_err();
    assert!(matches!(err, LazuliteError::WrongArgumentCount(_)));

    let err = ctx
        .client
        .sets()
        .sunionstore("dst", empty)
        .await
        .unwrap_err();
    assert!(matches!(err, LazuliteError::WrongArgumentCount(_)));
}

// ===== Type Mismatch Tests =====

#[tokio::test]
async fn test_set_command_on_string_key_is_wrongtype() {
    let ctx = TestContext::new().await;

    ctx.client.strings().set("plain", "value").await.unwrap();
    let err = ctx.client.sets().sadd("plain", "m").await.unwrap_err();
    assert_eq!(err, LazuliteError::WrongType);
}
