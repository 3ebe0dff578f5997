// tests/integration/string_commands_test.rs

//! Integration tests for string commands
//! Tests: SET, GET, DEL, APPEND, STRLEN, GETRANGE, SETRANGE, INCR, DECR, etc.

use super::fixtures::*;
use super::test_helpers::TestContext;
use bytes::Bytes;
use lazulite::LazuliteError;

// ===== Basic SET/GET Tests =====

#[tokio::test]
async fn test_set_get_basic() {
    let ctx = TestContext::new().await;

    ctx.client.strings().set("mykey", "myvalue").await.unwrap();

    let result = ctx.client.strings().get("mykey").await.unwrap();
    assert_eq!(result, Some(Bytes::from("myvalue")));
}

#[tokio::test]
async fn test_get_nonexistent_key() {
    let ctx = TestContext::new().await;

    let result = ctx.client.strings().get("nonexistent").await.unwrap();
    assert_eq!(result, None);
}

#[tokio::test]
async fn test_set_overwrite() {
    let ctx = TestContext::new().await;

    ctx.client.strings().set(TEST_KEY1, TEST_VALUE1).await.unwrap();
    ctx.client.strings().set(TEST_KEY1, TEST_VALUE2).await.unwrap();

    let result = ctx.client.strings().get(TEST_KEY1).await.unwrap();
    assert_eq!(result, Some(Bytes::from(TEST_VALUE2)));
}

#[tokio::test]
async fn test_set_get_empty_string() {
    let ctx = TestContext::new().await;

    ctx.client
        .strings()
        .set("empty_key", patterns::EMPTY_STR)
        .await
        .unwrap();
    let result = ctx.client.strings().get("empty_key").await.unwrap();
    assert_eq!(result, Some(Bytes::new()));
}

#[tokio::test]
async fn test_set_get_unicode() {
    let ctx = TestContext::new().await;

    ctx.client
        .strings()
        .set("unicode_key", patterns::UNICODE_STR)
        .await
        .unwrap();

    let result = ctx.client.strings().get("unicode_key").await.unwrap();
    assert_eq!(result, Some(Bytes::from(patterns::UNICODE_STR)));
}

#[tokio::test]
async fn test_set_get_binary_data() {
    let ctx = TestContext::new().await;

    // Binary data with null bytes survives the wire untouched.
    let binary_data = vec![0x00, 0x01, 0xFF, 0x00, 0xAB];
    ctx.client
        .strings()
        .set("binary_key", &binary_data)
        .await
        .unwrap();

    let result = ctx.client.strings().get("binary_key").await.unwrap();
    assert_eq!(result, Some(Bytes::from(binary_data)));
}

#[tokio::test]
async fn test_set_get_large_value() {
    let ctx = TestContext::new().await;

    let large = patterns::large_text_1kb();
    ctx.client.strings().set("large_key", &large).await.unwrap();

    let result = ctx.client.strings().get("large_key").await.unwrap();
    assert_eq!(result, Some(Bytes::from(large)));
}

#[tokio::test]
async fn test_empty_key_is_rejected_client_side() {
    let ctx = TestContext::new().await;

    let err = ctx.client.strings().set("", "value").await.unwrap_err();
    assert_eq!(err, LazuliteError::EmptyKey);
}

// ===== Conditional and Expiring Set Tests =====

#[tokio::test]
async fn test_setnx_only_sets_missing_keys() {
    let ctx = TestContext::new().await;

    assert!(ctx.client.strings().setnx("nx_key", "first").await.unwrap());
    assert!(!ctx.client.strings().setnx("nx_key", "second").await.unwrap());

    let result = ctx.client.strings().get("nx_key").await.unwrap();
    assert_eq!(result, Some(Bytes::from("first")));
}

#[tokio::test]
async fn test_setex_stores_the_value() {
    let ctx = TestContext::new().await;

    ctx.client
        .strings()
        .setex("ttl_key", 60, "expiring")
        .await
        .unwrap();
    let result = ctx.client.strings().get("ttl_key").await.unwrap();
    assert_eq!(result, Some(Bytes::from("expiring")));
}

#[tokio::test]
async fn test_setex_zero_seconds_is_a_server_error() {
    let ctx = TestContext::new().await;

    let err = ctx
        .client
        .strings()
        .setex("ttl_key", 0, "never")
        .await
        .unwrap_err();
    assert!(matches!(err, LazuliteError::Server(_)));
}

#[tokio::test]
async fn test_psetex_stores_the_value() {
    let ctx = TestContext::new().await;

    ctx.client
        .strings()
        .psetex("pttl_key", 60_000, "expiring")
        .await
        .unwrap();
    let result = ctx.client.strings().get("pttl_key").await.unwrap();
    assert_eq!(result, Some(Bytes::from("expiring")));
}

#[tokio::test]
async fn test_getset_returns_previous_value() {
    let ctx = TestContext::new().await;

    let before = ctx.client.strings().getset("swap", "one").await.unwrap();
    assert_eq!(before, None);

    let before = ctx.client.strings().getset("swap", "two").await.unwrap();
    assert_eq!(before, Some(Bytes::from("one")));
    assert_eq!(
        ctx.client.strings().get("swap").await.unwrap(),
        Some(Bytes::from("two"))
    );
}

// ===== Range Tests =====

#[tokio::test]
async fn test_setrange_patches_and_pads() {
    let ctx = TestContext::new().await;

    ctx.client.strings().set("range_key", "Hello World").await.unwrap();
    let len = ctx
        .client
        .strings()
        .setrange("range_key", 6, "Rust!")
        .await
        .unwrap();
    assert_eq!(len, 11);
    assert_eq!(
        ctx.client.strings().get("range_key").await.unwrap(),
        Some(Bytes::from("Hello Rust!"))
    );

    // Writing past the end zero-pads the gap.
    let len = ctx
        .client
        .strings()
        .setrange("padded", 3, "abc")
        .await
        .unwrap();
    assert_eq!(len, 6);
    assert_eq!(
        ctx.client.strings().get("padded").await.unwrap(),
        Some(Bytes::from(&b"\x00\x00\x00abc"[..]))
    );
}

#[tokio::test]
async fn test_getrange_supports_negative_indices() {
    let ctx = TestContext::new().await;

    ctx.client.strings().set("range_key", "This is a string").await.unwrap();

    let slice = ctx.client.strings().getrange("range_key", 0, 3).await.unwrap();
    assert_eq!(slice, Bytes::from("This"));

    let slice = ctx.client.strings().getrange("range_key", -6, -1).await.unwrap();
    assert_eq!(slice, Bytes::from("string"));

    let slice = ctx.client.strings().getrange("range_key", 0, -1).await.unwrap();
    assert_eq!(slice, Bytes::from("This is a string"));

    let slice = ctx.client.strings().getrange("missing", 0, -1).await.unwrap();
    assert_eq!(slice, Bytes::new());
}

// ===== Multi-Key Tests =====

#[tokio::test]
async fn test_mset_mget_roundtrip_with_missing_key() {
    let ctx = TestContext::new().await;

    ctx.client
        .strings()
        .mset(&[(TEST_KEY1, TEST_VALUE1), (TEST_KEY2, TEST_VALUE2)])
        .await
        .unwrap();

    let values = ctx
        .client
        .strings()
        .mget(&[TEST_KEY1, TEST_KEY3, TEST_KEY2])
        .await
        .unwrap();
    assert_eq!(
        values,
        vec![
            Some(Bytes::from(TEST_VALUE1)),
            None,
            Some(Bytes::from(TEST_VALUE2)),
        ]
    );
}

#[tokio::test]
async fn test_msetnx_is_all_or_nothing() {
    let ctx = TestContext::new().await;

    assert!(
        ctx.client
            .strings()
            .msetnx(&[("m1", "a"), ("m2", "b")])
            .await
            .unwrap()
    );

    // m2 already exists, so nothing is written.
    assert!(
        !ctx.client
            .strings()
            .msetnx(&[("m2", "changed"), ("m3", "c")])
            .await
            .unwrap()
    );
    assert_eq!(
        ctx.client.strings().get("m2").await.unwrap(),
        Some(Bytes::from("b"))
    );
    assert_eq!(ctx.client.strings().get("m3").await.unwrap(), None);
}

#[tokio::test]
async fn test_mset_rejects_empty_pair_list() {
    let ctx = TestContext::new().await;

    let empty: &[(&str, &str)] = &[];
    let err = ctx.client.strings().mset(empty).await.unwrap_err();
    assert!(matches!(err, LazuliteError::WrongArgumentCount(_)));
}

#[tokio::test]
async fn test_del_counts_removed_keys() {
    let ctx = TestContext::new().await;

    ctx.client.strings().set(TEST_KEY1, TEST_VALUE1).await.unwrap();
    ctx.client.strings().set(TEST_KEY2, TEST_VALUE2).await.unwrap();

    let removed = ctx
        .client
        .strings()
        .del(&[TEST_KEY1, TEST_KEY2, "never_existed"])
        .await
        .unwrap();
    assert_eq!(removed, 2);
    assert_eq!(ctx.client.strings().get(TEST_KEY1).await.unwrap(), None);
}

#[tokio::test]
async fn test_del_rejects_empty_key_list() {
    let ctx = TestContext::new().await;

    let empty: &[&str] = &[];
    let err = ctx.client.strings().del(empty).await.unwrap_err();
    assert!(matches!(err, LazuliteError::WrongArgumentCount(_)));
}

#[tokio::test]
async fn test_exists() {
    let ctx = TestContext::new().await;

    assert!(!ctx.client.strings().exists("ghost").await.unwrap());
    ctx.client.strings().set("ghost", "boo").await.unwrap();
    assert!(ctx.client.strings().exists("ghost").await.unwrap());
}

// ===== Counter Tests =====

#[tokio::test]
async fn test_incr_creates_missing_key_at_one() {
    let ctx = TestContext::new().await;

    let value = ctx.client.strings().incr("counter").await.unwrap();
    assert_eq!(value, 1);

    let value = ctx.client.strings().incr("counter").await.unwrap();
    assert_eq!(value, 2);
}

#[tokio::test]
async fn test_incr_by_and_decr_by() {
    let ctx = TestContext::new().await;

    assert_eq!(ctx.client.strings().incr_by("n", 5).await.unwrap(), 5);
    assert_eq!(ctx.client.strings().incr_by("n", 10).await.unwrap(), 15);
    assert_eq!(ctx.client.strings().decr_by("n", 3).await.unwrap(), 12);
    assert_eq!(ctx.client.strings().decr("n").await.unwrap(), 11);

    // Delta of one routes through the plain single-step command.
    assert_eq!(ctx.client.strings().incr_by("n", 1).await.unwrap(), 12);
    assert_eq!(ctx.client.strings().decr_by("n", 1).await.unwrap(), 11);
}

#[tokio::test]
async fn test_incr_on_non_numeric_value_is_a_server_error() {
    let ctx = TestContext::new().await;

    ctx.client.strings().set("text", "not a number").await.unwrap();
    let err = ctx.client.strings().incr("text").await.unwrap_err();
    assert!(matches!(err, LazuliteError::Server(_)));
}

#[tokio::test]
async fn test_incr_by_float() {
    let ctx = TestContext::new().await;

    let value = ctx
        .client
        .strings()
        .incr_by_float("ratio", 10.5)
        .await
        .unwrap();
    assert!((value - 10.5).abs() < f64::EPSILON);

    let value = ctx
        .client
        .strings()
        .incr_by_float("ratio", 0.25)
        .await
        .unwrap();
    assert!((value - 10.75).abs() < f64::EPSILON);
}

// ===== Append and Length Tests =====

#[tokio::test]
async fn test_append_extends_and_creates() {
    let ctx = TestContext::new().await;

    let len = ctx.client.strings().append("log", "Hello").await.unwrap();
    assert_eq!(len, 5);
    let len = ctx.client.strings().append("log", " World").await.unwrap();
    assert_eq!(len, 11);
    assert_eq!(
        ctx.client.strings().get("log").await.unwrap(),
        Some(Bytes::from("Hello World"))
    );
}

#[tokio::test]
async fn test_strlen() {
    let ctx = TestContext::new().await;

    ctx.client.strings().set("word", "lazulite").await.unwrap();
    assert_eq!(ctx.client.strings().strlen("word").await.unwrap(), 8);
    assert_eq!(ctx.client.strings().strlen("missing").await.unwrap(), 0);
}

#[tokio::test]
async fn test_many_unique_keys() {
    let ctx = TestContext::new().await;

    for i in 0..20 {
        let key = unique_key("bulk", i);
        ctx.client.strings().set(&key, TEST_VALUE3).await.unwrap();
    }
    for i in 0..20 {
        let key = unique_key("bulk", i);
        let value = ctx.client.strings().get(&key).await.unwrap();
        assert_eq!(value, Some(Bytes::from(TEST_VALUE3)));
    }
}
