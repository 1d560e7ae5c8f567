//! LMDB key-value store tests against a temporary directory.

use baselingo_store::{KeyValueStore, StoreError};
use baselingo_store_lmdb::LmdbEnvironment;

const MAP_SIZE: usize = 16 * 1024 * 1024;

fn temp_env() -> (tempfile::TempDir, LmdbEnvironment) {
    let dir = tempfile::tempdir().expect("temp dir");
    let env = LmdbEnvironment::open(dir.path(), MAP_SIZE).expect("open env");
    (dir, env)
}

#[test]
fn missing_key_reads_none() {
    let (_dir, env) = temp_env();
    let store = env.kv_store();
    assert_eq!(store.get("absent").unwrap(), None);
}

#[test]
fn set_then_get_returns_value() {
    let (_dir, env) = temp_env();
    let store = env.kv_store();
    store.set("k", "v1").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v1"));
    store.set("k", "v2").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
}

#[test]
fn remove_clears_key_and_is_idempotent() {
    let (_dir, env) = temp_env();
    let store = env.kv_store();
    store.set("k", "v").unwrap();
    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
    store.remove("k").unwrap();
}

#[test]
fn values_survive_reopen() {
    let dir = tempfile::tempdir().expect("temp dir");
    {
        let env = LmdbEnvironment::open(dir.path(), MAP_SIZE).unwrap();
        env.kv_store().set("lingua-vault:deposit", "{}").unwrap();
    }
    let env = LmdbEnvironment::open(dir.path(), MAP_SIZE).unwrap();
    assert_eq!(
        env.kv_store().get("lingua-vault:deposit").unwrap().as_deref(),
        Some("{}")
    );
}

#[test]
fn open_creates_missing_directory() {
    let dir = tempfile::tempdir().expect("temp dir");
    let nested = dir.path().join("a").join("b");
    let env = LmdbEnvironment::open(&nested, MAP_SIZE).unwrap();
    assert!(nested.is_dir());
    assert_eq!(env.path(), nested.as_path());
}

#[test]
fn oversized_write_reports_quota() {
    let (_dir, env) = temp_env();
    let store = env.kv_store();
    let big = "x".repeat(MAP_SIZE * 2);
    match store.set("big", &big) {
        Err(StoreError::QuotaExceeded) => {}
        other => panic!("expected QuotaExceeded, got {other:?}"),
    }
}
