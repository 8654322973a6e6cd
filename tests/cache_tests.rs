use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{setup_test_cache, setup_test_db, teer};

#[test]
fn test_today_populates_cache_file() {
    let db_path = setup_test_db("cache_populate");
    let cache = setup_test_cache("cache_populate");
    common::init_db_with_data(&db_path, &cache);

    teer()
        .args(["--db", &db_path, "--cache", &cache, "today", "2025-06-01"])
        .assert()
        .success();

    let content = fs::read_to_string(&cache).unwrap();
    assert!(content.contains("teer:2025-06-01"));
    assert!(content.contains("written_at_ms"));
}

#[test]
fn test_today_serves_cached_value_after_row_is_gone() {
    let db_path = setup_test_db("cache_serves");
    let cache = setup_test_cache("cache_serves");
    common::init_db_with_data(&db_path, &cache);

    // warm the cache from the store
    teer()
        .args(["--db", &db_path, "--cache", &cache, "today", "2025-06-01"])
        .assert()
        .success()
        .stdout(contains("23"));

    // remove the backing row directly, keeping the cache entry
    let conn = rusqlite::Connection::open(&db_path).unwrap();
    conn.execute("DELETE FROM results WHERE date = '2025-06-01'", [])
        .unwrap();

    // a fresh entry is served without touching the store
    teer()
        .args(["--db", &db_path, "--cache", &cache, "today", "2025-06-01"])
        .assert()
        .success()
        .stdout(contains("23"));
}

#[test]
fn test_refresh_flag_bypasses_cache() {
    let db_path = setup_test_db("cache_refresh");
    let cache = setup_test_cache("cache_refresh");
    common::init_db_with_data(&db_path, &cache);

    teer()
        .args(["--db", &db_path, "--cache", &cache, "today", "2025-06-01"])
        .assert()
        .success()
        .stdout(contains("23"));

    // change the row behind the cache's back
    let conn = rusqlite::Connection::open(&db_path).unwrap();
    conn.execute(
        "UPDATE results SET first_round = '[77]' WHERE date = '2025-06-01'",
        [],
    )
    .unwrap();

    // without --refresh the fresh cache entry still wins
    teer()
        .args(["--db", &db_path, "--cache", &cache, "today", "2025-06-01"])
        .assert()
        .success()
        .stdout(contains("23"));

    teer()
        .args([
            "--db", &db_path, "--cache", &cache, "today", "2025-06-01", "--refresh",
        ])
        .assert()
        .success()
        .stdout(contains("77"))
        .stdout(contains("23").not());
}

#[test]
fn test_del_invalidates_cache_entry() {
    let db_path = setup_test_db("cache_del");
    let cache = setup_test_cache("cache_del");
    common::init_db_with_data(&db_path, &cache);

    teer()
        .args(["--db", &db_path, "--cache", &cache, "today", "2025-06-01"])
        .assert()
        .success()
        .stdout(contains("23"));

    teer()
        .args(["--db", &db_path, "--cache", &cache, "del", "2025-06-01", "--yes"])
        .assert()
        .success();

    // the stale cached value must not resurface
    teer()
        .args(["--db", &db_path, "--cache", &cache, "today", "2025-06-01"])
        .assert()
        .success()
        .stdout(contains("No result found for this date yet."));
}

#[test]
fn test_corrupt_cache_file_is_ignored() {
    let db_path = setup_test_db("cache_corrupt");
    let cache = setup_test_cache("cache_corrupt");
    common::init_db_with_data(&db_path, &cache);

    fs::write(&cache, "{not json").unwrap();

    teer()
        .args(["--db", &db_path, "--cache", &cache, "today", "2025-06-01"])
        .assert()
        .success()
        .stdout(contains("23"));
}
