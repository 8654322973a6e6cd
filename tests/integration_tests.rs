use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{setup_test_cache, setup_test_db, teer};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("init_schema");

    teer()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    // the schema is there: a list on an empty archive succeeds
    teer()
        .args(["--db", &db_path, "list", "--period", "all"])
        .assert()
        .success()
        .stdout(contains("No results"));
}

#[test]
fn test_add_and_list() {
    let db_path = setup_test_db("add_list");
    let cache = setup_test_cache("add_list");
    common::init_db_with_data(&db_path, &cache);

    teer()
        .args(["--db", &db_path, "list", "--period", "2025-06"])
        .assert()
        .success()
        .stdout(contains("2025-06-01"))
        .stdout(contains("23"))
        .stdout(contains("2025-06-15"))
        .stdout(contains("7, 12"));
}

#[test]
fn test_add_rejects_bad_number() {
    let db_path = setup_test_db("add_bad_number");
    let cache = setup_test_cache("add_bad_number");

    teer()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    teer()
        .args([
            "--db", &db_path, "--cache", &cache, "add", "2025-06-01", "--first", "23,x", "--second",
            "45",
        ])
        .assert()
        .failure()
        .stderr(contains("non-numeric"));
}

#[test]
fn test_add_rejects_bad_date() {
    let db_path = setup_test_db("add_bad_date");
    let cache = setup_test_cache("add_bad_date");

    teer()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    teer()
        .args([
            "--db", &db_path, "--cache", &cache, "add", "junk", "--first", "23", "--second", "45",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}

#[test]
fn test_add_overwrites_same_date() {
    let db_path = setup_test_db("add_overwrite");
    let cache = setup_test_cache("add_overwrite");
    common::init_db_with_data(&db_path, &cache);

    teer()
        .args([
            "--db", &db_path, "--cache", &cache, "add", "2025-06-01", "--first", "99", "--second",
            "11",
        ])
        .assert()
        .success()
        .stdout(contains("updated"));

    // still one row for the day, carrying the new numbers
    teer()
        .args(["--db", &db_path, "list", "--period", "2025-06-01"])
        .assert()
        .success()
        .stdout(contains("99"))
        .stdout(contains("23").not());
}

#[test]
fn test_today_shows_result_for_date() {
    let db_path = setup_test_db("today_date");
    let cache = setup_test_cache("today_date");
    common::init_db_with_data(&db_path, &cache);

    teer()
        .args(["--db", &db_path, "--cache", &cache, "today", "2025-06-01"])
        .assert()
        .success()
        .stdout(contains("Teer result for 2025-06-01"))
        .stdout(contains("23"))
        .stdout(contains("45"));
}

#[test]
fn test_today_empty_state() {
    let db_path = setup_test_db("today_empty");
    let cache = setup_test_cache("today_empty");

    teer()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    teer()
        .args(["--db", &db_path, "--cache", &cache, "today", "2025-06-01"])
        .assert()
        .success()
        .stdout(contains("No result found for this date yet."))
        .stdout(contains("3:30 PM"));
}

#[test]
fn test_del_removes_result() {
    let db_path = setup_test_db("del_result");
    let cache = setup_test_cache("del_result");
    common::init_db_with_data(&db_path, &cache);

    teer()
        .args(["--db", &db_path, "--cache", &cache, "del", "2025-06-01", "--yes"])
        .assert()
        .success()
        .stdout(contains("deleted"));

    teer()
        .args(["--db", &db_path, "list", "--period", "2025-06"])
        .assert()
        .success()
        .stdout(contains("2025-06-01").not())
        .stdout(contains("2025-06-15"));
}

#[test]
fn test_del_unknown_date_fails() {
    let db_path = setup_test_db("del_unknown");
    let cache = setup_test_cache("del_unknown");

    teer()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    teer()
        .args(["--db", &db_path, "--cache", &cache, "del", "2025-06-01", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No result found for date"));
}

#[test]
fn test_list_range_period() {
    let db_path = setup_test_db("list_range");
    let cache = setup_test_cache("list_range");

    teer()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    for (date, first) in [("2024-12-30", "1"), ("2025-01-02", "2"), ("2025-02-10", "3")] {
        teer()
            .args([
                "--db", &db_path, "--cache", &cache, "add", date, "--first", first, "--second",
                "9",
            ])
            .assert()
            .success();
    }

    teer()
        .args(["--db", &db_path, "list", "--period", "2024-12:2025-01"])
        .assert()
        .success()
        .stdout(contains("2024-12-30"))
        .stdout(contains("2025-01-02"))
        .stdout(contains("2025-02-10").not());
}

#[test]
fn test_db_info_reports_counts() {
    let db_path = setup_test_db("db_info");
    let cache = setup_test_cache("db_info");
    common::init_db_with_data(&db_path, &cache);

    teer()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Results:"))
        .stdout(contains("Latest result:  2025-06-15"));
}

#[test]
fn test_db_check_passes() {
    let db_path = setup_test_db("db_check");

    teer()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    teer()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_ops");
    let cache = setup_test_cache("log_ops");
    common::init_db_with_data(&db_path, &cache);

    teer()
        .args(["--db", &db_path, "--cache", &cache, "del", "2025-06-01", "--yes"])
        .assert()
        .success();

    teer()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("add"))
        .stdout(contains("del"));
}
