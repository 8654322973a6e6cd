use predicates::str::contains;

mod common;
use common::{setup_test_db, teer};

#[test]
fn test_dream_add_and_list() {
    let db_path = setup_test_db("dream_add_list");

    teer()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    teer()
        .args([
            "--db", &db_path, "dream", "add", "--dream", "river in flood", "--direct", "14,41",
            "--house", "4", "--ending", "1",
        ])
        .assert()
        .success()
        .stdout(contains("added"));

    teer()
        .args(["--db", &db_path, "dream", "list"])
        .assert()
        .success()
        .stdout(contains("river in flood"))
        .stdout(contains("14,41"))
        .stdout(contains("1 entr(ies)"));
}

#[test]
fn test_dream_add_requires_description() {
    let db_path = setup_test_db("dream_empty");

    teer()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    teer()
        .args(["--db", &db_path, "dream", "add", "--dream", "  "])
        .assert()
        .failure()
        .stderr(contains("must not be empty"));
}

#[test]
fn test_dream_edit_patches_fields() {
    let db_path = setup_test_db("dream_edit");

    teer()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    teer()
        .args([
            "--db", &db_path, "dream", "add", "--dream", "flying", "--direct", "8", "--house",
            "0", "--ending", "8",
        ])
        .assert()
        .success();

    teer()
        .args(["--db", &db_path, "dream", "edit", "--id", "1", "--direct", "88,80"])
        .assert()
        .success()
        .stdout(contains("updated"));

    teer()
        .args(["--db", &db_path, "dream", "list"])
        .assert()
        .success()
        .stdout(contains("flying"))
        .stdout(contains("88,80"));
}

#[test]
fn test_dream_edit_unknown_id_fails() {
    let db_path = setup_test_db("dream_edit_unknown");

    teer()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    teer()
        .args(["--db", &db_path, "dream", "edit", "--id", "42", "--direct", "1"])
        .assert()
        .failure()
        .stderr(contains("No dream entry with id 42"));
}

#[test]
fn test_dream_del() {
    let db_path = setup_test_db("dream_del");

    teer()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    teer()
        .args(["--db", &db_path, "dream", "add", "--dream", "teeth falling"])
        .assert()
        .success();

    teer()
        .args(["--db", &db_path, "dream", "del", "--id", "1"])
        .assert()
        .success()
        .stdout(contains("deleted"));

    teer()
        .args(["--db", &db_path, "dream", "list"])
        .assert()
        .success()
        .stdout(contains("No dream entries"));
}

#[test]
fn test_common_set_and_show() {
    let db_path = setup_test_db("common_set_show");

    teer()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    teer()
        .args([
            "--db", &db_path, "common", "set", "2025-06-01", "--row1", "12,34,56", "--row2",
            "78,90",
        ])
        .assert()
        .success()
        .stdout(contains("Common numbers set for 2025-06-01"));

    teer()
        .args(["--db", &db_path, "common", "show", "2025-06-01"])
        .assert()
        .success()
        .stdout(contains("Row 1: 12, 34, 56"))
        .stdout(contains("Row 2: 78, 90"));
}

#[test]
fn test_common_set_overwrites_same_date() {
    let db_path = setup_test_db("common_overwrite");

    teer()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    teer()
        .args(["--db", &db_path, "common", "set", "2025-06-01", "--row1", "1", "--row2", "2"])
        .assert()
        .success();

    teer()
        .args(["--db", &db_path, "common", "set", "2025-06-01", "--row1", "3", "--row2", "4"])
        .assert()
        .success();

    teer()
        .args(["--db", &db_path, "common", "list"])
        .assert()
        .success()
        .stdout(contains("1 entr(ies)"))
        .stdout(contains("3"))
        .stdout(contains("4"));
}

#[test]
fn test_common_rejects_non_numeric_row() {
    let db_path = setup_test_db("common_bad_row");

    teer()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    teer()
        .args(["--db", &db_path, "common", "set", "2025-06-01", "--row1", "1,x", "--row2", "2"])
        .assert()
        .failure()
        .stderr(contains("non-numeric"));
}

#[test]
fn test_common_show_missing_date() {
    let db_path = setup_test_db("common_missing");

    teer()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    teer()
        .args(["--db", &db_path, "common", "show", "2025-06-01"])
        .assert()
        .success()
        .stdout(contains("No common numbers for 2025-06-01"));
}
