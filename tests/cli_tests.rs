//! Binary-level checks: configuration failures are logged and the process
//! still exits cleanly.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn stockwatch(dir: &tempfile::TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("stockwatch");
    cmd.env_clear().current_dir(dir.path());
    cmd
}

#[test]
fn missing_env_exits_zero_and_names_every_variable() {
    let dir = tempfile::tempdir().expect("create temp dir");

    stockwatch(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("missing environment variables"))
        .stdout(predicate::str::contains("STOCK_API_KEY"))
        .stdout(predicate::str::contains("TO_NO"));
}

#[test]
fn dotenv_file_supplies_variables() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(
        dir.path().join(".env"),
        "STOCK_API_KEY=demo\nNEWS_API_KEY=demo\nACCOUNT_SID=AC123\nAUTH_TOKEN=token\n",
    )
    .expect("write .env");

    stockwatch(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("FROM_NO, TO_NO"))
        .stdout(predicate::str::contains("STOCK_API_KEY").not());
}

#[test]
fn json_log_format_is_honoured() {
    let dir = tempfile::tempdir().expect("create temp dir");

    stockwatch(&dir)
        .env("LOG_FORMAT", "json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"level\":\"ERROR\""));
}
