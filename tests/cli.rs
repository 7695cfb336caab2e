use std::path::Path;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn todue(store: &Path) -> Command {
    let mut cmd = Command::cargo_bin("todue").expect("todue binary");
    cmd.env_remove("RUST_LOG")
        .env("TODUE_STORE", store)
        .env("TODUE_TODAY", "2024-06-01");
    cmd
}

fn short_id(add_output: &[u8]) -> String {
    let line = String::from_utf8_lossy(add_output);
    line.split_whitespace()
        .nth(2)
        .expect("id in add output")
        .to_string()
}

#[test]
fn pay_rent_scenario() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let store = dir.path().join("store.sqlite");

    let added = todue(&store)
        .args(["add", "Pay rent", "--due", "2024-01-01"])
        .assert()
        .success()
        .stdout(contains("Pay rent (Jan 01, 2024)"));
    let id = short_id(&added.get_output().stdout);

    todue(&store)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("To Do 1"))
        .stdout(contains("Overdue 1"))
        .stdout(contains("Complete 0"));

    todue(&store)
        .args(["toggle", id.as_str()])
        .assert()
        .success()
        .stdout(contains("[x]"));

    todue(&store)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Overdue 0"))
        .stdout(contains("No overdue tasks."))
        .stdout(contains("Complete 1"));
    Ok(())
}

#[test]
fn add_without_due_date_alerts_and_keeps_list() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let store = dir.path().join("store.sqlite");

    todue(&store)
        .args(["add", "Pay rent"])
        .assert()
        .failure()
        .stderr(contains("Please provide both a name and a due date"));

    todue(&store)
        .args(["add", "", "--due", "2024-01-01"])
        .assert()
        .failure()
        .stderr(contains("Please provide both a name and a due date"));

    todue(&store)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("To Do 0"));
    Ok(())
}

#[test]
fn due_today_is_listed_as_outstanding() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let store = dir.path().join("store.sqlite");

    todue(&store)
        .args(["add", "Call mum", "--due", "2024-06-01", "-m", "about sunday"])
        .assert()
        .success();

    todue(&store)
        .args(["list", "--layout", "detailed"])
        .assert()
        .success()
        .stdout(contains("Overdue 0"))
        .stdout(contains("Outstanding 1"))
        .stdout(contains("about sunday"));
    Ok(())
}

#[test]
fn toggle_with_unknown_id_changes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let store = dir.path().join("store.sqlite");

    todue(&store)
        .args(["add", "Pay rent", "--due", "2024-07-01"])
        .assert()
        .success();

    todue(&store)
        .args(["toggle", "zzzzzzzz"])
        .assert()
        .success()
        .stdout("");

    todue(&store)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Outstanding 1"))
        .stdout(contains("Complete 0"));
    Ok(())
}
