use assert_cmd::Command;
use predicates::prelude::*;

fn ridehail() -> Command {
    let mut cmd = Command::cargo_bin("ridehail").unwrap();
    // Keep tests away from the user's real config file
    let missing = std::env::temp_dir().join("ridehail-cli-tests-missing.toml");
    cmd.env("RIDEHAIL_CONFIG", missing);
    cmd
}

#[test]
fn rides_lists_catalog() {
    ridehail()
        .arg("rides")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ola Mini"))
        .stdout(predicate::str::contains("Ola Bike"))
        .stdout(predicate::str::contains("₹125"));
}

#[test]
fn rides_json_is_parseable() {
    let output = ridehail().args(["rides", "--json"]).output().unwrap();
    assert!(output.status.success());

    let rides: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rides = rides.as_array().unwrap();
    assert_eq!(rides.len(), 4);
    assert_eq!(rides[0]["id"], "mini");
    assert_eq!(rides[0]["price"], 89);
}

#[test]
fn book_reaches_tracking() {
    ridehail()
        .args([
            "book",
            "--pickup",
            "MG Road",
            "--destination",
            "Airport",
            "--ride",
            "mini",
            "--delay-ms",
            "20",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Booking confirmed: Ola Mini"))
        .stdout(predicate::str::contains("Finding a driver for you (20 ms)"))
        .stdout(predicate::str::contains("Driver assigned: Rajesh Kumar"))
        .stdout(predicate::str::contains("Arriving in 3 minutes"));
}

#[test]
fn book_rejects_empty_pickup() {
    ridehail()
        .args(["book", "--pickup", "", "--destination", "Airport", "--delay-ms", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("pickup location and a destination"));
}

#[test]
fn book_rejects_unknown_ride() {
    ridehail()
        .args([
            "book",
            "--pickup",
            "MG Road",
            "--destination",
            "Airport",
            "--ride",
            "helicopter",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown ride 'helicopter'"))
        .stderr(predicate::str::contains("mini, prime, auto, bike"));
}

#[test]
fn config_show_uses_defaults_when_missing() {
    ridehail()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("driver_assignment_delay_ms = 3000"));
}

#[test]
fn book_uses_default_delay_without_config() {
    ridehail()
        .args(["book", "--pickup", "A", "--destination", "B", "--ride", "auto"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Finding a driver for you (3000 ms)"));
}

#[test]
fn config_file_sets_delay() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "driver_assignment_delay_ms = 5\n").unwrap();

    ridehail()
        .env("RIDEHAIL_CONFIG", &path)
        .args(["book", "--pickup", "A", "--destination", "B", "--ride", "bike"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ola Bike"))
        .stdout(predicate::str::contains("Finding a driver for you (5 ms)"));
}
