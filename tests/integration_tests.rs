mod common;
use common::{init_and_clock_in, kin, kin_at, setup_test_store};
use predicates::prelude::*;

#[test]
fn test_full_day_flow() {
    let store = setup_test_store("full_day_flow");
    init_and_clock_in(&store, "2026-02-03T09:00:00+09:00");

    kin_at(&store, "2026-02-03T12:00:00+09:00", &["break"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Break started"));

    kin_at(&store, "2026-02-03T12:30:00+09:00", &["break", "--end"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Break ended"));

    kin_at(
        &store,
        "2026-02-03T18:00:00+09:00",
        &["out", "-t", "monthly report", "-t", "code review"],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("Clocked out"));

    // 9h span minus the 30m break
    kin_at(&store, "2026-02-03T19:00:00+09:00", &["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("08h 30m").and(predicate::str::contains("00h 30m")));
}

#[test]
fn test_double_clock_in_fails() {
    let store = setup_test_store("double_clock_in");
    init_and_clock_in(&store, "2026-02-03T09:00:00+09:00");

    kin_at(&store, "2026-02-03T10:00:00+09:00", &["in"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("open session"));
}

#[test]
fn test_clock_out_requires_tasks() {
    let store = setup_test_store("out_needs_tasks");
    init_and_clock_in(&store, "2026-02-03T09:00:00+09:00");

    kin_at(&store, "2026-02-03T18:00:00+09:00", &["out", "-t", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("task"));

    // The failure must leave the session open
    kin_at(&store, "2026-02-03T18:05:00+09:00", &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("working"));
}

#[test]
fn test_status_reports_break() {
    let store = setup_test_store("status_break");
    init_and_clock_in(&store, "2026-02-03T09:00:00+09:00");

    kin_at(&store, "2026-02-03T12:00:00+09:00", &["break"])
        .assert()
        .success();

    kin_at(&store, "2026-02-03T12:10:00+09:00", &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("on break"));
}

#[test]
fn test_boundary_split_is_surfaced() {
    let store = setup_test_store("boundary_split_notice");
    // Clock in on the 20th evening JST, next action on the 22nd
    init_and_clock_in(&store, "2026-01-20T23:00:00+09:00");

    kin_at(&store, "2026-01-22T10:00:00+09:00", &["break"])
        .assert()
        .success()
        .stdout(predicate::str::contains("split automatically"));

    // The forced split shows up as an anomaly
    kin_at(&store, "2026-01-22T10:05:00+09:00", &["anomalies"])
        .assert()
        .success()
        .stdout(predicate::str::contains("closing_split"));
}

#[test]
fn test_correction_requires_supervisor_role() {
    let store = setup_test_store("correction_role");
    init_and_clock_in(&store, "2026-02-03T09:00:00+09:00");

    kin_at(
        &store,
        "2026-02-04T10:00:00+09:00",
        &[
            "correct",
            "some-session",
            "--start",
            "2026-02-03T09:30:00+09:00",
            "--message",
            "late badge-in",
            "--actor",
            "boss",
            "--role",
            "staff",
        ],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("reviewer or admin"));
}

#[test]
fn test_clock_in_on_warning_day_warns() {
    let store = setup_test_store("warning_day");
    kin()
        .args(["--data", &store, "--test", "init"])
        .assert()
        .success();

    kin_at(&store, "2026-03-20T09:00:00+09:00", &["in"])
        .assert()
        .success()
        .stdout(predicate::str::contains("20th"));
}
