//! Session store: round-trip fidelity and defensive decoding.

use chrono::{DateTime, Utc};
use kintai::core::ids::SeqIds;
use kintai::core::{break_end, break_start, clock_in, clock_out, is_session_in_period};
use kintai::core::boundary::closing_period_of;
use kintai::models::AttendanceSession;
use kintai::store::{parse_sessions, serialize_sessions};

fn ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("test timestamp")
        .with_timezone(&Utc)
}

fn sample_sessions() -> Vec<AttendanceSession> {
    let mut ids = SeqIds::new("s");
    let sessions = clock_in(&[], "aoi", ts("2026-02-03T10:00:00+09:00"), &mut ids)
        .unwrap()
        .sessions;
    let sessions = break_start(&sessions, "aoi", ts("2026-02-03T12:00:00+09:00"), &mut ids)
        .unwrap()
        .sessions;
    let sessions = break_end(&sessions, "aoi", ts("2026-02-03T12:30:00+09:00"), &mut ids)
        .unwrap()
        .sessions;
    let sessions = clock_out(
        &sessions,
        "aoi",
        &["report".to_string(), "review".to_string()],
        ts("2026-02-03T18:00:00+09:00"),
        &mut ids,
    )
    .unwrap()
    .sessions;
    clock_in(&sessions, "aoi", ts("2026-02-04T09:00:00+09:00"), &mut ids)
        .unwrap()
        .sessions
}

#[test]
fn test_round_trip_preserves_sessions() {
    let sessions = sample_sessions();
    let json = serialize_sessions(&sessions).unwrap();
    let reloaded = parse_sessions(&json).unwrap();
    assert_eq!(reloaded, sessions);
}

#[test]
fn test_persisted_shape_is_camel_case() {
    let sessions = sample_sessions();
    let json = serialize_sessions(&sessions).unwrap();
    assert!(json.contains("\"userId\""));
    assert!(json.contains("\"startAt\""));
    assert!(json.contains("\"splitByClosingBoundary\""));
}

#[test]
fn test_malformed_records_are_dropped_not_fatal() {
    let json = r#"[
        {"id": "a", "userId": "aoi", "startAt": "2026-02-03T01:00:00Z"},
        {"id": "b", "userId": "aoi"},
        {"id": "c", "userId": "aoi", "startAt": "not-a-date"},
        42,
        "nonsense"
    ]"#;

    let sessions = parse_sessions(json).unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].id, "a");
}

#[test]
fn test_partial_record_gets_defaults() {
    let json = r#"[{"id": "a", "userId": "aoi", "startAt": "2026-02-03T01:00:00Z"}]"#;
    let sessions = parse_sessions(json).unwrap();

    let s = &sessions[0];
    assert!(s.end_at.is_none());
    assert!(s.breaks.is_empty());
    assert!(s.tasks.is_empty());
    assert!(s.corrections.is_empty());
    assert!(!s.split_by_closing_boundary);
    assert_eq!(s.created_at, s.start_at);
    assert_eq!(s.updated_at, s.start_at);
}

#[test]
fn test_non_array_document_is_an_error() {
    assert!(parse_sessions("{\"not\": \"an array\"}").is_err());
    assert!(parse_sessions("definitely not json").is_err());
}

#[test]
fn test_session_spanning_boundary_is_in_both_periods() {
    // Closed session crossing the Jan 21 boundary (as a corrected record might)
    let json = r#"[{
        "id": "x", "userId": "aoi",
        "startAt": "2026-01-20T13:00:00Z",
        "endAt": "2026-01-21T03:00:00Z"
    }]"#;
    let sessions = parse_sessions(json).unwrap();
    let now = ts("2026-02-01T00:00:00+09:00");

    let december_period = closing_period_of(2025, 12);
    let january_period = closing_period_of(2026, 1);
    assert!(is_session_in_period(&sessions[0], &december_period, now));
    assert!(is_session_in_period(&sessions[0], &january_period, now));
}
