use chrono::{DateTime, Utc};
use sightline_engine::{daily_activity, digest_session, project_counts};
use sightline_types::Session;
use std::fs;
use std::path::Path;

// Helper to load Session[] from fixture JSON
fn load_sessions_from_fixture(fixture_name: &str) -> Vec<Session> {
    let path = Path::new("tests/fixtures").join(fixture_name);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("Failed to read fixture: {}", path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|_| panic!("Failed to parse fixture: {}", path.display()))
}

#[test]
fn fixture_sessions_satisfy_count_invariant() {
    let sessions = load_sessions_from_fixture("sessions.json");
    assert_eq!(sessions.len(), 5);
    assert!(sessions.iter().all(Session::message_count_consistent));
}

#[test]
fn fixture_activity_histogram() {
    let sessions = load_sessions_from_fixture("sessions.json");
    let reference: DateTime<Utc> = "2024-01-10T18:00:00Z".parse().unwrap();

    let days = daily_activity(&sessions, reference);
    assert_eq!(days.len(), 30);

    let count_of = |date: &str| {
        days.iter()
            .find(|d| d.date.to_string() == date)
            .unwrap()
            .count
    };
    assert_eq!(count_of("2024-01-05"), 2);
    assert_eq!(count_of("2024-01-09"), 1);
    assert_eq!(count_of("2024-01-10"), 1);
    // The 2023-11-20 session predates the window entirely.
    assert_eq!(days.iter().map(|d| d.count).sum::<usize>(), 4);
}

#[test]
fn fixture_project_distribution() {
    let sessions = load_sessions_from_fixture("sessions.json");
    let counts = project_counts(&sessions);

    assert_eq!(counts.len(), 2);
    assert_eq!((counts[0].project.as_str(), counts[0].sessions), ("atlas", 3));
    assert_eq!(
        (counts[1].project.as_str(), counts[1].sessions),
        ("beacon", 2)
    );
}

#[test]
fn fixture_transcript_digest() {
    let sessions = load_sessions_from_fixture("sessions.json");
    let digest = digest_session(&sessions[0]);

    assert_eq!(digest.message_count, 3);
    assert_eq!(digest.user_messages, 1);
    assert_eq!(digest.assistant_messages, 2);
    assert_eq!(digest.tool_uses, 1);
    assert_eq!(digest.models, vec!["sonnet".to_string()]);
    assert_eq!(digest.duration_seconds, Some(300));
}
