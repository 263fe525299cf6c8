use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sightline_types::{Role, Session};

/// Per-session message statistics for the dashboard's usage panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDigest {
    pub message_count: usize,
    pub user_messages: usize,
    pub assistant_messages: usize,
    pub tool_uses: usize,
    /// Distinct model display names seen in the transcript, ascending.
    pub models: Vec<String>,
    pub first_activity: Option<DateTime<Utc>>,
    pub last_activity: Option<DateTime<Utc>>,
    /// Active span in seconds; `None` when no message carries a timestamp.
    pub duration_seconds: Option<i64>,
}

/// Summarize a loaded session transcript in a single pass.
pub fn digest_session(session: &Session) -> SessionDigest {
    let mut user_messages = 0;
    let mut assistant_messages = 0;
    let mut tool_uses = 0;
    let mut models: BTreeSet<&str> = BTreeSet::new();
    let mut first_activity: Option<DateTime<Utc>> = None;
    let mut last_activity: Option<DateTime<Utc>> = None;

    for message in &session.messages {
        match message.role {
            Role::User => user_messages += 1,
            Role::Assistant => assistant_messages += 1,
        }
        if message.is_tool_use {
            tool_uses += 1;
        }
        if let Some(model) = &message.model {
            models.insert(model);
        }
        if let Some(ts) = message.timestamp {
            first_activity = Some(first_activity.map_or(ts, |first| first.min(ts)));
            last_activity = Some(last_activity.map_or(ts, |last| last.max(ts)));
        }
    }

    let duration_seconds = match (first_activity, last_activity) {
        (Some(first), Some(last)) => Some((last - first).num_seconds()),
        _ => None,
    };

    SessionDigest {
        message_count: session.messages.len(),
        user_messages,
        assistant_messages,
        tool_uses,
        models: models.into_iter().map(str::to_string).collect(),
        first_activity,
        last_activity,
        duration_seconds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sightline_types::Message;
    use uuid::Uuid;

    fn message(role: Role, ts: Option<&str>, model: Option<&str>, tool: bool) -> Message {
        Message {
            role,
            content: "...".to_string(),
            timestamp: ts.map(|t| t.parse().unwrap()),
            agent: None,
            model: model.map(str::to_string),
            is_tool_use: tool,
        }
    }

    fn session_with(messages: Vec<Message>) -> Session {
        Session {
            id: Uuid::new_v4(),
            project: "demo".to_string(),
            last_activity: "2024-01-10T12:00:00Z".parse().unwrap(),
            message_count: messages.len(),
            messages,
        }
    }

    #[test]
    fn empty_session_digests_to_zeroes() {
        let digest = digest_session(&session_with(Vec::new()));
        assert_eq!(digest.message_count, 0);
        assert_eq!(digest.user_messages, 0);
        assert_eq!(digest.assistant_messages, 0);
        assert!(digest.models.is_empty());
        assert_eq!(digest.duration_seconds, None);
    }

    #[test]
    fn role_counts_sum_to_message_count() {
        let session = session_with(vec![
            message(Role::User, None, None, false),
            message(Role::Assistant, None, Some("opus"), false),
            message(Role::Assistant, None, Some("opus"), true),
            message(Role::User, None, None, false),
        ]);
        let digest = digest_session(&session);

        assert_eq!(digest.message_count, 4);
        assert_eq!(digest.user_messages + digest.assistant_messages, 4);
        assert_eq!(digest.user_messages, 2);
        assert_eq!(digest.tool_uses, 1);
        assert_eq!(digest.models, vec!["opus".to_string()]);
    }

    #[test]
    fn span_comes_from_min_and_max_timestamps() {
        // Timestamps arrive out of order when transcripts interleave
        // subagent turns.
        let session = session_with(vec![
            message(Role::Assistant, Some("2024-01-10T12:05:00Z"), None, false),
            message(Role::User, Some("2024-01-10T12:00:00Z"), None, false),
            message(Role::Assistant, Some("2024-01-10T12:03:00Z"), None, false),
        ]);
        let digest = digest_session(&session);

        assert_eq!(
            digest.first_activity,
            Some("2024-01-10T12:00:00Z".parse().unwrap())
        );
        assert_eq!(
            digest.last_activity,
            Some("2024-01-10T12:05:00Z".parse().unwrap())
        );
        assert_eq!(digest.duration_seconds, Some(300));
    }

    #[test]
    fn untimestamped_transcript_has_no_span() {
        let session = session_with(vec![message(Role::User, None, None, false)]);
        let digest = digest_session(&session);
        assert_eq!(digest.first_activity, None);
        assert_eq!(digest.duration_seconds, None);
    }

    #[test]
    fn models_are_distinct_and_sorted() {
        let session = session_with(vec![
            message(Role::Assistant, None, Some("sonnet"), false),
            message(Role::Assistant, None, Some("haiku"), false),
            message(Role::Assistant, None, Some("sonnet"), false),
        ]);
        let digest = digest_session(&session);
        assert_eq!(
            digest.models,
            vec!["haiku".to_string(), "sonnet".to_string()]
        );
    }
}
