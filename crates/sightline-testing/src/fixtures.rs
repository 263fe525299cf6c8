//! Fixture builders for session records and tag metadata.

use std::collections::BTreeSet;

use chrono::{DateTime, TimeZone, Utc};
use sightline_types::{Message, Role, Session, SessionTags};
use uuid::Uuid;

/// Shorthand UTC timestamp for test scenarios.
///
/// Panics on out-of-range components, which is the failure mode tests
/// want.
pub fn ts(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
        .unwrap()
}

/// Fluent builder for [`Session`] fixtures.
///
/// `message_count` tracks the pushed messages automatically so built
/// sessions always satisfy the count invariant.
pub struct SessionBuilder {
    id: Uuid,
    project: String,
    last_activity: DateTime<Utc>,
    messages: Vec<Message>,
}

impl SessionBuilder {
    pub fn new(project: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            project: project.to_string(),
            last_activity: ts(2024, 1, 1, 0, 0, 0),
            messages: Vec::new(),
        }
    }

    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn last_activity(mut self, at: DateTime<Utc>) -> Self {
        self.last_activity = at;
        self
    }

    pub fn user_says(mut self, content: &str) -> Self {
        self.messages.push(Message {
            role: Role::User,
            content: content.to_string(),
            timestamp: None,
            agent: None,
            model: None,
            is_tool_use: false,
        });
        self
    }

    pub fn assistant_says(mut self, content: &str) -> Self {
        self.messages.push(Message {
            role: Role::Assistant,
            content: content.to_string(),
            timestamp: None,
            agent: None,
            model: None,
            is_tool_use: false,
        });
        self
    }

    pub fn tool_use(mut self, content: &str) -> Self {
        self.messages.push(Message {
            role: Role::Assistant,
            content: content.to_string(),
            timestamp: None,
            agent: None,
            model: None,
            is_tool_use: true,
        });
        self
    }

    /// Stamp the most recently pushed message.
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        if let Some(last) = self.messages.last_mut() {
            last.timestamp = Some(timestamp);
        }
        self
    }

    /// Attribute the most recently pushed message to a model.
    pub fn by_model(mut self, model: &str) -> Self {
        if let Some(last) = self.messages.last_mut() {
            last.model = Some(model.to_string());
        }
        self
    }

    pub fn build(self) -> Session {
        Session {
            id: self.id,
            project: self.project,
            last_activity: self.last_activity,
            message_count: self.messages.len(),
            messages: self.messages,
        }
    }
}

/// Build session tag metadata from `(session id, tag names)` pairs.
pub fn tag_metadata(entries: &[(Uuid, &[&str])]) -> SessionTags {
    entries
        .iter()
        .map(|(id, names)| {
            (
                *id,
                names
                    .iter()
                    .map(|name| name.to_string())
                    .collect::<BTreeSet<_>>(),
            )
        })
        .collect()
}
