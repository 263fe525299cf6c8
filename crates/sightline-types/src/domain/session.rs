use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author of a message within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Human operator of the CLI.
    User,
    /// The assistant, including its tool invocations (see
    /// [`Message::is_tool_use`]).
    Assistant,
}

/// Single turn within a session transcript.
///
/// Messages are immutable once created; the engine only ever reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    /// Rendered text content of the turn.
    pub content: String,
    /// When the turn was recorded, if the source transcript carried one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Display name of the subagent that produced this turn, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,
    /// Display name of the model that produced this turn, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// True when the assistant turn is a tool invocation rather than prose.
    #[serde(default)]
    pub is_tool_use: bool,
}

impl Message {
    pub fn is_from_user(&self) -> bool {
        matches!(self.role, Role::User)
    }
}

/// One recorded interaction transcript with an AI coding-assistant CLI.
///
/// Owned by the host application's session store and read-only to the
/// engine. `messages` may be empty when the host lists sessions without
/// loading their bodies; once loaded, `message_count == messages.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier.
    pub id: Uuid,
    /// Project the session was recorded under (exact-string grouping key).
    pub project: String,
    /// Most recent activity in the session. Hosts must normalize all
    /// session timestamps to a single zone; day-bucketing converts them
    /// into the reference calendar before truncation.
    pub last_activity: DateTime<Utc>,
    /// Number of messages in the transcript, valid even when `messages`
    /// has not been loaded.
    pub message_count: usize,
    /// Ordered transcript body, empty until loaded by the host.
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl Session {
    /// Whether the declared count matches the loaded transcript.
    ///
    /// Trivially true while the body is unloaded (`messages` empty).
    pub fn message_count_consistent(&self) -> bool {
        self.messages.is_empty() || self.message_count == self.messages.len()
    }
}
