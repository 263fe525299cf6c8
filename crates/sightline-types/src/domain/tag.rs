use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Color;

/// Registry entry for a user-assigned session label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagInfo {
    /// Unique tag name.
    pub name: String,
    /// Display color chosen by the user.
    pub color: Color,
}

/// Tag name → display info, maintained by the host and injected read-only
/// into the engine (never read from a global).
pub type TagRegistry = BTreeMap<String, TagInfo>;

/// Session id → set of tag names attached to that session.
pub type SessionTags = BTreeMap<Uuid, BTreeSet<String>>;
