use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sightline_types::{Color, Session, SessionTags, TagRegistry};

/// Sessions-per-project entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCount {
    pub project: String,
    pub sessions: usize,
}

/// Sessions-per-tag entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub tag: String,
    pub sessions: usize,
    /// Display color from the injected registry, when the tag has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

/// Count sessions per exact project name, descending by count with ties
/// broken by ascending name.
///
/// The ordering is fully deterministic, so repeated calls on the same
/// input yield the same output. No truncation happens here; taking a
/// top-N prefix is a presentation decision. Empty input yields an empty
/// vec.
pub fn project_counts(sessions: &[Session]) -> Vec<ProjectCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for session in sessions {
        *counts.entry(session.project.as_str()).or_insert(0) += 1;
    }

    let mut projects = counts
        .into_iter()
        .map(|(project, sessions)| ProjectCount {
            project: project.to_string(),
            sessions,
        })
        .collect::<Vec<_>>();
    projects.sort_by(|a, b| {
        b.sessions
            .cmp(&a.sessions)
            .then_with(|| a.project.cmp(&b.project))
    });
    projects
}

/// Count sessions per tag across all sessions' tag sets, with the same
/// ordering rules as [`project_counts`]. No colors are attached.
pub fn tag_counts(tags: &SessionTags) -> Vec<TagCount> {
    collect_tag_counts(tags, None)
}

/// Same as [`tag_counts`], joining each tag's display color from the
/// host-injected registry. Tags missing from the registry carry no color.
pub fn tag_counts_with_colors(tags: &SessionTags, registry: &TagRegistry) -> Vec<TagCount> {
    collect_tag_counts(tags, Some(registry))
}

fn collect_tag_counts(tags: &SessionTags, registry: Option<&TagRegistry>) -> Vec<TagCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for names in tags.values() {
        for name in names {
            *counts.entry(name.as_str()).or_insert(0) += 1;
        }
    }

    let mut out = counts
        .into_iter()
        .map(|(tag, sessions)| TagCount {
            color: registry
                .and_then(|registry| registry.get(tag))
                .map(|info| info.color),
            tag: tag.to_string(),
            sessions,
        })
        .collect::<Vec<_>>();
    out.sort_by(|a, b| b.sessions.cmp(&a.sessions).then_with(|| a.tag.cmp(&b.tag)));
    out
}
