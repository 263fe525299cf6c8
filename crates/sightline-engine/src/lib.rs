// Engine module - pure analytics and search-highlight core
// This layer sits between host-owned session records (types) and dashboard presentation

pub mod activity;
pub mod digest;
pub mod distribution;
pub mod format;
pub mod highlight;
pub mod search;

pub use activity::{ACTIVITY_WINDOW_DAYS, DailyActivity, daily_activity};
pub use digest::{SessionDigest, digest_session};
pub use distribution::{
    ProjectCount, TagCount, project_counts, tag_counts, tag_counts_with_colors,
};
pub use format::{abbreviate_count, relative_time};
pub use highlight::{HIGHLIGHT_FG, RunStyle, TextRun, render};
pub use search::{MatchSpan, locate, split_at};
