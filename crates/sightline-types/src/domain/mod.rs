mod session;
mod tag;

pub use session::{Message, Role, Session};
pub use tag::{SessionTags, TagInfo, TagRegistry};
