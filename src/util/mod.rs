mod format;
mod path;

pub use format::{format_size, format_timestamp, now_timestamp};
pub use path::{is_markdown, mirror_path};
