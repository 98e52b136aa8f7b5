pub mod changes;
pub mod fs;

pub use changes::changed_posts;
pub use fs::{is_markdown, read_to_string, scan_posts_dir, write_atomic};
