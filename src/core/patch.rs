//! Front-matter timestamp patching
//!
//! Documents are treated as opaque text and edited with line-anchored
//! patterns. Field order, quoting style and every untouched line survive
//! byte-for-byte, which a parse-and-reserialize round trip could not
//! guarantee.

use regex::{Captures, Regex};

use crate::core::RunStamp;
use crate::error::Result;

/// Applies the `updated:` rewrite rules to document text.
///
/// Rules, in order:
/// 1. if an `updated:` line exists, rewrite the first one to the run stamp;
/// 2. otherwise, if a `published:` line exists, insert a new `updated:`
///    line right after the first one, keeping the `published:` line
///    verbatim;
/// 3. otherwise leave the document alone.
///
/// A final pass normalizes every degenerate empty `updated:` line
/// (`updated: ''`, `updated: ""` or no value at all) to the run stamp.
/// Some content-management exports emit such placeholders.
pub struct Patcher {
    updated_line: Regex,
    published_line: Regex,
    empty_updated_line: Regex,
}

impl Patcher {
    pub fn new() -> Result<Self> {
        Ok(Patcher {
            updated_line: Regex::new(r"(?m)^updated:.*$")?,
            published_line: Regex::new(r"(?m)^(published:.*)$")?,
            empty_updated_line: Regex::new(r#"(?m)^updated:\s*['"]?['"]?\s*$"#)?,
        })
    }

    /// Rewrite `content` with `stamp`, returning the new text, or `None`
    /// when the result is byte-identical and no write should happen.
    pub fn patch(&self, content: &str, stamp: &RunStamp) -> Option<String> {
        let stamp_line = format!("updated: {stamp}");

        let patched = if self.updated_line.is_match(content) {
            self.updated_line
                .replace(content, stamp_line.as_str())
                .into_owned()
        } else if self.published_line.is_match(content) {
            self.published_line
                .replace(content, |caps: &Captures<'_>| {
                    format!("{}\n{}", &caps[1], stamp_line)
                })
                .into_owned()
        } else {
            content.to_string()
        };

        let patched = self
            .empty_updated_line
            .replace_all(&patched, stamp_line.as_str())
            .into_owned();

        if patched != content {
            Some(patched)
        } else {
            None
        }
    }
}
