//! Changed-post discovery via the version-control history
//!
//! `git diff --name-only <from> <to>` lists the paths touched between two
//! refs, relative to the repository root. Any failure along the way (git
//! missing, unknown refs, not a repository) downgrades to an empty
//! candidate set: a metadata refresh must not break the deployment chain
//! it runs in.

use log::{debug, warn};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::io::fs::is_markdown;

/// Posts changed between `from` and `to`, as absolute paths under `repo`.
///
/// Only markdown files inside `posts_dir` (relative to the repository
/// root) count; everything else in the diff is ignored. Order follows the
/// diff listing.
pub fn changed_posts(repo: &Path, posts_dir: &Path, from: &str, to: &str) -> Vec<PathBuf> {
    let output = match Command::new("git")
        .args(["diff", "--name-only", from, to])
        .current_dir(repo)
        .output()
    {
        Ok(output) => output,
        Err(e) => {
            warn!("could not run git in {}: {}", repo.display(), e);
            return Vec::new();
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        warn!(
            "git diff --name-only {} {} failed in {}: {}",
            from,
            to,
            repo.display(),
            stderr.trim()
        );
        return Vec::new();
    }

    let listing = match String::from_utf8(output.stdout) {
        Ok(s) => s,
        Err(e) => {
            warn!("git diff output was not UTF-8: {}", e);
            return Vec::new();
        }
    };

    let posts = select_posts(repo, posts_dir, &listing);
    debug!(
        "{} changed post(s) between {} and {}",
        posts.len(),
        from,
        to
    );
    posts
}

/// Filter a raw `--name-only` listing down to markdown posts and join
/// them to the repository root.
fn select_posts(repo: &Path, posts_dir: &Path, listing: &str) -> Vec<PathBuf> {
    listing
        .lines()
        .map(Path::new)
        .filter(|p| p.starts_with(posts_dir) && is_markdown(p))
        .map(|p| repo.join(p))
        .collect()
}
