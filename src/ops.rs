//! Run orchestration: resolve candidates, patch each file, report.

use log::debug;
use std::path::PathBuf;

use crate::args::{Cli, Mode};
use crate::core::{Patcher, RunStamp};
use crate::error::Result;
use crate::io::{changed_posts, read_to_string, scan_posts_dir, write_atomic};

/// What a run did, for callers that want more than the stdout lines.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Candidate files that existed and were examined.
    pub examined: usize,
    /// Files rewritten (or that would be, under --dry-run).
    pub updated: usize,
}

/// Run the whole refresh: resolve the candidate set, patch every file in
/// it, and report per-file results on stdout.
///
/// Files are handled one at a time; a file that vanished since resolution
/// is skipped, while read and write failures on an existing file abort
/// the run. Files already rewritten before such a failure stay rewritten.
pub fn run(cli: &Cli, stamp: &RunStamp) -> Result<RunSummary> {
    let candidates = resolve_candidates(cli)?;
    if candidates.is_empty() {
        println!("nothing to update");
        return Ok(RunSummary::default());
    }

    let patcher = Patcher::new()?;
    let mut summary = RunSummary::default();

    for path in &candidates {
        if !path.exists() {
            debug!("skipping {}: no longer on disk", path.display());
            continue;
        }
        summary.examined += 1;

        let content = read_to_string(path)?;
        let Some(patched) = patcher.patch(&content, stamp) else {
            debug!("unchanged: {}", path.display());
            continue;
        };

        if !cli.dry_run {
            write_atomic(path, &patched)?;
        }
        summary.updated += 1;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        if cli.dry_run {
            println!("{}: would update {}", name, stamp);
        } else {
            println!("{}: updated {}", name, stamp);
        }
    }

    Ok(summary)
}

fn resolve_candidates(cli: &Cli) -> Result<Vec<PathBuf>> {
    match cli.mode {
        Mode::Diff => Ok(changed_posts(&cli.repo, &cli.posts_dir, &cli.from, &cli.to)),
        Mode::FullScan => scan_posts_dir(&cli.repo.join(&cli.posts_dir)),
    }
}
