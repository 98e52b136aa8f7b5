use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Refresh the `updated` front-matter field of changed blog posts.
///
/// Every option has a default matching the deployment this tool was built
/// for, so a bare `restamp` inside the content repository does the right
/// thing after a pull.
#[derive(Parser, Debug)]
#[command(name = "restamp", version, about, long_about = None)]
pub struct Cli {
    /// Root of the content repository
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,

    /// Posts directory, relative to the repository root
    #[arg(long = "posts-dir", default_value = "src/content/posts")]
    pub posts_dir: PathBuf,

    /// How to pick candidate files
    #[arg(long, value_enum, default_value = "diff")]
    pub mode: Mode,

    /// Older ref compared in diff mode
    #[arg(long, default_value = "ORIG_HEAD")]
    pub from: String,

    /// Newer ref compared in diff mode
    #[arg(long, default_value = "HEAD")]
    pub to: String,

    /// Preview changes without modifying files
    #[arg(long)]
    pub dry_run: bool,
}

/// Candidate selection strategy
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Posts changed between --from and --to
    Diff,
    /// Every markdown file directly inside the posts directory
    FullScan,
}
