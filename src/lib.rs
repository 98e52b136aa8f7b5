//! restamp: refresh the `updated` front-matter timestamp of changed blog posts
//!
//! After a content pull, the posts that changed should carry an accurate
//! "last modified" timestamp before the site is rebuilt. This crate finds
//! those posts, either from the version-control diff between two refs or
//! from a directory scan, and rewrites the `updated:` front-matter line by
//! plain text substitution. Every other byte of the document is left
//! alone: no YAML parsing, no reformatting, no reordered fields.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use restamp::{io, Patcher, Result, RunStamp};
//! use std::path::Path;
//!
//! fn main() -> Result<()> {
//!     let stamp = RunStamp::now();
//!     let patcher = Patcher::new()?;
//!
//!     let path = Path::new("post.md");
//!     let content = io::read_to_string(path)?;
//!     if let Some(patched) = patcher.patch(&content, &stamp) {
//!         io::write_atomic(path, &patched)?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! A whole run (resolve candidates, patch, report) is one call:
//!
//! ```rust,no_run
//! use clap::Parser;
//! use restamp::{ops, Cli, Result, RunStamp};
//!
//! fn main() -> Result<()> {
//!     let cli = Cli::parse_from(["restamp", "--mode", "full-scan"]);
//!     let summary = ops::run(&cli, &RunStamp::now())?;
//!     println!("{} of {} posts updated", summary.updated, summary.examined);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`core`](crate::core): the run timestamp and the patch rules
//! - [`io`]: candidate discovery (git diff or directory scan) and file access
//! - [`ops`]: one-call orchestration of a whole run
//! - [`error`]: the crate error type
//!
//! Resolver failures (no git, unknown refs) degrade to an empty candidate
//! set so an automated deployment chain is never blocked by a metadata
//! refresh; read and write failures on real files abort the run.

// Public API exports
pub use error::{RestampError, Result};

pub use args::{Cli, Mode};
pub use self::core::{Patcher, RunStamp};
pub use ops::RunSummary;

// Internal modules
pub mod args;
pub mod core;
pub mod error;
pub mod io;
pub mod ops;
