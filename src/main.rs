use anyhow::Result;
use clap::Parser;

use restamp::{ops, Cli, RunStamp};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // one instant per run, shared by every file
    let stamp = RunStamp::now();
    let summary = ops::run(&cli, &stamp)?;
    log::debug!(
        "done: {} examined, {} updated",
        summary.examined,
        summary.updated
    );

    Ok(())
}
