#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use anyhow::Context;
use clap::Parser;
use human_panic::setup_panic;
use lazy_static::lazy_static;

use crate::cli::Cli;
use crate::logging::init_logging;
use crate::progress_bar::DecodeProgressBar;

mod cli;
mod cmd;
mod logging;
mod opts;
mod progress_bar;

lazy_static! {
    pub(crate) static ref PROGRESS_BAR: DecodeProgressBar = DecodeProgressBar::new();
}

fn main() -> anyhow::Result<()> {
    setup_panic!();

    let cli: Cli = Cli::parse();

    if !cli.no_progress {
        PROGRESS_BAR.show();
    }

    init_logging(cli.verbose.log_level_filter()).expect("Could not initialize logging");

    let reader = cli.input.as_reader()?;
    PROGRESS_BAR.set_total_bytes(reader.length()?.unwrap_or(0));

    cmd::analyze::analyze(reader.into_read()).context("Failed to analyze given sequence file")?;

    PROGRESS_BAR.finish();
    Ok(())
}
