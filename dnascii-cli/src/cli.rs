use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};

use crate::opts::{input_stream, InputStream};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    #[clap(flatten)]
    pub verbose: Verbosity<InfoLevel>,

    /// Don't display a progress bar/spinner
    #[clap(long, value_parser)]
    pub no_progress: bool,

    /// Input FASTA file path; `-` is the standard input
    #[clap(default_value_t, value_parser = input_stream)]
    pub input: InputStream,
}
