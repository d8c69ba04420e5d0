use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "urltally",
    about = "Count the most frequent URL domains and paths in a text log",
    version,
    long_about = None
)]
pub struct Args {
    /// Number of top domains and paths to report
    #[arg(short = 'n', long = "top", value_name = "N", default_value_t = 1)]
    pub top: usize,

    /// Path to a file holding a custom URL match pattern
    #[arg(short, long, value_name = "FILE")]
    pub pattern: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Log file to scan
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// File the report is written to
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,
}
