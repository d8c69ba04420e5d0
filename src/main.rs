use clap::Parser;
use tracing::error;
use urltally::{analyze_log, utils, Args};

fn main() {
    let args = Args::parse();
    utils::setup_logging(args.verbose);

    if let Err(e) = analyze_log(&args) {
        error!(error = %format!("{:#}", e), "Analysis failed");
        std::process::exit(1);
    }
}
