use std::num::NonZeroUsize;

use time::macros::format_description;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::EnvFilter;

pub fn setup_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::INFO
    } else {
        LevelFilter::ERROR
    };

    // RUST_LOG still wins over the default level
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTime::new(format_description!(
            "[hour]:[minute]:[second].[subsecond digits:3]"
        )))
        .with_writer(std::io::stderr)
        .init();
}

/// Checks argument values clap cannot express and returns the report size.
pub fn validate_args(args: &crate::args::Args) -> anyhow::Result<NonZeroUsize> {
    let Some(top) = NonZeroUsize::new(args.top) else {
        anyhow::bail!("-n must be greater than 0");
    };

    Ok(top)
}
