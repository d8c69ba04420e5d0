use anyhow::{Context, Result};
use std::fs;
use std::time::Instant;
use tracing::info;

use crate::{engine::CounterEngine, patterns, report::Report, utils, Args};

/// Reads the input log, counts its URLs and writes the report to the output file.
pub fn analyze_log(args: &Args) -> Result<Report> {
    let total_start_time = Instant::now();
    info!(
        action = "start",
        component = "log_analysis",
        input = ?args.input,
        output = ?args.output,
        "Starting log analysis"
    );

    let top_n = utils::validate_args(args)?;
    let pattern = patterns::load_url_pattern(args.pattern.as_deref())?;

    let bytes = fs::read(&args.input)
        .with_context(|| format!("Error while opening file: {}", args.input.display()))?;
    // Stray non-UTF-8 bytes become U+FFFD; URLs around them still match
    let input = String::from_utf8_lossy(&bytes).into_owned();
    info!(
        action = "read",
        component = "log_analysis",
        input_bytes = input.len(),
        "Read input log"
    );

    let mut engine = CounterEngine::new(input, pattern, top_n);
    let report = engine.compute();

    fs::write(&args.output, report.to_string())
        .with_context(|| format!("Couldn't write to file: {}", args.output.display()))?;

    info!(
        action = "complete",
        component = "log_analysis",
        total_urls = report.total_urls,
        duration_ms = total_start_time.elapsed().as_millis(),
        "Analysis completed successfully"
    );

    Ok(report)
}
