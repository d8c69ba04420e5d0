use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::extract::MatchPattern;

// Include the default pattern at compile time
const DEFAULT_PATTERN_SOURCE: &str = include_str!("../default_url_pattern.txt");

/// The built-in `http(s)://domain[/path]` pattern.
pub fn default_url_pattern() -> Result<MatchPattern> {
    parse_pattern_file(DEFAULT_PATTERN_SOURCE, "embedded default")
}

pub fn load_url_pattern(pattern_file_path: Option<&Path>) -> Result<MatchPattern> {
    let start_time = Instant::now();
    info!(
        action = "start",
        component = "pattern_loading",
        "Starting URL pattern loading"
    );

    let pattern = if let Some(path) = pattern_file_path {
        info!(action = "load", component = "pattern_file", file_path = ?path, "Loading pattern from specified file");
        if !path.exists() {
            anyhow::bail!("Pattern file not found: {:?}", path);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read pattern file {:?}", path))?;
        parse_pattern_file(&content, &path.display().to_string())?
    } else {
        info!(
            action = "load",
            component = "embedded_pattern",
            "Using embedded default pattern"
        );
        default_url_pattern()?
    };

    info!(
        action = "complete",
        component = "pattern_loading",
        pattern = pattern.as_str(),
        duration_ms = start_time.elapsed().as_millis(),
        "Successfully compiled pattern"
    );
    Ok(pattern)
}

/// Reads the single pattern out of a pattern file. Blank lines and `#`
/// comments are skipped.
pub fn parse_pattern_file(content: &str, origin: &str) -> Result<MatchPattern> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(line_num, line)| (line_num + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

    let Some((line_num, source)) = lines.next() else {
        anyhow::bail!("No pattern found in {}", origin);
    };

    if let Some((extra_line, _)) = lines.next() {
        anyhow::bail!(
            "Only one pattern is supported, but {} has another at line {}",
            origin,
            extra_line
        );
    }

    MatchPattern::new(source)
        .with_context(|| format!("Invalid pattern at line {} of {}", line_num, origin))
}
