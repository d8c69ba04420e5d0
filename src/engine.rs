use std::num::NonZeroUsize;
use std::time::Instant;

use tracing::info;

use crate::extract::MatchPattern;
use crate::rank::top_n;
use crate::report::Report;
use crate::tally::Tally;

/// Counts domains and paths of the URLs found in one input.
///
/// Configure with [`CounterEngine::new`] or [`CounterEngine::prepare`], then
/// call [`CounterEngine::compute`] as often as needed. Every call re-scans
/// the input from scratch.
#[derive(Debug, Clone)]
pub struct CounterEngine {
    input: String,
    pattern: MatchPattern,
    top_n: NonZeroUsize,
    tally: Tally,
}

impl CounterEngine {
    pub fn new(input: impl Into<String>, pattern: MatchPattern, top_n: NonZeroUsize) -> Self {
        Self {
            input: input.into(),
            pattern,
            top_n,
            tally: Tally::new(),
        }
    }

    /// Replaces the configuration and drops all accumulated counts.
    pub fn prepare(
        &mut self,
        input: impl Into<String>,
        pattern: MatchPattern,
        top_n: NonZeroUsize,
    ) {
        self.input = input.into();
        self.pattern = pattern;
        self.top_n = top_n;
        self.tally.reset();
    }

    pub fn top_n(&self) -> NonZeroUsize {
        self.top_n
    }

    /// Counts from the most recent [`CounterEngine::compute`].
    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    pub fn compute(&mut self) -> Report {
        let start_time = Instant::now();
        info!(
            action = "start",
            component = "counter_engine",
            input_bytes = self.input.len(),
            top_n = self.top_n.get(),
            pattern = self.pattern.as_str(),
            "Starting URL counting"
        );

        self.tally.reset();
        let mut extractor = self.pattern.extract(&self.input);
        self.tally.record_all(extractor.by_ref());

        info!(
            action = "extract",
            component = "counter_engine",
            lines_scanned = extractor.lines_scanned(),
            url_count = self.tally.total_urls,
            distinct_domains = self.tally.domains.len(),
            distinct_paths = self.tally.paths.len(),
            "Extracted URLs"
        );

        let n = self.top_n.get();
        let report = Report {
            total_urls: self.tally.total_urls,
            distinct_domains: self.tally.domains.len(),
            distinct_paths: self.tally.paths.len(),
            top_domains: top_n(&self.tally.domains, n),
            top_paths: top_n(&self.tally.paths, n),
        };

        info!(
            action = "complete",
            component = "counter_engine",
            duration_ms = start_time.elapsed().as_millis(),
            "URL counting completed"
        );

        report
    }

    /// Runs [`CounterEngine::compute`] and renders the report text.
    pub fn compute_report(&mut self) -> String {
        self.compute().to_string()
    }
}
