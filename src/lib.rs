pub mod analyze;
pub mod args;
pub mod engine;
pub mod error;
pub mod extract;
pub mod patterns;
pub mod rank;
pub mod report;
pub mod tally;
pub mod utils;

pub use analyze::analyze_log;
pub use args::Args;
pub use engine::CounterEngine;
pub use error::PatternError;
pub use extract::{Extractor, MatchPattern, UrlMatch};
pub use patterns::{default_url_pattern, load_url_pattern};
pub use rank::{top_n, RankedEntry};
pub use report::Report;
pub use tally::{FrequencyTable, Tally};
