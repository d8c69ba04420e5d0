use thiserror::Error;

/// Errors raised while configuring a match pattern.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("bad pattern: {0}")]
    Invalid(#[from] regex::Error),

    #[error("bad pattern: expected 3 capture groups (scheme, domain, path), found {found}")]
    MissingGroups { found: usize },
}
