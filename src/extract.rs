use regex::{CaptureMatches, Captures, Regex};
use std::str::Lines;

use crate::error::PatternError;

/// Capture group holding the domain.
const DOMAIN_GROUP: usize = 2;
/// Capture group holding the path, or the whitespace/end that follows a bare domain.
const PATH_GROUP: usize = 3;

/// Path recorded for URLs that carry no path of their own.
pub const ROOT_PATH: &str = "/";

/// A compiled URL pattern with at least three capture groups:
/// scheme, domain, and trailing path.
#[derive(Debug, Clone)]
pub struct MatchPattern {
    regex: Regex,
}

impl MatchPattern {
    pub fn new(source: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(source)?;

        // captures_len counts the implicit whole-match group
        let found = regex.captures_len() - 1;
        if found < PATH_GROUP {
            return Err(PatternError::MissingGroups { found });
        }

        Ok(Self { regex })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn extract<'p, 't>(&'p self, text: &'t str) -> Extractor<'p, 't> {
        Extractor::new(self, text)
    }
}

/// One matched URL, borrowed from the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlMatch<'t> {
    pub domain: &'t str,
    pub path: &'t str,
}

impl<'t> UrlMatch<'t> {
    fn from_captures(captures: &Captures<'t>) -> Self {
        let domain = captures.get(DOMAIN_GROUP).map_or("", |m| m.as_str());
        let path = captures
            .get(PATH_GROUP)
            .map_or(ROOT_PATH, |m| normalize_path(m.as_str()));
        Self { domain, path }
    }
}

/// An empty or whitespace-only path means the URL ended right after its domain.
pub fn normalize_path(raw: &str) -> &str {
    if raw.trim().is_empty() {
        ROOT_PATH
    } else {
        raw
    }
}

/// Lazily yields URL matches line by line, left to right, without overlap.
pub struct Extractor<'p, 't> {
    pattern: &'p MatchPattern,
    lines: Lines<'t>,
    current: Option<CaptureMatches<'p, 't>>,
    lines_scanned: usize,
}

impl<'p, 't> Extractor<'p, 't> {
    pub fn new(pattern: &'p MatchPattern, text: &'t str) -> Self {
        Self {
            pattern,
            lines: text.lines(),
            current: None,
            lines_scanned: 0,
        }
    }

    pub fn lines_scanned(&self) -> usize {
        self.lines_scanned
    }
}

impl<'p, 't> Iterator for Extractor<'p, 't> {
    type Item = UrlMatch<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(captures) = self.current.as_mut().and_then(|matches| matches.next()) {
                return Some(UrlMatch::from_captures(&captures));
            }

            let line = self.lines.next()?;
            self.lines_scanned += 1;
            self.current = Some(self.pattern.regex.captures_iter(line));
        }
    }
}
