use std::collections::HashMap;

use crate::extract::UrlMatch;

/// Occurrence counts keyed by domain or path. Iteration order is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bumps the count for `key`, creating it at 1 if absent.
    pub fn increment(&mut self, key: &str) {
        match self.counts.get_mut(key) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(key.to_owned(), 1);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<u64> {
        self.counts.get(key).copied()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(key, count)| (key.as_str(), *count))
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }
}

impl<K: AsRef<str>> FromIterator<(K, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, count) in iter {
            *table.counts.entry(key.as_ref().to_owned()).or_insert(0) += count;
        }
        table
    }
}

/// Domain and path tables built in one pass over extracted URLs.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    pub domains: FrequencyTable,
    pub paths: FrequencyTable,
    pub total_urls: u64,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, url: UrlMatch<'_>) {
        self.domains.increment(url.domain);
        self.paths.increment(url.path);
        self.total_urls += 1;
    }

    pub fn record_all<'t>(&mut self, urls: impl IntoIterator<Item = UrlMatch<'t>>) {
        for url in urls {
            self.record(url);
        }
    }

    pub fn reset(&mut self) {
        self.domains.clear();
        self.paths.clear();
        self.total_urls = 0;
    }
}
