use std::fmt;

use crate::rank::RankedEntry;

/// Summary counts plus the ranked domain and path lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub total_urls: u64,
    pub distinct_domains: usize,
    pub distinct_paths: usize,
    pub top_domains: Vec<RankedEntry>,
    pub top_paths: Vec<RankedEntry>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "total urls {}, domains {}, paths {}",
            self.total_urls, self.distinct_domains, self.distinct_paths
        )?;

        writeln!(f, "\ntop domains")?;
        write_entries(f, &self.top_domains)?;

        writeln!(f, "\ntop paths")?;
        write_entries(f, &self.top_paths)
    }
}

fn write_entries(f: &mut fmt::Formatter<'_>, entries: &[RankedEntry]) -> fmt::Result {
    for entry in entries {
        writeln!(f, "{} {}", entry.count, entry.key)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_exact_layout() {
        let report = Report {
            total_urls: 3,
            distinct_domains: 2,
            distinct_paths: 2,
            top_domains: vec![
                RankedEntry::new("site1.com", 2),
                RankedEntry::new("site2.com", 1),
            ],
            top_paths: vec![RankedEntry::new("/page", 2), RankedEntry::new("/", 1)],
        };

        assert_eq!(
            report.to_string(),
            "total urls 3, domains 2, paths 2\n\
             \n\
             top domains\n\
             2 site1.com\n\
             1 site2.com\n\
             \n\
             top paths\n\
             2 /page\n\
             1 /\n"
        );
    }

    #[test]
    fn test_renders_empty_sections() {
        let report = Report {
            total_urls: 0,
            distinct_domains: 0,
            distinct_paths: 0,
            top_domains: Vec::new(),
            top_paths: Vec::new(),
        };

        assert_eq!(
            report.to_string(),
            "total urls 0, domains 0, paths 0\n\ntop domains\n\ntop paths\n"
        );
    }
}
