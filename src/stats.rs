//! Extraction statistics tracking.
//!
//! Tracks how many files and rows a run looked at and what happened to them.

/// Counters for a single extraction run, or for one file within it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractStats {
    /// Number of CSV files discovered in the input directory
    pub files_found: usize,
    /// Number of files parsed to completion
    pub files_processed: usize,
    /// Number of files abandoned because of a read or parse error
    pub files_failed: usize,
    /// Number of data rows read (header excluded)
    pub rows_read: usize,
    /// Rows without enough columns to reach the email field
    pub rows_short: usize,
    /// Candidates missing an `@` or a `.`
    pub rows_rejected: usize,
    /// Accepted candidates that were already in the set
    pub duplicates: usize,
    /// Size of the unique email set
    pub unique_emails: usize,
}

impl ExtractStats {
    /// Merge another ExtractStats into this one by summing all counts.
    ///
    /// Used to fold per-file statistics into the run totals.
    pub fn merge(&mut self, other: ExtractStats) {
        self.files_found += other.files_found;
        self.files_processed += other.files_processed;
        self.files_failed += other.files_failed;
        self.rows_read += other.rows_read;
        self.rows_short += other.rows_short;
        self.rows_rejected += other.rows_rejected;
        self.duplicates += other.duplicates;
        self.unique_emails += other.unique_emails;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_sums_every_counter() {
        let mut total = ExtractStats {
            files_found: 2,
            rows_read: 10,
            ..Default::default()
        };
        total.merge(ExtractStats {
            files_processed: 1,
            files_failed: 1,
            rows_read: 5,
            rows_short: 1,
            rows_rejected: 2,
            duplicates: 3,
            unique_emails: 4,
            ..Default::default()
        });

        assert_eq!(
            total,
            ExtractStats {
                files_found: 2,
                files_processed: 1,
                files_failed: 1,
                rows_read: 15,
                rows_short: 1,
                rows_rejected: 2,
                duplicates: 3,
                unique_emails: 4,
            }
        );
    }
}
