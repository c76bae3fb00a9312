//! Email extraction from lead CSV exports.
//!
//! Each file is decoded permissively, parsed with a header row, and reduced to
//! the trimmed values of its email column. That is the third column unless a
//! header name is configured. Values only need an `@` and a `.` to be
//! accepted; no further address validation is done.

use crate::error::SeedError;
use crate::stats::ExtractStats;
use csv::{ReaderBuilder, StringRecord};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Column holding the email in lead exports; rows must be longer than this.
pub const DEFAULT_EMAIL_COLUMN: usize = 2;

const UTF8_BOM: char = '\u{feff}';

/// Accepted candidates from one file, in row order, plus its row counters.
#[derive(Debug, Default)]
pub struct FileExtract {
    pub emails: Vec<String>,
    pub stats: ExtractStats,
}

/// Unique emails in first-seen order.
#[derive(Debug, Default)]
pub struct EmailSet {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl EmailSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the exact string was already present.
    pub fn insert(&mut self, email: String) -> bool {
        if self.seen.contains(&email) {
            return false;
        }
        self.seen.insert(email.clone());
        self.ordered.push(email);
        true
    }

    /// Add every email, returning how many were duplicates.
    pub fn extend_counting<I>(&mut self, emails: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        let mut duplicates = 0;
        for email in emails {
            if !self.insert(email) {
                duplicates += 1;
            }
        }
        duplicates
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.ordered
    }
}

/// Minimal shape check: the value must contain both `@` and `.`.
pub fn is_candidate_email(value: &str) -> bool {
    value.contains('@') && value.contains('.')
}

/// Decode bytes as UTF-8, dropping invalid sequences and a leading BOM.
pub fn decode_permissive(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    match text.strip_prefix(UTF8_BOM) {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}

/// Pick the email column.
///
/// Without `email_header` this is always the third column. With it, the first
/// header cell equal to it (trimmed, ASCII case-insensitive) is used, and
/// files lacking that header fall back to the third column.
pub fn resolve_email_column(headers: &StringRecord, email_header: Option<&str>) -> usize {
    let Some(wanted) = email_header.map(str::trim) else {
        return DEFAULT_EMAIL_COLUMN;
    };

    headers
        .iter()
        .position(|name| name.trim().eq_ignore_ascii_case(wanted))
        .unwrap_or_else(|| {
            log::debug!("no `{wanted}` header, using column {DEFAULT_EMAIL_COLUMN}");
            DEFAULT_EMAIL_COLUMN
        })
}

/// Extract candidate emails from already-decoded CSV text.
///
/// A blank first line counts as an empty header and the whole text is skipped.
pub fn extract_from_str(
    text: &str,
    email_header: Option<&str>,
) -> Result<FileExtract, csv::Error> {
    let mut extract = FileExtract::default();
    // The csv reader skips blank lines, so check before it sees them.
    if matches!(text.lines().next(), None | Some("")) {
        return Ok(extract);
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let column = resolve_email_column(&headers, email_header);
    for record in reader.records() {
        let record = record?;
        extract.stats.rows_read += 1;

        let Some(field) = record.get(column) else {
            extract.stats.rows_short += 1;
            continue;
        };

        let email = field.trim();
        if is_candidate_email(email) {
            extract.emails.push(email.to_string());
        } else {
            extract.stats.rows_rejected += 1;
        }
    }

    Ok(extract)
}

/// Read and extract one CSV file.
///
/// Any error here is scoped to `path`; callers are expected to log it and
/// continue with the next file.
pub fn extract_file(path: &Path, email_header: Option<&str>) -> Result<FileExtract, SeedError> {
    let bytes = fs::read(path).map_err(|e| SeedError::read_file(path, e))?;
    let text = decode_permissive(&bytes);
    extract_from_str(&text, email_header).map_err(|e| SeedError::csv(path, e))
}
