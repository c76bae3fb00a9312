//! SQL seed script generation.
//!
//! Emails are written as batched `INSERT ... ON CONFLICT (email) DO NOTHING`
//! statements so the script can be re-applied without duplicating rows.

use crate::error::SeedError;
use crate::provider::get_provider;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub const SCRIPT_HEADER: &str = "-- Migration to import scraped leads as seeds";

/// Escape a value for use inside a single-quoted SQL literal.
pub fn escape_sql_literal(value: &str) -> String {
    value.replace('\'', "''")
}

/// Format one `('email','provider')` value tuple.
pub fn value_tuple(email: &str) -> String {
    format!(
        "('{}','{}')",
        escape_sql_literal(email),
        get_provider(email)
    )
}

/// Write the seed script to `out`, returning the number of INSERT statements.
///
/// A `batch_size` of zero is treated as one row per statement.
pub fn write_seed_sql<W: Write>(
    out: &mut W,
    emails: &[String],
    table: &str,
    batch_size: usize,
) -> io::Result<usize> {
    writeln!(out, "{SCRIPT_HEADER}")?;

    let mut statements = 0;
    for batch in emails.chunks(batch_size.max(1)) {
        let values: Vec<String> = batch.iter().map(|email| value_tuple(email)).collect();

        writeln!(out, "INSERT INTO {table} (email, provider) VALUES")?;
        out.write_all(values.join(",\n").as_bytes())?;
        write!(out, "\nON CONFLICT (email) DO NOTHING;\n\n")?;

        statements += 1;
        log::debug!("wrote batch {} ({} rows)", statements, batch.len());
    }

    Ok(statements)
}

/// Truncate `path` and write the seed script to it.
///
/// The parent directory must already exist.
pub fn write_seed_file(
    path: &Path,
    emails: &[String],
    table: &str,
    batch_size: usize,
) -> Result<usize, SeedError> {
    if batch_size == 0 {
        return Err(SeedError::InvalidConfig(
            "batch size must be at least 1".to_string(),
        ));
    }

    let file = File::create(path).map_err(|e| SeedError::write_output(path, e))?;
    let mut out = BufWriter::new(file);
    let statements = write_seed_sql(&mut out, emails, table, batch_size)
        .map_err(|e| SeedError::write_output(path, e))?;
    out.flush().map_err(|e| SeedError::write_output(path, e))?;

    Ok(statements)
}
