//! End-to-end seed import: discover, extract, dedupe, emit.
//!
//! The run is strictly sequential. Read and parse failures are confined to the
//! file they occur in; everything else (input directory, output file,
//! configuration) aborts the run.

use crate::config::SeedConfig;
use crate::discovery::discover_csv_files;
use crate::emit::write_seed_file;
use crate::error::SeedError;
use crate::extract::{EmailSet, extract_file};
use crate::stats::ExtractStats;
use std::path::{Path, PathBuf};

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub stats: ExtractStats,
    pub output_path: PathBuf,
    pub statements: usize,
}

/// Collect the unique emails from every CSV file in `input_dir`.
///
/// `email_header` optionally names the email column; otherwise the third
/// column is read.
pub fn collect_emails(
    input_dir: &Path,
    email_header: Option<&str>,
) -> Result<(EmailSet, ExtractStats), SeedError> {
    let files = discover_csv_files(input_dir)?;
    log::info!("found {} CSV files in {}", files.len(), input_dir.display());

    let mut emails = EmailSet::new();
    let mut stats = ExtractStats {
        files_found: files.len(),
        ..Default::default()
    };

    for path in &files {
        log::info!("processing {}", path.display());
        match extract_file(path, email_header) {
            Ok(extract) => {
                let mut file_stats = extract.stats;
                file_stats.files_processed = 1;
                file_stats.duplicates = emails.extend_counting(extract.emails);
                log::debug!(
                    "{}: {} rows, {} short, {} rejected, {} duplicates",
                    path.display(),
                    file_stats.rows_read,
                    file_stats.rows_short,
                    file_stats.rows_rejected,
                    file_stats.duplicates
                );
                stats.merge(file_stats);
            }
            Err(err) if err.is_per_file() => {
                log::warn!("error processing {}: {}", path.display(), err);
                stats.files_failed += 1;
            }
            Err(err) => return Err(err),
        }
    }

    stats.unique_emails = emails.len();
    if emails.is_empty() {
        log::warn!("no emails found in {}", input_dir.display());
    } else {
        log::info!("extracted {} unique emails", emails.len());
    }
    Ok((emails, stats))
}

/// Run the full import described by `config`.
pub fn run(config: &SeedConfig) -> Result<RunSummary, SeedError> {
    config.validate()?;

    let (emails, stats) = collect_emails(&config.input_dir, config.email_header.as_deref())?;
    let statements = write_seed_file(
        &config.output_path,
        emails.as_slice(),
        &config.table,
        config.batch_size,
    )?;
    log::info!(
        "wrote {} INSERT statements to {}",
        statements,
        config.output_path.display()
    );

    Ok(RunSummary {
        stats,
        output_path: config.output_path.clone(),
        statements,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn collects_across_files_and_counts_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("a.csv"),
            "first,last,email\nA,Y,a@yahoo.com\nB,Z,b@gmail.com\nshort,row\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("b.csv"),
            "first,last,email\nA,Y,a@yahoo.com\nC,W,not-an-email\n",
        )
        .unwrap();

        let (emails, stats) = collect_emails(dir.path(), None).unwrap();
        assert_eq!(emails.as_slice(), ["a@yahoo.com", "b@gmail.com"]);
        assert_eq!(stats.files_found, 2);
        assert_eq!(stats.files_processed, 2);
        assert_eq!(stats.files_failed, 0);
        assert_eq!(stats.rows_read, 5);
        assert_eq!(stats.rows_short, 1);
        assert_eq!(stats.rows_rejected, 1);
        assert_eq!(stats.duplicates, 1);
        assert_eq!(stats.unique_emails, 2);
    }

    #[test]
    fn invalid_config_fails_before_any_io() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("seed.sql");
        let config = SeedConfig::default()
            .with_input_dir(dir.path())
            .with_output_path(&output)
            .with_batch_size(0);

        assert!(matches!(run(&config), Err(SeedError::InvalidConfig(_))));
        assert!(!output.exists());
    }
}
