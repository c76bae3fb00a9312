use std::path::PathBuf;

use clap::Parser;

use seed_import::{SeedConfig, pipeline};

#[derive(Parser, Debug)]
#[command(
    name = "seed-import",
    about = "Build the seed_list import migration from scraped lead CSV files"
)]
struct Args {
    /// Directory containing the lead `*.csv` exports (env: SEED_INPUT_DIR).
    #[arg(long)]
    input_dir: Option<PathBuf>,

    /// SQL file to overwrite with the generated script (env: SEED_OUTPUT_PATH).
    #[arg(long)]
    output: Option<PathBuf>,

    /// Maximum rows per INSERT statement (env: SEED_BATCH_SIZE).
    #[arg(long)]
    batch_size: Option<usize>,

    /// Target table name (env: SEED_TABLE).
    #[arg(long)]
    table: Option<String>,

    /// Header naming the email column; the third column is used when unset
    /// (env: SEED_EMAIL_HEADER).
    #[arg(long)]
    email_header: Option<String>,
}

impl Args {
    fn into_config(self) -> SeedConfig {
        let mut config = SeedConfig::from_env();
        if let Some(input_dir) = self.input_dir {
            config = config.with_input_dir(input_dir);
        }
        if let Some(output) = self.output {
            config = config.with_output_path(output);
        }
        if let Some(batch_size) = self.batch_size {
            config = config.with_batch_size(batch_size);
        }
        if let Some(table) = self.table {
            config = config.with_table(table);
        }
        if let Some(email_header) = self.email_header {
            config = config.with_email_header(email_header);
        }
        config
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let config = Args::parse().into_config();
    let summary = pipeline::run(&config)?;

    let stats = &summary.stats;
    println!(
        "Wrote {} unique emails ({} statements) to {} from {}/{} files ({} failed, {} duplicates skipped)",
        stats.unique_emails,
        summary.statements,
        summary.output_path.display(),
        stats.files_processed,
        stats.files_found,
        stats.files_failed,
        stats.duplicates
    );
    Ok(())
}
