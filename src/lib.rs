//! Seed-list generation from scraped lead CSV exports.
//!
//! Reads every `*.csv` file in an input directory, keeps the unique email
//! addresses, tags each with its mail provider, and writes an idempotent SQL
//! script that loads them into the `seed_list` table.
//!
//! ```rust,ignore
//! use seed_import::{SeedConfig, pipeline};
//!
//! let summary = pipeline::run(&SeedConfig::from_env())?;
//! println!("{} unique emails", summary.stats.unique_emails);
//! ```

pub mod config;
pub mod discovery;
pub mod emit;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod provider;
pub mod stats;

pub use config::SeedConfig;
pub use error::SeedError;
pub use extract::EmailSet;
pub use pipeline::{RunSummary, run};
pub use provider::{Provider, get_provider};
pub use stats::ExtractStats;
