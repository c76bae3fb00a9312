use crate::error::SeedError;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_INPUT_DIR: &str = "leads";
pub const DEFAULT_OUTPUT_PATH: &str = "supabase/migrations/0011_seed_import.sql";
pub const DEFAULT_BATCH_SIZE: usize = 1000;
pub const DEFAULT_TABLE: &str = "seed_list";

fn env_usize(key: &str, default: usize) -> usize {
    env::var(key)
        .ok()
        .and_then(|value| value.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn env_string(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_optional(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Runtime configuration for one seed import run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    pub input_dir: PathBuf,
    pub output_path: PathBuf,
    pub batch_size: usize,
    pub table: String,
    /// Header naming the email column; `None` reads the third column.
    pub email_header: Option<String>,
}

impl SeedConfig {
    pub fn from_env() -> Self {
        Self {
            input_dir: PathBuf::from(env_string("SEED_INPUT_DIR", DEFAULT_INPUT_DIR)),
            output_path: PathBuf::from(env_string("SEED_OUTPUT_PATH", DEFAULT_OUTPUT_PATH)),
            batch_size: env_usize("SEED_BATCH_SIZE", DEFAULT_BATCH_SIZE),
            table: env_string("SEED_TABLE", DEFAULT_TABLE),
            email_header: env_optional("SEED_EMAIL_HEADER"),
        }
    }

    pub fn with_input_dir(mut self, input_dir: impl Into<PathBuf>) -> Self {
        self.input_dir = input_dir.into();
        self
    }

    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    pub fn with_email_header(mut self, email_header: impl Into<String>) -> Self {
        self.email_header = Some(email_header.into());
        self
    }

    /// Reject settings that would produce an empty or injectable script.
    pub fn validate(&self) -> Result<(), SeedError> {
        if self.batch_size == 0 {
            return Err(SeedError::InvalidConfig(
                "batch size must be at least 1".to_string(),
            ));
        }
        if !is_sql_identifier(&self.table) {
            return Err(SeedError::InvalidConfig(format!(
                "table name `{}` is not a plain SQL identifier",
                self.table
            )));
        }
        Ok(())
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            batch_size: DEFAULT_BATCH_SIZE,
            table: DEFAULT_TABLE.to_string(),
            email_header: None,
        }
    }
}

/// Accepts `name` or `schema.name` made of ASCII letters, digits, and underscores.
fn is_sql_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    !value.ends_with('.') && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}
