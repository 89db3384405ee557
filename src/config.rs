// src/config.rs

use clap::Args;

pub const DEFAULT_NATIONAL_PATH: &str = "data/us_baby_names_national.parquet";
pub const DEFAULT_STATES_PATH: &str = "data/us_baby_names_top_states.parquet";
pub const DEFAULT_BATCH_SIZE: usize = 8192;

/// Where the two Parquet tables live. Each path may be a glob matching
/// several files, which are read and concatenated.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct DataConfig {
    /// National table: name, year, sex, count
    #[arg(long, env = "BABYNAMES_NATIONAL", default_value = DEFAULT_NATIONAL_PATH)]
    pub national: String,

    /// Per-state table: name, year, state, count
    #[arg(long, env = "BABYNAMES_STATES", default_value = DEFAULT_STATES_PATH)]
    pub states: String,

    /// Rows per Arrow batch while decoding
    #[arg(long, env = "BABYNAMES_BATCH_SIZE", default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            national: DEFAULT_NATIONAL_PATH.to_string(),
            states: DEFAULT_STATES_PATH.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

/// Install the fmt subscriber used by every binary. Logs go to stderr so
/// stdout carries only the report.
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();
}
