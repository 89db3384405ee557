use anyhow::Result;
use babynames::{
    config::{init_logging, DEFAULT_NATIONAL_PATH, DEFAULT_STATES_PATH},
    load::{ssa, write_national, write_states},
};
use clap::Parser;
use std::{path::PathBuf, time::Instant};
use tracing::info;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Build the Parquet tables from the SSA name files"
)]
struct Args {
    /// Directory holding yobYYYY.txt files
    #[arg(long)]
    national_dir: PathBuf,

    /// Directory holding the per-state XX.TXT files
    #[arg(long)]
    states_dir: Option<PathBuf>,

    #[arg(long, default_value = DEFAULT_NATIONAL_PATH)]
    national_out: PathBuf,

    #[arg(long, default_value = DEFAULT_STATES_PATH)]
    states_out: PathBuf,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();
    let start = Instant::now();

    let national = ssa::import_national(&args.national_dir)?;
    write_national(&national, &args.national_out)?;

    if let Some(dir) = &args.states_dir {
        let states = ssa::import_states(dir)?;
        write_states(&states, &args.states_out)?;
    }

    info!(elapsed = ?start.elapsed(), "tables built");
    Ok(())
}
