use anyhow::{bail, Context, Result};
use babynames::{
    config::{init_logging, DataConfig},
    load::DatasetStore,
    query::DEFAULT_TOP_N,
    report::{normalize_name, render_text, NameReport},
};
use clap::{builder::RangedU64ValueParser, Parser, ValueEnum};
use std::time::Instant;
use tracing::{debug, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "How popular was your name when you were born?"
)]
struct Args {
    /// First name; case does not matter
    #[arg(short, long)]
    name: String,

    /// Birth year, within the years covered by the national table
    #[arg(short, long)]
    year: i32,

    /// How many states to list
    #[arg(long, default_value_t = DEFAULT_TOP_N, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    top_n: usize,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(flatten)]
    data: DataConfig,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let name = normalize_name(&args.name);
    if name.is_empty() {
        println!("Enter a name and year to see statistics.");
        return Ok(());
    }

    let start = Instant::now();
    let store = DatasetStore::open(args.data.clone()).context("loading name tables")?;
    let dataset = store.current();
    info!(elapsed = ?start.elapsed(), "dataset ready");

    let (min_year, max_year) = dataset
        .national
        .year_bounds()
        .context("national table is empty")?;
    if !(min_year..=max_year).contains(&args.year) {
        bail!(
            "year {} is outside the data; choose a year from {} to {}",
            args.year,
            min_year,
            max_year
        );
    }

    debug!(name = %name, year = args.year, top_n = args.top_n, "querying");
    let report = NameReport::build(&dataset, &name, args.year, args.top_n);

    match args.format {
        OutputFormat::Text => {
            let text = render_text(&report).context("rendering report")?;
            print!("{}", text);
        }
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serializing report")?
        ),
    }
    Ok(())
}
