use anyhow::{Context, Result};
use babynames::{
    config::{init_logging, DataConfig},
    load::{read::resolve_paths, Dataset},
    query::year_leaderboard,
    report::render::thousands,
};
use clap::Parser;
use parquet::file::reader::{FileReader, SerializedFileReader};
use std::{collections::HashSet, fs::File, path::Path};

#[derive(Parser)]
#[command(author, version, about = "Summarise the baby-name Parquet tables")]
struct Args {
    /// How many leading names of the latest year to list
    #[arg(long, default_value_t = 10)]
    top: usize,

    #[command(flatten)]
    data: DataConfig,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    println!("=== Files ===");
    for pattern in [&args.data.national, &args.data.states] {
        for path in resolve_paths(pattern)? {
            print_file(&path)?;
        }
    }
    println!();

    let dataset = Dataset::load(&args.data)?;

    let national = &dataset.national;
    let names: HashSet<&str> = national.rows().iter().map(|r| r.name.as_str()).collect();
    println!("=== National table ===");
    println!("Rows:           {}", thousands(national.len() as u64));
    println!("Distinct names: {}", thousands(names.len() as u64));
    match national.year_bounds() {
        Some((lo, hi)) => println!("Years:          {} – {}", lo, hi),
        None => println!("Years:          <none>"),
    }
    println!("Distinct years: {}", national.years().count());
    if let Some(latest) = national.latest_year() {
        println!("Top names in {}:", latest);
        for entry in year_leaderboard(national, latest).iter().take(args.top) {
            println!(
                "  #{:<4} {:<20} {:>10}",
                entry.rank,
                entry.name,
                thousands(entry.count)
            );
        }
    }
    println!();

    let states = &dataset.states;
    println!("=== State table ===");
    println!("Rows:           {}", thousands(states.len() as u64));
    match states.year_bounds() {
        Some((lo, hi)) => println!("Years:          {} – {}", lo, hi),
        None => println!("Years:          <none>"),
    }
    println!("States seen:    {}", states.states_seen().len());
    let unmapped = states.unmapped_codes();
    if unmapped.is_empty() {
        println!("Unmapped codes: <none>");
    } else {
        for (code, rows) in unmapped {
            println!("Unmapped code:  {} ({} rows)", code, rows);
        }
    }

    Ok(())
}

/// One line per Parquet file: rows, row groups and column names.
fn print_file(path: &Path) -> Result<()> {
    let file = File::open(path).with_context(|| format!("Failed to open '{}'", path.display()))?;
    let reader = SerializedFileReader::new(file)
        .with_context(|| format!("Failed to read Parquet '{}'", path.display()))?;
    let meta = reader.metadata();
    let columns: Vec<&str> = meta
        .file_metadata()
        .schema_descr()
        .columns()
        .iter()
        .map(|c| c.name())
        .collect();
    println!(
        "{}: {} rows in {} row groups [{}]",
        path.display(),
        meta.file_metadata().num_rows(),
        meta.num_row_groups(),
        columns.join(", ")
    );
    Ok(())
}
