use anyhow::Result;
use babynames::{
    config::DataConfig,
    load::{write_national, write_states, DatasetStore},
    report::{normalize_name, render_text, NameReport},
    table::{NameYearSexRecord, NameYearStateRecord, NationalTable, Sex, StateTable},
};
use tempfile::tempdir;
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

fn national() -> NationalTable {
    let rows = [
        ("Mary", 1950, Sex::Female, 3000),
        ("Mary", 1950, Sex::Male, 10),
        ("John", 1950, Sex::Male, 4000),
        ("Mary", 2023, Sex::Female, 1505),
        ("Liam", 2023, Sex::Male, 20000),
    ];
    NationalTable::new(
        rows.iter()
            .map(|&(name, year, sex, count)| NameYearSexRecord {
                name: name.to_string(),
                year,
                sex,
                count,
            })
            .collect(),
    )
}

fn states() -> StateTable {
    StateTable::new(vec![
        NameYearStateRecord::new("Mary", 1950, "NY", 900),
        NameYearStateRecord::new("Mary", 1950, "PA", 700),
        NameYearStateRecord::new("Mary", 1950, "CA", 700),
        NameYearStateRecord::new("John", 1950, "TX", 1200),
    ])
}

#[test]
fn parquet_to_rendered_report() -> Result<()> {
    init_logging();
    let dir = tempdir()?;
    let national_path = dir.path().join("national.parquet");
    let states_path = dir.path().join("states.parquet");
    write_national(&national(), &national_path)?;
    write_states(&states(), &states_path)?;

    let store = DatasetStore::open(DataConfig {
        national: national_path.display().to_string(),
        states: states_path.display().to_string(),
        ..DataConfig::default()
    })?;
    let dataset = store.current();

    let name = normalize_name("mary");
    let report = NameReport::build(&dataset, &name, 1950, 2);

    let national = report.national.expect("Mary is in the 1950 data");
    assert_eq!((national.count, national.rank), (3010, 2));

    let top: Vec<&str> = report
        .top_states
        .as_ref()
        .expect("state data for Mary")
        .iter()
        .map(|s| s.state_full)
        .collect();
    assert_eq!(top, vec!["New York", "California"]);

    let text = render_text(&report)?;
    assert!(text.contains("National rank in 1950: #2 (3,010 babies)"));
    assert!(text.contains("• California — 700 babies"));
    assert!(text.contains("(as of 2023)"));

    let json: serde_json::Value = serde_json::to_value(&report)?;
    assert_eq!(json["national"]["rank"], 2);
    assert_eq!(json["change"]["latest_year"], 2023);
    Ok(())
}

#[test]
fn unknown_name_reports_without_error() -> Result<()> {
    let dataset = babynames::load::Dataset::new(national(), states());
    let report = NameReport::build(&dataset, "Zed", 1950, 5);

    assert!(report.national.is_none());
    assert_eq!(report.sex.male_pct, 0.0);
    assert_eq!(report.sex.female_pct, 0.0);
    assert!(report.top_states.is_none());
    assert_eq!(report.change.and_then(|c| c.change_pct), None);

    let text = render_text(&report)?;
    assert!(text.contains("Not enough data to calculate popularity change."));
    Ok(())
}
