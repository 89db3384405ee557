// src/load/ssa.rs
//
// Readers for the raw SSA name files the Parquet tables are built from.
//   national:  yobYYYY.txt   name,sex,count
//   per state: XX.TXT        state,sex,year,name,count

use anyhow::{bail, Context, Result};
use csv::{ReaderBuilder, Trim};
use glob::{glob, Pattern};
use rayon::prelude::*;
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

use crate::table::{NameYearSexRecord, NameYearStateRecord, NationalTable, Sex, StateTable};

/// Read every `yob*.txt` in `dir` into a national table.
pub fn import_national(dir: &Path) -> Result<NationalTable> {
    let files = list(dir, "yob*.txt")?;
    let per_file = files
        .par_iter()
        .map(|p| read_national_file(p))
        .collect::<Result<Vec<_>>>()?;
    let table = NationalTable::new(per_file.into_iter().flatten().collect());
    info!(files = files.len(), rows = table.len(), "imported national files");
    Ok(table)
}

/// Read every two-letter `*.TXT` in `dir` into a state table.
pub fn import_states(dir: &Path) -> Result<StateTable> {
    let files: Vec<PathBuf> = list(dir, "*.[Tt][Xx][Tt]")?
        .into_iter()
        .filter(|p| {
            let keep = p
                .file_stem()
                .and_then(|s| s.to_str())
                .is_some_and(|s| s.len() == 2);
            if !keep {
                debug!(path = %p.display(), "skipping non-state file");
            }
            keep
        })
        .collect();
    let per_file = files
        .par_iter()
        .map(|p| read_state_file(p))
        .collect::<Result<Vec<_>>>()?;
    let table = StateTable::new(per_file.into_iter().flatten().collect());
    info!(files = files.len(), rows = table.len(), "imported state files");
    Ok(table)
}

/// Files in `dir` matching `pattern`. Only `pattern` is a glob; `dir` is
/// taken literally even if it contains `[`, `*` or `?`.
fn list(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let full = format!("{}/{}", Pattern::escape(&dir.to_string_lossy()), pattern);
    let mut paths: Vec<PathBuf> = glob(&full)
        .with_context(|| format!("Failed to read glob pattern '{}'", full))?
        .filter_map(|entry| entry.ok())
        .collect();
    if paths.is_empty() {
        bail!("No files found under '{}'", full);
    }
    paths.sort();
    Ok(paths)
}

/// One national year file; the year comes from the file name.
pub fn read_national_file(path: &Path) -> Result<Vec<NameYearSexRecord>> {
    let year = year_from_filename(path)?;
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open '{}'", path.display()))?;

    let mut out = Vec::new();
    for (line, rec) in rdr.deserialize::<(String, String, u64)>().enumerate() {
        let (name, sex, count) =
            rec.with_context(|| format!("parsing line {} of '{}'", line + 1, path.display()))?;
        let sex = Sex::from_str(&sex).with_context(|| {
            format!("unknown sex `{}` on line {} of '{}'", sex, line + 1, path.display())
        })?;
        out.push(NameYearSexRecord {
            name,
            year,
            sex,
            count,
        });
    }
    Ok(out)
}

/// One state file. Counts are summed over sex, which the state table drops.
pub fn read_state_file(path: &Path) -> Result<Vec<NameYearStateRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open '{}'", path.display()))?;

    let mut totals: BTreeMap<(String, i32, String), u64> = BTreeMap::new();
    for (line, rec) in rdr
        .deserialize::<(String, String, i32, String, u64)>()
        .enumerate()
    {
        let (state, _sex, year, name, count) =
            rec.with_context(|| format!("parsing line {} of '{}'", line + 1, path.display()))?;
        *totals.entry((name, year, state)).or_insert(0) += count;
    }

    Ok(totals
        .into_iter()
        .map(|((name, year, state), count)| NameYearStateRecord::new(name, year, &state, count))
        .collect())
}

fn year_from_filename(path: &Path) -> Result<i32> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .and_then(|s| s.strip_prefix("yob"))
        .and_then(|y| y.parse().ok())
        .with_context(|| format!("expected yobYYYY.txt, got '{}'", path.display()))
}
