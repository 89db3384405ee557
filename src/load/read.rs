// src/load/read.rs

use anyhow::{bail, Context, Result};
use arrow::{
    array::{Array, ArrayRef, Int64Array, StringArray},
    compute::cast,
    datatypes::DataType,
    record_batch::RecordBatch,
};
use glob::glob;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use rayon::prelude::*;
use std::{
    fs::File,
    path::{Path, PathBuf},
    time::Instant,
};
use tracing::{debug, info, warn};

use crate::table::{NameYearSexRecord, NameYearStateRecord, NationalTable, Sex, StateTable};

pub const NAME_COLUMN: &str = "name";
pub const YEAR_COLUMN: &str = "year";
pub const SEX_COLUMN: &str = "sex";
pub const STATE_COLUMN: &str = "state";
/// Accepted names for the count column, first match wins.
pub const COUNT_COLUMNS: &[&str] = &["count", "name_count"];

type Decoder<T> = fn(&RecordBatch, &mut Vec<T>) -> Result<()>;

/// Expand a path or glob pattern into the sorted list of files it matches.
/// An existing file is used as is, so plain paths with `[` or `*` in them
/// still resolve. Directories inside a real pattern must be escaped with
/// `glob::Pattern::escape`.
pub fn resolve_paths(pattern: &str) -> Result<Vec<PathBuf>> {
    let literal = Path::new(pattern);
    if literal.is_file() {
        return Ok(vec![literal.to_path_buf()]);
    }
    let mut paths: Vec<PathBuf> = glob(pattern)
        .with_context(|| format!("Failed to parse glob pattern: {}", pattern))?
        .filter_map(|p| p.ok())
        .filter(|p| p.is_file())
        .collect();
    if paths.is_empty() {
        bail!("No parquet files found matching pattern: {}", pattern);
    }
    paths.sort();
    Ok(paths)
}

/// Load the national table from every file matching `pattern`.
pub fn load_national(pattern: &str, batch_size: usize) -> Result<NationalTable> {
    let start = Instant::now();
    let rows = read_all(pattern, batch_size, decode_national)?;
    let table = NationalTable::new(rows);
    info!(
        pattern,
        rows = table.len(),
        years = ?table.year_bounds(),
        elapsed = ?start.elapsed(),
        "loaded national table"
    );
    Ok(table)
}

/// Load the per-state table from every file matching `pattern`.
pub fn load_states(pattern: &str, batch_size: usize) -> Result<StateTable> {
    let start = Instant::now();
    let rows = read_all(pattern, batch_size, decode_states)?;
    let table = StateTable::new(rows);
    let unmapped = table.unmapped_codes();
    if !unmapped.is_empty() {
        warn!(codes = ?unmapped, "state codes without a full name; rows kept but not listed");
    }
    info!(
        pattern,
        rows = table.len(),
        years = ?table.year_bounds(),
        elapsed = ?start.elapsed(),
        "loaded state table"
    );
    Ok(table)
}

fn read_all<T: Send>(pattern: &str, batch_size: usize, decode: Decoder<T>) -> Result<Vec<T>> {
    let paths = resolve_paths(pattern)?;
    info!("Found {} files matching pattern: {}", paths.len(), pattern);

    let per_file = paths
        .par_iter()
        .map(|path| read_file(path, batch_size, decode))
        .collect::<Result<Vec<_>>>()?;
    Ok(per_file.into_iter().flatten().collect())
}

fn read_file<T>(path: &Path, batch_size: usize, decode: Decoder<T>) -> Result<Vec<T>> {
    let file = File::open(path).with_context(|| format!("failed to open `{}`", path.display()))?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)
        .with_context(|| {
            format!(
                "failed to create RecordBatchReaderBuilder for `{}`",
                path.display()
            )
        })?
        .with_batch_size(batch_size.max(1))
        .build()
        .with_context(|| format!("failed to build RecordBatchReader for `{}`", path.display()))?;

    let mut out = Vec::new();
    for batch in reader {
        let batch = batch
            .with_context(|| format!("error reading RecordBatch from `{}`", path.display()))?;
        decode(&batch, &mut out).with_context(|| format!("decoding `{}`", path.display()))?;
    }
    debug!(path = %path.display(), rows = out.len(), "decoded file");
    Ok(out)
}

fn decode_national(batch: &RecordBatch, out: &mut Vec<NameYearSexRecord>) -> Result<()> {
    let names = utf8_column(batch, &[NAME_COLUMN])?;
    let years = int64_column(batch, &[YEAR_COLUMN])?;
    let sexes = utf8_column(batch, &[SEX_COLUMN])?;
    let counts = int64_column(batch, COUNT_COLUMNS)?;

    out.reserve(batch.num_rows());
    for row in 0..batch.num_rows() {
        let code = str_at(&sexes, row, SEX_COLUMN)?;
        let sex = Sex::from_str(code)
            .with_context(|| format!("unknown sex code `{}` at row {}", code, row))?;
        out.push(NameYearSexRecord {
            name: str_at(&names, row, NAME_COLUMN)?.to_string(),
            year: year_at(&years, row)?,
            sex,
            count: count_at(&counts, row)?,
        });
    }
    Ok(())
}

fn decode_states(batch: &RecordBatch, out: &mut Vec<NameYearStateRecord>) -> Result<()> {
    let names = utf8_column(batch, &[NAME_COLUMN])?;
    let years = int64_column(batch, &[YEAR_COLUMN])?;
    let states = utf8_column(batch, &[STATE_COLUMN])?;
    let counts = int64_column(batch, COUNT_COLUMNS)?;

    out.reserve(batch.num_rows());
    for row in 0..batch.num_rows() {
        out.push(NameYearStateRecord::new(
            str_at(&names, row, NAME_COLUMN)?,
            year_at(&years, row)?,
            str_at(&states, row, STATE_COLUMN)?,
            count_at(&counts, row)?,
        ));
    }
    Ok(())
}

fn find_column<'a>(batch: &'a RecordBatch, names: &[&str]) -> Result<&'a ArrayRef> {
    names
        .iter()
        .find_map(|n| batch.column_by_name(n))
        .with_context(|| format!("missing column {:?}", names))
}

/// Text column as plain `Utf8`, whatever string encoding the file used.
fn utf8_column(batch: &RecordBatch, names: &[&str]) -> Result<StringArray> {
    let col = find_column(batch, names)?;
    let arr = cast(col, &DataType::Utf8)
        .with_context(|| format!("column {:?} is not text: {}", names, col.data_type()))?;
    arr.as_any()
        .downcast_ref::<StringArray>()
        .cloned()
        .with_context(|| format!("column {:?} did not cast to utf8", names))
}

/// Integer column widened to `Int64`.
fn int64_column(batch: &RecordBatch, names: &[&str]) -> Result<Int64Array> {
    let col = find_column(batch, names)?;
    let arr = cast(col, &DataType::Int64)
        .with_context(|| format!("column {:?} is not integer: {}", names, col.data_type()))?;
    arr.as_any()
        .downcast_ref::<Int64Array>()
        .cloned()
        .with_context(|| format!("column {:?} did not cast to int64", names))
}

fn str_at<'a>(arr: &'a StringArray, row: usize, column: &str) -> Result<&'a str> {
    if arr.is_null(row) {
        bail!("null `{}` at row {}", column, row);
    }
    Ok(arr.value(row))
}

fn year_at(arr: &Int64Array, row: usize) -> Result<i32> {
    if arr.is_null(row) {
        bail!("null `{}` at row {}", YEAR_COLUMN, row);
    }
    let v = arr.value(row);
    i32::try_from(v).with_context(|| format!("year {} out of range at row {}", v, row))
}

fn count_at(arr: &Int64Array, row: usize) -> Result<u64> {
    if arr.is_null(row) {
        bail!("null count at row {}", row);
    }
    let v = arr.value(row);
    u64::try_from(v).with_context(|| format!("negative count {} at row {}", v, row))
}
