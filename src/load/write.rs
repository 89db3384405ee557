// src/load/write.rs

use anyhow::{Context, Result};
use arrow::{
    array::{ArrayRef, Int32Array, Int64Array, StringArray},
    datatypes::{DataType as ArrowDataType, Field, Schema as ArrowSchema},
    record_batch::RecordBatch,
};
use parquet::{arrow::ArrowWriter, basic::Compression, file::properties::WriterProperties};
use std::{
    fs::{self, File},
    io::BufWriter,
    path::Path,
    sync::Arc,
};
use tracing::info;

use super::read::{COUNT_COLUMNS, NAME_COLUMN, SEX_COLUMN, STATE_COLUMN, YEAR_COLUMN};
use crate::table::{NationalTable, StateTable};

/// Write the national table as a single Parquet file at `path`.
pub fn write_national(table: &NationalTable, path: &Path) -> Result<()> {
    let schema = Arc::new(ArrowSchema::new(vec![
        Field::new(NAME_COLUMN, ArrowDataType::Utf8, false),
        Field::new(YEAR_COLUMN, ArrowDataType::Int32, false),
        Field::new(SEX_COLUMN, ArrowDataType::Utf8, false),
        Field::new(COUNT_COLUMNS[0], ArrowDataType::Int64, false),
    ]));

    let rows = table.rows();
    let counts = to_i64(rows.iter().map(|r| r.count))?;
    let arrays: Vec<ArrayRef> = vec![
        Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.name.as_str()))),
        Arc::new(Int32Array::from_iter_values(rows.iter().map(|r| r.year))),
        Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.sex.as_str()))),
        Arc::new(Int64Array::from(counts)),
    ];
    write_batch(path, schema, arrays)?;
    info!(path = %path.display(), rows = rows.len(), "wrote national table");
    Ok(())
}

/// Write the per-state table as a single Parquet file at `path`.
pub fn write_states(table: &StateTable, path: &Path) -> Result<()> {
    let schema = Arc::new(ArrowSchema::new(vec![
        Field::new(NAME_COLUMN, ArrowDataType::Utf8, false),
        Field::new(YEAR_COLUMN, ArrowDataType::Int32, false),
        Field::new(STATE_COLUMN, ArrowDataType::Utf8, false),
        Field::new(COUNT_COLUMNS[0], ArrowDataType::Int64, false),
    ]));

    let rows = table.rows();
    let counts = to_i64(rows.iter().map(|r| r.count))?;
    let arrays: Vec<ArrayRef> = vec![
        Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.name.as_str()))),
        Arc::new(Int32Array::from_iter_values(rows.iter().map(|r| r.year))),
        Arc::new(StringArray::from_iter_values(
            rows.iter().map(|r| r.state_code.as_str()),
        )),
        Arc::new(Int64Array::from(counts)),
    ];
    write_batch(path, schema, arrays)?;
    info!(path = %path.display(), rows = rows.len(), "wrote state table");
    Ok(())
}

fn to_i64(counts: impl Iterator<Item = u64>) -> Result<Vec<i64>> {
    counts
        .map(|c| i64::try_from(c).with_context(|| format!("count {} does not fit int64", c)))
        .collect()
}

/// Write one batch through a `.tmp` sibling, then rename into place.
fn write_batch(path: &Path, schema: Arc<ArrowSchema>, arrays: Vec<ArrayRef>) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("could not create `{}`", parent.display()))?;
    }
    let tmp_path = path.with_extension("parquet.tmp");

    let batch = RecordBatch::try_new(schema.clone(), arrays).context("building RecordBatch")?;
    let tmp_file = File::create(&tmp_path)
        .with_context(|| format!("could not create temporary file `{}`", tmp_path.display()))?;
    let props = WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build();
    let mut writer = ArrowWriter::try_new(BufWriter::new(tmp_file), schema, Some(props))
        .context("creating ArrowWriter")?;
    writer.write(&batch).context("writing batch")?;
    writer.close().context("closing ArrowWriter")?;

    fs::rename(&tmp_path, path).with_context(|| {
        format!(
            "failed to rename `{}` to `{}`",
            tmp_path.display(),
            path.display()
        )
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::testing::states;
    use tempfile::tempdir;

    #[test]
    fn leaves_no_tmp_file_behind() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("nested").join("states.parquet");
        write_states(&states(&[("Mary", 1950, "NY", 900)]), &path)?;

        assert!(path.is_file());
        assert!(!path.with_extension("parquet.tmp").exists());
        Ok(())
    }
}
