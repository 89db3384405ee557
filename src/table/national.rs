// src/table/national.rs

use std::{collections::BTreeMap, ops::Range};

use super::record::NameYearSexRecord;

/// Immutable national table. Rows are kept sorted by year so that a
/// single year is one contiguous slice.
#[derive(Debug, Clone, Default)]
pub struct NationalTable {
    rows: Vec<NameYearSexRecord>,
    by_year: BTreeMap<i32, Range<usize>>,
}

impl NationalTable {
    pub fn new(mut rows: Vec<NameYearSexRecord>) -> Self {
        rows.sort_by(|a, b| {
            a.year
                .cmp(&b.year)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.sex.cmp(&b.sex))
        });
        let by_year = index_years(rows.iter().map(|r| r.year));
        Self { rows, by_year }
    }

    pub fn rows(&self) -> &[NameYearSexRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows for one year; empty for years outside the table.
    pub fn year_rows(&self, year: i32) -> &[NameYearSexRecord] {
        match self.by_year.get(&year) {
            Some(range) => &self.rows[range.clone()],
            None => &[],
        }
    }

    /// Distinct years present, ascending.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.by_year.keys().copied()
    }

    /// (earliest, latest) year, or `None` for an empty table.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let first = self.by_year.keys().next()?;
        let last = self.by_year.keys().next_back()?;
        Some((*first, *last))
    }

    pub fn latest_year(&self) -> Option<i32> {
        self.by_year.keys().next_back().copied()
    }

    /// Sum of counts for `name` in `year` across both sexes.
    pub fn name_total(&self, name: &str, year: i32) -> u64 {
        self.year_rows(year)
            .iter()
            .filter(|r| r.name == name)
            .map(|r| r.count)
            .sum()
    }
}

/// Map each year to its contiguous row range. Input must be sorted by year.
pub(crate) fn index_years(years: impl Iterator<Item = i32>) -> BTreeMap<i32, Range<usize>> {
    let mut index: BTreeMap<i32, Range<usize>> = BTreeMap::new();
    for (i, year) in years.enumerate() {
        index
            .entry(year)
            .and_modify(|r| r.end = i + 1)
            .or_insert(i..i + 1);
    }
    index
}
