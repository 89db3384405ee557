// src/table/state.rs

use std::{
    collections::{BTreeMap, BTreeSet},
    ops::Range,
};

use super::{national::index_years, record::NameYearStateRecord};

/// Immutable per-state table, sorted by year like [`super::NationalTable`].
#[derive(Debug, Clone, Default)]
pub struct StateTable {
    rows: Vec<NameYearStateRecord>,
    by_year: BTreeMap<i32, Range<usize>>,
}

impl StateTable {
    pub fn new(mut rows: Vec<NameYearStateRecord>) -> Self {
        rows.sort_by(|a, b| {
            a.year
                .cmp(&b.year)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.state_code.cmp(&b.state_code))
        });
        let by_year = index_years(rows.iter().map(|r| r.year));
        Self { rows, by_year }
    }

    pub fn rows(&self) -> &[NameYearStateRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn year_rows(&self, year: i32) -> &[NameYearStateRecord] {
        match self.by_year.get(&year) {
            Some(range) => &self.rows[range.clone()],
            None => &[],
        }
    }

    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let first = self.by_year.keys().next()?;
        let last = self.by_year.keys().next_back()?;
        Some((*first, *last))
    }

    /// Codes with no full-name mapping, with how many rows carry each.
    pub fn unmapped_codes(&self) -> BTreeMap<&str, usize> {
        let mut out = BTreeMap::new();
        for r in self.rows.iter().filter(|r| r.state_full.is_none()) {
            *out.entry(r.state_code.as_str()).or_insert(0) += 1;
        }
        out
    }

    pub fn states_seen(&self) -> BTreeSet<&'static str> {
        self.rows.iter().filter_map(|r| r.state_full).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::table::testing::states;

    #[test]
    fn tracks_unmapped_codes() {
        let table = states(&[
            ("Mary", 1950, "NY", 10),
            ("Mary", 1950, "ZZ", 2),
            ("Mary", 1951, "ZZ", 4),
            ("John", 1951, "CA", 7),
        ]);

        assert_eq!(table.year_bounds(), Some((1950, 1951)));
        assert_eq!(table.year_rows(1950).len(), 2);
        assert_eq!(table.unmapped_codes().get("ZZ"), Some(&2));
        assert_eq!(
            table.states_seen().into_iter().collect::<Vec<_>>(),
            vec!["California", "New York"]
        );
    }
}
