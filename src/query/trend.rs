// src/query/trend.rs

use serde::Serialize;
use std::collections::BTreeMap;

use crate::table::NationalTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub year: i32,
    pub count: u64,
}

/// Yearly births for `name` across both sexes, ascending by year.
/// Years where the name sums to zero are skipped.
pub fn trend_series(table: &NationalTable, name: &str) -> Vec<TrendPoint> {
    let mut by_year: BTreeMap<i32, u64> = BTreeMap::new();
    for r in table.rows().iter().filter(|r| r.name == name) {
        *by_year.entry(r.year).or_insert(0) += r.count;
    }
    by_year
        .into_iter()
        .filter(|&(_, count)| count > 0)
        .map(|(year, count)| TrendPoint { year, count })
        .collect()
}
