// src/query/change.rs

use serde::Serialize;

use crate::table::NationalTable;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PopularityChange {
    /// `None` when the name had no births in the starting year.
    pub change_pct: Option<f64>,
    pub latest_year: i32,
}

/// Percentage change in births for `name` from `birth_year` to the most
/// recent year in the table. Returns `None` only for an empty table.
pub fn popularity_change(
    table: &NationalTable,
    name: &str,
    birth_year: i32,
) -> Option<PopularityChange> {
    let latest_year = table.latest_year()?;
    let birth_total = table.name_total(name, birth_year);
    let latest_total = table.name_total(name, latest_year);

    let change_pct = (birth_total != 0)
        .then(|| (latest_total as f64 - birth_total as f64) / birth_total as f64 * 100.0);

    Some(PopularityChange {
        change_pct,
        latest_year,
    })
}
