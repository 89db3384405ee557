// src/query/states.rs

use serde::Serialize;
use std::collections::HashMap;

use crate::table::StateTable;

pub const DEFAULT_TOP_N: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateCount {
    pub state_full: &'static str,
    pub count: u64,
}

/// States where `name` was most given in `year`, highest count first.
/// Equal counts are ordered by state name. `top_n` below 1 is treated as 1.
///
/// Returns `None` when the table has no rows at all for the name/year,
/// which callers report differently from an empty list. Rows whose code
/// has no full name still count as data but are left out of the grouping.
pub fn top_states(
    table: &StateTable,
    name: &str,
    year: i32,
    top_n: usize,
) -> Option<Vec<StateCount>> {
    let mut matched = false;
    let mut totals: HashMap<&'static str, u64> = HashMap::new();
    for r in table.year_rows(year).iter().filter(|r| r.name == name) {
        matched = true;
        if let Some(full) = r.state_full {
            *totals.entry(full).or_insert(0) += r.count;
        }
    }
    if !matched {
        return None;
    }

    let mut ranked: Vec<StateCount> = totals
        .into_iter()
        .map(|(state_full, count)| StateCount { state_full, count })
        .collect();
    ranked.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.state_full.cmp(b.state_full))
    });
    ranked.truncate(top_n.max(1));
    Some(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::testing::states;

    fn sample() -> StateTable {
        states(&[
            ("Mary", 1950, "NY", 900),
            ("Mary", 1950, "CA", 400),
            ("Mary", 1950, "CA", 500),
            ("Mary", 1950, "TX", 700),
            ("Mary", 1950, "OH", 300),
            ("Mary", 1950, "PA", 200),
            ("Mary", 1950, "FL", 100),
            ("Mary", 1951, "NY", 5),
            ("John", 1950, "NY", 1000),
        ])
    }

    #[test]
    fn groups_sorts_and_truncates() {
        let top = top_states(&sample(), "Mary", 1950, DEFAULT_TOP_N).unwrap();
        let got: Vec<(&str, u64)> = top.iter().map(|s| (s.state_full, s.count)).collect();
        // California (400 + 500) ties New York; name breaks the tie.
        assert_eq!(
            got,
            vec![
                ("California", 900),
                ("New York", 900),
                ("Texas", 700),
                ("Ohio", 300),
                ("Pennsylvania", 200),
            ]
        );
        assert!(top.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn respects_top_n() {
        let table = sample();
        assert_eq!(top_states(&table, "Mary", 1950, 2).unwrap().len(), 2);
        assert_eq!(top_states(&table, "Mary", 1950, 0).unwrap().len(), 1);
        assert_eq!(top_states(&table, "Mary", 1950, 50).unwrap().len(), 6);
    }

    #[test]
    fn no_rows_is_no_data() {
        let table = sample();
        assert_eq!(top_states(&table, "Zed", 1950, 5), None);
        assert_eq!(top_states(&table, "Mary", 1850, 5), None);
    }

    #[test]
    fn unmapped_codes_are_data_but_not_listed() {
        let table = states(&[("Mary", 1950, "ZZ", 10)]);
        assert_eq!(top_states(&table, "Mary", 1950, 5), Some(vec![]));
    }
}
