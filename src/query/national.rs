// src/query/national.rs

use serde::Serialize;
use std::collections::HashMap;

use crate::table::NationalTable;

/// Summed count and dense rank of one name within a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NationalRanking {
    pub count: u64,
    pub rank: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedName {
    pub name: String,
    pub count: u64,
    pub rank: u32,
}

/// Every name seen in `year`, summed across sexes and dense-ranked by
/// count descending. Equal counts share a rank and are listed by name.
pub fn year_leaderboard(table: &NationalTable, year: i32) -> Vec<RankedName> {
    let mut totals: HashMap<&str, u64> = HashMap::new();
    for r in table.year_rows(year) {
        *totals.entry(r.name.as_str()).or_insert(0) += r.count;
    }

    let mut sorted: Vec<(&str, u64)> = totals.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let mut out = Vec::with_capacity(sorted.len());
    let mut rank = 0u32;
    let mut prev: Option<u64> = None;
    for (name, count) in sorted {
        if prev != Some(count) {
            rank += 1;
            prev = Some(count);
        }
        out.push(RankedName {
            name: name.to_string(),
            count,
            rank,
        });
    }
    out
}

/// Count and dense rank for `name` in `year`, or `None` if the name does
/// not appear that year.
pub fn national_ranking(table: &NationalTable, name: &str, year: i32) -> Option<NationalRanking> {
    year_leaderboard(table, year)
        .into_iter()
        .find(|r| r.name == name)
        .map(|r| NationalRanking {
            count: r.count,
            rank: r.rank,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{testing::national, Sex};

    #[test]
    fn sums_across_sexes_and_ranks() {
        let table = national(&[
            ("Mary", 1950, Sex::Female, 3000),
            ("Mary", 1950, Sex::Male, 10),
            ("John", 1950, Sex::Male, 4000),
        ]);

        assert_eq!(
            national_ranking(&table, "Mary", 1950),
            Some(NationalRanking {
                count: 3010,
                rank: 2
            })
        );
        assert_eq!(
            national_ranking(&table, "John", 1950),
            Some(NationalRanking {
                count: 4000,
                rank: 1
            })
        );
    }

    #[test]
    fn ranking_is_dense() {
        let table = national(&[
            ("Ann", 2000, Sex::Female, 50),
            ("Bea", 2000, Sex::Female, 50),
            ("Cal", 2000, Sex::Male, 40),
            ("Dan", 2000, Sex::Male, 30),
            ("Dan", 2000, Sex::Male, 10),
            ("Eve", 2000, Sex::Female, 5),
        ]);

        let board = year_leaderboard(&table, 2000);
        let ranks: Vec<(&str, u32)> = board.iter().map(|r| (r.name.as_str(), r.rank)).collect();
        // Cal and Dan tie at 40 after summing Dan's duplicate rows.
        assert_eq!(
            ranks,
            vec![("Ann", 1), ("Bea", 1), ("Cal", 2), ("Dan", 2), ("Eve", 3)]
        );

        for entry in &board {
            let mut greater: Vec<u64> = board
                .iter()
                .map(|r| r.count)
                .filter(|&c| c > entry.count)
                .collect();
            greater.dedup();
            assert_eq!(entry.rank as usize, greater.len() + 1);
        }
    }

    #[test]
    fn missing_name_or_year_is_empty() {
        let table = national(&[("Mary", 1950, Sex::Female, 3000)]);
        assert_eq!(national_ranking(&table, "Zed", 1950), None);
        assert_eq!(national_ranking(&table, "Mary", 1850), None);
        assert!(year_leaderboard(&table, 1850).is_empty());
    }
}
