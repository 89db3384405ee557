// src/query/sex.rs

use serde::Serialize;

use crate::table::{NationalTable, Sex};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SexPercentages {
    pub male_pct: f64,
    pub female_pct: f64,
}

/// Share of `name` given to each sex in `year`, as 0–100 percentages.
/// Both shares are 0.0 when there is nothing to divide by.
pub fn sex_percentages(table: &NationalTable, name: &str, year: i32) -> SexPercentages {
    let (mut male, mut female) = (0u64, 0u64);
    for r in table.year_rows(year).iter().filter(|r| r.name == name) {
        match r.sex {
            Sex::Male => male += r.count,
            Sex::Female => female += r.count,
        }
    }

    let total = male + female;
    if total == 0 {
        return SexPercentages {
            male_pct: 0.0,
            female_pct: 0.0,
        };
    }
    SexPercentages {
        male_pct: male as f64 / total as f64 * 100.0,
        female_pct: female as f64 / total as f64 * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::testing::national;

    #[test]
    fn splits_by_sex() {
        let table = national(&[
            ("Mary", 1950, Sex::Female, 3000),
            ("Mary", 1950, Sex::Male, 10),
            ("John", 1950, Sex::Male, 4000),
        ]);

        let pct = sex_percentages(&table, "Mary", 1950);
        assert!((pct.male_pct - 0.3322).abs() < 1e-3);
        assert!((pct.female_pct - 99.6678).abs() < 1e-3);
        assert!((pct.male_pct + pct.female_pct - 100.0).abs() < 1e-9);

        let john = sex_percentages(&table, "John", 1950);
        assert_eq!(john.male_pct, 100.0);
        assert_eq!(john.female_pct, 0.0);
    }

    #[test]
    fn zero_total_gives_zero_shares() {
        let table = national(&[("Kim", 1990, Sex::Female, 0)]);
        let zero = SexPercentages {
            male_pct: 0.0,
            female_pct: 0.0,
        };
        assert_eq!(sex_percentages(&table, "Kim", 1990), zero);
        assert_eq!(sex_percentages(&table, "Nobody", 1990), zero);
    }
}
