// src/report/mod.rs

pub mod render;

use serde::Serialize;

use crate::load::Dataset;
use crate::query::{
    national_ranking, popularity_change, sex_percentages, top_states, trend_series,
    NationalRanking, PopularityChange, SexPercentages, StateCount, TrendPoint,
};

pub use render::render_text;

/// Everything shown for one name and birth year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NameReport {
    pub name: String,
    pub year: i32,
    pub national: Option<NationalRanking>,
    pub sex: SexPercentages,
    pub top_states: Option<Vec<StateCount>>,
    pub change: Option<PopularityChange>,
    pub trend: Vec<TrendPoint>,
}

impl NameReport {
    /// Run every query for `name` (already normalised) and `year`.
    pub fn build(dataset: &Dataset, name: &str, year: i32, top_n: usize) -> Self {
        Self {
            name: name.to_string(),
            year,
            national: national_ranking(&dataset.national, name, year),
            sex: sex_percentages(&dataset.national, name, year),
            top_states: top_states(&dataset.states, name, year, top_n),
            change: popularity_change(&dataset.national, name, year),
            trend: trend_series(&dataset.national, name),
        }
    }
}

/// Trim and title-case free text: the first letter of every alphabetic run
/// is upper-cased and the rest lower-cased ("mary-kate" → "Mary-Kate").
pub fn normalize_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_alpha = false;
    for ch in raw.trim().chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{
        testing::{national, states},
        Sex,
    };

    #[test]
    fn title_cases_input() {
        assert_eq!(normalize_name("  mARY "), "Mary");
        assert_eq!(normalize_name("mary-kate"), "Mary-Kate");
        assert_eq!(normalize_name("o'neil"), "O'Neil");
        assert_eq!(normalize_name("   "), "");
    }

    #[test]
    fn builds_every_section() {
        let dataset = Dataset::new(
            national(&[
                ("Mary", 1950, Sex::Female, 3000),
                ("Mary", 1950, Sex::Male, 10),
                ("John", 1950, Sex::Male, 4000),
                ("Mary", 2023, Sex::Female, 1505),
            ]),
            states(&[("Mary", 1950, "NY", 900), ("Mary", 1950, "CA", 500)]),
        );

        let report = NameReport::build(&dataset, "Mary", 1950, 1);
        assert_eq!(report.national.map(|n| n.rank), Some(2));
        assert!(report.sex.female_pct > 99.0);
        assert_eq!(report.top_states.as_ref().map(Vec::len), Some(1));
        assert_eq!(report.change.map(|c| c.latest_year), Some(2023));
        assert_eq!(report.trend.len(), 2);

        let missing = NameReport::build(&dataset, "Zed", 1950, 5);
        assert_eq!(missing.national, None);
        assert_eq!(missing.top_states, None);
        assert_eq!(missing.change.and_then(|c| c.change_pct), None);
        assert!(missing.trend.is_empty());
    }
}
