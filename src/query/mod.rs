//! Pure lookups over the loaded tables. None of these fail: a missing
//! name or year yields an empty result, never an error.

pub mod change;
pub mod national;
pub mod sex;
pub mod states;
pub mod trend;

pub use change::{popularity_change, PopularityChange};
pub use national::{national_ranking, year_leaderboard, NationalRanking, RankedName};
pub use sex::{sex_percentages, SexPercentages};
pub use states::{top_states, StateCount, DEFAULT_TOP_N};
pub use trend::{trend_series, TrendPoint};
