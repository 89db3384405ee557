// src/table/record.rs

use serde::Serialize;

use super::abbrev;

/// Sex code as recorded by the SSA files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "M" => Some(Sex::Male),
            "F" => Some(Sex::Female),
            _ => None,
        }
    }
}

/// Count of babies given `name`, born in `year`, of sex `sex`.
/// The table may hold several rows for the same key; readers sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameYearSexRecord {
    pub name: String,
    pub year: i32,
    pub sex: Sex,
    pub count: u64,
}

/// Count of babies given `name`, born in `year`, in one US state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameYearStateRecord {
    pub name: String,
    pub year: i32,
    pub state_code: String,
    /// Resolved once at construction; `None` for codes outside the map.
    pub state_full: Option<&'static str>,
    pub count: u64,
}

impl NameYearStateRecord {
    pub fn new(name: impl Into<String>, year: i32, state_code: &str, count: u64) -> Self {
        let state_code = state_code.trim().to_ascii_uppercase();
        let state_full = abbrev::state_name(&state_code);
        Self {
            name: name.into(),
            year,
            state_code,
            state_full,
            count,
        }
    }
}
