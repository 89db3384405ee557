// src/table/abbrev.rs

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Full name → USPS code for the 50 states, DC and the six territories.
pub static US_STATE_TO_ABBREV: &[(&str, &str)] = &[
    ("Alabama", "AL"),
    ("Alaska", "AK"),
    ("Arizona", "AZ"),
    ("Arkansas", "AR"),
    ("California", "CA"),
    ("Colorado", "CO"),
    ("Connecticut", "CT"),
    ("Delaware", "DE"),
    ("Florida", "FL"),
    ("Georgia", "GA"),
    ("Hawaii", "HI"),
    ("Idaho", "ID"),
    ("Illinois", "IL"),
    ("Indiana", "IN"),
    ("Iowa", "IA"),
    ("Kansas", "KS"),
    ("Kentucky", "KY"),
    ("Louisiana", "LA"),
    ("Maine", "ME"),
    ("Maryland", "MD"),
    ("Massachusetts", "MA"),
    ("Michigan", "MI"),
    ("Minnesota", "MN"),
    ("Mississippi", "MS"),
    ("Missouri", "MO"),
    ("Montana", "MT"),
    ("Nebraska", "NE"),
    ("Nevada", "NV"),
    ("New Hampshire", "NH"),
    ("New Jersey", "NJ"),
    ("New Mexico", "NM"),
    ("New York", "NY"),
    ("North Carolina", "NC"),
    ("North Dakota", "ND"),
    ("Ohio", "OH"),
    ("Oklahoma", "OK"),
    ("Oregon", "OR"),
    ("Pennsylvania", "PA"),
    ("Rhode Island", "RI"),
    ("South Carolina", "SC"),
    ("South Dakota", "SD"),
    ("Tennessee", "TN"),
    ("Texas", "TX"),
    ("Utah", "UT"),
    ("Vermont", "VT"),
    ("Virginia", "VA"),
    ("Washington", "WA"),
    ("West Virginia", "WV"),
    ("Wisconsin", "WI"),
    ("Wyoming", "WY"),
    ("District of Columbia", "DC"),
    ("American Samoa", "AS"),
    ("Guam", "GU"),
    ("Northern Mariana Islands", "MP"),
    ("Puerto Rico", "PR"),
    ("United States Minor Outlying Islands", "UM"),
    ("Virgin Islands, U.S.", "VI"),
];

static ABBREV_TO_US_STATE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    US_STATE_TO_ABBREV
        .iter()
        .map(|&(full, code)| (code, full))
        .collect()
});

static US_STATE_LOOKUP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| US_STATE_TO_ABBREV.iter().copied().collect());

/// Full name for a two-letter code. Codes are matched case-insensitively.
pub fn state_name(code: &str) -> Option<&'static str> {
    let upper = code.trim().to_ascii_uppercase();
    ABBREV_TO_US_STATE.get(upper.as_str()).copied()
}

/// Two-letter code for an exact full name.
pub fn state_code(full_name: &str) -> Option<&'static str> {
    US_STATE_LOOKUP.get(full_name.trim()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn mapping_is_injective() {
        assert_eq!(US_STATE_TO_ABBREV.len(), 57);
        let codes: HashSet<_> = US_STATE_TO_ABBREV.iter().map(|(_, c)| c).collect();
        let names: HashSet<_> = US_STATE_TO_ABBREV.iter().map(|(n, _)| n).collect();
        assert_eq!(codes.len(), 57);
        assert_eq!(names.len(), 57);
    }

    #[test]
    fn lookups_go_both_ways() {
        assert_eq!(state_name("CA"), Some("California"));
        assert_eq!(state_name("dc"), Some("District of Columbia"));
        assert_eq!(state_name("XX"), None);
        assert_eq!(state_code("Virgin Islands, U.S."), Some("VI"));
        assert_eq!(state_code("Atlantis"), None);

        for &(full, code) in US_STATE_TO_ABBREV {
            assert_eq!(state_code(state_name(code).unwrap()), Some(code));
            assert_eq!(state_name(state_code(full).unwrap()), Some(full));
        }
    }
}
