//! NBA team directory
//!
//! Fixed bijection between the 30 three-letter team abbreviations and their
//! full display names. The lookup maps are built once on first use.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Number of teams in the directory
pub const TEAM_COUNT: usize = 30;

/// (abbreviation, full name), ordered by abbreviation
pub const NBA_TEAMS: [(&str, &str); TEAM_COUNT] = [
    ("ATL", "Atlanta Hawks"),
    ("BOS", "Boston Celtics"),
    ("BKN", "Brooklyn Nets"),
    ("CHA", "Charlotte Hornets"),
    ("CHI", "Chicago Bulls"),
    ("CLE", "Cleveland Cavaliers"),
    ("DAL", "Dallas Mavericks"),
    ("DEN", "Denver Nuggets"),
    ("DET", "Detroit Pistons"),
    ("GSW", "Golden State Warriors"),
    ("HOU", "Houston Rockets"),
    ("IND", "Indiana Pacers"),
    ("LAC", "Los Angeles Clippers"),
    ("LAL", "Los Angeles Lakers"),
    ("MEM", "Memphis Grizzlies"),
    ("MIA", "Miami Heat"),
    ("MIL", "Milwaukee Bucks"),
    ("MIN", "Minnesota Timberwolves"),
    ("NOP", "New Orleans Pelicans"),
    ("NYK", "New York Knicks"),
    ("OKC", "Oklahoma City Thunder"),
    ("ORL", "Orlando Magic"),
    ("PHI", "Philadelphia 76ers"),
    ("PHX", "Phoenix Suns"),
    ("POR", "Portland Trail Blazers"),
    ("SAC", "Sacramento Kings"),
    ("SAS", "San Antonio Spurs"),
    ("TOR", "Toronto Raptors"),
    ("UTA", "Utah Jazz"),
    ("WAS", "Washington Wizards"),
];

static BY_ABBREV: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| NBA_TEAMS.iter().copied().collect());

static BY_NAME: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    NBA_TEAMS
        .iter()
        .map(|&(abbrev, name)| (name, abbrev))
        .collect()
});

/// Abbreviation for an exact full team name (e.g. "Boston Celtics" -> "BOS")
pub fn abbreviation_for(full_name: &str) -> Option<&'static str> {
    BY_NAME.get(full_name.trim()).copied()
}

/// Full name for an abbreviation, case-insensitive (e.g. "bos" -> "Boston Celtics")
pub fn full_name_for(abbrev: &str) -> Option<&'static str> {
    let code = abbrev.trim().to_ascii_uppercase();
    BY_ABBREV.get(code.as_str()).copied()
}

/// Canonical abbreviation for either a full name or an abbreviation.
pub fn resolve(name_or_abbrev: &str) -> Option<&'static str> {
    if let Some(abbrev) = abbreviation_for(name_or_abbrev) {
        return Some(abbrev);
    }
    let code = name_or_abbrev.trim().to_ascii_uppercase();
    BY_ABBREV.get_key_value(code.as_str()).map(|(k, _)| *k)
}

/// All full names in directory order
pub fn full_names() -> impl Iterator<Item = &'static str> {
    NBA_TEAMS.iter().map(|&(_, name)| name)
}

/// All (abbreviation, full name) pairs in directory order
pub fn entries() -> &'static [(&'static str, &'static str)] {
    &NBA_TEAMS
}
