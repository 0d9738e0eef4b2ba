use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Stat categories a line can be placed on.
///
/// Serialized with the dataset column names (`PTS`, `FG%`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatCategory {
    #[serde(rename = "PTS")]
    Points,
    #[serde(rename = "AST")]
    Assists,
    #[serde(rename = "TRB")]
    Rebounds,
    #[serde(rename = "BLK")]
    Blocks,
    #[serde(rename = "STL")]
    Steals,
    #[serde(rename = "TOV")]
    Turnovers,
    #[serde(rename = "FG%")]
    FieldGoalPct,
    #[serde(rename = "3P%")]
    ThreePointPct,
    #[serde(rename = "FT%")]
    FreeThrowPct,
}

impl StatCategory {
    pub const ALL: [StatCategory; 9] = [
        StatCategory::Points,
        StatCategory::Assists,
        StatCategory::Rebounds,
        StatCategory::Blocks,
        StatCategory::Steals,
        StatCategory::Turnovers,
        StatCategory::FieldGoalPct,
        StatCategory::ThreePointPct,
        StatCategory::FreeThrowPct,
    ];

    /// Dataset column name
    pub fn key(&self) -> &'static str {
        match self {
            StatCategory::Points => "PTS",
            StatCategory::Assists => "AST",
            StatCategory::Rebounds => "TRB",
            StatCategory::Blocks => "BLK",
            StatCategory::Steals => "STL",
            StatCategory::Turnovers => "TOV",
            StatCategory::FieldGoalPct => "FG%",
            StatCategory::ThreePointPct => "3P%",
            StatCategory::FreeThrowPct => "FT%",
        }
    }

    /// Lowercase alias accepted on the command line
    pub fn alias(&self) -> &'static str {
        match self {
            StatCategory::Points => "points",
            StatCategory::Assists => "assists",
            StatCategory::Rebounds => "rebounds",
            StatCategory::Blocks => "blocks",
            StatCategory::Steals => "steals",
            StatCategory::Turnovers => "turnovers",
            StatCategory::FieldGoalPct => "fg_pct",
            StatCategory::ThreePointPct => "three_pct",
            StatCategory::FreeThrowPct => "ft_pct",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatCategory::Points => "Points",
            StatCategory::Assists => "Assists",
            StatCategory::Rebounds => "Rebounds",
            StatCategory::Blocks => "Blocks",
            StatCategory::Steals => "Steals",
            StatCategory::Turnovers => "Turnovers",
            StatCategory::FieldGoalPct => "Field Goal %",
            StatCategory::ThreePointPct => "Three Point %",
            StatCategory::FreeThrowPct => "Free Throw %",
        }
    }
}

impl std::fmt::Display for StatCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown stat category: {0}")]
pub struct UnknownStat(pub String);

impl FromStr for StatCategory {
    type Err = UnknownStat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        StatCategory::ALL
            .into_iter()
            .find(|c| {
                c.key().eq_ignore_ascii_case(trimmed) || c.alias().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| UnknownStat(trimmed.to_string()))
    }
}

/// Per-game averages for every stat category
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatLine {
    #[serde(rename = "PTS")]
    pub points: f64,
    #[serde(rename = "AST")]
    pub assists: f64,
    #[serde(rename = "TRB")]
    pub rebounds: f64,
    #[serde(rename = "BLK")]
    pub blocks: f64,
    #[serde(rename = "STL")]
    pub steals: f64,
    #[serde(rename = "TOV")]
    pub turnovers: f64,
    #[serde(rename = "FG%")]
    pub fg_pct: f64,
    #[serde(rename = "3P%")]
    pub three_pct: f64,
    #[serde(rename = "FT%")]
    pub ft_pct: f64,
}

impl StatLine {
    pub fn get(&self, stat: StatCategory) -> f64 {
        match stat {
            StatCategory::Points => self.points,
            StatCategory::Assists => self.assists,
            StatCategory::Rebounds => self.rebounds,
            StatCategory::Blocks => self.blocks,
            StatCategory::Steals => self.steals,
            StatCategory::Turnovers => self.turnovers,
            StatCategory::FieldGoalPct => self.fg_pct,
            StatCategory::ThreePointPct => self.three_pct,
            StatCategory::FreeThrowPct => self.ft_pct,
        }
    }
}
