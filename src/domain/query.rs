use serde::{Deserialize, Serialize};

use super::stats::StatCategory;
use crate::error::AssessError;

/// The five user selections, exactly as a form or command line delivers them.
///
/// Fields are raw text; nothing is trusted until [`BetQuery::validate`] runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetQuery {
    /// Full team name (e.g. "Boston Celtics")
    pub team: String,
    pub player: String,
    /// Stat key (e.g. "PTS") or alias (e.g. "points")
    pub stat: String,
    pub line: String,
    /// Opponent abbreviation (e.g. "MIA"); a full name is also accepted
    pub opponent: String,
}

/// A query whose fields are all present and well-formed
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedQuery {
    pub team: String,
    pub player: String,
    pub stat: StatCategory,
    pub line: f64,
    pub opponent: String,
}

impl BetQuery {
    pub fn new(
        team: impl Into<String>,
        player: impl Into<String>,
        stat: impl Into<String>,
        line: impl Into<String>,
        opponent: impl Into<String>,
    ) -> Self {
        Self {
            team: team.into(),
            player: player.into(),
            stat: stat.into(),
            line: line.into(),
            opponent: opponent.into(),
        }
    }

    /// Check every field before any dataset lookup.
    pub fn validate(&self) -> Result<ValidatedQuery, AssessError> {
        let team = required(&self.team, "team")?;
        let player = required(&self.player, "player")?;
        let stat = required(&self.stat, "stat")?
            .parse::<StatCategory>()
            .map_err(|_| AssessError::IncompleteQuery { field: "stat" })?;
        let line = required(&self.line, "line")?
            .parse::<f64>()
            .ok()
            .filter(|l| l.is_finite())
            .ok_or(AssessError::IncompleteQuery { field: "line" })?;
        let opponent = required(&self.opponent, "opponent")?;

        Ok(ValidatedQuery {
            team: team.to_string(),
            player: player.to_string(),
            stat,
            line,
            opponent: opponent.to_string(),
        })
    }
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, AssessError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(AssessError::IncompleteQuery { field })
    } else {
        Ok(trimmed)
    }
}
