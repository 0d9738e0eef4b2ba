//! League-average aggregation and opponent defense classification

use serde::{Deserialize, Serialize};

use crate::domain::TeamRecord;

/// Mean defensive metrics across every team in the dataset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeagueAverages {
    pub drtg: f64,
    pub efg_allowed: f64,
}

impl LeagueAverages {
    /// Arithmetic mean over the full slice. `None` when there are no teams.
    pub fn from_teams(teams: &[TeamRecord]) -> Option<Self> {
        if teams.is_empty() {
            return None;
        }
        let n = teams.len() as f64;
        let (drtg_sum, efg_sum) = teams
            .iter()
            .fold((0.0, 0.0), |(d, e), t| (d + t.drtg, e + t.efg_allowed));

        Some(Self {
            drtg: drtg_sum / n,
            efg_allowed: efg_sum / n,
        })
    }
}

/// Expected effect of the opponent's defense on the player's output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefenseImpact {
    /// Both metrics strictly better than league average
    Strong,
    /// Both metrics strictly worse than league average
    Weak,
    Average,
}

impl DefenseImpact {
    /// Both metrics must agree in direction; ties and mixed signals are `Average`.
    pub fn classify(opponent: &TeamRecord, league: &LeagueAverages) -> Self {
        if opponent.drtg < league.drtg && opponent.efg_allowed < league.efg_allowed {
            DefenseImpact::Strong
        } else if opponent.drtg > league.drtg && opponent.efg_allowed > league.efg_allowed {
            DefenseImpact::Weak
        } else {
            DefenseImpact::Average
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DefenseImpact::Strong => "strong",
            DefenseImpact::Weak => "weak",
            DefenseImpact::Average => "average",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            DefenseImpact::Strong => "The opponent has a strong defense. Expect lower stats.",
            DefenseImpact::Weak => "The opponent has a weak defense. Expect better stats.",
            DefenseImpact::Average => "The opponent has an average defense.",
        }
    }
}

impl std::fmt::Display for DefenseImpact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
