use serde::{Deserialize, Serialize};

use super::stats::{StatCategory, StatLine};

/// Season averages for one player, as stored in `player_stats.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(rename = "Player")]
    pub player: String,
    /// Team abbreviation (e.g. "BOS")
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(flatten)]
    pub stats: StatLine,
}

impl PlayerRecord {
    pub fn stat(&self, stat: StatCategory) -> f64 {
        self.stats.get(stat)
    }

    pub fn plays_for(&self, team_abbrev: &str, player: &str) -> bool {
        self.team == team_abbrev && self.player == player
    }
}

/// Defensive profile for one team, as stored in `team_stats.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    /// Team abbreviation (e.g. "BOS")
    #[serde(rename = "Team")]
    pub team: String,
    /// Defensive rating, points allowed per 100 possessions (lower is better)
    #[serde(rename = "DRtg")]
    pub drtg: f64,
    /// Opponent effective field-goal percentage (lower is better)
    #[serde(rename = "eFG%")]
    pub efg_allowed: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_record_ignores_extra_columns() {
        let record: PlayerRecord = serde_json::from_str(
            r#"{"Rk": 1, "Player": "Jayson Tatum", "Team": "BOS", "Age": 26, "G": 74,
                "PTS": 26.9, "AST": 4.9, "TRB": 8.1, "BLK": 0.6, "STL": 1.0,
                "TOV": 2.5, "FG%": 0.471, "3P%": 0.376, "FT%": 0.833}"#,
        )
        .unwrap();
        assert_eq!(record.player, "Jayson Tatum");
        assert_eq!(record.team, "BOS");
        assert_eq!(record.stat(StatCategory::Rebounds), 8.1);
        assert!(record.plays_for("BOS", "Jayson Tatum"));
        assert!(!record.plays_for("LAL", "Jayson Tatum"));
    }

    #[test]
    fn test_player_record_requires_every_stat() {
        let missing = serde_json::from_str::<PlayerRecord>(
            r#"{"Player": "X", "Team": "BOS", "PTS": 20.0}"#,
        );
        assert!(missing.is_err());
    }

    #[test]
    fn test_team_record_column_names() {
        let record: TeamRecord =
            serde_json::from_str(r#"{"Team": "OKC", "DRtg": 106.6, "eFG%": 0.512, "Pace": 99.2}"#)
                .unwrap();
        assert_eq!(record.team, "OKC");
        assert_eq!(record.drtg, 106.6);
        assert_eq!(record.efg_allowed, 0.512);
    }
}
