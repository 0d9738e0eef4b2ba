use serde::{Deserialize, Serialize};
use tracing::debug;

use super::defense::{DefenseImpact, LeagueAverages};
use super::line::LineAssessment;
use crate::domain::{teams, BetQuery, PlayerRecord, StatCategory, TeamRecord};
use crate::error::AssessError;

/// Outcome of a successful assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub player: String,
    /// Player's team abbreviation
    pub team: String,
    pub stat: StatCategory,
    pub line: f64,
    /// Unrounded season average for `stat`
    pub player_avg: f64,
    pub assessment: LineAssessment,
    /// Opponent abbreviation as found in the team dataset
    pub opponent: String,
    pub impact: DefenseImpact,
    pub league: LeagueAverages,
}

/// Judge a line against a player's average and the opponent's defense.
///
/// Pure: no I/O, and identical inputs always give identical results. Every
/// query field is validated before either dataset is touched.
pub fn assess(
    query: &BetQuery,
    players: &[PlayerRecord],
    teams: &[TeamRecord],
) -> Result<AssessmentResult, AssessError> {
    let query = query.validate()?;

    let player_not_found = || AssessError::PlayerNotFound {
        team: query.team.clone(),
        player: query.player.clone(),
    };
    let team_abbrev = teams::abbreviation_for(&query.team).ok_or_else(player_not_found)?;
    let record = players
        .iter()
        .find(|p| p.plays_for(team_abbrev, &query.player))
        .ok_or_else(player_not_found)?;
    let player_avg = record.stat(query.stat);

    let opponent = find_team(teams, &query.opponent).ok_or_else(|| {
        AssessError::OpponentNotFound {
            opponent: query.opponent.clone(),
        }
    })?;

    // A found opponent implies a non-empty slice.
    let league = LeagueAverages::from_teams(teams).ok_or_else(|| AssessError::OpponentNotFound {
        opponent: query.opponent.clone(),
    })?;

    let impact = DefenseImpact::classify(opponent, &league);
    let assessment = LineAssessment::classify(query.line, player_avg);

    debug!(
        "{} {} avg={:.3} line={} -> {}; {} defense {} (league DRtg {:.2}, eFG% {:.3})",
        record.player,
        query.stat,
        player_avg,
        query.line,
        assessment,
        opponent.team,
        impact,
        league.drtg,
        league.efg_allowed
    );

    Ok(AssessmentResult {
        player: record.player.clone(),
        team: team_abbrev.to_string(),
        stat: query.stat,
        line: query.line,
        player_avg,
        assessment,
        opponent: opponent.team.clone(),
        impact,
        league,
    })
}

/// Opponent lookup by abbreviation, or by full name mapped through the directory.
fn find_team<'a>(teams: &'a [TeamRecord], opponent: &str) -> Option<&'a TeamRecord> {
    let key = teams::resolve(opponent)
        .map(str::to_string)
        .unwrap_or_else(|| opponent.trim().to_ascii_uppercase());
    teams.iter().find(|t| t.team.eq_ignore_ascii_case(&key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StatLine;

    fn player(team: &str, name: &str, points: f64) -> PlayerRecord {
        PlayerRecord {
            player: name.to_string(),
            team: team.to_string(),
            stats: StatLine {
                points,
                assists: 5.0,
                rebounds: 7.0,
                ..StatLine::default()
            },
        }
    }

    fn team(abbrev: &str, drtg: f64, efg_allowed: f64) -> TeamRecord {
        TeamRecord {
            team: abbrev.to_string(),
            drtg,
            efg_allowed,
        }
    }

    fn fixtures() -> (Vec<PlayerRecord>, Vec<TeamRecord>) {
        (
            vec![
                player("BOS", "X", 20.0),
                player("LAL", "X", 31.0),
                player("BOS", "Y", 12.5),
            ],
            vec![
                team("BOS", 100.0, 50.0),
                team("MIA", 110.0, 55.0),
                team("DEN", 105.0, 52.5),
            ],
        )
    }

    #[test]
    fn test_line_classification() {
        let (players, teams) = fixtures();
        let cases = [
            ("25", LineAssessment::TooHigh),
            ("15", LineAssessment::TooLow),
            ("20", LineAssessment::Accurate),
        ];
        for (line, expected) in cases {
            let q = BetQuery::new("Boston Celtics", "X", "PTS", line, "MIA");
            let result = assess(&q, &players, &teams).unwrap();
            assert_eq!(result.player_avg, 20.0);
            assert_eq!(result.assessment, expected, "line {line}");
        }
    }

    #[test]
    fn test_player_resolved_within_team() {
        let (players, teams) = fixtures();
        let q = BetQuery::new("Los Angeles Lakers", "X", "points", "30", "BOS");
        let result = assess(&q, &players, &teams).unwrap();
        assert_eq!(result.team, "LAL");
        assert_eq!(result.player_avg, 31.0);
        assert_eq!(result.assessment, LineAssessment::TooLow);
    }

    #[test]
    fn test_defense_impact_uses_full_league() {
        let (players, teams) = fixtures();
        let q = BetQuery::new("Boston Celtics", "X", "AST", "5", "BOS");
        // The player's own team can be the opponent and is part of the average.
        let result = assess(&q, &players, &teams).unwrap();
        assert_eq!(result.impact, DefenseImpact::Strong);
        assert_eq!(result.league.drtg, 105.0);
        assert_eq!(result.league.efg_allowed, 52.5);
        assert_eq!(result.assessment, LineAssessment::Accurate);

        let q = BetQuery::new("Boston Celtics", "X", "AST", "5", "DEN");
        let result = assess(&q, &players, &teams).unwrap();
        assert_eq!(result.impact, DefenseImpact::Average);
    }

    #[test]
    fn test_opponent_by_full_name_or_lowercase() {
        let (players, teams) = fixtures();
        for opp in ["Miami Heat", "mia", "MIA"] {
            let q = BetQuery::new("Boston Celtics", "Y", "PTS", "10", opp);
            let result = assess(&q, &players, &teams).unwrap();
            assert_eq!(result.opponent, "MIA");
            assert_eq!(result.impact, DefenseImpact::Weak);
        }
    }

    #[test]
    fn test_unknown_player() {
        let (players, teams) = fixtures();
        let q = BetQuery::new("Boston Celtics", "Z", "PTS", "10", "MIA");
        assert_eq!(
            assess(&q, &players, &teams),
            Err(AssessError::PlayerNotFound {
                team: "Boston Celtics".to_string(),
                player: "Z".to_string(),
            })
        );
    }

    #[test]
    fn test_player_on_other_team_not_found() {
        let (players, teams) = fixtures();
        let q = BetQuery::new("Miami Heat", "Y", "PTS", "10", "BOS");
        assert!(matches!(
            assess(&q, &players, &teams),
            Err(AssessError::PlayerNotFound { .. })
        ));
    }

    #[test]
    fn test_unknown_team_name() {
        let (players, teams) = fixtures();
        let q = BetQuery::new("Boston", "X", "PTS", "10", "MIA");
        assert!(matches!(
            assess(&q, &players, &teams),
            Err(AssessError::PlayerNotFound { .. })
        ));
    }

    #[test]
    fn test_unknown_opponent() {
        let (players, teams) = fixtures();
        let q = BetQuery::new("Boston Celtics", "X", "PTS", "10", "PHX");
        assert_eq!(
            assess(&q, &players, &teams),
            Err(AssessError::OpponentNotFound {
                opponent: "PHX".to_string()
            })
        );
    }

    #[test]
    fn test_empty_team_dataset() {
        let (players, _) = fixtures();
        let q = BetQuery::new("Boston Celtics", "X", "PTS", "10", "MIA");
        assert!(matches!(
            assess(&q, &players, &[]),
            Err(AssessError::OpponentNotFound { .. })
        ));
    }

    #[test]
    fn test_incomplete_before_lookup() {
        // Empty datasets: validation must fail first, not a lookup.
        let q = BetQuery::new("Boston Celtics", "", "PTS", "10", "MIA");
        assert_eq!(
            assess(&q, &[], &[]),
            Err(AssessError::IncompleteQuery { field: "player" })
        );
    }

    #[test]
    fn test_deterministic() {
        let (players, teams) = fixtures();
        let q = BetQuery::new("Boston Celtics", "Y", "TRB", "6.5", "DEN");
        let first = assess(&q, &players, &teams).unwrap();
        let second = assess(&q, &players, &teams).unwrap();
        assert_eq!(first, second);
    }
}
