use serde::{Deserialize, Serialize};

use crate::domain::BetQuery;
use crate::engine::AssessmentResult;
use crate::error::AssessError;

// ============================================================================
// Bet Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct PlayersQuery {
    pub team: Option<String>,
}

/// Line as sent by a form: a JSON number, the raw input text, or anything else
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LineInput {
    Number(f64),
    Text(String),
    /// Booleans, arrays, objects; never a valid line
    Other(serde_json::Value),
}

/// POST /analyze_bet body. Missing or null fields are treated as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeBetRequest {
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub player: Option<String>,
    #[serde(default)]
    pub stat: Option<String>,
    #[serde(default)]
    pub line: Option<LineInput>,
    #[serde(default)]
    pub opponent: Option<String>,
}

impl From<AnalyzeBetRequest> for BetQuery {
    fn from(req: AnalyzeBetRequest) -> Self {
        let line = match req.line {
            Some(LineInput::Number(n)) => n.to_string(),
            Some(LineInput::Text(s)) => s,
            Some(LineInput::Other(v)) => v.to_string(),
            None => String::new(),
        };
        BetQuery::new(
            req.team.unwrap_or_default(),
            req.player.unwrap_or_default(),
            req.stat.unwrap_or_default(),
            line,
            req.opponent.unwrap_or_default(),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeBetResponse {
    pub player: String,
    pub team: String,
    pub stat: String,
    pub stat_label: String,
    /// Season average rounded to two decimals for display
    pub player_avg: f64,
    pub line: f64,
    pub assessment: String,
    pub assessment_kind: String,
    pub opponent: String,
    pub impact: String,
    pub impact_kind: String,
    pub league_avg_drtg: f64,
    pub league_avg_efg: f64,
}

impl From<AssessmentResult> for AnalyzeBetResponse {
    fn from(result: AssessmentResult) -> Self {
        Self {
            player: result.player,
            team: result.team,
            stat: result.stat.key().to_string(),
            stat_label: result.stat.label().to_string(),
            player_avg: round2(result.player_avg),
            line: result.line,
            assessment: result.assessment.message().to_string(),
            assessment_kind: result.assessment.as_str().to_string(),
            opponent: result.opponent,
            impact: result.impact.message().to_string(),
            impact_kind: result.impact.as_str().to_string(),
            league_avg_drtg: result.league.drtg,
            league_avg_efg: result.league.efg_allowed,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// Error / System Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: String,
}

impl From<&AssessError> for ErrorResponse {
    fn from(err: &AssessError) -> Self {
        Self {
            error: err.to_string(),
            kind: err.kind().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_secs: i64,
    pub players: usize,
    pub teams: usize,
}
