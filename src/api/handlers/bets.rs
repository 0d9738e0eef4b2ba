use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    Json,
};
use tracing::{info, warn};

use crate::api::{state::AppState, types::*};
use crate::domain::{teams, BetQuery};
use crate::error::AssessError;

/// GET /teams
pub async fn get_teams() -> Json<Vec<&'static str>> {
    Json(teams::full_names().collect())
}

/// GET /players?team=Boston%20Celtics
pub async fn get_players(
    State(state): State<AppState>,
    Query(params): Query<PlayersQuery>,
) -> Json<Vec<String>> {
    let team = params.team.unwrap_or_default();
    Json(state.dataset.players_for_team(&team))
}

/// POST /analyze_bet
pub async fn analyze_bet(
    State(state): State<AppState>,
    payload: std::result::Result<Json<AnalyzeBetRequest>, JsonRejection>,
) -> std::result::Result<Json<AnalyzeBetResponse>, (StatusCode, Json<ErrorResponse>)> {
    // Wrong-typed fields and malformed JSON are reported like any other incomplete query
    let Json(req) = payload.map_err(|rejection| {
        warn!("Rejected analyze_bet body: {}", rejection.body_text());
        let err = AssessError::IncompleteQuery { field: "body" };
        (StatusCode::BAD_REQUEST, Json(ErrorResponse::from(&err)))
    })?;
    let query = BetQuery::from(req);

    match state.dataset.assess(&query) {
        Ok(result) => {
            info!(
                "Assessed {} {} line {}: {} / {} defense",
                result.player, result.stat, result.line, result.assessment, result.impact
            );
            Ok(Json(result.into()))
        }
        Err(e) => {
            warn!("Assessment rejected: {}", e);
            Err((status_for(&e), Json(ErrorResponse::from(&e))))
        }
    }
}

fn status_for(err: &AssessError) -> StatusCode {
    match err {
        AssessError::IncompleteQuery { .. } => StatusCode::BAD_REQUEST,
        AssessError::PlayerNotFound { .. } | AssessError::OpponentNotFound { .. } => {
            StatusCode::NOT_FOUND
        }
    }
}
