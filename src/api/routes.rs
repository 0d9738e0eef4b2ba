use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::api::{handlers, state::AppState};

pub fn create_router(state: AppState) -> Router {
    // Browser front-ends are served from elsewhere
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/teams", get(handlers::get_teams))
        .route("/players", get(handlers::get_players))
        .route("/analyze_bet", post(handlers::analyze_bet))
        .route("/health", get(handlers::health_handler))
        .with_state(state)
        .layer(cors)
}
