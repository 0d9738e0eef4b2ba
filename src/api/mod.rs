//! HTTP API
//!
//! JSON endpoints a browser front-end uses to fill its team and player
//! selectors and to request assessments.

pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;
pub mod types;

pub use routes::create_router;
pub use server::ApiServer;
pub use state::AppState;
