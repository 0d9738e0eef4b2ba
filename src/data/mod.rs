pub mod dataset;

pub use dataset::{Dataset, PLAYERS_FILE, TEAMS_FILE};
