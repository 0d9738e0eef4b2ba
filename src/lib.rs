pub mod api;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod error;

pub use config::AppConfig;
pub use data::Dataset;
pub use domain::{BetQuery, PlayerRecord, StatCategory, TeamRecord};
pub use engine::{assess, AssessmentResult, DefenseImpact, LeagueAverages, LineAssessment};
pub use error::{AssessError, PropError, Result};
