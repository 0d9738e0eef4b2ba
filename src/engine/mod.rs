//! Assessment engine
//!
//! Judges a proposed prop line against the player's season average and
//! classifies the opponent's defense against the league average. Runs
//! entirely in memory on already-loaded datasets.

pub mod assessment;
pub mod defense;
pub mod line;

pub use assessment::{assess, AssessmentResult};
pub use defense::{DefenseImpact, LeagueAverages};
pub use line::LineAssessment;
