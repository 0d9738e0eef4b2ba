//! Dataset loader
//!
//! Reads the player and team JSON files once, before any assessment runs.
//! Both files are arrays of flat records keyed by basketball-reference
//! column names.

use serde::de::DeserializeOwned;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::domain::{teams, BetQuery, PlayerRecord, TeamRecord};
use crate::engine::{self, AssessmentResult};
use crate::error::{AssessError, PropError, Result};

pub const PLAYERS_FILE: &str = "player_stats.json";
pub const TEAMS_FILE: &str = "team_stats.json";

/// Both datasets, fully materialized and immutable after load
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    players: Vec<PlayerRecord>,
    teams: Vec<TeamRecord>,
}

impl Dataset {
    pub fn new(players: Vec<PlayerRecord>, teams: Vec<TeamRecord>) -> Self {
        Self {
            players,
            teams: teams.into_iter().map(normalize_team).collect(),
        }
    }

    /// Load both files
    pub fn load(players_path: impl AsRef<Path>, teams_path: impl AsRef<Path>) -> Result<Self> {
        let players: Vec<PlayerRecord> = read_json(players_path.as_ref())?;
        let teams: Vec<TeamRecord> = read_json(teams_path.as_ref())?;

        let dataset = Self::new(players, teams);
        info!(
            "Loaded {} players and {} teams",
            dataset.players.len(),
            dataset.teams.len()
        );
        Ok(dataset)
    }

    /// Load `player_stats.json` and `team_stats.json` from a directory
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        Self::load(dir.join(PLAYERS_FILE), dir.join(TEAMS_FILE))
    }

    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    pub fn teams(&self) -> &[TeamRecord] {
        &self.teams
    }

    /// Sorted, de-duplicated player names for a full team name.
    ///
    /// Unknown or empty team names give an empty list.
    pub fn players_for_team(&self, full_name: &str) -> Vec<String> {
        let Some(abbrev) = teams::abbreviation_for(full_name) else {
            return Vec::new();
        };
        self.players
            .iter()
            .filter(|p| p.team == abbrev)
            .map(|p| p.player.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn assess(&self, query: &BetQuery) -> std::result::Result<AssessmentResult, AssessError> {
        engine::assess(query, &self.players, &self.teams)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path).map_err(|source| PropError::DatasetIo {
        path: PathBuf::from(path),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| PropError::DatasetParse {
        path: PathBuf::from(path),
        source,
    })
}

/// Team files keyed by full name are rewritten to abbreviations.
fn normalize_team(mut record: TeamRecord) -> TeamRecord {
    if let Some(abbrev) = teams::abbreviation_for(&record.team) {
        debug!("Normalized team {} -> {}", record.team, abbrev);
        record.team = abbrev.to_string();
    }
    record
}
