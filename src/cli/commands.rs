use serde::Serialize;
use tabled::Tabled;

use super::output::{self, OutputMode};
use crate::data::Dataset;
use crate::domain::{teams, BetQuery};

#[derive(Debug, Serialize, Tabled)]
pub struct TeamRow {
    #[tabled(rename = "Abbr")]
    pub abbreviation: &'static str,
    #[tabled(rename = "Team")]
    pub name: &'static str,
}

#[derive(Debug, Serialize, Tabled)]
pub struct PlayerRow {
    #[tabled(rename = "Player")]
    pub player: String,
}

pub fn team_rows() -> Vec<TeamRow> {
    teams::entries()
        .iter()
        .map(|&(abbreviation, name)| TeamRow { abbreviation, name })
        .collect()
}

pub fn player_rows(dataset: &Dataset, team: &str) -> Vec<PlayerRow> {
    dataset
        .players_for_team(team)
        .into_iter()
        .map(|player| PlayerRow { player })
        .collect()
}

/// `propline teams`
pub fn list_teams(mode: OutputMode) -> anyhow::Result<()> {
    output::print_items(&team_rows(), mode)
}

/// `propline players --team <full name>`
pub fn list_players(dataset: &Dataset, team: &str, mode: OutputMode) -> anyhow::Result<()> {
    if teams::abbreviation_for(team).is_none() {
        anyhow::bail!("Unknown team: {team} (use the full name, e.g. \"Boston Celtics\")");
    }
    output::print_items(&player_rows(dataset, team), mode)
}

/// `propline assess ...`
pub fn assess(dataset: &Dataset, query: &BetQuery, mode: OutputMode) -> anyhow::Result<()> {
    let result = dataset.assess(query)?;
    output::print_assessment(&result, mode)
}
