//! propline CLI
//!
//! Commands:
//! - `propline teams` - List the 30 NBA teams
//! - `propline players` - List a team's players from the dataset
//! - `propline assess` - Judge a prop line against a player's average
//! - `propline serve` - Run the HTTP API

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// NBA prop line assessment
#[derive(Parser, Debug)]
#[command(name = "propline")]
#[command(
    author,
    version,
    about = "Assess NBA player-prop lines against season averages and opponent defense"
)]
pub struct Cli {
    /// Config directory (default.toml, <PROPLINE_ENV>.toml)
    #[arg(short, long, global = true, default_value = "config")]
    pub config: PathBuf,

    /// Directory holding player_stats.json and team_stats.json
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List team abbreviations and full names
    Teams {
        #[arg(long)]
        json: bool,
    },
    /// List players for a team
    Players {
        /// Full team name (e.g. "Boston Celtics")
        #[arg(short, long)]
        team: String,
        #[arg(long)]
        json: bool,
    },
    /// Assess a prop line
    Assess {
        /// Full team name of the player's team
        #[arg(short, long)]
        team: String,
        #[arg(short, long)]
        player: String,
        /// Stat key (PTS, AST, TRB, BLK, STL, TOV, FG%, 3P%, FT%) or alias
        #[arg(short, long)]
        stat: String,
        #[arg(short, long, allow_hyphen_values = true)]
        line: String,
        /// Opponent abbreviation (e.g. MIA) or full name
        #[arg(short, long)]
        opponent: String,
        #[arg(long)]
        json: bool,
    },
    /// Run the HTTP API
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
}
