//! Output formatting for `propline` commands.
//!
//! Supports two modes: human-readable tables (default) and JSON (--json).

use serde::Serialize;
use tabled::{Table, Tabled};

use crate::engine::AssessmentResult;

/// Output mode for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Table,
    Json,
}

impl OutputMode {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputMode::Json
        } else {
            OutputMode::Table
        }
    }
}

/// Print a vec of Tabled + Serialize items in the chosen mode.
pub fn print_items<T: Tabled + Serialize>(items: &[T], mode: OutputMode) -> anyhow::Result<()> {
    match mode {
        OutputMode::Table => {
            if items.is_empty() {
                println!("(no results)");
            } else {
                let table = Table::new(items).to_string();
                println!("{table}");
            }
        }
        OutputMode::Json => {
            let json = serde_json::to_string_pretty(items)?;
            println!("{json}");
        }
    }
    Ok(())
}

/// Print an assessment in the chosen mode.
pub fn print_assessment(result: &AssessmentResult, mode: OutputMode) -> anyhow::Result<()> {
    match mode {
        OutputMode::Table => println!("{}", format_assessment(result)),
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(result)?),
    }
    Ok(())
}

/// Plain-text summary; the average is rounded to two decimals for display only.
pub fn format_assessment(result: &AssessmentResult) -> String {
    format!(
        "Player: {}\nStat: {}\nAverage: {:.2}\nAssessment: {}\nImpact: {}",
        result.player,
        result.stat,
        result.player_avg,
        result.assessment.message(),
        result.impact.message()
    )
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("\x1b[31m{msg}\x1b[0m");
}
