//! Domain types: team directory, stat categories, dataset records and queries.

pub mod query;
pub mod records;
pub mod stats;
pub mod teams;

pub use query::{BetQuery, ValidatedQuery};
pub use records::{PlayerRecord, TeamRecord};
pub use stats::{StatCategory, StatLine, UnknownStat};
