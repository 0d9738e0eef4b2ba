pub mod bets;
pub mod system;

pub use bets::*;
pub use system::*;
