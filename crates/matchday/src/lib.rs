//! Round runner for Matchday
//!
//! This crate drives a single tournament round over a validated roster:
//! - Forming balanced two-person teams and pairing them into matches
//! - Collecting one result per match from an injected input source
//! - Reporting final standings as text or JSON
//!
//! # Usage
//!
//! ```bash
//! # Run a round with the built-in roster, seeded shuffle, JSON standings
//! cargo run -p matchday -- --seed 7 --json
//! ```

mod input;
mod report;
mod round;

pub use input::*;
pub use report::*;
pub use round::*;
