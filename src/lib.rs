//! Tournament bracket structure and scoring engine.
//!
//! Builds the complete match map for Duel Single Elimination, Duel
//! Double Elimination, and FFA Elimination brackets, pre-resolving
//! walkovers, and scores matches one at a time, propagating winners
//! and losers (and cascading further walkovers) until a final
//! standings list can be produced. Every operation is a pure function
//! from `(input, Tournament)` to `(output, Tournament)`; nothing is
//! mutated in place.

mod bracket;
pub mod error;
mod groups;
pub mod id;
mod model;
mod results;
mod robin;
mod score;
mod seeding;
pub mod slot;
mod tournament;

pub use error::TournamentError;
pub use groups::groups;
pub use id::{BracketSide, MatchId};
pub use model::{Elimination, Match, Rules, Standing};
pub use robin::robin;
pub use seeding::{duel_expected, seeds};
pub use slot::Slot;
pub use tournament::Tournament;

/// Materializes a [`Tournament`] for `rules` sized `size`.
pub fn tournament(rules: Rules, size: u32) -> Result<Tournament, TournamentError> {
    Tournament::build(rules, size)
}
