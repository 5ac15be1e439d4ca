use serde::{Deserialize, Serialize};

/// Which of the two brackets a match belongs to. Duel Single Elimination
/// and FFA tournaments only ever use `Winners`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BracketSide {
    Winners,
    Losers,
}

/// Identifies a single match: its bracket, round, and position within
/// the round. Ordered lexicographically on `(bracket, round, game)` with
/// `Winners < Losers`, which is also the canonical iteration order of a
/// [`crate::Tournament`]'s matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MatchId {
    pub bracket: BracketSide,
    pub round: u32,
    pub game: u32,
}

impl MatchId {
    pub fn wb(round: u32, game: u32) -> Self {
        MatchId {
            bracket: BracketSide::Winners,
            round,
            game,
        }
    }

    pub fn lb(round: u32, game: u32) -> Self {
        MatchId {
            bracket: BracketSide::Losers,
            round,
            game,
        }
    }
}

impl std::fmt::Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let side = match self.bracket {
            BracketSide::Winners => "WB",
            BracketSide::Losers => "LB",
        };
        write!(f, "{side}:r{}:g{}", self.round, self.game)
    }
}
