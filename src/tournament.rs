use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bracket::{ffa, duel};
use crate::error::TournamentError;
use crate::id::MatchId;
use crate::model::{Match, Rules, Standing};
use crate::results;

/// An immutable snapshot of a tournament: its size, rules, the full match
/// map, and — once the tournament has terminated — final standings.
///
/// Every mutating operation (currently only [`Tournament::score`])
/// returns a new snapshot rather than mutating this one in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tournament {
    pub size: u32,
    pub rules: Rules,
    pub(crate) matches: BTreeMap<MatchId, Match>,
    pub(crate) results: Option<Vec<Standing>>,
}

impl Tournament {
    /// Materializes the complete set of match shells for `rules` sized
    /// `size`, pre-resolving walkovers. See the error table for the
    /// conditions that reject a `(rules, size)` pair.
    pub fn build(rules: Rules, size: u32) -> Result<Tournament, TournamentError> {
        debug!(?rules, size, "building tournament");
        let matches = match rules {
            Rules::Duel(e) => duel::build(e, size)?,
            Rules::Ffa {
                group_size,
                advance,
            } => ffa::build(group_size, advance, size)?,
        };
        let mut t = Tournament {
            size,
            rules,
            matches,
            results: None,
        };
        t.results = results::compute(&t);
        Ok(t)
    }

    /// All match identifiers, in the bracket's canonical total order.
    pub fn keys(&self) -> impl Iterator<Item = MatchId> + '_ {
        self.matches.keys().copied()
    }

    pub fn match_at(&self, id: MatchId) -> Option<&Match> {
        self.matches.get(&id)
    }

    /// Scores `id` with `scores` and returns the resulting snapshot, with
    /// winners/losers propagated (and any walkover cascades resolved)
    /// and [`Tournament::results`] recomputed if the tournament has now
    /// terminated.
    pub fn score(&self, id: MatchId, scores: Vec<i64>) -> Result<Tournament, TournamentError> {
        let mut next = self.clone();
        match self.rules {
            Rules::Duel(e) => crate::score::score_duel(&mut next, e, id, scores)?,
            Rules::Ffa {
                group_size,
                advance,
            } => ffa::score(&mut next, group_size, advance, id, scores)?,
        }
        next.results = results::compute(&next);
        Ok(next)
    }

    pub fn results(&self) -> Option<&[Standing]> {
        self.results.as_deref()
    }
}
