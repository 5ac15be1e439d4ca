use serde::{Deserialize, Serialize};

use crate::slot::Slot;

/// Which elimination style a duel bracket uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Elimination {
    Single,
    Double,
}

/// The tournament kind and its parameters. Chosen once, at construction
/// time; an engine never switches kinds mid-tournament.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rules {
    Duel(Elimination),
    Ffa { group_size: u32, advance: u32 },
}

/// One match: an ordered list of player slots and, once played, one
/// score per slot. Order is positional — callers index into `players`
/// and `scores` by a match's "position" as defined by the propagation
/// rules, not by sorting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub players: Vec<Slot>,
    pub scores: Option<Vec<i64>>,
}

impl Match {
    pub fn shell(seats: usize) -> Self {
        Match {
            players: vec![Slot::Empty; seats],
            scores: None,
        }
    }

    /// A match is scorable iff every slot holds a real seed — no
    /// `Slot::Empty` (awaiting propagation) and no `Slot::Bye`
    /// (already auto-resolved).
    pub fn is_scorable(&self) -> bool {
        self.players.iter().all(|s| matches!(s, Slot::Seed(_)))
    }

    /// The winning slot, if this match has been scored. Ties are never
    /// stored (the score engine rejects them for duels before a write
    /// happens), so the arg-max is always unique in practice.
    pub fn winner(&self) -> Option<Slot> {
        let scores = self.scores.as_ref()?;
        argmax(scores).map(|i| self.players[i])
    }

    /// The losing slot of a duel match (exactly two players), if scored.
    pub fn loser(&self) -> Option<Slot> {
        let scores = self.scores.as_ref()?;
        debug_assert_eq!(self.players.len(), 2);
        let w = argmax(scores)?;
        Some(self.players[1 - w])
    }
}

pub(crate) fn argmax(scores: &[i64]) -> Option<usize> {
    scores
        .iter()
        .enumerate()
        .max_by_key(|&(_, &v)| v)
        .map(|(i, _)| i)
}

/// A single entrant's final standing, produced once a tournament has
/// terminated. Named fields in place of the distilled spec's raw
/// `(player, placement, wins, scoreSum)` tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: u32,
    pub placement: u32,
    pub wins: u32,
    pub score_sum: i64,
}
