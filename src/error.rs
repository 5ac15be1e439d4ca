use thiserror::Error;

use crate::id::MatchId;

/// Errors raised by bracket construction and scoring.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TournamentError {
    #[error("at least 4 players are required, got {0}")]
    TooFewPlayers(u32),

    #[error("FFA group size must be greater than 2, got {0}")]
    GroupTooSmall(u32),

    #[error("{players} players cannot fill more than one group of size {group_size}")]
    TooFewGroups { players: u32, group_size: u32 },

    #[error("advance count {advance} must be smaller than group size {group_size}")]
    AdvanceTooLarge { advance: u32, group_size: u32 },

    #[error("advance count must be at least 1, got {0}")]
    AdvanceTooSmall(u32),

    #[error("{0:?} is not part of this tournament")]
    UnknownMatch(MatchId),

    #[error("{0:?} still has an open slot and cannot be scored")]
    MatchNotReady(MatchId),

    #[error("{mid:?} expects {expected} scores, got {got}")]
    ScoreArityMismatch {
        mid: MatchId,
        expected: usize,
        got: usize,
    },

    #[error("{0:?} was scored as a tie, which duel matches do not permit")]
    TieNotPermitted(MatchId),

    #[error("internal bracket invariant violated while progressing {0:?}")]
    BadMatchId(MatchId),
}
