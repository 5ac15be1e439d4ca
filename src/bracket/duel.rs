//! Duel bracket construction: lay out every WB/LB match shell for a
//! `2^p`-rounded bracket, then pre-resolve walkovers by running the
//! same cascade the score engine uses at runtime, seeded from the WB
//! round-1 matches that are already decided.

use std::collections::BTreeMap;

use crate::error::TournamentError;
use crate::id::MatchId;
use crate::model::{Elimination, Match, Rules};
use crate::score;
use crate::seeding;
use crate::slot::Slot;
use crate::tournament::Tournament;

/// `p = ceil(log2(np))`, the number of WB rounds a `np`-entrant duel
/// bracket needs. Defined for `np >= 2`.
pub(crate) fn p_for(np: u32) -> u32 {
    32 - (np - 1).leading_zeros()
}

pub(crate) fn build(
    e: Elimination,
    np: u32,
) -> Result<BTreeMap<MatchId, Match>, TournamentError> {
    if np < 4 {
        return Err(TournamentError::TooFewPlayers(np));
    }
    let p = p_for(np);
    let mut matches = BTreeMap::new();

    for r in 1..=p {
        let count = 1u32 << (p - r);
        for i in 1..=count {
            matches.insert(MatchId::wb(r, i), Match::shell(2));
        }
    }

    if e == Elimination::Double {
        for r in 1..=(2 * p - 2) {
            let count = 1u32 << (p - 1 - (r + 1) / 2);
            for i in 1..=count {
                matches.insert(MatchId::lb(r, i), Match::shell(2));
            }
        }
        matches.insert(MatchId::lb(2 * p - 1, 1), Match::shell(2));
        matches.insert(MatchId::lb(2 * p, 1), Match::shell(2));
    }

    let half = 1u32 << (p - 1);
    let mut decided = Vec::new();
    for i in 1..=half {
        let (a, b) = seeding::seeds(p, i);
        let players = vec![Slot::mark_walkover(a, np), Slot::mark_walkover(b, np)];
        let mid = MatchId::wb(1, i);
        let m = matches.get_mut(&mid).expect("WB round 1 shell must exist");
        m.players = players;
        if let Some(scores) = score::decide_walkover(&m.players) {
            m.scores = Some(scores);
            decided.push(mid);
        }
    }

    let mut t = Tournament {
        size: np,
        rules: Rules::Duel(e),
        matches,
        results: None,
    };
    for mid in decided {
        score::propagate(&mut t, mid, e, p, true)?;
    }
    Ok(t.matches)
}
