//! Duel score propagation: writing a score, advancing the winner
//! (`m_right`), dropping the loser (`m_down`), and cascading any
//! walkovers those writes trigger.

use tracing::trace;

use crate::bracket::duel::p_for;
use crate::error::TournamentError;
use crate::id::{BracketSide, MatchId};
use crate::model::{argmax, Elimination};
use crate::slot::Slot;
use crate::tournament::Tournament;

fn div_ceil(a: u32, b: u32) -> u32 {
    (a + b - 1) / b
}

fn has_tie(scores: &[i64]) -> bool {
    let Some(max) = scores.iter().max() else {
        return false;
    };
    scores.iter().filter(|&&s| s == *max).count() > 1
}

/// A match auto-decides once every slot is either a real seed or a bye
/// and at least one bye is present. When every slot is a bye (the
/// "double walkover" case), slot `0` wins by convention and the bye
/// keeps cascading forward as a phantom winner until it meets a real
/// player.
pub(crate) fn decide_walkover(players: &[Slot]) -> Option<Vec<i64>> {
    if players.iter().any(|s| s.is_empty()) {
        return None;
    }
    if !players.iter().any(|s| s.is_bye()) {
        return None;
    }
    let winner = players.iter().position(|s| !s.is_bye()).unwrap_or(0);
    Some(
        players
            .iter()
            .enumerate()
            .map(|(i, _)| if i == winner { 1 } else { 0 })
            .collect(),
    )
}

/// Where the winner of `mid` advances to, and which position it
/// occupies there. `None` means `mid` is a terminal match for the
/// winner's path. `inhibit_terminal` suppresses the GF1 early-exit rule
/// so an internal walkover cascade can still reach and fill GF2.
fn m_right(
    mid: MatchId,
    e: Elimination,
    p: u32,
    scores: &[i64],
    inhibit_terminal: bool,
) -> Result<Option<(MatchId, usize)>, TournamentError> {
    if mid.round == 0 || mid.game == 0 {
        return Err(TournamentError::BadMatchId(mid));
    }
    let r = mid.round;
    let g = mid.game;

    let terminal = r >= 2 * p
        || (mid.bracket == BracketSide::Winners && r > p)
        || (mid.bracket == BracketSide::Winners && e == Elimination::Single && r == p)
        || (!inhibit_terminal
            && mid.bracket == BracketSide::Losers
            && r == 2 * p - 1
            && argmax(scores) == Some(0));
    if terminal {
        return Ok(None);
    }

    match mid.bracket {
        BracketSide::Winners => {
            let target = if r == p {
                MatchId::lb(2 * p - 1, div_ceil(g, 2))
            } else {
                MatchId::wb(r + 1, div_ceil(g, 2))
            };
            let position = if g % 2 == 1 { 0 } else { 1 };
            Ok(Some((target, position)))
        }
        BracketSide::Losers => {
            if r == 2 * p - 2 {
                return Ok(Some((MatchId::lb(2 * p - 1, 1), 1)));
            }
            if r == 2 * p - 1 {
                return Ok(Some((MatchId::lb(2 * p, 1), 0)));
            }
            if r % 2 == 1 {
                // Odd LB round: 1:1 join with the next WB-side dropout,
                // round r+1 has the same match count as round r. Position
                // is g-parity dependent only at r == 1, where m_down's own
                // WB-round-2 target is itself g-dependent; for every later
                // odd round the WB dropout always lands at position 0 (see
                // m_down, r > 2), so the LB survivor must take position 1.
                let position = if r == 1 && g % 2 == 0 { 0 } else { 1 };
                Ok(Some((MatchId::lb(r + 1, g), position)))
            } else {
                // Even LB round: merges two matches into one.
                let position = if g % 2 == 1 { 0 } else { 1 };
                Ok(Some((MatchId::lb(r + 1, div_ceil(g, 2)), position)))
            }
        }
    }
}

/// Where the loser of `mid` drops to, and which position it occupies
/// there. Always `None` for Single Elimination.
fn m_down(
    mid: MatchId,
    e: Elimination,
    p: u32,
) -> Result<Option<(MatchId, usize)>, TournamentError> {
    if mid.round == 0 || mid.game == 0 {
        return Err(TournamentError::BadMatchId(mid));
    }
    if e == Elimination::Single {
        return Ok(None);
    }
    let r = mid.round;
    let g = mid.game;

    if r == 2 * p - 1 {
        return Ok(Some((MatchId::lb(2 * p, 1), 1)));
    }
    if mid.bracket == BracketSide::Losers || r > p {
        return Ok(None);
    }
    let target = if r == 1 {
        MatchId::lb(1, div_ceil(g, 2))
    } else {
        MatchId::lb(2 * (r - 1), g)
    };
    let position = if r > 2 || g % 2 == 1 { 0 } else { 1 };
    Ok(Some((target, position)))
}

fn apply_write(
    t: &mut Tournament,
    target: MatchId,
    position: usize,
    slot: Slot,
) -> Result<(), TournamentError> {
    let m = t
        .matches
        .get_mut(&target)
        .ok_or(TournamentError::BadMatchId(target))?;
    m.players[position] = slot;
    if let Some(scores) = decide_walkover(&m.players) {
        trace!(?target, ?scores, "walkover resolved");
        m.scores = Some(scores);
    }
    Ok(())
}

fn is_freshly_decided(t: &Tournament, mid: MatchId) -> bool {
    t.matches.get(&mid).is_some_and(|m| m.scores.is_some())
}

/// Propagates the already-written result at `mid` (winner advance, loser
/// drop) and recursively cascades into any walkover this creates.
pub(crate) fn propagate(
    t: &mut Tournament,
    mid: MatchId,
    e: Elimination,
    p: u32,
    inhibit_terminal: bool,
) -> Result<(), TournamentError> {
    let m = t
        .matches
        .get(&mid)
        .ok_or(TournamentError::BadMatchId(mid))?
        .clone();
    let scores = m.scores.clone().ok_or(TournamentError::BadMatchId(mid))?;
    let win_idx = argmax(&scores).ok_or(TournamentError::BadMatchId(mid))?;
    let winner = m.players[win_idx];

    if let Some((target, position)) = m_right(mid, e, p, &scores, inhibit_terminal)? {
        let was_decided = is_freshly_decided(t, target);
        apply_write(t, target, position, winner)?;
        if !was_decided && is_freshly_decided(t, target) {
            propagate(t, target, e, p, true)?;
        }
    }

    if m.players.len() == 2 {
        let loser = m.players[1 - win_idx];
        if let Some((target, position)) = m_down(mid, e, p)? {
            let was_decided = is_freshly_decided(t, target);
            apply_write(t, target, position, loser)?;
            if !was_decided && is_freshly_decided(t, target) {
                propagate(t, target, e, p, true)?;
            }
        }
    }

    Ok(())
}

/// The public duel scoring operation: validates, writes, and propagates.
pub(crate) fn score_duel(
    t: &mut Tournament,
    e: Elimination,
    mid: MatchId,
    scores: Vec<i64>,
) -> Result<(), TournamentError> {
    let p = p_for(t.size);
    let m = t
        .matches
        .get(&mid)
        .ok_or(TournamentError::UnknownMatch(mid))?;
    if !m.is_scorable() {
        return Err(TournamentError::MatchNotReady(mid));
    }
    if scores.len() != m.players.len() {
        return Err(TournamentError::ScoreArityMismatch {
            mid,
            expected: m.players.len(),
            got: scores.len(),
        });
    }
    if has_tie(&scores) {
        return Err(TournamentError::TieNotPermitted(mid));
    }

    t.matches.get_mut(&mid).unwrap().scores = Some(scores);
    propagate(t, mid, e, p, false)
}
