//! FFA bracket construction and scoring: successive rounds of group
//! matches where the top finishers of each group advance.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::TournamentError;
use crate::groups;
use crate::id::{BracketSide, MatchId};
use crate::model::Match;
use crate::slot::Slot;
use crate::tournament::Tournament;

pub(crate) fn build(
    group_size: u32,
    advance: u32,
    np: u32,
) -> Result<BTreeMap<MatchId, Match>, TournamentError> {
    if np <= 2 {
        return Err(TournamentError::TooFewPlayers(np));
    }
    if group_size <= 2 {
        return Err(TournamentError::GroupTooSmall(group_size));
    }
    if np <= group_size {
        return Err(TournamentError::TooFewGroups {
            players: np,
            group_size,
        });
    }
    if advance >= group_size {
        return Err(TournamentError::AdvanceTooLarge {
            advance,
            group_size,
        });
    }
    if advance == 0 {
        return Err(TournamentError::AdvanceTooSmall(advance));
    }

    let mut matches = BTreeMap::new();
    let mut round = 1u32;
    let mut current = groups::groups(group_size, np);

    loop {
        for (i, group) in current.iter().enumerate() {
            let players = group.iter().map(|&seed| Slot::Seed(seed)).collect();
            matches.insert(
                MatchId::wb(round, i as u32 + 1),
                Match {
                    players,
                    scores: None,
                },
            );
        }
        if current.len() == 1 {
            break;
        }

        let group_count = current.len() as u32;
        let min_size = current.iter().map(|g| g.len() as u32).min().unwrap();
        let advance_prime = advance.saturating_sub(group_size - min_size).max(1);
        let next_count = group_count * advance_prime;

        current = groups::groups(group_size, next_count);
        round += 1;
    }

    Ok(matches)
}

/// Scores `mid` and, once every match of its round is scored, binds
/// each group's top finishers onto the placeholder seats of the
/// already-materialized next round by overwriting the placeholder
/// identity directly (the build phase numbers a round's seats
/// `1..group_count*advance'`, in the same order advancers are produced
/// here).
pub(crate) fn score(
    t: &mut Tournament,
    group_size: u32,
    advance: u32,
    mid: MatchId,
    scores: Vec<i64>,
) -> Result<(), TournamentError> {
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
    t.matches.get_mut(&mid).unwrap().scores = Some(scores);

    let round = mid.round;
    let mut round_keys: Vec<MatchId> = t
        .matches
        .keys()
        .filter(|k| k.bracket == BracketSide::Winners && k.round == round)
        .copied()
        .collect();
    round_keys.sort();
    if !round_keys.iter().all(|k| t.matches[k].scores.is_some()) {
        return Ok(());
    }

    let mut next_keys: Vec<MatchId> = t
        .matches
        .keys()
        .filter(|k| k.bracket == BracketSide::Winners && k.round == round + 1)
        .copied()
        .collect();
    next_keys.sort();
    if next_keys.is_empty() {
        debug!(round, "FFA tournament reached its final group");
        return Ok(());
    }

    let min_size = round_keys
        .iter()
        .map(|k| t.matches[k].players.len() as u32)
        .min()
        .unwrap();
    let advance_prime = advance.saturating_sub(group_size - min_size).max(1);

    let mut advancers = Vec::new();
    for key in &round_keys {
        let played = &t.matches[key];
        let scores = played.scores.as_ref().unwrap();
        let mut ranked: Vec<usize> = (0..played.players.len()).collect();
        ranked.sort_by_key(|&i| std::cmp::Reverse(scores[i]));
        for &i in ranked.iter().take(advance_prime as usize) {
            if let Slot::Seed(seed) = played.players[i] {
                advancers.push(seed);
            }
        }
    }

    for key in next_keys {
        let next = t.matches.get_mut(&key).unwrap();
        for slot in next.players.iter_mut() {
            if let Slot::Seed(placeholder) = *slot {
                if let Some(&real) = advancers.get((placeholder - 1) as usize) {
                    *slot = Slot::Seed(real);
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifteen_players_start_in_three_groups_of_five() {
        let matches = build(5, 2, 15).unwrap();
        let round1: Vec<_> = matches
            .keys()
            .filter(|k| k.round == 1)
            .collect();
        assert_eq!(round1.len(), 3);
        for key in round1 {
            assert_eq!(matches[key].players.len(), 5);
        }
    }

    #[test]
    fn rounds_shrink_to_a_single_final_group() {
        let matches = build(4, 1, 40).unwrap();
        let max_round = matches.keys().map(|k| k.round).max().unwrap();
        let final_round: Vec<_> = matches.keys().filter(|k| k.round == max_round).collect();
        assert_eq!(final_round.len(), 1);
    }

    #[test]
    fn group_too_small_rejected() {
        assert_eq!(build(2, 1, 20), Err(TournamentError::GroupTooSmall(2)));
    }

    #[test]
    fn advance_too_large_rejected() {
        assert_eq!(
            build(4, 4, 20),
            Err(TournamentError::AdvanceTooLarge {
                advance: 4,
                group_size: 4
            })
        );
    }
}
