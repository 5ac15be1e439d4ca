//! Final standings derivation: placements, per-player win counts, and
//! score sums, computed once a tournament has terminated.

use std::collections::{BTreeMap, BTreeSet};

use crate::bracket::duel::p_for;
use crate::id::{BracketSide, MatchId};
use crate::model::{argmax, Elimination, Rules, Standing};
use crate::slot::Slot;
use crate::tournament::Tournament;

fn div_ceil(a: i64, b: i64) -> i64 {
    (a + b - 1) / b
}

/// `None` while the tournament is still in progress.
pub(crate) fn compute(t: &Tournament) -> Option<Vec<Standing>> {
    match t.rules {
        Rules::Duel(e) => compute_duel(t, e),
        Rules::Ffa { .. } => compute_ffa(t),
    }
}

fn compute_duel(t: &Tournament, e: Elimination) -> Option<Vec<Standing>> {
    let p = p_for(t.size);

    let (champion, runner_up) = match e {
        Elimination::Single => {
            let finale = t.matches.get(&MatchId::wb(p, 1))?;
            finale.scores.as_ref()?;
            (finale.winner()?.as_seed()?, finale.loser()?.as_seed()?)
        }
        Elimination::Double => {
            let gf1 = t.matches.get(&MatchId::lb(2 * p - 1, 1))?;
            let gf1_scores = gf1.scores.as_ref()?;
            let wb_side_won = argmax(gf1_scores) == Some(0);
            if wb_side_won {
                (gf1.winner()?.as_seed()?, gf1.loser()?.as_seed()?)
            } else {
                let gf2 = t.matches.get(&MatchId::lb(2 * p, 1))?;
                gf2.scores.as_ref()?;
                (gf2.winner()?.as_seed()?, gf2.loser()?.as_seed()?)
            }
        }
    };

    let terminal_bracket = match e {
        Elimination::Single => BracketSide::Winners,
        Elimination::Double => BracketSide::Losers,
    };

    let mut wins: BTreeMap<u32, u32> = BTreeMap::new();
    let mut score_sum: BTreeMap<u32, i64> = BTreeMap::new();
    let mut max_round: BTreeMap<u32, u32> = BTreeMap::new();
    let mut all_players: BTreeSet<u32> = BTreeSet::new();

    for (mid, m) in &t.matches {
        for slot in &m.players {
            if let Slot::Seed(seed) = slot {
                all_players.insert(*seed);
                if mid.bracket == terminal_bracket {
                    let entry = max_round.entry(*seed).or_insert(0);
                    if mid.round > *entry {
                        *entry = mid.round;
                    }
                }
            }
        }
        if !m.is_scorable() {
            continue;
        }
        let Some(scores) = &m.scores else { continue };
        for (idx, slot) in m.players.iter().enumerate() {
            if let Slot::Seed(seed) = slot {
                *score_sum.entry(*seed).or_insert(0) += scores[idx];
            }
        }
        if let Some(w) = argmax(scores) {
            if let Slot::Seed(seed) = m.players[w] {
                *wins.entry(seed).or_insert(0) += 1;
            }
        }
    }

    let mut standings: Vec<Standing> = all_players
        .into_iter()
        .map(|player| {
            let max_r = *max_round.get(&player).unwrap_or(&0);
            Standing {
                player,
                placement: placement_from_round(e, p, max_r),
                wins: *wins.get(&player).unwrap_or(&0),
                score_sum: *score_sum.get(&player).unwrap_or(&0),
            }
        })
        .collect();

    // The raw formula cannot tell the champion and runner-up apart —
    // both last-appear in the same final match, so it assigns them the
    // same placement. Fix the pair up explicitly before sorting.
    for s in standings.iter_mut() {
        if s.player == champion {
            s.placement = 1;
        } else if s.player == runner_up {
            s.placement = 2;
        }
    }
    standings.sort_by_key(|s| s.placement);

    Some(standings)
}

fn placement_from_round(e: Elimination, p: u32, max_round: u32) -> u32 {
    match e {
        Elimination::Single => {
            let metric = p as i64 + 1 - max_round as i64;
            if metric <= 1 {
                metric.max(1) as u32
            } else {
                (2i64.pow((metric - 1) as u32) + 1) as u32
            }
        }
        Elimination::Double => {
            let metric = 2 * p as i64 + 1 - max_round as i64;
            if metric <= 4 {
                metric.max(1) as u32
            } else {
                let r_prime = metric - 4;
                let k = div_ceil(r_prime + 1, 2);
                let odd_extra = if r_prime % 2 == 0 { 2i64.pow(k as u32) } else { 0 };
                (2i64.pow((k + 1) as u32) + 1 + odd_extra) as u32
            }
        }
    }
}

/// FFA results have no formally specified structure; this reports a
/// reasonable degenerate standing list once the final group has been
/// scored: players ranked by score within the last group they played,
/// then by the round they were eliminated in, with `wins`/`score_sum`
/// aggregated the same way as the duel engine.
fn compute_ffa(t: &Tournament) -> Option<Vec<Standing>> {
    let max_round = t.matches.keys().map(|k| k.round).max()?;
    let finale_keys: Vec<MatchId> = t
        .matches
        .keys()
        .filter(|k| k.round == max_round)
        .copied()
        .collect();
    if finale_keys.len() != 1 {
        return None;
    }
    let finale = &t.matches[&finale_keys[0]];
    finale.scores.as_ref()?;

    let mut wins: BTreeMap<u32, u32> = BTreeMap::new();
    let mut score_sum: BTreeMap<u32, i64> = BTreeMap::new();
    let mut max_player_round: BTreeMap<u32, u32> = BTreeMap::new();
    let mut all_players: BTreeSet<u32> = BTreeSet::new();

    for (mid, m) in &t.matches {
        for slot in &m.players {
            if let Slot::Seed(seed) = slot {
                all_players.insert(*seed);
                let entry = max_player_round.entry(*seed).or_insert(0);
                if mid.round > *entry {
                    *entry = mid.round;
                }
            }
        }
        let Some(scores) = &m.scores else { continue };
        for (idx, slot) in m.players.iter().enumerate() {
            if let Slot::Seed(seed) = slot {
                *score_sum.entry(*seed).or_insert(0) += scores[idx];
                if let Some(&best) = scores.iter().max() {
                    if scores[idx] == best {
                        *wins.entry(*seed).or_insert(0) += 1;
                    }
                }
            }
        }
    }

    let mut standings: Vec<Standing> = all_players
        .into_iter()
        .map(|player| Standing {
            player,
            placement: 0,
            wins: *wins.get(&player).unwrap_or(&0),
            score_sum: *score_sum.get(&player).unwrap_or(&0),
        })
        .collect();

    standings.sort_by(|a, b| {
        let ra = max_player_round.get(&a.player).copied().unwrap_or(0);
        let rb = max_player_round.get(&b.player).copied().unwrap_or(0);
        rb.cmp(&ra).then(b.score_sum.cmp(&a.score_sum))
    });
    for (i, s) in standings.iter_mut().enumerate() {
        s.placement = i as u32 + 1;
    }

    Some(standings)
}
