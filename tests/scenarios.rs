//! End-to-end scenario tests against the public API.

use tourney_core::{tournament, Elimination, MatchId, Rules, Slot};

#[test]
fn s5_four_player_single_elimination() {
    let t = tournament(Rules::Duel(Elimination::Single), 4).unwrap();

    let m11 = t.match_at(MatchId::wb(1, 1)).unwrap();
    assert_eq!(m11.players, vec![Slot::Seed(1), Slot::Seed(4)]);
    let m12 = t.match_at(MatchId::wb(1, 2)).unwrap();
    assert_eq!(m12.players, vec![Slot::Seed(3), Slot::Seed(2)]);

    let t = t.score(MatchId::wb(1, 1), vec![1, 0]).unwrap();
    let t = t.score(MatchId::wb(1, 2), vec![1, 0]).unwrap();

    let final_match = t.match_at(MatchId::wb(2, 1)).unwrap();
    assert_eq!(final_match.players, vec![Slot::Seed(1), Slot::Seed(3)]);
    assert!(t.results().is_none());

    let t = t.score(MatchId::wb(2, 1), vec![1, 0]).unwrap();
    let results = t.results().expect("tournament must have terminated");
    assert_eq!(results.len(), 4);

    let champion = results.iter().find(|s| s.placement == 1).unwrap();
    assert_eq!(champion.player, 1);
    let runner_up = results.iter().find(|s| s.placement == 2).unwrap();
    assert_eq!(runner_up.player, 3);

    let third_place: Vec<u32> = results
        .iter()
        .filter(|s| s.placement == 3)
        .map(|s| s.player)
        .collect();
    assert_eq!(third_place.len(), 2);
    assert!(third_place.contains(&2));
    assert!(third_place.contains(&4));
}

#[test]
fn s6_five_player_double_elimination_walkover() {
    let t = tournament(Rules::Duel(Elimination::Double), 5).unwrap();

    let m1 = t.match_at(MatchId::wb(1, 1)).unwrap();
    assert_eq!(m1.players, vec![Slot::Seed(1), Slot::Bye]);
    assert_eq!(m1.scores, Some(vec![1, 0]));

    let wb2 = t.match_at(MatchId::wb(2, 1)).unwrap();
    assert_eq!(wb2.players[0], Slot::Seed(1));

    let lb1 = t.match_at(MatchId::lb(1, 1)).unwrap();
    assert_eq!(lb1.players[0], Slot::Bye);
}

#[test]
fn full_eight_player_single_elimination_completes() {
    let mut t = tournament(Rules::Duel(Elimination::Single), 8).unwrap();
    loop {
        let next_match = t
            .keys()
            .find(|&id| t.match_at(id).unwrap().is_scorable() && t.match_at(id).unwrap().scores.is_none());
        let Some(id) = next_match else { break };
        t = t.score(id, vec![1, 0]).unwrap();
    }
    let results = t.results().expect("bracket must have terminated");
    assert_eq!(results.len(), 8);
}

#[test]
fn full_five_player_double_elimination_completes_with_bracket_reset() {
    let mut t = tournament(Rules::Duel(Elimination::Double), 5).unwrap();
    loop {
        let next_match = t.keys().find(|&id| {
            let m = t.match_at(id).unwrap();
            m.is_scorable() && m.scores.is_none()
        });
        let Some(id) = next_match else { break };
        // Always crown the right-hand seat the winner, forcing the LB
        // side through to a bracket reset whenever it can win.
        t = t.score(id, vec![0, 1]).unwrap();
    }
    let results = t.results().expect("bracket must have terminated");
    assert_eq!(results.len(), 5);
}

#[test]
fn ffa_group_stage_builds_and_advances() {
    let t = tournament(
        Rules::Ffa {
            group_size: 5,
            advance: 2,
        },
        15,
    )
    .unwrap();

    let round1: Vec<MatchId> = t.keys().filter(|k| k.round == 1).collect();
    assert_eq!(round1.len(), 3);

    let mut t = t;
    for id in round1 {
        let len = t.match_at(id).unwrap().players.len();
        let scores: Vec<i64> = (0..len as i64).rev().collect();
        t = t.score(id, scores).unwrap();
    }
    let round2: Vec<MatchId> = t.keys().filter(|k| k.round == 2).collect();
    assert!(!round2.is_empty());
    for id in &round2 {
        for slot in &t.match_at(*id).unwrap().players {
            assert!(matches!(slot, Slot::Seed(_)));
        }
    }
}
