//! Round-robin pair scheduling via the standard "fix one, rotate the
//! rest" circle method.

/// Returns `n - 1` rounds (or `n` if `n` is odd, after padding with a
/// dummy player that is then dropped from the output), each containing
/// `floor(n/2)` pairs. Over the whole schedule every unordered pair of
/// players appears exactly once.
pub fn robin(n: u32) -> Vec<Vec<(u32, u32)>> {
    assert!(n >= 1);
    let odd = n % 2 != 0;
    let np = if odd { n + 1 } else { n };
    let dummy = n + 1;

    let mut arrangement: Vec<u32> = (1..=np).collect();
    let mut rounds = Vec::with_capacity((np - 1) as usize);

    for _ in 0..(np - 1) {
        let mut pairs = Vec::with_capacity((np / 2) as usize);
        for j in 1..=(np / 2) {
            let a = arrangement[(j - 1) as usize];
            let b = arrangement[(np - j) as usize];
            if odd && (a == dummy || b == dummy) {
                continue;
            }
            pairs.push((a, b));
        }
        rounds.push(pairs);

        // (x:xs) -> x : last(xs) : init(xs)
        let first = arrangement[0];
        let last = *arrangement.last().unwrap();
        let middle = arrangement[1..arrangement.len() - 1].to_vec();
        arrangement = std::iter::once(first)
            .chain(std::iter::once(last))
            .chain(middle)
            .collect();
    }

    rounds
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn four_players_three_rounds_of_two() {
        // S4.
        let r = robin(4);
        assert_eq!(r.len(), 3);
        for round in &r {
            assert_eq!(round.len(), 2);
        }
        let all: HashSet<(u32, u32)> = r
            .iter()
            .flatten()
            .map(|&(a, b)| if a < b { (a, b) } else { (b, a) })
            .collect();
        let expected: HashSet<(u32, u32)> =
            [(1, 2), (1, 3), (1, 4), (2, 3), (2, 4), (3, 4)].into_iter().collect();
        assert_eq!(all, expected);
    }

    #[test]
    fn round_count_matches_parity() {
        for n in 1..=40u32 {
            let r = robin(n);
            let expected = if n % 2 == 0 { n - 1 } else { n };
            assert_eq!(r.len() as u32, expected, "n={n}");
        }
    }

    #[test]
    fn each_round_has_floor_n_over_2_pairs_and_no_repeats() {
        for n in 2..=40u32 {
            let r = robin(n);
            let mut seen_pairs: HashSet<(u32, u32)> = HashSet::new();
            for round in &r {
                assert_eq!(round.len() as u32, n / 2, "n={n}");
                let mut seen_players: HashSet<u32> = HashSet::new();
                for &(a, b) in round {
                    assert!(seen_players.insert(a) && seen_players.insert(b), "n={n}");
                    let key = if a < b { (a, b) } else { (b, a) };
                    assert!(seen_pairs.insert(key), "n={n} pair {key:?} repeated");
                }
            }
        }
    }
}
