//! Perfect duel seeding: `seeds(p, i)` produces the pair of seeds that meet
//! in winners'-bracket round 1, match `i`, of a `2^p`-entrant bracket, such
//! that seeds `1` and `2^p` only meet in the final if both keep winning.

/// Reverses the low `width` bits of `x`.
fn reverse_bits(x: u64, width: u32) -> u64 {
    let mut out = 0u64;
    for bit in 0..width {
        if x & (1 << bit) != 0 {
            out |= 1 << (width - 1 - bit);
        }
    }
    out
}

/// The ordered pair `(a, b)` of seeds meeting in match `i` of winners'
/// round 1 for a bracket sized `2^p`. `p` must be positive; `i` must be in
/// `1..=2^(p-1)`.
pub fn seeds(p: u32, i: u32) -> (u32, u32) {
    assert!(p > 0, "p must be positive");
    let half = 1u64 << (p - 1);
    assert!(
        i as u64 >= 1 && i as u64 <= half,
        "i out of range for p={p}"
    );

    let i = i as u64;
    let k = i.ilog2();
    let r = i - (1 << k);

    let last_seed = if r == 0 {
        1u64 << (p - k)
    } else {
        let x = i - 2 * r;
        let width = 64 - x.leading_zeros();
        let nr = reverse_bits(x, width);
        (1u64 << (p - k - 1)) + nr * (1u64 << (p - width))
    };

    let a = 1 + (1u64 << p) - last_seed;
    (a as u32, last_seed as u32)
}

/// The predicate every pair from [`seeds`] must satisfy: opposite parity
/// and summing to `1 + 2^p`.
pub fn duel_expected(p: u32, pair: (u32, u32)) -> bool {
    let (a, b) = pair;
    a % 2 == 1 && b % 2 == 0 && (a as u64 + b as u64) == 1 + (1u64 << p)
}
