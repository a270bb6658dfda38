//! In-place random permutations used to randomise the order neighbours are carved in.

use rand::Rng;

/// Which permutation algorithm the carver uses.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum ShuffleKind {
    /// Textbook Fisher-Yates. Every permutation is equally likely.
    Uniform,
    /// Draws every swap partner from the whole slice. Biased, kept to reproduce mazes carved
    /// with the browser version of the game.
    Legacy,
}

impl Default for ShuffleKind {
    fn default() -> ShuffleKind {
        ShuffleKind::Uniform
    }
}

impl ShuffleKind {
    pub fn apply<T, R: Rng + ?Sized>(self, items: &mut [T], rng: &mut R) {
        match self {
            ShuffleKind::Uniform => shuffle(items, rng),
            ShuffleKind::Legacy => legacy_shuffle(items, rng),
        }
    }
}

/// Fisher-Yates: walk the counter down from the end, swapping with a partner drawn from
/// `[0, counter]`.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    let mut counter = items.len();
    while counter > 1 {
        counter -= 1;
        let partner = rng.gen_range(0..=counter);
        items.swap(counter, partner);
    }
}

/// Same walk as `shuffle`, but the partner is drawn from `[0, len)` at every step.
pub fn legacy_shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    let len = items.len();
    let mut counter = len;
    while counter > 0 {
        let partner = rng.gen_range(0..len);
        counter -= 1;
        items.swap(counter, partner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    fn rng() -> XorShiftRng {
        XorShiftRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn short_slices_are_untouched() {
        let mut r = rng();
        for &kind in &[ShuffleKind::Uniform, ShuffleKind::Legacy] {
            let mut empty: Vec<u8> = vec![];
            kind.apply(&mut empty, &mut r);
            assert!(empty.is_empty());

            let mut single = vec![42];
            kind.apply(&mut single, &mut r);
            assert_eq!(single, vec![42]);
        }
    }

    #[test]
    fn uniform_shuffle_spreads_every_item_over_every_position() {
        const N: usize = 4;
        const TRIALS: usize = 40_000;
        let mut r = rng();
        let mut counts = [[0usize; N]; N];

        for _ in 0..TRIALS {
            let mut items = [0, 1, 2, 3];
            shuffle(&mut items, &mut r);
            for (position, &item) in items.iter().enumerate() {
                counts[item][position] += 1;
            }
        }

        let expected = (TRIALS / N) as f64;
        for row in counts.iter() {
            for &count in row.iter() {
                let deviation = (count as f64 - expected).abs() / expected;
                assert!(deviation < 0.05, "count {} too far from {}", count, expected);
            }
        }
    }

    #[test]
    fn same_seed_same_permutation() {
        let mut a: Vec<u32> = (0..32).collect();
        let mut b = a.clone();
        shuffle(&mut a, &mut rng());
        shuffle(&mut b, &mut rng());
        assert_eq!(a, b);
    }

    #[test]
    fn shuffles_are_permutations() {
        fn prop(items: Vec<u16>, seed: u64, legacy: bool) -> bool {
            let mut r = XorShiftRng::seed_from_u64(seed);
            let mut shuffled = items.clone();
            let kind = if legacy { ShuffleKind::Legacy } else { ShuffleKind::Uniform };
            kind.apply(&mut shuffled, &mut r);

            let mut expected = items;
            expected.sort();
            shuffled.sort();
            expected == shuffled
        }
        quickcheck(prop as fn(Vec<u16>, u64, bool) -> bool);
    }
}
