//! Random draws without replacement.

use super::lottery::{Combination, Lottery};
use rand::seq::index;
use rand::Rng;

/// Draw one combination: `draw_size` distinct numbers, every subset equally likely.
pub fn draw(lottery: &Lottery, rng: &mut impl Rng) -> Combination {
    let numbers = index::sample(
        rng,
        lottery.universe_size() as usize,
        lottery.draw_size() as usize,
    )
    .into_iter()
    .map(|i| i as u32 + 1)
    .collect();

    Combination::new(numbers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn test_draw_has_distinct_numbers_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for (u, k) in [(31, 2), (4, 2), (58, 6), (10, 10), (1, 1)] {
            let lottery = Lottery::new(u, k).unwrap();
            for _ in 0..200 {
                let combo = draw(&lottery, &mut rng);
                assert_eq!(combo.len(), k as usize);
                let unique: HashSet<_> = combo.numbers().iter().collect();
                assert_eq!(unique.len(), k as usize, "repeated number in {:?}", combo);
                assert!(combo.numbers().iter().all(|&n| lottery.contains(n)));
            }
        }
    }

    #[test]
    fn test_draw_covers_every_subset_evenly() {
        // 4 choose 2 = 6 subsets, each expected ~1000 times out of 6000
        let lottery = Lottery::new(4, 2).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let mut counts: HashMap<Vec<u32>, u32> = HashMap::new();

        for _ in 0..6000 {
            *counts.entry(draw(&lottery, &mut rng).sorted()).or_insert(0) += 1;
        }

        assert_eq!(counts.len(), 6);
        for (subset, count) in &counts {
            assert!(
                (850..=1150).contains(count),
                "subset {:?} drawn {} times",
                subset,
                count
            );
        }
    }

    #[test]
    fn test_draw_is_reproducible_with_seed() {
        let lottery = Lottery::new(31, 2).unwrap();
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..50 {
            assert_eq!(draw(&lottery, &mut a), draw(&lottery, &mut b));
        }
    }
}
