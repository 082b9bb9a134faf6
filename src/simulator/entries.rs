//! Player entries (bets) and matching drawn combinations against them.

use super::lottery::{Combination, Lottery};
use crate::error::ConfigError;
use std::collections::{BTreeMap, HashSet};

/// The winning bets for a simulation. Single and multiple entries share one path.
#[derive(Debug, Clone)]
pub struct EntrySet {
    /// Canonical (ascending) entries in the order given, duplicates removed
    entries: Vec<Vec<u32>>,
    lookup: HashSet<Vec<u32>>,
    supplied: usize,
}

impl EntrySet {
    /// Validate `entries` against `lottery`.
    pub fn new(lottery: &Lottery, entries: Vec<Vec<u32>>) -> Result<Self, ConfigError> {
        if entries.is_empty() {
            return Err(ConfigError::EmptyEntrySet);
        }

        let supplied = entries.len();
        let expected = lottery.draw_size() as usize;
        let mut canonical = Vec::with_capacity(supplied);
        let mut lookup = HashSet::with_capacity(supplied);

        for (index, mut entry) in entries.into_iter().enumerate() {
            if entry.len() != expected {
                return Err(ConfigError::EntrySizeMismatch {
                    index,
                    expected,
                    actual: entry.len(),
                });
            }
            if let Some(&number) = entry.iter().find(|&&n| !lottery.contains(n)) {
                return Err(ConfigError::NumberOutOfRange {
                    index,
                    number,
                    universe_size: lottery.universe_size(),
                });
            }

            entry.sort_unstable();
            if let Some(pair) = entry.windows(2).find(|w| w[0] == w[1]) {
                return Err(ConfigError::DuplicateNumber {
                    index,
                    number: pair[0],
                });
            }

            if lookup.insert(entry.clone()) {
                canonical.push(entry);
            }
        }

        Ok(Self {
            entries: canonical,
            lookup,
            supplied,
        })
    }

    /// Build from a bet index → numbers mapping, ordered by index.
    pub fn from_indexed(
        lottery: &Lottery,
        entries: BTreeMap<u32, Vec<u32>>,
    ) -> Result<Self, ConfigError> {
        Self::new(lottery, entries.into_values().collect())
    }

    /// The single entry {1, 2, ..., k}.
    pub fn first_numbers(lottery: &Lottery) -> Self {
        let entry: Vec<u32> = (1..=lottery.draw_size()).collect();
        Self {
            entries: vec![entry.clone()],
            lookup: HashSet::from([entry]),
            supplied: 1,
        }
    }

    /// Check that every entry still fits `lottery` (size k, numbers in range).
    pub fn check_against(&self, lottery: &Lottery) -> Result<(), ConfigError> {
        let expected = lottery.draw_size() as usize;
        for (index, entry) in self.entries.iter().enumerate() {
            if entry.len() != expected {
                return Err(ConfigError::EntrySizeMismatch {
                    index,
                    expected,
                    actual: entry.len(),
                });
            }
            if let Some(&number) = entry.iter().find(|&&n| !lottery.contains(n)) {
                return Err(ConfigError::NumberOutOfRange {
                    index,
                    number,
                    universe_size: lottery.universe_size(),
                });
            }
        }
        Ok(())
    }

    /// True when the combination equals any entry as a set.
    pub fn matches(&self, combination: &Combination) -> bool {
        self.lookup.contains(&combination.sorted())
    }

    /// Number of entries the caller supplied, duplicates included.
    pub fn len(&self) -> usize {
        self.supplied
    }

    pub fn is_empty(&self) -> bool {
        self.supplied == 0
    }

    /// Number of distinct winning sets.
    pub fn distinct_len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u32]> {
        self.entries.iter().map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lottery() -> Lottery {
        Lottery::new(31, 2).unwrap()
    }

    #[test]
    fn test_match_ignores_draw_order() {
        let entries = EntrySet::new(&lottery(), vec![vec![7, 12]]).unwrap();
        assert!(entries.matches(&Combination::new(vec![12, 7])));
        assert!(entries.matches(&Combination::new(vec![7, 12])));
        assert!(!entries.matches(&Combination::new(vec![7, 13])));
    }

    #[test]
    fn test_match_any_of_several_entries() {
        let entries = EntrySet::new(&lottery(), vec![vec![1, 2], vec![30, 31]]).unwrap();
        assert!(entries.matches(&Combination::new(vec![2, 1])));
        assert!(entries.matches(&Combination::new(vec![31, 30])));
        assert!(!entries.matches(&Combination::new(vec![1, 31])));
    }

    #[test]
    fn test_partial_overlap_is_not_a_match() {
        let lottery = Lottery::new(42, 6).unwrap();
        let entries = EntrySet::new(&lottery, vec![vec![1, 2, 3, 4, 5, 6]]).unwrap();
        assert!(!entries.matches(&Combination::new(vec![1, 2, 3, 4, 5, 7])));
    }

    #[test]
    fn test_empty_entry_set_rejected() {
        assert_eq!(
            EntrySet::new(&lottery(), vec![]).unwrap_err(),
            ConfigError::EmptyEntrySet
        );
    }

    #[test]
    fn test_entry_size_mismatch_rejected() {
        let err = EntrySet::new(&lottery(), vec![vec![1, 2], vec![3, 4, 5]]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::EntrySizeMismatch {
                index: 1,
                expected: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn test_out_of_range_rejected() {
        let err = EntrySet::new(&lottery(), vec![vec![0, 5]]).unwrap_err();
        assert!(matches!(err, ConfigError::NumberOutOfRange { number: 0, .. }));

        let err = EntrySet::new(&lottery(), vec![vec![5, 32]]).unwrap_err();
        assert!(matches!(err, ConfigError::NumberOutOfRange { number: 32, .. }));
    }

    #[test]
    fn test_repeated_number_rejected() {
        let err = EntrySet::new(&lottery(), vec![vec![9, 9]]).unwrap_err();
        assert_eq!(err, ConfigError::DuplicateNumber { index: 0, number: 9 });
    }

    #[test]
    fn test_duplicate_entries_collapse() {
        let entries = EntrySet::new(&lottery(), vec![vec![1, 2], vec![2, 1], vec![3, 4]]).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries.distinct_len(), 2);
    }

    #[test]
    fn test_from_indexed_orders_by_bet_index() {
        let map = BTreeMap::from([(2, vec![5, 6]), (0, vec![2, 1])]);
        let entries = EntrySet::from_indexed(&lottery(), map).unwrap();
        let collected: Vec<&[u32]> = entries.iter().collect();
        assert_eq!(collected, vec![&[1, 2][..], &[5, 6][..]]);
    }

    #[test]
    fn test_check_against_other_lottery() {
        let entries = EntrySet::new(&lottery(), vec![vec![1, 31]]).unwrap();
        assert!(entries.check_against(&lottery()).is_ok());

        let three = Lottery::new(31, 3).unwrap();
        assert!(matches!(
            entries.check_against(&three),
            Err(ConfigError::EntrySizeMismatch { expected: 3, .. })
        ));

        let smaller = Lottery::new(30, 2).unwrap();
        assert!(matches!(
            entries.check_against(&smaller),
            Err(ConfigError::NumberOutOfRange { number: 31, .. })
        ));
    }

    #[test]
    fn test_first_numbers_entry() {
        let lottery = Lottery::new(58, 6).unwrap();
        let entries = EntrySet::first_numbers(&lottery);
        assert!(entries.matches(&Combination::new(vec![6, 5, 4, 3, 2, 1])));
        assert_eq!(entries.len(), 1);
    }
}
