// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::pattern::{MarkedPattern, Pattern};
use itertools::Itertools;
use std::ops::Range;

/// Finds all prime implicants of the on-set given by `terms`.
///
/// Runs pairwise merge rounds until no pattern can be generalized further,
/// then returns the surviving patterns, canonically sorted and deduplicated.
pub fn find_prime_implicants(terms: impl IntoIterator<Item = Pattern>) -> Vec<Pattern> {
    let mut table = ReductionTable::new(terms);
    table.run_to_fixpoint();
    table.into_primes()
}

/// The growing table of marked patterns, partitioned into generations.
///
/// Entries are only ever appended, so indices are stable; the subsumed flag
/// is the only mutable state. Generation 0 is the sorted, deduplicated
/// input; generation `k + 1` is exactly the set of children produced while
/// scanning generation `k`. Each slice of the table is kept sorted and
/// deduplicated incrementally, never by re-sorting the whole table.
#[derive(Clone, Debug)]
pub struct ReductionTable {
    entries: Vec<MarkedPattern>,
    generation_start: usize,
}

impl ReductionTable {
    pub fn new(terms: impl IntoIterator<Item = Pattern>) -> Self {
        let mut terms: Vec<_> = terms.into_iter().collect();
        terms.sort();
        terms.dedup();
        Self {
            entries: terms.into_iter().map(MarkedPattern::new).collect(),
            generation_start: 0,
        }
    }

    #[inline]
    pub fn entries(&self) -> &[MarkedPattern] {
        &self.entries
    }

    /// Runs merge rounds until a round produces no new patterns.
    pub fn run_to_fixpoint(&mut self) {
        while self.run_round() {}
    }

    /// Scans the current generation once, appending every merge result as
    /// the next generation. Returns whether any merge happened.
    fn run_round(&mut self) -> bool {
        // Capture the bounds before any append: children born this round
        // must only be compared in the next round.
        let generation_end = self.entries.len();
        let groups = self.group_ranges(self.generation_start..generation_end);

        // Two patterns can differ in exactly one position only if their
        // positive-literal counts differ by at most one, so only adjacent
        // groups need to be compared.
        let mut progress = false;
        for (prev, next) in groups.into_iter().tuple_windows() {
            for i in prev {
                for j in next.clone() {
                    let merged = match self.entries[i]
                        .pattern()
                        .try_merge(self.entries[j].pattern())
                    {
                        Some(merged) => merged,
                        None => continue,
                    };
                    self.entries.push(MarkedPattern::new(merged));
                    self.entries[i].mark_subsumed();
                    self.entries[j].mark_subsumed();
                    progress = true;
                }
            }
        }

        // Sort and dedup only the tail appended this round; earlier slices
        // already hold the invariant.
        let mut tail = self.entries.split_off(generation_end);
        tail.sort();
        tail.dedup();
        self.entries.extend(tail);

        self.generation_start = generation_end;
        progress
    }

    /// Contiguous runs of equal positive-literal count within `section`.
    /// The section is sorted, so equal counts are adjacent and ascending.
    fn group_ranges(&self, section: Range<usize>) -> Vec<Range<usize>> {
        let mut ranges: Vec<Range<usize>> = Vec::new();
        let mut last_count = None;
        for ix in section.clone() {
            let count = self.entries[ix].pattern().positive_literal_count();
            if last_count != Some(count) {
                if let Some(open) = ranges.last_mut() {
                    open.end = ix;
                }
                ranges.push(ix..section.end);
                last_count = Some(count);
            }
        }
        ranges
    }

    /// The surviving (never subsumed) patterns, canonically sorted and
    /// deduplicated: the prime implicants.
    pub fn into_primes(self) -> Vec<Pattern> {
        let mut primes: Vec<_> = self
            .entries
            .into_iter()
            .filter(|entry| !entry.is_subsumed())
            .map(MarkedPattern::into_pattern)
            .collect();
        primes.sort();
        primes.dedup();
        primes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(strs: &[&str]) -> Vec<Pattern> {
        strs.iter()
            .map(|s| Pattern::from_pattern_str(s).unwrap())
            .collect()
    }

    fn rendered(primes: &[Pattern]) -> Vec<String> {
        primes.iter().map(Pattern::to_string).collect()
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(find_prime_implicants(patterns(&[])).is_empty());

        let single = find_prime_implicants(patterns(&["10"]));
        assert_eq!(rendered(&single), vec!["10"]);
    }

    #[test]
    fn test_simple_merges() {
        // 00 merges with both neighbors; 01 and 10 differ in two positions
        let primes = find_prime_implicants(patterns(&["00", "01", "10"]));
        assert_eq!(rendered(&primes), vec!["-0", "0-"]);

        // chain: both merges subsume the shared middle term
        let primes = find_prime_implicants(patterns(&["00", "01", "11"]));
        assert_eq!(rendered(&primes), vec!["0-", "-1"]);
    }

    #[test]
    fn test_duplicate_terms_collapse() {
        let primes = find_prime_implicants(patterns(&["00", "00", "01"]));
        assert_eq!(rendered(&primes), vec!["0-"]);
    }

    #[test]
    fn test_full_square_reduces_to_universe() {
        let primes = find_prime_implicants(patterns(&["00", "01", "10", "11"]));
        assert_eq!(rendered(&primes), vec!["--"]);
    }

    #[test]
    fn test_cyclic_function_primes() {
        // on-set {0, 1, 2, 5, 6, 7} over three variables: the classic cyclic
        // function whose six primes each cover exactly two vertices
        let terms = patterns(&["000", "100", "010", "101", "011", "111"]);
        let primes = find_prime_implicants(terms);
        assert_eq!(
            rendered(&primes),
            vec!["-00", "0-0", "01-", "10-", "-11", "1-1"]
        );
    }

    #[test]
    fn test_generation_boundary() {
        let mut table = ReductionTable::new(patterns(&["00", "01", "10", "11"]));

        // round 1: the four minterms pair up into four one-cube children,
        // but the children are not compared against each other yet
        assert!(table.run_round());
        let after_round_1: Vec<String> = table
            .entries()
            .iter()
            .map(|e| e.pattern().to_string())
            .collect();
        assert_eq!(
            after_round_1,
            vec!["00", "01", "10", "11", "-0", "0-", "-1", "1-"]
        );
        assert!(table.entries()[..4].iter().all(|e| e.is_subsumed()));
        assert!(table.entries()[4..].iter().all(|e| !e.is_subsumed()));

        // round 2: the children merge into the universe pattern, deduped
        assert!(table.run_round());
        assert_eq!(table.entries().len(), 9);
        assert_eq!(table.entries()[8].pattern().to_string(), "--");

        // round 3: a single group, nothing left to do
        assert!(!table.run_round());

        assert_eq!(rendered(&table.into_primes()), vec!["--"]);
    }
}
