// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    cover::{CoverMatrixDisplay, SolutionDisplay},
    pattern::{Pattern, Vertice},
};
use std::collections::BTreeSet;

use super::caches::CoverCache;

/// An ordered set of implicants covering an on-set.
///
/// Order is part of the answer contract: essential primes first, then the
/// greedily selected ones in selection order. The cover is immutable once
/// built.
#[derive(Clone, Debug, Default)]
pub struct Cover {
    patterns: Vec<Pattern>,
    cache: CoverCache,
}

impl Cover {
    pub fn new(patterns: impl IntoIterator<Item = Pattern>) -> Self {
        Self {
            patterns: patterns.into_iter().collect(),
            cache: CoverCache::default(),
        }
    }

    #[inline]
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    #[inline]
    pub fn implicant_count(&self) -> usize {
        self.patterns.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Total literal count summed over all implicants.
    #[inline]
    pub fn literal_count(&self) -> usize {
        self.cache.get_or_init_literal_count(&self.patterns)
    }

    /// True iff some implicant covers `vertice`.
    pub fn covers_vertice(&self, vertice: Vertice) -> bool {
        self.patterns.iter().any(|pattern| pattern.covers(vertice))
    }

    /// The union of the covered sets of all implicants.
    pub fn covered_vertices(&self) -> BTreeSet<Vertice> {
        self.patterns
            .iter()
            .flat_map(Pattern::covered_vertices)
            .collect()
    }

    /// Checks that two covers evaluate identically over the full vertice
    /// space of `nvars` variables, returning the first differing vertice
    /// otherwise.
    pub fn check_logically_equivalent(&self, other: &Self, nvars: usize) -> Result<(), Vertice> {
        for vertice in 0..(1usize << nvars) {
            if self.covers_vertice(vertice) != other.covers_vertice(vertice) {
                return Err(vertice);
            }
        }
        Ok(())
    }

    #[inline]
    pub fn matrix_display(&self) -> CoverMatrixDisplay<'_> {
        CoverMatrixDisplay::new(self)
    }

    #[inline]
    pub fn solution_display(&self) -> SolutionDisplay<'_> {
        SolutionDisplay::new(self)
    }
}

impl PartialEq for Cover {
    fn eq(&self, other: &Self) -> bool {
        self.patterns == other.patterns
    }
}

impl Eq for Cover {}

#[cfg(test)]
mod tests {
    use super::*;

    fn cover(strs: &[&str]) -> Cover {
        Cover::new(
            strs.iter()
                .map(|s| Pattern::from_pattern_str(s).unwrap()),
        )
    }

    #[test]
    fn test_literal_count() {
        let cover = cover(&["1-1", "01-", "-00"]);
        assert_eq!(cover.implicant_count(), 3);
        assert_eq!(cover.literal_count(), 6);

        assert_eq!(Cover::default().literal_count(), 0);
    }

    #[test]
    fn test_covered_vertices() {
        let cover = cover(&["-0", "0-"]);
        let covered: Vec<_> = cover.covered_vertices().into_iter().collect();
        assert_eq!(covered, vec![0b00, 0b01, 0b10]);
        assert!(cover.covers_vertice(0b01));
        assert!(!cover.covers_vertice(0b11));
    }

    #[test]
    fn test_check_logically_equivalent() {
        let a = cover(&["-0", "0-"]);
        let b = cover(&["00", "01", "10"]);
        assert_eq!(a.check_logically_equivalent(&b, 2), Ok(()));

        let c = cover(&["-0"]);
        assert_eq!(a.check_logically_equivalent(&c, 2), Err(0b10));
    }
}
