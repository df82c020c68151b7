// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::InvalidPatternCharacter;
use arrayvec::ArrayVec;
use std::{cmp::Ordering, fmt};

/// Upper bound on the number of variables in a single run.
///
/// Cover selection allocates an inverse incidence table with one entry per
/// vertice, i.e. `2^nvars` entries, so the variable count is a resource
/// limit rather than a free parameter. Parsers reject larger headers up
/// front.
pub const MAX_VARS: usize = 24;

/// A fully-specified assignment of all variables; bit `i` is variable `i`.
pub type Vertice = usize;

/// A product term over `N` ternary positions: `Some(true)` is 1,
/// `Some(false)` is 0, `None` is don't-care.
///
/// Every pattern in one run has the same length `N`, the variable count.
/// Patterns are immutable once constructed.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    values: ArrayVec<Option<bool>, MAX_VARS>,
}

impl Pattern {
    /// Panics if the iterator yields more than [`MAX_VARS`] values.
    pub fn from_values(values: impl IntoIterator<Item = Option<bool>>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Parses a pattern from the `1`/`0`/`-` alphabet.
    ///
    /// Panics if `s` is longer than [`MAX_VARS`] characters; callers
    /// validate token lengths before reaching this point.
    pub fn from_pattern_str(s: &str) -> Result<Self, InvalidPatternCharacter> {
        let mut values = ArrayVec::new();
        for (position, ch) in s.chars().enumerate() {
            let value = match ch {
                '1' => Some(true),
                '0' => Some(false),
                '-' => None,
                _ => return Err(InvalidPatternCharacter { ch, position }),
            };
            values.push(value);
        }
        Ok(Self { values })
    }

    /// The fully-specified pattern whose positions spell out the bits of
    /// `vertice`.
    pub fn from_vertice(nvars: usize, vertice: Vertice) -> Self {
        Self::from_values((0..nvars).map(|i| Some((vertice >> i) & 1 == 1)))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn values(&self) -> &[Option<bool>] {
        &self.values
    }

    /// Number of positions set to 1.
    pub fn positive_literal_count(&self) -> usize {
        self.values.iter().filter(|v| **v == Some(true)).count()
    }

    /// Number of non-don't-care positions.
    pub fn literal_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    #[inline]
    pub fn dont_care_count(&self) -> usize {
        self.len() - self.literal_count()
    }

    /// True iff every non-don't-care position matches the corresponding bit
    /// of `vertice`.
    pub fn covers(&self, vertice: Vertice) -> bool {
        self.values
            .iter()
            .enumerate()
            .all(|(i, value)| match value {
                Some(bit) => *bit == ((vertice >> i) & 1 == 1),
                None => true,
            })
    }

    /// Iterates over every vertice this pattern covers, without repeats.
    ///
    /// The sequence has exactly `2^(don't-care count)` elements: the cross
    /// product of both choices at each don't-care position.
    pub fn covered_vertices(&self) -> CoveredVertices<'_> {
        CoveredVertices {
            pattern: self,
            next: 0,
            end: 1usize << self.dont_care_count(),
        }
    }

    /// Merges two equal-length patterns that differ in exactly one position
    /// into their common generalization, with that position don't-care.
    ///
    /// Returns `None` when the patterns differ in two or more positions.
    ///
    /// ```
    /// use qm_min::pattern::Pattern;
    ///
    /// let a = Pattern::from_pattern_str("100-").unwrap();
    /// let b = Pattern::from_pattern_str("110-").unwrap();
    /// assert_eq!(a.try_merge(&b).unwrap().to_string(), "1-0-");
    ///
    /// let c = Pattern::from_pattern_str("011-").unwrap();
    /// assert_eq!(a.try_merge(&c), None);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `self` and `other` are structurally identical. The
    /// generation table is deduplicated every round, so an identical pair
    /// here means a broken precondition upstream.
    pub fn try_merge(&self, other: &Self) -> Option<Self> {
        debug_assert_eq!(self.len(), other.len());

        let mut diff_index = None;
        for (i, (a, b)) in self.values.iter().zip(&other.values).enumerate() {
            if a != b {
                if diff_index.is_some() {
                    return None;
                }
                diff_index = Some(i);
            }
        }

        let diff_index = diff_index
            .unwrap_or_else(|| panic!("merge attempted on identical patterns: {}", self));
        let mut values = self.values.clone();
        values[diff_index] = None;
        Some(Self { values })
    }
}

/// Canonical order: positive-literal count first, then the value sequence
/// lexicographically (`None < Some(false) < Some(true)`). Total and
/// deterministic; the generation table's group partition relies on it.
impl Ord for Pattern {
    fn cmp(&self, other: &Self) -> Ordering {
        self.positive_literal_count()
            .cmp(&other.positive_literal_count())
            .then_with(|| self.values.cmp(&other.values))
    }
}

impl PartialOrd for Pattern {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for value in &self.values {
            let ch = match value {
                Some(true) => '1',
                Some(false) => '0',
                None => '-',
            };
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Pattern({}, {})", self.positive_literal_count(), self)
    }
}

/// Finite, restartable iterator over the vertices covered by a pattern.
///
/// Counts an index through `0..2^(don't-care count)` and scatters its bits
/// into the don't-care positions.
#[derive(Clone, Debug)]
pub struct CoveredVertices<'a> {
    pattern: &'a Pattern,
    next: usize,
    end: usize,
}

impl Iterator for CoveredVertices<'_> {
    type Item = Vertice;

    fn next(&mut self) -> Option<Vertice> {
        if self.next == self.end {
            return None;
        }
        let choice = self.next;
        self.next += 1;

        let mut vertice = 0;
        let mut free_bit = 0;
        for (i, value) in self.pattern.values().iter().enumerate() {
            let bit = match value {
                Some(bit) => *bit,
                None => {
                    let bit = (choice >> free_bit) & 1 == 1;
                    free_bit += 1;
                    bit
                }
            };
            if bit {
                vertice |= 1 << i;
            }
        }
        Some(vertice)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CoveredVertices<'_> {}

/// A [`Pattern`] plus the subsumption flag driven by the generation engine.
///
/// The flag starts false and is set exactly when the pattern merges with
/// another into a more general one. Nothing else is ever mutated.
#[derive(Clone)]
pub struct MarkedPattern {
    pattern: Pattern,
    subsumed: bool,
}

impl MarkedPattern {
    pub fn new(pattern: Pattern) -> Self {
        Self {
            pattern,
            subsumed: false,
        }
    }

    #[inline]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    #[inline]
    pub fn is_subsumed(&self) -> bool {
        self.subsumed
    }

    #[inline]
    pub fn mark_subsumed(&mut self) {
        self.subsumed = true;
    }

    #[inline]
    pub fn into_pattern(self) -> Pattern {
        self.pattern
    }
}

// Comparisons look only at the contained pattern; the flag is table
// bookkeeping and must not affect sorting or dedup.
impl PartialEq for MarkedPattern {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for MarkedPattern {}

impl Ord for MarkedPattern {
    fn cmp(&self, other: &Self) -> Ordering {
        self.pattern.cmp(&other.pattern)
    }
}

impl PartialOrd for MarkedPattern {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for MarkedPattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let flag = if self.subsumed { '_' } else { 'O' };
        write!(f, "MarkedPattern({}, {:?})", flag, self.pattern)
    }
}
