// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    cover::{select_cover, Cover},
    errors::ParseError,
    pattern::{Pattern, MAX_VARS},
    primes::find_prime_implicants,
};

/// A sum-of-terms Boolean function: the on-set to minimize.
///
/// Every term has length `nvars`; terms may contain don't-cares, in which
/// case the on-set is their don't-care expansion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OnSet {
    pub nvars: usize,
    pub terms: Vec<Pattern>,
}

impl OnSet {
    pub fn new(nvars: usize, terms: Vec<Pattern>) -> Self {
        debug_assert!(terms.iter().all(|term| term.len() == nvars));
        Self { nvars, terms }
    }

    /// Parses the text form: a header of two integers (`nvars`, `nterms`)
    /// followed by exactly `nterms` whitespace-separated tokens of `nvars`
    /// characters over the `1`/`0`/`-` alphabet.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut tokens = input.split_whitespace();

        let nvars = parse_header_int(tokens.next(), "nvars")?;
        let nterms = parse_header_int(tokens.next(), "nterms")?;

        if nvars == 0 || nvars > MAX_VARS {
            return Err(ParseError::variable_count_out_of_range(nvars));
        }

        let mut terms = Vec::with_capacity(nterms);
        for term in 0..nterms {
            let token = tokens.next().ok_or(ParseError::MissingTerms {
                expected: nterms,
                found: term,
            })?;
            let found = token.chars().count();
            if found != nvars {
                return Err(ParseError::TermLength {
                    term,
                    expected: nvars,
                    found,
                });
            }
            let pattern = Pattern::from_pattern_str(token)
                .map_err(|source| ParseError::InvalidCharacter { term, source })?;
            terms.push(pattern);
        }

        if let Some(token) = tokens.next() {
            return Err(ParseError::TrailingInput {
                token: token.to_owned(),
            });
        }

        Ok(Self { nvars, terms })
    }

    /// Minimizes the on-set into a covering set of prime implicants.
    ///
    /// Deterministic: identical input always yields the identical answer
    /// set in the identical order.
    pub fn minimize(&self) -> Cover {
        let primes = find_prime_implicants(self.terms.iter().cloned());
        select_cover(primes, self.nvars)
    }
}

fn parse_header_int(token: Option<&str>, name: &'static str) -> Result<usize, ParseError> {
    let token = token.ok_or(ParseError::MissingHeader(name))?;
    token.parse().map_err(|_| ParseError::InvalidHeader {
        name,
        token: token.to_owned(),
    })
}
