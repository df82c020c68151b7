// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    cover::Cover,
    pattern::{Pattern, Vertice},
};
use bitvec::vec::BitVec;
use std::collections::BTreeSet;

/// Reduces a set of prime implicants to a covering subset.
///
/// Essential primes (the unique coverer of some vertice) are extracted in a
/// single pass, then the rest of the coverage is filled greedily: each step
/// picks the unused prime with the highest ratio of still-uncovered vertices
/// to literal count. Ties go to the later-indexed prime, so the input order
/// of `primes` is observable in the answer.
///
/// # Panics
///
/// Panics if vertices remain uncovered while no candidate is left; the
/// prime set produced by generation always covers the full on-set, so this
/// indicates a defect upstream.
pub fn select_cover(primes: Vec<Pattern>, nvars: usize) -> Cover {
    let incidence = Incidence::new(&primes, nvars);

    // Essential extraction: a vertice with exactly one coverer names an
    // essential prime. Single pass, not iterated.
    let essential_ixs: BTreeSet<usize> = incidence
        .vertice_to_primes
        .iter()
        .filter_map(|coverers| match coverers.len() {
            1 => coverers.iter().next().copied(),
            _ => None,
        })
        .collect();

    let mut answer: Vec<Pattern> = Vec::new();
    let mut remaining: Vec<Pattern> = Vec::new();
    for (ix, prime) in primes.into_iter().enumerate() {
        if essential_ixs.contains(&ix) {
            answer.push(prime);
        } else {
            remaining.push(prime);
        }
    }

    // Rebuild incidence over the remaining primes only. The uncovered set is
    // the union of their covered sets: vertices covered solely by essential
    // primes drop out here.
    let incidence = Incidence::new(&remaining, nvars);
    let mut prime_to_vertices = incidence.prime_to_vertices;
    let vertice_to_primes = incidence.vertice_to_primes;

    let mut uncovered: BitVec = BitVec::repeat(false, 1usize << nvars);
    for covered in &prime_to_vertices {
        for &vertice in covered {
            uncovered.set(vertice, true);
        }
    }

    // Greedy weighted set cover over the remaining primes.
    let mut used = vec![false; remaining.len()];
    while uncovered.any() {
        let mut best: Option<(usize, f32)> = None;
        for (ix, covered) in prime_to_vertices.iter().enumerate() {
            if used[ix] {
                continue;
            }
            let score = covered.len() as f32 / remaining[ix].literal_count() as f32;
            // >= so that a later candidate wins ties against an earlier one
            if best.map_or(true, |(_, best_score)| score >= best_score) {
                best = Some((ix, score));
            }
        }

        let (best_ix, _) = best.unwrap_or_else(|| {
            panic!("vertices remain uncovered but no candidate prime is left")
        });
        used[best_ix] = true;

        // Remove the newly covered vertices from the uncovered set and from
        // every other prime's covered set.
        let covered = std::mem::take(&mut prime_to_vertices[best_ix]);
        for &vertice in &covered {
            uncovered.set(vertice, false);
            for &other in &vertice_to_primes[vertice] {
                if other != best_ix {
                    prime_to_vertices[other].remove(&vertice);
                }
            }
        }

        answer.push(remaining[best_ix].clone());
    }

    Cover::new(answer)
}

/// Incidence between primes and the vertices they cover, kept as two
/// mirrored adjacency maps. `vertice_to_primes` has one entry per vertice
/// of the `2^nvars` space.
struct Incidence {
    prime_to_vertices: Vec<BTreeSet<Vertice>>,
    vertice_to_primes: Vec<BTreeSet<usize>>,
}

impl Incidence {
    fn new(primes: &[Pattern], nvars: usize) -> Self {
        let mut prime_to_vertices = vec![BTreeSet::new(); primes.len()];
        let mut vertice_to_primes = vec![BTreeSet::new(); 1usize << nvars];

        for (ix, prime) in primes.iter().enumerate() {
            for vertice in prime.covered_vertices() {
                prime_to_vertices[ix].insert(vertice);
                vertice_to_primes[vertice].insert(ix);
            }
        }

        Self {
            prime_to_vertices,
            vertice_to_primes,
        }
    }
}
