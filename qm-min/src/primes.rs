// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    implicant::Implicant,
    term_set::{Point, PointSet},
};
use bitvec::prelude::*;
use itertools::Itertools;
use log::{debug, trace};
use std::collections::BTreeSet;

/// A prime implicant together with the target points it covers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeImplicant {
    implicant: Implicant,
    covered: PointSet,
}

impl PrimeImplicant {
    #[inline]
    pub fn implicant(&self) -> &Implicant {
        &self.implicant
    }

    /// The target points covered by this implicant.
    #[inline]
    pub fn covered(&self) -> &BitSlice {
        &self.covered
    }

    #[inline]
    pub fn covers(&self, point: Point) -> bool {
        self.covered[point as usize]
    }
}

/// All prime implicants of a point set, ordered by their smallest covered point.
///
/// The order is deterministic, so an index into [`elements`](Self::elements) identifies the same
/// implicant every time the same point set is processed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeImplicants {
    variable_count: usize,
    elements: Vec<PrimeImplicant>,
}

impl PrimeImplicants {
    /// Generates the prime implicants of `target` by Quine-McCluskey reduction.
    ///
    /// The work is exponential in the number of variables for dense point sets.
    pub fn generate(target: &BitSlice, variable_count: usize) -> Self {
        debug_assert_eq!(target.len(), 1 << variable_count);

        // Implicants grouped by their number of `Some(true)` literals. Only neighboring groups can
        // combine.
        let mut groups: Vec<BTreeSet<Implicant>> = vec![BTreeSet::new(); variable_count + 1];
        for point in target.iter_ones() {
            let implicant = Implicant::from_point(point as Point, variable_count);
            groups[implicant.ones()].insert(implicant);
        }

        let mut primes = BTreeSet::new();
        let mut round = 0;
        loop {
            let mut used = BTreeSet::new();
            let mut next: Vec<BTreeSet<Implicant>> = vec![BTreeSet::new(); variable_count + 1];

            for (lower, upper) in groups.iter().tuple_windows() {
                for a in lower {
                    for b in upper {
                        if let Some(combined) = a.combine(b) {
                            trace!("round {}: {:?} + {:?} -> {:?}", round, a, b, combined);
                            used.insert(a.clone());
                            used.insert(b.clone());
                            next[combined.ones()].insert(combined);
                        }
                    }
                }
            }

            primes.extend(
                groups
                    .iter()
                    .flatten()
                    .filter(|implicant| !used.contains(*implicant))
                    .cloned(),
            );

            if used.is_empty() {
                break;
            }
            groups = next;
            round += 1;
        }

        let elements: Vec<_> = primes
            .into_iter()
            .map(|implicant| {
                let mut covered = bitvec![0; target.len()];
                for point in implicant.covered_points() {
                    if target[point as usize] {
                        covered.set(point as usize, true);
                    }
                }
                PrimeImplicant {
                    implicant,
                    covered,
                }
            })
            .sorted_by(|a, b| {
                let a_key = (a.implicant.min_point(), &a.implicant);
                let b_key = (b.implicant.min_point(), &b.implicant);
                a_key.cmp(&b_key)
            })
            .collect();

        debug!(
            "{} prime implicants for {} points after {} combination rounds",
            elements.len(),
            target.count_ones(),
            round
        );

        Self {
            variable_count,
            elements,
        }
    }

    #[inline]
    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    #[inline]
    pub fn elements(&self) -> &[PrimeImplicant] {
        &self.elements
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Indexes of the prime implicants covering `point`.
    pub fn covering(&self, point: Point) -> impl Iterator<Item = usize> + '_ {
        self.elements
            .iter()
            .enumerate()
            .filter_map(move |(ix, prime)| prime.covers(point).then(|| ix))
    }
}
