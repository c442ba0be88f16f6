// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    cover::CoverMatrixDisplay,
    implicant::Implicant,
    term_set::{Point, PointSet},
};
use bitvec::prelude::*;
use itertools::Itertools;

/// A set of implicants, ordered by their smallest covered point.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Cover {
    variable_count: usize,
    elements: Vec<Implicant>,
}

impl Cover {
    /// Creates a cover, sorting and deduplicating `elements`.
    pub fn new(variable_count: usize, elements: impl IntoIterator<Item = Implicant>) -> Self {
        let elements = elements
            .into_iter()
            .inspect(|elem| {
                assert_eq!(
                    elem.variable_count(),
                    variable_count,
                    "implicant {:?} must have {} variables",
                    elem,
                    variable_count
                )
            })
            .sorted_by(|a, b| (a.min_point(), a).cmp(&(b.min_point(), b)))
            .dedup()
            .collect();
        Self {
            variable_count,
            elements,
        }
    }

    /// The cover with no implicants, which is false everywhere.
    #[inline]
    pub fn empty(variable_count: usize) -> Self {
        Self {
            variable_count,
            elements: Vec::new(),
        }
    }

    #[inline]
    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    #[inline]
    pub fn elements(&self) -> &[Implicant] {
        &self.elements
    }

    #[inline]
    pub fn cube_count(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Total number of literals over all implicants: the quantity cover selection minimizes.
    pub fn cost(&self) -> usize {
        self.elements.iter().map(|elem| elem.literal_count()).sum()
    }

    /// Returns true if some implicant covers the whole universe.
    pub fn is_tautology(&self) -> bool {
        self.elements.iter().any(|elem| elem.is_universe())
    }

    #[inline]
    pub fn contains(&self, implicant: &Implicant) -> bool {
        self.elements.contains(implicant)
    }

    /// Returns true if any implicant covers `point`.
    pub fn evaluate(&self, point: Point) -> bool {
        self.elements.iter().any(|elem| elem.covers(point))
    }

    /// The union of the points covered by every implicant.
    pub fn covered_points(&self) -> PointSet {
        let mut covered = bitvec![0; 1 << self.variable_count];
        for point in self.elements.iter().flat_map(|elem| elem.covered_points()) {
            covered.set(point as usize, true);
        }
        covered
    }

    /// Checks that this cover is true exactly on `target`, returning the first point where it
    /// differs.
    pub fn check_covers_exactly(&self, target: &BitSlice) -> Result<(), Point> {
        assert_eq!(
            target.len(),
            1 << self.variable_count,
            "target must span the universe"
        );
        let covered = self.covered_points();
        match covered.iter().zip(target.iter()).position(|(c, t)| *c != *t) {
            Some(point) => Err(point as Point),
            None => Ok(()),
        }
    }

    /// Checks that two covers agree on every point of the universe, returning the first point
    /// where they differ.
    pub fn check_logically_equivalent(&self, other: &Self) -> Result<(), Point> {
        assert_eq!(
            self.variable_count, other.variable_count,
            "covers must have the same variable count"
        );
        for point in 0..(1 << self.variable_count) {
            if self.evaluate(point) != other.evaluate(point) {
                return Err(point);
            }
        }
        Ok(())
    }

    #[inline]
    pub fn matrix_display(&self) -> CoverMatrixDisplay<'_> {
        CoverMatrixDisplay::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cover(variable_count: usize, numeric: &[&[u8]]) -> Cover {
        Cover::new(
            variable_count,
            numeric
                .iter()
                .map(|literals| Implicant::from_numeric(literals).unwrap()),
        )
    }

    #[test]
    fn test_ordering_and_cost() {
        let cover = cover(4, &[&[1, 2, 0, 0], &[2, 1, 0, 2], &[1, 2, 0, 0]]);
        assert_eq!(cover.cube_count(), 2, "duplicates are removed");
        assert_eq!(
            cover.elements()[0],
            Implicant::from_numeric(&[2, 1, 0, 2]).unwrap()
        );
        assert_eq!(cover.cost(), 5);
        assert!(!cover.is_tautology());

        assert_eq!(
            cover.covered_points().iter_ones().collect::<Vec<_>>(),
            vec![4, 5, 8, 12, 13]
        );
    }

    #[test]
    fn test_equivalence() {
        // a'b' + ab + b = a' + b
        let redundant = cover(2, &[&[0, 0], &[1, 1], &[2, 1]]);
        let minimal = cover(2, &[&[0, 2], &[2, 1]]);
        assert_eq!(redundant.check_logically_equivalent(&minimal), Ok(()));

        let different = cover(2, &[&[0, 2]]);
        assert_eq!(minimal.check_logically_equivalent(&different), Err(3));

        let mut target = bitvec![0; 4];
        target.set(0, true);
        target.set(1, true);
        assert_eq!(different.check_covers_exactly(&target), Ok(()));
        assert_eq!(minimal.check_covers_exactly(&target), Err(3));
    }

    #[test]
    fn test_boundaries() {
        let empty = Cover::empty(3);
        assert!(empty.is_empty());
        assert_eq!(empty.cost(), 0);
        assert!((0..8).all(|point| !empty.evaluate(point)));

        let universe = Cover::new(3, [Implicant::universe(3)]);
        assert!(universe.is_tautology());
        assert_eq!(universe.cost(), 0);
        assert!((0..8).all(|point| universe.evaluate(point)));
    }
}
