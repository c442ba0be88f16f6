// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{errors::RowError, variables::MAX_VARIABLES};
use bitvec::prelude::*;

/// One assignment of all variables. The first variable is the most significant bit.
pub type Point = u32;

/// A set of points, indexed by point value.
pub type PointSet = BitVec;

/// The universe of `2^N` points together with the subset on which a function is true.
///
/// Only the true points are stored. The false points are always derived as their complement so the
/// two can never disagree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TermSet {
    variable_count: usize,
    true_points: PointSet,
}

impl TermSet {
    /// Creates a term set from the points on which the function is true.
    ///
    /// Duplicate points collapse. Panics if `variable_count` is 0 or larger than
    /// [`MAX_VARIABLES`].
    pub fn new(
        variable_count: usize,
        true_points: impl IntoIterator<Item = Point>,
    ) -> Result<Self, RowError> {
        assert!(
            (1..=MAX_VARIABLES).contains(&variable_count),
            "variable count {} must be in range 1..={}",
            variable_count,
            MAX_VARIABLES
        );
        let universe_size = 1_usize << variable_count;

        let mut bits = bitvec![0; universe_size];
        for point in true_points {
            if point as usize >= universe_size {
                return Err(RowError::OutOfRangeTerm {
                    term: point,
                    universe_size,
                });
            }
            bits.set(point as usize, true);
        }

        Ok(Self {
            variable_count,
            true_points: bits,
        })
    }

    /// Creates a term set from the points on which the function is false.
    pub fn from_false_points(
        variable_count: usize,
        false_points: impl IntoIterator<Item = Point>,
    ) -> Result<Self, RowError> {
        let complement = Self::new(variable_count, false_points)?;
        Ok(Self {
            variable_count,
            true_points: !complement.true_points,
        })
    }

    #[inline]
    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    #[inline]
    pub fn universe_size(&self) -> usize {
        self.true_points.len()
    }

    #[inline]
    pub fn true_points(&self) -> &BitSlice {
        &self.true_points
    }

    /// Returns the complement of the true points.
    pub fn false_points(&self) -> PointSet {
        !self.true_points.clone()
    }

    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        self.true_points
            .get(point as usize)
            .map(|bit| *bit)
            .unwrap_or(false)
    }

    /// Iterates over the true points in ascending order.
    pub fn true_point_iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.true_points.iter_ones().map(|ix| ix as Point)
    }

    /// Iterates over the false points in ascending order.
    pub fn false_point_iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.true_points.iter_zeros().map(|ix| ix as Point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complement() {
        let terms = TermSet::new(4, [4, 5, 8, 12, 13]).unwrap();
        assert_eq!(terms.universe_size(), 16);
        assert_eq!(
            terms.false_point_iter().collect::<Vec<_>>(),
            vec![0, 1, 2, 3, 6, 7, 9, 10, 11, 14, 15]
        );
        assert_eq!(terms.false_points().count_ones(), 11);

        let from_false =
            TermSet::from_false_points(4, [0, 1, 2, 3, 6, 7, 9, 10, 11, 14, 15]).unwrap();
        assert_eq!(from_false, terms);
        assert!(from_false.contains(12));
        assert!(!from_false.contains(14));
        assert!(!from_false.contains(99));
    }

    #[test]
    fn test_duplicates_and_range() {
        let terms = TermSet::new(3, [1, 1, 7]).unwrap();
        assert_eq!(terms.true_point_iter().collect::<Vec<_>>(), vec![1, 7]);

        assert_eq!(
            TermSet::new(3, [1, 8]),
            Err(RowError::OutOfRangeTerm {
                term: 8,
                universe_size: 8
            })
        );
        assert!(TermSet::from_false_points(2, [4]).is_err());
    }

    #[test]
    fn test_boundaries() {
        let empty = TermSet::new(4, []).unwrap();
        assert_eq!(empty.true_point_iter().count(), 0);
        assert_eq!(empty.false_points().count_ones(), 16);

        let full = TermSet::new(2, 0..4).unwrap();
        assert_eq!(full.false_point_iter().count(), 0);
    }
}
