// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{errors::InvalidLiteralNumeric, term_set::Point, variables::MAX_VARIABLES};
use arrayvec::ArrayVec;
use std::{borrow::Cow, fmt};

/// A partial assignment of the variables: a product term.
///
/// Each literal is `Some(true)` (the variable must be 1), `Some(false)` (it must be 0) or `None`
/// (don't care). Literal `i` belongs to variable `i`, which is bit `N - 1 - i` of a point.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Implicant {
    literals: ArrayVec<Option<bool>, MAX_VARIABLES>,
}

impl Implicant {
    /// Returns the fully specified implicant covering exactly `point`.
    pub fn from_point(point: Point, variable_count: usize) -> Self {
        assert!(
            variable_count <= MAX_VARIABLES,
            "variable count {} must be at most {}",
            variable_count,
            MAX_VARIABLES
        );
        let literals = (0..variable_count)
            .map(|ix| Some((point >> (variable_count - 1 - ix)) & 1 == 1))
            .collect();
        Self { literals }
    }

    /// Returns the implicant with every literal eliminated, covering the whole universe.
    pub fn universe(variable_count: usize) -> Self {
        assert!(
            variable_count <= MAX_VARIABLES,
            "variable count {} must be at most {}",
            variable_count,
            MAX_VARIABLES
        );
        Self {
            literals: (0..variable_count).map(|_| None).collect(),
        }
    }

    /// Builds an implicant from `0` (false), `1` (true) and `2` (don't care) values.
    pub fn from_numeric(numeric: &[u8]) -> Result<Self, InvalidLiteralNumeric> {
        assert!(
            numeric.len() <= MAX_VARIABLES,
            "{} literals given, but at most {} are supported",
            numeric.len(),
            MAX_VARIABLES
        );
        let literals = numeric
            .iter()
            .enumerate()
            .map(|(position, &value)| match value {
                0 => Ok(Some(false)),
                1 => Ok(Some(true)),
                2 => Ok(None),
                _ => Err(InvalidLiteralNumeric { value, position }),
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { literals })
    }

    #[inline]
    pub fn variable_count(&self) -> usize {
        self.literals.len()
    }

    #[inline]
    pub fn literals(&self) -> &[Option<bool>] {
        &self.literals
    }

    /// The number of specified literals. This is the cost of the implicant in a cover.
    #[inline]
    pub fn literal_count(&self) -> usize {
        self.literals.iter().filter(|l| l.is_some()).count()
    }

    /// The number of literals that are `Some(true)`. Used to group implicants for combination.
    #[inline]
    pub fn ones(&self) -> usize {
        self.literals.iter().filter(|l| **l == Some(true)).count()
    }

    #[inline]
    pub fn is_universe(&self) -> bool {
        self.literals.iter().all(|l| l.is_none())
    }

    /// Combines two implicants that have their don't cares in the same positions and disagree in
    /// exactly one specified literal. The disagreeing literal becomes a don't care.
    pub fn combine(&self, other: &Implicant) -> Option<Implicant> {
        debug_assert_eq!(self.variable_count(), other.variable_count());

        let mut differing = None;
        for (ix, (&c, &d)) in self.literals.iter().zip(&other.literals).enumerate() {
            match (c, d) {
                (Some(c), Some(d)) if c != d => {
                    if differing.is_some() {
                        return None;
                    }
                    differing = Some(ix);
                }
                (Some(_), None) | (None, Some(_)) => return None,
                _ => {}
            }
        }

        differing.map(|ix| {
            let mut literals = self.literals.clone();
            literals[ix] = None;
            Implicant { literals }
        })
    }

    /// Returns true if `point` is consistent with every specified literal.
    pub fn covers(&self, point: Point) -> bool {
        let n = self.variable_count();
        self.literals.iter().enumerate().all(|(ix, l)| match l {
            Some(value) => ((point >> (n - 1 - ix)) & 1 == 1) == *value,
            None => true,
        })
    }

    /// Returns true if every point covered by `other` is covered by `self`.
    pub fn contains(&self, other: &Implicant) -> bool {
        self.literals
            .iter()
            .zip(&other.literals)
            .all(|(&c, &d)| c.is_none() || c == d)
    }

    /// The smallest covered point: don't cares resolved to 0.
    pub fn min_point(&self) -> Point {
        self.literals
            .iter()
            .fold(0, |acc, l| (acc << 1) | Point::from(*l == Some(true)))
    }

    /// Iterates over every covered point in ascending order.
    pub fn covered_points(&self) -> impl Iterator<Item = Point> + '_ {
        let n = self.variable_count();
        let free_bits: ArrayVec<Point, MAX_VARIABLES> = self
            .literals
            .iter()
            .enumerate()
            .rev()
            .filter_map(|(ix, l)| l.is_none().then(|| 1 << (n - 1 - ix)))
            .collect();
        let base = self.min_point();

        (0..(1_u32 << free_bits.len())).map(move |combination| {
            free_bits
                .iter()
                .enumerate()
                .filter(|(bit, _)| (combination >> bit) & 1 == 1)
                .fold(base, |acc, (_, free)| acc | free)
        })
    }

    #[inline]
    pub fn matrix_display(&self) -> ImplicantMatrixDisplay<'_> {
        ImplicantMatrixDisplay::new(self)
    }
}

impl fmt::Debug for Implicant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Implicant")
            .field(&format_args!("{}", self.matrix_display()))
            .finish()
    }
}

pub struct ImplicantMatrixDisplay<'a> {
    implicant: &'a Implicant,
    format: MatrixDisplayFormat,
    separator: Cow<'a, str>,
}

impl<'a> ImplicantMatrixDisplay<'a> {
    pub fn new(implicant: &'a Implicant) -> Self {
        Self {
            implicant,
            format: MatrixDisplayFormat::default(),
            separator: Cow::Borrowed(""),
        }
    }

    pub fn with_format(mut self, format: MatrixDisplayFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<Cow<'a, str>>) -> Self {
        self.separator = separator.into();
        self
    }
}

impl<'a> fmt::Display for ImplicantMatrixDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let len = self.implicant.variable_count();
        for (ix, &literal) in self.implicant.literals.iter().enumerate() {
            write!(f, "{}", self.format.char_for_literal(literal))?;
            if ix + 1 < len {
                write!(f, "{}", self.separator)?;
            }
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug)]
pub enum MatrixDisplayFormat {
    /// Display an implicant as `10-1`, with dashes for don't cares.
    Dashes,

    /// Display an implicant as `1021`, with `2` for don't cares.
    Numeric,
}

impl MatrixDisplayFormat {
    /// Returns the character that would be displayed for a literal.
    pub fn char_for_literal(self, literal: Option<bool>) -> char {
        match literal {
            Some(true) => '1',
            Some(false) => '0',
            None => match self {
                Self::Dashes => '-',
                Self::Numeric => '2',
            },
        }
    }
}

impl Default for MatrixDisplayFormat {
    fn default() -> Self {
        Self::Dashes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_point() {
        let implicant = Implicant::from_point(0b1100, 4);
        assert_eq!(implicant, Implicant::from_numeric(&[1, 1, 0, 0]).unwrap());
        assert_eq!(implicant.ones(), 2);
        assert_eq!(implicant.literal_count(), 4);
        assert_eq!(implicant.min_point(), 12);
        assert_eq!(implicant.covered_points().collect::<Vec<_>>(), vec![12]);
    }

    #[test]
    fn test_from_numeric_invalid() {
        assert_eq!(
            Implicant::from_numeric(&[0, 1, 3]),
            Err(InvalidLiteralNumeric {
                value: 3,
                position: 2
            })
        );
    }

    #[test]
    fn test_combine() {
        let a = Implicant::from_numeric(&[0, 1, 0, 0]).unwrap();
        let b = Implicant::from_numeric(&[0, 1, 0, 1]).unwrap();
        let ab = a.combine(&b).expect("differ in one position");
        assert_eq!(ab, Implicant::from_numeric(&[0, 1, 0, 2]).unwrap());

        // Two differences.
        let c = Implicant::from_numeric(&[1, 1, 0, 1]).unwrap();
        assert_eq!(a.combine(&c), None);

        // Don't cares must line up.
        let d = Implicant::from_numeric(&[1, 1, 0, 2]).unwrap();
        assert_eq!(
            ab.combine(&d),
            Some(Implicant::from_numeric(&[2, 1, 0, 2]).unwrap())
        );
        assert_eq!(ab.combine(&c), None);

        // Identical implicants do not combine.
        assert_eq!(a.combine(&a), None);
    }

    #[test]
    fn test_covered_points() {
        let implicant = Implicant::from_numeric(&[2, 1, 0, 2]).unwrap();
        assert_eq!(implicant.min_point(), 4);
        assert_eq!(
            implicant.covered_points().collect::<Vec<_>>(),
            vec![4, 5, 12, 13]
        );
        for point in 0..16 {
            assert_eq!(
                implicant.covers(point),
                [4, 5, 12, 13].contains(&point),
                "point {}",
                point
            );
        }

        let universe = Implicant::universe(3);
        assert!(universe.is_universe());
        assert_eq!(universe.literal_count(), 0);
        assert_eq!(universe.covered_points().count(), 8);
    }

    #[test]
    fn test_contains() {
        let wide = Implicant::from_numeric(&[2, 1, 0, 2]).unwrap();
        let narrow = Implicant::from_numeric(&[1, 1, 0, 2]).unwrap();
        assert!(wide.contains(&narrow));
        assert!(!narrow.contains(&wide));
    }

    #[test]
    fn test_display() {
        let implicant = Implicant::from_numeric(&[1, 2, 0, 0]).unwrap();
        assert_eq!(implicant.matrix_display().to_string(), "1-00");
        assert_eq!(
            implicant
                .matrix_display()
                .with_format(MatrixDisplayFormat::Numeric)
                .with_separator(" ")
                .to_string(),
            "1 2 0 0"
        );
        assert_eq!(format!("{:?}", implicant), "Implicant(1-00)");
    }
}
