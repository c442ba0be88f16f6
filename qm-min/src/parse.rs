// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reading minterm and maxterm lists such as `Σ m[4, 5, 8, 12, 13]` or `Π M[0,1,2,3]`.

use crate::{
    errors::RowError,
    term_set::{Point, TermSet},
};
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use std::{fmt, str::FromStr};

static TERM_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new("[0-9]+").expect("term token pattern is valid"));

/// Whether a term list names the true points or the false points of a function.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Minterms, marked by `m` or `Σ`.
    Minterms,
    /// Maxterms, marked by `M` or `Π`.
    Maxterms,
}

impl Direction {
    /// Finds the direction marker in a row. A minterm marker wins if both are present.
    pub fn detect(row: &str) -> Option<Self> {
        if row.contains(|c| matches!(c, 'm' | 'Σ' | '∑')) {
            Some(Self::Minterms)
        } else if row.contains(|c| matches!(c, 'M' | 'Π' | '∏')) {
            Some(Self::Maxterms)
        } else {
            None
        }
    }
}

/// A parsed row: a direction and the terms listed, in input order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TermList {
    pub direction: Direction,
    pub terms: Vec<Point>,
}

impl TermList {
    pub fn new(direction: Direction, terms: impl IntoIterator<Item = Point>) -> Self {
        Self {
            direction,
            terms: terms.into_iter().collect(),
        }
    }

    /// Builds the term set over `variable_count` variables. Maxterms are complemented.
    pub fn to_term_set(&self, variable_count: usize) -> Result<TermSet, RowError> {
        let terms = self.terms.iter().copied();
        match self.direction {
            Direction::Minterms => TermSet::new(variable_count, terms),
            Direction::Maxterms => TermSet::from_false_points(variable_count, terms),
        }
    }
}

impl FromStr for TermList {
    type Err = RowError;

    fn from_str(row: &str) -> Result<Self, Self::Err> {
        let direction = Direction::detect(row).ok_or(RowError::InvalidFormat)?;

        let terms = TERM_TOKEN
            .find_iter(row)
            .map(|token| {
                token
                    .as_str()
                    .parse::<Point>()
                    .map_err(|_| RowError::MalformedTermList {
                        token: Some(token.as_str().to_owned()),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if terms.is_empty() {
            return Err(RowError::MalformedTermList { token: None });
        }

        Ok(Self { direction, terms })
    }
}

/// Writes the list back in the conventional `Σ m[...]` / `Π M[...]` form.
impl fmt::Display for TermList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let marker = match self.direction {
            Direction::Minterms => "Σ m",
            Direction::Maxterms => "Π M",
        };
        write!(f, "{}[{}]", marker, self.terms.iter().join(", "))
    }
}
