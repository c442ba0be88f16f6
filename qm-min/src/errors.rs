// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::term_set::Point;
use thiserror::Error;

/// An error produced while turning one input row into a [`TermSet`](crate::term_set::TermSet).
///
/// Row errors are local to the row that produced them: batch callers turn them into placeholder
/// output and move on to the next row.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RowError {
    /// The row has neither a minterm (`m`, `Σ`) nor a maxterm (`M`, `Π`) marker.
    #[error("row has no minterm or maxterm marker")]
    InvalidFormat,

    /// A marker is present but the term list is empty, or a term could not be read.
    #[error("malformed term list{}", .token.as_ref().map(|t| format!(": cannot read term `{}`", t)).unwrap_or_default())]
    MalformedTermList { token: Option<String> },

    /// A term does not fit in the configured universe.
    #[error("term {term} is out of range for a universe of {universe_size} points")]
    OutOfRangeTerm { term: Point, universe_size: usize },
}

impl RowError {
    /// The text written in place of both the SOP and POS results for this error.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::InvalidFormat => "Invalid Format",
            Self::MalformedTermList { .. } | Self::OutOfRangeTerm { .. } => "",
        }
    }
}

/// Cover selection ran out of candidates before every target point was covered.
///
/// Every point of a target set is covered by at least one prime implicant, so this indicates a bug
/// rather than bad input.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("no prime implicant covers point {point}")]
pub struct UnsatisfiableCover {
    pub point: Point,
}

/// An invalid variable configuration.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum VariablesError {
    #[error("at least one variable is required")]
    Empty,

    #[error("{count} variables requested, but at most {max} are supported")]
    TooMany { count: usize, max: usize },

    #[error("variable {index} has an empty name")]
    EmptyName { index: usize },

    #[error("variable name `{name}` appears more than once")]
    Duplicate { name: String },
}

/// A numeric literal outside `0` (false), `1` (true) and `2` (don't care).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("invalid literal {value} at position {position} (expected 0, 1 or 2)")]
pub struct InvalidLiteralNumeric {
    pub value: u8,
    pub position: usize,
}
