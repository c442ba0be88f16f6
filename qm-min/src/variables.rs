// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::VariablesError;
use std::{collections::BTreeSet, fmt, str::FromStr};

/// The largest number of variables a function may have.
///
/// Points are stored as `u32` and implicant literals in fixed-capacity arrays of this size.
pub const MAX_VARIABLES: usize = 16;

/// The ordered display names of a function's variables.
///
/// The number of names is the variable count `N`. The first name is the most significant bit of a
/// point, so with `A, B, C, D` the point `8` is `A B' C' D'`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variables {
    names: Vec<String>,
}

impl Variables {
    pub fn new<I, S>(names: I) -> Result<Self, VariablesError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(VariablesError::Empty);
        }
        if names.len() > MAX_VARIABLES {
            return Err(VariablesError::TooMany {
                count: names.len(),
                max: MAX_VARIABLES,
            });
        }

        let mut seen = BTreeSet::new();
        for (index, name) in names.iter().enumerate() {
            if name.is_empty() {
                return Err(VariablesError::EmptyName { index });
            }
            if !seen.insert(name.as_str()) {
                return Err(VariablesError::Duplicate { name: name.clone() });
            }
        }

        Ok(Self { names })
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn name(&self, ix: usize) -> &str {
        &self.names[ix]
    }

    /// Returns true if every name is a single character, so names can be juxtaposed.
    pub fn are_single_characters(&self) -> bool {
        self.names.iter().all(|name| name.chars().count() == 1)
    }
}

impl Default for Variables {
    fn default() -> Self {
        Self {
            names: ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Parses a comma-separated list such as `A, B, C, D`.
impl FromStr for Variables {
    type Err = VariablesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(VariablesError::Empty);
        }
        Self::new(s.split(',').map(|name| name.trim()))
    }
}

impl fmt::Display for Variables {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.names.join(","))
    }
}
