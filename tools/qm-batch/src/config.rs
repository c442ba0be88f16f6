// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use qm_min::{Notation, Variables};

/// Settings shared by every row of a batch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolveConfig {
    pub variables: Variables,
    pub notation: Notation,
}

impl SolveConfig {
    pub fn new(variables: Variables, notation: Notation) -> Self {
        Self {
            variables,
            notation,
        }
    }

    #[inline]
    pub fn variable_count(&self) -> usize {
        self.variables.count()
    }
}
