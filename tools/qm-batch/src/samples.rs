// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{table::DEFAULT_HEADER, value_generator::ValueGenerator};
use log::debug;
use proptest::prelude::*;
use qm_min::{variables::MAX_VARIABLES, TermList};

/// The seed used when none is given.
pub const DEFAULT_SEED: &str = "qm-min";

/// Generates `count` term lists over `variable_count` variables, the same ones for a given seed.
pub fn generate_rows(seed: &str, count: usize, variable_count: usize) -> Vec<TermList> {
    assert!(
        (1..=MAX_VARIABLES).contains(&variable_count),
        "variable count {} out of range",
        variable_count
    );
    let mut value_gen = ValueGenerator::from_seed(seed);

    let rows: Vec<TermList> = (0..count)
        .map(|_| {
            let mut gen = value_gen.partial_clone();
            gen.generate(any_with::<TermList>(Some(variable_count)))
        })
        .collect();
    debug!(
        "generated {} rows over {} variables from seed `{}`",
        rows.len(),
        variable_count,
        seed
    );
    rows
}

/// Renders generated rows as an input table.
pub fn sample_table(rows: &[TermList]) -> String {
    let mut out = format!("{}\n", DEFAULT_HEADER);
    for row in rows {
        out.push_str(&row.to_string());
        out.push('\n');
    }
    out
}
