// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::config::SolveConfig;
use log::{debug, info};
use qm_min::{LogicFunction, RowError, TermList, UnsatisfiableCover};
use rayon::prelude::*;

/// What became of a single input row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowOutcome {
    /// Both forms were minimized.
    Solved { sop: String, pos: String },
    /// The row could not be read as a term list.
    Invalid(RowError),
    /// The cell was blank or absent.
    Missing,
}

impl RowOutcome {
    /// Solves one cell. Row errors become [`RowOutcome::Invalid`]; only a cover selection failure
    /// is returned as an error.
    pub fn solve(cell: Option<&str>, config: &SolveConfig) -> Result<Self, UnsatisfiableCover> {
        let cell = match cell.map(str::trim) {
            Some(cell) if !cell.is_empty() => cell,
            _ => return Ok(Self::Missing),
        };

        let terms = match cell
            .parse::<TermList>()
            .and_then(|list| list.to_term_set(config.variable_count()))
        {
            Ok(terms) => terms,
            Err(error) => {
                debug!("row `{}`: {}", cell, error);
                return Ok(Self::Invalid(error));
            }
        };

        let (sop, pos) = LogicFunction::new(terms).minimize_both()?;
        let render = |minimized: &qm_min::Minimized| {
            minimized
                .expression()
                .display(&config.variables, config.notation)
                .to_string()
        };
        Ok(Self::Solved {
            sop: render(&sop),
            pos: render(&pos),
        })
    }

    pub fn sop_text(&self) -> &str {
        match self {
            Self::Solved { sop, .. } => sop,
            Self::Invalid(error) => error.placeholder(),
            Self::Missing => "",
        }
    }

    pub fn pos_text(&self) -> &str {
        match self {
            Self::Solved { pos, .. } => pos,
            Self::Invalid(error) => error.placeholder(),
            Self::Missing => "",
        }
    }
}

/// Solves every cell in parallel. Outcomes are returned in input order.
pub fn solve_rows(
    cells: &[Option<String>],
    config: &SolveConfig,
) -> Result<Vec<RowOutcome>, UnsatisfiableCover> {
    let outcomes = cells
        .par_iter()
        .map(|cell| RowOutcome::solve(cell.as_deref(), config))
        .collect::<Result<Vec<_>, _>>()?;

    let summary = BatchSummary::new(&outcomes);
    info!(
        "{} rows: {} solved, {} invalid, {} missing",
        outcomes.len(),
        summary.solved,
        summary.invalid,
        summary.missing
    );
    Ok(outcomes)
}

/// Row counts by outcome.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub solved: usize,
    pub invalid: usize,
    pub missing: usize,
}

impl BatchSummary {
    pub fn new<'a>(outcomes: impl IntoIterator<Item = &'a RowOutcome>) -> Self {
        let mut summary = Self::default();
        for outcome in outcomes {
            match outcome {
                RowOutcome::Solved { .. } => summary.solved += 1,
                RowOutcome::Invalid(_) => summary.invalid += 1,
                RowOutcome::Missing => summary.missing += 1,
            }
        }
        summary
    }
}
