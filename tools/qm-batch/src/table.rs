// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::outcome::RowOutcome;
use camino::Utf8Path;
use color_eyre::{eyre::WrapErr, Result};
use std::io::Write;

/// The header used when the input has no lines at all.
pub const DEFAULT_HEADER: &str = "Expression";

/// A single-column table of expressions: a header line followed by one cell per line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    header: String,
    cells: Vec<Option<String>>,
}

impl Table {
    pub fn read(path: &Utf8Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read input table `{}`", path))?;
        Ok(Self::parse(&text))
    }

    /// Parses table text. Blank lines are missing cells.
    pub fn parse(text: &str) -> Self {
        let mut lines = text.lines();
        let header = match lines.next() {
            Some(header) if !header.trim().is_empty() => header.trim().to_owned(),
            _ => DEFAULT_HEADER.to_owned(),
        };
        let cells = lines
            .map(|line| {
                let line = line.trim();
                (!line.is_empty()).then(|| line.to_owned())
            })
            .collect();
        Self { header, cells }
    }

    #[inline]
    pub fn header(&self) -> &str {
        &self.header
    }

    #[inline]
    pub fn cells(&self) -> &[Option<String>] {
        &self.cells
    }

    /// Writes the table as tab-separated values with `SOP` and `POS` columns appended.
    pub fn write_results(
        &self,
        outcomes: &[RowOutcome],
        mut writer: impl Write,
    ) -> std::io::Result<()> {
        assert_eq!(
            self.cells.len(),
            outcomes.len(),
            "one outcome is required per cell"
        );
        writeln!(writer, "{}\tSOP\tPOS", sanitize(&self.header))?;
        for (cell, outcome) in self.cells.iter().zip(outcomes) {
            writeln!(
                writer,
                "{}\t{}\t{}",
                sanitize(cell.as_deref().unwrap_or_default()),
                outcome.sop_text(),
                outcome.pos_text()
            )?;
        }
        writer.flush()
    }
}

fn sanitize(cell: &str) -> String {
    cell.replace('\t', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::SolveConfig, outcome::solve_rows};

    #[test]
    fn test_parse() {
        let table = Table::parse("Expressions\nΣ m[1, 2]\n\n  Π M[0]  \n");
        assert_eq!(table.header(), "Expressions");
        assert_eq!(
            table.cells(),
            &[Some("Σ m[1, 2]".to_owned()), None, Some("Π M[0]".to_owned())][..]
        );

        let empty = Table::parse("");
        assert_eq!(empty.header(), DEFAULT_HEADER);
        assert!(empty.cells().is_empty());
    }

    #[test]
    fn test_write_results() {
        let table = Table::parse("Expressions\nΣ m[4, 5, 8, 12, 13]\nnot a valid expression\n\n");
        let outcomes = solve_rows(table.cells(), &SolveConfig::default()).unwrap();

        let mut out = Vec::new();
        table.write_results(&outcomes, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(
            out,
            "Expressions\tSOP\tPOS\n\
             Σ m[4, 5, 8, 12, 13]\t(B & ~C) | (A & ~C & ~D)\t(A | B) & (B | ~D) & ~C\n\
             not a valid expression\tInvalid Format\tInvalid Format\n\
             \t\t\n"
        );
    }
}
