// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use camino::Utf8PathBuf;
use clap::Parser;
use color_eyre::{eyre::WrapErr, Result};
use log::{info, LevelFilter};
use qm_batch::{generate_rows, sample_table, solve_rows, SolveConfig, Table, DEFAULT_SEED};
use qm_min::{Notation, Variables};
use std::{fs::File, io::BufWriter};

/// Minimize boolean functions given as minterm or maxterm lists.
#[derive(Debug, Parser)]
#[clap(name = "qm", version)]
pub struct QmApp {
    /// Log more (-v for info, -vv for debug). RUST_LOG overrides this.
    #[clap(long, short, global = true, parse(from_occurrences))]
    verbose: u8,

    #[clap(subcommand)]
    command: QmCommand,
}

#[derive(Debug, Parser)]
pub enum QmCommand {
    /// Minimize every row of an expression table into SOP and POS columns.
    Solve {
        /// Input table: a header line, then one minterm or maxterm list per line.
        input: Utf8PathBuf,

        /// Write the results here instead of to standard output.
        #[clap(long, short)]
        output: Option<Utf8PathBuf>,

        /// Comma-separated variable names, most significant first.
        #[clap(long, default_value = "A,B,C,D")]
        variables: Variables,

        /// Operator symbols used in the output.
        #[clap(long, default_value = "symbolic", possible_values = Notation::VALUES)]
        notation: Notation,
    },
    /// Print a deterministic table of sample rows.
    Generate {
        #[clap(long, short, default_value_t = 64)]
        count: usize,

        #[clap(long, default_value = DEFAULT_SEED)]
        seed: String,

        /// Comma-separated variable names; only their number matters.
        #[clap(long, default_value = "A,B,C,D")]
        variables: Variables,
    },
}

impl QmApp {
    pub fn exec(self) -> Result<()> {
        init_logger(self.verbose);
        self.command.exec()
    }
}

impl QmCommand {
    pub fn exec(self) -> Result<()> {
        match self {
            Self::Solve {
                input,
                output,
                variables,
                notation,
            } => {
                let config = SolveConfig::new(variables, notation);
                let table = Table::read(&input)?;
                info!("solving {} rows from `{}`", table.cells().len(), input);

                let outcomes = solve_rows(table.cells(), &config)?;
                match output {
                    Some(path) => {
                        let file = File::create(&path)
                            .wrap_err_with(|| format!("failed to create `{}`", path))?;
                        table.write_results(&outcomes, BufWriter::new(file))?;
                    }
                    None => {
                        table.write_results(&outcomes, std::io::stdout().lock())?;
                    }
                }
                Ok(())
            }
            Self::Generate {
                count,
                seed,
                variables,
            } => {
                let rows = generate_rows(&seed, count, variables.count());
                print!("{}", sample_table(&rows));
                Ok(())
            }
        }
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .init();
}
