// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Batch minimization of expression tables, and deterministic sample tables for exercising it.

mod config;
mod outcome;
mod samples;
mod table;
mod value_generator;

pub use config::*;
pub use outcome::*;
pub use samples::*;
pub use table::*;
pub use value_generator::*;
