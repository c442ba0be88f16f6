// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Exact two-level minimization of boolean functions.
//!
//! A function over up to [`MAX_VARIABLES`](variables::MAX_VARIABLES) variables is given as a list
//! of minterms or maxterms. Prime implicants are found with the Quine-McCluskey method and a
//! minimum-cost cover is chosen from them with essential primes plus Petrick's method. The result
//! is rendered as both a sum of products and a product of sums.
//!
//! ```
//! use qm_min::{LogicFunction, Notation, TermList, Variables};
//!
//! let list: TermList = "Σ m[4, 5, 8, 12, 13]".parse().unwrap();
//! let function = LogicFunction::new(list.to_term_set(4).unwrap());
//! let (sop, _pos) = function.minimize_both().unwrap();
//! let text = sop.expression().display(&Variables::default(), Notation::Algebraic).to_string();
//! assert_eq!(text, "BC' + AC'D'");
//! ```

pub mod cover;
pub mod errors;
pub mod expression;
pub mod implicant;
pub mod logic_function;
pub mod parse;
pub mod primes;
#[cfg(any(test, feature = "proptest1"))]
mod proptest_helpers;
pub mod term_set;
pub mod variables;

pub use errors::{RowError, UnsatisfiableCover};
pub use expression::{Expression, Form, Notation};
pub use logic_function::{LogicFunction, Minimized};
pub use parse::{Direction, TermList};
pub use term_set::{Point, TermSet};
pub use variables::Variables;
