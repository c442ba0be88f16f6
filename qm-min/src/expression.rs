// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rendering covers as sum-of-products and product-of-sums expressions.

use crate::{cover::Cover, implicant::Implicant, term_set::Point, variables::Variables};
use itertools::{Itertools, Position};
use std::{fmt, str::FromStr};

/// Which two-level form an expression takes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Form {
    /// Sum of products, built from a cover of the true points.
    Sop,
    /// Product of sums, built from a cover of the false points.
    Pos,
}

/// The operator symbols used when rendering an expression.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Notation {
    /// `(B & ~C) | (A & ~C & ~D)` and `(A | B) & (~C | D)`.
    Symbolic,
    /// `BC' + AC'D'` and `(A + B)(C' + D)`. Names longer than one character are joined with `·`.
    Algebraic,
    /// `B·¬C + A·¬C·¬D` and `(A + B)·(¬C + D)`.
    Unicode,
}

impl Notation {
    pub const VALUES: &'static [&'static str] = &["symbolic", "algebraic", "unicode"];

    /// Algebraic products juxtapose names only when every name is a single character.
    fn and(self, variables: &Variables) -> &'static str {
        match self {
            Self::Symbolic => " & ",
            Self::Algebraic if variables.are_single_characters() => "",
            Self::Algebraic | Self::Unicode => "·",
        }
    }

    fn or(self) -> &'static str {
        match self {
            Self::Symbolic => " | ",
            Self::Algebraic | Self::Unicode => " + ",
        }
    }

    fn write_literal(self, f: &mut fmt::Formatter, name: &str, positive: bool) -> fmt::Result {
        match (self, positive) {
            (_, true) => write!(f, "{}", name),
            (Self::Symbolic, false) => write!(f, "~{}", name),
            (Self::Algebraic, false) => write!(f, "{}'", name),
            (Self::Unicode, false) => write!(f, "¬{}", name),
        }
    }

    /// Whether a multi-literal group needs parentheses inside a multi-group expression.
    ///
    /// Products inside a sum bind tighter in the algebraic notations, sums inside a product never
    /// do.
    fn parenthesize(self, form: Form) -> bool {
        match form {
            Form::Pos => true,
            Form::Sop => matches!(self, Self::Symbolic),
        }
    }
}

impl Default for Notation {
    fn default() -> Self {
        Self::Symbolic
    }
}

impl FromStr for Notation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "symbolic" => Ok(Self::Symbolic),
            "algebraic" => Ok(Self::Algebraic),
            "unicode" => Ok(Self::Unicode),
            other => Err(format!(
                "unknown notation `{}` (expected one of: {})",
                other,
                Self::VALUES.join(", ")
            )),
        }
    }
}

/// A minimized two-level expression.
///
/// For [`Form::Sop`] the cover holds the true points. For [`Form::Pos`] it holds the false points,
/// and each implicant becomes a sum with its literals inverted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expression {
    form: Form,
    cover: Cover,
}

impl Expression {
    #[inline]
    pub fn new(form: Form, cover: Cover) -> Self {
        Self { form, cover }
    }

    #[inline]
    pub fn form(&self) -> Form {
        self.form
    }

    #[inline]
    pub fn cover(&self) -> &Cover {
        &self.cover
    }

    /// Evaluates the expression at `point`.
    pub fn evaluate(&self, point: Point) -> bool {
        match self.form {
            Form::Sop => self.cover.evaluate(point),
            Form::Pos => !self.cover.evaluate(point),
        }
    }

    /// Checks that two expressions have the same truth table, returning the first point where
    /// they differ.
    pub fn check_logically_equivalent(&self, other: &Expression) -> Result<(), Point> {
        assert_eq!(
            self.cover.variable_count(),
            other.cover.variable_count(),
            "expressions must have the same variable count"
        );
        for point in 0..(1 << self.cover.variable_count()) {
            if self.evaluate(point) != other.evaluate(point) {
                return Err(point);
            }
        }
        Ok(())
    }

    #[inline]
    pub fn display<'a>(
        &'a self,
        variables: &'a Variables,
        notation: Notation,
    ) -> ExpressionDisplay<'a> {
        ExpressionDisplay::new(self, variables, notation)
    }
}

pub struct ExpressionDisplay<'a> {
    expression: &'a Expression,
    variables: &'a Variables,
    notation: Notation,
}

impl<'a> ExpressionDisplay<'a> {
    pub fn new(expression: &'a Expression, variables: &'a Variables, notation: Notation) -> Self {
        assert_eq!(
            expression.cover.variable_count(),
            variables.count(),
            "expression and variables must agree on the variable count"
        );
        Self {
            expression,
            variables,
            notation,
        }
    }

    fn write_group(
        &self,
        f: &mut fmt::Formatter,
        implicant: &Implicant,
        multi: bool,
    ) -> fmt::Result {
        let form = self.expression.form;
        let (inner, positive_literal) = match form {
            Form::Sop => (self.notation.and(self.variables), true),
            Form::Pos => (self.notation.or(), false),
        };

        let parenthesize =
            multi && implicant.literal_count() > 1 && self.notation.parenthesize(form);
        if parenthesize {
            write!(f, "(")?;
        }
        let literals = implicant
            .literals()
            .iter()
            .enumerate()
            .filter_map(|(ix, literal)| literal.map(|value| (ix, value)));
        for (position, (ix, value)) in literals.with_position().map(split_position) {
            self.notation.write_literal(
                f,
                self.variables.name(ix),
                value == positive_literal,
            )?;
            if !position.is_last() {
                write!(f, "{}", inner)?;
            }
        }
        if parenthesize {
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for ExpressionDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let form = self.expression.form;
        let cover = &self.expression.cover;

        // Constants: an empty cover never holds, a universe implicant always does.
        match (form, cover.is_empty(), cover.is_tautology()) {
            (Form::Sop, true, _) | (Form::Pos, _, true) => return write!(f, "0"),
            (Form::Sop, _, true) | (Form::Pos, true, _) => return write!(f, "1"),
            _ => {}
        }

        let outer = match form {
            Form::Sop => self.notation.or(),
            Form::Pos => self.notation.and(self.variables),
        };

        let multi = cover.cube_count() > 1;
        let groups = cover.elements().iter().with_position().map(split_position);
        for (position, implicant) in groups {
            self.write_group(f, implicant, multi)?;
            if !position.is_last() {
                write!(f, "{}", outer)?;
            }
        }
        Ok(())
    }
}

#[derive(Copy, Clone)]
enum Place {
    Last,
    NotLast,
}

impl Place {
    fn is_last(self) -> bool {
        matches!(self, Self::Last)
    }
}

fn split_position<T>(position: Position<T>) -> (Place, T) {
    match position {
        Position::First(item) | Position::Middle(item) => (Place::NotLast, item),
        Position::Last(item) | Position::Only(item) => (Place::Last, item),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cover(variable_count: usize, numeric: &[&[u8]]) -> Cover {
        Cover::new(
            variable_count,
            numeric
                .iter()
                .map(|literals| Implicant::from_numeric(literals).unwrap()),
        )
    }

    fn render(expression: &Expression, notation: Notation) -> String {
        expression
            .display(&Variables::default(), notation)
            .to_string()
    }

    #[test]
    fn test_sop() {
        let sop = Expression::new(Form::Sop, cover(4, &[&[1, 2, 0, 0], &[2, 1, 0, 2]]));
        assert_eq!(render(&sop, Notation::Symbolic), "(B & ~C) | (A & ~C & ~D)");
        assert_eq!(render(&sop, Notation::Algebraic), "BC' + AC'D'");
        assert_eq!(render(&sop, Notation::Unicode), "B·¬C + A·¬C·¬D");

        let single = Expression::new(Form::Sop, cover(4, &[&[2, 1, 0, 2]]));
        assert_eq!(render(&single, Notation::Symbolic), "B & ~C");

        let mixed = Expression::new(Form::Sop, cover(4, &[&[2, 2, 2, 0], &[1, 1, 2, 2]]));
        assert_eq!(render(&mixed, Notation::Symbolic), "~D | (A & B)");
    }

    #[test]
    fn test_pos() {
        // The cover holds the false points a'b' + bc, so the product is (a + b)(b' + c').
        let pos = Expression::new(Form::Pos, cover(4, &[&[0, 0, 2, 2], &[2, 1, 1, 2]]));
        assert_eq!(render(&pos, Notation::Symbolic), "(A | B) & (~B | ~C)");
        assert_eq!(render(&pos, Notation::Algebraic), "(A + B)(B' + C')");
        assert_eq!(render(&pos, Notation::Unicode), "(A + B)·(¬B + ¬C)");

        let single = Expression::new(Form::Pos, cover(4, &[&[0, 0, 2, 2]]));
        assert_eq!(render(&single, Notation::Symbolic), "A | B");

        let mixed = Expression::new(Form::Pos, cover(4, &[&[0, 0, 2, 2], &[2, 2, 1, 2]]));
        assert_eq!(render(&mixed, Notation::Algebraic), "(A + B)C'");
    }

    #[test]
    fn test_algebraic_long_names() {
        let variables: Variables = "x1, x2, x3".parse().unwrap();
        let render = |expression: &Expression| {
            expression
                .display(&variables, Notation::Algebraic)
                .to_string()
        };

        let sop = Expression::new(Form::Sop, cover(3, &[&[1, 0, 2], &[2, 1, 1]]));
        assert_eq!(render(&sop), "x2·x3 + x1·x2'");

        let pos = Expression::new(Form::Pos, cover(3, &[&[0, 0, 2], &[2, 2, 1]]));
        assert_eq!(render(&pos), "(x1 + x2)·x3'");
    }

    #[test]
    fn test_constants() {
        let empty = Cover::empty(4);
        let universe = Cover::new(4, [Implicant::universe(4)]);

        for notation in [Notation::Symbolic, Notation::Algebraic, Notation::Unicode] {
            assert_eq!(
                render(&Expression::new(Form::Sop, empty.clone()), notation),
                "0"
            );
            assert_eq!(
                render(&Expression::new(Form::Sop, universe.clone()), notation),
                "1"
            );
            assert_eq!(
                render(&Expression::new(Form::Pos, empty.clone()), notation),
                "1"
            );
            assert_eq!(
                render(&Expression::new(Form::Pos, universe.clone()), notation),
                "0"
            );
        }
    }

    #[test]
    fn test_evaluate() {
        let sop = Expression::new(Form::Sop, cover(2, &[&[1, 2]]));
        let pos = Expression::new(Form::Pos, cover(2, &[&[0, 2]]));
        assert!(!sop.evaluate(0) && !sop.evaluate(1));
        assert!(sop.evaluate(2) && sop.evaluate(3));
        assert_eq!(sop.check_logically_equivalent(&pos), Ok(()));

        let other = Expression::new(Form::Pos, cover(2, &[&[0, 0]]));
        assert_eq!(sop.check_logically_equivalent(&other), Err(1));
    }

    #[test]
    fn test_parse_notation() {
        assert_eq!("unicode".parse::<Notation>(), Ok(Notation::Unicode));
        assert!("latex".parse::<Notation>().is_err());
        assert_eq!(Notation::default(), Notation::Symbolic);
    }
}
