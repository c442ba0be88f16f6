// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    cover::{Cover, CoverSelection},
    errors::UnsatisfiableCover,
    expression::{Expression, Form},
    implicant::Implicant,
    primes::PrimeImplicants,
    term_set::{PointSet, TermSet},
};
use log::debug;

/// A completely specified single-output boolean function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogicFunction {
    terms: TermSet,
}

impl LogicFunction {
    #[inline]
    pub fn new(terms: TermSet) -> Self {
        Self { terms }
    }

    #[inline]
    pub fn terms(&self) -> &TermSet {
        &self.terms
    }

    /// The points a cover of the given form must cover: the true points for a sum of products,
    /// the false points for a product of sums.
    pub fn target(&self, form: Form) -> PointSet {
        match form {
            Form::Sop => self.terms.true_points().to_bitvec(),
            Form::Pos => self.terms.false_points(),
        }
    }

    /// Minimizes the function into the given form.
    pub fn minimize(&self, form: Form) -> Result<Minimized, UnsatisfiableCover> {
        let target = self.target(form);
        let variable_count = self.terms.variable_count();

        let primes = PrimeImplicants::generate(&target, variable_count);
        let selection = CoverSelection::select(&primes, &target)?;
        debug!(
            "{:?}: {} primes, cover {:?} with cost {}",
            form,
            primes.len(),
            selection.cover(),
            selection.cover().cost()
        );

        Ok(Minimized {
            prime_count: primes.len(),
            essentials: selection.essentials().to_vec(),
            expression: Expression::new(form, selection.into_cover()),
        })
    }

    /// Minimizes the function into both forms, the sum of products first.
    pub fn minimize_both(&self) -> Result<(Minimized, Minimized), UnsatisfiableCover> {
        Ok((self.minimize(Form::Sop)?, self.minimize(Form::Pos)?))
    }
}

/// One minimized form of a function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Minimized {
    expression: Expression,
    essentials: Vec<Implicant>,
    prime_count: usize,
}

impl Minimized {
    #[inline]
    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    #[inline]
    pub fn cover(&self) -> &Cover {
        self.expression.cover()
    }

    #[inline]
    pub fn essentials(&self) -> &[Implicant] {
        &self.essentials
    }

    /// The number of prime implicants the cover was chosen from.
    #[inline]
    pub fn prime_count(&self) -> usize {
        self.prime_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        expression::Notation, proptest_helpers::deterministic_term_sets, variables::Variables,
    };
    use proptest::prelude::*;

    fn minimize(terms: TermSet) -> (Minimized, Minimized) {
        LogicFunction::new(terms)
            .minimize_both()
            .expect("primes cover every point")
    }

    #[test]
    fn test_four_variable_row() {
        let terms = TermSet::new(4, [4, 5, 8, 12, 13]).unwrap();
        let (sop, pos) = minimize(terms.clone());
        let variables = Variables::default();

        assert_eq!(
            sop.expression()
                .display(&variables, Notation::Unicode)
                .to_string(),
            "B·¬C + A·¬C·¬D"
        );
        assert_eq!(sop.prime_count(), 2);
        assert_eq!(sop.essentials().len(), 2);
        assert_eq!(
            sop.expression().check_logically_equivalent(pos.expression()),
            Ok(())
        );
        for point in 0..16 {
            assert_eq!(pos.expression().evaluate(point), terms.contains(point));
        }

        // The false points are covered by the essentials a'b', b'd and c.
        assert_eq!(pos.essentials().len(), 3);
        assert_eq!(
            pos.expression()
                .display(&variables, Notation::Symbolic)
                .to_string(),
            "(A | B) & (B | ~D) & ~C"
        );
    }

    #[test]
    fn test_boundaries() {
        let variables = Variables::default();
        let render = |minimized: &Minimized| {
            minimized
                .expression()
                .display(&variables, Notation::Symbolic)
                .to_string()
        };

        let (sop, pos) = minimize(TermSet::new(4, []).unwrap());
        assert_eq!(render(&sop), "0");
        assert_eq!(render(&pos), "0");

        let (sop, pos) = minimize(TermSet::new(4, 0..16).unwrap());
        assert_eq!(render(&sop), "1");
        assert_eq!(render(&pos), "1");
    }

    #[test]
    fn test_seven_variables() {
        for terms in deterministic_term_sets(7, 4) {
            let (sop, pos) = minimize(terms.clone());
            assert_eq!(
                sop.cover().check_covers_exactly(terms.true_points()),
                Ok(())
            );
            assert_eq!(
                pos.cover().check_covers_exactly(&terms.false_points()),
                Ok(())
            );
            assert_eq!(
                sop.expression().check_logically_equivalent(pos.expression()),
                Ok(())
            );
        }
    }

    proptest! {
        #[test]
        fn proptest_sop_covers_exactly(terms in any_with::<TermSet>(Some(4))) {
            let (sop, _) = minimize(terms.clone());
            for point in 0..16 {
                prop_assert_eq!(sop.expression().evaluate(point), terms.contains(point));
            }
        }

        #[test]
        fn proptest_sop_pos_duality(terms in any_with::<TermSet>(Some(4))) {
            let (sop, pos) = minimize(terms);
            prop_assert_eq!(sop.expression().check_logically_equivalent(pos.expression()), Ok(()));
        }

        #[test]
        fn proptest_essentials_in_cover(terms in any_with::<TermSet>(Some(4))) {
            let (sop, pos) = minimize(terms);
            for minimized in [&sop, &pos] {
                for essential in minimized.essentials() {
                    prop_assert!(minimized.cover().contains(essential));
                }
            }
        }

        #[test]
        fn proptest_idempotent(terms in any_with::<TermSet>(Some(4))) {
            let (sop, _) = minimize(terms);
            let covered = sop.cover().covered_points();
            let again = TermSet::new(4, covered.iter_ones().map(|ix| ix as u32)).unwrap();
            let (sop_again, _) = minimize(again);
            prop_assert_eq!(sop_again.cover().check_logically_equivalent(sop.cover()), Ok(()));
            prop_assert_eq!(sop_again.cover().cost(), sop.cover().cost());
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn proptest_six_variables(terms in any_with::<TermSet>(Some(6))) {
            let (sop, pos) = minimize(terms.clone());
            prop_assert_eq!(sop.cover().check_covers_exactly(terms.true_points()), Ok(()));
            prop_assert_eq!(sop.expression().check_logically_equivalent(pos.expression()), Ok(()));
        }
    }
}
