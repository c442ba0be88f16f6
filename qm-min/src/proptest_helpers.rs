// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    parse::{Direction, TermList},
    term_set::{Point, TermSet},
    variables::MAX_VARIABLES,
};
use proptest::prelude::*;

impl Arbitrary for TermSet {
    /// The variable count, 4 if unspecified.
    type Parameters = Option<usize>;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(variable_count: Self::Parameters) -> Self::Strategy {
        let variable_count = variable_count.unwrap_or(4);
        assert!(
            (1..=MAX_VARIABLES).contains(&variable_count),
            "variable count {} out of range",
            variable_count
        );
        // One coin flip per point.
        prop::collection::vec(any::<bool>(), 1 << variable_count)
            .prop_map(move |bits| {
                let true_points = bits
                    .into_iter()
                    .enumerate()
                    .filter_map(|(point, value)| value.then(|| point as Point));
                TermSet::new(variable_count, true_points).expect("points are in range")
            })
            .boxed()
    }
}

impl Arbitrary for Direction {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![Just(Direction::Minterms), Just(Direction::Maxterms)].boxed()
    }
}

impl Arbitrary for TermList {
    /// The variable count, 4 if unspecified. Terms always fall inside the universe.
    type Parameters = Option<usize>;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(variable_count: Self::Parameters) -> Self::Strategy {
        let universe_size = 1_usize << variable_count.unwrap_or(4);
        let terms = prop::collection::btree_set(0..universe_size as Point, 1..=universe_size);
        (any::<Direction>(), terms)
            .prop_map(|(direction, terms)| TermList::new(direction, terms))
            .boxed()
    }
}

/// Draws `count` term sets from a fixed-seed runner: the same sets on every run.
#[cfg(test)]
pub(crate) fn deterministic_term_sets(variable_count: usize, count: usize) -> Vec<TermSet> {
    use proptest::{strategy::ValueTree, test_runner::TestRunner};

    let mut runner = TestRunner::deterministic();
    (0..count)
        .map(|_| {
            any_with::<TermSet>(Some(variable_count))
                .new_tree(&mut runner)
                .expect("term set strategy never rejects")
                .current()
        })
        .collect()
}
