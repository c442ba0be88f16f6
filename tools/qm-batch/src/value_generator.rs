// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use proptest::{
    strategy::{Strategy, ValueTree},
    test_runner::{Config, RngAlgorithm, TestRng, TestRunner},
};
use std::hash::{Hash, Hasher};
use twox_hash::XxHash64;

/// Produces proptest values from a fixed seed, so generated rows are the same on every run.
#[derive(Debug)]
pub struct ValueGenerator {
    runner: TestRunner,
}

impl ValueGenerator {
    pub fn from_seed(seed: impl Hash) -> Self {
        // Hash the seed, then stretch the 64-bit hash to the 32 bytes ChaCha wants.
        let mut hasher = XxHash64::default();
        seed.hash(&mut hasher);
        let hash = hasher.finish().to_le_bytes();
        let mut seed_bytes = [0_u8; 32];
        for chunk in seed_bytes.chunks_mut(hash.len()) {
            chunk.copy_from_slice(&hash);
        }

        Self {
            runner: TestRunner::new_with_rng(
                Config::default(),
                TestRng::from_seed(RngAlgorithm::ChaCha, &seed_bytes),
            ),
        }
    }

    /// Forks a generator off this one. The parent advances, so successive forks differ.
    pub fn partial_clone(&mut self) -> Self {
        Self {
            runner: TestRunner::new_with_rng(self.runner.config().clone(), self.runner.new_rng()),
        }
    }

    pub fn generate<S: Strategy>(&mut self, strategy: S) -> S::Value {
        strategy
            .new_tree(&mut self.runner)
            .expect("creating a new value should succeed")
            .current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_deterministic() {
        let values = |seed: &str| {
            let mut value_gen = ValueGenerator::from_seed(seed);
            (0..8)
                .map(|_| value_gen.partial_clone().generate(any::<u64>()))
                .collect::<Vec<_>>()
        };
        assert_eq!(values("qm-min"), values("qm-min"));
        assert_ne!(values("qm-min"), values("other"));
    }
}
