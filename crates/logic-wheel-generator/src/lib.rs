//! Puzzle generation for the Logic Wheel module.
//!
//! Generation is plain rejection sampling: four distinct values are drawn
//! from 0-30, the gate is applied to the first two, and the draw is kept only
//! if all five values are distinct and none of them is 0 or 31. Any accepted
//! draw satisfies the [`Puzzle`] invariant by construction.
//!
//! The loop has no attempt cap unless one is configured with
//! [`PuzzleGenerator::with_max_attempts`]. In practice it terminates after a
//! handful of draws; the exact rate depends on the gate (see the
//! `generate_puzzle` example for measured attempt counts).
//!
//! # Examples
//!
//! ```
//! use logic_wheel_core::Gate;
//! use logic_wheel_generator::{PuzzleGenerator, PuzzleSeed};
//!
//! let generator = PuzzleGenerator::new();
//! let seed = PuzzleSeed::from_phrase("example");
//! let generated = generator.generate_with_seed(Gate::Xor, seed).unwrap();
//!
//! let puzzle = generated.puzzle;
//! let (a, b) = puzzle.displayed_pair();
//! assert_eq!(puzzle.displayed_result(), Gate::Xor.apply(a, b));
//!
//! // The same seed always yields the same puzzle.
//! let again = generator.generate_with_seed(Gate::Xor, seed).unwrap();
//! assert_eq!(again.puzzle, puzzle);
//! ```

use std::num::NonZero;

use logic_wheel_core::{DisplayOrder, Gate, Puzzle, Word};
use rand::{
    Rng,
    seq::{IndexedRandom as _, SliceRandom as _},
};

pub use self::seed::{ParseSeedError, PuzzleSeed};

mod seed;

/// Errors that can occur during generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GeneratorError {
    /// The configured attempt cap was reached without an accepted draw.
    #[display("no {gate} puzzle found within {max_attempts} attempts")]
    AttemptsExhausted {
        /// Gate that was being generated.
        gate: Gate,
        /// The configured cap.
        max_attempts: NonZero<usize>,
    },
}

/// A puzzle together with how it was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The accepted puzzle.
    pub puzzle: Puzzle,
    /// Number of draws made, including the accepted one.
    pub attempts: usize,
    /// Seed that reproduces this puzzle, if generation was seeded.
    pub seed: Option<PuzzleSeed>,
}

/// Rejection-sampling puzzle generator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleGenerator {
    max_attempts: Option<NonZero<usize>>,
}

impl PuzzleGenerator {
    /// Creates a generator that retries until a draw is accepted.
    #[must_use]
    pub const fn new() -> Self {
        Self { max_attempts: None }
    }

    /// Creates a generator that gives up after `max_attempts` draws.
    #[must_use]
    pub const fn with_max_attempts(max_attempts: NonZero<usize>) -> Self {
        Self {
            max_attempts: Some(max_attempts),
        }
    }

    /// Returns the attempt cap, if any.
    #[must_use]
    pub const fn max_attempts(&self) -> Option<NonZero<usize>> {
        self.max_attempts
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::AttemptsExhausted`] if an attempt cap is
    /// configured and reached.
    pub fn generate(&self, gate: Gate) -> Result<GeneratedPuzzle, GeneratorError> {
        self.generate_with_seed(gate, PuzzleSeed::random())
    }

    /// Generates a puzzle deterministically from `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::AttemptsExhausted`] if an attempt cap is
    /// configured and reached.
    pub fn generate_with_seed(
        &self,
        gate: Gate,
        seed: PuzzleSeed,
    ) -> Result<GeneratedPuzzle, GeneratorError> {
        let mut rng = seed.rng();
        let generated = self.generate_with_rng(gate, &mut rng)?;
        Ok(GeneratedPuzzle {
            seed: Some(seed),
            ..generated
        })
    }

    /// Generates a puzzle using the caller's random number generator.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::AttemptsExhausted`] if an attempt cap is
    /// configured and reached.
    pub fn generate_with_rng<R>(
        &self,
        gate: Gate,
        rng: &mut R,
    ) -> Result<GeneratedPuzzle, GeneratorError>
    where
        R: Rng + ?Sized,
    {
        // 31 is left out of the pool; 0 stays in and is rejected below.
        let mut pool: Vec<Word> = Word::all().filter(|w| *w != Word::MAX).collect();
        let mut attempts = 0;
        loop {
            if let Some(max_attempts) = self.max_attempts
                && attempts >= max_attempts.get()
            {
                return Err(GeneratorError::AttemptsExhausted { gate, max_attempts });
            }
            attempts += 1;

            pool.shuffle(rng);
            let [lhs, rhs, first, second] = [pool[0], pool[1], pool[2], pool[3]];
            let digits = [lhs, rhs, first, second, gate.apply(lhs, rhs)];
            if let Ok(puzzle) = Puzzle::new(gate, digits) {
                return Ok(GeneratedPuzzle {
                    puzzle,
                    attempts,
                    seed: None,
                });
            }
        }
    }
}

/// Picks a gate uniformly at random.
#[must_use]
pub fn random_gate<R>(rng: &mut R) -> Gate
where
    R: Rng + ?Sized,
{
    #[expect(clippy::missing_panics_doc)]
    let gate = *Gate::ALL.choose(rng).expect("gate list is not empty");
    gate
}

/// Draws a uniformly random display order.
#[must_use]
pub fn random_display_order<R>(rng: &mut R) -> DisplayOrder
where
    R: Rng + ?Sized,
{
    let mut order = *DisplayOrder::IDENTITY.as_array();
    order.shuffle(rng);
    #[expect(clippy::missing_panics_doc)]
    let order =
        DisplayOrder::try_from_array(order).expect("a shuffled permutation is still a permutation");
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_with_seed_records_seed() {
        let seed = PuzzleSeed::from_bytes([3; 32]);
        let generated = PuzzleGenerator::new()
            .generate_with_seed(Gate::And, seed)
            .unwrap();
        assert_eq!(generated.seed, Some(seed));
        assert!(generated.attempts >= 1);
        assert_eq!(generated.puzzle.gate(), Gate::And);
    }

    #[test]
    fn test_attempt_cap_counts_draws() {
        let seed = PuzzleSeed::from_phrase("cap");
        let unbounded = PuzzleGenerator::new()
            .generate_with_seed(Gate::Nor, seed)
            .unwrap();

        let exact = NonZero::new(unbounded.attempts).unwrap();
        let capped = PuzzleGenerator::with_max_attempts(exact)
            .generate_with_seed(Gate::Nor, seed)
            .unwrap();
        assert_eq!(capped.puzzle, unbounded.puzzle);

        if let Some(short) = NonZero::new(unbounded.attempts - 1) {
            assert_eq!(
                PuzzleGenerator::with_max_attempts(short).generate_with_seed(Gate::Nor, seed),
                Err(GeneratorError::AttemptsExhausted {
                    gate: Gate::Nor,
                    max_attempts: short
                })
            );
        }
    }

    #[test]
    fn test_random_gate_covers_all_gates() {
        let mut rng = PuzzleSeed::from_phrase("gates").rng();
        let mut seen = Vec::new();
        for _ in 0..500 {
            let gate = random_gate(&mut rng);
            if !seen.contains(&gate) {
                seen.push(gate);
            }
        }
        assert_eq!(seen.len(), Gate::ALL.len());
    }

    #[test]
    fn test_random_display_order_is_permutation() {
        let mut rng = PuzzleSeed::from_phrase("order").rng();
        for _ in 0..100 {
            let order = random_display_order(&mut rng);
            let mut sorted = *order.as_array();
            sorted.sort_unstable();
            assert_eq!(sorted, [0, 1, 2, 3, 4]);
        }
    }
}
