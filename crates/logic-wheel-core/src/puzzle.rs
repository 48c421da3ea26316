//! The gate equation shown to the operator.

use std::fmt::{self, Display};

use crate::{Gate, Word};

/// Error returned when puzzle digits break the puzzle invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PuzzleError {
    /// A digit is 0 or 31.
    #[display("digit {digit} at index {index} is a boundary value")]
    BoundaryDigit {
        /// Index of the offending digit.
        index: usize,
        /// The offending digit.
        digit: Word,
    },
    /// Two digits are equal.
    #[display("digit {digit} appears at both index {first} and index {second}")]
    DuplicateDigit {
        /// Index of the first occurrence.
        first: usize,
        /// Index of the repeated occurrence.
        second: usize,
        /// The repeated digit.
        digit: Word,
    },
    /// The displayed result does not match the displayed pair.
    #[display("{a} {gate} {b} is {expected}, not {found}")]
    ResultMismatch {
        /// The puzzle gate.
        gate: Gate,
        /// First displayed operand.
        a: Word,
        /// Second displayed operand.
        b: Word,
        /// The result the gate produces.
        expected: Word,
        /// The result stored in the digits.
        found: Word,
    },
}

/// Five distinct digits linked by a gate equation.
///
/// - `digits[0]` and `digits[1]` are the displayed operands.
/// - `digits[2]` and `digits[3]` are the withheld operands.
/// - `digits[4]` is `gate(digits[0], digits[1])`, displayed alongside the operands.
///
/// Every digit is in the range 1-30 and no two digits are equal. The answer
/// the operator must enter is `gate(digits[2], digits[3])`, see
/// [`Puzzle::derive_solution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Puzzle {
    gate: Gate,
    digits: [Word; 5],
}

impl Puzzle {
    /// Creates a puzzle, checking the digit invariant.
    ///
    /// # Errors
    ///
    /// Returns a [`PuzzleError`] describing the first violated constraint:
    /// a boundary digit, a duplicate digit, or a displayed result that does
    /// not match the displayed pair.
    pub fn new(gate: Gate, digits: [Word; 5]) -> Result<Self, PuzzleError> {
        for (index, &digit) in digits.iter().enumerate() {
            if digit.is_boundary() {
                return Err(PuzzleError::BoundaryDigit { index, digit });
            }
        }
        for (first, &digit) in digits.iter().enumerate() {
            if let Some(offset) = digits[first + 1..].iter().position(|&d| d == digit) {
                return Err(PuzzleError::DuplicateDigit {
                    first,
                    second: first + 1 + offset,
                    digit,
                });
            }
        }
        let [a, b, _, _, found] = digits;
        let expected = gate.apply(a, b);
        if expected != found {
            return Err(PuzzleError::ResultMismatch {
                gate,
                a,
                b,
                expected,
                found,
            });
        }
        Ok(Self { gate, digits })
    }

    /// Returns the gate the puzzle was built with.
    #[must_use]
    pub const fn gate(&self) -> Gate {
        self.gate
    }

    /// Returns the digits in generation order.
    #[must_use]
    pub const fn digits(&self) -> &[Word; 5] {
        &self.digits
    }

    /// Returns the two displayed operands.
    #[must_use]
    pub const fn displayed_pair(&self) -> (Word, Word) {
        (self.digits[0], self.digits[1])
    }

    /// Returns the two withheld operands.
    #[must_use]
    pub const fn withheld_pair(&self) -> (Word, Word) {
        (self.digits[2], self.digits[3])
    }

    /// Returns the displayed result, `gate(digits[0], digits[1])`.
    #[must_use]
    pub const fn displayed_result(&self) -> Word {
        self.digits[4]
    }

    /// Returns the answer, `gate(digits[2], digits[3])`.
    ///
    /// This is generally different from [`Puzzle::displayed_result`], so the
    /// answer cannot be read off the screen.
    #[must_use]
    pub fn derive_solution(&self) -> Word {
        let (a, b) = self.withheld_pair();
        self.gate.apply(a, b)
    }
}

impl Display for Puzzle {
    /// Formats the equation and the withheld pair, e.g. `5 XOR 9 = 12 (withheld: 3, 17)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lhs, rhs) = self.displayed_pair();
        let (first, second) = self.withheld_pair();
        write!(
            f,
            "{lhs} {} {rhs} = {} (withheld: {first}, {second})",
            self.gate,
            self.displayed_result()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(values: [u8; 5]) -> [Word; 5] {
        values.map(|v| Word::new(v).unwrap())
    }

    #[test]
    fn test_accessors() {
        let puzzle = Puzzle::new(Gate::Or, words([4, 2, 7, 9, 6])).unwrap();
        assert_eq!(puzzle.gate(), Gate::Or);
        assert_eq!(
            puzzle.displayed_pair(),
            (Word::new(4).unwrap(), Word::new(2).unwrap())
        );
        assert_eq!(puzzle.displayed_result().value(), 6);
        assert_eq!(puzzle.derive_solution().value(), 0b1111);
        assert_eq!(puzzle.to_string(), "4 OR 2 = 6 (withheld: 7, 9)");
    }

    #[test]
    fn test_solution_uses_withheld_pair() {
        let puzzle = Puzzle::new(Gate::Nand, words([12, 10, 3, 5, 23])).unwrap();
        assert_eq!(puzzle.displayed_result().value(), 0b1_0111);
        assert_eq!(puzzle.derive_solution().value(), 0b1_1110);
        assert_ne!(puzzle.derive_solution(), puzzle.displayed_result());
    }

    #[test]
    fn test_rejects_boundary_digits() {
        assert_eq!(
            Puzzle::new(Gate::Xor, words([5, 9, 0, 17, 12])),
            Err(PuzzleError::BoundaryDigit {
                index: 2,
                digit: Word::ZERO
            })
        );
        // 16 OR 15 = 31
        assert!(matches!(
            Puzzle::new(Gate::Or, words([16, 15, 1, 2, 31])),
            Err(PuzzleError::BoundaryDigit { index: 4, .. })
        ));
    }

    #[test]
    fn test_rejects_duplicates() {
        // 5 XOR 9 = 12 collides with a withheld digit
        assert_eq!(
            Puzzle::new(Gate::Xor, words([5, 9, 12, 17, 12])),
            Err(PuzzleError::DuplicateDigit {
                first: 2,
                second: 4,
                digit: Word::new(12).unwrap()
            })
        );
    }

    #[test]
    fn test_rejects_wrong_result() {
        let err = Puzzle::new(Gate::And, words([6, 3, 8, 9, 7])).unwrap_err();
        assert_eq!(err.to_string(), "6 AND 3 is 2, not 7");
    }
}
