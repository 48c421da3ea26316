//! 5-bit word representation.

use std::{
    fmt::{self, Display},
    ops::{BitAnd, BitOr, BitXor, Not},
};

/// Error returned when a value does not fit in 5 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum WordError {
    /// The value is greater than 31.
    #[display("value {value} does not fit in 5 bits")]
    OutOfRange {
        /// The rejected value.
        value: u8,
    },
}

/// An unsigned value in the range 0-31.
///
/// All bitwise operators keep the result inside the 5-bit mask, so `!word`
/// is the 5-bit complement (`word ^ 31`), not the 8-bit one.
///
/// # Examples
///
/// ```
/// use logic_wheel_core::Word;
///
/// let a = Word::new(0b10110).unwrap();
/// let b = Word::new(0b00111).unwrap();
///
/// assert_eq!((a & b).value(), 0b00110);
/// assert_eq!((!a).value(), 0b01001);
/// assert!(Word::new(32).is_err());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word(u8);

impl Word {
    /// Number of bits in a word.
    pub const BITS: u8 = 5;

    /// Bit mask covering every bit of a word.
    pub const MASK: u8 = 0b1_1111;

    /// The word with every bit cleared.
    pub const ZERO: Self = Self(0);

    /// The word with every bit set.
    pub const MAX: Self = Self(Self::MASK);

    /// Creates a word from a value in the range 0-31.
    ///
    /// # Errors
    ///
    /// Returns [`WordError::OutOfRange`] if `value` is greater than 31.
    pub const fn new(value: u8) -> Result<Self, WordError> {
        if value > Self::MASK {
            return Err(WordError::OutOfRange { value });
        }
        Ok(Self(value))
    }

    /// Creates a word from the low 5 bits of `value`, discarding the rest.
    #[must_use]
    pub const fn from_bits_truncate(value: u8) -> Self {
        Self(value & Self::MASK)
    }

    /// Returns the numeric value of this word.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns `true` for the two boundary words, 0 and 31.
    ///
    /// Boundary words never appear as puzzle digits.
    #[must_use]
    pub const fn is_boundary(self) -> bool {
        self.0 == 0 || self.0 == Self::MASK
    }

    /// Returns every word from 0 to 31 in ascending order.
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..=Self::MASK).map(Self)
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<Word> for u8 {
    fn from(word: Word) -> u8 {
        word.value()
    }
}

impl TryFrom<u8> for Word {
    type Error = WordError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl BitOr for Word {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for Word {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitXor for Word {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl Not for Word {
    type Output = Self;

    fn not(self) -> Self {
        Self(self.0 ^ Self::MASK)
    }
}
