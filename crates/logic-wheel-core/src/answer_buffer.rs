//! The operator's 5-bit answer.
//!
//! The answer is entered with five independent toggles. Toggle 0 is the most
//! significant bit, so the buffer reads left to right like a binary literal.
//!
//! # Examples
//!
//! ```
//! use logic_wheel_core::{AnswerBuffer, ToggleIndex};
//!
//! let mut buffer = AnswerBuffer::new();
//! buffer.toggle(ToggleIndex::new(0));
//! buffer.toggle(ToggleIndex::new(4));
//!
//! assert_eq!(buffer.to_string(), "10001");
//! assert_eq!(buffer.to_word().value(), 17);
//! ```

use std::{
    fmt::{self, Display, Write as _},
    str::FromStr,
};

use crate::Word;

/// Position of one toggle in the [`AnswerBuffer`] (0-4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToggleIndex(u8);

impl ToggleIndex {
    /// Number of toggles.
    pub const COUNT: usize = 5;

    /// All toggle positions, most significant first.
    pub const ALL: [Self; 5] = [Self(0), Self(1), Self(2), Self(3), Self(4)];

    /// Creates an index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-4.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < 5, "toggle index must be between 0 and 4");
        Self(index)
    }

    /// Creates an index, returning `None` if `index` is not in the range 0-4.
    #[must_use]
    pub fn try_new(index: usize) -> Option<Self> {
        u8::try_from(index).ok().filter(|i| *i < 5).map(Self)
    }

    /// Returns the index as a `usize`, for indexing arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the bit this toggle carries inside a [`Word`] (toggle 0 carries 16).
    #[must_use]
    pub const fn bit_mask(self) -> u8 {
        1 << (4 - self.0)
    }
}

impl Display for ToggleIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Error returned when parsing a binary literal into an [`AnswerBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBitsError {
    /// A character other than `0`, `1` or a space was found.
    #[display("invalid bit character {ch:?}")]
    InvalidChar {
        /// The offending character.
        ch: char,
    },
    /// The literal does not hold exactly five bits.
    #[display("expected 5 bits, found {len}")]
    InvalidLength {
        /// Number of bits found.
        len: usize,
    },
}

/// Five binary toggles read as a 5-bit word.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnswerBuffer {
    bits: [bool; 5],
}

impl AnswerBuffer {
    /// Creates a buffer with every toggle off.
    #[must_use]
    pub const fn new() -> Self {
        Self { bits: [false; 5] }
    }

    /// Creates a buffer whose toggles spell out `word`.
    #[must_use]
    pub fn from_word(word: Word) -> Self {
        let mut bits = [false; 5];
        for i in ToggleIndex::ALL {
            bits[i.index()] = word.value() & i.bit_mask() != 0;
        }
        Self { bits }
    }

    /// Reads the toggles as a word, toggle 0 being the most significant bit.
    #[must_use]
    pub fn to_word(&self) -> Word {
        let value = ToggleIndex::ALL
            .into_iter()
            .filter(|i| self.bits[i.index()])
            .fold(0, |acc, i| acc | i.bit_mask());
        Word::from_bits_truncate(value)
    }

    /// Returns the state of one toggle.
    #[must_use]
    pub const fn get(&self, index: ToggleIndex) -> bool {
        self.bits[index.index()]
    }

    /// Flips one toggle and returns its new state.
    pub fn toggle(&mut self, index: ToggleIndex) -> bool {
        let bit = &mut self.bits[index.index()];
        *bit = !*bit;
        *bit
    }

    /// Turns every toggle off.
    pub fn clear(&mut self) {
        self.bits = [false; 5];
    }

    /// Returns the positions where `self` and `other` differ.
    pub fn differing(&self, other: &Self) -> impl Iterator<Item = ToggleIndex> + use<> {
        let (lhs, rhs) = (self.bits, other.bits);
        ToggleIndex::ALL
            .into_iter()
            .filter(move |i| lhs[i.index()] != rhs[i.index()])
    }

    /// Returns the toggles as `0`/`1` values, most significant first.
    #[must_use]
    pub fn to_digits(&self) -> [u8; 5] {
        self.bits.map(u8::from)
    }
}

impl Display for AnswerBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits {
            f.write_char(if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl FromStr for AnswerBuffer {
    type Err = ParseBitsError;

    /// Parses a binary literal such as `"10101"` or `"1 0 1 0 1"`.
    ///
    /// Spaces are ignored; any other character besides `0` and `1` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bits = [false; 5];
        let mut len = 0;
        for ch in s.chars() {
            let bit = match ch {
                ' ' => continue,
                '0' => false,
                '1' => true,
                _ => return Err(ParseBitsError::InvalidChar { ch }),
            };
            if let Some(slot) = bits.get_mut(len) {
                *slot = bit;
            }
            len += 1;
        }
        if len != bits.len() {
            return Err(ParseBitsError::InvalidLength { len });
        }
        Ok(Self { bits })
    }
}
