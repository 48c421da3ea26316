//! Boolean gates over 5-bit words.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::Word;

/// Error returned when parsing an unknown gate name.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown logic gate: {name:?}")]
pub struct ParseGateError {
    /// The rejected input.
    pub name: String,
}

/// A binary boolean gate applied bitwise to two [`Word`]s.
///
/// `Nand` and `Nor` complement the primitive result within the 5-bit mask,
/// so every gate maps two words to a word.
///
/// # Examples
///
/// ```
/// use logic_wheel_core::{Gate, Word};
///
/// let a = Word::new(0b01100).unwrap();
/// let b = Word::new(0b01010).unwrap();
///
/// assert_eq!(Gate::Or.apply(a, b).value(), 0b01110);
/// assert_eq!(Gate::Nand.apply(a, b).value(), 0b10111);
/// assert_eq!("xor".parse::<Gate>().unwrap(), Gate::Xor);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    /// `a | b`
    Or,
    /// `a & b`
    And,
    /// `(a & b) ^ 31`
    Nand,
    /// `(a | b) ^ 31`
    Nor,
    /// `a ^ b`
    Xor,
}

impl Gate {
    /// Every gate, in declaration order.
    pub const ALL: [Self; 5] = [Self::Or, Self::And, Self::Nand, Self::Nor, Self::Xor];

    /// Applies the gate bitwise to `a` and `b`.
    #[must_use]
    pub fn apply(self, a: Word, b: Word) -> Word {
        match self {
            Self::Or => a | b,
            Self::And => a & b,
            Self::Nand => !(a & b),
            Self::Nor => !(a | b),
            Self::Xor => a ^ b,
        }
    }

    /// Returns the upper-case name of the gate.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Or => "OR",
            Self::And => "AND",
            Self::Nand => "NAND",
            Self::Nor => "NOR",
            Self::Xor => "XOR",
        }
    }
}

impl Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Gate {
    type Err = ParseGateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|gate| gate.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseGateError { name: s.to_owned() })
    }
}
