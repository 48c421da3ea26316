use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// Error returned when parsing a [`PuzzleSeed`] from hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The input is not 64 characters long.
    #[display("seed must be 64 hex characters, found {len}")]
    InvalidLength {
        /// Number of characters found.
        len: usize,
    },
    /// The input contains a non-hex character.
    #[display("invalid hex character {ch:?} at offset {offset}")]
    InvalidHexDigit {
        /// The offending character.
        ch: char,
        /// Character offset of the offending character.
        offset: usize,
    },
}

/// A 256-bit seed for reproducible generation.
///
/// Seeds display as 64 lowercase hex characters and parse back from the same
/// form (upper-case hex is accepted too).
///
/// # Examples
///
/// ```
/// use logic_wheel_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("logic wheel");
/// let parsed: PuzzleSeed = seed.to_string().parse().unwrap();
/// assert_eq!(seed, parsed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Draws a fresh seed from the thread-local random number generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Derives a seed from arbitrary text by hashing it with SHA-256.
    ///
    /// The same phrase always yields the same seed.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Creates the deterministic random number generator for this seed.
    #[must_use]
    pub fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(ParseSeedError::InvalidLength { len });
        }

        let mut bytes = [0; 32];
        let mut nibbles = s.chars().enumerate().map(|(offset, ch)| {
            ch.to_digit(16)
                .and_then(|d| u8::try_from(d).ok())
                .ok_or(ParseSeedError::InvalidHexDigit { ch, offset })
        });
        for byte in &mut bytes {
            let (Some(hi), Some(lo)) = (nibbles.next(), nibbles.next()) else {
                unreachable!("length was checked above");
            };
            *byte = (hi? << 4) | lo?;
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED_HEX: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    #[test]
    fn test_hex_round_trip() {
        let seed: PuzzleSeed = SEED_HEX.parse().unwrap();
        assert_eq!(seed.as_bytes()[0], 0xc1);
        assert_eq!(seed.as_bytes()[31], 0xf1);
        assert_eq!(seed.to_string(), SEED_HEX);

        let upper: PuzzleSeed = SEED_HEX.to_uppercase().parse().unwrap();
        assert_eq!(upper, seed);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "abcd".parse::<PuzzleSeed>(),
            Err(ParseSeedError::InvalidLength { len: 4 })
        );
        let bad = format!("{}g", &SEED_HEX[..63]);
        assert_eq!(
            bad.parse::<PuzzleSeed>(),
            Err(ParseSeedError::InvalidHexDigit { ch: 'g', offset: 63 })
        );
    }

    #[test]
    fn test_from_phrase() {
        let a = PuzzleSeed::from_phrase("alpha");
        assert_eq!(a, PuzzleSeed::from_phrase("alpha"));
        assert_ne!(a, PuzzleSeed::from_phrase("beta"));
        // SHA-256("abc")
        assert_eq!(
            PuzzleSeed::from_phrase("abc").to_string(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_rng_is_deterministic() {
        use rand::seq::SliceRandom as _;

        let seed = PuzzleSeed::from_bytes([7; 32]);
        let mut a: Vec<u8> = (0..32).collect();
        let mut b = a.clone();
        a.shuffle(&mut seed.rng());
        b.shuffle(&mut seed.rng());
        assert_eq!(a, b);
    }
}
