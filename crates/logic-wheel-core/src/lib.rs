//! Core data structures for the Logic Wheel module.
//!
//! This crate provides the small, value-level types shared by puzzle generation
//! and the game session.
//!
//! # Overview
//!
//! 1. **Arithmetic** - 5-bit values and the gates that combine them
//!    - [`word`]: [`Word`], an unsigned value that fits in 5 bits (0-31)
//!    - [`gate`]: [`Gate`], one of OR/AND/NAND/NOR/XOR over two words
//!
//! 2. **Input** - The operator's answer
//!    - [`answer_buffer`]: [`AnswerBuffer`], five toggles read as a 5-bit word,
//!      addressed by [`ToggleIndex`]
//!
//! 3. **Puzzle** - What the generator produces and the screen shows
//!    - [`puzzle`]: [`Puzzle`], five distinct digits tied together by a gate equation
//!    - [`display_order`]: [`DisplayOrder`], the permutation applied on screen
//!
//! # Examples
//!
//! ```
//! use logic_wheel_core::{AnswerBuffer, Gate, Puzzle, Word};
//!
//! let w = |v| Word::new(v).unwrap();
//! let puzzle = Puzzle::new(Gate::Xor, [w(5), w(9), w(3), w(17), w(12)]).unwrap();
//!
//! // The displayed result comes from the displayed pair...
//! assert_eq!(puzzle.displayed_result(), w(5 ^ 9));
//! // ...while the answer comes from the withheld pair.
//! assert_eq!(puzzle.derive_solution(), w(3 ^ 17));
//!
//! let answer: AnswerBuffer = "10010".parse().unwrap();
//! assert_eq!(answer.to_word(), puzzle.derive_solution());
//! ```

pub mod answer_buffer;
pub mod display_order;
pub mod gate;
pub mod puzzle;
pub mod word;

// Re-export commonly used types
pub use self::{
    answer_buffer::{AnswerBuffer, ParseBitsError, ToggleIndex},
    display_order::{DisplayOrder, DisplayOrderError},
    gate::{Gate, ParseGateError},
    puzzle::{Puzzle, PuzzleError},
    word::{Word, WordError},
};
