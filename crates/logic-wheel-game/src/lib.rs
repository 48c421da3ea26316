//! Game session management for the Logic Wheel module.
//!
//! This crate provides [`Session`], the state machine behind one module: it
//! generates puzzles, switches the submit button between "lock in" and
//! "check answer", edits the answer buffer, and runs the timed validation
//! feedback.
//!
//! The session never draws anything itself. It talks to its surroundings
//! through the [`Judge`] and [`Screen`] traits (together, a [`Host`]), which
//! are passed into every operation.
//!
//! # Examples
//!
//! ```
//! use logic_wheel_core::ToggleIndex;
//! use logic_wheel_game::{ModuleId, Session, SessionState, testing::RecordingHost};
//! use logic_wheel_generator::PuzzleSeed;
//!
//! let mut host = RecordingHost::default();
//! let mut session = Session::new(ModuleId::new(1), PuzzleSeed::from_phrase("doc"));
//!
//! session.on_regenerate_pressed(&mut host).unwrap();
//! session.on_submit_pressed(&mut host).unwrap(); // lock in the numbers
//! assert_eq!(session.state(), SessionState::Submitting);
//!
//! // Enter the solution bit by bit, then check it.
//! let solution = session.solution().unwrap();
//! for index in ToggleIndex::ALL {
//!     if solution.value() & index.bit_mask() != 0 {
//!         session.on_toggle_pressed(index, &mut host).unwrap();
//!     }
//! }
//! session.on_submit_pressed(&mut host).unwrap();
//! session.run_validation(&mut host, |_| {});
//!
//! assert!(session.is_solved());
//! assert_eq!(host.successes(), 1);
//! ```

pub use self::{
    host::{Cue, Host, Judge, Screen, StrikeReason},
    module_id::ModuleId,
    session::{BlockReason, Session, SessionError, SessionState, SubmitOutcome},
    timing::FeedbackTiming,
};

pub mod driver;
mod host;
mod module_id;
mod session;
pub mod testing;
mod timing;
