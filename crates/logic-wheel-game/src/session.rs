use std::time::Duration;

use logic_wheel_core::{AnswerBuffer, DisplayOrder, Gate, Puzzle, ToggleIndex, Word};
use logic_wheel_generator::{
    GeneratorError, PuzzleGenerator, PuzzleSeed, random_display_order, random_gate,
};
use rand::Rng;
use rand_pcg::Pcg64;

use crate::{Cue, FeedbackTiming, Host, ModuleId, StrikeReason};

/// Why an input was ignored.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum BlockReason {
    /// The module is solved; all input is ignored.
    #[display("module is already solved")]
    Solved,
    /// Validation feedback is running.
    #[display("validation feedback is in progress")]
    Validating,
    /// Toggles only work during the submission phase.
    #[display("not in submission phase")]
    NotSubmitting,
}

/// Errors returned by session operations that generate puzzles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SessionError {
    /// The input was ignored.
    #[display("input ignored: {_0}")]
    Blocked(#[from] BlockReason),
    /// The generator gave up.
    #[display("generation failed: {_0}")]
    Generator(#[from] GeneratorError),
}

/// What a press of the submit button did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SubmitOutcome {
    /// Nothing was generated yet; a strike was reported.
    Strike,
    /// The numbers were locked in and the answer buffer cleared.
    EnteredSubmission,
    /// The answer is being checked; drive it with [`Session::advance_validation`].
    ValidationStarted,
}

/// Observable phase of a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum SessionState {
    /// No puzzle exists.
    #[display("idle")]
    Idle,
    /// A puzzle is on screen; the submit button locks it in.
    #[display("ready")]
    Ready,
    /// The answer buffer is live; the submit button checks it.
    #[display("submitting")]
    Submitting,
    /// Validation feedback is running; all input is ignored.
    #[display("validating")]
    Validating,
    /// The module is solved; all input is ignored.
    #[display("solved")]
    Solved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValidationStep {
    /// Next slot to mark; `ToggleIndex::COUNT` means the verdict is due.
    Checking(usize),
    /// The failure cue is up; the display resets next.
    Resetting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Ready {
        puzzle: Puzzle,
    },
    Submitting {
        puzzle: Puzzle,
        solution: Word,
        buffer: AnswerBuffer,
    },
    Validating {
        puzzle: Puzzle,
        solution: Word,
        input: Word,
        step: ValidationStep,
    },
    Solved {
        puzzle: Puzzle,
        solution: Word,
    },
}

/// One Logic Wheel module.
///
/// The session is driven by three inputs ([`on_regenerate_pressed`],
/// [`on_submit_pressed`], [`on_toggle_pressed`]) and reports to a [`Host`].
///
/// The gate is kept for a whole round: regenerating from [`SessionState::Ready`]
/// replaces the digits but keeps the gate and the display order, while
/// regenerating from [`SessionState::Idle`] or [`SessionState::Submitting`]
/// starts a new round with a new gate and display order.
///
/// The random source is swappable; [`Session::new`] seeds a PCG generator and
/// [`Session::with_rng`] accepts any [`Rng`].
///
/// [`on_regenerate_pressed`]: Session::on_regenerate_pressed
/// [`on_submit_pressed`]: Session::on_submit_pressed
/// [`on_toggle_pressed`]: Session::on_toggle_pressed
#[derive(Debug, Clone)]
pub struct Session<R = Pcg64> {
    id: ModuleId,
    rng: R,
    generator: PuzzleGenerator,
    timing: FeedbackTiming,
    gate: Option<Gate>,
    display_order: DisplayOrder,
    phase: Phase,
}

impl Session<Pcg64> {
    /// Creates a session whose randomness is fully determined by `seed`.
    #[must_use]
    pub fn new(id: ModuleId, seed: PuzzleSeed) -> Self {
        log::debug!("[{id}] Session seed: {seed}");
        Self::with_rng(id, seed.rng())
    }
}

impl<R> Session<R>
where
    R: Rng,
{
    /// Creates a session drawing from `rng`.
    #[must_use]
    pub fn with_rng(id: ModuleId, rng: R) -> Self {
        Self {
            id,
            rng,
            generator: PuzzleGenerator::new(),
            timing: FeedbackTiming::default(),
            gate: None,
            display_order: DisplayOrder::IDENTITY,
            phase: Phase::Idle,
        }
    }

    /// Replaces the puzzle generator.
    #[must_use]
    pub fn with_generator(self, generator: PuzzleGenerator) -> Self {
        Self { generator, ..self }
    }

    /// Replaces the feedback timing.
    #[must_use]
    pub fn with_timing(self, timing: FeedbackTiming) -> Self {
        Self { timing, ..self }
    }

    /// Returns the module identifier.
    #[must_use]
    pub fn id(&self) -> ModuleId {
        self.id
    }

    /// Returns the feedback timing.
    #[must_use]
    pub fn timing(&self) -> &FeedbackTiming {
        &self.timing
    }

    /// Returns the current phase.
    #[must_use]
    pub fn state(&self) -> SessionState {
        match self.phase {
            Phase::Idle => SessionState::Idle,
            Phase::Ready { .. } => SessionState::Ready,
            Phase::Submitting { .. } => SessionState::Submitting,
            Phase::Validating { .. } => SessionState::Validating,
            Phase::Solved { .. } => SessionState::Solved,
        }
    }

    /// Returns the gate of the current round, if one has been chosen.
    ///
    /// The gate outlives a failed answer; it is replaced when the next round starts.
    #[must_use]
    pub fn gate(&self) -> Option<Gate> {
        self.gate
    }

    /// Returns the display order of the current round.
    #[must_use]
    pub fn display_order(&self) -> DisplayOrder {
        self.display_order
    }

    /// Returns the current puzzle, if numbers have been generated.
    #[must_use]
    pub fn puzzle(&self) -> Option<&Puzzle> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Ready { puzzle }
            | Phase::Submitting { puzzle, .. }
            | Phase::Validating { puzzle, .. }
            | Phase::Solved { puzzle, .. } => Some(puzzle),
        }
    }

    /// Returns the digits in screen order, if numbers have been generated.
    #[must_use]
    pub fn shown_digits(&self) -> Option<[Word; 5]> {
        self.puzzle()
            .map(|puzzle| self.display_order.apply(puzzle.digits()))
    }

    /// Returns the expected answer once the submission phase has started.
    #[must_use]
    pub fn solution(&self) -> Option<Word> {
        match &self.phase {
            Phase::Idle | Phase::Ready { .. } => None,
            Phase::Submitting { solution, .. }
            | Phase::Validating { solution, .. }
            | Phase::Solved { solution, .. } => Some(*solution),
        }
    }

    /// Returns the answer buffer during the submission phase.
    #[must_use]
    pub fn buffer(&self) -> Option<&AnswerBuffer> {
        match &self.phase {
            Phase::Submitting { buffer, .. } => Some(buffer),
            _ => None,
        }
    }

    /// Returns `true` if a puzzle exists.
    #[must_use]
    pub fn has_generated(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// Returns `true` from the moment the numbers are locked in until the
    /// answer is resolved.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(
            self.phase,
            Phase::Submitting { .. } | Phase::Validating { .. }
        )
    }

    /// Returns `true` while validation feedback is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Validating { .. })
    }

    /// Returns `true` once the module is solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self.phase, Phase::Solved { .. })
    }

    fn check_accepting_input(&self) -> Result<(), BlockReason> {
        match self.phase {
            Phase::Solved { .. } => Err(BlockReason::Solved),
            Phase::Validating { .. } => Err(BlockReason::Validating),
            _ => Ok(()),
        }
    }

    fn reject(&self, action: &str, reason: BlockReason) -> BlockReason {
        log::debug!("[{}] Ignored {action}: {reason}.", self.id);
        reason
    }

    /// Generates new numbers.
    ///
    /// From [`SessionState::Ready`] the gate and display order are kept. From
    /// [`SessionState::Idle`] or [`SessionState::Submitting`] a new round
    /// starts: the display order is redrawn and a new gate is picked.
    ///
    /// On error the session is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Blocked`] if the session is solved or validating,
    /// and [`SessionError::Generator`] if a capped generator gives up.
    pub fn on_regenerate_pressed<H>(&mut self, host: &mut H) -> Result<Puzzle, SessionError>
    where
        H: Host + ?Sized,
    {
        if let Err(reason) = self.check_accepting_input() {
            return Err(self.reject("regenerate", reason).into());
        }

        let new_round = !matches!(self.phase, Phase::Ready { .. });
        let (gate, display_order) = if new_round {
            let display_order = random_display_order(&mut self.rng);
            let gate = random_gate(&mut self.rng);
            log::info!("[{}] Regenerated new logic gate: {gate}", self.id);
            (gate, display_order)
        } else {
            let gate = match self.gate {
                Some(gate) => gate,
                None => random_gate(&mut self.rng),
            };
            (gate, self.display_order)
        };

        let generated = match self.generator.generate_with_rng(gate, &mut self.rng) {
            Ok(generated) => generated,
            Err(err) => {
                log::error!("[{}] {err}", self.id);
                return Err(err.into());
            }
        };
        let puzzle = generated.puzzle;
        self.gate = Some(gate);
        self.display_order = display_order;
        self.phase = Phase::Ready { puzzle };

        let shown = display_order.apply(puzzle.digits());
        log::info!(
            "[{}] Displayed digits are: {}",
            self.id,
            shown.map(|digit| digit.to_string()).join(", ")
        );
        let (lhs, rhs) = puzzle.displayed_pair();
        let (first, second) = puzzle.withheld_pair();
        log::info!(
            "[{}] {lhs} {gate} {rhs} = {}. Unused numbers are {first} and {second}.",
            self.id,
            puzzle.displayed_result()
        );
        log::trace!("[{}] Accepted after {} draws.", self.id, generated.attempts);

        host.show_cue(Cue::Idle);
        host.show_digits(shown.map(|d| d.to_string()));
        Ok(puzzle)
    }

    /// Presses the submit button.
    ///
    /// The button means "lock in the numbers" the first time and "check the
    /// answer" every time after that:
    ///
    /// - [`SessionState::Idle`]: reports a [`StrikeReason::NotGenerated`]
    ///   strike and changes nothing.
    /// - [`SessionState::Ready`]: computes the solution from the withheld pair,
    ///   clears the answer buffer and enters the submission phase.
    /// - [`SessionState::Submitting`]: starts validation. Drive it to the
    ///   verdict with [`Session::advance_validation`] or
    ///   [`Session::run_validation`].
    ///
    /// # Errors
    ///
    /// Returns a [`BlockReason`] if the session is solved or validating.
    pub fn on_submit_pressed<H>(&mut self, host: &mut H) -> Result<SubmitOutcome, BlockReason>
    where
        H: Host + ?Sized,
    {
        if let Err(reason) = self.check_accepting_input() {
            return Err(self.reject("submit", reason));
        }

        match self.phase {
            Phase::Idle => {
                log::warn!(
                    "[{}] Attempted to go to submission phase without generating numbers. Strike.",
                    self.id
                );
                host.report_failure(StrikeReason::NotGenerated);
                Ok(SubmitOutcome::Strike)
            }
            Phase::Ready { puzzle } => {
                let solution = puzzle.derive_solution();
                let buffer = AnswerBuffer::new();
                self.phase = Phase::Submitting {
                    puzzle,
                    solution,
                    buffer,
                };
                let (c, d) = puzzle.withheld_pair();
                log::info!(
                    "[{}] Moved to submission phase. Unused numbers were {c} and {d}. Solution: {solution}",
                    self.id
                );
                host.show_digits(buffer.to_digits().map(|bit| bit.to_string()));
                Ok(SubmitOutcome::EnteredSubmission)
            }
            Phase::Submitting {
                puzzle,
                solution,
                buffer,
            } => {
                let input = buffer.to_word();
                self.phase = Phase::Validating {
                    puzzle,
                    solution,
                    input,
                    step: ValidationStep::Checking(0),
                };
                log::debug!("[{}] Checking {buffer} ({input}).", self.id);
                Ok(SubmitOutcome::ValidationStarted)
            }
            Phase::Validating { .. } | Phase::Solved { .. } => {
                unreachable!("rejected by check_accepting_input")
            }
        }
    }

    /// Flips one bit of the answer buffer and returns its new value.
    ///
    /// # Errors
    ///
    /// Returns a [`BlockReason`] if the session is solved, validating, or not
    /// in the submission phase.
    pub fn on_toggle_pressed<H>(
        &mut self,
        index: ToggleIndex,
        host: &mut H,
    ) -> Result<bool, BlockReason>
    where
        H: Host + ?Sized,
    {
        if let Err(reason) = self.check_accepting_input() {
            return Err(self.reject("toggle", reason));
        }
        let Phase::Submitting { buffer, .. } = &mut self.phase else {
            return Err(self.reject("toggle", BlockReason::NotSubmitting));
        };
        let bit = buffer.toggle(index);
        host.show_bit(index, bit);
        Ok(bit)
    }

    /// Performs the next step of the validation feedback.
    ///
    /// Returns how long to wait before calling again, or `None` once the
    /// verdict is in and the feedback is over (or if no validation is running).
    ///
    /// The sequence marks each slot as [`Cue::Checking`], then either solves
    /// the module or reports a [`StrikeReason::WrongAnswer`] strike, holds the
    /// failure cue, and resets the session to [`SessionState::Idle`].
    pub fn advance_validation<H>(&mut self, host: &mut H) -> Option<Duration>
    where
        H: Host + ?Sized,
    {
        let Phase::Validating {
            puzzle,
            solution,
            input,
            step,
        } = &mut self.phase
        else {
            return None;
        };

        match *step {
            ValidationStep::Checking(slot) if slot < ToggleIndex::COUNT => {
                host.mark_position(ToggleIndex::ALL[slot], Cue::Checking);
                *step = ValidationStep::Checking(slot + 1);
                Some(self.timing.check_step)
            }
            ValidationStep::Checking(_) if *input == *solution => {
                let (puzzle, solution) = (*puzzle, *solution);
                self.phase = Phase::Solved { puzzle, solution };
                log::info!(
                    "[{}] Successfully submitted {solution}. Module solved.",
                    self.id
                );
                host.report_success();
                host.show_cue(Cue::Success);
                None
            }
            ValidationStep::Checking(_) => {
                log::warn!(
                    "[{}] Incorrectly submitted {input}, expected {solution}. Strike.",
                    self.id
                );
                *step = ValidationStep::Resetting;
                host.report_failure(StrikeReason::WrongAnswer);
                host.show_cue(Cue::Failure);
                Some(self.timing.failure_hold)
            }
            ValidationStep::Resetting => {
                self.phase = Phase::Idle;
                host.clear_digits();
                host.show_cue(Cue::Idle);
                None
            }
        }
    }

    /// Runs the validation feedback to completion, calling `sleep` for every pause.
    ///
    /// Does nothing if no validation is running.
    pub fn run_validation<H, F>(&mut self, host: &mut H, mut sleep: F)
    where
        H: Host + ?Sized,
        F: FnMut(Duration),
    {
        while let Some(delay) = self.advance_validation(host) {
            sleep(delay);
        }
    }
}
