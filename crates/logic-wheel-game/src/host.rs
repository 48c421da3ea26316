use logic_wheel_core::ToggleIndex;

/// Why a strike was reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum StrikeReason {
    /// Submit was pressed before any numbers were generated.
    #[display("attempted to go to submission phase without generating numbers")]
    NotGenerated,
    /// The submitted answer did not match the solution.
    #[display("incorrect answer submitted")]
    WrongAnswer,
}

/// Semantic screen state; the host decides how it looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum Cue {
    /// Nothing in progress.
    #[display("idle")]
    Idle,
    /// The answer is being checked.
    #[display("checking")]
    Checking,
    /// The module is solved.
    #[display("success")]
    Success,
    /// The answer was wrong.
    #[display("failure")]
    Failure,
}

/// Receives the pass/strike verdicts of a module.
pub trait Judge {
    /// Called once when the module is solved.
    fn report_success(&mut self);

    /// Called for every strike.
    fn report_failure(&mut self, reason: StrikeReason);
}

/// The five-slot display of a module.
pub trait Screen {
    /// Replaces the text of all five slots.
    fn show_digits(&mut self, digits: [String; 5]);

    /// Shows one answer bit in its slot.
    fn show_bit(&mut self, index: ToggleIndex, bit: bool);

    /// Blanks all five slots.
    fn clear_digits(&mut self);

    /// Applies a cue to all five slots.
    fn show_cue(&mut self, cue: Cue);

    /// Applies a cue to a single slot.
    fn mark_position(&mut self, index: ToggleIndex, cue: Cue);
}

/// Everything a [`Session`](crate::Session) needs from its surroundings.
///
/// Implemented automatically for any type that is both a [`Judge`] and a [`Screen`].
pub trait Host: Judge + Screen {}

impl<T> Host for T where T: Judge + Screen + ?Sized {}
