use std::time::Duration;

/// Delays used by the validation feedback and the scripted drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackTiming {
    /// Pause after marking each slot while the answer is checked.
    pub check_step: Duration,
    /// How long the failure cue stays up before the display resets.
    pub failure_hold: Duration,
    /// Pause between button presses made by a driver.
    pub driver_step: Duration,
}

impl FeedbackTiming {
    /// Timing with every delay set to zero.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            check_step: Duration::ZERO,
            failure_hold: Duration::ZERO,
            driver_step: Duration::ZERO,
        }
    }
}

impl Default for FeedbackTiming {
    fn default() -> Self {
        Self {
            check_step: Duration::from_millis(473),
            failure_hold: Duration::from_secs(1),
            driver_step: Duration::from_millis(100),
        }
    }
}
