//! Test utilities for driving a [`Session`](crate::Session).
//!
//! [`RecordingHost`] implements [`Judge`] and [`Screen`] by recording every
//! call, and keeps a copy of what the five slots would show.

use logic_wheel_core::ToggleIndex;

use crate::{Cue, Judge, Screen, StrikeReason};

/// One call received by a [`RecordingHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// [`Judge::report_success`]
    Success,
    /// [`Judge::report_failure`]
    Strike(StrikeReason),
    /// [`Screen::show_digits`]
    Digits([String; 5]),
    /// [`Screen::show_bit`]
    Bit(ToggleIndex, bool),
    /// [`Screen::clear_digits`]
    Cleared,
    /// [`Screen::show_cue`]
    Cue(Cue),
    /// [`Screen::mark_position`]
    Marked(ToggleIndex, Cue),
}

/// A host that records everything the session tells it.
#[derive(Debug, Default, Clone)]
pub struct RecordingHost {
    events: Vec<HostEvent>,
    screen: [String; 5],
}

impl RecordingHost {
    /// Text placed in every slot by [`Screen::clear_digits`].
    pub const BLANK: &str = "--";

    /// Returns every recorded call, oldest first.
    #[must_use]
    pub fn events(&self) -> &[HostEvent] {
        &self.events
    }

    /// Returns how many times the module reported success.
    #[must_use]
    pub fn successes(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, HostEvent::Success))
            .count()
    }

    /// Returns every reported strike, oldest first.
    #[must_use]
    pub fn strikes(&self) -> Vec<StrikeReason> {
        self.events
            .iter()
            .filter_map(|event| match event {
                HostEvent::Strike(reason) => Some(*reason),
                _ => None,
            })
            .collect()
    }

    /// Returns the most recent whole-screen cue.
    #[must_use]
    pub fn last_cue(&self) -> Option<Cue> {
        self.events.iter().rev().find_map(|event| match event {
            HostEvent::Cue(cue) => Some(*cue),
            _ => None,
        })
    }

    /// Returns the current text of the five slots.
    #[must_use]
    pub fn screen(&self) -> [String; 5] {
        self.screen.clone()
    }
}

impl Judge for RecordingHost {
    fn report_success(&mut self) {
        self.events.push(HostEvent::Success);
    }

    fn report_failure(&mut self, reason: StrikeReason) {
        self.events.push(HostEvent::Strike(reason));
    }
}

impl Screen for RecordingHost {
    fn show_digits(&mut self, digits: [String; 5]) {
        self.screen.clone_from(&digits);
        self.events.push(HostEvent::Digits(digits));
    }

    fn show_bit(&mut self, index: ToggleIndex, bit: bool) {
        self.screen[index.index()] = u8::from(bit).to_string();
        self.events.push(HostEvent::Bit(index, bit));
    }

    fn clear_digits(&mut self) {
        self.screen = std::array::from_fn(|_| Self::BLANK.to_owned());
        self.events.push(HostEvent::Cleared);
    }

    fn show_cue(&mut self, cue: Cue) {
        self.events.push(HostEvent::Cue(cue));
    }

    fn mark_position(&mut self, index: ToggleIndex, cue: Cue) {
        self.events.push(HostEvent::Marked(index, cue));
    }
}
