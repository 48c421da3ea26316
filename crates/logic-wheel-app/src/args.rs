use std::{num::NonZero, path::PathBuf, time::Duration};

use clap::Parser;
use logic_wheel_game::{FeedbackTiming, ModuleId, Session};
use logic_wheel_generator::{PuzzleGenerator, PuzzleSeed};

/// Command-line configuration.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Seed as 64 hex characters. Random if neither seed option is given.
    #[arg(long, value_name = "HEX", conflicts_with = "seed_phrase")]
    pub seed: Option<PuzzleSeed>,

    /// Seed derived from arbitrary text.
    #[arg(long, value_name = "TEXT")]
    pub seed_phrase: Option<String>,

    /// Identifier shown in log lines.
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub module_id: u32,

    /// Give up generating after this many draws instead of retrying forever.
    #[arg(long, value_name = "COUNT")]
    pub max_attempts: Option<NonZero<usize>>,

    /// Pause after checking each slot, in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = 473)]
    pub check_step_ms: u64,

    /// How long a wrong answer stays on screen, in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = 1000)]
    pub failure_hold_ms: u64,

    /// Pause between scripted button presses, in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = 100)]
    pub driver_step_ms: u64,

    /// Skip every pause.
    #[arg(long)]
    pub instant: bool,

    /// Read commands from this file instead of standard input.
    #[arg(value_name = "SCRIPT")]
    pub script: Option<PathBuf>,
}

impl Args {
    /// Returns the seed selected by the options.
    #[must_use]
    pub fn seed(&self) -> PuzzleSeed {
        match (self.seed, &self.seed_phrase) {
            (Some(seed), _) => seed,
            (None, Some(phrase)) => PuzzleSeed::from_phrase(phrase),
            (None, None) => PuzzleSeed::random(),
        }
    }

    /// Returns the feedback timing selected by the options.
    #[must_use]
    pub fn timing(&self) -> FeedbackTiming {
        if self.instant {
            return FeedbackTiming::instant();
        }
        FeedbackTiming {
            check_step: Duration::from_millis(self.check_step_ms),
            failure_hold: Duration::from_millis(self.failure_hold_ms),
            driver_step: Duration::from_millis(self.driver_step_ms),
        }
    }

    /// Returns the generator selected by the options.
    #[must_use]
    pub fn generator(&self) -> PuzzleGenerator {
        self.max_attempts
            .map_or_else(PuzzleGenerator::new, PuzzleGenerator::with_max_attempts)
    }

    /// Builds the session described by the options.
    #[must_use]
    pub fn build_session(&self) -> Session {
        Session::new(ModuleId::new(self.module_id), self.seed())
            .with_generator(self.generator())
            .with_timing(self.timing())
    }
}
