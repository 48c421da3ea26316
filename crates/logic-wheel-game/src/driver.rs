//! Scripted drivers that press buttons on a [`Session`] like an operator would.
//!
//! Both drivers go through the public input operations only, so they are
//! subject to the same blocking rules as a human at the controls.

use std::time::Duration;

use logic_wheel_core::{AnswerBuffer, ToggleIndex};
use rand::Rng;

use crate::{BlockReason, Host, Session, SessionError, SubmitOutcome};

/// Presses toggles to match a binary literal, then presses submit.
///
/// A toggle is pressed at each position `i` where the target bit differs
/// from the *generated digit* at `i` (the unshuffled `digits[i]`, compared as
/// a number), not where it differs from the answer buffer. Toggles are only
/// pressed once numbers have been generated, and toggles the session rejects
/// are skipped.
///
/// # Errors
///
/// Returns the [`BlockReason`] of the final submit press.
pub fn submit_bits<R, H, F>(
    session: &mut Session<R>,
    host: &mut H,
    target: &AnswerBuffer,
    mut sleep: F,
) -> Result<SubmitOutcome, BlockReason>
where
    R: Rng,
    H: Host + ?Sized,
    F: FnMut(Duration),
{
    let step = session.timing().driver_step;
    let digits = session.puzzle().map(|puzzle| *puzzle.digits());
    if let Some(digits) = digits {
        let target = target.to_digits();
        for index in ToggleIndex::ALL {
            let i = index.index();
            if target[i] == digits[i].value() {
                continue;
            }
            if let Err(reason) = session.on_toggle_pressed(index, host) {
                log::debug!("[{}] Scripted toggle {index} skipped: {reason}", session.id());
            }
            sleep(step);
        }
    }
    session.on_submit_pressed(host)
}

/// Solves the module from whatever state it is in.
///
/// Waits out any running validation, generates numbers if there are none,
/// enters the submission phase if needed, toggles every bit that differs
/// from the solution, submits, and runs the validation to completion.
///
/// # Errors
///
/// Returns [`SessionError::Generator`] if a capped generator gives up.
pub fn force_solve<R, H, F>(
    session: &mut Session<R>,
    host: &mut H,
    mut sleep: F,
) -> Result<(), SessionError>
where
    R: Rng,
    H: Host + ?Sized,
    F: FnMut(Duration),
{
    let step = session.timing().driver_step;
    session.run_validation(host, &mut sleep);
    if session.is_solved() {
        return Ok(());
    }

    if !session.has_generated() {
        session.on_regenerate_pressed(host)?;
        sleep(step);
    }
    if !session.is_submitting() {
        session.on_submit_pressed(host)?;
        sleep(step);
    }

    let (Some(solution), Some(buffer)) = (session.solution(), session.buffer().copied()) else {
        unreachable!("the session is in the submission phase");
    };
    log::info!("[{}] Force solving with {solution}.", session.id());
    let target = AnswerBuffer::from_word(solution);
    for index in buffer.differing(&target) {
        session.on_toggle_pressed(index, host)?;
        sleep(step);
    }

    session.on_submit_pressed(host)?;
    session.run_validation(host, &mut sleep);
    debug_assert!(session.is_solved());
    Ok(())
}

#[cfg(test)]
mod tests {
    use logic_wheel_core::Word;
    use logic_wheel_generator::PuzzleSeed;

    use super::*;
    use crate::{
        FeedbackTiming, ModuleId, SessionState, StrikeReason,
        testing::{HostEvent, RecordingHost},
    };

    fn new_session(phrase: &str) -> Session {
        Session::new(ModuleId::new(3), PuzzleSeed::from_phrase(phrase))
            .with_timing(FeedbackTiming::instant())
    }

    fn toggled(host: &RecordingHost) -> Vec<ToggleIndex> {
        host.events()
            .iter()
            .filter_map(|event| match event {
                HostEvent::Bit(index, _) => Some(*index),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_force_solve_from_idle() {
        let mut host = RecordingHost::default();
        let mut session = new_session("force idle");
        force_solve(&mut session, &mut host, |_| {}).unwrap();

        assert!(session.is_solved());
        assert_eq!(host.successes(), 1);
        assert!(host.strikes().is_empty());
    }

    #[test]
    fn test_force_solve_after_partial_input() {
        let mut host = RecordingHost::default();
        let mut session = new_session("force partial");
        session.on_regenerate_pressed(&mut host).unwrap();
        session.on_submit_pressed(&mut host).unwrap();
        for index in [ToggleIndex::new(0), ToggleIndex::new(3)] {
            session.on_toggle_pressed(index, &mut host).unwrap();
        }

        force_solve(&mut session, &mut host, |_| {}).unwrap();
        assert!(session.is_solved());
        assert_eq!(host.successes(), 1);
    }

    #[test]
    fn test_force_solve_waits_for_running_validation() {
        let mut host = RecordingHost::default();
        let mut session = new_session("force running");
        session.on_regenerate_pressed(&mut host).unwrap();
        session.on_submit_pressed(&mut host).unwrap();
        let wrong = AnswerBuffer::from_word(Word::from_bits_truncate(
            session.solution().unwrap().value() ^ 0b10000,
        ));
        for index in AnswerBuffer::new().differing(&wrong) {
            session.on_toggle_pressed(index, &mut host).unwrap();
        }
        session.on_submit_pressed(&mut host).unwrap();
        assert!(session.is_animating());

        force_solve(&mut session, &mut host, |_| {}).unwrap();
        assert_eq!(host.strikes(), vec![StrikeReason::WrongAnswer]);
        assert!(session.is_solved());
        assert_eq!(host.successes(), 1);
    }

    #[test]
    fn test_force_solve_on_solved_does_nothing() {
        let mut host = RecordingHost::default();
        let mut session = new_session("force twice");
        force_solve(&mut session, &mut host, |_| {}).unwrap();
        let events = host.events().len();

        force_solve(&mut session, &mut host, |_| {}).unwrap();
        assert_eq!(host.events().len(), events);
    }

    #[test]
    fn test_submit_bits_without_puzzle_strikes() {
        let mut host = RecordingHost::default();
        let mut session = new_session("bits idle");
        let target: AnswerBuffer = "10101".parse().unwrap();

        assert_eq!(
            submit_bits(&mut session, &mut host, &target, |_| {}),
            Ok(SubmitOutcome::Strike)
        );
        assert!(toggled(&host).is_empty());
        assert_eq!(host.strikes(), vec![StrikeReason::NotGenerated]);
    }

    #[test]
    fn test_submit_bits_compares_against_generated_digits() {
        let mut host = RecordingHost::default();
        let mut session = new_session("bits digits");
        session.on_regenerate_pressed(&mut host).unwrap();
        session.on_submit_pressed(&mut host).unwrap();
        let digits = *session.puzzle().unwrap().digits();
        let target: AnswerBuffer = "11111".parse().unwrap();

        let outcome = submit_bits(&mut session, &mut host, &target, |_| {});
        assert_eq!(outcome, Ok(SubmitOutcome::ValidationStarted));

        // Digits are never 0 and only a digit of exactly 1 matches a set bit.
        let expected: Vec<_> = ToggleIndex::ALL
            .into_iter()
            .filter(|i| digits[i.index()].value() != 1)
            .collect();
        assert_eq!(toggled(&host), expected);
    }

    #[test]
    fn test_submit_bits_in_ready_locks_in() {
        let mut host = RecordingHost::default();
        let mut session = new_session("bits ready");
        session.on_regenerate_pressed(&mut host).unwrap();
        let target: AnswerBuffer = "00000".parse().unwrap();

        // Toggles are rejected outside the submission phase; submit locks in.
        assert_eq!(
            submit_bits(&mut session, &mut host, &target, |_| {}),
            Ok(SubmitOutcome::EnteredSubmission)
        );
        assert!(toggled(&host).is_empty());
        assert_eq!(session.state(), SessionState::Submitting);
    }

    #[test]
    fn test_driver_sleeps_between_presses() {
        let mut host = RecordingHost::default();
        let mut session = Session::new(ModuleId::new(4), PuzzleSeed::from_phrase("sleep"))
            .with_timing(FeedbackTiming {
                check_step: Duration::from_millis(2),
                failure_hold: Duration::from_millis(3),
                driver_step: Duration::from_millis(1),
            });
        let mut total = Duration::ZERO;
        force_solve(&mut session, &mut host, |delay| total += delay).unwrap();

        // regenerate + lock in + five check steps, plus one pause per toggle.
        let toggles = u32::try_from(toggled(&host).len()).unwrap();
        assert_eq!(
            total,
            Duration::from_millis(2) + Duration::from_millis(10) + Duration::from_millis(1) * toggles
        );
    }
}
