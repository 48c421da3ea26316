use std::{
    fmt::Display,
    io::{self, BufRead, Write},
    str, thread,
};

use logic_wheel_game::{Session, SessionError, SubmitOutcome, driver};

use crate::{Command, TerminalHost};

/// Whether the command loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Flow {
    /// Read the next command.
    Continue,
    /// Stop.
    Quit,
}

/// A session wired to a terminal.
#[derive(Debug)]
pub struct App<W> {
    session: Session,
    host: TerminalHost<W>,
}

impl<W> App<W>
where
    W: Write,
{
    /// Creates an application driving `session` through `host`.
    #[must_use]
    pub fn new(session: Session, host: TerminalHost<W>) -> Self {
        Self { session, host }
    }

    /// Returns the session.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Consumes the application and returns the terminal host.
    #[must_use]
    pub fn into_host(self) -> TerminalHost<W> {
        self.host
    }

    /// Prints the command list.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn print_help(&mut self) -> io::Result<()> {
        self.host.print(format_args!("{}", Command::HELP));
        self.host.take_error()
    }

    /// Reads commands line by line until input ends or `quit` is read.
    ///
    /// Blank lines and lines starting with `#` are skipped. A line that is
    /// not valid UTF-8 or does not parse prints an error and changes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    pub fn run<B>(&mut self, mut input: B) -> io::Result<()>
    where
        B: BufRead,
    {
        let mut bytes = Vec::new();
        loop {
            bytes.clear();
            if input.read_until(b'\n', &mut bytes)? == 0 {
                break;
            }
            let line = match str::from_utf8(&bytes) {
                Ok(line) => line.trim(),
                Err(err) => {
                    self.report_bad_line(&String::from_utf8_lossy(&bytes), &err)?;
                    continue;
                }
            };
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match line.parse::<Command>() {
                Ok(command) => {
                    if self.execute(command)?.is_quit() {
                        break;
                    }
                }
                Err(err) => self.report_bad_line(line, &err)?,
            }
        }
        Ok(())
    }

    fn report_bad_line(&mut self, line: &str, err: &dyn Display) -> io::Result<()> {
        log::debug!("[{}] Bad command {:?}: {err}", self.session.id(), line.trim());
        self.host.print(format_args!("error: {err}"));
        self.host.take_error()
    }

    /// Executes one command, sleeping through any feedback it starts.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn execute(&mut self, command: Command) -> io::Result<Flow> {
        let Self { session, host } = self;
        match command {
            Command::Regen => match session.on_regenerate_pressed(host) {
                Ok(_) => {}
                Err(SessionError::Blocked(reason)) => host.print(format_args!("ignored: {reason}")),
                Err(err @ SessionError::Generator(_)) => host.print(format_args!("error: {err}")),
            },
            Command::Submit => match session.on_submit_pressed(host) {
                Ok(SubmitOutcome::ValidationStarted) => session.run_validation(host, thread::sleep),
                Ok(SubmitOutcome::Strike | SubmitOutcome::EnteredSubmission) => {}
                Err(reason) => host.print(format_args!("ignored: {reason}")),
            },
            Command::SubmitBits(bits) => {
                match driver::submit_bits(session, host, &bits, thread::sleep) {
                    Ok(SubmitOutcome::ValidationStarted) => {
                        session.run_validation(host, thread::sleep);
                    }
                    Ok(SubmitOutcome::Strike | SubmitOutcome::EnteredSubmission) => {}
                    Err(reason) => host.print(format_args!("ignored: {reason}")),
                }
            }
            Command::Toggle(index) => {
                if let Err(reason) = session.on_toggle_pressed(index, host) {
                    host.print(format_args!("ignored: {reason}"));
                }
            }
            Command::Solve => {
                if let Err(err) = driver::force_solve(session, host, thread::sleep) {
                    host.print(format_args!("error: {err}"));
                }
            }
            Command::Status => print_status(session, host),
            Command::Help => host.print(format_args!("{}", Command::HELP)),
            Command::Quit => return Ok(Flow::Quit),
        }
        host.take_error()?;
        Ok(Flow::Continue)
    }
}

fn print_status<W>(session: &Session, host: &mut TerminalHost<W>)
where
    W: Write,
{
    let gate = session
        .gate()
        .map_or_else(|| "none".to_owned(), |gate| gate.to_string());
    let digits = session.shown_digits().map_or_else(
        || "none".to_owned(),
        |digits| {
            digits
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        },
    );
    let buffer = session
        .buffer()
        .map_or_else(|| "none".to_owned(), ToString::to_string);
    host.print(format_args!(
        "{}: {}, gate {gate}, digits {digits}, answer {buffer}",
        session.id(),
        session.state()
    ));
}

#[cfg(test)]
mod tests {
    use logic_wheel_core::{AnswerBuffer, Word};
    use logic_wheel_game::{FeedbackTiming, ModuleId, SessionState};
    use logic_wheel_generator::PuzzleSeed;

    use super::*;

    fn new_app(phrase: &str) -> App<Vec<u8>> {
        let session = Session::new(ModuleId::new(2), PuzzleSeed::from_phrase(phrase))
            .with_timing(FeedbackTiming::instant());
        App::new(session, TerminalHost::new(Vec::new()))
    }

    fn output(app: App<Vec<u8>>) -> String {
        String::from_utf8(app.into_host().into_inner()).unwrap()
    }

    fn run(app: &mut App<Vec<u8>>, script: &str) {
        app.run(script.as_bytes()).unwrap();
    }

    #[test]
    fn test_submit_before_regen_strikes() {
        let mut app = new_app("app strike");
        run(&mut app, "submit\n");
        assert_eq!(app.session().state(), SessionState::Idle);
        assert!(output(app).contains("STRIKE: attempted to go to submission phase"));
    }

    #[test]
    fn test_solve_script() {
        let mut app = new_app("app solve");
        run(&mut app, "# comment\n\nregen\nsolve\nstatus\n");
        assert!(app.session().is_solved());
        let out = output(app);
        assert!(out.contains("MODULE SOLVED"));
        assert!(out.contains("Logic Wheel #2: solved"));
    }

    #[test]
    fn test_manual_correct_answer() {
        let mut app = new_app("app manual");
        run(&mut app, "regen\nsubmit\n");
        let solution = app.session().solution().unwrap();
        let bits = AnswerBuffer::from_word(solution);
        for index in AnswerBuffer::new().differing(&bits) {
            assert_eq!(
                app.execute(Command::Toggle(index)).unwrap(),
                Flow::Continue
            );
        }
        app.execute(Command::Submit).unwrap();
        assert!(app.session().is_solved());

        // Solved modules ignore everything.
        run(&mut app, "regen\nsubmit\ntoggle 0\n");
        assert!(app.session().is_solved());
        assert!(output(app).contains("ignored: module is already solved"));
    }

    #[test]
    fn test_wrong_answer_resets() {
        let mut app = new_app("app wrong");
        run(&mut app, "regen\nsubmit\n");
        let solution = app.session().solution().unwrap();
        let wrong = Word::from_bits_truncate(solution.value() ^ 0b1);
        for index in AnswerBuffer::new().differing(&AnswerBuffer::from_word(wrong)) {
            app.execute(Command::Toggle(index)).unwrap();
        }
        app.execute(Command::Submit).unwrap();
        assert_eq!(app.session().state(), SessionState::Idle);
        assert!(output(app).contains("STRIKE: incorrect answer submitted"));
    }

    #[test]
    fn test_bad_input_changes_nothing() {
        let mut app = new_app("app bad");
        run(&mut app, "regen\nsubmit 10201\ntoggle 9\nfrobnicate\n");
        assert_eq!(app.session().state(), SessionState::Ready);
        let out = output(app);
        assert!(out.contains("error: invalid submission"));
        assert!(out.contains("error: toggle position must be 0-4"));
        assert!(out.contains("error: unknown command"));
        assert!(!out.contains("STRIKE"));
    }

    #[test]
    fn test_invalid_utf8_line_is_skipped() {
        let mut app = new_app("app utf8");
        app.run(&b"regen\n\xff\xfe\nsubmit\n"[..]).unwrap();
        assert_eq!(app.session().state(), SessionState::Submitting);
        let out = output(app);
        assert!(out.contains("error: invalid utf-8"));
        assert!(!out.contains("STRIKE"));
    }

    #[test]
    fn test_quit_stops_reading() {
        let mut app = new_app("app quit");
        run(&mut app, "quit\nregen\n");
        assert_eq!(app.session().state(), SessionState::Idle);
    }

    #[test]
    fn test_toggle_outside_submission_is_ignored() {
        let mut app = new_app("app toggle");
        run(&mut app, "toggle 2\n");
        assert!(output(app).contains("ignored: not in submission phase"));
    }
}
