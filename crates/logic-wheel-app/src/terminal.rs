use std::{
    fmt,
    io::{self, Write},
};

use logic_wheel_core::ToggleIndex;
use logic_wheel_game::{Cue, Judge, Screen, StrikeReason};

/// Renders a module as lines of text.
///
/// Every screen change reprints the five slots, for example
/// `[ 12 ][  5 ][*30 ][  7 ][ 19 ]  checking`. A slot marked by validation
/// carries a `*` (checking), `+` (success) or `!` (failure) prefix.
///
/// The [`Judge`] and [`Screen`] callbacks cannot fail, so the first write
/// error is kept and later output is dropped. Retrieve it with
/// [`TerminalHost::take_error`].
#[derive(Debug)]
pub struct TerminalHost<W> {
    out: W,
    slots: [String; 5],
    marks: [Option<Cue>; 5],
    cue: Cue,
    error: Option<io::Error>,
}

impl<W> TerminalHost<W>
where
    W: Write,
{
    /// Text of an empty slot.
    pub const BLANK: &str = "--";

    /// Creates a host writing to `out`.
    #[must_use]
    pub fn new(out: W) -> Self {
        Self {
            out,
            slots: std::array::from_fn(|_| Self::BLANK.to_owned()),
            marks: [None; 5],
            cue: Cue::Idle,
            error: None,
        }
    }

    /// Consumes the host and returns the writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Returns the first write error since the last call, if any.
    ///
    /// # Errors
    ///
    /// Returns the stored error.
    pub fn take_error(&mut self) -> io::Result<()> {
        self.error.take().map_or(Ok(()), Err)
    }

    /// Writes one line of free text.
    pub fn print(&mut self, args: fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.out.write_fmt(args).and_then(|()| self.out.write_all(b"\n")) {
            self.error = Some(err);
        }
    }

    fn render(&mut self) {
        let cells: Vec<String> = self
            .slots
            .iter()
            .zip(self.marks)
            .map(|(slot, mark)| {
                let prefix = match mark {
                    Some(Cue::Checking) => '*',
                    Some(Cue::Success) => '+',
                    Some(Cue::Failure) => '!',
                    Some(Cue::Idle) | None => ' ',
                };
                format!("[{prefix}{slot:>2} ]")
            })
            .collect();
        let line = cells.concat();
        let cue = self.cue;
        self.print(format_args!("{line}  {cue}"));
    }
}

impl<W> Judge for TerminalHost<W>
where
    W: Write,
{
    fn report_success(&mut self) {
        self.print(format_args!("*** MODULE SOLVED ***"));
    }

    fn report_failure(&mut self, reason: StrikeReason) {
        self.print(format_args!("!!! STRIKE: {reason}"));
    }
}

impl<W> Screen for TerminalHost<W>
where
    W: Write,
{
    fn show_digits(&mut self, digits: [String; 5]) {
        self.slots = digits;
        self.marks = [None; 5];
        self.render();
    }

    fn show_bit(&mut self, index: ToggleIndex, bit: bool) {
        self.slots[index.index()] = u8::from(bit).to_string();
        self.render();
    }

    fn clear_digits(&mut self) {
        self.slots = std::array::from_fn(|_| Self::BLANK.to_owned());
        self.marks = [None; 5];
        self.render();
    }

    fn show_cue(&mut self, cue: Cue) {
        self.cue = cue;
        self.marks = [None; 5];
        self.render();
    }

    fn mark_position(&mut self, index: ToggleIndex, cue: Cue) {
        self.marks[index.index()] = Some(cue);
        self.render();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(host: TerminalHost<Vec<u8>>) -> String {
        String::from_utf8(host.into_inner()).unwrap()
    }

    #[test]
    fn test_render_digits_and_bits() {
        let mut host = TerminalHost::new(Vec::new());
        host.show_digits(["12", "5", "30", "7", "19"].map(String::from));
        host.show_bit(ToggleIndex::new(1), true);
        host.show_bit(ToggleIndex::new(4), false);
        assert_eq!(
            output(host),
            "\
[ 12 ][  5 ][ 30 ][  7 ][ 19 ]  idle
[ 12 ][  1 ][ 30 ][  7 ][ 19 ]  idle
[ 12 ][  1 ][ 30 ][  7 ][  0 ]  idle
"
        );
    }

    #[test]
    fn test_marks_and_cues() {
        let mut host = TerminalHost::new(Vec::new());
        host.mark_position(ToggleIndex::new(0), Cue::Checking);
        host.mark_position(ToggleIndex::new(2), Cue::Failure);
        host.show_cue(Cue::Success);
        host.clear_digits();
        assert_eq!(
            output(host),
            "\
[*-- ][ -- ][ -- ][ -- ][ -- ]  idle
[*-- ][ -- ][!-- ][ -- ][ -- ]  idle
[ -- ][ -- ][ -- ][ -- ][ -- ]  success
[ -- ][ -- ][ -- ][ -- ][ -- ]  success
"
        );
    }

    #[test]
    fn test_verdicts() {
        let mut host = TerminalHost::new(Vec::new());
        host.report_failure(StrikeReason::WrongAnswer);
        host.report_success();
        assert_eq!(
            output(host),
            "!!! STRIKE: incorrect answer submitted\n*** MODULE SOLVED ***\n"
        );
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_first_error_is_kept() {
        let mut host = TerminalHost::new(BrokenPipe);
        host.report_success();
        host.clear_digits();
        assert_eq!(
            host.take_error().unwrap_err().kind(),
            io::ErrorKind::BrokenPipe
        );
        assert!(host.take_error().is_ok());
    }
}
