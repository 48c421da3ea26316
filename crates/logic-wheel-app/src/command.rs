use std::str::FromStr;

use logic_wheel_core::{AnswerBuffer, ParseBitsError, ToggleIndex};

/// Errors produced while parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CommandError {
    /// The line was blank.
    #[display("empty command")]
    Empty,
    /// The first word is not a known command.
    #[display("unknown command {name:?}, try \"help\"")]
    Unknown {
        /// The unrecognized word.
        name: String,
    },
    /// `submit` was given an invalid binary literal.
    #[display("invalid submission: {_0}")]
    #[from]
    InvalidBits(ParseBitsError),
    /// `toggle` was given something other than 0-4.
    #[display("toggle position must be 0-4, got {arg:?}")]
    InvalidIndex {
        /// The rejected argument.
        arg: String,
    },
}

/// One line of operator input.
///
/// Commands are case-insensitive and surrounding whitespace is ignored.
///
/// # Examples
///
/// ```
/// use logic_wheel_app::Command;
///
/// assert_eq!("  REGEN ".parse(), Ok(Command::Regen));
/// assert_eq!("submit".parse(), Ok(Command::Submit));
/// assert!(matches!("submit 1 0101".parse(), Ok(Command::SubmitBits(_))));
/// assert!("submit 10201".parse::<Command>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Command {
    /// Press the regenerate button.
    Regen,
    /// Press the submit button.
    Submit,
    /// Enter a binary literal, then press submit.
    SubmitBits(AnswerBuffer),
    /// Press one toggle.
    Toggle(ToggleIndex),
    /// Solve the module automatically.
    Solve,
    /// Print the session state.
    Status,
    /// Print the command list.
    Help,
    /// Stop reading commands.
    Quit,
}

impl Command {
    /// Help text listing every command.
    pub const HELP: &str = "\
commands:
  regen            regenerate numbers
  submit           lock in the numbers, or check the answer
  submit <bits>    enter exactly 5 bits such as 10101 (spaces allowed), then submit
  toggle <0-4>     flip one answer bit (0 is the leftmost)
  solve            solve the module automatically
  status           show the session state
  help             show this list
  quit             exit";
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim().to_ascii_lowercase();
        let (name, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line.as_str(), ""), |(name, rest)| (name, rest.trim()));

        let command = match (name, rest) {
            ("", _) => return Err(CommandError::Empty),
            ("regen", "") => Self::Regen,
            ("submit", "") => Self::Submit,
            ("submit", bits) => Self::SubmitBits(bits.parse()?),
            ("toggle" | "press", arg) => {
                let index = arg
                    .parse::<usize>()
                    .ok()
                    .and_then(ToggleIndex::try_new)
                    .ok_or_else(|| CommandError::InvalidIndex {
                        arg: arg.to_owned(),
                    })?;
                Self::Toggle(index)
            }
            ("solve", "") => Self::Solve,
            ("status", "") => Self::Status,
            ("help" | "?", "") => Self::Help,
            ("quit" | "exit", "") => Self::Quit,
            _ => {
                return Err(CommandError::Unknown {
                    name: line.clone(),
                });
            }
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_commands() {
        for (input, expected) in [
            ("regen", Command::Regen),
            ("  Regen  ", Command::Regen),
            ("submit", Command::Submit),
            ("solve", Command::Solve),
            ("status", Command::Status),
            ("help", Command::Help),
            ("?", Command::Help),
            ("quit", Command::Quit),
            ("EXIT", Command::Quit),
        ] {
            assert_eq!(input.parse(), Ok(expected), "{input:?}");
        }
    }

    #[test]
    fn test_submit_bits() {
        let expected: AnswerBuffer = "10101".parse().unwrap();
        assert_eq!("submit 10101".parse(), Ok(Command::SubmitBits(expected)));
        assert_eq!(
            "submit 1 0 1 0 1".parse(),
            Ok(Command::SubmitBits(expected))
        );
        assert_eq!(
            "submit 10x01".parse::<Command>(),
            Err(CommandError::InvalidBits(ParseBitsError::InvalidChar {
                ch: 'x'
            }))
        );
        assert_eq!(
            "submit 101".parse::<Command>(),
            Err(CommandError::InvalidBits(ParseBitsError::InvalidLength {
                len: 3
            }))
        );
    }

    #[test]
    fn test_toggle() {
        assert_eq!(
            "toggle 4".parse(),
            Ok(Command::Toggle(ToggleIndex::new(4)))
        );
        assert_eq!(
            "press 0".parse(),
            Ok(Command::Toggle(ToggleIndex::new(0)))
        );
        for arg in ["5", "-1", "x", ""] {
            let input = format!("toggle {arg}");
            assert_eq!(
                input.parse::<Command>(),
                Err(CommandError::InvalidIndex {
                    arg: arg.to_owned()
                }),
                "{input:?}"
            );
        }
    }

    #[test]
    fn test_submit_requires_exactly_five_bits() {
        assert!(Command::HELP.contains("exactly 5 bits"));
        assert_eq!(
            "submit 101010".parse::<Command>(),
            Err(CommandError::InvalidBits(ParseBitsError::InvalidLength {
                len: 6
            }))
        );
    }

    #[test]
    fn test_bits_error_converts() {
        let err = ParseBitsError::InvalidChar { ch: '2' };
        assert_eq!(CommandError::from(err), CommandError::InvalidBits(err));
    }

    #[test]
    fn test_errors() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!("   ".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "regen now".parse::<Command>(),
            Err(CommandError::Unknown {
                name: "regen now".to_owned()
            })
        );
        assert_eq!(
            "dance".parse::<Command>().unwrap_err().to_string(),
            "unknown command \"dance\", try \"help\""
        );
    }
}
