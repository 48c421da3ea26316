//! Terminal front end for the Logic Wheel module.
//!
//! [`TerminalHost`] renders the module as text, [`Command`] parses the
//! one-line commands an operator (or a script) types, and [`App`] ties both
//! to a [`Session`](logic_wheel_game::Session).

use std::{
    fs::File,
    io::{self, BufReader, Write as _},
    path::PathBuf,
};

pub use self::{
    app::{App, Flow},
    args::Args,
    command::{Command, CommandError},
    terminal::TerminalHost,
};

mod app;
mod args;
mod command;
mod terminal;

/// Errors that stop the application.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AppError {
    /// Reading commands or writing output failed.
    #[display("I/O error: {_0}")]
    #[from]
    Io(io::Error),
    /// The script file could not be opened.
    #[display("failed to open script {}: {source}", path.display())]
    OpenScript {
        /// Path given on the command line.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
}

/// Builds a session from `args` and plays it until input ends or `quit` is read.
///
/// # Errors
///
/// Returns [`AppError`] if the script cannot be opened or terminal I/O fails.
pub fn run(args: &Args) -> Result<(), AppError> {
    let session = args.build_session();
    let mut app = App::new(session, TerminalHost::new(io::stdout().lock()));

    if let Some(path) = &args.script {
        let file = File::open(path).map_err(|source| AppError::OpenScript {
            path: path.clone(),
            source,
        })?;
        app.run(BufReader::new(file))?;
    } else {
        app.print_help()?;
        app.run(io::stdin().lock())?;
    }

    let session = app.session();
    log::info!("[{}] Finished in state {}.", session.id(), session.state());
    app.into_host().into_inner().flush()?;
    Ok(())
}
