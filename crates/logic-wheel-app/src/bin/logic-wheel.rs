//! Logic Wheel terminal application.
//!
//! Reads commands from standard input (or a script file) and plays one module.

use std::process::ExitCode;

use clap::Parser as _;
use logic_wheel_app::Args;

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    log::info!("Starting Logic Wheel, version={}", env!("CARGO_PKG_VERSION"));

    match logic_wheel_app::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
