use std::process::ExitCode;

use wintoggle_core::ToggleError;

mod app;
mod commands;

fn main() -> ExitCode {
    let app = app::build_cli();
    let matches = app.get_matches();

    match commands::run_command(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => ExitCode::from(exit_code_for(e.as_ref())),
    }
}

/// Dependency and launch failures get distinct codes; everything else is 1.
fn exit_code_for(error: &(dyn std::error::Error + 'static)) -> u8 {
    error
        .downcast_ref::<ToggleError>()
        .map(ToggleError::exit_code)
        .unwrap_or(1)
}
