use clap::ArgMatches;
use tracing::error;

mod helpers;
mod status;
mod toggle;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        None => toggle::handle_toggle_command(matches),
        Some(("toggle", sub_matches)) => toggle::handle_toggle_command(sub_matches),
        Some(("status", sub_matches)) => status::handle_status_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
