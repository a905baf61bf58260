use clap::ArgMatches;
use tracing::info;

use wintoggle_core::{StatusReport, ToggleOrchestrator, detect_backends};

use super::helpers::load_target;

pub(crate) fn handle_status_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let (_config, target) = load_target(matches)?;

    info!(
        event = "cli.status_started",
        target = %target.name,
        json_output = json_output
    );

    let status = ToggleOrchestrator::new(target, detect_backends()).status();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        print_status(&status);
    }

    info!(
        event = "cli.status_completed",
        process_state = %status.process_state,
        window_count = status.windows.len()
    );
    Ok(())
}

fn print_status(status: &StatusReport) {
    println!("📊 {} ({})", status.name, status.window_class);
    if let Some(app_id) = &status.app_id {
        println!("   App id:     {}", app_id);
    }
    println!(
        "   Process:    {} ({} matching)",
        status.process_state,
        status.processes.len()
    );
    for process in &status.processes {
        println!(
            "     pid {:<8} {:>6}s  {}",
            process.pid, process.age_secs, process.cmd_line
        );
    }

    if status.backends.is_empty() {
        println!("   Backends:   none (install qdbus or xdotool)");
    } else {
        println!("   Backends:   {}", status.backends.join(", "));
    }

    println!("   Windows:    {}", status.windows.len());
    for (index, window) in status.windows.iter().enumerate() {
        let marker = if index == 0 { "canonical" } else { "duplicate" };
        println!("     {} ({})", window, marker);
    }

    match status.visibility {
        Some(visibility) => println!("   Visibility: {}", visibility),
        None => println!("   Visibility: -"),
    }
}
