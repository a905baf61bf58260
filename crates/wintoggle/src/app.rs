use clap::{Arg, ArgAction, Command, value_parser};
use std::path::PathBuf;

pub fn build_cli() -> Command {
    Command::new("wintoggle")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Toggle one application window: launch, minimize or restore")
        .long_about("wintoggle is meant to be bound to a global hotkey. Each run looks at the configured application and does one thing: launches it when it is not running, minimizes its window when visible, or restores and focuses it when minimized. Works with KWin (over D-Bus) and X11 (through xdotool).")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Config file to use instead of ~/.config/wintoggle/config.toml")
                .value_parser(value_parser!(PathBuf))
                .global(true),
        )
        .subcommand(
            Command::new("toggle")
                .about("Toggle the configured application (default when no command is given)")
        )
        .subcommand(
            Command::new("status")
                .about("Show process, backend and window state without changing anything")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
}
