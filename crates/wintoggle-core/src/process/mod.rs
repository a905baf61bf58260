pub mod errors;
pub mod monitor;
pub mod operations;
pub mod pid_file;
pub mod spawn;
pub mod types;

pub use errors::ProcessError;
pub use monitor::{ProcessMonitor, SysinfoMonitor, classify};
pub use operations::{find_matching_processes, is_process_running};
pub use pid_file::{read_pid_file, write_pid_file};
pub use spawn::{launch_argv, spawn_detached};
pub use types::{LaunchSpec, MatchedProcess, ProcessState};
