//! Output helpers shared by CLI commands.

use std::path::PathBuf;

/// Log file written while the TUI runs
pub fn log_file_path() -> PathBuf {
    crate::utils::get_log_dir().join("slider.log")
}

/// Print a success message with a check mark prefix.
pub fn print_success(msg: &str) {
    println!("\u{2713} {}", msg);
}

/// Print an error message with an X prefix to stderr.
pub fn print_error(msg: &str) {
    eprintln!("\u{2717} {}", msg);
}
