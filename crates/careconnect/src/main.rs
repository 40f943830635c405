//! # CareConnect CLI
//!
//! The binary is intentionally thin: argument parsing, dispatch and terminal output
//! live in `src/cli/`, and this file only invokes `cli::run()` and maps failures to
//! an exit code. Everything about patients, duplicates and messages belongs to the
//! `careconnectapp` library.
//!
//! ## Testing Approach
//!
//! - **Library**: the command logic is unit tested where it lives.
//! - **CLI**: `tests/` drives the built binary with `assert_cmd` and checks stdout,
//!   stderr and exit codes.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
