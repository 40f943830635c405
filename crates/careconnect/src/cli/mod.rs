//! # CLI Behavior
//!
//! This is **one possible client** for careconnect. It is the only place that knows
//! about terminal I/O, exit codes, and output formatting.
//!
//! ## Session Model
//!
//! The registry lives only as long as the process. Each run starts from the seed file
//! (`--seed`, or `seed_file` in the config) or from an empty list, applies one
//! command, and reports the outcome. Nothing is written back.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Context wiring and per-command handlers
//! - `print`: Output formatting (coloured text or JSON)

mod commands;
mod print;
pub mod setup;

pub use commands::run;
