//! # CareConnect Architecture
//!
//! CareConnect keeps a clinic's patient list for the length of a session. This crate is
//! the **UI-agnostic core**; the `careconnect` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client (careconnect binary, tests, ...)                    │
//! │  - Builds validated Patient values from user input          │
//! │  - Renders CmdResult, maps errors to exit codes             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the registry, dispatches Command values             │
//! │  - Keeps the history of successful commands                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Duplicate checks, user-facing messages                   │
//! │  - Registry passed in at call time                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Registry Layer (store/)                                    │
//! │  - PatientRegistry trait                                    │
//! │  - InMemoryRegistry (session-only, optionally seeded)       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O in the Core
//!
//! Apart from reading a seed file and a config file on request, nothing in this crate
//! touches stdout, stderr, or the process. Diagnostics go through the `log` facade;
//! the client picks the logger.
//!
//! ## Errors
//!
//! All fallible operations return [`error::Result`]. [`error::CareError::Command`]
//! carries a message written for the end user (for example the duplicate-patient
//! notice); [`error::CareError::InvalidArgument`] marks a caller bug.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Command values and their logic
//! - [`store`]: Registry trait and the in-memory registry
//! - [`model`]: `Patient` and its validated fields
//! - [`config`]: Layered configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
