//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for clients (the CLI, tests, anything else).
//!
//! ## Role and Responsibilities
//!
//! - **Owns** the session registry
//! - **Dispatches** [`Command`] values to their implementation
//! - **Records** every command that succeeded, so a session can be inspected or
//!   compared after the fact
//!
//! The facade holds no business logic; duplicate checks and messages live in
//! `commands/*.rs`.
//!
//! ## Generic Over PatientRegistry
//!
//! `CareApi<R: PatientRegistry>` works with any registry. Production and tests both use
//! `InMemoryRegistry`, but a substitute registry can be dropped in to observe exactly
//! which calls a command makes.

use crate::commands::{AddCommand, CmdResult, Command};
use crate::error::Result;
use crate::model::Patient;
use crate::store::PatientRegistry;

pub use crate::commands::{CmdMessage, MessageLevel};

pub struct CareApi<R: PatientRegistry> {
    registry: R,
    history: Vec<Command>,
}

impl<R: PatientRegistry> CareApi<R> {
    pub fn new(registry: R) -> Self {
        Self {
            registry,
            history: Vec::new(),
        }
    }

    /// Runs `command` against the owned registry. Failed commands are not recorded.
    pub fn execute(&mut self, command: Command) -> Result<CmdResult> {
        let result = command.execute(&mut self.registry)?;
        self.history.push(command);
        Ok(result)
    }

    pub fn add_patient(&mut self, patient: Patient) -> Result<CmdResult> {
        self.execute(Command::Add(AddCommand::new(patient)))
    }

    pub fn help(&mut self) -> Result<CmdResult> {
        self.execute(Command::Help)
    }

    pub fn patients(&self) -> &[Patient] {
        self.registry.patients()
    }

    /// Commands that completed successfully, oldest first.
    pub fn history(&self) -> &[Command] {
        &self.history
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn into_registry(self) -> R {
        self.registry
    }
}
