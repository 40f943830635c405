//! # Command Layer
//!
//! Each command lives in its own submodule and holds the business logic for one
//! operation against a [`PatientRegistry`].
//!
//! ## Role and Responsibilities
//!
//! - A command is built once, fully formed, by whoever parsed the user's input.
//! - It is executed against a registry passed in at call time, never one it captured.
//! - It returns a structured [`CmdResult`] on success, or a
//!   [`CareError`](crate::error::CareError) on failure. Recoverable failures use
//!   [`CareError::Command`](crate::error::CareError::Command), whose message is meant
//!   for the user verbatim.
//!
//! Commands do no I/O: no stdout, no files, no exit codes. The client decides how to
//! render the result.
//!
//! ## Command Values
//!
//! [`Command`] is a closed enum of every command kind. Equality is derived, so two
//! commands are equal only when they are the same kind *and* carry equal payloads; an
//! `Add` is never equal to a `Help`.
//!
//! ## Command Modules
//!
//! - [`add`]: Register a new patient
//! - [`help`]: Usage text for every command

use serde::Serialize;

use crate::error::Result;
use crate::model::Patient;
use crate::store::PatientRegistry;

pub mod add;
pub mod help;

pub use add::AddCommand;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddCommand),
    Help,
}

impl Command {
    pub fn execute(&self, registry: &mut dyn PatientRegistry) -> Result<CmdResult> {
        log::debug!("executing '{}' command", self.command_word());
        match self {
            Command::Add(cmd) => cmd.execute(registry),
            Command::Help => help::run(),
        }
    }

    pub fn command_word(&self) -> &'static str {
        match self {
            Command::Add(_) => AddCommand::COMMAND_WORD,
            Command::Help => help::COMMAND_WORD,
        }
    }
}

impl From<AddCommand> for Command {
    fn from(cmd: AddCommand) -> Self {
        Command::Add(cmd)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

/// Outcome of a successful command.
///
/// - `messages`: feedback for the user, in order, with a level each
/// - `affected_patients`: records the command inserted or changed
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    pub affected_patients: Vec<Patient>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_patients(mut self, patients: Vec<Patient>) -> Self {
        self.affected_patients = patients;
        self
    }

    /// The text of the first message, which commands use as their headline feedback.
    pub fn feedback(&self) -> Option<&str> {
        self.messages.first().map(|m| m.content.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{john_doe, patient};
    use crate::store::memory::InMemoryRegistry;

    #[test]
    fn add_commands_compare_by_record() {
        let a = Command::Add(AddCommand::new(john_doe()));
        let b = Command::from(AddCommand::new(john_doe()));
        let c = Command::Add(AddCommand::new(patient("Jane Doe")));
        assert_eq!(a, a.clone());
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn different_kinds_are_never_equal() {
        assert_ne!(Command::Add(AddCommand::new(john_doe())), Command::Help);
    }

    #[test]
    fn dispatches_to_add() {
        let mut registry = InMemoryRegistry::new();
        let result = Command::Add(AddCommand::new(john_doe()))
            .execute(&mut registry)
            .unwrap();
        assert_eq!(result.feedback(), Some("New patient added: John Doe"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn dispatches_to_help_without_touching_registry() {
        let mut registry = InMemoryRegistry::new();
        let result = Command::Help.execute(&mut registry).unwrap();
        assert!(result.feedback().unwrap().contains(AddCommand::MESSAGE_USAGE));
        assert!(registry.is_empty());
    }

    #[test]
    fn command_words() {
        assert_eq!(Command::Add(AddCommand::new(john_doe())).command_word(), "add");
        assert_eq!(Command::Help.command_word(), "help");
    }

    #[test]
    fn message_levels_serialize_lowercase() {
        let messages = [CmdMessage::info("a"), CmdMessage::success("b")];
        let json = serde_json::to_string(&messages).unwrap();
        assert_eq!(
            json,
            r#"[{"level":"info","content":"a"},{"level":"success","content":"b"}]"#
        );
    }

    #[test]
    fn feedback_is_none_without_messages() {
        assert_eq!(CmdResult::default().feedback(), None);
    }
}
