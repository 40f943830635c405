use crate::commands::{AddCommand, CmdMessage, CmdResult};
use crate::error::Result;

pub const COMMAND_WORD: &str = "help";

pub const MESSAGE_USAGE: &str = "help: Shows the usage of every command.\nExample: help";

/// Usage text of every command, in the order they are listed to the user.
pub fn usages() -> [&'static str; 2] {
    [AddCommand::MESSAGE_USAGE, MESSAGE_USAGE]
}

pub fn run() -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(usages().join("\n\n")));
    Ok(result)
}
