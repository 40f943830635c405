use anyhow::Result;
use careconnectapp::api::{CmdMessage, MessageLevel};
use careconnectapp::commands::CmdResult;
use careconnectapp::config::OutputMode;
use colored::Colorize;

pub(super) fn print_result(result: &CmdResult, output: OutputMode) -> Result<()> {
    match output {
        OutputMode::Text => {
            print_messages(&result.messages);
            Ok(())
        }
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
            Ok(())
        }
    }
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", format_message(message));
    }
}

fn format_message(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Info => message.content.normal().to_string(),
        MessageLevel::Success => message.content.green().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatted_message_keeps_content() {
        colored::control::set_override(false);
        let shown = format_message(&CmdMessage::success("New patient added: John Doe"));
        assert_eq!(shown, "New patient added: John Doe");
    }

    #[test]
    fn info_message_is_printed_plain() {
        colored::control::set_override(false);
        let shown = format_message(&CmdMessage::info("help: Shows the usage of every command."));
        assert_eq!(shown, "help: Shows the usage of every command.");
    }
}
