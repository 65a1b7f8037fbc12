//! Front-end control commands: `help`, `exit`.

use crate::logic::commands::{
    AddCommand, AddEventCommand, Command, CommandError, CommandResult, DeleteCommand,
    DeleteEventCommand, EditCommand, FindCommand, RemarkCommand,
};
use crate::model::model_manager::Model;

/// Shows usage for every command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HelpCommand;

impl HelpCommand {
    pub const COMMAND_WORD: &'static str = "help";
    pub const MESSAGE_USAGE: &'static str = "help: Shows program usage instructions.\n\
        Example: help";

    /// Usage text of every command, one block per command.
    pub fn usage_summary() -> String {
        [
            AddCommand::MESSAGE_USAGE,
            EditCommand::MESSAGE_USAGE,
            DeleteCommand::MESSAGE_USAGE,
            FindCommand::MESSAGE_USAGE,
            "list: Lists all persons.",
            "clear: Clears all entries from the address book.",
            RemarkCommand::MESSAGE_USAGE,
            AddEventCommand::MESSAGE_USAGE,
            "events: Lists all events.",
            DeleteEventCommand::MESSAGE_USAGE,
            "exit: Exits the program.",
        ]
        .join("\n\n")
    }
}

impl Command for HelpCommand {
    fn execute(&self, _model: &mut Model) -> Result<CommandResult, CommandError> {
        Ok(CommandResult {
            feedback: Self::usage_summary(),
            show_help: true,
            exit: false,
        })
    }
}

/// Asks the front end to terminate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExitCommand;

impl ExitCommand {
    pub const COMMAND_WORD: &'static str = "exit";
}

impl Command for ExitCommand {
    fn execute(&self, _model: &mut Model) -> Result<CommandResult, CommandError> {
        Ok(CommandResult {
            feedback: "Exiting Address Book as requested ...".to_string(),
            show_help: false,
            exit: true,
        })
    }
}
