//! Executable commands.
//!
//! # Responsibility
//! - Define the `Command` contract shared by every user command.
//! - Group parsed commands into one closed enum for dispatch.
//!
//! # Invariants
//! - Commands only touch state through `Model`.
//! - A failed command leaves the model unchanged.

pub mod event;
pub mod general;
pub mod person;
pub mod remark;

use crate::model::model_manager::Model;
use crate::model::unique_person_list::ModelError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use event::{AddEventCommand, DeleteEventCommand, ListEventsCommand};
pub use general::{ExitCommand, HelpCommand};
pub use person::{
    AddCommand, ClearCommand, DeleteCommand, EditCommand, EditPersonDescriptor, FindCommand,
    ListCommand,
};
pub use remark::RemarkCommand;

pub const MESSAGE_INVALID_PERSON_INDEX: &str = "The person index provided is invalid";
pub const MESSAGE_INVALID_EVENT_INDEX: &str = "The event index provided is invalid";
pub const MESSAGE_DUPLICATE_PERSON: &str = "This person already exists in the address book";

/// Outcome of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Feedback text shown to the user.
    pub feedback: String,
    /// Whether the front end should show usage help.
    pub show_help: bool,
    /// Whether the front end should terminate.
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            exit: false,
        }
    }
}

/// Failure raised while executing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    InvalidPersonIndex,
    InvalidEventIndex,
    DuplicatePerson,
    /// Command reports its message instead of performing work.
    Reported(String),
    Model(ModelError),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPersonIndex => f.write_str(MESSAGE_INVALID_PERSON_INDEX),
            Self::InvalidEventIndex => f.write_str(MESSAGE_INVALID_EVENT_INDEX),
            Self::DuplicatePerson => f.write_str(MESSAGE_DUPLICATE_PERSON),
            Self::Reported(message) => f.write_str(message),
            Self::Model(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Model(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ModelError> for CommandError {
    fn from(value: ModelError) -> Self {
        match value {
            ModelError::DuplicatePerson(_) => Self::DuplicatePerson,
            other => Self::Model(other),
        }
    }
}

/// A user command that can run against the model.
pub trait Command {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError>;
}

/// Every command the parser can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    Add(AddCommand),
    Edit(EditCommand),
    Delete(DeleteCommand),
    Find(FindCommand),
    List(ListCommand),
    Clear(ClearCommand),
    Remark(RemarkCommand),
    AddEvent(AddEventCommand),
    ListEvents(ListEventsCommand),
    DeleteEvent(DeleteEventCommand),
    Help(HelpCommand),
    Exit(ExitCommand),
}

impl ParsedCommand {
    /// Command word as typed by the user; used for log metadata.
    pub fn word(&self) -> &'static str {
        match self {
            Self::Add(_) => AddCommand::COMMAND_WORD,
            Self::Edit(_) => EditCommand::COMMAND_WORD,
            Self::Delete(_) => DeleteCommand::COMMAND_WORD,
            Self::Find(_) => FindCommand::COMMAND_WORD,
            Self::List(_) => ListCommand::COMMAND_WORD,
            Self::Clear(_) => ClearCommand::COMMAND_WORD,
            Self::Remark(_) => RemarkCommand::COMMAND_WORD,
            Self::AddEvent(_) => AddEventCommand::COMMAND_WORD,
            Self::ListEvents(_) => ListEventsCommand::COMMAND_WORD,
            Self::DeleteEvent(_) => DeleteEventCommand::COMMAND_WORD,
            Self::Help(_) => HelpCommand::COMMAND_WORD,
            Self::Exit(_) => ExitCommand::COMMAND_WORD,
        }
    }
}

impl Command for ParsedCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        match self {
            Self::Add(command) => command.execute(model),
            Self::Edit(command) => command.execute(model),
            Self::Delete(command) => command.execute(model),
            Self::Find(command) => command.execute(model),
            Self::List(command) => command.execute(model),
            Self::Clear(command) => command.execute(model),
            Self::Remark(command) => command.execute(model),
            Self::AddEvent(command) => command.execute(model),
            Self::ListEvents(command) => command.execute(model),
            Self::DeleteEvent(command) => command.execute(model),
            Self::Help(command) => command.execute(model),
            Self::Exit(command) => command.execute(model),
        }
    }
}
