//! Command parsing and execution.
//!
//! # Responsibility
//! - Turn raw user input into commands and run them against the model.
//! - Persist the address book after every command that changed it.
//!
//! # Invariants
//! - Parse or execution failures never trigger a save.
//! - Logs carry command metadata only, never user-entered field values.

pub mod commands;
pub mod index;
pub mod parser;

use crate::logic::commands::{Command, CommandError, CommandResult};
use crate::logic::parser::{parse_command, ParseError};
use crate::model::model_manager::Model;
use crate::storage::{AddressBookStore, StoreError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error returned by `Logic::execute`.
#[derive(Debug)]
pub enum LogicError {
    Parse(ParseError),
    Command(CommandError),
    Store(StoreError),
}

impl Display for LogicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::Command(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "Could not save data to file: {err}"),
        }
    }
}

impl Error for LogicError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Command(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<ParseError> for LogicError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<CommandError> for LogicError {
    fn from(value: CommandError) -> Self {
        Self::Command(value)
    }
}

impl From<StoreError> for LogicError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Front-end facade: parse, execute, persist.
pub struct Logic<S: AddressBookStore> {
    model: Model,
    store: S,
}

impl<S: AddressBookStore> Logic<S> {
    /// Loads the stored address book and wraps it with `store`.
    pub fn new(store: S) -> Result<Self, StoreError> {
        let book = store.load()?;
        Ok(Self {
            model: Model::new(book),
            store,
        })
    }

    /// Parses and executes one line of user input.
    pub fn execute(&mut self, input: &str) -> Result<CommandResult, LogicError> {
        let command = parse_command(input).map_err(|err| {
            warn!(
                "event=command_parse module=logic status=error error_code={}",
                err.error_code()
            );
            err
        })?;
        let word = command.word();

        let result = command.execute(&mut self.model).map_err(|err| {
            warn!("event=command_execute module=logic status=error command={word}");
            err
        })?;

        if self.model.is_dirty() {
            self.store.save(self.model.address_book())?;
            self.model.mark_saved();
        }

        info!("event=command_execute module=logic status=ok command={word}");
        Ok(result)
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
