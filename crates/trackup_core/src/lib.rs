//! Core domain logic for TrackUp.
//! This crate is the single source of truth for address-book invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod logic;
pub mod model;
pub mod storage;

pub use config::CoreConfig;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use logic::commands::{Command, CommandError, CommandResult, ParsedCommand, RemarkCommand};
pub use logic::index::Index;
pub use logic::parser::{parse_command, ParseError};
pub use logic::{Logic, LogicError};
pub use model::address_book::{AddressBook, AddressBookSnapshot, ReadOnlyAddressBook};
pub use model::event::{Event, EventId, EventValidationError};
pub use model::list_view::ListView;
pub use model::model_manager::{Model, PersonFilter};
pub use model::person::{Address, Email, FieldError, Name, Person, Phone, Remark, Tag};
pub use model::unique_person_list::{ModelError, UniquePersonList};
pub use storage::{
    AddressBookStore, MemoryAddressBookStore, SqliteAddressBookStore, StoreError, StoreResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
