//! Address-book persistence.
//!
//! # Responsibility
//! - Define the load/save contract used by the logic layer.
//! - Provide SQLite-backed and in-memory implementations.
//!
//! # Invariants
//! - `save` replaces the stored snapshot as a whole; partial writes are
//!   never observable.
//! - `load` re-validates stored data instead of trusting it.

use crate::db::DbError;
use crate::model::address_book::{AddressBook, AddressBookSnapshot};
use crate::model::unique_person_list::ModelError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod sqlite_store;

pub use sqlite_store::SqliteAddressBookStore;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    /// Connection was not migrated to the schema this binary expects.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Stored rows fail model validation.
    InvalidData(String),
    Model(ModelError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}"
            ),
            Self::InvalidData(message) => write!(f, "invalid stored address book data: {message}"),
            Self::Model(err) => write!(f, "stored address book violates model invariants: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Model(err) => Some(err),
            Self::UninitializedConnection { .. } | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<ModelError> for StoreError {
    fn from(value: ModelError) -> Self {
        Self::Model(value)
    }
}

/// Load/save contract for address-book snapshots.
pub trait AddressBookStore {
    /// Reads the stored snapshot; an empty store yields an empty book.
    fn load(&self) -> StoreResult<AddressBook>;
    /// Replaces the stored snapshot with `book`.
    fn save(&mut self, book: &AddressBook) -> StoreResult<()>;
}

/// Process-local store for sessions that must not touch disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryAddressBookStore {
    snapshot: AddressBookSnapshot,
    saves: usize,
}

impl MemoryAddressBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store; the snapshot is validated on `load`.
    pub fn with_snapshot(snapshot: AddressBookSnapshot) -> Self {
        Self { snapshot, saves: 0 }
    }

    pub fn snapshot(&self) -> &AddressBookSnapshot {
        &self.snapshot
    }

    /// Number of successful `save` calls.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl AddressBookStore for MemoryAddressBookStore {
    fn load(&self) -> StoreResult<AddressBook> {
        Ok(AddressBook::from_read_only(&self.snapshot)?)
    }

    fn save(&mut self, book: &AddressBook) -> StoreResult<()> {
        self.snapshot = AddressBookSnapshot::from(book);
        self.saves += 1;
        Ok(())
    }
}
