//! Contact and event domain model.
//!
//! # Responsibility
//! - Define the records managed by TrackUp and their validation rules.
//! - Own the `AddressBook` aggregate and the `Model` state used by commands.
//!
//! # Invariants
//! - Persons are unique by identity (name) inside one address book.
//! - Callers only ever see read-only views of stored lists.

pub mod address_book;
pub mod event;
pub mod list_view;
pub mod model_manager;
pub mod person;
pub mod unique_person_list;
