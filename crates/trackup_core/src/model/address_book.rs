//! Address book aggregate.
//!
//! # Responsibility
//! - Own the person and event lists as one unit of state.
//! - Enforce the duplicate-free person invariant on every mutation path.
//!
//! # Invariants
//! - No two persons share identity fields (see `Person::is_same_person`).
//! - No two events share an id; events are located by id.
//! - `reset_data` validates the incoming snapshot before mutating; on error
//!   the previous contents stay intact.
//! - Equality and hashing are structural over both lists.

use crate::model::event::Event;
use crate::model::list_view::ListView;
use crate::model::person::Person;
use crate::model::unique_person_list::{ModelError, UniquePersonList};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Read access shared by the aggregate and any external snapshot source.
///
/// Implementors are not required to uphold the duplicate-free invariant;
/// consumers such as `AddressBook::reset_data` re-validate.
pub trait ReadOnlyAddressBook {
    fn persons(&self) -> &[Person];
    fn events(&self) -> &[Event];

    fn person_list(&self) -> ListView<'_, Person> {
        ListView::new(self.persons())
    }

    fn event_list(&self) -> ListView<'_, Event> {
        ListView::new(self.events())
    }
}

/// Owned, unvalidated copy of address-book contents.
///
/// Produced by storage loads and exports; may hold identity duplicates until
/// it is applied through `AddressBook::reset_data`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBookSnapshot {
    pub persons: Vec<Person>,
    pub events: Vec<Event>,
}

impl ReadOnlyAddressBook for AddressBookSnapshot {
    fn persons(&self) -> &[Person] {
        &self.persons
    }

    fn events(&self) -> &[Event] {
        &self.events
    }
}

impl From<&AddressBook> for AddressBookSnapshot {
    fn from(value: &AddressBook) -> Self {
        Self {
            persons: value.persons().to_vec(),
            events: value.events().to_vec(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AddressBook {
    persons: UniquePersonList,
    events: Vec<Event>,
}

impl AddressBook {
    /// Creates an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an address book holding a copy of `source`.
    pub fn from_read_only(source: &impl ReadOnlyAddressBook) -> Result<Self, ModelError> {
        let mut book = Self::new();
        book.reset_data(source)?;
        Ok(book)
    }

    /// Replaces all persons and events with the contents of `source`.
    ///
    /// # Errors
    /// - `ModelError::DuplicatePerson` when `source` holds an identity
    ///   duplicate.
    /// - `ModelError::DuplicateEvent` when two source events share an id.
    ///
    /// Nothing is modified on error.
    pub fn reset_data(
        &mut self,
        source: &(impl ReadOnlyAddressBook + ?Sized),
    ) -> Result<(), ModelError> {
        if let Some(duplicate) = first_duplicate_event(source.events()) {
            return Err(ModelError::DuplicateEvent(duplicate.id));
        }
        self.persons.set_persons(source.persons().to_vec())?;
        self.events = source.events().to_vec();
        Ok(())
    }

    /// Read-only view of the stored persons, in insertion order.
    pub fn person_list(&self) -> ListView<'_, Person> {
        ListView::new(self.persons.as_slice())
    }

    /// Read-only view of the stored events, in insertion order.
    pub fn event_list(&self) -> ListView<'_, Event> {
        ListView::new(&self.events)
    }

    /// Returns true if a person with the same identity is stored.
    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.contains(person)
    }

    /// Appends `person`; rejects identity duplicates.
    pub fn add_person(&mut self, person: Person) -> Result<(), ModelError> {
        self.persons.add(person)
    }

    /// Replaces `target` with `edited`, keeping its position.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<(), ModelError> {
        self.persons.set_person(target, edited)
    }

    pub fn remove_person(&mut self, target: &Person) -> Result<Person, ModelError> {
        self.persons.remove(target)
    }

    /// Returns true if an event with the same stable ID is stored.
    pub fn has_event(&self, event: &Event) -> bool {
        self.events.iter().any(|stored| stored.id == event.id)
    }

    /// Appends `event`; rejects an id already in use.
    pub fn add_event(&mut self, event: Event) -> Result<(), ModelError> {
        if self.has_event(&event) {
            return Err(ModelError::DuplicateEvent(event.id));
        }
        self.events.push(event);
        Ok(())
    }

    /// Replaces the event with `target`'s id by `edited`, keeping its position.
    ///
    /// `edited` may carry a new id only if no other stored event uses it.
    pub fn set_event(&mut self, target: &Event, edited: Event) -> Result<(), ModelError> {
        let position = self.event_position(target)?;
        if edited.id != target.id && self.has_event(&edited) {
            return Err(ModelError::DuplicateEvent(edited.id));
        }
        self.events[position] = edited;
        Ok(())
    }

    /// Removes the event with `target`'s id.
    pub fn remove_event(&mut self, target: &Event) -> Result<Event, ModelError> {
        let position = self.event_position(target)?;
        Ok(self.events.remove(position))
    }

    fn event_position(&self, target: &Event) -> Result<usize, ModelError> {
        self.events
            .iter()
            .position(|stored| stored.id == target.id)
            .ok_or_else(|| ModelError::EventNotFound(target.title.clone()))
    }
}

fn first_duplicate_event(events: &[Event]) -> Option<&Event> {
    events.iter().enumerate().find_map(|(position, event)| {
        events[..position]
            .iter()
            .any(|earlier| earlier.id == event.id)
            .then_some(event)
    })
}

impl ReadOnlyAddressBook for AddressBook {
    fn persons(&self) -> &[Person] {
        self.persons.as_slice()
    }

    fn events(&self) -> &[Event] {
        &self.events
    }
}

impl Display for AddressBook {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{{persons={}, events={}}}",
            std::any::type_name::<Self>(),
            self.person_list(),
            self.event_list()
        )
    }
}
