//! Ordered person list that forbids identity duplicates.
//!
//! # Invariants
//! - No two stored persons satisfy `Person::is_same_person`.
//! - Insertion order is preserved; replacements keep the slot position.
//! - Every mutation validates before touching storage, so a failed call
//!   leaves the list unchanged.

use crate::model::event::EventId;
use crate::model::person::{Name, Person};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Model-layer error for aggregate mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Operation would result in two persons with the same identity.
    DuplicatePerson(Name),
    /// Target person is not in the list.
    PersonNotFound(Name),
    /// Operation would result in two events with the same id.
    DuplicateEvent(EventId),
    /// Target event is not in the list.
    EventNotFound(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicatePerson(name) => {
                write!(f, "operation would result in duplicate persons: {name}")
            }
            Self::PersonNotFound(name) => write!(f, "person not found: {name}"),
            Self::DuplicateEvent(id) => {
                write!(f, "operation would result in duplicate events: {id}")
            }
            Self::EventNotFound(title) => write!(f, "event not found: {title}"),
        }
    }
}

impl Error for ModelError {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UniquePersonList {
    persons: Vec<Person>,
}

impl UniquePersonList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if an identity match for `person` is stored.
    pub fn contains(&self, person: &Person) -> bool {
        self.persons.iter().any(|stored| stored.is_same_person(person))
    }

    pub fn add(&mut self, person: Person) -> Result<(), ModelError> {
        if self.contains(&person) {
            return Err(ModelError::DuplicatePerson(person.name));
        }
        self.persons.push(person);
        Ok(())
    }

    /// Replaces `target` with `edited` in place.
    ///
    /// `edited` may keep the identity of `target`, but must not collide with
    /// any other stored person.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<(), ModelError> {
        let position = self
            .persons
            .iter()
            .position(|stored| stored == target)
            .ok_or_else(|| ModelError::PersonNotFound(target.name.clone()))?;

        if !target.is_same_person(&edited) && self.contains(&edited) {
            return Err(ModelError::DuplicatePerson(edited.name));
        }

        self.persons[position] = edited;
        Ok(())
    }

    /// Removes the person equal to `target`.
    pub fn remove(&mut self, target: &Person) -> Result<Person, ModelError> {
        let position = self
            .persons
            .iter()
            .position(|stored| stored == target)
            .ok_or_else(|| ModelError::PersonNotFound(target.name.clone()))?;
        Ok(self.persons.remove(position))
    }

    /// Replaces the whole list after checking `replacement` is duplicate-free.
    pub fn set_persons(&mut self, replacement: Vec<Person>) -> Result<(), ModelError> {
        if let Some(duplicate) = first_duplicate(&replacement) {
            return Err(ModelError::DuplicatePerson(duplicate.name.clone()));
        }
        self.persons = replacement;
        Ok(())
    }

    pub fn as_slice(&self) -> &[Person] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }
}

/// Returns the later member of the first identity-duplicate pair, if any.
pub fn first_duplicate(persons: &[Person]) -> Option<&Person> {
    persons.iter().enumerate().find_map(|(position, person)| {
        persons[..position]
            .iter()
            .any(|earlier| earlier.is_same_person(person))
            .then_some(person)
    })
}
