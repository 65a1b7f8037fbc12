//! In-memory model state shared by command execution.
//!
//! # Responsibility
//! - Wrap the `AddressBook` with the currently displayed person listing.
//! - Track whether the address book changed since the last save.
//!
//! # Invariants
//! - Indices handed to commands refer to `filtered_person_list()`.
//! - `is_dirty()` flips on every successful mutation and is cleared only by
//!   `mark_saved()`.

use crate::model::address_book::{AddressBook, ReadOnlyAddressBook};
use crate::model::event::Event;
use crate::model::list_view::ListView;
use crate::model::person::Person;
use crate::model::unique_person_list::ModelError;

/// Predicate deciding which persons appear in the displayed listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PersonFilter {
    #[default]
    All,
    /// Case-insensitive whole-word match against any name word.
    NameKeywords(Vec<String>),
}

impl PersonFilter {
    pub fn matches(&self, person: &Person) -> bool {
        match self {
            Self::All => true,
            Self::NameKeywords(keywords) => person
                .name
                .as_str()
                .split_whitespace()
                .any(|word| keywords.iter().any(|keyword| keyword.eq_ignore_ascii_case(word))),
        }
    }
}

#[derive(Debug, Default)]
pub struct Model {
    address_book: AddressBook,
    filter: PersonFilter,
    dirty: bool,
}

impl Model {
    pub fn new(address_book: AddressBook) -> Self {
        Self {
            address_book,
            filter: PersonFilter::All,
            dirty: false,
        }
    }

    pub fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    /// Replaces the whole address book; see `AddressBook::reset_data`.
    pub fn set_address_book(
        &mut self,
        source: &(impl ReadOnlyAddressBook + ?Sized),
    ) -> Result<(), ModelError> {
        self.address_book.reset_data(source)?;
        self.dirty = true;
        Ok(())
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.address_book.has_person(person)
    }

    pub fn add_person(&mut self, person: Person) -> Result<(), ModelError> {
        self.address_book.add_person(person)?;
        self.filter = PersonFilter::All;
        self.dirty = true;
        Ok(())
    }

    pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<(), ModelError> {
        self.address_book.set_person(target, edited)?;
        self.dirty = true;
        Ok(())
    }

    pub fn delete_person(&mut self, target: &Person) -> Result<Person, ModelError> {
        let removed = self.address_book.remove_person(target)?;
        self.dirty = true;
        Ok(removed)
    }

    pub fn add_event(&mut self, event: Event) -> Result<(), ModelError> {
        self.address_book.add_event(event)?;
        self.dirty = true;
        Ok(())
    }

    pub fn delete_event(&mut self, target: &Event) -> Result<Event, ModelError> {
        let removed = self.address_book.remove_event(target)?;
        self.dirty = true;
        Ok(removed)
    }

    pub fn event_list(&self) -> ListView<'_, Event> {
        self.address_book.event_list()
    }

    /// Persons currently shown, in address-book order.
    pub fn filtered_person_list(&self) -> Vec<&Person> {
        self.address_book
            .person_list()
            .into_iter()
            .filter(|person| self.filter.matches(person))
            .collect()
    }

    pub fn filter(&self) -> &PersonFilter {
        &self.filter
    }

    pub fn update_filter(&mut self, filter: PersonFilter) {
        self.filter = filter;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::{Model, PersonFilter};
    use crate::model::address_book::AddressBook;
    use crate::model::person::{Address, Email, Name, Person, Phone};

    fn person(name: &str) -> Person {
        Person::new(
            Name::parse(name).unwrap(),
            Phone::parse("9482224").unwrap(),
            Email::parse("werner@example.com").unwrap(),
            Address::parse("michegan ave").unwrap(),
            [],
        )
    }

    #[test]
    fn keyword_filter_matches_whole_words_case_insensitively() {
        let filter = PersonFilter::NameKeywords(vec!["alice".to_string(), "Bob".to_string()]);
        assert!(filter.matches(&person("Alice Pauline")));
        assert!(filter.matches(&person("Bob Choo")));
        assert!(!filter.matches(&person("Alicia Keys")));
    }

    #[test]
    fn filtered_list_and_dirty_tracking() {
        let mut model = Model::new(AddressBook::new());
        assert!(!model.is_dirty());

        model.add_person(person("Alice Pauline")).unwrap();
        model.add_person(person("Daniel Meier")).unwrap();
        assert!(model.is_dirty());

        model.update_filter(PersonFilter::NameKeywords(vec!["meier".to_string()]));
        let shown = model.filtered_person_list();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].name.as_str(), "Daniel Meier");

        model.mark_saved();
        assert!(!model.is_dirty());
        assert!(model.add_person(person("Alice Pauline")).is_err());
        assert!(!model.is_dirty());
    }
}
