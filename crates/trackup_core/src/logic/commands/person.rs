//! Person commands: `add`, `edit`, `delete`, `find`, `list`, `clear`.

use crate::logic::commands::{Command, CommandError, CommandResult};
use crate::logic::index::Index;
use crate::model::address_book::AddressBook;
use crate::model::model_manager::{Model, PersonFilter};
use crate::model::person::{Address, Email, Name, Person, Phone, Tag};
use std::collections::BTreeSet;

fn person_at(model: &Model, index: Index) -> Result<Person, CommandError> {
    model
        .filtered_person_list()
        .get(index.zero_based())
        .map(|person| (*person).clone())
        .ok_or(CommandError::InvalidPersonIndex)
}

/// Adds a person to the address book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    person: Person,
}

impl AddCommand {
    pub const COMMAND_WORD: &'static str = "add";
    pub const MESSAGE_USAGE: &'static str = "add: Adds a person to the address book.\n\
        Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS [t/TAG]...\n\
        Example: add n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2, #02-25 t/friends";

    pub fn new(person: Person) -> Self {
        Self { person }
    }
}

impl Command for AddCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        if model.has_person(&self.person) {
            return Err(CommandError::DuplicatePerson);
        }
        model.add_person(self.person.clone())?;
        Ok(CommandResult::new(format!("New person added: {}", self.person)))
    }
}

/// Fields to overwrite on an existing person; `None` keeps the old value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPersonDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    /// `Some(empty)` clears all tags.
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditPersonDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.tags.is_some()
    }

    /// Builds the edited copy of `person`. The remark is carried over.
    pub fn apply(&self, person: &Person) -> Person {
        Person {
            name: self.name.clone().unwrap_or_else(|| person.name.clone()),
            phone: self.phone.clone().unwrap_or_else(|| person.phone.clone()),
            email: self.email.clone().unwrap_or_else(|| person.email.clone()),
            address: self.address.clone().unwrap_or_else(|| person.address.clone()),
            tags: self.tags.clone().unwrap_or_else(|| person.tags.clone()),
            remark: person.remark.clone(),
        }
    }
}

/// Edits the person at `index` in the displayed listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    index: Index,
    descriptor: EditPersonDescriptor,
}

impl EditCommand {
    pub const COMMAND_WORD: &'static str = "edit";
    pub const MESSAGE_USAGE: &'static str = "edit: Edits the details of the person identified \
        by the index number used in the displayed person list. \
        Existing values will be overwritten by the input values.\n\
        Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [t/TAG]...\n\
        Example: edit 1 p/91234567 e/johndoe@example.com";
    pub const MESSAGE_NOT_EDITED: &'static str = "At least one field to edit must be provided.";

    pub fn new(index: Index, descriptor: EditPersonDescriptor) -> Self {
        Self { index, descriptor }
    }
}

impl Command for EditCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = person_at(model, self.index)?;
        let edited = self.descriptor.apply(&target);

        if !target.is_same_person(&edited) && model.has_person(&edited) {
            return Err(CommandError::DuplicatePerson);
        }

        model.set_person(&target, edited.clone())?;
        model.update_filter(PersonFilter::All);
        Ok(CommandResult::new(format!("Edited Person: {edited}")))
    }
}

/// Deletes the person at `index` in the displayed listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    index: Index,
}

impl DeleteCommand {
    pub const COMMAND_WORD: &'static str = "delete";
    pub const MESSAGE_USAGE: &'static str = "delete: Deletes the person identified by the index \
        number used in the displayed person list.\n\
        Parameters: INDEX (must be a positive integer)\n\
        Example: delete 1";

    pub fn new(index: Index) -> Self {
        Self { index }
    }
}

impl Command for DeleteCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = person_at(model, self.index)?;
        let removed = model.delete_person(&target)?;
        Ok(CommandResult::new(format!("Deleted Person: {removed}")))
    }
}

/// Narrows the listing to persons whose name contains any keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    keywords: Vec<String>,
}

impl FindCommand {
    pub const COMMAND_WORD: &'static str = "find";
    pub const MESSAGE_USAGE: &'static str = "find: Finds all persons whose names contain any of \
        the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
        Parameters: KEYWORD [MORE_KEYWORDS]...\n\
        Example: find alice bob charlie";

    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }
}

impl Command for FindCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.update_filter(PersonFilter::NameKeywords(self.keywords.clone()));
        let shown = model.filtered_person_list().len();
        Ok(CommandResult::new(format!("{shown} persons listed!")))
    }
}

/// Shows every person.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCommand;

impl ListCommand {
    pub const COMMAND_WORD: &'static str = "list";
}

impl Command for ListCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.update_filter(PersonFilter::All);
        Ok(CommandResult::new("Listed all persons"))
    }
}

/// Empties the address book, events included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearCommand;

impl ClearCommand {
    pub const COMMAND_WORD: &'static str = "clear";
}

impl Command for ClearCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.set_address_book(&AddressBook::new())?;
        model.update_filter(PersonFilter::All);
        Ok(CommandResult::new("Address book has been cleared!"))
    }
}

#[cfg(test)]
mod tests {
    use super::{AddCommand, DeleteCommand, EditCommand, EditPersonDescriptor, FindCommand};
    use crate::logic::commands::{Command, CommandError};
    use crate::logic::index::Index;
    use crate::model::address_book::AddressBook;
    use crate::model::model_manager::Model;
    use crate::model::person::{Address, Email, Name, Person, Phone, Tag};

    fn person(name: &str, phone: &str) -> Person {
        Person::new(
            Name::parse(name).unwrap(),
            Phone::parse(phone).unwrap(),
            Email::parse("person@example.com").unwrap(),
            Address::parse("10th street").unwrap(),
            [Tag::parse("friends").unwrap()],
        )
    }

    fn first() -> Index {
        Index::from_one_based(1).unwrap()
    }

    fn model_with(persons: &[Person]) -> Model {
        let mut model = Model::new(AddressBook::new());
        for person in persons {
            model.add_person(person.clone()).unwrap();
        }
        model.mark_saved();
        model
    }

    #[test]
    fn add_rejects_duplicate_without_mutation() {
        let alice = person("Alice Pauline", "94351253");
        let mut model = model_with(&[alice.clone()]);

        let err = AddCommand::new(person("Alice Pauline", "99999999"))
            .execute(&mut model)
            .unwrap_err();
        assert_eq!(err, CommandError::DuplicatePerson);
        assert!(!model.is_dirty());
    }

    #[test]
    fn edit_overwrites_given_fields_only() {
        let alice = person("Alice Pauline", "94351253");
        let mut model = model_with(&[alice.clone()]);
        let descriptor = EditPersonDescriptor {
            phone: Some(Phone::parse("91234567").unwrap()),
            tags: Some(Default::default()),
            ..Default::default()
        };

        let result = EditCommand::new(first(), descriptor)
            .execute(&mut model)
            .unwrap();
        assert!(result.feedback.starts_with("Edited Person: Alice Pauline"));

        let stored = model.address_book().person_list()[0].clone();
        assert_eq!(stored.phone.as_str(), "91234567");
        assert!(stored.tags.is_empty());
        assert_eq!(stored.address, alice.address);
    }

    #[test]
    fn edit_into_existing_identity_is_rejected() {
        let mut model = model_with(&[
            person("Alice Pauline", "94351253"),
            person("Benson Meier", "98765432"),
        ]);
        let descriptor = EditPersonDescriptor {
            name: Some(Name::parse("Benson Meier").unwrap()),
            ..Default::default()
        };

        let err = EditCommand::new(first(), descriptor)
            .execute(&mut model)
            .unwrap_err();
        assert_eq!(err, CommandError::DuplicatePerson);
    }

    #[test]
    fn delete_uses_filtered_listing() {
        let mut model = model_with(&[
            person("Alice Pauline", "94351253"),
            person("Benson Meier", "98765432"),
        ]);
        FindCommand::new(vec!["Benson".to_string()])
            .execute(&mut model)
            .unwrap();

        let result = DeleteCommand::new(first()).execute(&mut model).unwrap();
        assert!(result.feedback.contains("Benson Meier"));
        assert_eq!(model.address_book().person_list().len(), 1);

        let out_of_range = DeleteCommand::new(Index::from_one_based(2).unwrap());
        assert_eq!(
            out_of_range.execute(&mut model).unwrap_err(),
            CommandError::InvalidPersonIndex
        );
    }
}
