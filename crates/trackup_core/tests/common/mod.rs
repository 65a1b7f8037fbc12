#![allow(dead_code)]

use trackup_core::{Address, AddressBook, Email, Name, Person, Phone, Remark, Tag};

pub const VALID_ADDRESS_BOB: &str = "Block 123, Bobby Street 3";
pub const VALID_TAG_HUSBAND: &str = "husband";

/// Fluent builder for test persons.
#[derive(Debug, Clone)]
pub struct PersonBuilder {
    person: Person,
}

impl PersonBuilder {
    pub fn new() -> Self {
        Self::of(&Person::new(
            Name::parse("Amy Bee").unwrap(),
            Phone::parse("85355255").unwrap(),
            Email::parse("amy@gmail.com").unwrap(),
            Address::parse("123, Jurong West Ave 6, #08-111").unwrap(),
            [],
        ))
    }

    pub fn of(person: &Person) -> Self {
        Self {
            person: person.clone(),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.person.name = Name::parse(name).unwrap();
        self
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.person.phone = Phone::parse(phone).unwrap();
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.person.email = Email::parse(email).unwrap();
        self
    }

    pub fn with_address(mut self, address: &str) -> Self {
        self.person.address = Address::parse(address).unwrap();
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.person.tags = tags.iter().map(|tag| Tag::parse(*tag).unwrap()).collect();
        self
    }

    pub fn with_remark(mut self, remark: &str) -> Self {
        self.person.remark = Remark::new(remark);
        self
    }

    pub fn build(self) -> Person {
        self.person
    }
}

pub fn alice() -> Person {
    PersonBuilder::new()
        .with_name("Alice Pauline")
        .with_address("123, Jurong West Ave 6, #08-111")
        .with_email("alice@example.com")
        .with_phone("94351253")
        .with_tags(&["friends"])
        .build()
}

pub fn benson() -> Person {
    PersonBuilder::new()
        .with_name("Benson Meier")
        .with_address("311, Clementi Ave 2, #02-25")
        .with_email("johnd@example.com")
        .with_phone("98765432")
        .with_tags(&["owesMoney", "friends"])
        .build()
}

pub fn carl() -> Person {
    PersonBuilder::new()
        .with_name("Carl Kurz")
        .with_phone("95352563")
        .with_email("heinz@example.com")
        .with_address("wall street")
        .build()
}

pub fn daniel() -> Person {
    PersonBuilder::new()
        .with_name("Daniel Meier")
        .with_phone("87652533")
        .with_email("cornelia@example.com")
        .with_address("10th street")
        .with_tags(&["friends"])
        .build()
}

pub fn typical_persons() -> Vec<Person> {
    vec![alice(), benson(), carl(), daniel()]
}

pub fn typical_address_book() -> AddressBook {
    let mut book = AddressBook::new();
    for person in typical_persons() {
        book.add_person(person).unwrap();
    }
    book
}
