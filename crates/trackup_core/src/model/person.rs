//! Person domain model and its validated field types.
//!
//! # Responsibility
//! - Define the contact record stored by the address book.
//! - Validate every user-facing field at construction time.
//!
//! # Invariants
//! - Field values are only constructible through their `parse` functions
//!   (or serde, which routes through the same validation).
//! - Identity is decided by `Person::is_same_person`, which compares names
//!   only; full equality compares every field.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("valid name regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3,}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9]+(?:[+_.\-][A-Za-z0-9]+)*@(?:[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*\.)*[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*$",
    )
    .expect("valid email regex")
});
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid tag regex"));

/// Field-level validation failure for person attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    InvalidName(String),
    InvalidPhone(String),
    InvalidEmail(String),
    InvalidAddress(String),
    InvalidTag(String),
}

impl FieldError {
    /// User-facing constraint text for the offending field.
    pub fn constraint(&self) -> &'static str {
        match self {
            Self::InvalidName(_) => {
                "Names should only contain alphanumeric characters and spaces, and it should not be blank"
            }
            Self::InvalidPhone(_) => {
                "Phone numbers should only contain numbers, and it should be at least 3 digits long"
            }
            Self::InvalidEmail(_) => {
                "Emails should be of the format local-part@domain, where the local part uses \
                 alphanumerics and +_.- (not at the start or end) and the domain ends with a \
                 label of at least 2 characters"
            }
            Self::InvalidAddress(_) => "Addresses can take any values, and it should not be blank",
            Self::InvalidTag(_) => "Tags names should be alphanumeric",
        }
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Self::InvalidName(value)
            | Self::InvalidPhone(value)
            | Self::InvalidEmail(value)
            | Self::InvalidAddress(value)
            | Self::InvalidTag(value) => value,
        };
        write!(f, "{} (got `{value}`)", self.constraint())
    }
}

impl Error for FieldError {}

// Shared read/convert surface for the string-backed field types. Validation
// lives in each type's `parse`.
macro_rules! string_field {
    ($ty:ident) => {
        impl $ty {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Display for $ty {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = FieldError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.0
            }
        }
    };
}

/// Contact name; the identity field of a person.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn parse(value: impl Into<String>) -> Result<Self, FieldError> {
        let value = value.into();
        if !NAME_RE.is_match(&value) {
            return Err(FieldError::InvalidName(value));
        }
        Ok(Self(value))
    }
}
string_field!(Name);

/// Phone number, digits only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn parse(value: impl Into<String>) -> Result<Self, FieldError> {
        let value = value.into();
        if !PHONE_RE.is_match(&value) {
            return Err(FieldError::InvalidPhone(value));
        }
        Ok(Self(value))
    }
}
string_field!(Phone);

/// Email address in `local-part@domain` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn parse(value: impl Into<String>) -> Result<Self, FieldError> {
        let value = value.into();
        let last_label_ok = value
            .rsplit(|c: char| c == '@' || c == '.')
            .next()
            .is_some_and(|label| label.len() >= 2);
        if !EMAIL_RE.is_match(&value) || !last_label_ok {
            return Err(FieldError::InvalidEmail(value));
        }
        Ok(Self(value))
    }
}
string_field!(Email);

/// Free-form postal address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub fn parse(value: impl Into<String>) -> Result<Self, FieldError> {
        let value = value.into();
        if value.trim().is_empty() || value.starts_with(char::is_whitespace) {
            return Err(FieldError::InvalidAddress(value));
        }
        Ok(Self(value))
    }
}
string_field!(Address);

/// Single alphanumeric tag.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub fn parse(value: impl Into<String>) -> Result<Self, FieldError> {
        let value = value.into();
        if !TAG_RE.is_match(&value) {
            return Err(FieldError::InvalidTag(value));
        }
        Ok(Self(value))
    }
}
string_field!(Tag);

/// Free-text remark attached to a person. Empty means "no remark".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Remark(String);

impl Remark {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Remark {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Contact record stored in the address book.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    /// Ordered set so equality and hashing stay deterministic.
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
    #[serde(default)]
    pub remark: Remark,
}

impl Person {
    /// Creates a person with an empty remark.
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags: tags.into_iter().collect(),
            remark: Remark::default(),
        }
    }

    /// Returns a copy of this person carrying `remark`.
    pub fn with_remark(mut self, remark: Remark) -> Self {
        self.remark = remark;
        self
    }

    /// Returns true when both records denote the same contact.
    ///
    /// Weaker than `==`: only identity fields (the name) are compared, so
    /// phone, email, address, tags and remark may differ.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Remark: {}; Tags: ",
            self.name, self.phone, self.email, self.address, self.remark
        )?;
        for tag in &self.tags {
            write!(f, "[{tag}]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Address, Email, FieldError, Name, Person, Phone, Remark, Tag};

    fn person(name: &str, address: &str, tags: &[&str]) -> Person {
        Person::new(
            Name::parse(name).unwrap(),
            Phone::parse("94351253").unwrap(),
            Email::parse("alice@example.com").unwrap(),
            Address::parse(address).unwrap(),
            tags.iter().map(|tag| Tag::parse(*tag).unwrap()),
        )
    }

    #[test]
    fn name_rejects_blank_and_symbols() {
        assert!(Name::parse("Alice Pauline").is_ok());
        assert!(matches!(Name::parse(""), Err(FieldError::InvalidName(_))));
        assert!(matches!(Name::parse(" Alice"), Err(FieldError::InvalidName(_))));
        assert!(matches!(Name::parse("peter*"), Err(FieldError::InvalidName(_))));
    }

    #[test]
    fn phone_requires_three_digits() {
        assert!(Phone::parse("911").is_ok());
        assert!(Phone::parse("91").is_err());
        assert!(Phone::parse("9011p041").is_err());
    }

    #[test]
    fn email_validates_local_part_and_domain() {
        assert!(Email::parse("PeterJack_1190@example.com").is_ok());
        assert!(Email::parse("a@bc").is_ok());
        assert!(Email::parse("peter.jack@my-mail.example.org").is_ok());

        assert!(Email::parse("@example.com").is_err());
        assert!(Email::parse("peterjackexample.com").is_err());
        assert!(Email::parse("-peter@example.com").is_err());
        assert!(Email::parse("peter@example.c").is_err());
        assert!(Email::parse("peter@-example.com").is_err());
    }

    #[test]
    fn address_and_tag_rules() {
        assert!(Address::parse("Blk 456, Den Road, #01-355").is_ok());
        assert!(Address::parse("   ").is_err());
        assert!(Tag::parse("friends").is_ok());
        assert!(Tag::parse("best friend").is_err());
    }

    #[test]
    fn same_person_ignores_non_identity_fields() {
        let alice = person("Alice Pauline", "123, Jurong West Ave 6", &["friends"]);
        let edited = person("Alice Pauline", "Block 123, Bobby Street 3", &["husband"])
            .with_remark(Remark::new("Likes to swim."));

        assert!(alice.is_same_person(&edited));
        assert_ne!(alice, edited);
        assert!(!alice.is_same_person(&person("Bob Choo", "123, Jurong West Ave 6", &[])));
    }

    #[test]
    fn display_lists_tags_in_order() {
        let alice = person("Alice Pauline", "123, Jurong West Ave 6", &["owesMoney", "friends"]);
        assert_eq!(
            alice.to_string(),
            "Alice Pauline; Phone: 94351253; Email: alice@example.com; \
             Address: 123, Jurong West Ave 6; Remark: ; Tags: [friends][owesMoney]"
        );
    }
}
