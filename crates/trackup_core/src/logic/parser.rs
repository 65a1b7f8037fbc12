//! Command-line parsing for user input.
//!
//! # Responsibility
//! - Split raw input into a command word and its arguments.
//! - Tokenize prefixed arguments (`n/NAME p/PHONE ...`) and build commands.
//!
//! # Invariants
//! - A prefix is only recognized at the start of the arguments or right
//!   after whitespace, so `en/` never matches as `n/`.
//! - Values are trimmed; the preamble is the text before the first prefix.
//! - Single-valued prefixes may appear at most once.

use crate::logic::commands::{
    AddCommand, AddEventCommand, ClearCommand, DeleteCommand, DeleteEventCommand, EditCommand,
    EditPersonDescriptor, ExitCommand, FindCommand, HelpCommand, ListCommand, ListEventsCommand,
    ParsedCommand, RemarkCommand,
};
use crate::logic::index::Index;
use crate::model::event::{Event, EventValidationError};
use crate::model::person::{Address, Email, FieldError, Name, Person, Phone, Tag};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeSet, HashMap};
use std::error::Error;
use std::fmt::{Display, Formatter};

static COMMAND_FORMAT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<word>\S+)(?P<args>.*)$").expect("valid command format regex")
});

/// Argument prefix such as `n/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl Display for Prefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix("n/");
pub const PREFIX_PHONE: Prefix = Prefix("p/");
pub const PREFIX_EMAIL: Prefix = Prefix("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix("a/");
pub const PREFIX_TAG: Prefix = Prefix("t/");
pub const PREFIX_REMARK: Prefix = Prefix("r/");
pub const PREFIX_TITLE: Prefix = Prefix("ti/");
pub const PREFIX_START: Prefix = Prefix("s/");
pub const PREFIX_END: Prefix = Prefix("en/");

/// Parse failure for user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input does not match the command grammar; carries the usage text.
    InvalidFormat { usage: &'static str },
    UnknownCommand(String),
    /// Index is not a positive integer.
    InvalidIndex(String),
    DuplicatePrefix(Vec<Prefix>),
    NothingToEdit,
    InvalidTimestamp { prefix: Prefix, value: String },
    Field(FieldError),
    Event(EventValidationError),
}

impl ParseError {
    /// Stable code for log metadata; never contains user input.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidFormat { .. } => "invalid_format",
            Self::UnknownCommand(_) => "unknown_command",
            Self::InvalidIndex(_) => "invalid_index",
            Self::DuplicatePrefix(_) => "duplicate_prefix",
            Self::NothingToEdit => "nothing_to_edit",
            Self::InvalidTimestamp { .. } => "invalid_timestamp",
            Self::Field(_) => "invalid_field",
            Self::Event(_) => "invalid_event",
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat { usage } => write!(f, "Invalid command format! \n{usage}"),
            Self::UnknownCommand(_) => f.write_str("Unknown command"),
            Self::InvalidIndex(_) => f.write_str("Index is not a non-zero unsigned integer."),
            Self::DuplicatePrefix(prefixes) => {
                let joined = prefixes
                    .iter()
                    .map(|prefix| prefix.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                write!(f, "Multiple values specified for the following single-valued field(s): {joined}")
            }
            Self::NothingToEdit => f.write_str(EditCommand::MESSAGE_NOT_EDITED),
            Self::InvalidTimestamp { prefix, value } => {
                write!(f, "{prefix} expects epoch milliseconds, got `{value}`")
            }
            Self::Field(err) => write!(f, "{err}"),
            Self::Event(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Field(err) => Some(err),
            Self::Event(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FieldError> for ParseError {
    fn from(value: FieldError) -> Self {
        Self::Field(value)
    }
}

impl From<EventValidationError> for ParseError {
    fn from(value: EventValidationError) -> Self {
        Self::Event(value)
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Tokenized arguments: preamble plus every value per prefix, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map_or(&[], Vec::as_slice)
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    /// Rejects any of `prefixes` that was given more than once.
    pub fn verify_no_duplicate_prefixes(&self, prefixes: &[Prefix]) -> ParseResult<()> {
        let duplicates = prefixes
            .iter()
            .copied()
            .filter(|prefix| self.all_values(*prefix).len() > 1)
            .collect::<Vec<_>>();
        if duplicates.is_empty() {
            Ok(())
        } else {
            Err(ParseError::DuplicatePrefix(duplicates))
        }
    }
}

/// Splits `args` on the given prefixes.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions = prefixes
        .iter()
        .flat_map(|prefix| {
            args.match_indices(prefix.as_str())
                .filter(|(start, _)| {
                    *start == 0 || args[..*start].ends_with(char::is_whitespace)
                })
                .map(move |(start, _)| (start, *prefix))
        })
        .collect::<Vec<_>>();
    positions.sort_by_key(|(start, _)| *start);

    let preamble_end = positions.first().map_or(args.len(), |(start, _)| *start);
    let mut multimap = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (position, (start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.as_str().len();
        let value_end = positions
            .get(position + 1)
            .map_or(args.len(), |(next_start, _)| *next_start);
        multimap
            .values
            .entry(*prefix)
            .or_default()
            .push(args[value_start..value_end].trim().to_string());
    }

    multimap
}

/// Parses a one-based positive index. Signs are rejected.
pub fn parse_index(value: &str) -> ParseResult<Index> {
    let trimmed = value.trim();
    Some(trimmed)
        .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|digits| digits.parse::<usize>().ok())
        .and_then(Index::from_one_based)
        .ok_or_else(|| ParseError::InvalidIndex(trimmed.to_string()))
}

/// Parses one full user input line into a command.
pub fn parse_command(input: &str) -> ParseResult<ParsedCommand> {
    let captures = COMMAND_FORMAT_RE
        .captures(input.trim())
        .ok_or(ParseError::InvalidFormat {
            usage: HelpCommand::MESSAGE_USAGE,
        })?;
    let word = &captures["word"];
    let args = &captures["args"];

    match word {
        AddCommand::COMMAND_WORD => parse_add(args).map(ParsedCommand::Add),
        EditCommand::COMMAND_WORD => parse_edit(args).map(ParsedCommand::Edit),
        DeleteCommand::COMMAND_WORD => {
            parse_index_only(args, DeleteCommand::MESSAGE_USAGE)
                .map(|index| ParsedCommand::Delete(DeleteCommand::new(index)))
        }
        FindCommand::COMMAND_WORD => parse_find(args).map(ParsedCommand::Find),
        ListCommand::COMMAND_WORD => Ok(ParsedCommand::List(ListCommand)),
        ClearCommand::COMMAND_WORD => Ok(ParsedCommand::Clear(ClearCommand)),
        RemarkCommand::COMMAND_WORD => parse_remark(args).map(ParsedCommand::Remark),
        AddEventCommand::COMMAND_WORD => parse_add_event(args).map(ParsedCommand::AddEvent),
        ListEventsCommand::COMMAND_WORD => Ok(ParsedCommand::ListEvents(ListEventsCommand)),
        DeleteEventCommand::COMMAND_WORD => {
            parse_index_only(args, DeleteEventCommand::MESSAGE_USAGE)
                .map(|index| ParsedCommand::DeleteEvent(DeleteEventCommand::new(index)))
        }
        HelpCommand::COMMAND_WORD => Ok(ParsedCommand::Help(HelpCommand)),
        ExitCommand::COMMAND_WORD => Ok(ParsedCommand::Exit(ExitCommand)),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

fn parse_index_only(args: &str, usage: &'static str) -> ParseResult<Index> {
    parse_index(args).map_err(|_| ParseError::InvalidFormat { usage })
}

fn parse_add(args: &str) -> ParseResult<AddCommand> {
    let usage = AddCommand::MESSAGE_USAGE;
    let map = tokenize(
        args,
        &[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS, PREFIX_TAG],
    );
    let required = [PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS];
    if !map.preamble().is_empty() || !required.iter().all(|prefix| map.contains(*prefix)) {
        return Err(ParseError::InvalidFormat { usage });
    }
    map.verify_no_duplicate_prefixes(&required)?;

    let required_value = |prefix| map.value(prefix).ok_or(ParseError::InvalidFormat { usage });
    let person = Person::new(
        Name::parse(required_value(PREFIX_NAME)?)?,
        Phone::parse(required_value(PREFIX_PHONE)?)?,
        Email::parse(required_value(PREFIX_EMAIL)?)?,
        Address::parse(required_value(PREFIX_ADDRESS)?)?,
        parse_tags(map.all_values(PREFIX_TAG))?,
    );
    Ok(AddCommand::new(person))
}

fn parse_edit(args: &str) -> ParseResult<EditCommand> {
    let map = tokenize(
        args,
        &[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS, PREFIX_TAG],
    );
    let index = parse_index_only(map.preamble(), EditCommand::MESSAGE_USAGE)?;
    map.verify_no_duplicate_prefixes(&[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS])?;

    let descriptor = EditPersonDescriptor {
        name: map.value(PREFIX_NAME).map(Name::parse).transpose()?,
        phone: map.value(PREFIX_PHONE).map(Phone::parse).transpose()?,
        email: map.value(PREFIX_EMAIL).map(Email::parse).transpose()?,
        address: map.value(PREFIX_ADDRESS).map(Address::parse).transpose()?,
        tags: parse_tags_for_edit(map.all_values(PREFIX_TAG))?,
    };
    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NothingToEdit);
    }
    Ok(EditCommand::new(index, descriptor))
}

fn parse_find(args: &str) -> ParseResult<FindCommand> {
    let keywords = args
        .split_whitespace()
        .map(str::to_string)
        .collect::<Vec<_>>();
    if keywords.is_empty() {
        return Err(ParseError::InvalidFormat {
            usage: FindCommand::MESSAGE_USAGE,
        });
    }
    Ok(FindCommand::new(keywords))
}

fn parse_remark(args: &str) -> ParseResult<RemarkCommand> {
    let usage = RemarkCommand::MESSAGE_USAGE;
    let map = tokenize(args, &[PREFIX_REMARK]);
    let index = parse_index_only(map.preamble(), usage)?;
    map.verify_no_duplicate_prefixes(&[PREFIX_REMARK])?;
    let remark = map
        .value(PREFIX_REMARK)
        .ok_or(ParseError::InvalidFormat { usage })?;
    Ok(RemarkCommand::new(index, remark))
}

fn parse_add_event(args: &str) -> ParseResult<AddEventCommand> {
    let usage = AddEventCommand::MESSAGE_USAGE;
    let map = tokenize(args, &[PREFIX_TITLE, PREFIX_START, PREFIX_END]);
    if !map.preamble().is_empty() || !map.contains(PREFIX_TITLE) || !map.contains(PREFIX_START) {
        return Err(ParseError::InvalidFormat { usage });
    }
    map.verify_no_duplicate_prefixes(&[PREFIX_TITLE, PREFIX_START, PREFIX_END])?;

    let title = map
        .value(PREFIX_TITLE)
        .ok_or(ParseError::InvalidFormat { usage })?;
    let start = map
        .value(PREFIX_START)
        .ok_or(ParseError::InvalidFormat { usage })
        .and_then(|value| parse_epoch_ms(PREFIX_START, value))?;
    let end = map
        .value(PREFIX_END)
        .map(|value| parse_epoch_ms(PREFIX_END, value))
        .transpose()?;

    Ok(AddEventCommand::new(Event::new(title, start, end)?))
}

fn parse_epoch_ms(prefix: Prefix, value: &str) -> ParseResult<i64> {
    value
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidTimestamp {
            prefix,
            value: value.to_string(),
        })
}

fn parse_tags(values: &[String]) -> ParseResult<BTreeSet<Tag>> {
    values
        .iter()
        .map(|value| Tag::parse(value.as_str()).map_err(ParseError::from))
        .collect()
}

/// A lone empty `t/` clears tags; no `t/` at all leaves them untouched.
fn parse_tags_for_edit(values: &[String]) -> ParseResult<Option<BTreeSet<Tag>>> {
    match values {
        [] => Ok(None),
        [only] if only.is_empty() => Ok(Some(BTreeSet::new())),
        values => parse_tags(values).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        parse_command, parse_index, tokenize, ParseError, PREFIX_END, PREFIX_NAME, PREFIX_REMARK,
        PREFIX_TAG,
    };
    use crate::logic::commands::{DeleteCommand, ListCommand, ParsedCommand, RemarkCommand};
    use crate::logic::index::Index;
    use crate::model::person::FieldError;

    fn first() -> Index {
        Index::from_one_based(1).unwrap()
    }

    #[test]
    fn tokenize_splits_preamble_and_values() {
        let map = tokenize(" 1 n/Alice  t/friends t/ colleague ", &[PREFIX_NAME, PREFIX_TAG]);
        assert_eq!(map.preamble(), "1");
        assert_eq!(map.value(PREFIX_NAME), Some("Alice"));
        assert_eq!(map.all_values(PREFIX_TAG), ["friends", "colleague"]);
    }

    #[test]
    fn tokenize_ignores_prefix_inside_words() {
        let map = tokenize(" ti/Sync en/5 n/x", &[PREFIX_NAME, PREFIX_END]);
        assert_eq!(map.preamble(), "ti/Sync");
        assert_eq!(map.value(PREFIX_END), Some("5"));
        assert_eq!(map.value(PREFIX_NAME), Some("x"));

        let glued = tokenize(" 1 r/a/b", &[PREFIX_REMARK]);
        assert_eq!(glued.value(PREFIX_REMARK), Some("a/b"));
    }

    #[test]
    fn parse_index_rejects_zero_and_signs() {
        assert_eq!(parse_index(" 1 ").unwrap(), first());
        assert!(matches!(parse_index("0"), Err(ParseError::InvalidIndex(_))));
        assert!(matches!(parse_index("-1"), Err(ParseError::InvalidIndex(_))));
        assert!(matches!(parse_index("+1"), Err(ParseError::InvalidIndex(_))));
        assert!(matches!(parse_index("1a"), Err(ParseError::InvalidIndex(_))));
    }

    #[test]
    fn parses_remark_with_and_without_text() {
        assert_eq!(
            parse_command("remark 1 r/ Likes to swim.").unwrap(),
            ParsedCommand::Remark(RemarkCommand::new(first(), "Likes to swim."))
        );
        assert_eq!(
            parse_command("remark 1 r/").unwrap(),
            ParsedCommand::Remark(RemarkCommand::new(first(), ""))
        );
    }

    #[test]
    fn remark_requires_index_and_prefix() {
        let usage = RemarkCommand::MESSAGE_USAGE;
        assert_eq!(
            parse_command("remark r/ hello").unwrap_err(),
            ParseError::InvalidFormat { usage }
        );
        assert_eq!(
            parse_command("remark 1").unwrap_err(),
            ParseError::InvalidFormat { usage }
        );
        assert!(matches!(
            parse_command("remark 1 r/a r/b").unwrap_err(),
            ParseError::DuplicatePrefix(_)
        ));
    }

    #[test]
    fn parses_simple_words_and_rejects_unknown() {
        assert_eq!(parse_command("list").unwrap(), ParsedCommand::List(ListCommand));
        assert_eq!(
            parse_command("  delete 2 ").unwrap(),
            ParsedCommand::Delete(DeleteCommand::new(Index::from_one_based(2).unwrap()))
        );
        assert!(matches!(
            parse_command("unknownCommand"),
            Err(ParseError::UnknownCommand(_))
        ));
        assert!(matches!(
            parse_command(""),
            Err(ParseError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn add_reports_field_errors() {
        let err = parse_command("add n/Bob* p/911 e/bob@example.com a/Street 1").unwrap_err();
        assert!(matches!(err, ParseError::Field(FieldError::InvalidName(_))));

        let missing = parse_command("add n/Bob p/911 e/bob@example.com").unwrap_err();
        assert!(matches!(missing, ParseError::InvalidFormat { .. }));
    }

    #[test]
    fn edit_requires_a_field() {
        assert_eq!(
            parse_command("edit 1").unwrap_err(),
            ParseError::NothingToEdit
        );
        match parse_command("edit 1 t/").unwrap() {
            ParsedCommand::Edit(_) => {}
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn event_parses_window_and_validates_it() {
        match parse_command("event ti/Sync s/100 en/200").unwrap() {
            ParsedCommand::AddEvent(command) => {
                assert_eq!(command.event().title, "Sync");
                assert_eq!(command.event().end_epoch_ms, Some(200));
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(matches!(
            parse_command("event ti/Sync s/200 en/100"),
            Err(ParseError::Event(_))
        ));
        assert!(matches!(
            parse_command("event ti/Sync s/noon"),
            Err(ParseError::InvalidTimestamp { .. })
        ));
    }
}
