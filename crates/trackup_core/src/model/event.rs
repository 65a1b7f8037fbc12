//! Event domain model.
//!
//! # Responsibility
//! - Define the calendar entries tracked next to contacts.
//! - Validate title and time window on every construction path.
//!
//! # Invariants
//! - `id` is stable and never reused for another event.
//! - `title` is never blank.
//! - `end_epoch_ms` is not earlier than `start_epoch_ms` when set.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for an event.
pub type EventId = Uuid;

/// Validation errors for event construction and deserialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventValidationError {
    NilId,
    BlankTitle,
    InvalidWindow { start: i64, end: i64 },
}

impl Display for EventValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "event id must not be nil"),
            Self::BlankTitle => write!(f, "event title must not be blank"),
            Self::InvalidWindow { start, end } => {
                write!(f, "event end ({end}) must be >= event start ({start})")
            }
        }
    }
}

impl Error for EventValidationError {}

/// Calendar entry with a point or range time window.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "EventRecord")]
pub struct Event {
    pub id: EventId,
    pub title: String,
    /// Unix epoch milliseconds.
    pub start_epoch_ms: i64,
    /// Unix epoch milliseconds; `None` for point events.
    pub end_epoch_ms: Option<i64>,
}

impl Event {
    /// Creates a validated event with a generated stable ID.
    pub fn new(
        title: impl Into<String>,
        start_epoch_ms: i64,
        end_epoch_ms: Option<i64>,
    ) -> Result<Self, EventValidationError> {
        Self::with_id(Uuid::new_v4(), title, start_epoch_ms, end_epoch_ms)
    }

    /// Creates a validated event with a caller-provided ID.
    ///
    /// Used by storage load paths where identity already exists.
    pub fn with_id(
        id: EventId,
        title: impl Into<String>,
        start_epoch_ms: i64,
        end_epoch_ms: Option<i64>,
    ) -> Result<Self, EventValidationError> {
        let event = Self {
            id,
            title: title.into(),
            start_epoch_ms,
            end_epoch_ms,
        };
        event.validate()?;
        Ok(event)
    }

    /// Checks the invariants listed in the module docs.
    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.id.is_nil() {
            return Err(EventValidationError::NilId);
        }
        if self.title.trim().is_empty() {
            return Err(EventValidationError::BlankTitle);
        }
        if let Some(end) = self.end_epoch_ms {
            if end < self.start_epoch_ms {
                return Err(EventValidationError::InvalidWindow {
                    start: self.start_epoch_ms,
                    end,
                });
            }
        }
        Ok(())
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.end_epoch_ms {
            Some(end) => write!(f, "{} ({} - {})", self.title, self.start_epoch_ms, end),
            None => write!(f, "{} ({})", self.title, self.start_epoch_ms),
        }
    }
}

#[derive(Deserialize)]
struct EventRecord {
    id: EventId,
    title: String,
    start_epoch_ms: i64,
    end_epoch_ms: Option<i64>,
}

impl TryFrom<EventRecord> for Event {
    type Error = EventValidationError;

    fn try_from(value: EventRecord) -> Result<Self, Self::Error> {
        Self::with_id(value.id, value.title, value.start_epoch_ms, value.end_epoch_ms)
    }
}
