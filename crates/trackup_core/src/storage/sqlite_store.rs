//! SQLite-backed address-book store.
//!
//! # Invariants
//! - Person and event order is preserved through the `position` columns.
//! - `save` runs in one immediate transaction: delete everything, then
//!   insert the new snapshot.

use crate::db::migrations::{current_version, latest_version};
use crate::model::address_book::{AddressBook, AddressBookSnapshot};
use crate::model::event::Event;
use crate::model::person::{Address, Email, Name, Person, Phone, Remark, Tag};
use crate::storage::{AddressBookStore, StoreError, StoreResult};
use log::{error, info};
use rusqlite::{params, Connection, TransactionBehavior};
use std::collections::BTreeSet;
use std::time::Instant;
use uuid::Uuid;

pub struct SqliteAddressBookStore<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteAddressBookStore<'conn> {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    ///
    /// # Errors
    /// - `StoreError::UninitializedConnection` when migrations are not at the
    ///   latest version.
    pub fn try_new(conn: &'conn mut Connection) -> StoreResult<Self> {
        let expected_version = latest_version();
        let actual_version = current_version(conn)?;
        if actual_version != expected_version {
            return Err(StoreError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }
        Ok(Self { conn })
    }

    fn load_snapshot(&self) -> StoreResult<AddressBookSnapshot> {
        let mut tags_stmt = self
            .conn
            .prepare("SELECT tag FROM person_tags WHERE person_position = ?1 ORDER BY tag;")?;
        let mut person_stmt = self.conn.prepare(
            "SELECT position, name, phone, email, address, remark
             FROM persons
             ORDER BY position;",
        )?;

        let mut persons = Vec::new();
        let mut rows = person_stmt.query([])?;
        while let Some(row) = rows.next()? {
            let position: i64 = row.get(0)?;
            let tags = tags_stmt
                .query_map(params![position], |tag_row| tag_row.get::<_, String>(0))?
                .collect::<Result<Vec<_>, _>>()?;
            persons.push(decode_person(
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
                tags,
            )?);
        }

        let mut event_stmt = self.conn.prepare(
            "SELECT uuid, title, start_epoch_ms, end_epoch_ms
             FROM events
             ORDER BY position;",
        )?;
        let mut events = Vec::new();
        let mut rows = event_stmt.query([])?;
        while let Some(row) = rows.next()? {
            events.push(decode_event(
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
            )?);
        }

        Ok(AddressBookSnapshot { persons, events })
    }

    fn write_snapshot(&mut self, book: &AddressBook) -> StoreResult<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        tx.execute_batch(
            "DELETE FROM person_tags;
             DELETE FROM persons;
             DELETE FROM events;",
        )?;

        {
            let mut insert_person = tx.prepare(
                "INSERT INTO persons (position, name, phone, email, address, remark)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            )?;
            let mut insert_tag =
                tx.prepare("INSERT INTO person_tags (person_position, tag) VALUES (?1, ?2);")?;
            for (position, person) in book.person_list().iter().enumerate() {
                let position = position as i64;
                insert_person.execute(params![
                    position,
                    person.name.as_str(),
                    person.phone.as_str(),
                    person.email.as_str(),
                    person.address.as_str(),
                    person.remark.as_str(),
                ])?;
                for tag in &person.tags {
                    insert_tag.execute(params![position, tag.as_str()])?;
                }
            }

            let mut insert_event = tx.prepare(
                "INSERT INTO events (position, uuid, title, start_epoch_ms, end_epoch_ms)
                 VALUES (?1, ?2, ?3, ?4, ?5);",
            )?;
            for (position, event) in book.event_list().iter().enumerate() {
                insert_event.execute(params![
                    position as i64,
                    event.id.to_string(),
                    event.title.as_str(),
                    event.start_epoch_ms,
                    event.end_epoch_ms,
                ])?;
            }
        }

        tx.commit()?;
        Ok(())
    }
}

impl AddressBookStore for SqliteAddressBookStore<'_> {
    fn load(&self) -> StoreResult<AddressBook> {
        let snapshot = self.load_snapshot()?;
        let book = AddressBook::from_read_only(&snapshot)?;
        info!(
            "event=store_load module=storage status=ok persons={} events={}",
            snapshot.persons.len(),
            snapshot.events.len()
        );
        Ok(book)
    }

    fn save(&mut self, book: &AddressBook) -> StoreResult<()> {
        let started_at = Instant::now();
        match self.write_snapshot(book) {
            Ok(()) => {
                info!(
                    "event=store_save module=storage status=ok persons={} events={} duration_ms={}",
                    book.person_list().len(),
                    book.event_list().len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_save module=storage status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}

fn decode_person(
    name: String,
    phone: String,
    email: String,
    address: String,
    remark: String,
    tags: Vec<String>,
) -> StoreResult<Person> {
    let invalid = |err: crate::model::person::FieldError| StoreError::InvalidData(err.to_string());
    let tags = tags
        .into_iter()
        .map(Tag::parse)
        .collect::<Result<BTreeSet<_>, _>>()
        .map_err(invalid)?;
    let person = Person::new(
        Name::parse(name).map_err(invalid)?,
        Phone::parse(phone).map_err(invalid)?,
        Email::parse(email).map_err(invalid)?,
        Address::parse(address).map_err(invalid)?,
        tags,
    );
    Ok(person.with_remark(Remark::new(remark)))
}

fn decode_event(
    uuid: String,
    title: String,
    start_epoch_ms: i64,
    end_epoch_ms: Option<i64>,
) -> StoreResult<Event> {
    let id = Uuid::parse_str(&uuid)
        .map_err(|err| StoreError::InvalidData(format!("invalid event uuid `{uuid}`: {err}")))?;
    Event::with_id(id, title, start_epoch_ms, end_epoch_ms)
        .map_err(|err| StoreError::InvalidData(err.to_string()))
}
