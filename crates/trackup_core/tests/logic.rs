mod common;

use common::{alice, typical_persons};
use trackup_core::db::open_db_in_memory;
use trackup_core::{
    AddressBook, AddressBookSnapshot, AddressBookStore, CommandError, Logic, LogicError,
    MemoryAddressBookStore, ParseError, RemarkCommand, SqliteAddressBookStore,
};

const ADD_AMY: &str = "add n/Amy Bee p/85355255 e/amy@gmail.com a/123, Jurong West Ave 6 t/friend";

fn seeded_logic() -> Logic<MemoryAddressBookStore> {
    let store = MemoryAddressBookStore::with_snapshot(AddressBookSnapshot {
        persons: typical_persons(),
        events: Vec::new(),
    });
    Logic::new(store).unwrap()
}

#[test]
fn successful_mutation_is_saved() {
    let mut logic = Logic::new(MemoryAddressBookStore::new()).unwrap();

    let result = logic.execute(ADD_AMY).unwrap();

    assert!(result.feedback.starts_with("New person added: Amy Bee"));
    assert_eq!(logic.store().save_count(), 1);
    assert_eq!(logic.store().snapshot().persons.len(), 1);
}

#[test]
fn read_only_commands_do_not_save() {
    let mut logic = seeded_logic();

    logic.execute("list").unwrap();
    logic.execute("find alice").unwrap();
    logic.execute("events").unwrap();

    assert_eq!(logic.store().save_count(), 0);
    assert_eq!(logic.model().filtered_person_list().len(), 1);
}

#[test]
fn remark_failure_propagates_without_saving() {
    let mut logic = seeded_logic();

    let err = logic.execute("remark 1 r/ Likes to swim.").unwrap_err();

    assert!(matches!(
        err,
        LogicError::Command(CommandError::Reported(ref message))
            if message == "Index: 1, Remark: Likes to swim."
    ));
    assert_eq!(logic.store().save_count(), 0);
}

#[test]
fn parse_errors_surface_with_usage() {
    let mut logic = seeded_logic();

    let err = logic.execute("delete zero").unwrap_err();
    assert!(matches!(err, LogicError::Parse(ParseError::InvalidFormat { .. })));
    assert!(err.to_string().starts_with("Invalid command format!"));

    assert_eq!(logic.execute("fly").unwrap_err().to_string(), "Unknown command");
}

#[test]
fn duplicate_add_and_invalid_index_are_command_errors() {
    let mut logic = seeded_logic();

    let duplicate = logic
        .execute("add n/Alice Pauline p/123 e/a@bc a/Somewhere")
        .unwrap_err();
    assert_eq!(
        duplicate.to_string(),
        "This person already exists in the address book"
    );

    let out_of_range = logic.execute("delete 99").unwrap_err();
    assert!(matches!(
        out_of_range,
        LogicError::Command(CommandError::InvalidPersonIndex)
    ));
}

#[test]
fn edit_delete_clear_and_events_flow_through_sqlite() {
    let mut conn = open_db_in_memory().unwrap();
    {
        let mut store = SqliteAddressBookStore::try_new(&mut conn).unwrap();
        let mut seed = AddressBook::new();
        seed.add_person(alice()).unwrap();
        store.save(&seed).unwrap();
    }

    let store = SqliteAddressBookStore::try_new(&mut conn).unwrap();
    let mut logic = Logic::new(store).unwrap();

    logic.execute("edit 1 p/91234567 t/").unwrap();
    logic.execute("event ti/Catch up s/1000 en/2000").unwrap();
    let listed = logic.execute("events").unwrap();
    assert_eq!(listed.feedback, "1. Catch up (1000 - 2000)");

    let reloaded = logic.store().load().unwrap();
    let stored_alice = reloaded.person_list().get(0).unwrap();
    assert_eq!(stored_alice.phone.as_str(), "91234567");
    assert!(stored_alice.tags.is_empty());
    assert_eq!(reloaded.event_list().len(), 1);

    logic.execute("delete-event 1").unwrap();
    logic.execute("delete 1").unwrap();
    assert!(logic.store().load().unwrap().person_list().is_empty());

    logic.execute(ADD_AMY).unwrap();
    logic.execute("clear").unwrap();
    assert_eq!(logic.store().load().unwrap(), AddressBook::new());
}

#[test]
fn help_and_exit_set_front_end_flags() {
    let mut logic = seeded_logic();

    let help = logic.execute("help").unwrap();
    assert!(help.show_help);
    assert!(help.feedback.contains(RemarkCommand::MESSAGE_USAGE));

    let exit = logic.execute("exit").unwrap();
    assert!(exit.exit);
    assert!(!exit.show_help);
}
