//! Event commands: `event`, `events`, `delete-event`.

use crate::logic::commands::{Command, CommandError, CommandResult};
use crate::logic::index::Index;
use crate::model::event::Event;
use crate::model::model_manager::Model;

/// Records a new event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddEventCommand {
    event: Event,
}

impl AddEventCommand {
    pub const COMMAND_WORD: &'static str = "event";
    pub const MESSAGE_USAGE: &'static str = "event: Adds an event.\n\
        Parameters: ti/TITLE s/START_EPOCH_MS [en/END_EPOCH_MS]\n\
        Example: event ti/Project sync s/1700000000000 en/1700003600000";

    pub fn new(event: Event) -> Self {
        Self { event }
    }

    pub fn event(&self) -> &Event {
        &self.event
    }
}

impl Command for AddEventCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.add_event(self.event.clone())?;
        Ok(CommandResult::new(format!("New event added: {}", self.event)))
    }
}

/// Lists every recorded event with its one-based index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListEventsCommand;

impl ListEventsCommand {
    pub const COMMAND_WORD: &'static str = "events";
}

impl Command for ListEventsCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let events = model.event_list();
        if events.is_empty() {
            return Ok(CommandResult::new("No events recorded"));
        }

        let lines = events
            .iter()
            .enumerate()
            .map(|(position, event)| {
                format!("{}. {event}", Index::from_zero_based(position).one_based())
            })
            .collect::<Vec<_>>();
        Ok(CommandResult::new(lines.join("\n")))
    }
}

/// Deletes the event at `index` in the event listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteEventCommand {
    index: Index,
}

impl DeleteEventCommand {
    pub const COMMAND_WORD: &'static str = "delete-event";
    pub const MESSAGE_USAGE: &'static str = "delete-event: Deletes the event identified by the \
        index number used in the event list.\n\
        Parameters: INDEX (must be a positive integer)\n\
        Example: delete-event 1";

    pub fn new(index: Index) -> Self {
        Self { index }
    }
}

impl Command for DeleteEventCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = model
            .event_list()
            .get(self.index.zero_based())
            .cloned()
            .ok_or(CommandError::InvalidEventIndex)?;
        let removed = model.delete_event(&target)?;
        Ok(CommandResult::new(format!("Deleted Event: {removed}")))
    }
}

#[cfg(test)]
mod tests {
    use super::{AddEventCommand, DeleteEventCommand, ListEventsCommand};
    use crate::logic::commands::{Command, CommandError};
    use crate::logic::index::Index;
    use crate::model::event::Event;
    use crate::model::model_manager::Model;
    use crate::model::unique_person_list::ModelError;

    #[test]
    fn add_list_and_delete_events() {
        let mut model = Model::default();
        assert_eq!(
            ListEventsCommand.execute(&mut model).unwrap().feedback,
            "No events recorded"
        );

        let standup = Event::new("Standup", 1_000, Some(2_000)).unwrap();
        let add_standup = AddEventCommand::new(standup.clone());
        add_standup.execute(&mut model).unwrap();
        assert_eq!(
            add_standup.execute(&mut model).unwrap_err(),
            CommandError::Model(ModelError::DuplicateEvent(standup.id))
        );
        AddEventCommand::new(Event::new("Lunch", 5_000, None).unwrap())
            .execute(&mut model)
            .unwrap();

        let listed = ListEventsCommand.execute(&mut model).unwrap().feedback;
        assert_eq!(listed, "1. Standup (1000 - 2000)\n2. Lunch (5000)");

        let first = Index::from_one_based(1).unwrap();
        let deleted = DeleteEventCommand::new(first).execute(&mut model).unwrap();
        assert_eq!(deleted.feedback, "Deleted Event: Standup (1000 - 2000)");
        assert_eq!(model.event_list().len(), 1);

        let missing = DeleteEventCommand::new(Index::from_one_based(2).unwrap());
        assert_eq!(
            missing.execute(&mut model).unwrap_err(),
            CommandError::InvalidEventIndex
        );
    }
}
