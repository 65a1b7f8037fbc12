//! `remark` command.

use crate::logic::commands::{Command, CommandError, CommandResult};
use crate::logic::index::Index;
use crate::model::model_manager::Model;

/// Edits the remark of the person at `index` in the displayed listing.
///
/// Not wired to the model yet: execution reports the parsed arguments back
/// as an error and leaves the model untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemarkCommand {
    index: Index,
    remark: String,
}

impl RemarkCommand {
    pub const COMMAND_WORD: &'static str = "remark";
    pub const MESSAGE_USAGE: &'static str = "remark: Edits the remark of the person identified \
        by the index number used in the last person listing. \
        Existing remark will be overwritten by the input.\n\
        Parameters: INDEX (must be a positive integer) r/ [REMARK]\n\
        Example: remark 1 r/ Likes to swim.";

    pub fn new(index: Index, remark: impl Into<String>) -> Self {
        Self {
            index,
            remark: remark.into(),
        }
    }

    pub fn index(&self) -> Index {
        self.index
    }

    pub fn remark(&self) -> &str {
        &self.remark
    }
}

impl Command for RemarkCommand {
    fn execute(&self, _model: &mut Model) -> Result<CommandResult, CommandError> {
        Err(CommandError::Reported(format!(
            "Index: {}, Remark: {}",
            self.index.one_based(),
            self.remark
        )))
    }
}
