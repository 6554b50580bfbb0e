//! Commands
//!
//! Everything a rendered tree can ask the list to do. Event handlers in a
//! [`Node`](crate::Node) are data, so the host resolves them into commands and
//! hands those to [`TodoList::dispatch`](crate::TodoList::dispatch).

use crate::models::TaskId;

/// A message emitted by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// The draft input changed to this raw value.
    ChangeDraft(String),
    /// Add the current draft as a new task.
    Add,
    /// Flip `completed` on a task.
    Toggle(TaskId),
    /// The delete button of a row was clicked. The row decides whether this
    /// arms the confirmation or becomes a [`Command::Delete`].
    DeleteClicked(TaskId),
    /// Remove a task for good.
    Delete(TaskId),
}

/// Commands that need the event target's current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    ChangeDraft,
}

impl InputCommand {
    pub fn with_value(self, value: String) -> Command {
        match self {
            InputCommand::ChangeDraft => Command::ChangeDraft(value),
        }
    }
}

/// What an event binding does when its event fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handler {
    /// Emit a fixed command.
    Emit(Command),
    /// Emit a command built from the target's value (text inputs).
    Input(InputCommand),
}

impl Handler {
    /// Turn the handler into a command. `value` is the event target's value,
    /// if it has one; `Input` handlers without a value fall back to `""`.
    pub fn resolve(&self, value: Option<String>) -> Command {
        match self {
            Handler::Emit(command) => command.clone(),
            Handler::Input(input) => input.with_value(value.unwrap_or_default()),
        }
    }
}
