//! Item Component
//!
//! One row: checkbox, label, and a delete button that needs two clicks.

use crate::command::{Command, Handler};
use crate::component::{Component, Mounted};
use crate::config::Config;
use crate::dom::{create_element, Content, Node};
use crate::models::{Task, TaskId};

const COMPLETED_STYLE: &str = "color: gray";
const ARMED_STYLE: &str = "color: red";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemComponent {
    task: Task,
    confirm_pending: bool,
    delete_label: String,
}

impl ItemComponent {
    pub fn new(task: Task, config: &Config) -> Self {
        Self { task, confirm_pending: false, delete_label: config.delete_label.clone() }
    }

    pub fn id(&self) -> TaskId {
        self.task.id
    }

    /// Refresh the task copy, keeping local state.
    pub fn set_task(&mut self, task: Task) {
        self.task = task;
    }

    pub fn confirm_pending(&self) -> bool {
        self.confirm_pending
    }

    fn label_style(&self) -> Option<String> {
        if self.task.completed {
            Some(COMPLETED_STYLE.to_string())
        } else if self.confirm_pending {
            Some(ARMED_STYLE.to_string())
        } else {
            None
        }
    }
}

impl Component for ItemComponent {
    fn render(&self) -> Node {
        let id = self.task.id;
        create_element(
            "li",
            [("class", Some("todo-item".to_string())), ("data-id", Some(id.to_string()))],
            vec![
                create_element(
                    "input",
                    [
                        ("type", Some("checkbox".to_string())),
                        ("checked", self.task.completed.then(String::new)),
                    ],
                    Content::Empty,
                    [("change", Handler::Emit(Command::Toggle(id)))],
                ),
                create_element(
                    "label",
                    [("style", self.label_style())],
                    self.task.text.as_str(),
                    [],
                ),
                create_element(
                    "button",
                    [
                        ("class", Some("delete-btn".to_string())),
                        ("style", self.confirm_pending.then(|| ARMED_STYLE.to_string())),
                    ],
                    self.delete_label.as_str(),
                    [("click", Handler::Emit(Command::DeleteClicked(id)))],
                ),
            ],
            [],
        )
    }
}

impl Mounted<ItemComponent> {
    /// First click arms the row and re-renders it; the second asks for the
    /// delete. The armed flag is left set, the owner drops the row.
    pub fn on_delete_click(&mut self) -> Option<Command> {
        if self.component().confirm_pending {
            return Some(Command::Delete(self.component().id()));
        }
        self.component_mut().confirm_pending = true;
        if let Err(e) = self.update() {
            tracing::debug!(error = %e, "armed row was never materialized");
        }
        None
    }
}
