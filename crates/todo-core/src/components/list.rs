//! List Component
//!
//! Owns the tasks, the draft text and one [`ItemComponent`] per task. Every
//! command from the rendered tree ends up in [`TodoList::dispatch`].

use std::collections::{HashMap, HashSet};

use crate::clock::{Clock, IdAllocator, SystemClock};
use crate::command::Command;
use crate::component::{Component, ComponentError, Mounted, Swap};
use crate::config::Config;
use crate::dom::{create_element, Node};
use crate::models::{ListState, Task, TaskId};
use crate::storage::{Storage, StorageError};

use super::{ComposerComponent, ItemComponent};

pub struct TodoList<S, K = SystemClock> {
    state: ListState,
    items: HashMap<TaskId, Mounted<ItemComponent>>,
    storage: S,
    clock: K,
    ids: IdAllocator,
    config: Config,
    live: Option<Node>,
}

impl<S: Storage> TodoList<S> {
    /// Restore from `storage` and stamp new tasks with the wall clock.
    pub fn new(storage: S, config: Config) -> Self {
        Self::with_clock(storage, config, SystemClock)
    }
}

impl<S: Storage, K: Clock> TodoList<S, K> {
    pub fn with_clock(storage: S, config: Config, clock: K) -> Self {
        let state = load(&storage, &config.storage_key);
        tracing::debug!(tasks = state.tasks.len(), "restored todo list");
        Self {
            ids: IdAllocator::seeded(state.tasks.iter().map(|task| task.id)),
            state,
            items: HashMap::new(),
            storage,
            clock,
            config,
            live: None,
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Number of tracked row components.
    pub fn tracked_items(&self) -> usize {
        self.items.len()
    }

    pub fn item(&self, id: TaskId) -> Option<&Mounted<ItemComponent>> {
        self.items.get(&id)
    }

    /// The tree from the last `materialize`/`update`.
    pub fn live(&self) -> Option<&Node> {
        self.live.as_ref()
    }

    /// Route a command to the matching operation. Returns whether the live
    /// tree was re-rendered; draft changes never re-render on their own.
    pub fn dispatch(&mut self, command: Command) -> bool {
        tracing::debug!(?command, "dispatch");
        match command {
            Command::ChangeDraft(raw) => {
                self.on_input_change(raw);
                false
            }
            Command::Add => self.on_add_task(),
            Command::Toggle(id) => self.toggle(id),
            Command::DeleteClicked(id) => self.on_delete_click(id),
            Command::Delete(id) => self.delete(id),
        }
    }

    pub fn on_input_change(&mut self, raw: String) {
        self.state.draft_text = raw;
    }

    /// Append the trimmed draft as a new task. Blank drafts are ignored.
    pub fn on_add_task(&mut self) -> bool {
        let text = self.state.draft_text.trim();
        if text.is_empty() {
            return false;
        }
        let Some(id) = self.ids.next(&self.clock) else {
            tracing::warn!("no task id left above the restored ids, add refused");
            return false;
        };
        let task = Task { id, text: text.to_string(), completed: false };
        tracing::debug!(id = task.id, "task added");
        self.state.tasks.push(task);
        self.state.draft_text.clear();
        let rendered = self.rerender();
        self.save();
        rendered
    }

    pub fn toggle(&mut self, id: TaskId) -> bool {
        let Some(task) = self.state.task_mut(id) else {
            tracing::debug!(id, "toggle for unknown task");
            return false;
        };
        task.completed = !task.completed;
        let rendered = self.rerender();
        self.save();
        rendered
    }

    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.state.tasks.len();
        self.state.tasks.retain(|task| task.id != id);
        if self.state.tasks.len() == before {
            tracing::debug!(id, "delete for unknown task");
            return false;
        }
        self.items.remove(&id);
        let rendered = self.rerender();
        self.save();
        rendered
    }

    /// Forward a delete-button click to the row, which either arms itself or
    /// asks for the delete.
    pub fn on_delete_click(&mut self, id: TaskId) -> bool {
        let Some(row) = self.items.get_mut(&id) else {
            tracing::debug!(id, "delete click for untracked row");
            return false;
        };
        match row.on_delete_click() {
            Some(command) => self.dispatch(command),
            None => self.rerender(),
        }
    }

    /// Sync the row components with the tasks and describe the whole list.
    pub fn render(&mut self) -> Node {
        let composer = ComposerComponent::new(&self.state.draft_text, &self.config);

        for task in &self.state.tasks {
            match self.items.get_mut(&task.id) {
                Some(row) => row.component_mut().set_task(task.clone()),
                None => {
                    let row = Mounted::new(ItemComponent::new(task.clone(), &self.config));
                    self.items.insert(task.id, row);
                }
            }
        }

        let present: HashSet<TaskId> = self.state.tasks.iter().map(|task| task.id).collect();
        self.items.retain(|id, _| present.contains(id));

        let rows: Vec<Node> = self
            .state
            .tasks
            .iter()
            .filter_map(|task| self.items.get_mut(&task.id).map(|row| row.materialize().clone()))
            .collect();

        create_element(
            "div",
            [("class", Some("todo-list".to_string()))],
            vec![
                create_element("h1", [], self.config.heading.as_str(), []),
                composer.render(),
                create_element("ol", [("class", Some("todo-items".to_string()))], rows, []),
            ],
            [],
        )
    }

    pub fn materialize(&mut self) -> &Node {
        let node = self.render();
        self.live.insert(node)
    }

    pub fn update(&mut self) -> Result<Swap, ComponentError> {
        if self.live.is_none() {
            return Err(ComponentError::NotMaterialized);
        }
        let new = self.render();
        let old = self.live.replace(new.clone()).ok_or(ComponentError::NotMaterialized)?;
        Ok(Swap { old, new })
    }

    /// Write the full state under the configured key. Failures are logged.
    pub fn save(&mut self) {
        if let Err(e) = self.try_save() {
            tracing::warn!(error = %e, "failed to persist todo state");
        }
    }

    fn try_save(&mut self) -> Result<(), StorageError> {
        let json = self.state.to_json()?;
        self.storage.set(&self.config.storage_key, &json)
    }

    fn rerender(&mut self) -> bool {
        self.update().is_ok()
    }
}

fn load<S: Storage>(storage: &S, key: &str) -> ListState {
    match storage.get(key) {
        Ok(raw) => ListState::restore(raw.as_deref()),
        Err(e) => {
            tracing::warn!(error = %e, "failed to read todo state");
            ListState::default()
        }
    }
}
