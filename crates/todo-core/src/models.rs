//! Models
//!
//! Persisted state of the widget and its JSON shape.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Creation timestamp in milliseconds, unique within a list.
pub type TaskId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

/// Everything the list persists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListState {
    pub tasks: Vec<Task>,
    #[serde(rename = "newTaskText", default)]
    pub draft_text: String,
}

impl ListState {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let mut state: ListState = serde_json::from_str(raw)?;
        state.dedup_ids();
        Ok(state)
    }

    /// Parse persisted state, falling back to an empty list on any failure.
    pub fn restore(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable persisted state");
                Self::default()
            }
        }
    }

    pub fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    /// Keep the first task of every id.
    fn dedup_ids(&mut self) {
        let mut seen = HashSet::new();
        let before = self.tasks.len();
        self.tasks.retain(|task| seen.insert(task.id));
        if self.tasks.len() != before {
            tracing::warn!(dropped = before - self.tasks.len(), "dropped tasks with duplicate ids");
        }
    }
}
