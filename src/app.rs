//! Todo Widget App
//!
//! Leptos shell: a container the host binding renders the list into, and a
//! reactive footer fed from the list's state.

use std::fmt;

use leptos::prelude::*;
use todo_core::{Config, ListState, MemoryStorage, Storage, TodoList};

use crate::host;
use crate::storage::LocalStorage;

/// Attribute on `<body>` holding an optional JSON [`Config`].
const CONFIG_ATTRIBUTE: &str = "data-todo-config";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Summary {
    total: usize,
    done: usize,
}

impl Summary {
    fn of(state: &ListState) -> Self {
        Self { total: state.tasks.len(), done: state.completed_count() }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} tasks, {} done", self.total, self.done)
    }
}

#[component]
pub fn App() -> impl IntoView {
    let host_ref = NodeRef::<leptos::html::Div>::new();
    let (summary, set_summary) = signal(Summary::default());

    // Mount once, as soon as the container exists.
    Effect::new(move |mounted: Option<bool>| {
        if mounted == Some(true) {
            return true;
        }
        let Some(container) = host_ref.get() else {
            return false;
        };
        let list = TodoList::new(open_storage(), load_config());
        match host::mount(container.into(), list, move |state| set_summary.set(Summary::of(state))) {
            Ok(_) => true,
            Err(e) => {
                tracing::error!(error = %e, "failed to mount todo list");
                false
            }
        }
    });

    view! {
        <div class="todo-app">
            <div class="todo-host" node_ref=host_ref></div>
            <p class="item-count">{move || summary.get().to_string()}</p>
        </div>
    }
}

fn open_storage() -> Box<dyn Storage> {
    match LocalStorage::open() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            tracing::warn!(error = %e, "falling back to in-memory storage");
            Box::new(MemoryStorage::new())
        }
    }
}

fn load_config() -> Config {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
        .and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE))
        .map(|raw| Config::from_json(&raw))
        .unwrap_or_default()
}
