//! Host Binding
//!
//! Mounts a [`TodoList`] into a DOM container and keeps the two in step.
//! Events are delegated: one listener per event type sits on the container,
//! and the handler is resolved from the tree currently on screen.

mod render;

use std::cell::RefCell;
use std::rc::Rc;

use todo_core::{diff, Command, ListState, Node, Storage, TodoList};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

use crate::error::HostError;

const DELEGATED_EVENTS: [&str; 3] = ["click", "input", "change"];

pub struct Host<S> {
    list: TodoList<S>,
    document: Document,
    container: web_sys::Element,
    /// What the DOM under `container` currently shows.
    current: Node,
    on_change: Box<dyn Fn(&ListState)>,
}

/// Render `list` into `container` and start listening for input.
///
/// The listeners keep the host alive for the life of the page.
pub fn mount<S: Storage + 'static>(
    container: web_sys::Element,
    mut list: TodoList<S>,
    on_change: impl Fn(&ListState) + 'static,
) -> Result<Rc<RefCell<Host<S>>>, HostError> {
    let document = container.owner_document().ok_or(HostError::Detached)?;
    let current = list.materialize().clone();
    container.append_child(&render::build(&document, &current)?)?;
    on_change(list.state());

    let host = Rc::new(RefCell::new(Host {
        list,
        document,
        container: container.clone(),
        current,
        on_change: Box::new(on_change),
    }));

    for name in DELEGATED_EVENTS {
        let handle = Rc::clone(&host);
        let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            match handle.try_borrow_mut() {
                Ok(mut host) => host.handle_event(&event),
                Err(_) => tracing::warn!(event = %event.type_(), "event fired during an update, ignored"),
            }
        });
        container.add_event_listener_with_callback(name, listener.as_ref().unchecked_ref())?;
        listener.forget();
    }

    tracing::debug!(tasks = host.borrow().list().state().tasks.len(), "todo list mounted");
    Ok(host)
}

impl<S: Storage> Host<S> {
    pub fn list(&self) -> &TodoList<S> {
        &self.list
    }

    fn handle_event(&mut self, event: &web_sys::Event) {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
            return;
        };
        let Some(path) = render::path_of(&self.container, &target) else {
            return;
        };
        let Some(handler) = self.current.handler_for(&path, &event.type_()) else {
            return;
        };
        let value = target.dyn_ref::<HtmlInputElement>().map(HtmlInputElement::value);
        let command = handler.resolve(value);
        self.dispatch(command);
    }

    /// Run a command through the list and bring the DOM up to date.
    pub fn dispatch(&mut self, command: Command) {
        if !self.list.dispatch(command) {
            if let Err(e) = self.list.update() {
                tracing::warn!(error = %e, "list re-render skipped");
                return;
            }
        }
        let Some(next) = self.list.live().cloned() else {
            return;
        };

        self.sync(next);
        (self.on_change)(self.list.state());
    }

    /// Bring the DOM to `next`. `current` only moves once the DOM shows it;
    /// if neither patching nor a remount gets there the container is left
    /// empty, so no event can resolve against a stale tree. An empty
    /// container is rebuilt from scratch on the next call.
    fn sync(&mut self, next: Node) -> bool {
        let result = if self.container.first_child().is_none() {
            self.remount(&next)
        } else {
            let patches = diff(&self.current, &next);
            tracing::trace!(patches = patches.len(), "patching DOM");
            render::apply(&self.document, &self.container, &patches).or_else(|e| {
                tracing::error!(error = %e, "patching failed, remounting");
                self.remount(&next)
            })
        };
        match result {
            Ok(()) => {
                self.current = next;
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "remount failed, container cleared");
                self.container.set_text_content(None);
                false
            }
        }
    }

    fn remount(&self, tree: &Node) -> Result<(), HostError> {
        self.container.set_text_content(None);
        self.container.append_child(&render::build(&self.document, tree)?)?;
        Ok(())
    }
}
