//! Todo Core
//!
//! Target-independent half of the todo widget. Components render plain
//! [`Node`] trees, user interaction comes back as [`Command`]s, and
//! [`TodoList`] is the single owner of the state.

pub mod clock;
pub mod command;
pub mod component;
pub mod components;
pub mod config;
pub mod dom;
pub mod models;
pub mod patch;
pub mod storage;

pub use clock::{Clock, IdAllocator, ManualClock, SystemClock};
pub use command::{Command, Handler, InputCommand};
pub use component::{Component, ComponentError, Mounted, Swap};
pub use components::{ComposerComponent, ItemComponent, TodoList};
pub use config::Config;
pub use dom::{create_element, Attribute, Content, Element, EventBinding, Node};
pub use models::{ListState, Task, TaskId};
pub use patch::{apply, diff, Patch, PatchError};
pub use storage::{MemoryStorage, Storage, StorageError};
