//! Components
//!
//! The three widget components, leaf-first.

mod composer;
mod item;
mod list;

pub use composer::ComposerComponent;
pub use item::ItemComponent;
pub use list::TodoList;
