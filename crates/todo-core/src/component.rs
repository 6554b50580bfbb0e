//! Component
//!
//! A component renders its own fields into a [`Node`]. [`Mounted`] remembers
//! the last rendered node so it can be swapped for a fresh one.

use crate::dom::Node;

pub trait Component {
    /// Describe the UI from the component's current fields.
    fn render(&self) -> Node;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ComponentError {
    #[error("update() called before materialize()")]
    NotMaterialized,
}

/// The node that was live before an update and the one replacing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swap {
    pub old: Node,
    pub new: Node,
}

/// A component plus the node it last rendered.
#[derive(Debug)]
pub struct Mounted<C> {
    component: C,
    live: Option<Node>,
}

impl<C: Component> Mounted<C> {
    pub fn new(component: C) -> Self {
        Self { component, live: None }
    }

    pub fn component(&self) -> &C {
        &self.component
    }

    pub fn component_mut(&mut self) -> &mut C {
        &mut self.component
    }

    /// The remembered node, if `materialize` has run.
    pub fn live(&self) -> Option<&Node> {
        self.live.as_ref()
    }

    /// Render and remember the result.
    pub fn materialize(&mut self) -> &Node {
        self.live.insert(self.component.render())
    }

    /// Render again and replace the remembered node in one step.
    pub fn update(&mut self) -> Result<Swap, ComponentError> {
        let live = self.live.as_mut().ok_or(ComponentError::NotMaterialized)?;
        let new = self.component.render();
        let old = std::mem::replace(live, new.clone());
        Ok(Swap { old, new })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{create_element, Content};

    struct Counter(u32);

    impl Component for Counter {
        fn render(&self) -> Node {
            create_element("span", [], self.0.to_string(), [])
        }
    }

    #[test]
    fn test_update_requires_materialize() {
        let mut mounted = Mounted::new(Counter(0));
        assert_eq!(mounted.update(), Err(ComponentError::NotMaterialized));
        assert!(mounted.live().is_none());
    }

    #[test]
    fn test_update_swaps_live_node() {
        let mut mounted = Mounted::new(Counter(1));
        assert_eq!(mounted.materialize().text_content(), "1");

        mounted.component_mut().0 = 2;
        let swap = mounted.update().unwrap();
        assert_eq!(swap.old.text_content(), "1");
        assert_eq!(swap.new.text_content(), "2");
        assert_eq!(mounted.live(), Some(&swap.new));
    }

    #[test]
    fn test_render_is_pure() {
        let counter = Counter(5);
        assert_eq!(counter.render(), counter.render());
        assert_ne!(counter.render(), create_element("span", [], Content::Empty, []));
    }
}
