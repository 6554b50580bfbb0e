//! Element Builder
//!
//! UI nodes as plain data. Nothing in here touches a browser; the host turns
//! a [`Node`] into real DOM.

use crate::command::Handler;

/// A renderable node: an element or a run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
    pub events: Vec<EventBinding>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventBinding {
    pub name: &'static str,
    pub handler: Handler,
}

/// Child content accepted by [`create_element`].
///
/// `Many` holds a sequence of texts and nodes. Entries of any other shape
/// inside it (`Empty`, nested `Many`) are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Empty,
    Text(String),
    Node(Node),
    Many(Vec<Content>),
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<Node> for Content {
    fn from(node: Node) -> Self {
        Content::Node(node)
    }
}

impl From<Vec<Content>> for Content {
    fn from(entries: Vec<Content>) -> Self {
        Content::Many(entries)
    }
}

impl From<Vec<Node>> for Content {
    fn from(nodes: Vec<Node>) -> Self {
        Content::Many(nodes.into_iter().map(Content::Node).collect())
    }
}

impl<T: Into<Content>> From<Option<T>> for Content {
    fn from(content: Option<T>) -> Self {
        content.map_or(Content::Empty, Into::into)
    }
}

/// Build one element.
///
/// Attributes whose value is `None` are left out. Children are appended in
/// order, strings becoming text nodes. Handlers are only recorded.
pub fn create_element(
    tag: &'static str,
    attributes: impl IntoIterator<Item = (&'static str, Option<String>)>,
    content: impl Into<Content>,
    events: impl IntoIterator<Item = (&'static str, Handler)>,
) -> Node {
    let attributes = attributes
        .into_iter()
        .filter_map(|(name, value)| value.map(|value| Attribute { name, value }))
        .collect();

    let mut children = Vec::new();
    match content.into() {
        Content::Empty => {}
        Content::Text(text) => children.push(Node::Text(text)),
        Content::Node(node) => children.push(node),
        Content::Many(entries) => {
            for entry in entries {
                match entry {
                    Content::Text(text) => children.push(Node::Text(text)),
                    Content::Node(node) => children.push(node),
                    Content::Empty | Content::Many(_) => {
                        tracing::trace!(tag, "skipping malformed child entry");
                    }
                }
            }
        }
    }

    let events = events
        .into_iter()
        .map(|(name, handler)| EventBinding { name, handler })
        .collect();

    Node::Element(Element { tag, attributes, children, events })
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of this node and all descendants.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(element) => element.children.iter().map(Node::text_content).collect(),
        }
    }

    /// Node at a child-index path; `[]` is `self`.
    pub fn at(&self, path: &[usize]) -> Option<&Node> {
        path.iter().try_fold(self, |node, &index| node.as_element()?.children.get(index))
    }

    pub fn at_mut(&mut self, path: &[usize]) -> Option<&mut Node> {
        let mut node = self;
        for &index in path {
            node = match node {
                Node::Element(element) => element.children.get_mut(index)?,
                Node::Text(_) => return None,
            };
        }
        Some(node)
    }

    /// Handler for `event` on the node at `path`, or on its nearest ancestor
    /// that binds one. Mirrors DOM event bubbling.
    pub fn handler_for(&self, path: &[usize], event: &str) -> Option<&Handler> {
        (0..=path.len()).rev().find_map(|depth| self.at(&path[..depth])?.as_element()?.handler(event))
    }

    /// Depth-first search for the first element matching `predicate`.
    pub fn find(&self, predicate: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        let element = self.as_element()?;
        if predicate(element) {
            return Some(element);
        }
        element.children.iter().find_map(|child| child.find(predicate))
    }
}

impl Element {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.iter().find(|a| a.name == name).map(|a| a.value.as_str())
    }

    pub fn handler(&self, event: &str) -> Option<&Handler> {
        self.events.iter().find(|e| e.name == event).map(|e| &e.handler)
    }

    /// Element children only, skipping text.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;

    #[test]
    fn test_none_attributes_are_omitted() {
        let node = create_element(
            "input",
            [("type", Some("checkbox".to_string())), ("checked", None)],
            Content::Empty,
            [],
        );
        let element = node.as_element().unwrap();
        assert_eq!(element.attribute("type"), Some("checkbox"));
        assert_eq!(element.attribute("checked"), None);
        assert_eq!(element.attributes.len(), 1);
    }

    #[test]
    fn test_children_in_order() {
        let node = create_element(
            "div",
            [],
            vec![
                Content::from("a"),
                create_element("span", [], "b", []).into(),
                Content::from("c"),
            ],
            [],
        );
        let element = node.as_element().unwrap();
        assert_eq!(element.children.len(), 3);
        assert_eq!(element.children[0], Node::Text("a".into()));
        assert_eq!(element.children[1].as_element().unwrap().tag, "span");
        assert_eq!(node.text_content(), "abc");
    }

    #[test]
    fn test_malformed_entries_skipped() {
        let node = create_element(
            "div",
            [],
            vec![
                Content::Empty,
                Content::from("kept"),
                Content::Many(vec![Content::from("nested")]),
            ],
            [],
        );
        assert_eq!(node.as_element().unwrap().children, vec![Node::Text("kept".into())]);
    }

    #[test]
    fn test_single_and_absent_content() {
        let text = create_element("p", [], "hello", []);
        assert_eq!(text.as_element().unwrap().children.len(), 1);

        let empty = create_element("p", [], None::<String>, []);
        assert!(empty.as_element().unwrap().children.is_empty());
    }

    #[test]
    fn test_handlers_recorded_not_invoked() {
        let node = create_element("button", [], "+", [("click", Handler::Emit(Command::Add))]);
        let element = node.as_element().unwrap();
        assert_eq!(element.handler("click"), Some(&Handler::Emit(Command::Add)));
        assert_eq!(element.handler("input"), None);
    }

    #[test]
    fn test_handler_bubbles_to_ancestor() {
        let node = create_element(
            "li",
            [],
            vec![
                create_element("span", [], "text", []),
                create_element("button", [], "x", [("click", Handler::Emit(Command::Delete(1)))]),
            ],
            [("click", Handler::Emit(Command::Toggle(1)))],
        );
        assert_eq!(node.handler_for(&[1, 0], "click"), Some(&Handler::Emit(Command::Delete(1))));
        assert_eq!(node.handler_for(&[0, 0], "click"), Some(&Handler::Emit(Command::Toggle(1))));
        assert_eq!(node.handler_for(&[0], "change"), None);
        assert_eq!(node.handler_for(&[5], "click"), Some(&Handler::Emit(Command::Toggle(1))));
    }

    #[test]
    fn test_at_path() {
        let node = create_element(
            "ol",
            [],
            vec![create_element("li", [], "one", []), create_element("li", [], "two", [])],
            [],
        );
        assert_eq!(node.at(&[1, 0]), Some(&Node::Text("two".into())));
        assert_eq!(node.at(&[]), Some(&node));
        assert_eq!(node.at(&[2]), None);
        assert_eq!(node.at(&[0, 0, 0]), None);
    }
}
