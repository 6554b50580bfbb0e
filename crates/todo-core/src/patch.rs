//! Reconciliation
//!
//! Diff two rendered trees into the edits that turn the first into the
//! second. Paths are child indices from the root; `[]` is the root itself.
//! Children are compared by position, so appends and truncations only ever
//! touch the end of a child list and earlier paths stay valid.

use crate::dom::{Attribute, Element, EventBinding, Node};

pub type Path = Vec<usize>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch {
    /// Swap the node at `path` for a freshly built one.
    Replace { path: Path, node: Node },
    SetText { path: Path, text: String },
    SetAttribute { path: Path, name: &'static str, value: String },
    RemoveAttribute { path: Path, name: &'static str },
    /// Event bindings changed. Hosts that resolve handlers from the current
    /// tree can ignore this.
    SetEvents { path: Path, events: Vec<EventBinding> },
    Append { path: Path, node: Node },
    /// Drop children from index `len` onwards.
    Truncate { path: Path, len: usize },
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PatchError {
    #[error("no node at path {0:?}")]
    MissingNode(Path),
    #[error("node at path {0:?} is not an element")]
    NotAnElement(Path),
    #[error("node at path {0:?} is not text")]
    NotText(Path),
}

pub fn diff(old: &Node, new: &Node) -> Vec<Patch> {
    let mut patches = Vec::new();
    diff_node(old, new, &mut Vec::new(), &mut patches);
    patches
}

fn diff_node(old: &Node, new: &Node, path: &mut Path, patches: &mut Vec<Patch>) {
    match (old, new) {
        (Node::Text(a), Node::Text(b)) => {
            if a != b {
                patches.push(Patch::SetText { path: path.clone(), text: b.clone() });
            }
        }
        (Node::Element(a), Node::Element(b)) if a.tag == b.tag => diff_element(a, b, path, patches),
        _ => patches.push(Patch::Replace { path: path.clone(), node: new.clone() }),
    }
}

fn diff_element(old: &Element, new: &Element, path: &mut Path, patches: &mut Vec<Patch>) {
    for attribute in &old.attributes {
        if new.attribute(attribute.name).is_none() {
            patches.push(Patch::RemoveAttribute { path: path.clone(), name: attribute.name });
        }
    }
    for attribute in &new.attributes {
        if old.attribute(attribute.name) != Some(attribute.value.as_str()) {
            patches.push(Patch::SetAttribute {
                path: path.clone(),
                name: attribute.name,
                value: attribute.value.clone(),
            });
        }
    }
    if old.events != new.events {
        patches.push(Patch::SetEvents { path: path.clone(), events: new.events.clone() });
    }

    for (index, (a, b)) in old.children.iter().zip(&new.children).enumerate() {
        path.push(index);
        diff_node(a, b, path, patches);
        path.pop();
    }
    if new.children.len() > old.children.len() {
        for node in &new.children[old.children.len()..] {
            patches.push(Patch::Append { path: path.clone(), node: node.clone() });
        }
    } else if new.children.len() < old.children.len() {
        patches.push(Patch::Truncate { path: path.clone(), len: new.children.len() });
    }
}

/// Apply patches to a tree in place.
pub fn apply(root: &mut Node, patches: &[Patch]) -> Result<(), PatchError> {
    for patch in patches {
        match patch {
            Patch::Replace { path, node } => *node_at(root, path)? = node.clone(),
            Patch::SetText { path, text } => match node_at(root, path)? {
                Node::Text(current) => *current = text.clone(),
                Node::Element(_) => return Err(PatchError::NotText(path.clone())),
            },
            Patch::SetAttribute { path, name, value } => {
                let element = element_at(root, path)?;
                match element.attributes.iter_mut().find(|a| a.name == *name) {
                    Some(attribute) => attribute.value = value.clone(),
                    None => element.attributes.push(Attribute { name: *name, value: value.clone() }),
                }
            }
            Patch::RemoveAttribute { path, name } => {
                element_at(root, path)?.attributes.retain(|a| a.name != *name);
            }
            Patch::SetEvents { path, events } => element_at(root, path)?.events = events.clone(),
            Patch::Append { path, node } => element_at(root, path)?.children.push(node.clone()),
            Patch::Truncate { path, len } => element_at(root, path)?.children.truncate(*len),
        }
    }
    Ok(())
}

fn node_at<'a>(root: &'a mut Node, path: &[usize]) -> Result<&'a mut Node, PatchError> {
    root.at_mut(path).ok_or_else(|| PatchError::MissingNode(path.to_vec()))
}

fn element_at<'a>(root: &'a mut Node, path: &[usize]) -> Result<&'a mut Element, PatchError> {
    match node_at(root, path)? {
        Node::Element(element) => Ok(element),
        Node::Text(_) => Err(PatchError::NotAnElement(path.to_vec())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{Command, Handler};
    use crate::dom::{create_element, Content};

    fn row(id: i64, text: &str, armed: bool) -> Node {
        create_element(
            "li",
            [("data-id", Some(id.to_string())), ("style", armed.then(|| "color: red".to_string()))],
            text,
            [("click", Handler::Emit(Command::DeleteClicked(id)))],
        )
    }

    fn list(rows: Vec<Node>) -> Node {
        create_element("ol", [], rows, [])
    }

    fn assert_converges(old: &Node, new: &Node) {
        let mut patched = old.clone();
        apply(&mut patched, &diff(old, new)).unwrap();
        assert_eq!(&patched, new);
    }

    #[test]
    fn test_identical_trees() {
        let tree = list(vec![row(1, "a", false), row(2, "b", true)]);
        assert!(diff(&tree, &tree.clone()).is_empty());
    }

    #[test]
    fn test_attribute_changes() {
        let old = list(vec![row(1, "a", false)]);
        let new = list(vec![row(1, "a", true)]);
        assert_eq!(
            diff(&old, &new),
            vec![Patch::SetAttribute { path: vec![0], name: "style", value: "color: red".into() }]
        );
        assert_eq!(
            diff(&new, &old),
            vec![Patch::RemoveAttribute { path: vec![0], name: "style" }]
        );
    }

    #[test]
    fn test_text_change() {
        let old = list(vec![row(1, "a", false)]);
        let new = list(vec![row(1, "b", false)]);
        assert_eq!(diff(&old, &new), vec![Patch::SetText { path: vec![0, 0], text: "b".into() }]);
    }

    #[test]
    fn test_append_and_truncate() {
        let short = list(vec![row(1, "a", false)]);
        let long = list(vec![row(1, "a", false), row(2, "b", false), row(3, "c", false)]);
        let grow = diff(&short, &long);
        assert_eq!(grow.len(), 2);
        assert!(matches!(grow[0], Patch::Append { ref path, .. } if path.is_empty()));
        assert_eq!(diff(&long, &short), vec![Patch::Truncate { path: vec![], len: 1 }]);
        assert_converges(&short, &long);
        assert_converges(&long, &short);
    }

    #[test]
    fn test_removal_from_middle_shifts_rows() {
        let old = list(vec![row(1, "a", false), row(2, "b", true), row(3, "c", false)]);
        let new = list(vec![row(1, "a", false), row(3, "c", false)]);
        assert_converges(&old, &new);
    }

    #[test]
    fn test_tag_change_replaces() {
        let old = create_element("div", [], "x", []);
        let new = create_element("span", [], "x", []);
        assert_eq!(diff(&old, &new), vec![Patch::Replace { path: vec![], node: new.clone() }]);
        assert_converges(&old, &new);
    }

    #[test]
    fn test_text_to_element_replaces() {
        let old = create_element("p", [], "x", []);
        let new = create_element("p", [], create_element("b", [], "x", []), []);
        assert_converges(&old, &new);
    }

    #[test]
    fn test_event_change() {
        let old = list(vec![row(1, "a", false)]);
        let new = list(vec![row(9, "a", false)]);
        let patches = diff(&old, &new);
        assert!(patches.iter().any(|p| matches!(p, Patch::SetEvents { .. })));
        assert_converges(&old, &new);
    }

    #[test]
    fn test_apply_bad_path() {
        let mut tree = create_element("p", [], Content::Empty, []);
        let patches = [Patch::SetText { path: vec![3], text: "x".into() }];
        assert_eq!(apply(&mut tree, &patches), Err(PatchError::MissingNode(vec![3])));
    }
}
