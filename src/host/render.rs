//! DOM Rendering
//!
//! Builds real DOM from a [`Node`] and applies [`Patch`]es to it. Input
//! `value`/`checked` are mirrored to properties since the attributes stop
//! tracking them once the user has interacted.

use todo_core::{Node, Patch};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

use crate::error::HostError;

pub fn build(document: &Document, node: &Node) -> Result<web_sys::Node, HostError> {
    match node {
        Node::Text(text) => Ok(document.create_text_node(text).into()),
        Node::Element(element) => {
            let dom = document.create_element(element.tag)?;
            for attribute in &element.attributes {
                set_attribute(&dom, attribute.name, &attribute.value)?;
            }
            for child in &element.children {
                dom.append_child(&build(document, child)?)?;
            }
            Ok(dom.into())
        }
    }
}

/// Apply `patches` to the tree mounted as the first child of `container`.
pub fn apply(document: &Document, container: &web_sys::Element, patches: &[Patch]) -> Result<(), HostError> {
    for patch in patches {
        match patch {
            Patch::Replace { path, node } => {
                let old = node_at(container, path)?;
                let parent = old.parent_node().ok_or_else(|| HostError::MissingNode(path.clone()))?;
                parent.replace_child(&build(document, node)?, &old)?;
            }
            Patch::SetText { path, text } => node_at(container, path)?.set_text_content(Some(text.as_str())),
            Patch::SetAttribute { path, name, value } => set_attribute(&element_at(container, path)?, name, value)?,
            Patch::RemoveAttribute { path, name } => remove_attribute(&element_at(container, path)?, name)?,
            // Handlers are looked up in the current tree when an event fires.
            Patch::SetEvents { .. } => {}
            Patch::Append { path, node } => {
                node_at(container, path)?.append_child(&build(document, node)?)?;
            }
            Patch::Truncate { path, len } => {
                let parent = node_at(container, path)?;
                while parent.child_nodes().length() as usize > *len {
                    let Some(last) = parent.last_child() else { break };
                    parent.remove_child(&last)?;
                }
            }
        }
    }
    Ok(())
}

fn set_attribute(element: &web_sys::Element, name: &str, value: &str) -> Result<(), HostError> {
    element.set_attribute(name, value)?;
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        match name {
            // Leave the caret alone while typing.
            "value" if input.value() != value => input.set_value(value),
            // Boolean attribute: present means checked, whatever the value.
            "checked" => input.set_checked(true),
            _ => {}
        }
    }
    Ok(())
}

fn remove_attribute(element: &web_sys::Element, name: &str) -> Result<(), HostError> {
    element.remove_attribute(name)?;
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        match name {
            "value" => input.set_value(""),
            "checked" => input.set_checked(false),
            _ => {}
        }
    }
    Ok(())
}

fn node_at(container: &web_sys::Element, path: &[usize]) -> Result<web_sys::Node, HostError> {
    let missing = || HostError::MissingNode(path.to_vec());
    let mut node = container.first_child().ok_or_else(missing)?;
    for &index in path {
        node = node.child_nodes().get(index as u32).ok_or_else(missing)?;
    }
    Ok(node)
}

fn element_at(container: &web_sys::Element, path: &[usize]) -> Result<web_sys::Element, HostError> {
    node_at(container, path)?
        .dyn_into::<web_sys::Element>()
        .map_err(|_| HostError::MissingNode(path.to_vec()))
}

/// Child-index path from the mounted root down to `target`, if it lies
/// inside the mounted tree.
pub fn path_of(container: &web_sys::Element, target: &web_sys::Node) -> Option<Vec<usize>> {
    let root = container.first_child()?;
    let mut path = Vec::new();
    let mut node = target.clone();
    while !node.is_same_node(Some(&root)) {
        let parent = node.parent_node()?;
        path.push(child_index(&parent, &node)?);
        node = parent;
    }
    path.reverse();
    Some(path)
}

fn child_index(parent: &web_sys::Node, child: &web_sys::Node) -> Option<usize> {
    let children = parent.child_nodes();
    (0..children.length())
        .position(|i| children.get(i).is_some_and(|node| node.is_same_node(Some(child))))
}
