//! Composer Component
//!
//! Text input plus add button. Fully controlled by the list.

use crate::command::{Command, Handler, InputCommand};
use crate::component::Component;
use crate::config::Config;
use crate::dom::{create_element, Content, Node};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposerComponent {
    draft: String,
    placeholder: String,
    add_label: String,
}

impl ComposerComponent {
    pub fn new(draft: &str, config: &Config) -> Self {
        Self {
            draft: draft.to_string(),
            placeholder: config.placeholder.clone(),
            add_label: config.add_label.clone(),
        }
    }
}

impl Component for ComposerComponent {
    fn render(&self) -> Node {
        create_element(
            "div",
            [("class", Some("add-todo".to_string()))],
            vec![
                create_element(
                    "input",
                    [
                        ("type", Some("text".to_string())),
                        ("placeholder", Some(self.placeholder.clone())),
                        ("value", Some(self.draft.clone())),
                    ],
                    Content::Empty,
                    [("input", Handler::Input(InputCommand::ChangeDraft))],
                ),
                create_element(
                    "button",
                    [],
                    self.add_label.as_str(),
                    [("click", Handler::Emit(Command::Add))],
                ),
            ],
            [],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let composer = ComposerComponent::new("milk", &Config::default());
        let node = composer.render();
        let root = node.as_element().unwrap();
        assert_eq!(root.attribute("class"), Some("add-todo"));

        let input = node.find(&|e| e.tag == "input").unwrap();
        assert_eq!(input.attribute("value"), Some("milk"));
        assert_eq!(input.attribute("placeholder"), Some("Задание"));
        assert_eq!(
            input.handler("input").map(|h| h.resolve(Some("milk!".into()))),
            Some(Command::ChangeDraft("milk!".into()))
        );

        let button = node.find(&|e| e.tag == "button").unwrap();
        assert_eq!(button.handler("click"), Some(&Handler::Emit(Command::Add)));
        assert_eq!(Node::Element(button.clone()).text_content(), "+");
    }
}
