//! XML configuration files
//!
//! The root element's name is dropped and its children become the top-level
//! keys. Below that:
//! - an element with child elements becomes a mapping keyed by tag name
//! - repeated sibling elements with the same tag collapse into a sequence
//! - attributes are collected under `@attributes`
//! - text is kept as a string; text next to child elements or attributes is
//!   stored under `@text`
//! - an element with no text, children or attributes is an empty mapping

use std::mem;

use roxmltree::{Document, Node};
use strata_core::error::StrataError;
use strata_core::types::{Mapping, Value};

use super::FormatParser;
use crate::ConfigResult;

const ATTRIBUTES_KEY: &str = "@attributes";
const TEXT_KEY: &str = "@text";

/// Parser for `.xml` files
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlParser;

impl FormatParser for XmlParser {
    fn name(&self) -> &'static str {
        "XML"
    }

    fn supported_extensions(&self) -> &[&str] {
        &["xml"]
    }

    fn parse_str(&self, content: &str, origin: &str) -> ConfigResult<Value> {
        let document = Document::parse(content).map_err(|e| StrataError::parse(self.name(), origin, e))?;

        Ok(from_element(document.root_element()))
    }
}

fn from_element(node: Node<'_, '_>) -> Value {
    let mut map = Mapping::new();

    let attributes: Mapping = node
        .attributes()
        .map(|attr| (attr.name().to_string(), Value::from(attr.value())))
        .collect();
    if !attributes.is_empty() {
        map.insert(ATTRIBUTES_KEY.to_string(), Value::Mapping(attributes));
    }

    let mut has_children = false;
    for child in node.children().filter(Node::is_element) {
        has_children = true;
        let name = child.tag_name().name().to_string();
        let value = from_element(child);

        // Element values are never sequences, so a sequence here means the
        // tag has already repeated
        match map.get_mut(&name) {
            Some(Value::Sequence(items)) => items.push(value),
            Some(existing) => {
                let first = mem::take(existing);
                *existing = Value::Sequence(vec![first, value]);
            },
            None => {
                map.insert(name, value);
            },
        }
    }

    let text: String = node
        .children()
        .filter(Node::is_text)
        .filter_map(|child| child.text())
        .collect();
    let text = text.trim();

    if text.is_empty() {
        return Value::Mapping(map);
    }
    if !has_children && map.is_empty() {
        return Value::from(text);
    }

    map.insert(TEXT_KEY.to_string(), Value::from(text));
    Value::Mapping(map)
}
