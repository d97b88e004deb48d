// src/render/xml.rs
//! XML renderer.

use crate::constants::{DEFAULT_ROOT_ELEMENT, FALLBACK_ELEMENT_NAME, XML_INDENT};
use crate::model::{Mapping, Value};

use super::{estimated_capacity, leaf_text};

/// Knobs for the XML renderer.
#[derive(Debug, Clone)]
pub struct XmlOptions {
    /// Name of the document's root element, used verbatim. Keys inside the
    /// data are sanitized; this configuration value is not.
    pub root_element: String,
}

impl Default for XmlOptions {
    fn default() -> Self {
        Self {
            root_element: DEFAULT_ROOT_ELEMENT.to_string(),
        }
    }
}

impl XmlOptions {
    pub fn with_root(root_element: impl Into<String>) -> Self {
        Self {
            root_element: root_element.into(),
        }
    }
}

/// Reduce a key to a well-formed element name: every character that is not
/// alphanumeric or `_` is dropped, and a name left empty by that falls
/// back to `item`. Unicode letters and digits survive.
pub fn sanitize_element_name(raw: &str) -> String {
    let name: String = raw
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    if name.is_empty() {
        FALLBACK_ELEMENT_NAME.to_string()
    } else {
        name
    }
}

/// Render a mapping as a pretty-printed XML document.
///
/// The document carries an XML declaration and a configurable root
/// element, indented two spaces per level. Keys become element names after
/// sanitization; mapping values nest, sequence values emit one `<item>`
/// child per element (mapping elements recurse inside the wrapper, other
/// elements become wrapper text), scalars become element text. Elements
/// with no content are self-closing. Text content escapes `&`, `<`, `>`.
pub fn render_xml(entries: &Mapping, options: &XmlOptions) -> String {
    let mut out = String::with_capacity(estimated_capacity(entries));
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");

    let root = &options.root_element;
    if entries.is_empty() {
        out.push_str(&format!("<{root}/>\n"));
    } else {
        out.push_str(&format!("<{root}>\n"));
        write_elements(&mut out, entries, 1);
        out.push_str(&format!("</{root}>\n"));
    }
    out
}

fn write_elements(out: &mut String, entries: &Mapping, depth: usize) {
    for (key, value) in entries {
        let name = sanitize_element_name(key);
        write_element(out, &name, value, depth);
    }
}

fn write_element(out: &mut String, name: &str, value: &Value, depth: usize) {
    let pad = XML_INDENT.repeat(depth);
    match value {
        Value::Mapping(nested) => {
            if nested.is_empty() {
                out.push_str(&format!("{pad}<{name}/>\n"));
            } else {
                out.push_str(&format!("{pad}<{name}>\n"));
                write_elements(out, nested, depth + 1);
                out.push_str(&format!("{pad}</{name}>\n"));
            }
        }
        Value::Sequence(items) => {
            if items.is_empty() {
                out.push_str(&format!("{pad}<{name}/>\n"));
            } else {
                out.push_str(&format!("{pad}<{name}>\n"));
                for item in items {
                    match item {
                        Value::Mapping(_) => write_element(out, "item", item, depth + 1),
                        other => write_text_element(out, "item", &leaf_text(other), depth + 1),
                    }
                }
                out.push_str(&format!("{pad}</{name}>\n"));
            }
        }
        scalar => write_text_element(out, name, &leaf_text(scalar), depth),
    }
}

fn write_text_element(out: &mut String, name: &str, text: &str, depth: usize) {
    let pad = XML_INDENT.repeat(depth);
    if text.is_empty() {
        out.push_str(&format!("{pad}<{name}/>\n"));
    } else {
        out.push_str(&format!("{pad}<{name}>"));
        push_escaped(out, text);
        out.push_str(&format!("</{name}>\n"));
    }
}

fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}
