// src/render/mod.rs
//! Tree flatteners: recursive transforms from the value tree to text
//! documents.
//!
//! All three renderers share the same walk: the top-level mapping's keys
//! become section headings, nested mappings recurse one level deeper, and
//! sequences flatten into the format's list construct. Each renderer is a
//! pure function from a mapping to a complete document string; file
//! placement belongs to the dispatcher.

pub mod html;
pub mod markdown;
pub mod xml;

pub use html::{render_html, HtmlOptions};
pub use markdown::{render_markdown, MarkdownOptions};
pub use xml::{render_xml, sanitize_element_name, XmlOptions};

use crate::constants::{CHARS_PER_ENTRY_ESTIMATE, OUTPUT_STRING_INITIAL_CAPACITY};
use crate::model::{Mapping, Value};

/// The text of a leaf as it appears in a rendered document. Scalars use
/// their natural notation (null is the empty string). A container reached
/// where only a leaf fits, such as a mapping inside a mixed sequence,
/// falls back to its compact JSON text so no data silently disappears.
pub(crate) fn leaf_text(value: &Value) -> String {
    match value {
        Value::Scalar(scalar) => scalar.to_string(),
        nested => serde_json::to_string(nested).unwrap_or_default(),
    }
}

/// Starting capacity for a rendered document buffer.
pub(crate) fn estimated_capacity(entries: &Mapping) -> usize {
    OUTPUT_STRING_INITIAL_CAPACITY + entries.len() * CHARS_PER_ENTRY_ESTIMATE
}
