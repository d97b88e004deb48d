// src/render/markdown.rs
//! Markdown renderer.

use crate::constants::DEFAULT_DOCUMENT_TITLE;
use crate::model::{Mapping, Value};

use super::{estimated_capacity, leaf_text};

/// Knobs for the Markdown renderer.
#[derive(Debug, Clone)]
pub struct MarkdownOptions {
    /// Document title, rendered as the single `#` heading.
    pub title: String,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_DOCUMENT_TITLE.to_string(),
        }
    }
}

impl MarkdownOptions {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Render a mapping as a Markdown document.
///
/// The document opens with `# {title}` and a blank line. Each key becomes
/// a heading one level below its parent (`##` at the top, `###` inside a
/// nested mapping, and so on), followed by a blank line. Mapping values
/// recurse; sequences render as sections per element when every element is
/// a mapping, otherwise as one `- ` bullet per element, with a blank line
/// closing the sequence; scalars become a paragraph.
///
/// Leaf text is inserted verbatim. Markdown-significant characters in the
/// data (`*`, `#`, `|`, ...) are not escaped, so hostile text can change
/// the document structure. Callers that need inert output should prefer
/// the HTML renderer, which escapes.
pub fn render_markdown(entries: &Mapping, options: &MarkdownOptions) -> String {
    let mut out = String::with_capacity(estimated_capacity(entries));
    out.push_str(&format!("# {}\n\n", options.title));
    write_sections(&mut out, entries, 1);
    out
}

fn write_sections(out: &mut String, entries: &Mapping, level: usize) {
    for (key, value) in entries {
        out.push_str(&format!("{} {}\n\n", "#".repeat(level + 1), key));

        match value {
            Value::Mapping(nested) => write_sections(out, nested, level + 1),
            Value::Sequence(items) => {
                if items.iter().all(Value::is_mapping) {
                    for item in items {
                        if let Value::Mapping(nested) = item {
                            write_sections(out, nested, level + 1);
                        }
                    }
                } else {
                    for item in items {
                        out.push_str(&format!("- {}\n", leaf_text(item)));
                    }
                }
                out.push('\n');
            }
            Value::Scalar(scalar) => {
                out.push_str(&format!("{scalar}\n\n"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn mapping(value: serde_json::Value) -> Mapping {
        match Value::from(value) {
            Value::Mapping(entries) => entries,
            other => panic!("test input must be a mapping, got {}", other.variant_name()),
        }
    }

    #[test]
    fn renders_title_sections_and_bullets() {
        let entries = mapping(json!({"summary": "ok", "items": ["a", "b"]}));
        let doc = render_markdown(&entries, &MarkdownOptions::with_title("Report"));
        assert_eq!(doc, "# Report\n\n## summary\n\nok\n\n## items\n\n- a\n- b\n\n");
    }

    #[test]
    fn nested_mappings_deepen_the_heading_level() {
        let entries = mapping(json!({"outer": {"inner": "x"}}));
        let doc = render_markdown(&entries, &MarkdownOptions::default());
        assert_eq!(doc, "# Exported Data\n\n## outer\n\n### inner\n\nx\n\n");
    }

    #[test]
    fn sequence_of_mappings_renders_sections_per_element() {
        let entries = mapping(json!({"rows": [{"n": 1}, {"n": 2}]}));
        let doc = render_markdown(&entries, &MarkdownOptions::with_title("T"));
        assert_eq!(doc, "# T\n\n## rows\n\n### n\n\n1\n\n### n\n\n2\n\n\n");
    }

    #[test]
    fn mixed_sequence_renders_bullets_with_json_for_containers() {
        let entries = mapping(json!({"mixed": [1, {"a": 2}]}));
        let doc = render_markdown(&entries, &MarkdownOptions::with_title("T"));
        assert_eq!(doc, "# T\n\n## mixed\n\n- 1\n- {\"a\":2}\n\n");
    }

    #[test]
    fn null_scalar_renders_an_empty_paragraph() {
        let entries = mapping(json!({"note": null}));
        let doc = render_markdown(&entries, &MarkdownOptions::with_title("T"));
        assert_eq!(doc, "# T\n\n## note\n\n\n\n");
    }
}
