// src/render/html.rs
//! HTML renderer.

use crate::constants::DEFAULT_DOCUMENT_TITLE;
use crate::model::{Mapping, Value};

use super::{estimated_capacity, leaf_text};

/// Stylesheet baked into every document: readable typography, striped
/// tables, a centered content column.
const DOCUMENT_STYLE: &str = r#"    <style>
        body { font-family: Arial, sans-serif; line-height: 1.6; margin: 0; padding: 20px; color: #333; }
        h1 { color: #2c3e50; border-bottom: 1px solid #eee; padding-bottom: 10px; }
        h2, h3, h4 { color: #2c3e50; margin-top: 20px; }
        table { border-collapse: collapse; width: 100%; margin-bottom: 20px; }
        th, td { text-align: left; padding: 12px; }
        th { background-color: #f2f2f2; }
        tr:nth-child(even) { background-color: #f9f9f9; }
        .container { max-width: 1200px; margin: 0 auto; }
    </style>
"#;

/// Knobs for the HTML renderer.
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Document title, used for both `<title>` and the `<h1>` heading.
    pub title: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_DOCUMENT_TITLE.to_string(),
        }
    }
}

impl HtmlOptions {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Render a mapping as a complete styled HTML document.
///
/// Keys become `<h2>`..`<hN>` headings, one level below their parent.
/// Mapping values recurse; a non-empty sequence whose every element is a
/// mapping renders as a `<table>` (header row from the first element's
/// keys, later elements projected positionally, missing keys as empty
/// cells); any other sequence renders as a `<ul>`; scalars become `<p>`
/// paragraphs. All interpolated text, headings and title included, is
/// entity-escaped, so the data cannot inject markup.
pub fn render_html(entries: &Mapping, options: &HtmlOptions) -> String {
    let title = escape_html(&options.title);
    let mut out = String::with_capacity(estimated_capacity(entries));

    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    out.push_str(&format!("    <title>{title}</title>\n"));
    out.push_str(DOCUMENT_STYLE);
    out.push_str("</head>\n<body>\n    <div class=\"container\">\n");
    out.push_str(&format!("        <h1>{title}</h1>\n"));
    write_sections(&mut out, entries, 1);
    out.push_str("    </div>\n</body>\n</html>\n");
    out
}

fn write_sections(out: &mut String, entries: &Mapping, level: usize) {
    for (key, value) in entries {
        let heading = level + 1;
        out.push_str(&format!("<h{heading}>{}</h{heading}>\n", escape_html(key)));

        match value {
            Value::Mapping(nested) => write_sections(out, nested, level + 1),
            Value::Sequence(items) => {
                if !items.is_empty() && items.iter().all(Value::is_mapping) {
                    write_table(out, items);
                } else {
                    out.push_str("<ul>\n");
                    for item in items {
                        out.push_str(&format!("<li>{}</li>\n", escape_html(&leaf_text(item))));
                    }
                    out.push_str("</ul>\n");
                }
            }
            Value::Scalar(scalar) => {
                out.push_str(&format!("<p>{}</p>\n", escape_html(&scalar.to_string())));
            }
        }
    }
}

/// `items` is non-empty and all mappings; the first one fixes the columns.
fn write_table(out: &mut String, items: &[Value]) {
    let records: Vec<&Mapping> = items.iter().filter_map(Value::as_mapping).collect();
    let headers: Vec<&String> = records[0].keys().collect();

    out.push_str("<table>\n<tr>\n");
    for header in &headers {
        out.push_str(&format!("<th>{}</th>\n", escape_html(header)));
    }
    out.push_str("</tr>\n");

    for record in records {
        out.push_str("<tr>\n");
        for header in &headers {
            let cell = record.get(*header).map(leaf_text).unwrap_or_default();
            out.push_str(&format!("<td>{}</td>\n", escape_html(&cell)));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</table>\n");
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
