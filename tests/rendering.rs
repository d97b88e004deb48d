// tests/rendering.rs
//! Cross-format rendering tests: one realistic document pushed through all
//! three markup renderers, checking the contracts that differ between them.

use outform::{
    render_html, render_markdown, render_xml, HtmlOptions, Mapping, MarkdownOptions, Value,
    XmlOptions,
};
use pretty_assertions::assert_eq;
use serde_json::json;

/// A service status report with nesting, a record table, and a plain list.
fn status_report() -> Mapping {
    as_mapping(json!({
        "overview": "All systems <nominal> & stable",
        "metrics": {"uptime": 99.95, "restarts": 0},
        "incidents": [
            {"id": 1, "severity": "low"},
            {"id": 2, "severity": "high"}
        ],
        "notes": ["follow up", "archive"]
    }))
}

fn as_mapping(value: serde_json::Value) -> Mapping {
    match Value::from(value) {
        Value::Mapping(entries) => entries,
        other => panic!("fixture must be a mapping, got {}", other.variant_name()),
    }
}

#[test]
fn markdown_lays_out_the_whole_report() {
    let doc = render_markdown(&status_report(), &MarkdownOptions::default());
    let expected = concat!(
        "# Exported Data\n\n",
        "## overview\n\n",
        "All systems <nominal> & stable\n\n",
        "## metrics\n\n",
        "### uptime\n\n",
        "99.95\n\n",
        "### restarts\n\n",
        "0\n\n",
        "## incidents\n\n",
        "### id\n\n",
        "1\n\n",
        "### severity\n\n",
        "low\n\n",
        "### id\n\n",
        "2\n\n",
        "### severity\n\n",
        "high\n\n",
        "\n",
        "## notes\n\n",
        "- follow up\n",
        "- archive\n",
        "\n",
    );
    assert_eq!(doc, expected);
}

#[test]
fn html_escapes_the_text_markdown_leaves_verbatim() {
    let report = status_report();

    let md = render_markdown(&report, &MarkdownOptions::default());
    assert!(md.contains("All systems <nominal> & stable\n"));

    let html = render_html(&report, &HtmlOptions::default());
    assert!(html.contains("<p>All systems &lt;nominal&gt; &amp; stable</p>"));
    assert!(!html.contains("<nominal>"));
}

#[test]
fn uniform_records_become_a_table_in_html_and_sections_in_markdown() {
    let report = status_report();

    let html = render_html(&report, &HtmlOptions::default());
    assert!(html.contains("<h2>incidents</h2>\n<table>\n"));
    assert!(html.contains("<th>id</th>\n<th>severity</th>\n"));
    assert!(html.contains("<td>2</td>\n<td>high</td>\n"));

    let md = render_markdown(&report, &MarkdownOptions::default());
    assert!(md.contains("### severity\n\nhigh\n\n"));
    assert!(!md.contains('|'), "markdown renders sections, not pipe tables");
}

#[test]
fn xml_sanitizes_names_and_wraps_sequence_elements() {
    let entries = as_mapping(json!({
        "user name!": "ada",
        "stats": {"count": 2},
        "tags": ["a", "b"]
    }));
    let doc = render_xml(&entries, &XmlOptions::default());
    let expected = r#"<?xml version="1.0" encoding="UTF-8"?>
<data>
  <username>ada</username>
  <stats>
    <count>2</count>
  </stats>
  <tags>
    <item>a</item>
    <item>b</item>
  </tags>
</data>
"#;
    assert_eq!(doc, expected);
}

#[test]
fn titles_flow_into_markdown_verbatim_and_html_escaped() {
    let report = status_report();

    let md = render_markdown(&report, &MarkdownOptions::with_title("R&D / Q3"));
    assert!(md.starts_with("# R&D / Q3\n\n"));

    let html = render_html(&report, &HtmlOptions::with_title("R&D / Q3"));
    assert!(html.contains("<title>R&amp;D / Q3</title>"));
    assert!(html.contains("<h1>R&amp;D / Q3</h1>"));
}

#[test]
fn container_leaves_render_as_compact_json_in_every_format() {
    let entries = as_mapping(json!({"mixed": [[1, 2], "x"]}));

    let md = render_markdown(&entries, &MarkdownOptions::default());
    assert!(md.contains("- [1,2]\n- x\n"));

    let html = render_html(&entries, &HtmlOptions::default());
    assert!(html.contains("<li>[1,2]</li>\n<li>x</li>"));

    let xml = render_xml(&entries, &XmlOptions::default());
    assert!(xml.contains("<item>[1,2]</item>\n    <item>x</item>"));
}

#[test]
fn empty_documents_degenerate_cleanly() {
    let empty = Mapping::new();

    let md = render_markdown(&empty, &MarkdownOptions::default());
    assert_eq!(md, "# Exported Data\n\n");

    let xml = render_xml(&empty, &XmlOptions::default());
    assert_eq!(xml, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<data/>\n");

    let html = render_html(&empty, &HtmlOptions::default());
    assert!(html.contains("<h1>Exported Data</h1>"));
    assert!(!html.contains("<h2>"));
}
