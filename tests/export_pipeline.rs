// tests/export_pipeline.rs
//! End-to-end tests for the export engine: format resolution, destination
//! handling, and the artifacts each codec leaves on disk.

use std::fs;

use outform::{ErrorKind, ExportConfig, Exporter, Format, Value};
use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::TempDir;

/// An exporter whose relative outputs land inside `dir`.
fn exporter_in(dir: &TempDir) -> Exporter {
    Exporter::new(ExportConfig {
        output_dir: dir.path().to_path_buf(),
        default_format: Format::Json,
    })
}

/// A record set with a hole in the second record.
fn sample_records() -> Value {
    Value::from(json!([
        {"name": "ada", "age": 36, "lang": "rust"},
        {"name": "grace", "age": 45}
    ]))
}

/// A nested document with a section, a scalar, and a list.
fn sample_document() -> Value {
    Value::from(json!({
        "summary": "quarterly report",
        "totals": {"revenue": 1250.5, "units": 42},
        "tags": ["internal", "draft"]
    }))
}

#[test]
fn bare_names_fall_back_to_the_configured_default() {
    let dir = TempDir::new().unwrap();
    let path = exporter_in(&dir)
        .export(&sample_document(), "report", None)
        .unwrap();

    assert!(path.starts_with(dir.path()));
    assert!(path.ends_with("report.json"));

    let text = fs::read_to_string(&path).unwrap();
    assert!(
        text.starts_with("{\n"),
        "JSON should be pretty-printed by default, got: {}",
        &text[..text.len().min(40)]
    );
    let restored: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(restored, sample_document());
}

#[test]
fn filename_extension_beats_the_configured_default() {
    let dir = TempDir::new().unwrap();
    let path = exporter_in(&dir)
        .export(&sample_records(), "table.csv", None)
        .unwrap();

    assert!(path.ends_with("table.csv"));
    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, "name,age,lang\nada,36,rust\ngrace,45,\n");
}

#[test]
fn explicit_token_beats_the_filename_extension() {
    let dir = TempDir::new().unwrap();
    let path = exporter_in(&dir)
        .export(&sample_document(), "notes.yaml", Some("json"))
        .unwrap();

    // The foreign extension is kept and the canonical one appended.
    assert!(path.ends_with("notes.yaml.json"));
    assert!(serde_json::from_str::<Value>(&fs::read_to_string(&path).unwrap()).is_ok());
}

#[test]
fn alias_tokens_resolve_to_their_canonical_format() {
    let dir = TempDir::new().unwrap();
    let path = exporter_in(&dir)
        .export(&sample_document(), "readme", Some("md"))
        .unwrap();

    assert!(path.ends_with("readme.md"));
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("# Exported Data\n\n"));
}

#[test]
fn unknown_tokens_are_rejected_before_anything_is_written() {
    let dir = TempDir::new().unwrap();
    let err = exporter_in(&dir)
        .export(&sample_document(), "data", Some("parquet"))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);
    assert_eq!(err.to_string(), "Unsupported export format: parquet");
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn unknown_extensions_are_rejected_not_silently_defaulted() {
    let dir = TempDir::new().unwrap();
    let err = exporter_in(&dir)
        .export(&sample_document(), "data.toml", None)
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);
}

#[test]
fn tabular_formats_reject_values_that_are_not_record_sets() {
    let dir = TempDir::new().unwrap();
    let err = exporter_in(&dir)
        .export(&sample_document(), "table", Some("csv"))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Shape);
    assert_eq!(
        err.to_string(),
        "CSV export requires a sequence of flat records (mappings of scalar fields)"
    );
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn markup_formats_reject_values_that_are_not_mappings() {
    let dir = TempDir::new().unwrap();
    let err = exporter_in(&dir)
        .export(&sample_records(), "doc", Some("xml"))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Shape);
    assert_eq!(err.to_string(), "XML export requires a mapping at the top level");
}

#[test]
fn nested_relative_destinations_are_created_on_demand() {
    let dir = TempDir::new().unwrap();
    let path = exporter_in(&dir)
        .export(&sample_document(), "reports/q3/summary.md", None)
        .unwrap();

    assert!(path.starts_with(dir.path()));
    assert!(path.ends_with("reports/q3/summary.md"));
    assert!(path.is_file());
}

#[test]
fn absolute_destinations_bypass_the_output_dir() {
    let dir = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    let target = elsewhere.path().join("direct.json");

    let path = exporter_in(&dir)
        .export(&sample_document(), target.to_str().unwrap(), None)
        .unwrap();

    assert_eq!(path, target);
    assert!(target.is_file());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn sqlite_artifacts_read_back_with_typed_columns() {
    let dir = TempDir::new().unwrap();
    let path = exporter_in(&dir)
        .export(&sample_records(), "people", Some("sqlite"))
        .unwrap();

    assert!(path.ends_with("people.db"));
    let conn = rusqlite::Connection::open(&path).unwrap();
    let mut stmt = conn
        .prepare("SELECT name, age, lang FROM data ORDER BY age")
        .unwrap();
    let rows: Vec<(String, i64, Option<String>)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(
        rows,
        vec![
            ("ada".to_string(), 36, Some("rust".to_string())),
            ("grace".to_string(), 45, None),
        ]
    );
}

#[test]
fn excel_artifacts_are_xlsx_workbooks() {
    let dir = TempDir::new().unwrap();
    let path = exporter_in(&dir)
        .export(&sample_records(), "inventory", Some("excel"))
        .unwrap();

    assert!(path.ends_with("inventory.xlsx"));
    let bytes = fs::read(&path).unwrap();
    assert_eq!(&bytes[..2], b"PK", "xlsx files are zip archives");
}

#[test]
fn binary_snapshots_round_trip_with_key_order_intact() {
    let dir = TempDir::new().unwrap();
    let path = exporter_in(&dir)
        .export(&sample_document(), "snapshot", Some("pickle"))
        .unwrap();

    assert!(path.ends_with("snapshot.pkl"));
    let restored = outform::read_pickle(&path).unwrap();
    assert_eq!(restored, sample_document());
}

#[test]
fn yaml_artifacts_use_block_style() {
    let dir = TempDir::new().unwrap();
    let path = exporter_in(&dir)
        .export(&sample_document(), "config", Some("yaml"))
        .unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("summary: quarterly report\n"));
    assert!(text.contains("tags:\n- internal\n- draft\n"));
}

#[test]
fn html_artifacts_are_styled_documents() {
    let dir = TempDir::new().unwrap();
    let path = exporter_in(&dir)
        .export(&sample_document(), "page", Some("html"))
        .unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("<!DOCTYPE html>\n"));
    assert!(text.contains("<h1>Exported Data</h1>"));
    assert!(text.contains("font-family"));
    assert!(text.ends_with("</html>\n"));
}
