// src/export/paths.rs
//! Pure filename calculations. No I/O happens here; the dispatcher joins,
//! absolutizes, and creates directories.

use std::path::Path;

use crate::format::Format;

/// The extension of `filename`, if it has a non-empty one. A leading dot
/// alone (`.profile`) is a hidden file, not an extension.
pub fn filename_extension(filename: &str) -> Option<&str> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
}

/// Whether `filename` already ends in a suffix the format accepts, case
/// insensitively. `yaml` accepts both `.yaml` and `.yml`, `pickle` both
/// `.pkl` and `.pickle`.
pub fn has_accepted_extension(filename: &str, format: Format) -> bool {
    let lowered = filename.to_ascii_lowercase();
    format
        .accepted_extensions()
        .iter()
        .any(|ext| lowered.ends_with(&format!(".{ext}")))
}

/// Append the format's canonical extension unless an accepted one is
/// already present. Idempotent: `out` and `out.json` both resolve to
/// `out.json`. A foreign extension is kept and suffixed (`x.yaml`
/// exported as JSON becomes `x.yaml.json`).
pub fn ensure_extension(filename: &str, format: Format) -> String {
    if has_accepted_extension(filename, format) {
        filename.to_string()
    } else {
        format!("{filename}.{}", format.extension())
    }
}
