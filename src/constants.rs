// src/constants.rs
//! Domain constants that define the operational boundaries of the engine.
//!
//! Each constant is named for the domain concept it pins down, not its
//! technical role. Reading these constants should tell you the story of
//! how an export behaves: where files land, what artifacts are called
//! when the caller does not say, how rendered output is shaped.

// ---------------------------------------------------------------------------
// Export defaults
// ---------------------------------------------------------------------------

/// Directory that relative output filenames are resolved under when the
/// caller has not configured one.
pub const DEFAULT_OUTPUT_DIR: &str = "./output";

/// Substitute element name for mapping keys that sanitize down to nothing.
///
/// XML element names admit only alphanumerics and underscores here; a key
/// like `"!!!"` would otherwise produce an unnamed element.
pub const FALLBACK_ELEMENT_NAME: &str = "item";

/// Root element wrapping every XML artifact unless the caller overrides it.
pub const DEFAULT_ROOT_ELEMENT: &str = "data";

/// Document title for markdown and HTML artifacts when none is supplied.
pub const DEFAULT_DOCUMENT_TITLE: &str = "Exported Data";

/// Worksheet name for Excel artifacts when none is supplied.
pub const DEFAULT_SHEET_NAME: &str = "Data";

/// Table name for SQLite artifacts when none is supplied.
pub const DEFAULT_TABLE_NAME: &str = "data";

// ---------------------------------------------------------------------------
// Environment surface
// ---------------------------------------------------------------------------

/// Overrides the configured output directory.
pub const ENV_OUTPUT_DIR: &str = "OUTFORM_OUTPUT_DIR";

/// Overrides the configured default format token (aliases accepted).
pub const ENV_DEFAULT_FORMAT: &str = "OUTFORM_FORMAT";

// ---------------------------------------------------------------------------
// Rendering boundaries
// ---------------------------------------------------------------------------

/// Indentation unit for nested XML elements.
pub const XML_INDENT: &str = "  ";

/// Extra character columns added to every computed Excel column width so
/// cell content does not touch the column border.
pub const EXCEL_COLUMN_PADDING: usize = 2;

// ---------------------------------------------------------------------------
// String capacity hints (performance, not correctness)
// ---------------------------------------------------------------------------

/// Estimated characters emitted per mapping entry, used to pre-size the
/// output string of the tree renderers.
///
/// Over-estimating wastes a little memory; under-estimating causes
/// reallocation. Neither affects the rendered bytes.
pub const CHARS_PER_ENTRY_ESTIMATE: usize = 64;

/// Initial capacity for rendered documents with unknown entry counts.
pub const OUTPUT_STRING_INITIAL_CAPACITY: usize = 512;
