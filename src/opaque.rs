// src/opaque.rs
//! Opaque codecs: whole-tree serializations with no layout decisions of
//! their own.
//!
//! JSON, YAML, and the binary snapshot all hand the value tree to a serde
//! serializer and write the result in one shot. Every one of them is
//! round-trip faithful: reading the artifact back with the matching
//! deserializer reproduces a structurally equal value, mapping order
//! included.

use std::fs;
use std::path::Path;

use crate::error::{ExportError, Result};
use crate::format::Format;
use crate::model::Value;

/// Knobs for the JSON codec.
#[derive(Debug, Clone)]
pub struct JsonOptions {
    /// Pretty-print with two-space indentation. Off writes the compact
    /// form; the choice changes whitespace only.
    pub pretty: bool,
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl JsonOptions {
    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

/// Write a value as JSON.
pub fn write_json(value: &Value, path: &Path, options: &JsonOptions) -> Result<()> {
    let text = if options.pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|e| ExportError::codec_failure(Format::Json, path, e))?;
    fs::write(path, text).map_err(|e| ExportError::io_failure(path, e))
}

/// Write a value as block-style YAML.
pub fn write_yaml(value: &Value, path: &Path) -> Result<()> {
    let text = serde_yaml::to_string(value)
        .map_err(|e| ExportError::codec_failure(Format::Yaml, path, e))?;
    fs::write(path, text).map_err(|e| ExportError::io_failure(path, e))
}

/// Write a value as a compact binary snapshot (MessagePack). The format
/// is self-describing, so [`read_pickle`] needs no schema to restore it.
pub fn write_pickle(value: &Value, path: &Path) -> Result<()> {
    let bytes = rmp_serde::to_vec(value)
        .map_err(|e| ExportError::codec_failure(Format::Pickle, path, e))?;
    fs::write(path, bytes).map_err(|e| ExportError::io_failure(path, e))
}

/// Restore a value from a binary snapshot written by [`write_pickle`].
pub fn read_pickle(path: &Path) -> Result<Value> {
    let bytes = fs::read(path).map_err(|e| ExportError::io_failure(path, e))?;
    rmp_serde::from_slice(&bytes)
        .map_err(|e| ExportError::codec_failure(Format::Pickle, path, e))
}
