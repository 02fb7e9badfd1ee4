//! Options document parser
//!
//! Reads the flat option list (plus preselected values) from a JSON or TOML
//! document and turns it into [`OptionRecord`]s for the tree builder.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{TreeSelectError, TreeSelectResult};
use crate::tree::OptionRecord;

/// Placeholder file name for documents parsed from memory
const INLINE_SOURCE: &str = "<inline>";

/// Serialization format of an options document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    /// Pick a format from the file extension, sniffing the content otherwise
    ///
    /// Content whose first non-blank character is `{` is treated as JSON.
    pub fn detect(path: &Path, content: &str) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ if content.trim_start().starts_with('{') => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// One `[[option]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionEntry {
    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Section names joined with the section delimiter
    pub section: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Output ordering key, defaults to the entry's position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

/// A parsed options document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionsDocument {
    /// Values checked when the widget is built
    #[serde(default)]
    pub preselected: Vec<String>,

    #[serde(default, rename = "option", alias = "options")]
    pub options: Vec<OptionEntry>,
}

impl OptionsDocument {
    /// Parse a document in the given format
    pub fn parse(content: &str, format: DocumentFormat) -> TreeSelectResult<Self> {
        parse_with_source(content, format, Path::new(INLINE_SOURCE))
    }

    pub fn from_json(content: &str) -> TreeSelectResult<Self> {
        Self::parse(content, DocumentFormat::Json)
    }

    pub fn from_toml(content: &str) -> TreeSelectResult<Self> {
        Self::parse(content, DocumentFormat::Toml)
    }

    /// Convert entries to builder records
    ///
    /// Fails on the first entry whose section path is invalid.
    pub fn into_records(self, delimiter: &str) -> TreeSelectResult<Vec<OptionRecord>> {
        self.options
            .into_iter()
            .enumerate()
            .map(|(position, entry)| {
                let section_path = split_section_path(&entry.value, &entry.section, delimiter)?;
                Ok(OptionRecord {
                    value: entry.value,
                    label: entry.label,
                    description: entry.description,
                    section_path,
                    original_index: entry.index.unwrap_or(position),
                })
            })
            .collect()
    }
}

/// Load an options document from disk
pub fn load_document(path: &Path) -> TreeSelectResult<OptionsDocument> {
    let content = fs::read_to_string(path)?;
    let format = DocumentFormat::detect(path, &content);
    parse_with_source(&content, format, path)
}

/// Split a joined section path into segment names
///
/// Empty paths and empty segments are rejected.
pub fn split_section_path(
    value: &str,
    section: &str,
    delimiter: &str,
) -> TreeSelectResult<Vec<String>> {
    let invalid = || TreeSelectError::InvalidPath {
        value: value.to_string(),
        path: section.to_string(),
    };

    if section.is_empty() || delimiter.is_empty() {
        return Err(invalid());
    }

    let segments: Vec<String> = section.split(delimiter).map(str::to_string).collect();
    if segments.iter().any(String::is_empty) {
        return Err(invalid());
    }
    Ok(segments)
}

fn parse_with_source(
    content: &str,
    format: DocumentFormat,
    source: &Path,
) -> TreeSelectResult<OptionsDocument> {
    let invalid = |message: String| TreeSelectError::InvalidDocument {
        file: PathBuf::from(source),
        message,
    };

    match format {
        DocumentFormat::Json => serde_json::from_str(content).map_err(|e| invalid(e.to_string())),
        DocumentFormat::Toml => toml::from_str(content).map_err(|e| invalid(e.to_string())),
    }
}
