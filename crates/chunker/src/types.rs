use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A bounded, located slice of a file's text with a type tag and metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chunk {
    /// The text content of the chunk
    pub content: String,

    /// Source file path
    pub file_path: String,

    /// Start line (1-indexed)
    pub start_line: usize,

    /// End line (1-indexed, inclusive)
    pub end_line: usize,

    /// What kind of unit this chunk represents
    pub chunk_type: ChunkType,

    /// Open key/value metadata (symbol names, section titles, flags)
    pub metadata: ChunkMetadata,
}

impl Chunk {
    /// Create a new chunk
    #[must_use]
    pub const fn new(
        content: String,
        file_path: String,
        start_line: usize,
        end_line: usize,
        chunk_type: ChunkType,
        metadata: ChunkMetadata,
    ) -> Self {
        Self {
            content,
            file_path,
            start_line,
            end_line,
            chunk_type,
            metadata,
        }
    }

    /// Number of lines this chunk spans
    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.end_line.saturating_sub(self.start_line) + 1
    }

    /// Check if the chunk spans a specific line
    #[must_use]
    pub const fn contains_line(&self, line: usize) -> bool {
        line >= self.start_line && line <= self.end_line
    }
}

/// Kind of unit a chunk represents
///
/// Line and char chunks come from generic windowed splitting; function and
/// class chunks from syntax-tree extraction; the remaining variants from
/// structural document parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChunkType {
    #[serde(rename = "line")]
    Line,
    #[serde(rename = "char")]
    Char,
    #[serde(rename = "function")]
    Function,
    #[serde(rename = "class")]
    Class,
    #[serde(rename = "markdown_section")]
    MarkdownSection,
    #[serde(rename = "template")]
    TemplateBlock,
    #[serde(rename = "script")]
    ScriptBlock,
    #[serde(rename = "style")]
    StyleBlock,
}

impl ChunkType {
    /// Stable string form, matching the serialized representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Char => "char",
            Self::Function => "function",
            Self::Class => "class",
            Self::MarkdownSection => "markdown_section",
            Self::TemplateBlock => "template",
            Self::ScriptBlock => "script",
            Self::StyleBlock => "style",
        }
    }
}

/// A scalar or list metadata value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Str(String),
    Int(i64),
    Bool(bool),
    List(Vec<String>),
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<usize> for MetadataValue {
    fn from(value: usize) -> Self {
        Self::Int(value as i64)
    }
}

impl From<bool> for MetadataValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<String>> for MetadataValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

/// Open, ordered metadata map attached to every chunk
///
/// `BTreeMap` keeps key order (and therefore serialization) deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChunkMetadata(BTreeMap<String, MetadataValue>);

impl ChunkMetadata {
    /// Create an empty metadata map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value under a key
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<MetadataValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<MetadataValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Look up a value by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.0.get(key)
    }

    /// Look up a string value by key
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.0.get(key) {
            Some(MetadataValue::Str(s)) => Some(s),
            _ => None,
        }
    }

    /// True if the key is present
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Overlay all entries from `other`, overwriting on key conflicts
    pub fn merge(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    /// True if no entries are present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &MetadataValue)> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn chunk_line_count_is_inclusive() {
        let chunk = Chunk::new(
            "code".to_string(),
            "test.py".to_string(),
            10,
            15,
            ChunkType::Line,
            ChunkMetadata::default(),
        );
        assert_eq!(chunk.line_count(), 6);
        assert!(chunk.contains_line(10));
        assert!(chunk.contains_line(15));
        assert!(!chunk.contains_line(16));
    }

    #[test]
    fn metadata_merge_overwrites_on_conflict() {
        let mut base = ChunkMetadata::new()
            .with("function_name", "outer")
            .with("total_lines", 40usize);
        let overlay = ChunkMetadata::new()
            .with("function_name", "inner")
            .with("oversized_split", true);

        base.merge(overlay);

        assert_eq!(base.get_str("function_name"), Some("inner"));
        assert_eq!(base.get("total_lines"), Some(&MetadataValue::Int(40)));
        assert_eq!(base.get("oversized_split"), Some(&MetadataValue::Bool(true)));
    }

    #[test]
    fn metadata_serializes_as_flat_map() {
        let metadata = ChunkMetadata::new()
            .with("section_title", "Usage")
            .with("section_level", 2usize)
            .with("code_block_langs", vec!["rust".to_string()]);

        let json = serde_json::to_string(&metadata).unwrap();
        assert_eq!(
            json,
            r#"{"code_block_langs":["rust"],"section_level":2,"section_title":"Usage"}"#
        );
    }

    #[test]
    fn chunk_type_round_trips_through_serde() {
        for chunk_type in [
            ChunkType::Line,
            ChunkType::Char,
            ChunkType::Function,
            ChunkType::Class,
            ChunkType::MarkdownSection,
            ChunkType::TemplateBlock,
            ChunkType::ScriptBlock,
            ChunkType::StyleBlock,
        ] {
            let json = serde_json::to_string(&chunk_type).unwrap();
            assert_eq!(json, format!("\"{}\"", chunk_type.as_str()));
            let back: ChunkType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, chunk_type);
        }
    }
}
