use crate::assembler::cap_oversized;
use crate::config::{ChunkStrategy, ChunkerConfig};
use crate::error::Result;
use crate::generic::GenericChunker;
use crate::language::Language;
use crate::structural::StructuralChunker;
use crate::syntax::{SyntaxChunker, SyntaxTarget};
use crate::types::Chunk;
use std::path::Path;

/// Per-file segmentation entry point
///
/// Selects and sequences the syntax-aware, structural and generic splitters
/// for the configured strategy. Every path terminates in the generic line
/// splitter, so non-empty content never yields zero chunks.
pub struct Chunker {
    config: ChunkerConfig,
    structural: StructuralChunker,
}

impl Chunker {
    /// Create a chunker, validating the configuration up front
    pub fn new(config: ChunkerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            structural: StructuralChunker::new(),
        })
    }

    /// Chunker configuration
    #[must_use]
    pub const fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    /// Chunk a single file from disk.
    ///
    /// Bytes are decoded as UTF-8 with a permissive Latin-1 fallback; only
    /// an unreadable file is an error.
    pub fn chunk_file(&self, path: impl AsRef<Path>) -> Result<Vec<Chunk>> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let content = decode_lossy(bytes);
        self.chunk_str(&content, &path.to_string_lossy())
    }

    /// Chunk in-memory content as if read from `file_path`.
    ///
    /// Empty or whitespace-only content legitimately yields zero chunks.
    /// Malformed content never errors: parse failures fall back to line
    /// windows internally.
    pub fn chunk_str(&self, content: &str, file_path: &str) -> Result<Vec<Chunk>> {
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let language = Language::from_path(file_path);
        let generic = GenericChunker::new(self.config);

        let chunks = match self.config.strategy {
            ChunkStrategy::Line => generic.chunk_lines(content, file_path),
            ChunkStrategy::Char => generic.chunk_chars(content, file_path),
            ChunkStrategy::Function => cap_oversized(
                self.semantic_chunks(content, file_path, language, &[SyntaxTarget::Function]),
                &self.config,
            ),
            ChunkStrategy::Class => cap_oversized(
                self.semantic_chunks(content, file_path, language, &[SyntaxTarget::Class]),
                &self.config,
            ),
            ChunkStrategy::Mixed => cap_oversized(
                self.semantic_chunks(
                    content,
                    file_path,
                    language,
                    &[SyntaxTarget::Function, SyntaxTarget::Class],
                ),
                &self.config,
            ),
        };

        // Terminal producer of the fallback chain: a file with content must
        // never yield zero chunks.
        if chunks.is_empty() {
            log::debug!("no semantic chunks for {file_path}; using line windows");
            return Ok(generic.chunk_lines(content, file_path));
        }

        Ok(chunks)
    }

    /// First link of the fallback chain: syntax-aware chunks where a grammar
    /// applies, structural chunks for document formats, empty otherwise.
    ///
    /// Syntax failures are all-or-nothing for the file — partial AST results
    /// are never mixed with line windows.
    fn semantic_chunks(
        &self,
        content: &str,
        file_path: &str,
        language: Language,
        targets: &[SyntaxTarget],
    ) -> Vec<Chunk> {
        if language.supports_ast() {
            let parsed = SyntaxChunker::new(language)
                .and_then(|mut chunker| chunker.chunk(content, file_path, targets));
            return match parsed {
                Ok(chunks) => chunks,
                Err(e) => {
                    log::warn!("syntax chunking failed for {file_path}: {e}; falling back");
                    Vec::new()
                }
            };
        }

        if !language.is_structured_document() {
            return Vec::new();
        }
        match language {
            Language::Markdown => self.structural.chunk_markdown(content, file_path),
            _ => self.structural.chunk_tagged_blocks(content, file_path),
        }
    }
}

/// Decode file bytes as UTF-8, falling back to Latin-1 (which maps every
/// byte, so decoding itself never fails)
fn decode_lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(e) => e.into_bytes().iter().map(|&b| b as char).collect(),
    }
}
