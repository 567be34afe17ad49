use crate::error::{ChunkerError, Result};
use crate::language::Language;
use crate::types::{Chunk, ChunkMetadata, ChunkType};
use tree_sitter::{Node, Parser};

/// Syntax node role a chunk can be extracted from
///
/// Closed set by design: node-kind dispatch stays a tagged variant instead of
/// an open visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxTarget {
    Function,
    Class,
}

impl SyntaxTarget {
    /// Tree-sitter node kind this target matches
    const fn node_kind(self) -> &'static str {
        match self {
            // Covers async and nested functions; methods are plain
            // function_definition nodes inside a class body.
            Self::Function => "function_definition",
            Self::Class => "class_definition",
        }
    }

    const fn chunk_type(self) -> ChunkType {
        match self {
            Self::Function => ChunkType::Function,
            Self::Class => ChunkType::Class,
        }
    }

    const fn metadata_key(self) -> &'static str {
        match self {
            Self::Function => "function_name",
            Self::Class => "class_name",
        }
    }
}

/// Syntax-tree chunker: extracts function/class definition spans
pub struct SyntaxChunker {
    parser: Parser,
}

impl SyntaxChunker {
    /// Create a chunker for a syntax-supported language
    pub fn new(language: Language) -> Result<Self> {
        let grammar = language.tree_sitter_language().ok_or_else(|| {
            ChunkerError::parse(format!("no grammar wired up for {}", language.as_str()))
        })?;

        let mut parser = Parser::new();
        parser
            .set_language(&grammar)
            .map_err(|e| ChunkerError::parse(format!("failed to set grammar: {e}")))?;

        Ok(Self { parser })
    }

    /// Parse the file and collect one chunk per definition matching any of
    /// the requested targets.
    ///
    /// The whole tree is traversed, so nested definitions yield their own
    /// chunks and a class chunk legitimately overlaps its methods' chunks.
    /// A tree containing syntax errors is rejected: per-file chunking is
    /// all-AST or all-generic, never a mix.
    pub fn chunk(
        &mut self,
        content: &str,
        file_path: &str,
        targets: &[SyntaxTarget],
    ) -> Result<Vec<Chunk>> {
        let tree = self
            .parser
            .parse(content, None)
            .ok_or_else(|| ChunkerError::parse("parser produced no tree"))?;

        let root = tree.root_node();
        if root.has_error() {
            return Err(ChunkerError::parse(format!(
                "syntax errors in {file_path}"
            )));
        }

        let lines: Vec<&str> = content.lines().collect();
        let mut chunks = Vec::new();

        // Explicit pre-order traversal; children pushed in reverse so chunks
        // come out in document order.
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            let mut cursor = node.walk();
            let children: Vec<Node> = node.children(&mut cursor).collect();
            for child in children.into_iter().rev() {
                stack.push(child);
            }

            if let Some(target) = targets.iter().copied().find(|t| t.node_kind() == node.kind()) {
                chunks.push(self.node_to_chunk(content, &lines, file_path, node, target));
            }
        }

        Ok(chunks)
    }

    /// Build a chunk from a matched definition node, spanning whole lines
    fn node_to_chunk(
        &self,
        content: &str,
        lines: &[&str],
        file_path: &str,
        node: Node,
        target: SyntaxTarget,
    ) -> Chunk {
        let start_line = node.start_position().row + 1;
        let mut end_line = node.end_position().row + 1;
        // A span ending at column 0 stops at the previous line's newline.
        if node.end_position().column == 0 && end_line > start_line {
            end_line -= 1;
        }
        let end_line = end_line.min(lines.len());

        let mut metadata = ChunkMetadata::new();
        if let Some(name) = Self::definition_name(content, node) {
            metadata.set(target.metadata_key(), name);
        }

        Chunk::new(
            lines[start_line - 1..end_line].join("\n"),
            file_path.to_string(),
            start_line,
            end_line,
            target.chunk_type(),
            metadata,
        )
    }

    /// Identifier of a function/class definition node
    fn definition_name(content: &str, node: Node) -> Option<String> {
        let name = node.child_by_field_name("name")?;
        Some(content[name.start_byte()..name.end_byte()].to_string())
    }
}
