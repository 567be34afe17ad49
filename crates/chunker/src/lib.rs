//! Bounded, semantically coherent segmentation of source files.
//!
//! Splits a file into chunks sized for embedding and indexing, preferring
//! semantic boundaries (function and class definitions, markdown sections,
//! tagged document blocks) and degrading to plain line or character windows
//! when no structure is available:
//!
//! ```text
//!   content ──> syntax tree (Python)  ──┐
//!           ──> document structure     ──┼──> size cap ──> chunks
//!           ──> line/char windows      ──┘
//! ```
//!
//! [`Chunker`] is the entry point; the individual splitters are exported for
//! direct use.
//!
//! ```
//! use repo_chunker::{ChunkStrategy, Chunker, ChunkerConfig};
//!
//! let config = ChunkerConfig {
//!     strategy: ChunkStrategy::Line,
//!     max_chunk_size: 2,
//!     overlap: 0,
//!     min_chunk_size: 1,
//! };
//! let chunker = Chunker::new(config)?;
//! let chunks = chunker.chunk_str("a\nb\nc\n", "notes.txt")?;
//! assert_eq!(chunks.len(), 2);
//! assert_eq!(chunks[0].start_line, 1);
//! # Ok::<(), repo_chunker::ChunkerError>(())
//! ```

mod assembler;
mod chunker;
mod config;
mod error;
mod generic;
mod language;
mod structural;
mod syntax;
mod types;

pub use assembler::{cap_oversized, OVERSIZED_SPLIT_KEY};
pub use chunker::Chunker;
pub use config::{ChunkStrategy, ChunkerConfig};
pub use error::{ChunkerError, Result};
pub use generic::GenericChunker;
pub use language::Language;
pub use structural::StructuralChunker;
pub use syntax::{SyntaxChunker, SyntaxTarget};
pub use types::{Chunk, ChunkMetadata, ChunkType, MetadataValue};
