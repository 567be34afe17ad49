//! Repository-wide chunking on top of [`repo_chunker`].
//!
//! ## Pipeline
//!
//! ```text
//! Directory
//!     │
//!     ├──> File Scanner (include/exclude filtering)
//!     │      └─> Sorted source files
//!     │
//!     └──> Chunker (per file, semantic with generic fallback)
//!            └─> Chunks + run stats
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use repo_chunker::ChunkerConfig;
//! use repo_scanner::RepoChunker;
//!
//! fn main() -> anyhow::Result<()> {
//!     let repo = RepoChunker::new("/path/to/project", ChunkerConfig::default())?;
//!     let (chunks, stats) = repo.chunk_repository()?;
//!
//!     println!("Chunked {} files into {} chunks", stats.files, chunks.len());
//!     Ok(())
//! }
//! ```

mod error;
mod repo;
mod scanner;

pub use error::{Result, ScannerError};
pub use repo::{ChunkStats, RepoChunker};
pub use scanner::{FileScanner, DEFAULT_EXCLUDES, SUPPORTED_EXTENSIONS};
