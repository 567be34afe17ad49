use crate::error::Result;
use crate::scanner::FileScanner;
use repo_chunker::{Chunk, Chunker, ChunkerConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Summary of a repository chunking run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkStats {
    /// Files successfully chunked
    pub files: usize,
    /// Chunks produced across all files
    pub chunks: usize,
    /// Files skipped because reading or chunking failed
    pub failed_files: usize,
}

/// Whole-repository chunking: scan, then chunk each file in scan order
pub struct RepoChunker {
    scanner: FileScanner,
    chunker: Chunker,
}

impl RepoChunker {
    /// Repository chunker over `root` with the default scan exclusions
    pub fn new(root: impl AsRef<Path>, config: ChunkerConfig) -> Result<Self> {
        Ok(Self {
            scanner: FileScanner::new(root)?,
            chunker: Chunker::new(config)?,
        })
    }

    /// Repository chunker with custom include/exclude patterns
    pub fn with_filters(
        root: impl AsRef<Path>,
        config: ChunkerConfig,
        include: &[String],
        exclude: &[String],
    ) -> Result<Self> {
        Ok(Self {
            scanner: FileScanner::with_filters(root, include, exclude)?,
            chunker: Chunker::new(config)?,
        })
    }

    /// Chunk every chunkable file under the root.
    ///
    /// A file that fails to read or chunk is logged and skipped; only a
    /// missing root aborts the run. Chunks come out grouped by file, files
    /// in sorted scan order.
    pub fn chunk_repository(&self) -> Result<(Vec<Chunk>, ChunkStats)> {
        let files = self.scanner.scan()?;

        let mut chunks = Vec::new();
        let mut stats = ChunkStats::default();

        for path in &files {
            match self.chunker.chunk_file(path) {
                Ok(file_chunks) => {
                    stats.files += 1;
                    stats.chunks += file_chunks.len();
                    chunks.extend(file_chunks);
                }
                Err(e) => {
                    stats.failed_files += 1;
                    log::warn!("Skipping {}: {e}", path.display());
                }
            }
        }

        log::info!(
            "Chunked {} files into {} chunks ({} failed) under {}",
            stats.files,
            stats.chunks,
            stats.failed_files,
            self.scanner.root().display()
        );
        Ok((chunks, stats))
    }
}
