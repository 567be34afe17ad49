use crate::config::ChunkerConfig;
use crate::generic::GenericChunker;
use crate::types::{Chunk, ChunkType};

/// Metadata flag set on chunks produced by re-splitting an oversized parent
pub const OVERSIZED_SPLIT_KEY: &str = "oversized_split";

/// Replace every chunk whose line span exceeds `max_chunk_size` with line
/// windows over that chunk's own text.
///
/// Replacement sub-chunks are rebased onto the parent's line range and
/// inherit the parent's chunk type and metadata (flagged with
/// [`OVERSIZED_SPLIT_KEY`]). The replacement step always runs the
/// non-recursive generic line splitter, so re-splitting is bounded to one
/// level and terminates. Char chunks are bounded by character count at
/// creation and pass through untouched.
#[must_use]
pub fn cap_oversized(chunks: Vec<Chunk>, config: &ChunkerConfig) -> Vec<Chunk> {
    let generic = GenericChunker::new(*config);
    let mut out = Vec::with_capacity(chunks.len());

    for chunk in chunks {
        if chunk.chunk_type == ChunkType::Char || chunk.line_count() <= config.max_chunk_size {
            out.push(chunk);
            continue;
        }

        for mut sub in generic.chunk_lines(&chunk.content, &chunk.file_path) {
            sub.start_line = chunk.start_line + sub.start_line - 1;
            sub.end_line = chunk.start_line + sub.end_line - 1;
            sub.chunk_type = chunk.chunk_type;

            // Parent metadata wins on conflicts; the split flag goes on top.
            let mut metadata = sub.metadata;
            metadata.merge(chunk.metadata.clone());
            metadata.set(OVERSIZED_SPLIT_KEY, true);
            sub.metadata = metadata;

            out.push(sub);
        }
    }

    out
}
