use crate::config::ChunkerConfig;
use crate::types::{Chunk, ChunkMetadata, ChunkType};

/// Character allowance per overlap line when windowing by characters
pub(crate) const CHARS_PER_OVERLAP_LINE: usize = 50;

/// Scale factor from the line-mode minimum to the char-mode retention threshold
pub(crate) const CHAR_MIN_SCALE: usize = 20;

/// Windowed line/character splitter with overlap; the universal fallback
///
/// This is the only splitter guaranteed to terminate and to produce at least
/// one chunk for any non-empty input, so every other chunker falls back to it.
pub struct GenericChunker {
    config: ChunkerConfig,
}

impl GenericChunker {
    #[must_use]
    pub fn new(config: ChunkerConfig) -> Self {
        Self { config }
    }

    /// Split content into consecutive windows of `max_chunk_size` lines.
    ///
    /// Consecutive windows share `overlap` lines. A window below
    /// `min_chunk_size` lines is dropped, unless the whole file has at most
    /// `2 * min_chunk_size` lines — short files keep every window so they are
    /// never filtered to zero chunks.
    #[must_use]
    pub fn chunk_lines(&self, content: &str, file_path: &str) -> Vec<Chunk> {
        let lines: Vec<&str> = content.lines().collect();
        let total_lines = lines.len();
        if total_lines == 0 {
            return Vec::new();
        }

        let keep_all = total_lines <= self.config.min_chunk_size * 2;
        let mut chunks = Vec::new();
        let mut start = 0;

        loop {
            let end = (start + self.config.max_chunk_size).min(total_lines);
            let window = &lines[start..end];

            if keep_all || window.len() >= self.config.min_chunk_size {
                let metadata = ChunkMetadata::new().with("total_lines", total_lines);
                chunks.push(Chunk::new(
                    window.join("\n"),
                    file_path.to_string(),
                    start + 1,
                    end,
                    ChunkType::Line,
                    metadata,
                ));
            }

            if end == total_lines {
                break;
            }
            // Validation guarantees overlap < max_chunk_size, so this advances.
            start = end - self.config.overlap;
        }

        chunks
    }

    /// Split content into consecutive windows of `max_chunk_size` characters.
    ///
    /// Line bounds are recovered by accumulating line lengths and are
    /// approximate at window boundaries. The retention threshold is the
    /// line-mode minimum scaled by [`CHAR_MIN_SCALE`], with the same
    /// short-input exemption as line mode.
    #[must_use]
    pub fn chunk_chars(&self, content: &str, file_path: &str) -> Vec<Chunk> {
        let chars: Vec<char> = content.chars().collect();
        let total_chars = chars.len();
        if total_chars == 0 {
            return Vec::new();
        }

        let line_lens: Vec<usize> = content.lines().map(|l| l.chars().count()).collect();
        let threshold = self.config.min_chunk_size * CHAR_MIN_SCALE;
        let keep_all = total_chars <= threshold * 2;
        let step = self
            .config
            .max_chunk_size
            .saturating_sub(self.config.overlap * CHARS_PER_OVERLAP_LINE)
            .max(1);

        let mut chunks = Vec::new();
        let mut start = 0;

        loop {
            let end = (start + self.config.max_chunk_size).min(total_chars);
            let window: String = chars[start..end].iter().collect();

            if keep_all || window.chars().count() >= threshold {
                let (start_line, end_line) = approx_line_range(&line_lens, start, end);
                let metadata = ChunkMetadata::new().with("total_chars", total_chars);
                chunks.push(Chunk::new(
                    window,
                    file_path.to_string(),
                    start_line,
                    end_line,
                    ChunkType::Char,
                    metadata,
                ));
            }

            if end == total_chars {
                break;
            }
            start += step;
        }

        chunks
    }
}

/// Map a character window `[start, end)` to an approximate 1-indexed line
/// range by walking cumulative line lengths (+1 per newline).
fn approx_line_range(line_lens: &[usize], start: usize, end: usize) -> (usize, usize) {
    let mut acc = 0;
    let mut start_line = 1;
    let mut end_line = 1;

    for (idx, len) in line_lens.iter().enumerate() {
        let line_end = acc + len + 1;
        if acc <= start && start < line_end {
            start_line = idx + 1;
        }
        if end > acc {
            end_line = idx + 1;
        }
        acc = line_end;
    }

    (start_line, end_line.max(start_line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn numbered_lines(count: usize) -> String {
        (1..=count)
            .map(|i| format!("line {i}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn config(max: usize, overlap: usize, min: usize) -> ChunkerConfig {
        ChunkerConfig {
            max_chunk_size: max,
            overlap,
            min_chunk_size: min,
            ..Default::default()
        }
    }

    #[test]
    fn small_file_is_kept_despite_minimum() {
        let chunker = GenericChunker::new(config(500, 0, 10));
        let chunks = chunker.chunk_lines(&numbered_lines(6), "short.txt");

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].start_line, 1);
        assert_eq!(chunks[0].end_line, 6);
        assert_eq!(chunks[0].chunk_type, ChunkType::Line);
    }

    #[test]
    fn zero_overlap_windows_reconstruct_the_file() {
        let content = numbered_lines(25);
        let chunker = GenericChunker::new(config(10, 0, 1));
        let chunks = chunker.chunk_lines(&content, "f.txt");

        assert_eq!(chunks.len(), 3);
        let rebuilt = chunks
            .iter()
            .map(|c| c.content.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(rebuilt, content);
    }

    #[test]
    fn overlapping_windows_share_lines_and_terminate() {
        let chunker = GenericChunker::new(config(10, 3, 1));
        let chunks = chunker.chunk_lines(&numbered_lines(20), "f.txt");

        assert_eq!(chunks[0].start_line, 1);
        assert_eq!(chunks[0].end_line, 10);
        assert_eq!(chunks[1].start_line, 8);
        assert_eq!(chunks[1].end_line, 17);
        // Final window reaches EOF and the scan stops there.
        assert_eq!(chunks.last().unwrap().end_line, 20);
    }

    #[test]
    fn short_windows_are_filtered_in_large_files() {
        // 52 lines, windows of 25: last window has 2 lines < min 5.
        let chunker = GenericChunker::new(config(25, 0, 5));
        let chunks = chunker.chunk_lines(&numbered_lines(52), "f.txt");

        assert_eq!(chunks.len(), 2);
        assert!(chunks.iter().all(|c| c.line_count() >= 5));
    }

    #[test]
    fn line_bounds_never_exceed_file_length() {
        let content = numbered_lines(37);
        let total = content.lines().count();
        let chunker = GenericChunker::new(config(7, 2, 1));
        for chunk in chunker.chunk_lines(&content, "f.txt") {
            assert!(chunk.start_line <= chunk.end_line);
            assert!(chunk.end_line <= total);
        }
    }

    #[test]
    fn char_windows_cover_content_with_approximate_lines() {
        let content = numbered_lines(40);
        let total_lines = content.lines().count();
        let chunker = GenericChunker::new(config(100, 0, 0));
        let chunks = chunker.chunk_chars(&content, "f.txt");

        assert!(!chunks.is_empty());
        let total: usize = chunks.iter().map(|c| c.content.chars().count()).sum();
        assert_eq!(total, content.chars().count());
        for chunk in &chunks {
            assert_eq!(chunk.chunk_type, ChunkType::Char);
            assert!(chunk.start_line <= chunk.end_line);
            assert!(chunk.end_line <= total_lines);
        }
    }

    #[test]
    fn tiny_input_survives_char_threshold() {
        // threshold = 10 * 20 = 200 chars; content is far below it.
        let chunker = GenericChunker::new(config(500, 0, 10));
        let chunks = chunker.chunk_chars("short text\n", "f.txt");
        assert_eq!(chunks.len(), 1);
    }

    #[test]
    fn empty_content_yields_no_chunks() {
        let chunker = GenericChunker::new(config(10, 0, 1));
        assert!(chunker.chunk_lines("", "f.txt").is_empty());
        assert!(chunker.chunk_chars("", "f.txt").is_empty());
    }
}
