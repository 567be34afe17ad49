use crate::types::{Chunk, ChunkMetadata, ChunkType};
use regex::Regex;

/// Named top-level region kind of a tagged-block document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    Template,
    Script,
    Style,
}

impl BlockKind {
    fn from_tag(tag: &str) -> Self {
        match tag.to_lowercase().as_str() {
            "template" => Self::Template,
            "script" => Self::Script,
            _ => Self::Style,
        }
    }

    const fn tag(self) -> &'static str {
        match self {
            Self::Template => "template",
            Self::Script => "script",
            Self::Style => "style",
        }
    }

    const fn chunk_type(self) -> ChunkType {
        match self {
            Self::Template => ChunkType::TemplateBlock,
            Self::Script => ChunkType::ScriptBlock,
            Self::Style => ChunkType::StyleBlock,
        }
    }
}

/// An accumulating heading-delimited section
struct SectionState {
    start: usize,
    title: Option<String>,
    level: usize,
    code_langs: Vec<String>,
}

/// Heading-section and tagged-block segmentation for document formats
pub struct StructuralChunker {
    heading_re: Regex,
    fence_re: Regex,
    open_tag_re: Regex,
    close_tag_re: Regex,
    lang_attr_re: Regex,
}

impl StructuralChunker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            heading_re: Regex::new(r"^(#{1,6})\s+(.+)$").expect("hard-coded regex"),
            fence_re: Regex::new(r"^```\s*([A-Za-z0-9_+-]*)").expect("hard-coded regex"),
            open_tag_re: Regex::new(r"(?i)<(template|script|style)\b([^>]*)>")
                .expect("hard-coded regex"),
            close_tag_re: Regex::new(r"(?i)</(template|script|style)>").expect("hard-coded regex"),
            lang_attr_re: Regex::new(r#"(?i)lang=["']?(\w+)["']?"#).expect("hard-coded regex"),
        }
    }

    /// Split a heading-delimited document into sections.
    ///
    /// A section runs from its heading up to the next heading at any level
    /// or end of file; heading-like lines inside fenced code regions are
    /// ignored. Every section is kept regardless of size — a one-line
    /// section under a heading can still be semantically complete. A
    /// document with no headings at all yields no chunks, signaling the
    /// caller to fall back to line windows.
    #[must_use]
    pub fn chunk_markdown(&self, content: &str, file_path: &str) -> Vec<Chunk> {
        let lines: Vec<&str> = content.lines().collect();
        if lines.is_empty() {
            return Vec::new();
        }

        let mut closed: Vec<(SectionState, usize)> = Vec::new();
        let mut current: Option<SectionState> = None;
        let mut in_fence = false;
        let mut saw_heading = false;

        for (i, line) in lines.iter().enumerate() {
            let trimmed = line.trim_start();

            if trimmed.starts_with("```") {
                in_fence = !in_fence;
                let section = current.get_or_insert_with(|| untitled_section(i));
                if in_fence {
                    if let Some(caps) = self.fence_re.captures(trimmed) {
                        let lang = caps[1].to_string();
                        if !lang.is_empty() {
                            section.code_langs.push(lang);
                        }
                    }
                }
                continue;
            }

            if !in_fence {
                if let Some(caps) = self.heading_re.captures(line) {
                    saw_heading = true;
                    if let Some(prev) = current.take() {
                        closed.push((prev, i - 1));
                    }
                    current = Some(SectionState {
                        start: i,
                        title: Some(caps[2].trim().to_string()),
                        level: caps[1].len(),
                        code_langs: Vec::new(),
                    });
                    continue;
                }
            }

            current.get_or_insert_with(|| untitled_section(i));
        }

        if let Some(last) = current.take() {
            closed.push((last, lines.len() - 1));
        }

        if !saw_heading {
            return Vec::new();
        }

        closed
            .into_iter()
            .map(|(section, end)| {
                let mut metadata = ChunkMetadata::new().with("section_level", section.level);
                if let Some(title) = section.title {
                    metadata.set("section_title", title);
                }
                if !section.code_langs.is_empty() {
                    metadata.set("code_block_langs", section.code_langs);
                }

                Chunk::new(
                    lines[section.start..=end].join("\n"),
                    file_path.to_string(),
                    section.start + 1,
                    end + 1,
                    ChunkType::MarkdownSection,
                    metadata,
                )
            })
            .collect()
    }

    /// Split a tagged-block document into its named top-level regions.
    ///
    /// A region normally closes at its own matching closing tag. If a new
    /// opening tag appears while a region is still open, the open region is
    /// implicitly closed on the line before the new tag (malformed input is
    /// handled defensively). A region still open at end of file closes at
    /// the last line so its content is not dropped. No regions at all yields
    /// no chunks, signaling the caller to fall back to line windows.
    #[must_use]
    pub fn chunk_tagged_blocks(&self, content: &str, file_path: &str) -> Vec<Chunk> {
        let lines: Vec<&str> = content.lines().collect();
        if lines.is_empty() {
            return Vec::new();
        }

        // (kind, start idx, end idx, opening tag attribute text)
        let mut blocks: Vec<(BlockKind, usize, usize, String)> = Vec::new();
        let mut open: Option<(BlockKind, usize, String)> = None;

        for (i, line) in lines.iter().enumerate() {
            if let Some(caps) = self.open_tag_re.captures(line) {
                let kind = BlockKind::from_tag(&caps[1]);
                let attrs = caps[2].to_string();
                if let Some((prev_kind, prev_start, prev_attrs)) = open.take() {
                    blocks.push((prev_kind, prev_start, i - 1, prev_attrs));
                }
                open = Some((kind, i, attrs));
                continue;
            }

            if let Some((kind, start, attrs)) = &open {
                if let Some(caps) = self.close_tag_re.captures(line) {
                    if caps[1].eq_ignore_ascii_case(kind.tag()) {
                        blocks.push((*kind, *start, i, attrs.clone()));
                        open = None;
                    }
                }
            }
        }

        if let Some((kind, start, attrs)) = open.take() {
            blocks.push((kind, start, lines.len() - 1, attrs));
        }

        blocks
            .into_iter()
            .map(|(kind, start, end, attrs)| {
                Chunk::new(
                    lines[start..=end].join("\n"),
                    file_path.to_string(),
                    start + 1,
                    end + 1,
                    kind.chunk_type(),
                    self.block_metadata(&attrs),
                )
            })
            .collect()
    }

    /// Parse the opening tag's attribute text for the language attribute and
    /// recognized boolean flags
    fn block_metadata(&self, attrs: &str) -> ChunkMetadata {
        let mut metadata = ChunkMetadata::new();

        if let Some(caps) = self.lang_attr_re.captures(attrs) {
            metadata.set("lang", caps[1].to_string());
        }

        let lowered = attrs.to_lowercase();
        if lowered.contains("setup") {
            metadata.set("setup", true);
        }
        if lowered.contains("scoped") {
            metadata.set("scoped", true);
        }

        metadata
    }
}

impl Default for StructuralChunker {
    fn default() -> Self {
        Self::new()
    }
}

fn untitled_section(start: usize) -> SectionState {
    SectionState {
        start,
        title: None,
        level: 0,
        code_langs: Vec::new(),
    }
}
