use repo_chunker::{ChunkStrategy, ChunkType, ChunkerConfig};
use repo_scanner::RepoChunker;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn seed_repo(root: &Path) {
    write(
        &root.join("src/app.py"),
        "def handler(event):\n    return event\n\nclass Router:\n    routes = {}\n",
    );
    write(
        &root.join("docs/guide.md"),
        "# Guide\nintro\n\n## Usage\nrun it\n",
    );
    write(
        &root.join("ui/App.vue"),
        "<template>\n  <div/>\n</template>\n<script>\nexport default {}\n</script>\n",
    );
    // Never chunked: excluded directories and unsupported extensions.
    write(&root.join("node_modules/dep/index.js"), "module.exports = 1\n");
    write(&root.join("__pycache__/app.py"), "stale\n");
    write(&root.join("notes.txt"), "not source\n");
}

#[test]
fn mixed_run_chunks_code_docs_and_components() {
    let temp = tempdir().unwrap();
    seed_repo(temp.path());

    let repo = RepoChunker::new(temp.path(), ChunkerConfig::default()).unwrap();
    let (chunks, stats) = repo.chunk_repository().unwrap();

    assert_eq!(stats.files, 3);
    assert_eq!(stats.failed_files, 0);
    assert_eq!(stats.chunks, chunks.len());

    // Files come out in sorted order: docs/, src/, ui/.
    let markdown: Vec<_> = chunks
        .iter()
        .filter(|c| c.chunk_type == ChunkType::MarkdownSection)
        .collect();
    assert_eq!(markdown.len(), 2);
    assert_eq!(markdown[0].metadata.get_str("section_title"), Some("Guide"));

    assert!(chunks.iter().any(|c| c.chunk_type == ChunkType::Function));
    assert!(chunks.iter().any(|c| c.chunk_type == ChunkType::Class));
    assert!(chunks.iter().any(|c| c.chunk_type == ChunkType::TemplateBlock));
    assert!(chunks.iter().any(|c| c.chunk_type == ChunkType::ScriptBlock));

    assert!(chunks
        .iter()
        .all(|c| !c.file_path.contains("node_modules") && !c.file_path.contains("__pycache__")));
}

#[test]
fn include_filter_restricts_the_run_to_matching_files() {
    let temp = tempdir().unwrap();
    seed_repo(temp.path());

    let repo = RepoChunker::with_filters(
        temp.path(),
        ChunkerConfig::default(),
        &["*.md".to_string()],
        &[],
    )
    .unwrap();
    let (chunks, stats) = repo.chunk_repository().unwrap();

    assert_eq!(stats.files, 1);
    assert!(chunks
        .iter()
        .all(|c| c.chunk_type == ChunkType::MarkdownSection));
}

#[test]
fn line_strategy_applies_uniformly_across_the_repo() {
    let temp = tempdir().unwrap();
    seed_repo(temp.path());

    let config = ChunkerConfig {
        strategy: ChunkStrategy::Line,
        max_chunk_size: 3,
        overlap: 0,
        min_chunk_size: 1,
    };
    let repo = RepoChunker::new(temp.path(), config).unwrap();
    let (chunks, stats) = repo.chunk_repository().unwrap();

    assert_eq!(stats.files, 3);
    assert!(!chunks.is_empty());
    assert!(chunks.iter().all(|c| c.chunk_type == ChunkType::Line));
    assert!(chunks.iter().all(|c| c.line_count() <= 3));
}

#[test]
fn chunk_order_is_deterministic_across_runs() {
    let temp = tempdir().unwrap();
    seed_repo(temp.path());

    let run = || {
        let repo = RepoChunker::new(temp.path(), ChunkerConfig::default()).unwrap();
        let (chunks, _) = repo.chunk_repository().unwrap();
        chunks
            .into_iter()
            .map(|c| (c.file_path, c.start_line, c.end_line))
            .collect::<Vec<_>>()
    };

    assert_eq!(run(), run());
}
