use crate::error::{Result, ScannerError};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory and file name patterns excluded from every scan.
///
/// A pattern containing a wildcard is matched against file names; a plain
/// pattern is matched against any path component and prunes the whole
/// subtree.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    // VCS
    ".git",
    ".svn",
    // caches / environments
    "__pycache__",
    "node_modules",
    ".venv",
    "venv",
    "env",
    ".env",
    // build output
    "dist",
    "build",
    "target",
    ".next",
    ".nuxt",
    // compiled artifacts
    "*.pyc",
    "*.pyo",
    "*.pyd",
    "*.so",
    "*.dll",
    "*.exe",
    // OS noise
    ".DS_Store",
];

/// File extensions eligible for chunking
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "py", "ts", "js", "tsx", "jsx", "java", "cpp", "c", "h", "hpp", "go", "rs", "rb", "php",
    "swift", "kt", "scala", "cs", "m", "mm", "md", "vue",
];

/// Recursive source file discovery with include/exclude filtering
///
/// Results are sorted lexicographically so repeated scans of an unchanged
/// tree are deterministic.
pub struct FileScanner {
    root: PathBuf,
    include: Option<GlobSet>,
    exclude_names: GlobSet,
    exclude_components: Vec<String>,
}

impl FileScanner {
    /// Scanner over `root` with the default exclusions only
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        Self::with_filters(root, &[], &[])
    }

    /// Scanner over `root` with include globs and extra exclude patterns.
    ///
    /// Include globs are matched against file names; an empty include list
    /// admits every supported file. Extra excludes follow the
    /// same wildcard-vs-component rule as [`DEFAULT_EXCLUDES`], which always
    /// apply.
    pub fn with_filters(
        root: impl AsRef<Path>,
        include: &[String],
        exclude: &[String],
    ) -> Result<Self> {
        let include = if include.is_empty() {
            None
        } else {
            let mut builder = GlobSetBuilder::new();
            for pattern in include {
                builder.add(compile_glob(pattern)?);
            }
            Some(
                builder
                    .build()
                    .map_err(|e| ScannerError::invalid_pattern("<include set>", e))?,
            )
        };

        let mut name_builder = GlobSetBuilder::new();
        let mut exclude_components = Vec::new();
        for pattern in DEFAULT_EXCLUDES
            .iter()
            .map(|p| (*p).to_string())
            .chain(exclude.iter().cloned())
        {
            if pattern.contains('*') {
                name_builder.add(compile_glob(&pattern)?);
            } else {
                exclude_components.push(pattern);
            }
        }
        let exclude_names = name_builder
            .build()
            .map_err(|e| ScannerError::invalid_pattern("<exclude set>", e))?;

        Ok(Self {
            root: root.as_ref().to_path_buf(),
            include,
            exclude_names,
            exclude_components,
        })
    }

    /// Scan root directory
    #[must_use]
    pub const fn root(&self) -> &PathBuf {
        &self.root
    }

    /// Walk the tree and collect every chunkable file, sorted.
    ///
    /// Excluded directories are pruned without descending. Unreadable
    /// entries are logged and skipped, never fatal.
    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Err(ScannerError::invalid_path(format!(
                "not a directory: {}",
                self.root.display()
            )));
        }

        let mut files = Vec::new();

        let walker = WalkDir::new(&self.root)
            .into_iter()
            .filter_entry(|entry| !self.is_excluded_component(entry.path()));

        for result in walker {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("Failed to read entry: {e}");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            if self.is_excluded_name(path) {
                continue;
            }
            if !Self::is_supported(path) {
                continue;
            }
            if !self.is_included(path) {
                continue;
            }

            files.push(path.to_path_buf());
        }

        files.sort();
        log::info!("Found {} chunkable files under {}", files.len(), self.root.display());
        Ok(files)
    }

    /// Directory (or file) name equals a plain exclude pattern
    fn is_excluded_component(&self, path: &Path) -> bool {
        if path == self.root {
            return false;
        }
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.exclude_components.iter().any(|p| p == name))
    }

    /// File name matches a wildcard exclude pattern
    fn is_excluded_name(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| self.exclude_names.is_match(Path::new(name)))
    }

    fn is_included(&self, path: &Path) -> bool {
        let Some(include) = &self.include else {
            return true;
        };
        path.file_name()
            .is_some_and(|name| include.is_match(Path::new(name)))
    }

    fn is_supported(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .is_some_and(|ext| SUPPORTED_EXTENSIONS.iter().any(|c| *c == ext))
    }
}

fn compile_glob(pattern: &str) -> Result<Glob> {
    Glob::new(pattern).map_err(|e| ScannerError::invalid_pattern(pattern, e))
}
