use std::path::Path;

/// Language/format of a source file, detected from its extension
///
/// Python is the only language with syntax-aware chunking. The other source
/// languages are named here as fallback extension points: they chunk through
/// the generic line splitter until a grammar is wired up for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
    Rust,
    JavaScript,
    TypeScript,
    Java,
    C,
    Cpp,
    Go,
    Ruby,
    Php,
    Swift,
    Kotlin,
    Scala,
    CSharp,
    ObjectiveC,
    Markdown,
    Vue,
    Unknown,
}

impl Language {
    /// Detect language from file extension
    #[must_use]
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "py" => Language::Python,
            "rs" => Language::Rust,
            "js" | "jsx" => Language::JavaScript,
            "ts" | "tsx" => Language::TypeScript,
            "java" => Language::Java,
            "c" | "h" => Language::C,
            "cpp" | "hpp" => Language::Cpp,
            "go" => Language::Go,
            "rb" => Language::Ruby,
            "php" => Language::Php,
            "swift" => Language::Swift,
            "kt" => Language::Kotlin,
            "scala" => Language::Scala,
            "cs" => Language::CSharp,
            "m" | "mm" => Language::ObjectiveC,
            "md" => Language::Markdown,
            "vue" => Language::Vue,
            _ => Language::Unknown,
        }
    }

    /// Detect language from file path
    #[must_use]
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(Language::Unknown)
    }

    /// Language name as string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Rust => "rust",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Java => "java",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::Go => "go",
            Language::Ruby => "ruby",
            Language::Php => "php",
            Language::Swift => "swift",
            Language::Kotlin => "kotlin",
            Language::Scala => "scala",
            Language::CSharp => "csharp",
            Language::ObjectiveC => "objective-c",
            Language::Markdown => "markdown",
            Language::Vue => "vue",
            Language::Unknown => "unknown",
        }
    }

    /// True if a syntax tree can be obtained for this language
    #[must_use]
    pub const fn supports_ast(self) -> bool {
        matches!(self, Language::Python)
    }

    /// True for document formats whose natural unit is a heading section
    /// or tagged block rather than a syntax node
    #[must_use]
    pub const fn is_structured_document(self) -> bool {
        matches!(self, Language::Markdown | Language::Vue)
    }

    /// Tree-sitter grammar for this language, if one is wired up
    #[must_use]
    pub fn tree_sitter_language(self) -> Option<tree_sitter::Language> {
        match self {
            Language::Python => Some(tree_sitter_python::LANGUAGE.into()),
            _ => None,
        }
    }
}
