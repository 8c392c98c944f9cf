use crate::encoding::TextEncoding;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
/// Top-level folders scanned when no others are configured, in scan order.
pub const DEFAULT_TARGET_FOLDERS: &[&str] = &["lib", "app", "components"];
pub const DEFAULT_OUTPUT: &str = "codebase.txt";
/// Leading bytes inspected by the text detector.
pub const DEFAULT_BLOCK_SIZE: usize = 512;
/// File name suffixes eligible for example sampling.
pub const SOURCE_EXTENSIONS: &[&str] = &[
    ".ts", ".js", ".py", ".java", ".cpp", ".c", ".cs", ".php", ".rb", ".go", ".rs", ".swift",
    ".kt",
];
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoldcatOptions {
    pub root: PathBuf,
    pub output: PathBuf,
    pub target_folders: Vec<String>,
    /// Relative path prefixes skipped unless a file was sampled as an example.
    pub exclude_patterns: Vec<String>,
    /// Directory (relative to root) to number of example files sampled from it.
    pub include_examples: BTreeMap<String, usize>,
    pub block_size: usize,
    /// Tried in order when reading file content. The first one also drives text detection.
    pub encodings: Vec<TextEncoding>,
    /// Fixed seed for example sampling. `None` samples from the thread RNG.
    pub seed: Option<u64>,
}
impl Default for FoldcatOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT),
            target_folders: DEFAULT_TARGET_FOLDERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            exclude_patterns: Vec::new(),
            include_examples: BTreeMap::new(),
            block_size: DEFAULT_BLOCK_SIZE,
            encodings: vec![TextEncoding::Utf8, TextEncoding::Latin1],
            seed: None,
        }
    }
}
#[derive(Debug, Default)]
pub struct FoldcatBuilder {
    options: FoldcatOptions,
}
impl FoldcatBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: FoldcatOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output = path.into();
        self
    }
    pub fn target_folders<S: Into<String>>(mut self, folders: impl IntoIterator<Item = S>) -> Self {
        self.options.target_folders = folders.into_iter().map(Into::into).collect();
        self
    }
    pub fn exclude_patterns<S: Into<String>>(
        mut self,
        patterns: impl IntoIterator<Item = S>,
    ) -> Self {
        self.options.exclude_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }
    /// Samples up to `count` source files from the directory `pattern`.
    pub fn include_examples(mut self, pattern: impl Into<String>, count: usize) -> Self {
        self.options.include_examples.insert(pattern.into(), count);
        self
    }
    pub fn block_size(mut self, size: usize) -> Self {
        self.options.block_size = size;
        self
    }
    pub fn encodings(mut self, encodings: Vec<TextEncoding>) -> Self {
        self.options.encodings = encodings;
        self
    }
    pub fn seed(mut self, seed: u64) -> Self {
        self.options.seed = Some(seed);
        self
    }
    pub fn build(self) -> FoldcatOptions {
        self.options
    }
}
