use crate::sampling::normalize;
use std::collections::BTreeSet;
use std::path::Path;

/// Path of `path` relative to `root`, components joined with `/`.
pub fn relative_path(root: &Path, path: &Path) -> String {
    normalize(path.strip_prefix(root).unwrap_or(path))
}

/// Decides whether a file takes part in the output.
///
/// A file under any exclude prefix is kept only when it was sampled as an
/// example. The match is a plain string prefix, so `lib/tes` also covers
/// `lib/test/...`.
pub fn should_include(
    relative_path: &str,
    exclude_patterns: &[String],
    examples: &BTreeSet<String>,
) -> bool {
    match exclude_patterns
        .iter()
        .find(|pattern| relative_path.starts_with(pattern.as_str()))
    {
        Some(_) => examples.contains(relative_path),
        None => true,
    }
}
