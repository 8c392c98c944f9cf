//! Random selection of example files from otherwise excluded directories.

use crate::options::SOURCE_EXTENSIONS;
use ignore::WalkBuilder;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Samples example files for every `pattern -> count` entry.
///
/// Each pattern names a directory relative to `root`. Its immediate regular
/// files whose names end in a [`SOURCE_EXTENSIONS`] suffix are listed in name
/// order and `min(count, available)` of them are drawn without replacement.
/// Returned paths are relative to `root` and joined with `/`.
///
/// Patterns that do not resolve to a directory contribute nothing.
pub fn select_examples<R: Rng + ?Sized>(
    root: &Path,
    include_examples: &BTreeMap<String, usize>,
    rng: &mut R,
) -> BTreeSet<String> {
    let mut selected = BTreeSet::new();
    for (pattern, &count) in include_examples {
        let dir = root.join(pattern);
        if !dir.is_dir() {
            tracing::trace!("example directory {} not found", dir.display());
            continue;
        }
        let candidates = list_source_files(&dir);
        let prefix = normalize(Path::new(pattern));
        for name in candidates.choose_multiple(&mut *rng, count.min(candidates.len())) {
            let path = if prefix.is_empty() {
                name.clone()
            } else {
                format!("{}/{}", prefix, name)
            };
            selected.insert(path);
        }
    }
    selected
}

fn list_source_files(dir: &Path) -> Vec<String> {
    let walker = WalkBuilder::new(dir)
        .standard_filters(false)
        .max_depth(Some(1))
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();
    walker
        .filter_map(Result::ok)
        .filter(|entry| entry.depth() == 1 && entry.path().is_file())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_owned))
        .filter(|name| SOURCE_EXTENSIONS.iter().any(|ext| name.ends_with(ext)))
        .collect()
}

/// Joins the normal components of `path` with `/`.
pub(crate) fn normalize(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            std::path::Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
