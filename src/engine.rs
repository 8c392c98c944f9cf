use crate::detect::is_text_file;
use crate::encoding::decode_first;
use crate::error::FoldcatError;
use crate::filter::{relative_path, should_include};
use crate::options::FoldcatOptions;
use crate::output::{RecordWriter, extension_label};
use crate::sampling::select_examples;
use crate::types::{Event, RunSummary};
use ignore::WalkBuilder;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    /// Recursive walk of one target folder: hidden and ignored files included,
    /// links not followed, siblings in file name order.
    ///
    /// Every entry that is not a directory is yielded, including broken
    /// links, which the text detector then rejects.
    fn new(folder: &Path) -> Self {
        let mut builder = WalkBuilder::new(folder);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b));
        Self {
            inner: builder.build(),
        }
    }
    fn into_iter(self) -> impl Iterator<Item = Result<PathBuf, FoldcatError>> {
        self.inner.filter_map(|result| match result {
            Ok(entry) if entry.path().is_dir() => None,
            Ok(entry) => Some(Ok(entry.into_path())),
            Err(e) => Some(Err(FoldcatError::Walk(e.to_string()))),
        })
    }
}
/// Runs with all events discarded.
pub fn foldcat(options: &FoldcatOptions) -> Result<RunSummary, FoldcatError> {
    foldcat_with(options, |_| {})
}
/// Writes the combined output to `options.output`, reporting each event to `on_event`.
///
/// The root is checked before the output file is created, so an invalid root
/// leaves any existing output untouched.
pub fn foldcat_with<F>(options: &FoldcatOptions, on_event: F) -> Result<RunSummary, FoldcatError>
where
    F: FnMut(&Event),
{
    if !options.root.is_dir() {
        return Err(FoldcatError::InvalidRoot(options.root.clone()));
    }
    let file = File::create(&options.output).map_err(|e| FoldcatError::io(&options.output, e))?;
    let mut writer = BufWriter::new(file);
    let summary = match options.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            write_bundle(options, &mut rng, &mut writer, on_event)
        }
        None => write_bundle(options, &mut rand::rng(), &mut writer, on_event),
    }?;
    writer
        .flush()
        .map_err(|e| FoldcatError::io(&options.output, e))?;
    Ok(summary)
}
/// Samples examples with `rng`, then walks every target folder and writes one
/// record per included text file to `writer`.
///
/// Per-file failures become events; only write failures on `writer` abort.
pub fn write_bundle<W, R, F>(
    options: &FoldcatOptions,
    rng: &mut R,
    writer: W,
    mut on_event: F,
) -> Result<RunSummary, FoldcatError>
where
    W: Write,
    R: Rng + ?Sized,
    F: FnMut(&Event),
{
    let root = options.root.as_path();
    let examples = select_examples(root, &options.include_examples, rng);
    tracing::debug!("selected {} example files", examples.len());
    let mut summary = RunSummary {
        examples_selected: examples.len(),
        ..Default::default()
    };
    let mut records = RecordWriter::new(writer);
    let mut emit = |event: Event| {
        summary.record(&event);
        on_event(&event);
    };
    for folder in &options.target_folders {
        let folder_path = root.join(folder);
        if !folder_path.is_dir() {
            tracing::debug!("target folder {} not found", folder_path.display());
            emit(Event::MissingFolder {
                folder: folder.clone(),
                root: root.to_path_buf(),
            });
            continue;
        }
        for entry in Walker::new(&folder_path).into_iter() {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    tracing::debug!("{}", e);
                    emit(Event::WalkFailed {
                        error: e.to_string(),
                    });
                    continue;
                }
            };
            if let Some(event) = process_file(options, &examples, &path, &mut records)? {
                emit(event);
            }
        }
    }
    records
        .flush()
        .map_err(|e| FoldcatError::io(&options.output, e))?;
    Ok(summary)
}
/// Handles one walked file. Returns `None` when the path filter drops it.
fn process_file<W: Write>(
    options: &FoldcatOptions,
    examples: &BTreeSet<String>,
    path: &Path,
    records: &mut RecordWriter<W>,
) -> Result<Option<Event>, FoldcatError> {
    let rel = relative_path(&options.root, path);
    if !should_include(&rel, &options.exclude_patterns, examples) {
        tracing::trace!("excluded {}", rel);
        return Ok(None);
    }
    let detect_with = options.encodings.first().copied();
    let is_text = detect_with.is_some_and(|enc| is_text_file(path, options.block_size, enc));
    if !is_text {
        tracing::debug!("non-text {}", rel);
        return Ok(Some(Event::SkippedNonText { relative_path: rel }));
    }
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            let error = FoldcatError::io(path, e);
            tracing::debug!("{}", error);
            return Ok(Some(Event::SkippedUnreadable {
                relative_path: rel,
                error: error.to_string(),
            }));
        }
    };
    let (content, encoding) = match decode_first(&bytes, &options.encodings) {
        Ok(decoded) => decoded,
        Err(source) => {
            let error = FoldcatError::Decode {
                path: path.to_path_buf(),
                source,
            };
            tracing::debug!("{}", error);
            return Ok(Some(Event::SkippedUndecodable { relative_path: rel }));
        }
    };
    records
        .write_record(&rel, &extension_label(path), &content)
        .map_err(|e| FoldcatError::io(&options.output, e))?;
    tracing::debug!("included {} as {}", rel, encoding);
    Ok(Some(Event::Included {
        relative_path: rel,
        encoding,
    }))
}
