use crate::encoding::TextEncoding;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Something that happened while building the output, reported in walk order.
///
/// The `Display` form is the console line for the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A configured target folder is not a directory under the root.
    MissingFolder { folder: String, root: PathBuf },
    /// A record was written for this file.
    Included {
        relative_path: String,
        encoding: TextEncoding,
    },
    /// The leading block held a null byte, failed to decode, or could not be read.
    SkippedNonText { relative_path: String },
    /// No configured encoding could decode the full content.
    SkippedUndecodable { relative_path: String },
    /// Reading the full content failed.
    SkippedUnreadable {
        relative_path: String,
        error: String,
    },
    /// The directory walker reported an error for an entry.
    WalkFailed { error: String },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::MissingFolder { folder, root } => write!(
                f,
                "Warning: The folder '{}' does not exist in '{}'. Skipping.",
                folder,
                root.display()
            ),
            Event::Included {
                relative_path,
                encoding,
            } => write!(f, "Included {} ({})", relative_path, encoding),
            Event::SkippedNonText { relative_path } => {
                write!(f, "Skipping binary or non-text file: {}", relative_path)
            }
            Event::SkippedUndecodable { relative_path } => {
                write!(f, "Skipping {}: cannot decode file.", relative_path)
            }
            Event::SkippedUnreadable {
                relative_path,
                error,
            } => write!(f, "Skipping {}: {}", relative_path, error),
            Event::WalkFailed { error } => write!(f, "Error walking path: {}", error),
        }
    }
}

/// Totals for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Records written to the output.
    pub files_written: usize,
    /// Size of the sampled example set.
    pub examples_selected: usize,
    pub skipped_non_text: usize,
    pub skipped_undecodable: usize,
    pub skipped_unreadable: usize,
    /// Target folders that were not found, in configured order.
    pub missing_folders: Vec<String>,
}

impl RunSummary {
    pub(crate) fn record(&mut self, event: &Event) {
        match event {
            Event::MissingFolder { folder, .. } => self.missing_folders.push(folder.clone()),
            Event::Included { .. } => self.files_written += 1,
            Event::SkippedNonText { .. } => self.skipped_non_text += 1,
            Event::SkippedUndecodable { .. } => self.skipped_undecodable += 1,
            Event::SkippedUnreadable { .. } => self.skipped_unreadable += 1,
            Event::WalkFailed { .. } => {}
        }
    }
}
