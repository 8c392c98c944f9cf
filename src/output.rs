//! Output formatting for foldcat records.
//!
//! Every included file becomes one delimited record:
//!
//! ```text
//! ===== File: lib/db.ts =====
//! Type: .ts
//! ----- Content Start -----
//! <content>
//! ----- Content End -----
//!
//! ```
//!
//! Content is written exactly as decoded.

use std::io::{self, Write};
use std::path::Path;

pub const CONTENT_START: &str = "----- Content Start -----";
pub const CONTENT_END: &str = "----- Content End -----";
/// Written in place of an extension for files that have none.
pub const NO_EXTENSION: &str = "No Extension";

/// Writes records to an underlying writer.
pub struct RecordWriter<W: Write> {
    writer: W,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Appends the record for one file.
    pub fn write_record(
        &mut self,
        relative_path: &str,
        type_label: &str,
        content: &str,
    ) -> io::Result<()> {
        write!(
            self.writer,
            "===== File: {} =====\nType: {}\n{}\n",
            relative_path, type_label, CONTENT_START
        )?;
        self.writer.write_all(content.as_bytes())?;
        write!(self.writer, "\n{}\n\n", CONTENT_END)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// The `Type:` value for a file: `.ext`, or [`NO_EXTENSION`].
///
/// Only the last dot counts and leading dots never start an extension, so
/// `.bashrc` and `..bashrc` have none, `archive.tar.gz` is `.gz` and a
/// trailing dot gives `.`.
pub fn extension_label(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    let stem = name.trim_start_matches('.');
    match stem.rfind('.') {
        Some(dot) => stem[dot..].to_string(),
        None => NO_EXTENSION.to_string(),
    }
}
