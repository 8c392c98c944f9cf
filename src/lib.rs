//! # Foldcat
//!
//! `foldcat` walks selected top-level folders of a project and concatenates
//! every text file it finds into one labeled output file, producing a
//! single-file snapshot of a codebase.
//!
//! Selection works in three steps:
//!
//! - Only the configured target folders (by default `lib`, `app` and
//!   `components`) are walked.
//! - Files under an exclude prefix are dropped, except for a handful of
//!   example files sampled at random from configured directories.
//! - Files whose leading block contains a null byte or does not decode are
//!   treated as binary and skipped.
//!
//! Content is decoded with an ordered list of encodings (UTF-8, then a
//! single-byte fallback). Sampling takes an explicit random source, so a run
//! with a fixed seed is reproducible.
//!
//! # Example
//!
//! ```no_run
//! use foldcat::{FoldcatBuilder, foldcat};
//!
//! let options = FoldcatBuilder::new(".")
//!     .output("codebase.txt")
//!     .exclude_patterns(["lib/generated"])
//!     .include_examples("lib/generated", 2)
//!     .seed(7)
//!     .build();
//!
//! let summary = foldcat(&options).expect("Failed to combine files");
//! println!("{} files written", summary.files_written);
//! ```

mod detect;
mod encoding;
mod engine;
mod error;
mod filter;
mod options;
pub mod output;
mod sampling;
mod types;

pub use detect::is_text_file;
pub use encoding::{TextEncoding, decode_first};
pub use engine::{foldcat, foldcat_with, write_bundle};
pub use error::{DecodeError, FoldcatError};
pub use filter::{relative_path, should_include};
pub use options::{
    DEFAULT_BLOCK_SIZE, DEFAULT_OUTPUT, DEFAULT_TARGET_FOLDERS, FoldcatBuilder, FoldcatOptions,
    SOURCE_EXTENSIONS,
};
pub use sampling::select_examples;
pub use types::{Event, RunSummary};
