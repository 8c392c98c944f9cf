use crate::encoding::TextEncoding;
use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum FoldcatError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("The directory '{}' does not exist or is not a directory.", .0.display())]
    InvalidRoot(PathBuf),
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("cannot decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: DecodeError,
    },
}
impl FoldcatError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FoldcatError::Io {
            path: path.into(),
            source,
        }
    }
}
/// None of the encodings in a fallback chain could decode the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no encoding in {tried:?} accepted the input")]
pub struct DecodeError {
    pub tried: Vec<TextEncoding>,
}
