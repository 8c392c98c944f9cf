//! Ordered text-encoding fallback.
//!
//! File content is decoded by trying a list of [`TextEncoding`]s in order and
//! keeping the first that accepts the bytes. Decoding is strict: no
//! replacement characters are produced and a leading BOM is kept as content.

use crate::error::DecodeError;
use serde::{Deserialize, Serialize};
use std::str;

/// Encodings a file may be read with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextEncoding {
    Utf8,
    /// Single-byte fallback. Every byte sequence decodes.
    Latin1,
}

impl TextEncoding {
    pub fn name(self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Latin1 => "latin-1",
        }
    }

    /// Decodes `bytes` completely, or returns `None` on the first malformed sequence.
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            TextEncoding::Utf8 => encoding_rs::UTF_8
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(|text| text.into_owned()),
            // ISO-8859-1: byte n is U+00n. encoding_rs's `latin1` label means
            // windows-1252, so go through the raw helper instead.
            TextEncoding::Latin1 => Some(encoding_rs::mem::decode_latin1(bytes).into_owned()),
        }
    }

    /// Checks whether a leading block of a file decodes on its own.
    ///
    /// The check is strict: a multi-byte UTF-8 character split by the end of
    /// the block rejects it.
    pub fn accepts_block(self, block: &[u8]) -> bool {
        match self {
            TextEncoding::Utf8 => str::from_utf8(block).is_ok(),
            TextEncoding::Latin1 => true,
        }
    }
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Decodes `bytes` with the first encoding in `encodings` that accepts them.
pub fn decode_first(
    bytes: &[u8],
    encodings: &[TextEncoding],
) -> Result<(String, TextEncoding), DecodeError> {
    encodings
        .iter()
        .find_map(|&encoding| encoding.decode(bytes).map(|text| (text, encoding)))
        .ok_or_else(|| DecodeError {
            tried: encodings.to_vec(),
        })
}
