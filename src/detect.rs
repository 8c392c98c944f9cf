use crate::encoding::TextEncoding;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Heuristic text check on the first `block_size` bytes of a file.
///
/// A file is text when its leading block holds no null byte and `encoding`
/// accepts it. Read failures count as non-text. A null byte anywhere in the
/// block rejects the file even if the rest is plain text, and so does a
/// character cut in half at `block_size`.
pub fn is_text_file(path: &Path, block_size: usize, encoding: TextEncoding) -> bool {
    match read_block(path, block_size) {
        Ok(block) => !block.contains(&0) && encoding.accepts_block(&block),
        Err(e) => {
            tracing::debug!("cannot sample {}: {}", path.display(), e);
            false
        }
    }
}

fn read_block(path: &Path, block_size: usize) -> std::io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut block = Vec::with_capacity(block_size);
    file.take(block_size as u64).read_to_end(&mut block)?;
    Ok(block)
}
