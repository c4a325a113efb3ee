//! Reading word lists from disk.
//!
//! A list is UTF-8 text with one entry per line, either stored plainly or as a
//! single brotli-compressed file (extension `.br`).

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

const BROTLI_BUFFER: usize = 4096;

/// Read every line of the word list at `path`.
pub fn read_word_list(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = BufReader::new(File::open(path).map_err(io_err)?);

    let mut bytes = Vec::new();
    if is_compressed(path) {
        brotli::Decompressor::new(file, BROTLI_BUFFER)
            .read_to_end(&mut bytes)
            .map_err(|e| brotli_error(path, e))?;
    } else {
        let mut file = file;
        file.read_to_end(&mut bytes).map_err(io_err)?;
    }

    let text = String::from_utf8(bytes).map_err(|e| Error::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    // `lines` accepts both `\n` and `\r\n` endings.
    let lines: Vec<String> = text.lines().map(str::to_owned).collect();
    debug!(path = %path.display(), lines = lines.len(), "read word list");
    Ok(lines)
}

/// Corrupt data in a brotli stream is a decode failure; anything else is I/O.
fn brotli_error(path: &Path, e: io::Error) -> Error {
    if e.kind() == io::ErrorKind::InvalidData {
        Error::Decode {
            path: path.to_path_buf(),
            reason: format!("brotli stream: {e}"),
        }
    } else {
        Error::Io {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

fn is_compressed(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "br")
}
