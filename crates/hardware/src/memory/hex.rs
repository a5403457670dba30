//! Hex image loader.
//!
//! A hex image is an ASCII text file with one 32-bit word per line, written
//! as exactly eight hexadecimal digits followed by a newline. Loading sizes
//! the region from the file length, allocates it, and stores the words
//! little-endian from offset zero in file order.
//!
//! Loading is all-or-nothing per region: any malformed line discards the
//! freshly allocated buffer and leaves the region unallocated.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::buffer::RegionBuffer;
use super::codec;
use super::region::Region;
use crate::common::LoadError;
use crate::common::constants::{HEX_DIGITS_PER_WORD, HEX_LINE_LEN, WORD_SIZE};

/// Loads the hex image at `path` into `region`.
///
/// On success the region owns a buffer of `4 * lines` bytes. On failure the
/// region is left unallocated.
///
/// # Errors
///
/// * [`LoadError::Io`] if the file cannot be opened or read.
/// * [`LoadError::Format`] if the file size is not a whole number of lines.
/// * [`LoadError::TooLarge`] if the image exceeds the region's capacity.
/// * [`LoadError::Parse`] / [`LoadError::LineCount`] for malformed content.
pub fn load_hex_file(region: &mut Region, path: &Path) -> Result<(), LoadError> {
    region.release();

    let io_err = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_err)?;
    let file_size = file.metadata().map_err(io_err)?.len();

    let buffer = read_hex_image(BufReader::new(file), file_size, region.max_size(), path)?;
    tracing::debug!(
        path = %path.display(),
        role = %region.role(),
        size = buffer.len(),
        "loaded hex image"
    );
    region.install(buffer);
    Ok(())
}

/// Decodes a hex image from `reader` into a newly allocated buffer.
///
/// `file_size` is the byte length of the source and determines the buffer
/// size before any line is read; `path` is only used for error context.
///
/// # Errors
///
/// Same as [`load_hex_file`], minus the open failure.
pub fn read_hex_image<R: BufRead>(
    mut reader: R,
    file_size: u64,
    max_size: u32,
    path: &Path,
) -> Result<RegionBuffer, LoadError> {
    if file_size % HEX_LINE_LEN != 0 {
        return Err(LoadError::Format {
            path: path.to_path_buf(),
            file_size,
            line_len: HEX_LINE_LEN,
        });
    }

    let num_words = file_size / HEX_LINE_LEN;
    let size = num_words * u64::from(WORD_SIZE);
    if size > u64::from(max_size) {
        return Err(LoadError::TooLarge {
            path: path.to_path_buf(),
            size,
            max_size,
        });
    }

    let mut buffer = RegionBuffer::new(size as usize);
    let mut line = Vec::with_capacity(HEX_LINE_LEN as usize);
    let mut line_num: u64 = 0;

    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .map_err(|source| LoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        if read == 0 {
            break;
        }

        if line_num >= num_words {
            return Err(LoadError::LineCount {
                path: path.to_path_buf(),
                expected: num_words,
                found: line_num + 1,
            });
        }

        let text = strip_line_terminator(&line);
        let value = parse_hex_word(text).ok_or_else(|| LoadError::Parse {
            path: path.to_path_buf(),
            line: line_num as usize,
            text: String::from_utf8_lossy(text).into_owned(),
        })?;

        let offset = (line_num * u64::from(WORD_SIZE)) as usize;
        codec::write_word(&mut buffer.as_mut_slice()[offset..], value);
        line_num += 1;
    }

    if line_num != num_words {
        return Err(LoadError::LineCount {
            path: path.to_path_buf(),
            expected: num_words,
            found: line_num,
        });
    }
    Ok(buffer)
}

/// Strips any trailing `\r` / `\n` bytes.
fn strip_line_terminator(line: &[u8]) -> &[u8] {
    let end = line
        .iter()
        .rposition(|&b| b != b'\n' && b != b'\r')
        .map_or(0, |i| i + 1);
    &line[..end]
}

/// Parses exactly eight ASCII hex digits (either case) as a `u32`.
fn parse_hex_word(text: &[u8]) -> Option<u32> {
    if text.len() as u64 != HEX_DIGITS_PER_WORD || !text.iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    let digits = std::str::from_utf8(text).ok()?;
    u32::from_str_radix(digits, 16).ok()
}
