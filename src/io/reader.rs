use std::io::{BufRead, BufReader, Read};

use crate::io::IoError;

/// Read the first line of `reader` without its trailing line terminator.
///
/// Only `\n` (and a `\r` directly before it) is removed; every other byte,
/// whitespace included, is kept.
pub fn read_first_line<R: Read>(reader: R) -> Result<Vec<u8>, IoError> {
    let mut line = Vec::new();
    BufReader::new(reader).read_until(b'\n', &mut line)?;
    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// Parse a comma-separated list of lengths such as `3, 4,1,5`.
///
/// An empty (or all-whitespace) line is an empty list.
pub fn parse_lengths(line: &[u8]) -> Result<Vec<usize>, IoError> {
    let text = std::str::from_utf8(line)?.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }
    text.split(',')
        .enumerate()
        .map(|(index, item)| {
            let item = item.trim();
            item.parse::<usize>()
                .map_err(|_| IoError::InvalidLength {
                    index,
                    value: item.to_string(),
                })
        })
        .collect()
}

/// Read the first line of `reader` and parse it as a length list.
pub fn read_lengths<R: Read>(reader: R) -> Result<Vec<usize>, IoError> {
    parse_lengths(&read_first_line(reader)?)
}
