//! Population input, one entry per line

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

/// Read every line of `reader` as an entry.
///
/// A trailing `\r` is stripped from each line, with or without a following
/// `\n`; blank lines are kept as empty entries. `origin` names the input in
/// errors.
pub fn read_lines<R: BufRead>(reader: R, origin: &str) -> Result<Vec<String>> {
    let mut entries = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                return Err(Error::Population {
                    origin: origin.to_string(),
                    line: idx + 1,
                    message: e.to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        };
        let entry = match line.strip_suffix('\r') {
            Some(stripped) => stripped.to_string(),
            None => line,
        };
        entries.push(entry);
    }
    Ok(entries)
}

/// Read a population file.
pub fn read_file(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    read_lines(BufReader::new(file), &path.display().to_string())
}
