//! Line-oriented input for the interactive menu.

use std::io::BufRead;

use crate::error::{TaskError, TaskResult};

/// Reads whole lines from any buffered reader.
///
/// `None` from any read means the input is exhausted. Bytes that are not
/// valid UTF-8 are replaced rather than rejected.
pub struct LineInput<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }

    /// Next raw line without its line terminator.
    pub fn read_line(&mut self) -> TaskResult<Option<String>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&self.buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Next integer. Blank lines are skipped; a line that does not parse as a
    /// single integer, trailing words included, is consumed and reported as
    /// `InvalidInput`.
    pub fn read_number(&mut self) -> TaskResult<Option<i64>> {
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            return trimmed
                .parse::<i64>()
                .map(Some)
                .map_err(|_| TaskError::InvalidInput {
                    raw: trimmed.to_string(),
                });
        }
    }
}
