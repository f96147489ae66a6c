//! Line-oriented reading of call records from any `BufRead`.

use crate::error::RecordError;
use crate::record::CallRecord;
use std::io::BufRead;
use tracing::debug;

/// Iterates over the call records in a stream.
///
/// Each item carries the 1-based line number it came from. A malformed
/// line, including one that is not valid UTF-8, yields an error item and
/// iteration continues with the next line. A read error is yielded once
/// and ends the stream.
pub struct RecordReader<R> {
    reader: R,
    line_no: usize,
    buf: Vec<u8>,
    done: bool,
}

impl<R: BufRead> RecordReader<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_no: 0,
            buf: Vec::new(),
            done: false,
        }
    }

    /// Number of lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.line_no
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = (usize, Result<CallRecord, RecordError>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                self.line_no += 1;
                let bytes = std::mem::take(&mut self.buf);
                let result = String::from_utf8(bytes)
                    .map_err(RecordError::NotUtf8)
                    .and_then(|line| CallRecord::parse_line(&line));
                Some((self.line_no, result))
            }
            Err(e) => {
                self.done = true;
                debug!(line = self.line_no + 1, error = %e, "read error ends record stream");
                Some((self.line_no + 1, Err(RecordError::Io(e))))
            }
        }
    }
}
