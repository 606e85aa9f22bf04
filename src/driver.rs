//! Transform driver: reads an input stream line by line and writes the
//! literal records to an output stream.
//!
//! The driver is either reading the next line or done. It is done when the
//! input is exhausted or on the first error, which is handed back to the
//! caller untouched. Streams are supplied already open; the driver never
//! opens, closes or resolves paths.

use std::io::{self, BufRead, Read, Write};

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::Result;
use crate::transform::{LineKind, LineTransformer, Record};

/// Reads one raw line at a time into a reused scratch buffer.
///
/// With a maximum length set, no more than `max` bytes are buffered for a
/// single line, so an over-long line is detected without reading all of it.
pub struct LineReader<R> {
    inner: R,
    buf: Vec<u8>,
    max_line_length: Option<usize>,
    line: usize,
}

impl<R: BufRead> LineReader<R> {
    #[must_use]
    pub fn new(inner: R, max_line_length: Option<usize>) -> Self {
        Self {
            inner,
            buf: Vec::new(),
            max_line_length,
            line: 0,
        }
    }

    /// Read the next line including its newline, if any.
    ///
    /// Returns `None` once the stream is exhausted. The slice borrows the
    /// scratch buffer and is only valid until the next call.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the underlying read fails.
    pub fn next_line(&mut self) -> Result<Option<(usize, &[u8])>> {
        self.buf.clear();
        let read = match self.max_line_length {
            Some(max) => {
                // A zero limit still reads one byte so the line reaches the transformer.
                let limit = u64::try_from(max.max(1)).unwrap_or(u64::MAX);
                (&mut self.inner).take(limit).read_until(b'\n', &mut self.buf)?
            }
            None => self.inner.read_until(b'\n', &mut self.buf)?,
        };

        if read == 0 {
            return Ok(None);
        }
        self.line += 1;
        Ok(Some((self.line, self.buf.as_slice())))
    }
}

/// Counters for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformStats {
    pub lines_read: usize,
    pub content_lines: usize,
    pub blank_lines: usize,
    pub blank_lines_emitted: usize,
    pub records_written: usize,
    pub bytes_written: usize,
}

impl TransformStats {
    fn record(&mut self, record: &Record) {
        self.lines_read += 1;
        match record.kind() {
            LineKind::Content => self.content_lines += 1,
            LineKind::Blank => self.blank_lines += 1,
        }
        if matches!(record, Record::Blank) {
            self.blank_lines_emitted += 1;
        }
        if let Some(bytes) = record.as_bytes() {
            self.records_written += 1;
            self.bytes_written += bytes.len();
        }
    }

    /// Format as pretty-printed JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Format as a short human-readable summary.
    #[must_use]
    pub fn to_text(&self) -> String {
        format!(
            "Converted {} line(s): {} content, {} blank ({} emitted). Wrote {} record(s), {} bytes.",
            self.lines_read,
            self.content_lines,
            self.blank_lines,
            self.blank_lines_emitted,
            self.records_written,
            self.bytes_written,
        )
    }
}

/// Runs the line transformer over a whole stream.
#[derive(Debug, Clone, Copy)]
pub struct Driver {
    transformer: LineTransformer,
    verbose: bool,
}

impl Driver {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            transformer: LineTransformer::new(config),
            verbose: config.verbose,
        }
    }

    /// Convert `input` into `output`, echoing records to stdout in verbose mode.
    ///
    /// # Errors
    ///
    /// Returns the first read, transform or write error; output written
    /// before it stays written.
    pub fn process<R: BufRead, W: Write>(&self, input: R, output: W) -> Result<TransformStats> {
        let stdout = io::stdout();
        let mut echo = stdout.lock();
        self.process_with_echo(input, output, &mut echo)
    }

    /// Convert `input` into `output`, echoing records to `echo` in verbose mode.
    ///
    /// # Errors
    ///
    /// Same as [`Driver::process`].
    pub fn process_with_echo<R, W, E>(
        &self,
        input: R,
        mut output: W,
        echo: &mut E,
    ) -> Result<TransformStats>
    where
        R: BufRead,
        W: Write,
        E: Write + ?Sized,
    {
        let mut reader = LineReader::new(input, self.transformer.max_line_length());
        let mut stats = TransformStats::default();

        while let Some((line, raw)) = reader.next_line()? {
            let record = self.transformer.transform(raw, line)?;
            if let Some(bytes) = record.as_bytes() {
                if self.verbose {
                    echo.write_all(bytes)?;
                }
                output.write_all(bytes)?;
            }
            stats.record(&record);
        }

        output.flush()?;
        if self.verbose {
            echo.flush()?;
        }

        tracing::info!(
            lines = stats.lines_read,
            records = stats.records_written,
            bytes = stats.bytes_written,
            "conversion finished"
        );
        Ok(stats)
    }
}
