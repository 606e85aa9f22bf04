//! Line transformer: turns one kernel source line into one string-literal record.
//!
//! A content line `int i = get_global_id(0);` becomes
//!
//! ```text
//! "int i = get_global_id(0); \n"
//! ```
//!
//! followed by a real newline. The body is copied byte for byte; quotes and
//! backslashes inside it are not escaped.

use crate::config::Config;
use crate::error::{self, Error, Result};

/// Opening quote of every literal record.
pub const STRING_PREFIX: &[u8] = b"\"";

/// Escaped newline, closing quote and the real line break.
pub const STRING_SUFFIX: &[u8] = b" \\n\"\n";

/// Record emitted for a blank line when blank lines are kept.
pub const BLANK_LINE: &[u8] = b"\" \\n\"\n";

/// Blank vs. content classification of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Only whitespace, or nothing at all.
    Blank,
    /// At least one non-whitespace byte.
    Content,
}

impl LineKind {
    /// Classify a line body (without its newline).
    #[must_use]
    pub fn of(line: &[u8]) -> Self {
        if line.iter().copied().all(is_space) {
            LineKind::Blank
        } else {
            LineKind::Content
        }
    }
}

/// The output produced for one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// A wrapped content line, ready to write.
    Literal(Vec<u8>),
    /// A blank line kept as [`BLANK_LINE`].
    Blank,
    /// A blank line dropped because blank lines are not kept.
    Suppressed,
}

impl Record {
    /// Bytes to write for this record, or `None` when it is suppressed.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Record::Literal(bytes) => Some(bytes.as_slice()),
            Record::Blank => Some(BLANK_LINE),
            Record::Suppressed => None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> LineKind {
        match self {
            Record::Literal(_) => LineKind::Content,
            Record::Blank | Record::Suppressed => LineKind::Blank,
        }
    }
}

/// Whitespace as the C locale's `isspace` sees it. Unlike
/// [`u8::is_ascii_whitespace`] this includes vertical tab.
#[must_use]
pub fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

/// Length of the line held in `raw`: the index of its first newline, or the
/// whole buffer when the line is unterminated.
#[must_use]
pub fn line_length(raw: &[u8]) -> usize {
    raw.iter().position(|&b| b == b'\n').unwrap_or(raw.len())
}

/// Wrap a line body as `"` + body + ` \n"` + newline.
///
/// # Errors
///
/// Returns [`Error::Allocation`] if the output buffer cannot be reserved.
pub fn wrap_line(body: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    error::try_reserve(
        &mut out,
        STRING_PREFIX.len() + body.len() + STRING_SUFFIX.len(),
    )?;
    out.extend_from_slice(STRING_PREFIX);
    out.extend_from_slice(body);
    out.extend_from_slice(STRING_SUFFIX);
    Ok(out)
}

/// Applies the per-line rules of a [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineTransformer {
    include_blank_lines: bool,
    max_line_length: Option<usize>,
    require_trailing_newline: bool,
}

impl LineTransformer {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            include_blank_lines: config.include_blank_lines,
            max_line_length: config.max_line_length,
            require_trailing_newline: config.require_trailing_newline,
        }
    }

    #[must_use]
    pub fn max_line_length(&self) -> Option<usize> {
        self.max_line_length
    }

    /// Transform the raw bytes read for line number `line` (1-based).
    ///
    /// `raw` holds the line and, when present, its terminating newline.
    ///
    /// # Errors
    ///
    /// - [`Error::LineTooLong`] if the line is at least the maximum length
    /// - [`Error::MissingTrailingNewline`] if `raw` is unterminated and strict
    ///   termination is configured
    /// - [`Error::Allocation`] if the record cannot be allocated
    pub fn transform(&self, raw: &[u8], line: usize) -> Result<Record> {
        let length = line_length(raw);

        if let Some(max) = self.max_line_length
            && length >= max
        {
            return Err(Error::LineTooLong { line, max });
        }

        if length == raw.len() {
            if self.require_trailing_newline {
                return Err(Error::MissingTrailingNewline { line });
            }
            tracing::warn!(line, "no terminating newline; treating end of input as one");
        }

        let body = &raw[..length];
        let kind = LineKind::of(body);
        tracing::debug!(line, length, ?kind, "classified line");

        match kind {
            LineKind::Content => Ok(Record::Literal(wrap_line(body)?)),
            LineKind::Blank if self.include_blank_lines => Ok(Record::Blank),
            LineKind::Blank => Ok(Record::Suppressed),
        }
    }
}
