//! Conversion settings, defaults and data-directory path resolution.

use std::path::{Path, PathBuf};

/// Input file used when none is given.
pub const DEFAULT_KERNEL_FILE: &str = "kernel.cl";

/// Output file used when none is given.
pub const DEFAULT_OUTPUT_FILE: &str = "example.txt";

/// Directory searched in [`PathMode::DataDirectory`] mode.
pub const IO_DIRECTORY: &str = "../data/";

/// Default limit on the length of a single input line, in bytes.
pub const MAX_LINE_LENGTH: usize = 128;

/// How file names given on the command line are turned into paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathMode {
    /// Join the file name onto the data directory.
    #[default]
    DataDirectory,
    /// Use the file name as given.
    Immediate,
}

/// Settings for a single conversion run. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Echo every written record to a secondary sink.
    pub verbose: bool,
    /// Emit the empty literal for blank input lines instead of dropping them.
    pub include_blank_lines: bool,
    pub path_mode: PathMode,
    pub data_dir: PathBuf,
    /// Lines of this length or longer are rejected. `None` means unlimited.
    pub max_line_length: Option<usize>,
    /// Treat an unterminated final line as an error instead of a complete line.
    pub require_trailing_newline: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            include_blank_lines: false,
            path_mode: PathMode::default(),
            data_dir: PathBuf::from(IO_DIRECTORY),
            max_line_length: Some(MAX_LINE_LENGTH),
            require_trailing_newline: false,
        }
    }
}

impl Config {
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    #[must_use]
    pub fn include_blank_lines(mut self, include: bool) -> Self {
        self.include_blank_lines = include;
        self
    }

    #[must_use]
    pub fn path_mode(mut self, mode: PathMode) -> Self {
        self.path_mode = mode;
        self
    }

    #[must_use]
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    #[must_use]
    pub fn max_line_length(mut self, max: Option<usize>) -> Self {
        self.max_line_length = max;
        self
    }

    #[must_use]
    pub fn require_trailing_newline(mut self, require: bool) -> Self {
        self.require_trailing_newline = require;
        self
    }

    /// Resolve a file name according to the configured [`PathMode`].
    #[must_use]
    pub fn resolve_path(&self, file_name: &Path) -> PathBuf {
        resolve_path(file_name, self.path_mode, &self.data_dir)
    }
}

/// Resolve `file_name` for `mode`.
///
/// In data-directory mode the name is joined onto `data_dir`, so an absolute
/// name still wins (standard `Path::join` semantics).
#[must_use]
pub fn resolve_path(file_name: &Path, mode: PathMode, data_dir: &Path) -> PathBuf {
    match mode {
        PathMode::Immediate => file_name.to_path_buf(),
        PathMode::DataDirectory => data_dir.join(file_name),
    }
}
