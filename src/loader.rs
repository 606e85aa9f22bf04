//! Whole-file loading, for building a kernel from its source at runtime
//! instead of pasting converted literals.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{self, Error, Result};

/// Read everything left in `reader` verbatim.
///
/// `expected_size` only sizes the initial buffer; a stream holding more than
/// that still loads completely.
///
/// # Errors
///
/// Returns [`Error::Allocation`] if the initial buffer cannot be reserved and
/// [`Error::Io`] if reading fails.
pub fn load_bytes<R: Read>(mut reader: R, expected_size: usize) -> Result<Vec<u8>> {
    let mut source = Vec::new();
    error::try_reserve(&mut source, expected_size)?;
    reader.read_to_end(&mut source)?;
    Ok(source)
}

/// Read everything left in `reader` into a `String`.
///
/// # Errors
///
/// As [`load_bytes`], plus [`Error::Encoding`] when the contents are not UTF-8.
pub fn load_source<R: Read>(reader: R, expected_size: usize) -> Result<String> {
    let bytes = load_bytes(reader, expected_size)?;
    Ok(String::from_utf8(bytes)?)
}

/// Open `path` and load it as a `String`, using the file size as the
/// expected size.
///
/// # Errors
///
/// Returns [`Error::FileNotFound`] if the file cannot be opened, otherwise
/// as [`load_source`].
pub fn load_file(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| Error::not_found(path, e))?;
    let expected = file
        .metadata()
        .map(|m| usize::try_from(m.len()).unwrap_or(0))
        .unwrap_or(0);
    load_source(file, expected)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const KERNEL: &str = "__kernel void example(\n    __global float* output_buffer)\n{\n    int i = get_global_id(0);\n    output_buffer[i] = i;\n}\n";

    #[test]
    fn test_load_is_verbatim() {
        let source = load_source(KERNEL.as_bytes(), KERNEL.len()).unwrap();
        assert_eq!(source, KERNEL);
    }

    #[test]
    fn test_underestimated_size_still_loads_everything() {
        let source = load_source(KERNEL.as_bytes(), 4).unwrap();
        assert_eq!(source, KERNEL);
    }

    #[test]
    fn test_loads_remaining_contents_only() {
        let mut cursor = Cursor::new(b"skip\nkeep\n".to_vec());
        let mut skipped = [0u8; 5];
        cursor.read_exact(&mut skipped).unwrap();
        let rest = load_bytes(&mut cursor, 0).unwrap();
        assert_eq!(rest, b"keep\n");
    }

    #[test]
    fn test_invalid_utf8_is_an_encoding_error() {
        let err = load_source(&b"f\xff\n"[..], 3).unwrap_err();
        assert!(matches!(err, Error::Encoding(_)));
        let bytes = load_bytes(&b"f\xff\n"[..], 3).unwrap();
        assert_eq!(bytes, vec![0x66, 0xff, 0x0a]);
    }

    #[test]
    fn test_oversized_hint_is_allocation_error() {
        let err = load_bytes(KERNEL.as_bytes(), usize::MAX).unwrap_err();
        assert!(matches!(err, Error::Allocation { .. }));
    }

    #[test]
    fn test_load_file_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("kernel.cl");
        std::fs::write(&path, KERNEL).unwrap();
        assert_eq!(load_file(&path).unwrap(), KERNEL);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = load_file(&dir.path().join("missing.cl")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
