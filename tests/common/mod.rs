//! Common test helpers shared across integration tests

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)] // Not all helpers are used by every test file

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Helper to get the compiled binary path
pub fn get_binary_path() -> PathBuf {
    // Get the directory where cargo places test binaries
    let mut path = env::current_exe().unwrap();
    path.pop(); // Remove test executable name

    // Check if we're in a 'deps' directory (integration tests)
    if path.ends_with("deps") {
        path.pop(); // Go up to debug or release
    }

    path.push(format!("kernel_helper{}", env::consts::EXE_SUFFIX));

    // If the binary doesn't exist in debug, try building it first
    if !path.exists() {
        let build_output = Command::new("cargo")
            .args(["build", "--bin", "kernel_helper"])
            .output()
            .expect("Failed to build binary");

        assert!(
            build_output.status.success(),
            "Failed to build kernel_helper binary: {}",
            String::from_utf8_lossy(&build_output.stderr)
        );
    }

    path
}

/// Helper to create a temporary directory for tests
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Lay out `<root>/bin` and `<root>/data`, the default working layout.
/// Returns the `bin` directory to run the binary from.
pub fn create_data_layout(root: &Path) -> PathBuf {
    let bin = root.join("bin");
    fs::create_dir_all(&bin).unwrap();
    fs::create_dir_all(root.join("data")).unwrap();
    bin
}

/// Helper to write a kernel file
pub fn create_kernel(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

/// Kernel used across the tests, with one blank line
pub const SAMPLE_KERNEL: &str = "__kernel void example(\n    __global float* output_buffer)\n{\n\n    int i = get_global_id(0);\n    output_buffer[i] = i;\n}\n";

/// `SAMPLE_KERNEL` converted without blank lines
pub const SAMPLE_CONVERTED: &str = concat!(
    "\"__kernel void example( \\n\"\n",
    "\"    __global float* output_buffer) \\n\"\n",
    "\"{ \\n\"\n",
    "\"    int i = get_global_id(0); \\n\"\n",
    "\"    output_buffer[i] = i; \\n\"\n",
    "\"} \\n\"\n",
);

/// Package version for testing --version flag
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
