//! # kernel_helper
//!
//! Converts an OpenCL kernel source file into string literals that can be
//! pasted into a `char[]` in a C/C++ program, or loads a kernel source whole
//! for building at runtime.
//!
//! ```text
//! __kernel void example(          "__kernel void example( \n"
//!     __global float* out)   =>   "    __global float* out) \n"
//! {                               "{ \n"
//! ```

pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod loader;
pub mod transform;

pub use config::{Config, PathMode};
pub use driver::{Driver, LineReader, TransformStats};
pub use error::{Error, Result};
pub use loader::{load_bytes, load_file, load_source};
pub use transform::{LineKind, LineTransformer, Record};

/// Print an error message and exit with code 1.
pub fn fatal_error(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}
