//! # kernel_helper
//!
//! Convert an OpenCL kernel into paste-able string literals.
//!
//! - Convert `../data/kernel.cl` into `../data/example.txt`: `kernel_helper`
//! - Pick files, keep blank lines, echo output: `kernel_helper -f add.cl -o add.txt -b -v`
//! - Use paths as given: `kernel_helper -a -f kernels/add.cl -o add.txt`
//!
//! Run `kernel_helper --help` for every option.

/// Entry point for the CLI tool.
fn main() {
    kernel_helper::cli::run_cli();
}
