//! Command-line interface
//!
//! Argument parsing lives in [`args`]; command execution lives in the binary.

pub mod args;

pub use args::{parse_args, CliArgs, Command};
