//! Unroll - unrolled 5x5 kernel fragments for WGSL shaders
//!
//! The generation logic lives in `unroll-core` and configuration in
//! `unroll-config`. This crate is the command line shell around them:
//! - `cli` - argument parsing and command dispatch
//! - `output` - writes generated lines to stdout or a file

pub mod cli;
pub mod output;

pub use cli::{Cli, Commands, run};
pub use output::{Destination, write_lines};
