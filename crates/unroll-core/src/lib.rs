//! Unroll Core - 5x5 kernel text generation
//!
//! This crate provides:
//! - The separable weight table and its row-major kernel cells
//! - Resolution handling for texel-offset normalization
//! - Number formatting policies for WGSL literals
//! - The `emit` operation producing shader fragment lines

pub mod emit;
pub mod error;
pub mod format;
pub mod kernel;
pub mod resolution;

pub use emit::{Lines, Mode, ParseModeError, emit};
pub use error::KernelError;
pub use format::{FormatPolicy, NumberFormat};
pub use kernel::{DEFAULT_WEIGHTS, KERNEL_RADIUS, KERNEL_SIZE, Kernel, KernelCell};
pub use resolution::{Axis, DEFAULT_RESOLUTION, ParseResolutionError, Resolution};
