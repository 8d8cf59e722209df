//! Errors raised while validating generator inputs
//!
//! Both variants are detected before the first line is produced.

use thiserror::Error;

use crate::resolution::Axis;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum KernelError {
    #[error("Invalid kernel size: expected {expected} weights, got {actual}")]
    InvalidKernelSize { expected: usize, actual: usize },

    #[error("Invalid resolution: {axis} axis must be positive, got {value}")]
    InvalidResolution { axis: Axis, value: i64 },
}
