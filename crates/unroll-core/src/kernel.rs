//! Separable 5x5 weight table
//!
//! The 2-D weight of a cell is the product of the two 1-D weights,
//! and its pixel offset centers the kernel on the current texel.

use crate::error::KernelError;

/// Number of taps per axis
pub const KERNEL_SIZE: usize = 5;

/// Distance from the center tap to the edge
pub const KERNEL_RADIUS: i32 = (KERNEL_SIZE / 2) as i32;

/// Weight table used by the feedback shader's Laplacian pass
pub const DEFAULT_WEIGHTS: [f64; KERNEL_SIZE] = [0.2, 0.8, 1.0, 0.8, 0.2];

/// One (i, j) position in the 5x5 grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelCell {
    /// Row index (outer loop)
    pub i: usize,
    /// Column index (inner loop)
    pub j: usize,
    /// `weights[i] * weights[j]`
    pub weight: f64,
    /// Integer pixel offset `(i - 2, j - 2)`
    pub offset: (i32, i32),
}

/// Validated 1-D weight table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel {
    weights: [f64; KERNEL_SIZE],
}

impl Kernel {
    /// Build a kernel from a weight slice, rejecting anything but five taps
    pub fn new(weights: &[f64]) -> Result<Self, KernelError> {
        let table = <[f64; KERNEL_SIZE]>::try_from(weights).map_err(|_| {
            KernelError::InvalidKernelSize {
                expected: KERNEL_SIZE,
                actual: weights.len(),
            }
        })?;
        Ok(Self { weights: table })
    }

    pub fn weights(&self) -> &[f64; KERNEL_SIZE] {
        &self.weights
    }

    /// Total number of cells (25)
    pub const fn len(&self) -> usize {
        KERNEL_SIZE * KERNEL_SIZE
    }

    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Cell at a row-major index, `None` past the last cell
    pub fn cell(&self, index: usize) -> Option<KernelCell> {
        if index >= self.len() {
            return None;
        }
        let i = index / KERNEL_SIZE;
        let j = index % KERNEL_SIZE;
        Some(KernelCell {
            i,
            j,
            weight: self.weights[i] * self.weights[j],
            offset: (i as i32 - KERNEL_RADIUS, j as i32 - KERNEL_RADIUS),
        })
    }

    /// All cells, `i` outer and `j` inner
    pub fn cells(&self) -> impl Iterator<Item = KernelCell> + '_ {
        (0..self.len()).filter_map(move |index| self.cell(index))
    }
}

impl Default for Kernel {
    fn default() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS,
        }
    }
}
