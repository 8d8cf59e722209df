//! Kernel-text emitter
//!
//! Produces one WGSL statement per kernel cell that subtracts the weighted
//! neighbour sample from `out_val`. Two offset policies exist:
//!
//! - `Baked`: offsets are divided by the resolution now and written as literals
//! - `Calculated`: offsets stay as `<n>/resolution` expressions, preceded by a
//!   one-time `var resolution` declaration
//!
//! ```
//! use unroll_core::{emit, Mode, Resolution, DEFAULT_WEIGHTS};
//!
//! let lines: Vec<String> =
//!     emit(&DEFAULT_WEIGHTS, Resolution::Uniform(1024), Mode::Calculated)?.collect();
//! assert_eq!(lines[0], "\tvar resolution = 1024.0;");
//! assert_eq!(lines.len(), 26);
//! # Ok::<(), unroll_core::KernelError>(())
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use thiserror::Error;

use crate::error::KernelError;
use crate::format::FormatPolicy;
use crate::kernel::{Kernel, KernelCell};
use crate::resolution::Resolution;

/// Offset generation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Offsets precomputed into literals
    #[default]
    Baked,
    /// Offsets left as division expressions over a `resolution` variable
    Calculated,
}

impl Mode {
    pub fn policy(&self) -> FormatPolicy {
        match self {
            Mode::Baked => FormatPolicy::BAKED,
            Mode::Calculated => FormatPolicy::CALCULATED,
        }
    }

    /// Line prefix; calculated output is pasted into an indented function body
    fn indent(&self) -> &'static str {
        match self {
            Mode::Baked => "",
            Mode::Calculated => "\t",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Baked => "baked",
            Mode::Calculated => "calculated",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown mode '{0}': expected 'baked' or 'calculated'")]
pub struct ParseModeError(String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "baked" | "baked_offset" | "baked-offset" => Ok(Mode::Baked),
            "calculated" | "calculated_offset" | "calculated-offset" => Ok(Mode::Calculated),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// Validate inputs and return the lines for one generation pass
///
/// Validation is eager: on error nothing has been produced. The returned
/// iterator is lazy and single-use; call `emit` again to restart.
pub fn emit(weights: &[f64], resolution: Resolution, mode: Mode) -> Result<Lines, KernelError> {
    let kernel = Kernel::new(weights)?;
    resolution.validate()?;

    log::debug!(
        "Emitting {} kernel lines (mode: {}, resolution: {})",
        kernel.len(),
        mode,
        resolution
    );

    Ok(Lines::new(kernel, resolution, mode))
}

/// Lazy sequence of generated lines
///
/// Not `Clone`: a partly consumed sequence cannot be copied and replayed.
///
/// ```compile_fail
/// use unroll_core::{emit, Mode, Resolution, DEFAULT_WEIGHTS};
///
/// let lines = emit(&DEFAULT_WEIGHTS, Resolution::Uniform(1024), Mode::Baked).unwrap();
/// let _replay = lines.clone();
/// ```
#[derive(Debug)]
pub struct Lines {
    kernel: Kernel,
    resolution: Resolution,
    mode: Mode,
    policy: FormatPolicy,
    header_pending: bool,
    next_cell: usize,
}

impl Lines {
    fn new(kernel: Kernel, resolution: Resolution, mode: Mode) -> Self {
        Self {
            kernel,
            resolution,
            mode,
            policy: mode.policy(),
            header_pending: mode == Mode::Calculated,
            next_cell: 0,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Remaining lines joined with `\n`, newline-terminated
    pub fn collect_string(self) -> String {
        let mut out = String::new();
        for line in self {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    fn header_line(&self) -> String {
        let res = |v: i64| self.policy.resolution.format(v as f64);
        let indent = self.mode.indent();
        match self.resolution.uniform_value() {
            Some(r) => format!("{indent}var resolution = {};", res(r)),
            None => {
                let (x, y) = self.resolution.axes();
                format!("{indent}var resolution = vec2<f32>({}, {});", res(x), res(y))
            }
        }
    }

    fn cell_line(&self, cell: &KernelCell) -> String {
        let (dx, dy) = match self.mode {
            Mode::Baked => self.baked_offset(cell),
            Mode::Calculated => self.calculated_offset(cell),
        };
        let weight = self.policy.weight.format(cell.weight);
        format!(
            "{}out_val -= textureSample(prev_tex, prev_samp, uv + vec2<f32>({dx}, {dy})) * {weight};",
            self.mode.indent()
        )
    }

    fn baked_offset(&self, cell: &KernelCell) -> (String, String) {
        let (rx, ry) = self.resolution.axes();
        let fmt = self.policy.offset;
        (
            fmt.format(f64::from(cell.offset.0) / rx as f64),
            fmt.format(f64::from(cell.offset.1) / ry as f64),
        )
    }

    fn calculated_offset(&self, cell: &KernelCell) -> (String, String) {
        let fmt = self.policy.offset;
        let (nx, ny) = (
            fmt.format(f64::from(cell.offset.0)),
            fmt.format(f64::from(cell.offset.1)),
        );
        if self.resolution.uniform_value().is_some() {
            (format!("{nx}/resolution"), format!("{ny}/resolution"))
        } else {
            (format!("{nx}/resolution.x"), format!("{ny}/resolution.y"))
        }
    }
}

impl Iterator for Lines {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.header_pending {
            self.header_pending = false;
            return Some(self.header_line());
        }
        let cell = self.kernel.cell(self.next_cell)?;
        self.next_cell += 1;
        Some(self.cell_line(&cell))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining =
            usize::from(self.header_pending) + self.kernel.len().saturating_sub(self.next_cell);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Lines {}

impl FusedIterator for Lines {}
