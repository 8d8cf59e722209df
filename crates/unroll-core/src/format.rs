//! Number formatting for WGSL literals
//!
//! Each generation mode carries an explicit [`FormatPolicy`] so the emitted
//! text is reproducible byte for byte.

/// How a single number is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    /// Shortest decimal that round-trips as `f32`, always with a decimal point
    Full,
    /// Exactly `n` fractional digits
    Fixed(usize),
}

impl NumberFormat {
    pub fn format(&self, value: f64) -> String {
        match *self {
            NumberFormat::Full => format_full(value as f32),
            NumberFormat::Fixed(digits) => format!("{value:.digits$}"),
        }
    }
}

/// `Display` for floats never uses exponent notation, but drops the
/// fractional part of whole numbers; WGSL needs it to stay a float literal.
fn format_full(value: f32) -> String {
    let mut s = value.to_string();
    if value.is_finite() && !s.contains('.') {
        s.push_str(".0");
    }
    s
}

/// Formats applied to each kind of number in a generated line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatPolicy {
    /// Baked offsets, or the numerator of a calculated offset
    pub offset: NumberFormat,
    /// Cell weight
    pub weight: NumberFormat,
    /// Resolution constant in the calculated-mode header
    pub resolution: NumberFormat,
}

impl FormatPolicy {
    pub const BAKED: Self = Self {
        offset: NumberFormat::Full,
        weight: NumberFormat::Full,
        resolution: NumberFormat::Full,
    };

    pub const CALCULATED: Self = Self {
        offset: NumberFormat::Fixed(1),
        weight: NumberFormat::Fixed(2),
        resolution: NumberFormat::Fixed(1),
    };
}
