//! Texel grid size used to normalize pixel offsets

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::error::KernelError;

/// Render target edge length the feedback shader samples from
pub const DEFAULT_RESOLUTION: i64 = 1024;

/// Texture axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Resolution as a single scalar or one length per axis
///
/// Values are signed so that bad configuration survives parsing and is
/// reported as [`KernelError::InvalidResolution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Uniform(i64),
    PerAxis { x: i64, y: i64 },
}

impl Resolution {
    /// `(x, y)` axis lengths
    pub fn axes(&self) -> (i64, i64) {
        match *self {
            Resolution::Uniform(r) => (r, r),
            Resolution::PerAxis { x, y } => (x, y),
        }
    }

    /// Single length when both axes agree
    pub fn uniform_value(&self) -> Option<i64> {
        let (x, y) = self.axes();
        (x == y).then_some(x)
    }

    pub fn validate(&self) -> Result<(), KernelError> {
        let (x, y) = self.axes();
        for (axis, value) in [(Axis::X, x), (Axis::Y, y)] {
            if value <= 0 {
                return Err(KernelError::InvalidResolution { axis, value });
            }
        }
        Ok(())
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Uniform(r) => write!(f, "{r}"),
            Resolution::PerAxis { x, y } => write!(f, "{x}x{y}"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid resolution '{0}': expected <N> or <X>x<Y>")]
pub struct ParseResolutionError(String);

impl FromStr for Resolution {
    type Err = ParseResolutionError;

    /// Parse `1024` or `1920x1080`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = || ParseResolutionError(s.to_string());
        match s.split_once(['x', 'X']) {
            Some((x, y)) => Ok(Resolution::PerAxis {
                x: x.trim().parse().map_err(|_| err())?,
                y: y.trim().parse().map_err(|_| err())?,
            }),
            None => s.parse().map(Resolution::Uniform).map_err(|_| err()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axes() {
        assert_eq!(Resolution::Uniform(1024).axes(), (1024, 1024));
        assert_eq!(Resolution::PerAxis { x: 1920, y: 1080 }.axes(), (1920, 1080));
    }

    #[test]
    fn test_uniform_value() {
        assert_eq!(Resolution::PerAxis { x: 512, y: 512 }.uniform_value(), Some(512));
        assert_eq!(Resolution::PerAxis { x: 512, y: 256 }.uniform_value(), None);
    }

    #[test]
    fn test_rejects_zero() {
        let err = Resolution::Uniform(0).validate().unwrap_err();
        assert_eq!(
            err,
            KernelError::InvalidResolution {
                axis: Axis::X,
                value: 0
            }
        );
    }

    #[test]
    fn test_rejects_negative_y() {
        let err = Resolution::PerAxis { x: 1024, y: -8 }.validate().unwrap_err();
        assert_eq!(
            err,
            KernelError::InvalidResolution {
                axis: Axis::Y,
                value: -8
            }
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("1024".parse::<Resolution>(), Ok(Resolution::Uniform(1024)));
        assert_eq!(
            "1920x1080".parse::<Resolution>(),
            Ok(Resolution::PerAxis { x: 1920, y: 1080 })
        );
        assert!("wide".parse::<Resolution>().is_err());
        assert!("1920x".parse::<Resolution>().is_err());
    }
}
