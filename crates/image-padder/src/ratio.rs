//! Target aspect ratio (canvas width divided by canvas height).

use std::fmt;
use std::str::FromStr;

use crate::{DEFAULT_TARGET_RATIO, PadError, Result};

/// A positive, finite width/height ratio.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TargetRatio(f64);

impl TargetRatio {
    /// Validate a raw ratio. Zero, negative, NaN and infinite values are rejected.
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(PadError::InvalidRatio(format!("{value} is not finite")));
        }
        if value <= 0.0 {
            return Err(PadError::InvalidRatio(format!("{value} must be positive")));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for TargetRatio {
    fn default() -> Self {
        Self(DEFAULT_TARGET_RATIO)
    }
}

impl fmt::Display for TargetRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Accepts a decimal (`2.5`) or a `W:H` pair (`5:2`).
impl FromStr for TargetRatio {
    type Err = PadError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.split_once(':') {
            Some((w, h)) => {
                let w = parse_component(w, s)?;
                let h = parse_component(h, s)?;
                if h == 0.0 {
                    return Err(PadError::InvalidRatio(format!("{s}: height is zero")));
                }
                Self::new(w / h)
            }
            None => Self::new(parse_component(s, s)?),
        }
    }
}

fn parse_component(part: &str, whole: &str) -> Result<f64> {
    part.trim()
        .parse::<f64>()
        .map_err(|_| PadError::InvalidRatio(format!("{whole}: expected a number or W:H")))
}
