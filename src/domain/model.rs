use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2D coordinate with signed integer fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// What to do when `a + b` does not fit in an `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Two's complement wraparound.
    #[default]
    Wrapping,
    /// Clamp to `i32::MIN` / `i32::MAX`.
    Saturating,
    /// Report `CalcError::Overflow`.
    Checked,
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OverflowPolicy::Wrapping => "wrapping",
            OverflowPolicy::Saturating => "saturating",
            OverflowPolicy::Checked => "checked",
        };
        f.write_str(name)
    }
}

/// Outcome of one addition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sum {
    pub a: i32,
    pub b: i32,
    pub result: i32,
    pub policy: OverflowPolicy,
}

impl fmt::Display for Sum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {} = {}", self.a, self.b, self.result)
    }
}
