/// Edge detection operators.

use std::fmt;
use std::str::FromStr;
use crate::error::Error;

/// Edge operator applied by the line view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EdgeOperator {
    #[default]
    Sobel,
    Prewitt,
    Scharr,
    /// Gradient plus non-maximum suppression, two passes
    Canny,
}

impl EdgeOperator {
    pub const ALL: [EdgeOperator; 4] = [
        EdgeOperator::Sobel,
        EdgeOperator::Prewitt,
        EdgeOperator::Scharr,
        EdgeOperator::Canny,
    ];

    /// Operator at a host selector index (0 Sobel .. 3 Canny)
    pub fn from_index(index: usize) -> Option<EdgeOperator> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        match self {
            EdgeOperator::Sobel => 0,
            EdgeOperator::Prewitt => 1,
            EdgeOperator::Scharr => 2,
            EdgeOperator::Canny => 3,
        }
    }

    /// Kernel selector of the shared Sobel-family stage, `None` for Canny.
    pub fn kernel_selector(&self) -> Option<u32> {
        match self {
            EdgeOperator::Sobel => Some(0),
            EdgeOperator::Prewitt => Some(1),
            EdgeOperator::Scharr => Some(2),
            EdgeOperator::Canny => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EdgeOperator::Sobel => "sobel",
            EdgeOperator::Prewitt => "prewitt",
            EdgeOperator::Scharr => "scharr",
            EdgeOperator::Canny => "canny",
        }
    }
}

impl fmt::Display for EdgeOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EdgeOperator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidResource(format!("unknown edge operator '{}'", s)))
    }
}

#[cfg(test)]
#[path = "edge_operator_tests.rs"]
mod tests;
