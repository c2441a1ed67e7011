//! Swap direction relative to a pool's ordered pair.

use core::fmt;

/// Which side of the pool a swap sells into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwapDirection {
    /// Sell asset X, receive asset Y.
    XToY,
    /// Sell asset Y, receive asset X.
    YToX,
}

impl SwapDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::XToY => Self::YToX,
            Self::YToX => Self::XToY,
        }
    }

    /// Returns `true` if the input side is asset X.
    #[must_use]
    pub const fn is_x_in(self) -> bool {
        matches!(self, Self::XToY)
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::XToY => f.write_str("x_to_y"),
            Self::YToX => f.write_str("y_to_x"),
        }
    }
}
