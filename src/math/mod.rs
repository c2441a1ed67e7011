//! Checked integer arithmetic for pool calculations.
//!
//! Amounts are `u64`; every product is formed in a `u128` accumulator.
//! Nothing in this module wraps, saturates, or panics: overflow is
//! [`AmmError::ArithmeticOverflow`](crate::error::AmmError::ArithmeticOverflow)
//! and division by zero is
//! [`AmmError::DivisionByZero`](crate::error::AmmError::DivisionByZero).
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`CheckedArithmetic`] | `Result`-returning add/sub/mul/div on domain types |
//! | [`checked_mul_div`] | `a * b / c` with explicit rounding |
//! | [`integer_sqrt`], [`geometric_mean`] | floor square root |
//! | [`quote_constant_product`] | fee-then-curve swap quote |

mod checked;
mod curve;
mod mul_div;
mod sqrt;

pub use checked::CheckedArithmetic;
pub use curve::{quote_constant_product, CurveQuote};
pub use mul_div::{checked_mul_div, div_round};
pub use sqrt::{geometric_mean, integer_sqrt};
