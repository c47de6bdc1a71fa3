//! Signed real numbers stored as `(sign, ln|v|)`.
//!
//! Multiplication and division reduce to adding and subtracting logarithms.
//! Addition and subtraction go through the log-sum-exp kernels in
//! [`kernel`], which never exponentiate anything larger than `1`, so
//! intermediate results stay representable even when the linear value would
//! overflow or flush to zero.
//!
//! Non-finite outcomes (division by zero, NaN inputs) propagate through the
//! float channel exactly as they would for `f64`; [`LogValue::classify`] and
//! [`LogValue::checked_div`] expose them explicitly when needed.

mod classify;
mod cmp;
mod fmt;
pub mod kernel;
mod ops;
mod sign;
mod value;

pub use classify::Class;
pub use sign::Sign;
pub use value::LogValue;
