//! Tri-state sign carried next to the log-magnitude.

use core::ops::{Mul, Neg};
use num_traits::Float;

/// Sign of a [`LogValue`](super::LogValue).
///
/// `Zero` is a sign of its own: the log-magnitude of a zero value is
/// meaningless, so zero-ness can only be recorded here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Sign {
    Negative = -1,
    Zero = 0,
    Positive = 1,
}

impl Sign {
    /// Classifies `value` by comparison with zero. NaN and `-0.0` map to `Zero`.
    #[inline]
    pub fn of<T: Float>(value: T) -> Self {
        if value > T::zero() {
            Sign::Positive
        } else if value < T::zero() {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }

    /// `+1`, `-1` or `0` as the element type.
    #[inline]
    pub fn multiplier<T: Float>(self) -> T {
        match self {
            Sign::Positive => T::one(),
            Sign::Negative => -T::one(),
            Sign::Zero => T::zero(),
        }
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self == Sign::Zero
    }

    #[inline]
    pub fn as_i8(self) -> i8 {
        self as i8
    }
}

impl Mul for Sign {
    type Output = Sign;

    #[inline]
    fn mul(self, rhs: Sign) -> Sign {
        match (self, rhs) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (a, b) if a == b => Sign::Positive,
            _ => Sign::Negative,
        }
    }
}

impl Neg for Sign {
    type Output = Sign;

    #[inline]
    fn neg(self) -> Sign {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
        }
    }
}
