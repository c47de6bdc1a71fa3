//! Classification of log-space values without exponentiating.

use num_traits::Float;

use super::{LogValue, Sign};

/// Class of the log-space encoding, decided from the sign and the
/// log-magnitude alone.
///
/// `Finite` means a finite log-magnitude: the value itself exists, but
/// [`LogValue::to`] may still over- or underflow `T` when reconstructing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    /// The canonical zero: a `Zero` sign.
    Zero,
    /// A non-zero value with a finite log-magnitude.
    Finite,
    /// A non-zero sign with a `-inf` log-magnitude: smaller than any
    /// representable magnitude, but not the canonical zero.
    Underflow,
    /// A non-zero sign with a `+inf` log-magnitude.
    Infinite,
    /// No meaningful value, e.g. the quotient of a division by zero.
    Nan,
}

impl<T: Float> LogValue<T> {
    pub fn classify(&self) -> Class {
        let ln = self.ln_abs;
        if ln.is_nan() {
            return Class::Nan;
        }
        match self.sign {
            // 0 * exp(+inf) has no value
            Sign::Zero if ln == T::infinity() => Class::Nan,
            Sign::Zero => Class::Zero,
            _ if ln == T::infinity() => Class::Infinite,
            _ if ln == T::neg_infinity() => Class::Underflow,
            _ => Class::Finite,
        }
    }

    /// True for `Zero` and `Finite`, i.e. a value that arithmetic can carry
    /// on with, even where [`to`](LogValue::to) would overflow.
    #[inline]
    pub fn is_finite(&self) -> bool {
        matches!(self.classify(), Class::Zero | Class::Finite)
    }

    #[inline]
    pub fn is_nan(&self) -> bool {
        self.classify() == Class::Nan
    }

    /// True for a `Zero` sign. Agrees with `classify() == Class::Zero`
    /// except for zero-signed NaN encodings.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.sign.is_zero()
    }

    /// Division that reports a zero divisor instead of encoding it as NaN.
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        if rhs.sign.is_zero() {
            None
        } else {
            Some(self / rhs)
        }
    }
}
