use num_traits::{Float, NumCast};

use super::Sign;

/// A real number stored as its sign and the natural logarithm of its
/// magnitude.
///
/// `LogValue::new(0.0)` keeps `ln(0) = -inf` as its log-magnitude. Equality
/// and ordering only ever look at the sign for zero values, so the stored
/// magnitude of a zero is never observable through arithmetic.
#[derive(Debug, Clone, Copy)]
pub struct LogValue<T> {
    pub(super) ln_abs: T,
    pub(super) sign: Sign,
}

impl<T: Float> LogValue<T> {
    /// Converts a linear value into log-space.
    #[inline]
    pub fn new(value: T) -> Self {
        match Sign::of(value) {
            Sign::Zero => Self::from_parts(value.ln(), Sign::Zero),
            sign => Self::from_parts(value.abs().ln(), sign),
        }
    }

    /// Builds a positive value whose logarithm is already known.
    ///
    /// No classification happens: the caller asserts the value is positive.
    #[inline]
    pub fn from_log(ln: T) -> Self {
        Self::from_parts(ln, Sign::Positive)
    }

    /// Raw constructor. Callers must already uphold the zero-sign invariant.
    #[inline]
    pub(super) fn from_parts(ln_abs: T, sign: Sign) -> Self {
        Self { ln_abs, sign }
    }

    /// Reconstructs the linear value. Over- and underflows exactly where `T`
    /// would.
    #[inline]
    pub fn to(&self) -> T {
        self.sign.multiplier::<T>() * self.ln_abs.exp()
    }

    /// Reconstructs the linear value and converts it to another numeric type.
    ///
    /// Returns `None` if `U` cannot represent the value.
    #[inline]
    pub fn cast<U: NumCast>(&self) -> Option<U> {
        U::from(self.to())
    }

    /// The signed log-magnitude, for display and debugging only.
    #[inline]
    pub fn as_is(&self) -> T {
        self.sign.multiplier::<T>() * self.ln_abs
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// `ln|v|`. For zero values this is whatever the producing operation left
    /// behind, usually `-inf`.
    #[inline]
    pub fn ln_abs(&self) -> T {
        self.ln_abs
    }

    /// Natural logarithm of the represented value as a plain float.
    pub fn ln(&self) -> T {
        match self.sign {
            Sign::Positive => self.ln_abs,
            Sign::Negative => T::nan(),
            Sign::Zero => T::neg_infinity(),
        }
    }

    /// Flips the sign in place. Zero stays zero.
    #[inline]
    pub fn negate(&mut self) -> &mut Self {
        self.sign = -self.sign;
        self
    }

    pub fn abs(self) -> Self {
        match self.sign {
            Sign::Negative => Self::from_parts(self.ln_abs, Sign::Positive),
            _ => self,
        }
    }

    pub fn recip(self) -> Self {
        Self::one_value() / self
    }

    /// Raises to an integer power by scaling the log-magnitude.
    pub fn powi(self, n: i32) -> Self {
        if n == 0 {
            return Self::one_value();
        }
        let sign = match self.sign {
            Sign::Negative if n % 2 == 0 => Sign::Positive,
            sign => sign,
        };
        // n < 0 on a zero flips -inf to +inf, same as dividing by zero.
        let scale = <T as NumCast>::from(n).unwrap_or_else(T::nan);
        Self::from_parts(self.ln_abs * scale, sign)
    }

    #[inline]
    pub(super) fn zero_value() -> Self {
        Self::new(T::zero())
    }

    #[inline]
    pub(super) fn one_value() -> Self {
        Self::new(T::one())
    }
}

impl<T: Float> From<T> for LogValue<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Float> Default for LogValue<T> {
    #[inline]
    fn default() -> Self {
        Self::zero_value()
    }
}
