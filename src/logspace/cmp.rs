use core::cmp::Ordering;
use num_traits::Float;

use super::{LogValue, Sign};

impl<T: Float> PartialEq for LogValue<T> {
    /// Zero values are equal whatever magnitude they carry.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        if self.sign == Sign::Zero && other.sign == Sign::Zero {
            return true;
        }
        self.sign == other.sign && self.ln_abs == other.ln_abs
    }
}

impl<T: Float> PartialOrd for LogValue<T> {
    /// Orders by sign first, then by log-magnitude, so no value is ever
    /// exponentiated. Values whose linear form is NaN are unordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.sign == Sign::Zero && other.sign == Sign::Zero {
            return Some(Ordering::Equal);
        }
        if self.is_nan() || other.is_nan() {
            return None;
        }
        match self.sign.as_i8().cmp(&other.sign.as_i8()) {
            Ordering::Equal => match self.sign {
                Sign::Positive => self.ln_abs.partial_cmp(&other.ln_abs),
                Sign::Negative => other.ln_abs.partial_cmp(&self.ln_abs),
                Sign::Zero => Some(Ordering::Equal),
            },
            ord => Some(ord),
        }
    }
}
