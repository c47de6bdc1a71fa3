//! Arithmetic operators. The compound-assignment forms hold the arithmetic;
//! the binary forms are thin wrappers around them.

use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_traits::{Float, One, Zero};

use super::kernel::{ln_add, ln_sub};
use super::{LogValue, Sign};

impl<T: Float> MulAssign for LogValue<T> {
    /// `ln(xy) = ln(x) + ln(y)`; a zero factor zeroes the sign.
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        self.sign = self.sign * rhs.sign;
        self.ln_abs = self.ln_abs + rhs.ln_abs;
    }
}

impl<T: Float> DivAssign for LogValue<T> {
    /// A zero divisor gives a zero sign with a `+inf` or NaN magnitude, so
    /// [`LogValue::to`] comes out NaN.
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        self.sign = self.sign * rhs.sign;
        self.ln_abs = self.ln_abs - rhs.ln_abs;
    }
}

impl<T: Float> AddAssign for LogValue<T> {
    /// Much slower than multiplication: up to two transcendental calls and
    /// several branches.
    fn add_assign(&mut self, rhs: Self) {
        if rhs.sign == Sign::Zero {
            return;
        }
        if self.sign == Sign::Zero {
            *self = rhs;
            return;
        }

        let (a, b) = (self.ln_abs, rhs.ln_abs);
        if self.sign == rhs.sign {
            self.ln_abs = if a >= b { ln_add(a, b) } else { ln_add(b, a) };
        } else if b < a {
            self.ln_abs = ln_sub(a, b);
        } else if b > a {
            self.ln_abs = ln_sub(b, a);
            self.sign = -self.sign;
        } else {
            // exact cancellation
            self.sign = Sign::Zero;
        }
    }
}

impl<T: Float> SubAssign for LogValue<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self += -rhs;
    }
}

macro_rules! forward_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl<T: Float> $Op for LogValue<T> {
            type Output = LogValue<T>;

            #[inline]
            fn $op(mut self, rhs: LogValue<T>) -> LogValue<T> {
                self.$op_assign(rhs);
                self
            }
        }

        impl<'a, T: Float> $Op<&'a LogValue<T>> for LogValue<T> {
            type Output = LogValue<T>;

            #[inline]
            fn $op(mut self, rhs: &'a LogValue<T>) -> LogValue<T> {
                self.$op_assign(*rhs);
                self
            }
        }

        impl<'a, T: Float> $Op<LogValue<T>> for &'a LogValue<T> {
            type Output = LogValue<T>;

            #[inline]
            fn $op(self, rhs: LogValue<T>) -> LogValue<T> {
                let mut out = *self;
                out.$op_assign(rhs);
                out
            }
        }

        impl<'a, 'b, T: Float> $Op<&'b LogValue<T>> for &'a LogValue<T> {
            type Output = LogValue<T>;

            #[inline]
            fn $op(self, rhs: &'b LogValue<T>) -> LogValue<T> {
                let mut out = *self;
                out.$op_assign(*rhs);
                out
            }
        }

        impl<'a, T: Float> $OpAssign<&'a LogValue<T>> for LogValue<T> {
            #[inline]
            fn $op_assign(&mut self, rhs: &'a LogValue<T>) {
                self.$op_assign(*rhs);
            }
        }
    };
}

forward_binop!(Mul, mul, MulAssign, mul_assign);
forward_binop!(Div, div, DivAssign, div_assign);
forward_binop!(Add, add, AddAssign, add_assign);
forward_binop!(Sub, sub, SubAssign, sub_assign);

impl<T: Float> Neg for LogValue<T> {
    type Output = LogValue<T>;

    #[inline]
    fn neg(mut self) -> LogValue<T> {
        self.negate();
        self
    }
}

impl<T: Float> Neg for &LogValue<T> {
    type Output = LogValue<T>;

    #[inline]
    fn neg(self) -> LogValue<T> {
        -*self
    }
}

impl<T: Float> Zero for LogValue<T> {
    #[inline]
    fn zero() -> Self {
        Self::zero_value()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.sign.is_zero()
    }
}

impl<T: Float> One for LogValue<T> {
    #[inline]
    fn one() -> Self {
        Self::one_value()
    }
}

impl<T: Float> Sum for LogValue<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero_value(), |acc, v| acc + v)
    }
}

impl<'a, T: Float> Sum<&'a LogValue<T>> for LogValue<T> {
    fn sum<I: Iterator<Item = &'a LogValue<T>>>(iter: I) -> Self {
        iter.fold(Self::zero_value(), |acc, v| acc + v)
    }
}

impl<T: Float> Product for LogValue<T> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one_value(), |acc, v| acc * v)
    }
}

impl<'a, T: Float> Product<&'a LogValue<T>> for LogValue<T> {
    fn product<I: Iterator<Item = &'a LogValue<T>>>(iter: I) -> Self {
        iter.fold(Self::one_value(), |acc, v| acc * v)
    }
}
