//! Log-domain addition and subtraction of magnitudes.
//!
//! Both kernels take the larger logarithm first. The exponent argument
//! `smaller - larger` is then never positive, so `exp` stays in `[0, 1]` and
//! cannot overflow. `ln_1p` and `exp_m1` keep precision when the two
//! magnitudes are close.

use num_traits::Float;

/// `ln(e^larger + e^smaller)` for `larger >= smaller`.
#[inline]
pub fn ln_add<T: Float>(larger: T, smaller: T) -> T {
    larger + (smaller - larger).exp().ln_1p()
}

/// `ln(e^larger - e^smaller)` for `larger > smaller`.
///
/// `1 - e^d` is taken as `-expm1(d)`: it rounds to zero for `|d|` below
/// machine epsilon, which would turn a non-zero difference into `-inf`.
#[inline]
pub fn ln_sub<T: Float>(larger: T, smaller: T) -> T {
    larger + (-(smaller - larger).exp_m1()).ln()
}
