use logval::{Class, LogValue, Sign};
use num_traits::Float;

fn rel_err(actual: f64, expected: f64) -> f64 {
    if expected == 0.0 {
        return actual.abs();
    }
    ((actual - expected) / expected).abs()
}

/// Probability that `n` independent trials with success chance `p` all
/// succeed, computed without ever leaving log-space.
fn all_succeed<T: Float>(p: T, n: usize) -> LogValue<T> {
    core::iter::repeat_n(LogValue::new(p), n).product()
}

/// `sum_i w_i * x_i` over values that would under- or overflow linearly.
fn weighted_sum<T: Float>(weights: &[LogValue<T>], xs: &[LogValue<T>]) -> LogValue<T> {
    weights.iter().zip(xs).map(|(w, x)| w * x).sum()
}

#[test]
fn tiny_probabilities_stay_representable() {
    let p = all_succeed(0.5f64, 2000);
    assert_eq!(p.classify(), Class::Finite);
    assert_eq!(p.to(), 0.0);
    let expected = 2000.0 * 0.5f64.ln();
    assert!((p.ln_abs() - expected).abs() < 1e-9, "ln p = {}", p.ln_abs());

    // renormalising brings it back into range
    let q = p / all_succeed(0.5f64, 1999);
    assert!(rel_err(q.to(), 0.5) < 1e-9, "q = {}", q.to());
}

#[test]
fn works_at_single_precision() {
    let p = all_succeed(0.5f32, 300);
    assert_eq!(p.to(), 0.0f32);
    assert_eq!(p.classify(), Class::Finite);

    let a = LogValue::new(3.0f32);
    let b = LogValue::new(-5.0f32);
    assert!(((a + b).to() + 2.0).abs() < 1e-5);
    assert!(((a * b).to() + 15.0).abs() < 1e-4);
    assert_eq!((a - a).sign(), Sign::Zero);
}

#[test]
fn weighted_sum_with_mixed_signs() {
    let weights = [LogValue::from_log(800.0), -LogValue::from_log(800.0), LogValue::new(1.0)];
    let xs = [LogValue::new(2.0), LogValue::new(1.0), LogValue::new(-3.0)];
    // e^800 * 2 - e^800 * 1 - 3 ~= e^800
    let total = weighted_sum(&weights, &xs);
    assert_eq!(total.sign(), Sign::Positive);
    assert!((total.ln_abs() - 800.0).abs() < 1e-9, "ln total = {}", total.ln_abs());
}

#[test]
fn scenario_opposite_sign_addition() {
    let sum = LogValue::new(3.46e9) + LogValue::new(-4.46e9);
    assert!(rel_err(sum.to(), -1.0e9) < 1e-12, "{}", sum.to());
}

#[test]
fn scenario_division_by_zero() {
    for x in [-1.0, 0.0, 1.0] {
        let q = LogValue::new(x) / LogValue::new(0.0);
        assert!(!q.to().is_finite(), "{x} / 0");
        assert!(LogValue::new(x).checked_div(LogValue::new(0.0)).is_none());
    }
}

#[test]
fn scenario_bulk_round_trip() {
    let factor = LogValue::new(1e30);
    let mut acc = LogValue::new(1.0);
    for _ in 0..10_000 {
        acc *= factor;
    }
    assert!(acc.to().is_infinite());
    for _ in 0..10_000 {
        acc /= factor;
    }
    assert!((acc.to() - 1.0).abs() < 1e-7, "{}", acc.to());
}

#[test]
fn scenario_zero_multiply_equality() {
    let zero = LogValue::new(0.0);
    let values = [-7.5, -1.0, 0.0, 1e-200, 3.0, 1e300];
    for &a in &values {
        for &b in &values {
            assert_eq!(LogValue::new(a) * zero, LogValue::new(b) * zero);
        }
    }
}

#[test]
fn sort_by_partial_order() {
    let mut values: Vec<LogValue<f64>> = [3.0, -1.0, 0.0, 1e-9, -1e9, 2.5]
        .into_iter()
        .map(LogValue::new)
        .collect();
    values.push(LogValue::from_log(1e4));
    values.push(-LogValue::from_log(1e4));
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(core::cmp::Ordering::Equal));

    let signs: Vec<Sign> = values.iter().map(LogValue::sign).collect();
    assert_eq!(signs[0], Sign::Negative);
    assert_eq!(values[0].ln_abs(), 1e4);
    assert!(rel_err(values[1].to(), -1e9) < 1e-12);
    assert_eq!(signs[3], Sign::Zero);
    assert_eq!(values[7].ln_abs(), 1e4);
    assert_eq!(signs[7], Sign::Positive);
}
