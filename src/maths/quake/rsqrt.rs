use super::{f32_from_bits, f32_to_bits, MAGIC, THREE_HALFS};

/// Zeroth-order estimate of `1/sqrt(x)`: the magic-constant bit trick with
/// no refinement. Worst-case relative error is about 3.4%.
#[inline]
pub fn q_rsqrt_estimate(x: f32) -> f32 {
    let i = f32_to_bits(x);
    let i = MAGIC.wrapping_sub(i >> 1);
    f32_from_bits(i)
}

/// One Newton-Raphson step for `f(y) = 1/y^2 - x`.
///
/// Evaluated as `y * (1.5 - ((x / 2) * y) * y)`, the same operation order as
/// the exported `Q_rsqrt`, so both builds round identically.
#[inline]
pub fn newton_step(x: f32, y: f32) -> f32 {
    let x2 = x * 0.5;
    y * (THREE_HALFS - (x2 * y * y))
}

/// Fast inverse square root: the bit-trick estimate refined once.
///
/// Relative error is below 0.18% for every positive normal `x`.
#[inline]
pub fn q_rsqrt(x: f32) -> f32 {
    newton_step(x, q_rsqrt_estimate(x))
}

#[inline]
pub fn fast_sqrt(x: f32) -> f32 {
    x * q_rsqrt(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel_error(actual: f32, expected: f32) -> f64 {
        ((actual as f64 - expected as f64) / expected as f64).abs()
    }

    // Mantissa sweep over [1, 4): both exponent parities, which is one full
    // period of the estimate's error curve.
    fn period_inputs() -> impl Iterator<Item = f32> {
        (0..=(1 << 16)).map(|k| 1.0 + 3.0 * (k as f32) / (1 << 16) as f32)
    }

    #[test]
    fn sqrt_of_four() {
        let s = fast_sqrt(4.0);
        assert!((1.98..=2.02).contains(&s), "fast_sqrt(4) = {s}");
    }

    #[test]
    fn sqrt_of_ten_thousand() {
        let s = fast_sqrt(10_000.0);
        assert!((99.0..=101.0).contains(&s), "fast_sqrt(10000) = {s}");
    }

    #[test]
    fn estimate_error_without_refinement() {
        let worst = period_inputs()
            .map(|x| rel_error(q_rsqrt_estimate(x), 1.0 / x.sqrt()))
            .fold(0.0f64, f64::max);
        assert!(worst > 0.03 && worst < 0.04, "worst estimate error {worst}");
    }

    #[test]
    fn one_newton_step_is_under_two_tenths_percent() {
        let worst = period_inputs()
            .map(|x| rel_error(fast_sqrt(x), x.sqrt()))
            .fold(0.0f64, f64::max);
        assert!(worst < 0.002, "worst refined error {worst}");
    }

    #[test]
    fn refinement_improves_every_estimate() {
        for x in period_inputs().step_by(97) {
            let exact = 1.0 / x.sqrt();
            let coarse = rel_error(q_rsqrt_estimate(x), exact);
            let fine = rel_error(q_rsqrt(x), exact);
            // Near the zero crossings of the estimate error, rounding dominates.
            if coarse > 1e-3 {
                assert!(fine < coarse, "x = {x}: {fine} >= {coarse}");
            }
        }
    }

    #[test]
    fn error_is_scale_invariant_across_even_exponents() {
        // Multiplying x by 4 shifts the exponent by 2 and the result by exactly 1/2.
        for &x in &[1.3f32, 2.7, 3.9] {
            let a = q_rsqrt(x);
            let b = q_rsqrt(x * 4.0);
            assert_eq!((a * 0.5).to_bits(), b.to_bits(), "x = {x}");
        }
    }

    #[test]
    fn out_of_range_inputs_do_not_panic() {
        for &x in &[0.0f32, -0.0, -1.0, f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let _ = q_rsqrt(x);
            let _ = fast_sqrt(x);
        }
    }

    use proptest::prelude::*;
    proptest! {
        #[test]
        fn ptest_fast_sqrt_within_one_percent(
            x in proptest::num::f32::POSITIVE | proptest::num::f32::NORMAL
        ) {
            if x.is_normal() && x > 0.0 {
                let expected = x.sqrt();
                let actual = fast_sqrt(x);
                prop_assert!(
                    rel_error(actual, expected) < 0.01,
                    "fast_sqrt({x}) = {actual}, sqrt = {expected}"
                );
            }
        }

        #[test]
        fn ptest_deterministic(x in 1e-30f32..1e30f32) {
            prop_assert_eq!(q_rsqrt(x).to_bits(), q_rsqrt(x).to_bits());
            prop_assert_eq!(fast_sqrt(x).to_bits(), fast_sqrt(x).to_bits());
        }

        #[test]
        fn ptest_harness_range(x in 0.0001f32..10_000.0f32) {
            let actual = fast_sqrt(x);
            let expected = x.sqrt();
            prop_assert!(rel_error(actual, expected) < 0.002);
        }
    }
}
