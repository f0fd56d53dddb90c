//! Shared library exporting the Quake III `Q_rsqrt` routine over the C ABI.
//!
//! Built as a `cdylib` and resolved at runtime by the `quake-sqrt` harness.
//! This is a standalone build of the bit trick; it shares no code with the
//! harness crate so the two can be cross-checked.

const MAGIC: i32 = 0x5f37_59df;
const THREEHALFS: f32 = 1.5;

/// Approximates `1/sqrt(number)` with one Newton-Raphson iteration.
///
/// Defined only for positive finite `number`; other inputs return
/// unspecified values without trapping.
#[allow(non_snake_case)]
#[no_mangle]
pub extern "C" fn Q_rsqrt(number: f32) -> f32 {
    let x2 = number * 0.5;
    let mut i = number.to_bits() as i32;
    i = MAGIC.wrapping_sub(i >> 1);
    let mut y = f32::from_bits(i as u32);
    y = y * (THREEHALFS - (x2 * y * y)); // 1st iteration
    y
}

#[cfg(test)]
mod tests {
    use super::Q_rsqrt;

    #[test]
    fn reciprocal_of_four() {
        let y = Q_rsqrt(4.0);
        assert!((y - 0.5).abs() < 0.001, "Q_rsqrt(4) = {y}");
    }

    #[test]
    fn times_input_approximates_sqrt() {
        for &x in &[0.01f32, 1.0, 2.0, 99.5, 10_000.0] {
            let s = x * Q_rsqrt(x);
            let expected = x.sqrt();
            assert!(((s - expected) / expected).abs() < 0.002, "x = {x}: {s}");
        }
    }

    #[test]
    fn known_bit_pattern_at_one() {
        // estimate 0x3f7759df refined once
        let y0 = f32::from_bits(0x3f77_59df);
        let expected = y0 * (1.5 - (0.5 * y0 * y0));
        assert_eq!(Q_rsqrt(1.0).to_bits(), expected.to_bits());
    }
}
