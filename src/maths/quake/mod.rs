//! Fast reciprocal square root from the Quake III Arena source.
//!
//! The estimate is produced entirely in the integer domain: the IEEE-754
//! bit pattern of the input is treated as a fixed-point approximation of
//! `log2(x)`, halved and negated by a shift and a subtraction from a magic
//! constant, then read back as a float. A single Newton-Raphson step brings
//! the relative error under 0.2%.
//!
//! Only positive finite inputs are meaningful. Nothing is validated: zero,
//! negative, NaN and infinite inputs return whatever the bit arithmetic
//! produces.

mod rsqrt;

pub use rsqrt::{fast_sqrt, newton_step, q_rsqrt, q_rsqrt_estimate};

pub const MAGIC: u32 = 0x5f37_59df;

/// `1.5` term of the Newton-Raphson update for `f(y) = 1/y^2 - x`.
pub const THREE_HALFS: f32 = 1.5;

// ========= bit helpers =========

#[inline(always)]
fn f32_from_bits(u: u32) -> f32 {
    f32::from_bits(u)
}
#[inline(always)]
fn f32_to_bits(x: f32) -> u32 {
    x.to_bits()
}
