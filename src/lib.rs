//! Quake III fast inverse square root, and a harness that measures it
//! against `f32::sqrt` and against a separately built shared library
//! exporting `Q_rsqrt`.

pub mod harness;
pub mod maths;

pub use maths::quake;
pub use maths::quake::{fast_sqrt, q_rsqrt};
