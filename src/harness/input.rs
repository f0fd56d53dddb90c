use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const INPUT_RANGE: f64 = 10_000.0;

/// Draws `count` values uniformly from `[0, INPUT_RANGE)` and narrows them to `f32`.
///
/// The draw is made in `f64`, so values just below the bound can round up to
/// exactly `INPUT_RANGE` after narrowing.
pub fn generate_inputs(count: usize, seed: Option<u64>) -> Vec<f32> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        values.push((rng.random::<f64>() * INPUT_RANGE) as f32);
    }
    values
}
