use std::hint::black_box;
use std::time::Instant;

use log::info;

use super::error::HarnessError;
use super::input::generate_inputs;
use super::provider::{native_sqrt, quake_sqrt, ExternalRsqrt, Provider};
use super::report::Report;
use super::sample::{Measurement, Sample};

pub const DEFAULT_SAMPLES: usize = 10_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarnessConfig {
    pub samples: usize,
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            seed: None,
        }
    }
}

#[inline(always)]
fn timed<F>(f: &F, x: f32) -> Measurement
where
    F: Fn(f32) -> f32,
{
    let start = Instant::now();
    let result = black_box(f(black_box(x)));
    let elapsed = start.elapsed();
    Measurement {
        result,
        elapsed_ms: elapsed.as_secs_f64() * 1e3,
    }
}

pub struct Harness<E> {
    config: HarnessConfig,
    external: E,
}

impl<E: ExternalRsqrt> Harness<E> {
    pub fn new(config: HarnessConfig, external: E) -> Self {
        Self { config, external }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    pub fn measure(&self) -> Result<Vec<Sample>, HarnessError> {
        if self.config.samples == 0 {
            return Err(HarnessError::EmptyRun);
        }

        info!("Generating {} inputs", self.config.samples);
        let inputs = generate_inputs(self.config.samples, self.config.seed);
        info!("Generated inputs");

        let mut samples = reference_pass(&inputs);
        drop(inputs);

        approximation_pass(Provider::Quake, &mut samples, quake_sqrt);
        let external = |x: f32| x * self.external.q_rsqrt(x);
        approximation_pass(Provider::External, &mut samples, external);

        Ok(samples)
    }

    /// Measures and aggregates; samples are dropped once the report exists.
    pub fn run(&self) -> Result<Report, HarnessError> {
        let samples = self.measure()?;
        Ok(Report::from_samples(&samples))
    }
}

fn reference_pass(inputs: &[f32]) -> Vec<Sample> {
    info!("Running {} pass", Provider::Native);
    let start = Instant::now();
    let samples = inputs
        .iter()
        .map(|&x| Sample::new(x, timed(&native_sqrt, x)))
        .collect();
    info!(
        "Finished {} pass in {} ms",
        Provider::Native,
        start.elapsed().as_secs_f64() * 1e3
    );
    samples
}

fn approximation_pass<F>(provider: Provider, samples: &mut [Sample], f: F)
where
    F: Fn(f32) -> f32,
{
    info!("Running {provider} pass");
    let start = Instant::now();
    for sample in samples.iter_mut() {
        let m = timed(&f, sample.input());
        sample.record(provider, m);
    }
    info!(
        "Finished {provider} pass in {} ms",
        start.elapsed().as_secs_f64() * 1e3
    );
}
