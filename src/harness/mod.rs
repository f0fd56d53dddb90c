//! Benchmark driver: one input set, three sequential passes (reference,
//! in-crate approximation, foreign approximation), then aggregation.
//!
//! Every call is timed on its own with wall-clock snapshots. There is no
//! warm-up and no outlier rejection; the numbers include timer overhead.

mod error;
mod input;
mod provider;
mod report;
mod run;
mod sample;
mod stats;

pub use error::{HarnessError, LoadError};
pub use input::{generate_inputs, INPUT_RANGE};
pub use provider::{
    native_sqrt, quake_sqrt, ExternalRsqrt, NativeLibrary, Provider, LIBRARY_ENV, LIBRARY_NAME,
    SYMBOL,
};
pub use report::{Report, ReportLine};
pub use run::{Harness, HarnessConfig, DEFAULT_SAMPLES};
pub use sample::{error_percent, Measurement, Sample};
pub use stats::{Metric, Stat, Summary};
