use super::provider::Provider;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub result: f32,
    pub elapsed_ms: f64,
}

impl Measurement {
    const PENDING: Measurement = Measurement {
        result: f32::NAN,
        elapsed_ms: f64::NAN,
    };
}

/// `|approx - reference| / reference * 100`, in single precision.
///
/// A zero reference yields NaN or infinity.
#[inline]
pub fn error_percent(approx: f32, reference: f32) -> f32 {
    ((approx - reference) / reference * 100.0).abs()
}

/// One trial: a single input measured by every [`Provider`].
///
/// A sample only comes into existence with its reference measurement, so
/// every error percentage is computed against a recorded reference. The
/// approximation slots are filled by the harness passes; outside this crate
/// samples are read-only.
///
/// Storage is flat to keep ten million samples at 48 bytes each.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    input: f32,
    native_result: f32,
    native_ms: f64,
    quake_result: f32,
    quake_error: f32,
    quake_ms: f64,
    external_result: f32,
    external_error: f32,
    external_ms: f64,
}

impl Sample {
    pub fn new(input: f32, native: Measurement) -> Self {
        let pending = Measurement::PENDING;
        Self {
            input,
            native_result: native.result,
            native_ms: native.elapsed_ms,
            quake_result: pending.result,
            quake_error: f32::NAN,
            quake_ms: pending.elapsed_ms,
            external_result: pending.result,
            external_error: f32::NAN,
            external_ms: pending.elapsed_ms,
        }
    }

    pub fn complete(
        input: f32,
        native: Measurement,
        quake: Measurement,
        external: Measurement,
    ) -> Self {
        let mut sample = Self::new(input, native);
        sample.record(Provider::Quake, quake);
        sample.record(Provider::External, external);
        sample
    }

    /// Stores an approximation's measurement and its error against the reference.
    ///
    /// The reference is fixed at construction; recording [`Provider::Native`]
    /// is ignored.
    pub(crate) fn record(&mut self, provider: Provider, m: Measurement) {
        let error = error_percent(m.result, self.native_result);
        match provider {
            Provider::Native => {}
            Provider::Quake => {
                self.quake_result = m.result;
                self.quake_ms = m.elapsed_ms;
                self.quake_error = error;
            }
            Provider::External => {
                self.external_result = m.result;
                self.external_ms = m.elapsed_ms;
                self.external_error = error;
            }
        }
    }

    pub fn input(&self) -> f32 {
        self.input
    }

    pub fn measurement(&self, provider: Provider) -> Measurement {
        let (result, elapsed_ms) = match provider {
            Provider::Native => (self.native_result, self.native_ms),
            Provider::Quake => (self.quake_result, self.quake_ms),
            Provider::External => (self.external_result, self.external_ms),
        };
        Measurement { result, elapsed_ms }
    }

    pub fn error_percent(&self, provider: Provider) -> Option<f32> {
        match provider {
            Provider::Native => None,
            Provider::Quake => Some(self.quake_error),
            Provider::External => Some(self.external_error),
        }
    }
}
