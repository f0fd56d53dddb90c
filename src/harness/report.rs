use std::fmt;
use std::io::{self, Write};

use log::warn;

use super::provider::Provider;
use super::sample::Sample;
use super::stats::{Metric, Stat, Summary};

/// One console line: `[<Provider>] [<Stat>] <label> <value><unit>`, followed
/// by ` (<n> non-finite)` when NaN or infinite values were left out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportLine {
    pub provider: Provider,
    pub stat: Stat,
    pub metric: Metric,
    /// `None` when the field had no finite values.
    pub value: Option<f64>,
    pub non_finite: usize,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] [{}] {} ", self.provider, self.stat, self.metric.label())?;
        match self.value {
            Some(v) => write!(f, "{v}{}", self.metric.unit())?,
            None => f.write_str("n/a")?,
        }
        if self.non_finite > 0 {
            write!(f, " ({} non-finite)", self.non_finite)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    samples: usize,
    entries: Vec<(Provider, Metric, Option<Summary>)>,
}

impl Report {
    pub fn from_samples(samples: &[Sample]) -> Report {
        let mut entries = Vec::with_capacity(5);
        for provider in Provider::ALL {
            let time = Summary::of(samples.iter().map(|s| s.measurement(provider).elapsed_ms));
            entries.push((provider, Metric::Time, time));
        }
        for provider in Provider::APPROXIMATIONS {
            let error = Summary::of(
                samples
                    .iter()
                    .filter_map(|s| s.error_percent(provider))
                    .map(f64::from),
            );
            entries.push((provider, Metric::Error, error));
        }
        Report {
            samples: samples.len(),
            entries,
        }
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    pub fn summary(&self, provider: Provider, metric: Metric) -> Option<&Summary> {
        self.entries
            .iter()
            .find(|(p, m, _)| *p == provider && *m == metric)
            .and_then(|(_, _, s)| s.as_ref())
    }

    /// Report lines in print order: timing averages, maxima and minima for
    /// every provider, then average, min and max error per approximation.
    pub fn lines(&self) -> Vec<ReportLine> {
        let mut lines = Vec::with_capacity(15);
        for stat in [Stat::Average, Stat::Max, Stat::Min] {
            for provider in Provider::ALL {
                lines.push(self.line(provider, stat, Metric::Time));
            }
        }
        for provider in Provider::APPROXIMATIONS {
            for stat in Stat::ALL {
                lines.push(self.line(provider, stat, Metric::Error));
            }
        }
        lines
    }

    fn line(&self, provider: Provider, stat: Stat, metric: Metric) -> ReportLine {
        let summary = self.summary(provider, metric);
        ReportLine {
            provider,
            stat,
            metric,
            value: summary.map(|s| s.get(stat)),
            // no summary: every value of the field was non-finite
            non_finite: summary.map_or(self.samples, |s| s.non_finite),
        }
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in self.lines() {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    pub fn warn_non_finite(&self) {
        for (provider, metric, summary) in &self.entries {
            match summary {
                Some(s) if s.non_finite > 0 => warn!(
                    "[{provider}] {} excluded {} non-finite of {} samples",
                    metric.label(),
                    s.non_finite,
                    self.samples
                ),
                None if self.samples > 0 => warn!(
                    "[{provider}] {} has no finite values over {} samples",
                    metric.label(),
                    self.samples
                ),
                _ => {}
            }
        }
    }
}
