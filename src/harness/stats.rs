use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    Average,
    Min,
    Max,
}

impl Stat {
    pub const ALL: [Stat; 3] = [Stat::Average, Stat::Min, Stat::Max];

    pub fn name(self) -> &'static str {
        match self {
            Stat::Average => "Average",
            Stat::Min => "Min",
            Stat::Max => "Max",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Per-call wall time in milliseconds.
    Time,
    Error,
}

impl Metric {
    pub fn label(self) -> &'static str {
        match self {
            Metric::Time => "time taken",
            Metric::Error => "error from native",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Metric::Time => "ms",
            Metric::Error => "%",
        }
    }
}

/// Average, minimum and maximum over the finite values of a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub average: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
    /// NaN and infinite values left out of the aggregate.
    pub non_finite: usize,
}

impl Summary {
    /// Returns `None` when no finite value is present.
    pub fn of<I>(values: I) -> Option<Summary>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut sum = 0.0f64;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut count = 0usize;
        let mut non_finite = 0usize;
        for v in values {
            if !v.is_finite() {
                non_finite += 1;
                continue;
            }
            sum += v;
            min = min.min(v);
            max = max.max(v);
            count += 1;
        }
        if count == 0 {
            return None;
        }
        // Summation rounding can push the mean a hair outside [min, max].
        let average = (sum / count as f64).clamp(min, max);
        Some(Summary {
            average,
            min,
            max,
            count,
            non_finite,
        })
    }

    pub fn get(&self, stat: Stat) -> f64 {
        match stat {
            Stat::Average => self.average,
            Stat::Min => self.min,
            Stat::Max => self.max,
        }
    }
}
