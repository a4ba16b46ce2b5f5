//! Single-pass descriptive statistics.

/// Running mean/variance accumulator (Welford's algorithm).
#[derive(Debug, Clone)]
struct RunningStats {
    count: usize,
    mean: f64,
    m2: f64, // sum of squared differences from the mean
    min: f64,
    max: f64,
}

impl RunningStats {
    fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    fn add(&mut self, value: f64) {
        self.count += 1;

        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;

        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Sample variance (denominator n - 1).
    fn sample_variance(&self) -> Option<f64> {
        (self.count >= 2).then(|| self.m2 / (self.count - 1) as f64)
    }
}

/// Descriptive statistics of a quantitative sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Descriptive {
    pub count: usize,
    pub mean: f64,
    /// Sample variance; None with fewer than two values.
    pub variance: Option<f64>,
    /// Sample standard deviation; None with fewer than two values.
    pub std_dev: Option<f64>,
    pub min: f64,
    pub max: f64,
}

/// Describe a sample. Returns None when it is empty.
pub fn describe(values: impl IntoIterator<Item = f64>) -> Option<Descriptive> {
    let mut stats = RunningStats::new();
    for value in values {
        stats.add(value);
    }

    if stats.count == 0 {
        return None;
    }

    let variance = stats.sample_variance();
    Some(Descriptive {
        count: stats.count,
        mean: stats.mean,
        variance,
        std_dev: variance.map(f64::sqrt),
        min: stats.min,
        max: stats.max,
    })
}

/// Arithmetic mean of a non-empty slice.
pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// True when every value equals the first (an empty slice is constant).
pub(crate) fn is_constant(values: &[f64]) -> bool {
    values.iter().all(|&v| v == values[0])
}
