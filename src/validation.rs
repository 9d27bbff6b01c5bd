//! Numeric checks for sampled distributions.
//!
//! Compares Monte-Carlo output against closed-form answers: running moments,
//! equal-width histograms, empirical frequencies, analytical PMFs, and the
//! total-variation distance between two PMFs.
//!
//! # Algorithms
//!
//! - **Summary**: Welford's online mean/variance update.
//!   Reference: Welford (1962), *Technometrics* 4(3), pp. 419–420.
//! - **PMFs**: evaluated in log space via the Lanczos approximation of
//!   ln Γ to avoid overflowing factorials.

use std::fmt;

/// Error type for invalid validation inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Parameters violate the constraints of the requested operation.
    InvalidParameters(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidParameters(msg) => {
                write!(f, "invalid validation parameters: {msg}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// Running moments
// ============================================================================

/// Streaming mean and variance accumulator.
///
/// # Examples
/// ```
/// use young_tableau::validation::Summary;
/// let s = Summary::from_samples(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
/// assert!((s.mean().unwrap() - 5.0).abs() < 1e-12);
/// assert!((s.population_variance().unwrap() - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Summary {
    count: u64,
    mean: f64,
    m2: f64,
}

impl Summary {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a summary from a batch of samples.
    pub fn from_samples(samples: &[f64]) -> Self {
        let mut summary = Self::new();
        for &x in samples {
            summary.update(x);
        }
        summary
    }

    /// Feeds one sample.
    pub fn update(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Running mean, `None` before the first sample.
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then_some(self.mean)
    }

    /// Sample variance (n − 1 denominator), `None` below two samples.
    pub fn sample_variance(&self) -> Option<f64> {
        (self.count > 1).then(|| self.m2 / (self.count - 1) as f64)
    }

    /// Population variance (n denominator), `None` before the first sample.
    pub fn population_variance(&self) -> Option<f64> {
        (self.count > 0).then(|| self.m2 / self.count as f64)
    }

    pub fn std_dev(&self) -> Option<f64> {
        self.sample_variance().map(f64::sqrt)
    }
}

// ============================================================================
// Histogram
// ============================================================================

/// Equal-width histogram over a closed range `[lo, hi]`.
///
/// Samples outside the range (and NaN) are tallied separately in
/// [`Histogram::outliers`]. A sample equal to `hi` lands in the last bin.
///
/// # Examples
/// ```
/// use young_tableau::validation::Histogram;
/// let h = Histogram::new(&[0.1, 0.2, 0.6, 1.0, 3.0], 2, (0.0, 1.0)).unwrap();
/// assert_eq!(h.counts(), &[2, 2]);
/// assert_eq!(h.outliers(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Histogram {
    lo: f64,
    hi: f64,
    counts: Vec<usize>,
    outliers: usize,
}

impl Histogram {
    /// Bins `samples` into `bins` equal-width bins over `range`.
    ///
    /// # Errors
    /// Returns `Err` if `bins == 0`, or the range is empty or not finite.
    pub fn new(samples: &[f64], bins: usize, range: (f64, f64)) -> Result<Self, ValidationError> {
        let (lo, hi) = range;
        if bins == 0 {
            return Err(ValidationError::InvalidParameters(
                "histogram needs at least one bin".to_string(),
            ));
        }
        if !lo.is_finite() || !hi.is_finite() || lo >= hi {
            return Err(ValidationError::InvalidParameters(format!(
                "histogram range must satisfy lo < hi, got [{lo}, {hi}]"
            )));
        }

        let mut counts = vec![0; bins];
        let mut outliers = 0;
        let width = (hi - lo) / bins as f64;
        for &x in samples {
            if !(lo..=hi).contains(&x) {
                outliers += 1;
                continue;
            }
            let bin = (((x - lo) / width) as usize).min(bins - 1);
            counts[bin] += 1;
        }

        Ok(Self {
            lo,
            hi,
            counts,
            outliers,
        })
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Samples that fell outside the range.
    pub fn outliers(&self) -> usize {
        self.outliers
    }

    pub fn bin_width(&self) -> f64 {
        (self.hi - self.lo) / self.counts.len() as f64
    }

    /// Bin boundaries, `bins + 1` values from `lo` to `hi`.
    pub fn edges(&self) -> Vec<f64> {
        let width = self.bin_width();
        (0..=self.counts.len())
            .map(|i| self.lo + i as f64 * width)
            .collect()
    }

    /// Counts normalised so the histogram integrates to 1 over the range.
    ///
    /// All zeros when no sample fell inside the range.
    pub fn density(&self) -> Vec<f64> {
        let inside: usize = self.counts.iter().sum();
        if inside == 0 {
            return vec![0.0; self.counts.len()];
        }
        let scale = inside as f64 * self.bin_width();
        self.counts.iter().map(|&c| c as f64 / scale).collect()
    }
}

// ============================================================================
// Discrete frequencies and analytical PMFs
// ============================================================================

/// Empirical PMF of non-negative integer samples over `0..=max`.
///
/// Returns an empty vector for empty input.
///
/// # Examples
/// ```
/// use young_tableau::validation::frequencies;
/// assert_eq!(frequencies(&[0, 2, 2, 1]), vec![0.25, 0.25, 0.5]);
/// ```
pub fn frequencies(samples: &[u64]) -> Vec<f64> {
    let Some(&max) = samples.iter().max() else {
        return Vec::new();
    };
    let mut counts = vec![0usize; max as usize + 1];
    for &k in samples {
        counts[k as usize] += 1;
    }
    let n = samples.len() as f64;
    counts.into_iter().map(|c| c as f64 / n).collect()
}

/// Total-variation distance ½ Σ |pᵢ − qᵢ|.
///
/// The shorter slice is treated as zero beyond its end.
pub fn total_variation_distance(p: &[f64], q: &[f64]) -> f64 {
    let n = p.len().max(q.len());
    let at = |v: &[f64], i: usize| v.get(i).copied().unwrap_or(0.0);
    0.5 * (0..n).map(|i| (at(p, i) - at(q, i)).abs()).sum::<f64>()
}

/// Lanczos approximation of ln Γ(x) for x > 0.
///
/// Reference: Lanczos (1964), *SIAM Journal on Numerical Analysis* 1(1).
pub fn ln_gamma(x: f64) -> f64 {
    #[allow(clippy::excessive_precision)]
    const COEFFICIENTS: [f64; 9] = [
        0.99999999999980993,
        676.5203681218851,
        -1259.1392167224028,
        771.32342877765313,
        -176.61502916214059,
        12.507343278686905,
        -0.13857109526572012,
        9.9843695780195716e-6,
        1.5056327351493116e-7,
    ];
    const G: f64 = 7.0;

    if x < 0.5 {
        let pi = std::f64::consts::PI;
        return (pi / (pi * x).sin()).ln() - ln_gamma(1.0 - x);
    }

    let x = x - 1.0;
    let sum = COEFFICIENTS[1..]
        .iter()
        .enumerate()
        .fold(COEFFICIENTS[0], |acc, (i, &c)| acc + c / (x + i as f64 + 1.0));
    let t = x + G + 0.5;
    0.5 * (2.0 * std::f64::consts::PI).ln() + (x + 0.5) * t.ln() - t + sum.ln()
}

/// ln C(n, k) for `0 <= k <= n`.
pub fn ln_choose(n: u64, k: u64) -> f64 {
    debug_assert!(k <= n);
    ln_gamma(n as f64 + 1.0) - ln_gamma(k as f64 + 1.0) - ln_gamma((n - k) as f64 + 1.0)
}

/// P(X = k) for X ~ Bin(n, p).
pub fn binomial_pmf(n: u64, p: f64, k: u64) -> f64 {
    if k > n {
        return 0.0;
    }
    if p <= 0.0 {
        return if k == 0 { 1.0 } else { 0.0 };
    }
    if p >= 1.0 {
        return if k == n { 1.0 } else { 0.0 };
    }
    (ln_choose(n, k) + k as f64 * p.ln() + (n - k) as f64 * (1.0 - p).ln()).exp()
}

/// P(X = k) for X ~ Geom(p), counting failures before the first success.
pub fn geometric_pmf(p: f64, k: u64) -> f64 {
    (1.0 - p).powf(k as f64) * p
}

/// P(X = k) for X ~ NBin(r, p), counting failures before the r-th success.
pub fn negative_binomial_pmf(r: u64, p: f64, k: u64) -> f64 {
    if p >= 1.0 {
        return if k == 0 { 1.0 } else { 0.0 };
    }
    (ln_choose(k + r - 1, r - 1) + k as f64 * (1.0 - p).ln() + r as f64 * p.ln()).exp()
}

/// P(X = k) for X ~ HGeom(w, b, n): white balls among `n` drawn without
/// replacement from `w` white and `b` black.
pub fn hypergeometric_pmf(w: u64, b: u64, n: u64, k: u64) -> f64 {
    if k > w || k > n || n - k > b {
        return 0.0;
    }
    (ln_choose(w, k) + ln_choose(b, n - k) - ln_choose(w + b, n)).exp()
}

/// P(X = k) for X ~ Pois(λ).
pub fn poisson_pmf(lambda: f64, k: u64) -> f64 {
    (k as f64 * lambda.ln() - lambda - ln_gamma(k as f64 + 1.0)).exp()
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn summary_matches_two_pass(
            data in proptest::collection::vec(-1e6_f64..1e6, 2..100),
        ) {
            let n = data.len() as f64;
            let mean = data.iter().sum::<f64>() / n;
            let var = data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);

            let s = Summary::from_samples(&data);
            prop_assert!((s.mean().unwrap() - mean).abs() <= 1e-6 * (1.0 + mean.abs()));
            prop_assert!((s.sample_variance().unwrap() - var).abs() <= 1e-6 * (1.0 + var));
        }

        #[test]
        fn histogram_accounts_for_every_sample(
            data in proptest::collection::vec(-10.0_f64..10.0, 0..200),
            bins in 1_usize..40,
        ) {
            let h = Histogram::new(&data, bins, (-5.0, 5.0)).unwrap();
            let inside: usize = h.counts().iter().sum();
            prop_assert_eq!(inside + h.outliers(), data.len());
        }

        #[test]
        fn frequencies_sum_to_one(
            data in proptest::collection::vec(0_u64..30, 1..200),
        ) {
            let total: f64 = frequencies(&data).iter().sum();
            prop_assert!((total - 1.0).abs() < 1e-9);
        }
    }
}
