//! Random-variate generators for named distributions.
//!
//! Each generator draws from a caller-supplied `Rng`, so a fixed seed from
//! [`create_rng`](crate::random::create_rng) reproduces an experiment exactly.
//!
//! # Methods
//!
//! | Generator | Method |
//! |---|---|
//! | [`bernoulli`] | `U < p` |
//! | [`binomial`] | count of `n` Bernoulli successes |
//! | [`geometric`], [`first_success`] | failures until the first success |
//! | [`negative_binomial`] | sum of `r` geometrics |
//! | [`hypergeometric`] | sequential draws without replacement |
//! | [`poisson`] | Expo(λ) arrivals within unit time |
//! | [`uniform`], [`exponential`] | inverse transform |
//! | [`normal`], [`box_muller_pair`] | Box-Muller |
//! | [`normal_acceptance_rejection`] | Expo(1) envelope, c = √(2e/π) |
//! | [`gamma`] | Expo sum + Ahrens–Dieter GS for the fractional shape |
//! | [`beta`] | Gamma ratio |
//!
//! # References
//!
//! - Ahrens & Dieter (1974), "Computer Methods for Sampling from Gamma,
//!   Beta, Poisson and Binomial Distributions", *Computing* 12.
//! - Box & Muller (1958), *Ann. Math. Statist.* 29(2).

use std::f64::consts::{E, PI};

use rand::Rng;

use crate::random::open_unit;

/// Error type for invalid sampler parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum SamplingError {
    /// Parameters violate distribution constraints.
    InvalidParameters(String),
}

impl std::fmt::Display for SamplingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SamplingError::InvalidParameters(msg) => {
                write!(f, "invalid sampling parameters: {msg}")
            }
        }
    }
}

impl std::error::Error for SamplingError {}

fn invalid<T>(msg: String) -> Result<T, SamplingError> {
    Err(SamplingError::InvalidParameters(msg))
}

fn check_probability(name: &str, p: f64) -> Result<(), SamplingError> {
    if !(0.0..=1.0).contains(&p) {
        return invalid(format!("{name} requires p in [0, 1], got p={p}"));
    }
    Ok(())
}

/// Success probability must be positive or the trial loop never ends.
fn check_success_probability(name: &str, p: f64) -> Result<(), SamplingError> {
    if !(p > 0.0 && p <= 1.0) {
        return invalid(format!("{name} requires p in (0, 1], got p={p}"));
    }
    Ok(())
}

fn check_rate(name: &str, rate: f64) -> Result<(), SamplingError> {
    if !rate.is_finite() || rate <= 0.0 {
        return invalid(format!("{name} requires a finite rate > 0, got {rate}"));
    }
    Ok(())
}

// ============================================================================
// Discrete
// ============================================================================

/// Bern(p): `true` with probability `p`.
///
/// # Errors
/// Returns `Err` if `p` is outside `[0, 1]`.
pub fn bernoulli<R: Rng>(p: f64, rng: &mut R) -> Result<bool, SamplingError> {
    check_probability("Bernoulli", p)?;
    Ok(rng.random::<f64>() < p)
}

/// Bin(n, p): number of successes in `n` independent trials.
///
/// # Errors
/// Returns `Err` if `p` is outside `[0, 1]`.
pub fn binomial<R: Rng>(n: u64, p: f64, rng: &mut R) -> Result<u64, SamplingError> {
    check_probability("Binomial", p)?;
    Ok((0..n).filter(|_| rng.random::<f64>() < p).count() as u64)
}

/// Geom(p): number of failures before the first success.
///
/// # Errors
/// Returns `Err` unless `0 < p <= 1`.
pub fn geometric<R: Rng>(p: f64, rng: &mut R) -> Result<u64, SamplingError> {
    check_success_probability("Geometric", p)?;
    Ok(failures_before_success(p, rng))
}

/// FS(p): number of trials up to and including the first success.
///
/// # Errors
/// Returns `Err` unless `0 < p <= 1`.
pub fn first_success<R: Rng>(p: f64, rng: &mut R) -> Result<u64, SamplingError> {
    check_success_probability("First Success", p)?;
    Ok(failures_before_success(p, rng) + 1)
}

/// NBin(r, p): number of failures before the `r`-th success.
///
/// # Errors
/// Returns `Err` if `r == 0` or `p` is not in `(0, 1]`.
pub fn negative_binomial<R: Rng>(r: u64, p: f64, rng: &mut R) -> Result<u64, SamplingError> {
    if r == 0 {
        return invalid("Negative Binomial requires r >= 1".to_string());
    }
    check_success_probability("Negative Binomial", p)?;
    Ok((0..r).map(|_| failures_before_success(p, rng)).sum())
}

fn failures_before_success<R: Rng>(p: f64, rng: &mut R) -> u64 {
    let mut failures = 0;
    while rng.random::<f64>() >= p {
        failures += 1;
    }
    failures
}

/// HGeom(w, b, n): white balls among `n` drawn without replacement from an
/// urn of `w` white and `b` black balls.
///
/// # Errors
/// Returns `Err` if `n > w + b`.
pub fn hypergeometric<R: Rng>(w: u64, b: u64, n: u64, rng: &mut R) -> Result<u64, SamplingError> {
    if w.checked_add(b).is_none_or(|total| n > total) {
        return invalid(format!(
            "Hypergeometric requires n <= w + b, got w={w}, b={b}, n={n}"
        ));
    }

    let (mut white, mut black) = (w, b);
    let mut drawn_white = 0;
    for _ in 0..n {
        let p_white = white as f64 / (white + black) as f64;
        if rng.random::<f64>() < p_white {
            drawn_white += 1;
            white -= 1;
        } else {
            black -= 1;
        }
    }
    Ok(drawn_white)
}

/// Pois(λ): arrivals of a rate-λ Poisson process within unit time.
///
/// Runs in O(λ) per draw.
///
/// # Errors
/// Returns `Err` unless `λ` is finite and positive.
pub fn poisson<R: Rng>(lambda: f64, rng: &mut R) -> Result<u64, SamplingError> {
    check_rate("Poisson", lambda)?;
    let mut arrivals = 0;
    let mut t = exponential_unchecked(lambda, rng);
    while t < 1.0 {
        arrivals += 1;
        t += exponential_unchecked(lambda, rng);
    }
    Ok(arrivals)
}

// ============================================================================
// Continuous
// ============================================================================

/// Unif(a, b).
///
/// # Errors
/// Returns `Err` unless both bounds are finite and `a <= b`.
pub fn uniform<R: Rng>(a: f64, b: f64, rng: &mut R) -> Result<f64, SamplingError> {
    if !a.is_finite() || !b.is_finite() || a > b {
        return invalid(format!("Uniform requires a <= b, got a={a}, b={b}"));
    }
    Ok(a + (b - a) * rng.random::<f64>())
}

/// Expo(λ) by inverse transform: `−ln(U)/λ`.
///
/// # Errors
/// Returns `Err` unless `λ` is finite and positive.
pub fn exponential<R: Rng>(lambda: f64, rng: &mut R) -> Result<f64, SamplingError> {
    check_rate("Exponential", lambda)?;
    Ok(exponential_unchecked(lambda, rng))
}

fn exponential_unchecked<R: Rng>(lambda: f64, rng: &mut R) -> f64 {
    -open_unit(rng).ln() / lambda
}

/// N(μ, σ²) via the sine branch of Box-Muller.
///
/// # Errors
/// Returns `Err` if `μ` is not finite or `σ` is negative or not finite.
///
/// # Examples
/// ```
/// use young_tableau::random::create_rng;
/// use young_tableau::sampling::normal;
///
/// let mut rng = create_rng(1);
/// let x = normal(10.0, 0.0, &mut rng).unwrap();
/// assert_eq!(x, 10.0);
/// assert!(normal(0.0, -1.0, &mut rng).is_err());
/// ```
pub fn normal<R: Rng>(mu: f64, sigma: f64, rng: &mut R) -> Result<f64, SamplingError> {
    if !mu.is_finite() || !sigma.is_finite() || sigma < 0.0 {
        return invalid(format!(
            "Normal requires finite mu and sigma >= 0, got mu={mu}, sigma={sigma}"
        ));
    }
    let (z, _) = box_muller_pair(rng);
    Ok(mu + sigma * z)
}

/// Two independent N(0, 1) variates from two uniforms.
pub fn box_muller_pair<R: Rng>(rng: &mut R) -> (f64, f64) {
    let radius = (-2.0 * open_unit(rng).ln()).sqrt();
    let angle = 2.0 * PI * rng.random::<f64>();
    (radius * angle.sin(), radius * angle.cos())
}

/// N(0, 1) by acceptance-rejection.
///
/// Proposes |Z| from Expo(1) and accepts with probability
/// `exp(−(y − 1)²/2)`, the ratio of the half-normal density to
/// `c·e^{−y}` with `c = √(2e/π)`. A fair coin supplies the sign.
pub fn normal_acceptance_rejection<R: Rng>(rng: &mut R) -> f64 {
    loop {
        let y = exponential_unchecked(1.0, rng);
        if rng.random::<f64>() <= (-0.5 * (y - 1.0).powi(2)).exp() {
            return if rng.random::<bool>() { y } else { -y };
        }
    }
}

/// Expected number of proposals per accepted [`normal_acceptance_rejection`] draw.
pub fn acceptance_rejection_constant() -> f64 {
    (2.0 * E / PI).sqrt()
}

/// Gamma(shape, rate), mean `shape / rate`.
///
/// The integer part of the shape is a sum of Expo(rate) draws; the
/// fractional part uses Ahrens–Dieter GS rejection.
///
/// # Errors
/// Returns `Err` unless both parameters are finite and positive.
pub fn gamma<R: Rng>(shape: f64, rate: f64, rng: &mut R) -> Result<f64, SamplingError> {
    if !shape.is_finite() || shape <= 0.0 {
        return invalid(format!("Gamma requires a finite shape > 0, got {shape}"));
    }
    check_rate("Gamma", rate)?;
    Ok(gamma_unchecked(shape, rate, rng))
}

fn gamma_unchecked<R: Rng>(shape: f64, rate: f64, rng: &mut R) -> f64 {
    let whole = shape.floor();
    let mut total: f64 = (0..whole as u64)
        .map(|_| exponential_unchecked(rate, rng))
        .sum();

    let frac = shape - whole;
    if frac > 0.0 {
        total += gamma_fractional(frac, rng) / rate;
    }
    total
}

/// Gamma(a, 1) for `0 < a < 1` (algorithm GS).
fn gamma_fractional<R: Rng>(a: f64, rng: &mut R) -> f64 {
    let b = 1.0 + a / E;
    loop {
        let u = rng.random::<f64>();
        let p = b * rng.random::<f64>();
        if p > 1.0 {
            let y = -((b - p) / a).ln();
            if u <= y.powf(a - 1.0) {
                return y;
            }
        } else {
            let y = p.powf(1.0 / a);
            if u <= (-y).exp() {
                return y;
            }
        }
    }
}

/// Beta(a, b) as `X / (X + Y)` with `X ~ Gamma(a, 1)`, `Y ~ Gamma(b, 1)`.
///
/// # Errors
/// Returns `Err` unless both parameters are finite and positive.
pub fn beta<R: Rng>(a: f64, b: f64, rng: &mut R) -> Result<f64, SamplingError> {
    if !a.is_finite() || !b.is_finite() || a <= 0.0 || b <= 0.0 {
        return invalid(format!("Beta requires a > 0 and b > 0, got a={a}, b={b}"));
    }
    loop {
        let x = gamma_unchecked(a, 1.0, rng);
        let y = gamma_unchecked(b, 1.0, rng);
        // Both draws can underflow to zero for tiny shapes.
        if x + y > 0.0 {
            return Ok(x / (x + y));
        }
    }
}

// ============================================================================
// Monte-Carlo estimation
// ============================================================================

/// Two estimates of the standard normal tail P(Z > u) from the same draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TailEstimate {
    /// Fraction of plain N(0, 1) draws above `u`.
    pub naive: f64,
    /// Importance-sampling estimate with proposal N(u, 1).
    pub importance: f64,
}

/// Estimates P(Z > u) for Z ~ N(0, 1).
///
/// The importance estimate shifts each draw by `u` and reweights it by the
/// likelihood ratio `φ(x)/φ(x − u) = exp(u²/2 − u·x)`. Far in the tail the
/// naive estimate is almost always zero.
///
/// # Errors
/// Returns `Err` if `u` is not finite or `n == 0`.
///
/// # Examples
/// ```
/// use young_tableau::random::create_rng;
/// use young_tableau::sampling::normal_tail_probability;
///
/// let est = normal_tail_probability(8.0, 100_000, &mut create_rng(42)).unwrap();
/// assert_eq!(est.naive, 0.0);
/// assert!(est.importance > 0.0);
/// ```
pub fn normal_tail_probability<R: Rng>(
    u: f64,
    n: usize,
    rng: &mut R,
) -> Result<TailEstimate, SamplingError> {
    if !u.is_finite() || n == 0 {
        return invalid(format!(
            "tail estimate requires finite u and n > 0, got u={u}, n={n}"
        ));
    }

    let mut above = 0usize;
    let mut weighted = 0.0;
    for _ in 0..n {
        let (z, _) = box_muller_pair(rng);
        if z > u {
            above += 1;
        }
        let x = z + u;
        if x > u {
            weighted += (0.5 * u * u - u * x).exp();
        }
    }

    Ok(TailEstimate {
        naive: above as f64 / n as f64,
        importance: weighted / n as f64,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::validation::{
        binomial_pmf, frequencies, geometric_pmf, hypergeometric_pmf, negative_binomial_pmf,
        poisson_pmf, total_variation_distance, Histogram, Summary,
    };
    use approx::assert_abs_diff_eq;

    const N: usize = 20_000;

    fn draw_f64(mut f: impl FnMut() -> f64) -> Summary {
        let mut s = Summary::new();
        for _ in 0..N {
            s.update(f());
        }
        s
    }

    fn draw_u64(mut f: impl FnMut() -> u64) -> Vec<u64> {
        (0..N).map(|_| f()).collect()
    }

    fn summarize(samples: &[u64]) -> Summary {
        let as_f64: Vec<f64> = samples.iter().map(|&k| k as f64).collect();
        Summary::from_samples(&as_f64)
    }

    // --- Discrete ---

    #[test]
    fn test_bernoulli_rate() {
        let mut rng = create_rng(1);
        let hits = (0..N)
            .filter(|_| bernoulli(0.3, &mut rng).unwrap())
            .count();
        assert_abs_diff_eq!(hits as f64 / N as f64, 0.3, epsilon = 0.02);
    }

    #[test]
    fn test_bernoulli_degenerate() {
        let mut rng = create_rng(1);
        assert!((0..100).all(|_| !bernoulli(0.0, &mut rng).unwrap()));
        assert!((0..100).all(|_| bernoulli(1.0, &mut rng).unwrap()));
    }

    #[test]
    fn test_binomial_matches_pmf() {
        let mut rng = create_rng(2);
        let samples = draw_u64(|| binomial(20, 0.4, &mut rng).unwrap());
        assert!(samples.iter().all(|&k| k <= 20));

        let s = summarize(&samples);
        assert_abs_diff_eq!(s.mean().unwrap(), 8.0, epsilon = 0.1);
        assert_abs_diff_eq!(s.sample_variance().unwrap(), 4.8, epsilon = 0.3);

        let reference: Vec<f64> = (0..=20).map(|k| binomial_pmf(20, 0.4, k)).collect();
        assert!(total_variation_distance(&frequencies(&samples), &reference) < 0.05);
    }

    #[test]
    fn test_geometric_matches_pmf() {
        let mut rng = create_rng(3);
        let samples = draw_u64(|| geometric(0.3, &mut rng).unwrap());

        let s = summarize(&samples);
        assert_abs_diff_eq!(s.mean().unwrap(), 0.7 / 0.3, epsilon = 0.1);

        let reference: Vec<f64> = (0..100).map(|k| geometric_pmf(0.3, k)).collect();
        assert!(total_variation_distance(&frequencies(&samples), &reference) < 0.05);
    }

    #[test]
    fn test_first_success_shifted() {
        let mut rng = create_rng(4);
        let samples = draw_u64(|| first_success(0.2, &mut rng).unwrap());
        assert!(samples.iter().all(|&k| k >= 1));
        assert_abs_diff_eq!(summarize(&samples).mean().unwrap(), 5.0, epsilon = 0.15);
    }

    #[test]
    fn test_geometric_certain_success() {
        let mut rng = create_rng(4);
        assert_eq!(geometric(1.0, &mut rng), Ok(0));
        assert_eq!(first_success(1.0, &mut rng), Ok(1));
    }

    #[test]
    fn test_negative_binomial_matches_pmf() {
        let mut rng = create_rng(5);
        let samples = draw_u64(|| negative_binomial(10, 0.2, &mut rng).unwrap());

        let s = summarize(&samples);
        assert_abs_diff_eq!(s.mean().unwrap(), 40.0, epsilon = 0.6);
        assert_abs_diff_eq!(s.sample_variance().unwrap(), 200.0, epsilon = 12.0);

        let reference: Vec<f64> = (0..400).map(|k| negative_binomial_pmf(10, 0.2, k)).collect();
        assert!(total_variation_distance(&frequencies(&samples), &reference) < 0.06);
    }

    #[test]
    fn test_hypergeometric_matches_pmf() {
        let mut rng = create_rng(6);
        let samples = draw_u64(|| hypergeometric(30, 30, 20, &mut rng).unwrap());
        assert!(samples.iter().all(|&k| k <= 20));

        let s = summarize(&samples);
        assert_abs_diff_eq!(s.mean().unwrap(), 10.0, epsilon = 0.1);

        let reference: Vec<f64> = (0..=20).map(|k| hypergeometric_pmf(30, 30, 20, k)).collect();
        assert!(total_variation_distance(&frequencies(&samples), &reference) < 0.05);
    }

    #[test]
    fn test_hypergeometric_draw_everything() {
        let mut rng = create_rng(6);
        assert_eq!(hypergeometric(4, 3, 7, &mut rng), Ok(4));
        assert_eq!(hypergeometric(0, 0, 0, &mut rng), Ok(0));
    }

    #[test]
    fn test_poisson_matches_pmf() {
        let mut rng = create_rng(7);
        let samples = draw_u64(|| poisson(10.0, &mut rng).unwrap());

        let s = summarize(&samples);
        assert_abs_diff_eq!(s.mean().unwrap(), 10.0, epsilon = 0.15);
        assert_abs_diff_eq!(s.sample_variance().unwrap(), 10.0, epsilon = 0.6);

        let reference: Vec<f64> = (0..60).map(|k| poisson_pmf(10.0, k)).collect();
        assert!(total_variation_distance(&frequencies(&samples), &reference) < 0.05);
    }

    // --- Continuous ---

    #[test]
    fn test_uniform_moments_and_histogram() {
        let mut rng = create_rng(8);
        let samples: Vec<f64> = (0..N).map(|_| uniform(0.0, 5.0, &mut rng).unwrap()).collect();
        assert!(samples.iter().all(|&x| (0.0..5.0).contains(&x)));

        let s = Summary::from_samples(&samples);
        assert_abs_diff_eq!(s.mean().unwrap(), 2.5, epsilon = 0.05);
        assert_abs_diff_eq!(s.sample_variance().unwrap(), 25.0 / 12.0, epsilon = 0.08);

        // Flat density 1/5 in every bin.
        let h = Histogram::new(&samples, 10, (0.0, 5.0)).unwrap();
        for d in h.density() {
            assert_abs_diff_eq!(d, 0.2, epsilon = 0.03);
        }
    }

    #[test]
    fn test_uniform_degenerate_interval() {
        let mut rng = create_rng(8);
        assert_eq!(uniform(3.0, 3.0, &mut rng), Ok(3.0));
    }

    #[test]
    fn test_exponential_moments() {
        let mut rng = create_rng(9);
        let s = draw_f64(|| exponential(2.0, &mut rng).unwrap());
        assert_abs_diff_eq!(s.mean().unwrap(), 0.5, epsilon = 0.02);
        assert_abs_diff_eq!(s.sample_variance().unwrap(), 0.25, epsilon = 0.03);
    }

    #[test]
    fn test_normal_moments() {
        let mut rng = create_rng(10);
        let s = draw_f64(|| normal(10.0, 5.0, &mut rng).unwrap());
        assert_abs_diff_eq!(s.mean().unwrap(), 10.0, epsilon = 0.2);
        assert_abs_diff_eq!(s.sample_variance().unwrap(), 25.0, epsilon = 1.5);
    }

    #[test]
    fn test_box_muller_pair_independent_components() {
        let mut rng = create_rng(11);
        let pairs: Vec<(f64, f64)> = (0..N).map(|_| box_muller_pair(&mut rng)).collect();
        let xs: Vec<f64> = pairs.iter().map(|p| p.0).collect();
        let ys: Vec<f64> = pairs.iter().map(|p| p.1).collect();

        for comp in [&xs, &ys] {
            let s = Summary::from_samples(comp);
            assert_abs_diff_eq!(s.mean().unwrap(), 0.0, epsilon = 0.05);
            assert_abs_diff_eq!(s.sample_variance().unwrap(), 1.0, epsilon = 0.06);
        }

        let cov = xs.iter().zip(&ys).map(|(x, y)| x * y).sum::<f64>() / N as f64;
        assert_abs_diff_eq!(cov, 0.0, epsilon = 0.05);
    }

    #[test]
    fn test_normal_acceptance_rejection_moments() {
        let mut rng = create_rng(12);
        let s = draw_f64(|| normal_acceptance_rejection(&mut rng));
        assert_abs_diff_eq!(s.mean().unwrap(), 0.0, epsilon = 0.05);
        assert_abs_diff_eq!(s.sample_variance().unwrap(), 1.0, epsilon = 0.08);
    }

    #[test]
    fn test_acceptance_rejection_constant() {
        assert_abs_diff_eq!(acceptance_rejection_constant(), 1.3155, epsilon = 1e-4);
    }

    #[test]
    fn test_gamma_moments_integer_and_fractional() {
        let mut rng = create_rng(13);
        let s = draw_f64(|| gamma(5.5, 1.0, &mut rng).unwrap());
        assert_abs_diff_eq!(s.mean().unwrap(), 5.5, epsilon = 0.1);
        assert_abs_diff_eq!(s.sample_variance().unwrap(), 5.5, epsilon = 0.4);

        let s = draw_f64(|| gamma(0.5, 2.0, &mut rng).unwrap());
        assert_abs_diff_eq!(s.mean().unwrap(), 0.25, epsilon = 0.02);
        assert_abs_diff_eq!(s.sample_variance().unwrap(), 0.125, epsilon = 0.02);

        let s = draw_f64(|| gamma(3.0, 0.5, &mut rng).unwrap());
        assert_abs_diff_eq!(s.mean().unwrap(), 6.0, epsilon = 0.15);
    }

    #[test]
    fn test_beta_moments() {
        let mut rng = create_rng(14);
        let samples: Vec<f64> = (0..N).map(|_| beta(0.5, 2.0, &mut rng).unwrap()).collect();
        assert!(samples.iter().all(|&x| (0.0..=1.0).contains(&x)));

        let s = Summary::from_samples(&samples);
        assert_abs_diff_eq!(s.mean().unwrap(), 0.2, epsilon = 0.01);
        assert_abs_diff_eq!(s.sample_variance().unwrap(), 0.5 * 2.0 / (6.25 * 3.5), epsilon = 0.005);
    }

    // --- Monte-Carlo ---

    #[test]
    fn test_normal_tail_moderate() {
        let est = normal_tail_probability(1.0, 100_000, &mut create_rng(15)).unwrap();
        // P(Z > 1) = 0.158655...
        assert_abs_diff_eq!(est.naive, 0.158655, epsilon = 0.01);
        assert_abs_diff_eq!(est.importance, 0.158655, epsilon = 0.01);
    }

    #[test]
    fn test_normal_tail_far() {
        let est = normal_tail_probability(8.0, 100_000, &mut create_rng(16)).unwrap();
        // P(Z > 8) = 6.2210e-16
        let truth = 6.220960574271785e-16;
        assert_eq!(est.naive, 0.0);
        assert!(
            ((est.importance - truth) / truth).abs() < 0.2,
            "importance estimate {} too far from {truth}",
            est.importance
        );
    }

    // --- Parameter validation ---

    #[test]
    fn test_invalid_parameters() {
        let mut rng = create_rng(0);
        assert!(bernoulli(1.5, &mut rng).is_err());
        assert!(bernoulli(f64::NAN, &mut rng).is_err());
        assert!(binomial(5, -0.1, &mut rng).is_err());
        assert!(geometric(0.0, &mut rng).is_err());
        assert!(first_success(0.0, &mut rng).is_err());
        assert!(negative_binomial(0, 0.5, &mut rng).is_err());
        assert!(negative_binomial(3, 0.0, &mut rng).is_err());
        assert!(hypergeometric(2, 2, 5, &mut rng).is_err());
        assert!(poisson(0.0, &mut rng).is_err());
        assert!(uniform(2.0, 1.0, &mut rng).is_err());
        assert!(exponential(-1.0, &mut rng).is_err());
        assert!(exponential(f64::INFINITY, &mut rng).is_err());
        assert!(normal(f64::NAN, 1.0, &mut rng).is_err());
        assert!(gamma(0.0, 1.0, &mut rng).is_err());
        assert!(gamma(1.0, 0.0, &mut rng).is_err());
        assert!(beta(0.0, 1.0, &mut rng).is_err());
        assert!(normal_tail_probability(1.0, 0, &mut rng).is_err());
    }

    #[test]
    fn test_error_message() {
        let err = geometric(0.0, &mut create_rng(0)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid sampling parameters: Geometric requires p in (0, 1], got p=0"
        );
    }
}
