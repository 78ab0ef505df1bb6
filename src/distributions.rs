//! Probability distributions.
//!
//! Concrete families implementing [`Distribution`]: closed-form density,
//! cumulative and quantile kernels, analytical moments, and seeded sampling.
//!
//! # Supported Distributions
//!
//! | Distribution | Parameters | Mean | Variance | Entropy |
//! |---|---|---|---|---|
//! | [`Normal`] | loc μ, scale σ | μ | σ² | ½ + ½ln(2π) + ln σ |
//! | [`Uniform`] | low a, high b | (a+b)/2 | (b−a)²/12 | ln(b−a) |
//!
//! # Sampling
//!
//! Each instance owns its generator. Seed it with `with_seed` for a
//! reproducible stream; [`Distribution::reset`] rewinds to the seed.

use std::cell::RefCell;
use std::f64::consts::SQRT_2;

use ndarray::{arr1, ArrayD, IxDyn};
use rand::rngs::SmallRng;
use rand::Rng;
use rand_distr::StandardNormal;
use tracing::{debug, trace};

use crate::array::Values;
use crate::distribution::Distribution;
use crate::error::{DistributionError, Result};
use crate::interval::Interval;
use crate::random;
use crate::special;

// ============================================================================
// Normal Distribution
// ============================================================================

/// Normal (Gaussian) distribution N(μ, σ²).
///
/// # Mathematical Definition
/// - PDF: φ(x) = (1/(σ√(2π))) exp(−(x−μ)²/(2σ²))
/// - CDF: ½(1 + erf((x−μ)/(σ√2)))
/// - Quantile: μ + σ√2·erfinv(2p − 1)
/// - Mean = median = mode: μ
/// - Variance: σ²
///
/// # Examples
/// ```
/// use u_probability::{Distribution, Normal};
/// let n = Normal::new(10.0, 2.0).unwrap().with_seed(42);
/// assert_eq!(n.cumulative(10.0), 0.5);
/// assert_eq!(n.sample(&[3, 2]).shape(), &[3, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct Normal {
    loc: f64,
    scale: f64,
    seed: Option<u64>,
    rng: RefCell<SmallRng>,
}

impl Normal {
    /// Creates a new normal distribution with mean `loc` and standard
    /// deviation `scale`, seeded from OS entropy.
    ///
    /// # Errors
    /// Returns `Err` if `scale ≤ 0` or parameters are not finite.
    pub fn new(loc: f64, scale: f64) -> Result<Self> {
        if !loc.is_finite() || !scale.is_finite() || scale <= 0.0 {
            return Err(DistributionError::InvalidParameters(format!(
                "Normal requires finite loc and scale > 0, got loc={loc}, scale={scale}"
            )));
        }
        debug!(loc, scale, "constructed Normal distribution");
        Ok(Self {
            loc,
            scale,
            seed: None,
            rng: RefCell::new(random::generator(None)),
        })
    }

    /// Standard normal N(0, 1).
    pub fn standard() -> Self {
        Self {
            loc: 0.0,
            scale: 1.0,
            seed: None,
            rng: RefCell::new(random::generator(None)),
        }
    }

    /// Fixes the seed and restarts the generator from it.
    pub fn with_seed(mut self, seed: u64) -> Self {
        debug!(distribution = self.name(), seed, "seeding generator");
        self.seed = Some(seed);
        *self.rng.get_mut() = random::create_rng(seed);
        self
    }

    pub fn loc(&self) -> f64 {
        self.loc
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    fn standardize(&self, x: f64) -> f64 {
        (x - self.loc) / self.scale
    }
}

impl Default for Normal {
    fn default() -> Self {
        Self::standard()
    }
}

impl Distribution for Normal {
    fn name(&self) -> &'static str {
        "Normal"
    }

    fn parameters(&self) -> Vec<(&'static str, f64)> {
        vec![("loc", self.loc), ("scale", self.scale)]
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn sample(&self, shape: &[usize]) -> ArrayD<f64> {
        trace!(distribution = "Normal", ?shape, "sampling");
        let mut rng = self.rng.borrow_mut();
        ArrayD::from_shape_simple_fn(IxDyn(shape), || {
            let z: f64 = rng.sample(StandardNormal);
            self.loc + self.scale * z
        })
    }

    fn reset(&mut self, seed: Option<u64>) {
        let seed = seed.or(self.seed);
        debug!(distribution = "Normal", ?seed, "resetting generator");
        *self.rng.get_mut() = random::generator(seed);
    }

    /// PDF: (1/(σ√(2π))) exp(−z²/2), z = (x−μ)/σ.
    fn density(&self, x: f64) -> f64 {
        let z = self.standardize(x);
        special::FRAC_1_SQRT_2PI * (-0.5 * z * z).exp() / self.scale
    }

    /// −z²/2 − ln σ − ln√(2π).
    fn log_density(&self, x: f64) -> f64 {
        let z = self.standardize(x);
        -0.5 * z * z - self.scale.ln() - special::LN_SQRT_2PI
    }

    fn cdf(&self, x: f64) -> f64 {
        0.5 * (1.0 + special::erf((x - self.loc) / (self.scale * SQRT_2)))
    }

    /// `±∞` at `p = 0, 1`; `NaN` outside `[0, 1]`.
    fn quantile(&self, p: f64) -> f64 {
        self.loc + self.scale * SQRT_2 * special::erfinv(2.0 * p - 1.0)
    }

    fn mean(&self) -> f64 {
        self.loc
    }

    fn median(&self) -> f64 {
        self.loc
    }

    fn mode(&self) -> Values {
        Values::Scalar(self.loc)
    }

    fn variance(&self) -> f64 {
        self.scale * self.scale
    }

    fn skewness(&self) -> f64 {
        0.0
    }

    fn kurtosis(&self) -> f64 {
        0.0
    }

    fn entropy(&self) -> f64 {
        0.5 + special::LN_SQRT_2PI + self.scale.ln()
    }
}

// ============================================================================
// Uniform Distribution
// ============================================================================

/// Continuous uniform distribution on `[low, high]`.
///
/// Both bounds are inclusive for density, cumulative and sampling.
///
/// # Mathematical Definition
/// - PDF: f(x) = 1/(high−low) for x ∈ [low, high]
/// - CDF: F(x) = (x−low)/(high−low), clamped to [0, 1]
/// - Mean = median: (low+high)/2
/// - Mode: every point of the support; reported as the pair (low, high)
/// - Variance: (high−low)²/12
/// - Excess kurtosis: −6/5
#[derive(Debug, Clone)]
pub struct Uniform {
    support: Interval,
    seed: Option<u64>,
    rng: RefCell<SmallRng>,
}

impl Uniform {
    /// Creates a new uniform distribution on `[low, high]`.
    ///
    /// # Errors
    /// Returns `Err` if `low >= high`, either parameter is not finite, or
    /// the width `high - low` overflows.
    pub fn new(low: f64, high: f64) -> Result<Self> {
        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(DistributionError::InvalidParameters(format!(
                "Uniform requires low < high, got low={low}, high={high}"
            )));
        }
        if !(high - low).is_finite() {
            return Err(DistributionError::InvalidParameters(format!(
                "Uniform width overflows, got low={low}, high={high}"
            )));
        }
        let support = Interval::new(low, high)?;
        debug!(low, high, "constructed Uniform distribution");
        Ok(Self {
            support,
            seed: None,
            rng: RefCell::new(random::generator(None)),
        })
    }

    /// Fixes the seed and restarts the generator from it.
    pub fn with_seed(mut self, seed: u64) -> Self {
        debug!(distribution = self.name(), seed, "seeding generator");
        self.seed = Some(seed);
        *self.rng.get_mut() = random::create_rng(seed);
        self
    }

    pub fn low(&self) -> f64 {
        self.support.low()
    }

    pub fn high(&self) -> f64 {
        self.support.high()
    }

    /// The closed support `[low, high]`.
    pub fn support(&self) -> Interval {
        self.support
    }

    /// Standard deviation, (high−low)/√12.
    pub fn scale(&self) -> f64 {
        self.support.width() / 12.0_f64.sqrt()
    }
}

impl Default for Uniform {
    /// Uniform on `[0, 1]`.
    fn default() -> Self {
        Self {
            support: Interval::UNIT,
            seed: None,
            rng: RefCell::new(random::generator(None)),
        }
    }
}

impl Distribution for Uniform {
    fn name(&self) -> &'static str {
        "Uniform"
    }

    fn parameters(&self) -> Vec<(&'static str, f64)> {
        vec![("low", self.low()), ("high", self.high())]
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn sample(&self, shape: &[usize]) -> ArrayD<f64> {
        trace!(distribution = "Uniform", ?shape, "sampling");
        let (low, high) = (self.low(), self.high());
        let mut rng = self.rng.borrow_mut();
        ArrayD::from_shape_simple_fn(IxDyn(shape), || rng.random_range(low..=high))
    }

    fn reset(&mut self, seed: Option<u64>) {
        let seed = seed.or(self.seed);
        debug!(distribution = "Uniform", ?seed, "resetting generator");
        *self.rng.get_mut() = random::generator(seed);
    }

    fn density(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if self.support.contains(x) {
            1.0 / self.support.width()
        } else {
            0.0
        }
    }

    /// −ln(high−low) on the support, `NaN` off it.
    fn log_density(&self, x: f64) -> f64 {
        if self.support.contains(x) {
            -self.support.width().ln()
        } else {
            f64::NAN
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            f64::NAN
        } else if self.support.precedes(x) {
            0.0
        } else if self.support.follows(x) {
            1.0
        } else {
            (x - self.low()) / self.support.width()
        }
    }

    /// `low + p·(high−low)` for `p ∈ [0, 1]`, `NaN` otherwise.
    fn quantile(&self, p: f64) -> f64 {
        if Interval::UNIT.contains(p) {
            self.low() + p * self.support.width()
        } else {
            f64::NAN
        }
    }

    fn mean(&self) -> f64 {
        0.5 * (self.low() + self.high())
    }

    fn median(&self) -> f64 {
        self.mean()
    }

    fn mode(&self) -> Values {
        Values::Array(arr1(&[self.low(), self.high()]).into_dyn())
    }

    fn variance(&self) -> f64 {
        let range = self.support.width();
        range * range / 12.0
    }

    fn skewness(&self) -> f64 {
        0.0
    }

    fn kurtosis(&self) -> f64 {
        -6.0 / 5.0
    }

    fn entropy(&self) -> f64 {
        self.support.width().ln()
    }
}

// ============================================================================
// Tests
// ============================================================================
