//! The shared distribution protocol.
//!
//! A family implements the scalar kernels (`density`, `log_density`, `cdf`,
//! `quantile`), its moments, and sampling. Everything array-shaped is
//! provided on top: elementwise evaluation over any [`IntoArray`] input,
//! shape normalisation through [`check_array`](crate::check_array), and the
//! operator semantics described below.
//!
//! # Operator semantics
//!
//! In an arithmetic expression a distribution stands for "a fresh sample
//! shaped like the other operand". `D - X` draws `s = D.sample(X.shape())`
//! and returns `s - X`; `X - D` returns `X - s`. The same holds for addition,
//! multiplication, true division and floor division.
//!
//! Comparisons are **not** numeric ordering. `D < x` evaluates
//! `D.cumulative(x)` (the probability that a draw falls at or below `x`) and
//! `D > x` evaluates `D.survival(x)`. The reflected forms follow: `x < D` is
//! `D > x`, `x > D` is `D < x`.
//!
//! # Thread safety
//!
//! Implementors keep their generator behind a `RefCell`, so a distribution
//! is `Send` but not `Sync`. Use one instance per thread, or a `Mutex`
//! around a shared one.

use ndarray::ArrayD;
use tracing::warn;

use crate::array::{elementwise, IntoArray, Values};
use crate::error::{DistributionError, Result};
use crate::ops::{self, Operand, Operation};

/// A univariate parametric probability law.
pub trait Distribution {
    /// Family name, e.g. `"Normal"`.
    fn name(&self) -> &'static str;

    /// Public parameters in declaration order. Diagnostic only; the seed is
    /// not a parameter.
    fn parameters(&self) -> Vec<(&'static str, f64)>;

    /// Seed captured at construction, reused by `reset(None)`.
    fn seed(&self) -> Option<u64>;

    /// Draws an array of the given shape from the internal generator.
    ///
    /// An empty shape yields a 0-d array holding one draw.
    fn sample(&self, shape: &[usize]) -> ArrayD<f64>;

    /// Reinitialises the generator from `seed`, or from the construction
    /// seed when `None`.
    fn reset(&mut self, seed: Option<u64>);

    /// Probability density at `x`.
    fn density(&self, x: f64) -> f64;

    /// Log density at `x`, computed directly rather than as `density(x).ln()`.
    fn log_density(&self, x: f64) -> f64;

    /// `P(X ≤ x)`.
    fn cdf(&self, x: f64) -> f64;

    /// Inverse of [`cdf`](Self::cdf). `NaN` for `p` outside `[0, 1]`.
    fn quantile(&self, p: f64) -> f64;

    /// `P(X > x) = 1 − cdf(x)`.
    fn sf(&self, x: f64) -> f64 {
        1.0 - self.cdf(x)
    }

    fn mean(&self) -> f64;

    fn median(&self) -> f64;

    /// The mode; a family without a unique mode reports every candidate as
    /// an array.
    fn mode(&self) -> Values;

    fn variance(&self) -> f64;

    fn skewness(&self) -> f64;

    /// Excess kurtosis (0 for the normal family).
    fn kurtosis(&self) -> f64;

    /// Differential entropy in nats.
    fn entropy(&self) -> f64;

    /// `exp(entropy)`.
    fn perplexity(&self) -> f64 {
        self.entropy().exp()
    }

    fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// `Name(p1=v1, p2=v2)` built from [`parameters`](Self::parameters).
    fn describe(&self) -> String {
        let params: Vec<String> = self
            .parameters()
            .iter()
            .map(|(key, val)| format!("{key}={val}"))
            .collect();
        format!("{}({})", self.name(), params.join(", "))
    }

    /// Density evaluated elementwise.
    fn probability<X: IntoArray>(&self, x: X) -> Values
    where
        Self: Sized,
    {
        elementwise(x, |v| self.density(v))
    }

    /// Log density evaluated elementwise.
    fn log_probability<X: IntoArray>(&self, x: X) -> Values
    where
        Self: Sized,
    {
        elementwise(x, |v| self.log_density(v))
    }

    /// `P(X ≤ x)` evaluated elementwise.
    fn cumulative<X: IntoArray>(&self, x: X) -> Values
    where
        Self: Sized,
    {
        elementwise(x, |v| self.cdf(v))
    }

    /// Quantile function evaluated elementwise; entries outside `[0, 1]`
    /// become `NaN`.
    fn percentile<X: IntoArray>(&self, p: X) -> Values
    where
        Self: Sized,
    {
        elementwise(p, |v| self.quantile(v))
    }

    /// `1 − cumulative(x)` evaluated elementwise.
    fn survival<X: IntoArray>(&self, x: X) -> Values
    where
        Self: Sized,
    {
        elementwise(x, |v| self.sf(v))
    }

    /// Applies `op` between this distribution and `x`.
    ///
    /// `operand` says which side the distribution sits on. See the module
    /// docs for the arithmetic and comparison semantics.
    fn apply<X: IntoArray>(&self, op: Operation, operand: Operand, x: X) -> Values
    where
        Self: Sized,
    {
        ops::combine(self, op, operand, x.into_array()).into()
    }

    /// Array-library dispatch: `x <ufunc> self`, with the distribution as
    /// the right operand.
    ///
    /// # Errors
    /// [`DistributionError::UnsupportedOperation`] if `name` is not one of
    /// the recognised ufuncs.
    fn ufunc<X: IntoArray>(&self, name: &str, x: X) -> Result<Values>
    where
        Self: Sized,
    {
        let Some(op) = Operation::from_ufunc(name) else {
            warn!(operation = name, distribution = self.name(), "unsupported ufunc");
            return Err(DistributionError::UnsupportedOperation {
                operation: name.to_string(),
                distribution: self.name(),
            });
        };
        Ok(self.apply(op, Operand::Right, x))
    }

    /// `self < x`, i.e. [`cumulative`](Self::cumulative).
    fn less_than<X: IntoArray>(&self, x: X) -> Values
    where
        Self: Sized,
    {
        self.apply(Operation::LessThan, Operand::Left, x)
    }

    /// `self > x`, i.e. [`survival`](Self::survival).
    fn greater_than<X: IntoArray>(&self, x: X) -> Values
    where
        Self: Sized,
    {
        self.apply(Operation::GreaterThan, Operand::Left, x)
    }
}

impl<D: Distribution + ?Sized> Distribution for Box<D> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn parameters(&self) -> Vec<(&'static str, f64)> {
        (**self).parameters()
    }

    fn seed(&self) -> Option<u64> {
        (**self).seed()
    }

    fn sample(&self, shape: &[usize]) -> ArrayD<f64> {
        (**self).sample(shape)
    }

    fn reset(&mut self, seed: Option<u64>) {
        (**self).reset(seed)
    }

    fn density(&self, x: f64) -> f64 {
        (**self).density(x)
    }

    fn log_density(&self, x: f64) -> f64 {
        (**self).log_density(x)
    }

    fn cdf(&self, x: f64) -> f64 {
        (**self).cdf(x)
    }

    fn quantile(&self, p: f64) -> f64 {
        (**self).quantile(p)
    }

    fn sf(&self, x: f64) -> f64 {
        (**self).sf(x)
    }

    fn mean(&self) -> f64 {
        (**self).mean()
    }

    fn median(&self) -> f64 {
        (**self).median()
    }

    fn mode(&self) -> Values {
        (**self).mode()
    }

    fn variance(&self) -> f64 {
        (**self).variance()
    }

    fn skewness(&self) -> f64 {
        (**self).skewness()
    }

    fn kurtosis(&self) -> f64 {
        (**self).kurtosis()
    }

    fn entropy(&self) -> f64 {
        (**self).entropy()
    }
}
