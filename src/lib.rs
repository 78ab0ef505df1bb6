//! # u-probability
//!
//! Parametric probability distributions for the U-Engine ecosystem.
//!
//! Each distribution offers seeded sampling, elementwise density,
//! cumulative, percentile and survival functions over scalars or
//! `ndarray` arrays, and analytical summary statistics.
//!
//! ## Modules
//!
//! - [`distribution`] — The shared [`Distribution`] trait and its operator semantics
//! - [`distributions`] — [`Normal`] and [`Uniform`]
//! - [`ops`] — Enumerated operations and the `std::ops` overloads
//! - [`interval`] — Ranges with configurable endpoint inclusivity
//! - [`array`] — Input conversion and the [`check_array`] shape collapse
//! - [`special`] — Error function and its inverse
//! - [`random`] — Seeded generator construction
//! - [`config`] — JSON-configurable distribution construction
//!
//! ## Operators
//!
//! A distribution in an arithmetic expression stands for a fresh sample
//! shaped like the other operand:
//!
//! ```
//! use ndarray::arr1;
//! use u_probability::{Distribution, Normal};
//!
//! let noise = Normal::new(0.0, 0.1).unwrap().with_seed(42);
//! let signal = arr1(&[1.0, 2.0, 3.0]);
//! let noisy = &signal + &noise;
//! assert_eq!(noisy.shape(), &[3]);
//!
//! // Comparisons are probabilities, not orderings: D < x is P(D ≤ x).
//! assert_eq!(noise.less_than(0.0), 0.5);
//! ```
//!
//! ## Design Philosophy
//!
//! - **Simplest correct shape**: single-element results come back as scalars
//! - **Soft domain errors**: percentiles outside `[0, 1]` are `NaN`, not panics
//! - **Reproducibility**: every instance owns a seedable generator
//! - **Property-based testing**: Mathematical invariants verified via proptest

pub mod array;
pub mod config;
pub mod distribution;
pub mod distributions;
pub mod error;
pub mod interval;
pub mod ops;
pub mod random;
pub mod special;

pub use array::{check_array, IntoArray, Values};
pub use config::DistributionConfig;
pub use distribution::Distribution;
pub use distributions::{Normal, Uniform};
pub use error::{DistributionError, Result};
pub use interval::Interval;
pub use ops::{Operand, Operation};
