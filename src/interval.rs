//! Bounded ranges with configurable endpoint inclusivity.
//!
//! An [`Interval`] answers three questions about a scalar: is it inside, does
//! it lie strictly before the interval, or strictly after it. The continuous
//! families use it to express their support.

use crate::error::{DistributionError, Result};

/// A range `low..high` whose endpoints are independently inclusive or
/// exclusive.
///
/// Invariant: `low < high`. Equal or inverted bounds are rejected at
/// construction.
///
/// # Examples
/// ```
/// use u_probability::Interval;
/// let closed = Interval::new(0.0, 10.0).unwrap();
/// assert!(closed.contains(0.0));
///
/// let half_open = Interval::with_inclusivity(0.0, 10.0, false, true).unwrap();
/// assert!(!half_open.contains(0.0));
/// assert!(half_open.precedes(0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    low: f64,
    high: f64,
    left_inclusive: bool,
    right_inclusive: bool,
}

impl Interval {
    /// The closed unit interval `[0, 1]`, the domain of a probability.
    pub const UNIT: Interval = Interval {
        low: 0.0,
        high: 1.0,
        left_inclusive: true,
        right_inclusive: true,
    };

    /// Creates the closed interval `[low, high]`.
    ///
    /// # Errors
    /// Returns [`DistributionError::DegenerateInterval`] if `low >= high`
    /// or either bound is NaN.
    pub fn new(low: f64, high: f64) -> Result<Self> {
        Self::with_inclusivity(low, high, true, true)
    }

    /// Creates an interval with explicit endpoint inclusivity.
    ///
    /// # Errors
    /// Returns [`DistributionError::DegenerateInterval`] if `low >= high`
    /// or either bound is NaN.
    pub fn with_inclusivity(
        low: f64,
        high: f64,
        left_inclusive: bool,
        right_inclusive: bool,
    ) -> Result<Self> {
        // `!(low < high)` also rejects NaN bounds.
        if !(low < high) {
            return Err(DistributionError::DegenerateInterval { low, high });
        }
        Ok(Self {
            low,
            high,
            left_inclusive,
            right_inclusive,
        })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn left_inclusive(&self) -> bool {
        self.left_inclusive
    }

    pub fn right_inclusive(&self) -> bool {
        self.right_inclusive
    }

    /// `high - low`, always positive.
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Membership test honouring both inclusivity flags. NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        let above_low = if self.left_inclusive {
            value >= self.low
        } else {
            value > self.low
        };
        let below_high = if self.right_inclusive {
            value <= self.high
        } else {
            value < self.high
        };
        above_low && below_high
    }

    /// True if `value` lies strictly before the interval.
    ///
    /// With an exclusive left endpoint, `low` itself counts as before.
    pub fn precedes(&self, value: f64) -> bool {
        if self.left_inclusive {
            value < self.low
        } else {
            value <= self.low
        }
    }

    /// True if `value` lies strictly after the interval.
    ///
    /// With an exclusive right endpoint, `high` itself counts as after.
    pub fn follows(&self, value: f64) -> bool {
        if self.right_inclusive {
            value > self.high
        } else {
            value >= self.high
        }
    }

    /// `value` is before or inside the interval.
    pub fn at_or_before(&self, value: f64) -> bool {
        self.precedes(value) || self.contains(value)
    }

    /// `value` is inside or after the interval.
    pub fn at_or_after(&self, value: f64) -> bool {
        self.follows(value) || self.contains(value)
    }
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
        fn exactly_one_region(
            low in -100.0_f64..0.0,
            width in 0.1_f64..100.0,
            left in any::<bool>(),
            right in any::<bool>(),
            x in -250.0_f64..250.0,
        ) {
            let i = Interval::with_inclusivity(low, low + width, left, right).unwrap();
            let regions = [i.precedes(x), i.contains(x), i.follows(x)];
            prop_assert_eq!(regions.iter().filter(|&&r| r).count(), 1);
        }
    }
}
