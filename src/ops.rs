//! Operator dispatch between distributions and arrays.
//!
//! The supported operation set is closed: [`Operation`] enumerates it and
//! [`Operand`] records which side of the expression the distribution is on.
//! [`Distribution::apply`] and [`Distribution::ufunc`] route through
//! [`combine`]; the `std::ops` impls at the bottom of this module do the
//! same for `&Normal` / `&Uniform` against `ndarray` arrays and `f64`.
//!
//! Floor division and the comparison reinterpretation have no matching Rust
//! operator (comparison operators must return `bool`), so they are reached
//! through `apply`, `ufunc`, `less_than` and `greater_than`.

use std::fmt;

use ndarray::{arr0, ArrayBase, ArrayD, Data, Dimension, Zip};
use tracing::trace;

use crate::distribution::Distribution;
use crate::distributions::{Normal, Uniform};

/// Operations a distribution can take part in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    FloorDivide,
    /// `D < x`: cumulative probability.
    LessThan,
    /// `D > x`: survival probability.
    GreaterThan,
}

/// Position of the distribution in a binary expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    /// `D op x`
    Left,
    /// `x op D`
    Right,
}

impl Operation {
    /// Every supported operation.
    pub const ALL: [Operation; 7] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::FloorDivide,
        Operation::LessThan,
        Operation::GreaterThan,
    ];

    /// Maps an array-library ufunc name onto an operation.
    ///
    /// # Examples
    /// ```
    /// use u_probability::Operation;
    /// assert_eq!(Operation::from_ufunc("true_divide"), Some(Operation::Divide));
    /// assert_eq!(Operation::from_ufunc("power"), None);
    /// ```
    pub fn from_ufunc(name: &str) -> Option<Self> {
        match name {
            "add" => Some(Operation::Add),
            "subtract" => Some(Operation::Subtract),
            "multiply" => Some(Operation::Multiply),
            "divide" | "true_divide" => Some(Operation::Divide),
            "floor_divide" => Some(Operation::FloorDivide),
            "less" => Some(Operation::LessThan),
            "greater" => Some(Operation::GreaterThan),
            _ => None,
        }
    }

    /// Canonical ufunc name.
    pub fn ufunc_name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "true_divide",
            Operation::FloorDivide => "floor_divide",
            Operation::LessThan => "less",
            Operation::GreaterThan => "greater",
        }
    }

    pub fn is_comparison(&self) -> bool {
        matches!(self, Operation::LessThan | Operation::GreaterThan)
    }

    /// Elementwise kernel of an arithmetic operation; `None` for comparisons.
    fn arithmetic(&self) -> Option<fn(f64, f64) -> f64> {
        match self {
            Operation::Add => Some(|a, b| a + b),
            Operation::Subtract => Some(|a, b| a - b),
            Operation::Multiply => Some(|a, b| a * b),
            Operation::Divide => Some(|a, b| a / b),
            Operation::FloorDivide => Some(|a, b| (a / b).floor()),
            Operation::LessThan | Operation::GreaterThan => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ufunc_name())
    }
}

/// Evaluates `op` between `dist` and `x` on the given side.
///
/// Arithmetic draws one sample shaped like `x`. Comparisons evaluate the
/// cumulative or survival function and draw nothing.
pub(crate) fn combine<T>(dist: &T, op: Operation, operand: Operand, x: ArrayD<f64>) -> ArrayD<f64>
where
    T: Distribution + ?Sized,
{
    trace!(
        distribution = dist.name(),
        operation = %op,
        ?operand,
        shape = ?x.shape(),
        "dispatching operator"
    );
    match op.arithmetic() {
        Some(kernel) => {
            let mut sample = dist.sample(x.shape());
            Zip::from(&mut sample).and(&x).for_each(|s, &v| {
                *s = match operand {
                    Operand::Left => kernel(*s, v),
                    Operand::Right => kernel(v, *s),
                };
            });
            sample
        }
        None => {
            let cumulative = matches!(
                (op, operand),
                (Operation::LessThan, Operand::Left) | (Operation::GreaterThan, Operand::Right)
            );
            if cumulative {
                x.mapv_into(|v| dist.cdf(v))
            } else {
                x.mapv_into(|v| dist.sf(v))
            }
        }
    }
}

/// Scalar form of [`combine`].
fn combine_scalar<T>(dist: &T, op: Operation, operand: Operand, x: f64) -> f64
where
    T: Distribution + ?Sized,
{
    combine(dist, op, operand, arr0(x).into_dyn())
        .iter()
        .next()
        .copied()
        .unwrap_or(f64::NAN)
}

macro_rules! impl_sampling_op {
    ($dist:ty, $trait:ident, $method:ident, $op:expr) => {
        impl<S, D> std::ops::$trait<&ArrayBase<S, D>> for &$dist
        where
            S: Data<Elem = f64>,
            D: Dimension,
        {
            type Output = ArrayD<f64>;

            fn $method(self, rhs: &ArrayBase<S, D>) -> ArrayD<f64> {
                combine(self, $op, Operand::Left, rhs.to_owned().into_dyn())
            }
        }

        impl<S, D> std::ops::$trait<&$dist> for &ArrayBase<S, D>
        where
            S: Data<Elem = f64>,
            D: Dimension,
        {
            type Output = ArrayD<f64>;

            fn $method(self, rhs: &$dist) -> ArrayD<f64> {
                combine(rhs, $op, Operand::Right, self.to_owned().into_dyn())
            }
        }

        impl std::ops::$trait<f64> for &$dist {
            type Output = f64;

            fn $method(self, rhs: f64) -> f64 {
                combine_scalar(self, $op, Operand::Left, rhs)
            }
        }

        impl std::ops::$trait<&$dist> for f64 {
            type Output = f64;

            fn $method(self, rhs: &$dist) -> f64 {
                combine_scalar(rhs, $op, Operand::Right, self)
            }
        }
    };
}

macro_rules! impl_sampling_ops {
    ($($dist:ty),+) => {
        $(
            impl_sampling_op!($dist, Add, add, Operation::Add);
            impl_sampling_op!($dist, Sub, sub, Operation::Subtract);
            impl_sampling_op!($dist, Mul, mul, Operation::Multiply);
            impl_sampling_op!($dist, Div, div, Operation::Divide);
        )+
    };
}

impl_sampling_ops!(Normal, Uniform);
