//! Array inputs and the simplest-shape result type.
//!
//! Every elementwise evaluation accepts anything implementing [`IntoArray`]
//! (scalars, vectors, slices, fixed arrays, `ndarray` arrays of any rank) and
//! returns [`Values`]: a bare scalar when the result has exactly one element,
//! the array otherwise. [`check_array`] performs that collapse.

use ndarray::{arr0, Array, Array1, ArrayBase, ArrayD, Data, Dimension};

/// Result of an elementwise evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum Values {
    Scalar(f64),
    Array(ArrayD<f64>),
}

impl Values {
    /// The scalar value, if this result collapsed to one.
    pub fn scalar(&self) -> Option<f64> {
        match self {
            Values::Scalar(v) => Some(*v),
            Values::Array(_) => None,
        }
    }

    /// The array view of this result; a scalar becomes a 0-d array.
    pub fn into_array(self) -> ArrayD<f64> {
        match self {
            Values::Scalar(v) => arr0(v).into_dyn(),
            Values::Array(a) => a,
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Values::Scalar(_))
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        match self {
            Values::Scalar(_) => 1,
            Values::Array(a) => a.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<f64> for Values {
    fn from(v: f64) -> Self {
        Values::Scalar(v)
    }
}

impl From<ArrayD<f64>> for Values {
    fn from(a: ArrayD<f64>) -> Self {
        check_array(a)
    }
}

impl PartialEq<f64> for Values {
    fn eq(&self, other: &f64) -> bool {
        self.scalar() == Some(*other)
    }
}

/// Collapses a single-element array to a scalar; any other array (including
/// an empty one) passes through unchanged.
///
/// # Examples
/// ```
/// use ndarray::{arr1, ArrayD, IxDyn};
/// use u_probability::{check_array, Values};
///
/// let one = ArrayD::from_elem(IxDyn(&[1, 1]), 3.0);
/// assert_eq!(check_array(one), Values::Scalar(3.0));
///
/// let many = arr1(&[1.0, 2.0]).into_dyn();
/// assert!(!check_array(many).is_scalar());
/// ```
pub fn check_array(values: ArrayD<f64>) -> Values {
    if values.len() == 1 {
        if let Some(&v) = values.iter().next() {
            return Values::Scalar(v);
        }
    }
    Values::Array(values)
}

/// Conversion of caller inputs into a dynamic-rank `f64` array.
pub trait IntoArray {
    fn into_array(self) -> ArrayD<f64>;
}

impl IntoArray for f64 {
    fn into_array(self) -> ArrayD<f64> {
        arr0(self).into_dyn()
    }
}

impl IntoArray for Vec<f64> {
    fn into_array(self) -> ArrayD<f64> {
        Array1::from(self).into_dyn()
    }
}

impl IntoArray for &[f64] {
    fn into_array(self) -> ArrayD<f64> {
        Array1::from(self.to_vec()).into_dyn()
    }
}

impl<const N: usize> IntoArray for [f64; N] {
    fn into_array(self) -> ArrayD<f64> {
        Array1::from(self.to_vec()).into_dyn()
    }
}

impl<D: Dimension> IntoArray for Array<f64, D> {
    fn into_array(self) -> ArrayD<f64> {
        self.into_dyn()
    }
}

impl<S, D> IntoArray for &ArrayBase<S, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    fn into_array(self) -> ArrayD<f64> {
        self.to_owned().into_dyn()
    }
}

impl IntoArray for Values {
    fn into_array(self) -> ArrayD<f64> {
        Values::into_array(self)
    }
}

/// Maps a scalar kernel over an input and normalises the result shape.
pub(crate) fn elementwise<X, F>(x: X, f: F) -> Values
where
    X: IntoArray,
    F: Fn(f64) -> f64,
{
    check_array(x.into_array().mapv_into(f))
}
