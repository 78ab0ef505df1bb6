//! Special mathematical functions.
//!
//! Thin, domain-checked wrappers over the error function and its inverse
//! from `statrs`, plus the Gaussian constants shared by the normal family.

/// 1/√(2π) ≈ 0.3989422804014327
pub const FRAC_1_SQRT_2PI: f64 = 0.3989422804014326779399460599343818684758586311649;

/// ln(√(2π)) = 0.5·ln(2π) ≈ 0.9189385332046727
pub const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_7;

/// Error function.
///
/// ```text
/// erf(x) = (2/√π) ∫₀ˣ exp(-t²) dt
/// ```
///
/// Returns `NaN` for `NaN` input and `±1` at `±∞`.
///
/// # Examples
/// ```
/// use u_probability::special::erf;
/// assert!(erf(0.0).abs() < 1e-15);
/// assert!((erf(1.0) - 0.8427007929497149).abs() < 1e-12);
/// ```
pub fn erf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    statrs::function::erf::erf(x)
}

/// Inverse error function: returns `x` such that `erf(x) = y`.
///
/// # Returns
/// - `f64::NAN` if `y` is outside `[-1, 1]` or NaN.
/// - `f64::NEG_INFINITY` if `y == -1.0`.
/// - `f64::INFINITY` if `y == 1.0`.
///
/// # Examples
/// ```
/// use u_probability::special::{erf, erfinv};
/// let x = erfinv(0.5);
/// assert!((erf(x) - 0.5).abs() < 1e-12);
/// assert!(erfinv(1.5).is_nan());
/// ```
pub fn erfinv(y: f64) -> f64 {
    if y.is_nan() || !(-1.0..=1.0).contains(&y) {
        return f64::NAN;
    }
    if y == 1.0 {
        return f64::INFINITY;
    }
    if y == -1.0 {
        return f64::NEG_INFINITY;
    }
    statrs::function::erf::erf_inv(y)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        let two_pi = 2.0 * std::f64::consts::PI;
        assert!((FRAC_1_SQRT_2PI - 1.0 / two_pi.sqrt()).abs() < 1e-15);
        assert!((LN_SQRT_2PI - 0.5 * two_pi.ln()).abs() < 1e-15);
    }

    #[test]
    fn test_erf_known_values() {
        assert!(erf(0.0).abs() < 1e-15);
        assert!((erf(0.5) - 0.5204998778130465).abs() < 1e-12);
        assert!((erf(2.0) - 0.9953222650189527).abs() < 1e-12);
    }

    #[test]
    fn test_erf_extremes() {
        assert_eq!(erf(f64::INFINITY), 1.0);
        assert_eq!(erf(f64::NEG_INFINITY), -1.0);
        assert!(erf(f64::NAN).is_nan());
    }

    #[test]
    fn test_erfinv_boundaries() {
        assert_eq!(erfinv(1.0), f64::INFINITY);
        assert_eq!(erfinv(-1.0), f64::NEG_INFINITY);
        assert_eq!(erfinv(0.0), 0.0);
    }

    #[test]
    fn test_erfinv_out_of_domain() {
        assert!(erfinv(1.0 + 1e-12).is_nan());
        assert!(erfinv(-2.0).is_nan());
        assert!(erfinv(f64::NAN).is_nan());
    }
}
