//! Fisher F-distribution CDF and survival function.
//!
//! Evaluates P(F ≤ x) for an F-ratio with `m` numerator and `n` denominator
//! degrees of freedom through a finite recurrence specialized by the parity
//! of `m` and `n`. Odd/odd parity has an arctangent closed form, mixed
//! parities a square-root seed, even/even a rational seed; the remaining
//! mass is accumulated by short finite series of at most max(m, n)/2 terms.
//! No incomplete-beta continued fraction is involved.
//!
//! # Algorithm
//!
//! ACM Algorithm 322, with the published certification and remark applied.
//!
//! References:
//! - Dorrer (1968), "Algorithm 322: F-Distribution [S14]", *CACM* 11(2),
//!   pp. 116–117.
//! - Field (1969), "Certification of Algorithm 322 [S14]", *CACM* 12(1),
//!   p. 39.
//! - Tolman (1971), "Remark on Algorithm 322 [S14]", *CACM* 14(2), p. 117.

use std::f64::consts::FRAC_1_PI;
use std::fmt;

/// Error type for invalid degrees-of-freedom arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum FisherError {
    /// `m` or `n` does not round to itself exactly.
    InvalidArgument(String),
}

impl fmt::Display for FisherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FisherError::InvalidArgument(msg) => {
                write!(f, "invalid argument: {msg}")
            }
        }
    }
}

impl std::error::Error for FisherError {}

// ============================================================================
// Input Validation
// ============================================================================

/// Validates that both DOF values are exact integers and converts them.
///
/// Degenerate DOF (zero or negative) pass through deliberately: they have no
/// statistical meaning but the recurrence still produces a numeric (possibly
/// NaN) result, matching the permissive behavior of the published algorithm.
fn integer_dof(m: f64, n: f64) -> Result<(i64, i64), FisherError> {
    if !m.is_finite() || !n.is_finite() || m.round() != m || n.round() != n {
        return Err(FisherError::InvalidArgument(format!(
            "m, n need to be integers (got m={m}, n={n})"
        )));
    }
    Ok((m as i64, n as i64))
}

// ============================================================================
// Parity Dispatch
// ============================================================================

/// Parity of the two degrees-of-freedom parameters.
///
/// Algorithm 322 seeds the recurrence differently for each of the four
/// odd/even combinations of `m` and `n`; the seed carries the closed-form
/// part of the probability mass and the series below add the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DofParity {
    OddOdd,
    OddEven,
    EvenOdd,
    EvenEven,
}

impl DofParity {
    fn of(m: i64, n: i64) -> Self {
        match (m.rem_euclid(2) == 1, n.rem_euclid(2) == 1) {
            (true, true) => Self::OddOdd,
            (true, false) => Self::OddEven,
            (false, true) => Self::EvenOdd,
            (false, false) => Self::EvenEven,
        }
    }

    fn m_odd(self) -> bool {
        matches!(self, Self::OddOdd | Self::OddEven)
    }

    fn n_odd(self) -> bool {
        matches!(self, Self::OddOdd | Self::EvenOdd)
    }
}

// ============================================================================
// Core Recurrence
// ============================================================================

/// CDF for a single statistic with already-validated DOF.
///
/// Degenerate ranges are filtered before the recurrence runs: an F-ratio is
/// non-negative by definition, so `x ≤ 0` carries zero probability mass and
/// `x = +∞` all of it.
fn cdf_element(x: f64, m: i64, n: i64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x <= 0.0 {
        return 0.0;
    }
    if x == f64::INFINITY {
        return 1.0;
    }
    cdf_recurrence(x, m, n)
}

/// Algorithm 322 recurrence for `0 < x < ∞`.
fn cdf_recurrence(x: f64, m: i64, n: i64) -> f64 {
    let parity = DofParity::of(m, n);
    // Series start offsets: 1 for an odd DOF, 2 for an even one.
    let a = if parity.m_odd() { 1 } else { 2 };
    let b = if parity.n_odd() { 1 } else { 2 };

    let w = x * m as f64 / n as f64;
    let z = 1.0 / (1.0 + w);

    // Seed probability `p` and series term `d` for the parity branch.
    let (mut p, mut d) = match parity {
        DofParity::OddOdd => {
            let r = w.sqrt();
            (2.0 * FRAC_1_PI * r.atan(), FRAC_1_PI * z / r)
        }
        DofParity::OddEven => {
            let r = (w * z).sqrt();
            (r, 0.5 * r * z / w)
        }
        DofParity::EvenOdd => {
            let r = z.sqrt();
            (1.0 - r, 0.5 * z * r)
        }
        DofParity::EvenEven => (w * z, z * z),
    };

    // First accumulation, over the denominator DOF.
    let y = 2.0 * w / z;
    if parity.m_odd() {
        for j in ((b + 2)..=n).step_by(2) {
            d *= (1.0 + 1.0 / (j - 2) as f64) * z;
            p += d * y / (j - 1) as f64;
        }
    } else {
        // Even m: the denominator series telescopes into a geometric sum.
        // div_euclid keeps the exponent a floor for out-of-range DOF.
        let zk = z.powi((n - 1).div_euclid(2) as i32);
        d *= zk * n as f64 / b as f64;
        p = p * zk + w * z * (zk - 1.0) / (z - 1.0);
    }

    // Second accumulation, over the numerator DOF.
    let y = w * z;
    let z = 2.0 / z;
    let b = n - 2;
    for i in ((a + 2)..=m).step_by(2) {
        let j = i + b;
        d *= y * j as f64 / (i - 2) as f64;
        p -= z * d / j as f64;
    }
    p
}

// ============================================================================
// Public API
// ============================================================================

/// CDF of the F-distribution: P(F ≤ x | m, n).
///
/// `m` is the numerator and `n` the denominator degrees of freedom. Both
/// must be exact integer values (`3.0` is accepted, `3.2` is not); they are
/// supplied as `f64` so that values arriving from numeric pipelines need no
/// pre-conversion.
///
/// # Returns
/// - `0.0` if `x ≤ 0` (an F-ratio is non-negative by definition).
/// - `1.0` if `x == +∞`.
/// - `f64::NAN` if `x` is NaN, propagated through the recurrence untouched.
///
/// # Errors
/// Returns [`FisherError::InvalidArgument`] if `m` or `n` is not an exact
/// integer value. Zero or negative integer DOF are accepted and may produce
/// NaN results.
///
/// # Examples
/// ```
/// use fisherf::fisher::f_cdf;
/// // F(1; 1, 1) = (2/π)·atan(1) = 1/2 exactly
/// assert!((f_cdf(1.0, 1.0, 1.0).unwrap() - 0.5).abs() < 1e-15);
/// assert_eq!(f_cdf(-3.0, 5.0, 10.0).unwrap(), 0.0);
/// assert!(f_cdf(1.0, 1.5, 2.0).is_err());
/// ```
pub fn f_cdf(x: f64, m: f64, n: f64) -> Result<f64, FisherError> {
    let (m, n) = integer_dof(m, n)?;
    Ok(cdf_element(x, m, n))
}

/// Survival function of the F-distribution: P(F > x | m, n) = 1 − CDF.
///
/// This is the p-value of an observed F-ratio of `x` in an F-test with
/// `m` numerator and `n` denominator degrees of freedom.
///
/// # Errors
/// Returns [`FisherError::InvalidArgument`] under the same conditions as
/// [`f_cdf`].
///
/// # Examples
/// ```
/// use fisherf::fisher::f_sf;
/// assert_eq!(f_sf(0.0, 1.0, 1.0).unwrap(), 1.0);
/// assert_eq!(f_sf(f64::INFINITY, 5.0, 10.0).unwrap(), 0.0);
/// ```
pub fn f_sf(x: f64, m: f64, n: f64) -> Result<f64, FisherError> {
    Ok(1.0 - f_cdf(x, m, n)?)
}

/// CDF of the F-distribution over a slice of statistics.
///
/// Validates `m`, `n` once, then maps the scalar kernel over the slice.
/// The output has the same length and order as the input.
///
/// # Examples
/// ```
/// use fisherf::fisher::f_cdf_slice;
/// let p = f_cdf_slice(&[-1.0, 0.0], 1.0, 1.0).unwrap();
/// assert_eq!(p, vec![0.0, 0.0]);
/// ```
pub fn f_cdf_slice(xs: &[f64], m: f64, n: f64) -> Result<Vec<f64>, FisherError> {
    let (m, n) = integer_dof(m, n)?;
    Ok(xs.iter().map(|&x| cdf_element(x, m, n)).collect())
}

/// Survival function of the F-distribution over a slice of statistics.
///
/// # Examples
/// ```
/// use fisherf::fisher::f_sf_slice;
/// let p = f_sf_slice(&[-1.0, 0.0], 1.0, 1.0).unwrap();
/// assert_eq!(p, vec![1.0, 1.0]);
/// ```
pub fn f_sf_slice(xs: &[f64], m: f64, n: f64) -> Result<Vec<f64>, FisherError> {
    let (m, n) = integer_dof(m, n)?;
    Ok(xs.iter().map(|&x| 1.0 - cdf_element(x, m, n)).collect())
}

/// Two-sided p-value of a Student-t statistic via the F-distribution.
///
/// A t-statistic with `n` degrees of freedom squares to an F-ratio with
/// (1, n) degrees of freedom, so P(|T| > t) = P(F > t²). This covers the
/// two-population special case of the F-test.
///
/// # Examples
/// ```
/// use fisherf::fisher::t_sf_two_sided;
/// assert_eq!(t_sf_two_sided(0.0, 10.0).unwrap(), 1.0);
/// // t = 2.228 is the 97.5% point of t(10): two-sided p ≈ 0.05
/// assert!((t_sf_two_sided(2.228, 10.0).unwrap() - 0.05).abs() < 1e-3);
/// ```
pub fn t_sf_two_sided(t: f64, n: f64) -> Result<f64, FisherError> {
    f_sf(t * t, 1.0, n)
}
