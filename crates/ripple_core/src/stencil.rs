//! Second-order finite-difference operators on uniformly sampled fields.
//!
//! Interior points use central differences; the two boundary points use
//! one-sided stencils of the same order so the output has no undefined entries.

use crate::error::{Result, RippleError};
use crate::grid::MIN_POINTS;
use crate::traits::Scalar;

fn check_len<T>(f: &[T]) -> Result<()> {
    if f.len() < MIN_POINTS {
        return Err(RippleError::Configuration(format!(
            "Finite-difference stencils need at least {MIN_POINTS} samples, got {}.",
            f.len()
        )));
    }
    Ok(())
}

/// df/dx with spacing `h`.
pub fn first_derivative<T: Scalar>(f: &[T], h: T) -> Result<Vec<T>> {
    check_len(f)?;
    let n = f.len();
    let two = T::one() + T::one();
    let three = two + T::one();
    let four = two + two;
    let denom = two * h;

    let mut out = vec![T::zero(); n];
    out[0] = (-three * f[0] + four * f[1] - f[2]) / denom;
    for i in 1..n - 1 {
        out[i] = (f[i + 1] - f[i - 1]) / denom;
    }
    out[n - 1] = (three * f[n - 1] - four * f[n - 2] + f[n - 3]) / denom;
    Ok(out)
}

/// d²f/dx² with spacing `h`.
///
/// Three-point central formula inside. The endpoints use the four-point
/// one-sided stencil `(2, -5, 4, -1) / h²`, which is exact on quadratics.
pub fn second_derivative<T: Scalar>(f: &[T], h: T) -> Result<Vec<T>> {
    check_len(f)?;
    let n = f.len();
    let two = T::one() + T::one();
    let four = two + two;
    let five = four + T::one();
    let h2 = h * h;

    let mut out = vec![T::zero(); n];
    out[0] = (two * f[0] - five * f[1] + four * f[2] - f[3]) / h2;
    for i in 1..n - 1 {
        out[i] = (f[i - 1] - two * f[i] + f[i + 1]) / h2;
    }
    out[n - 1] = (two * f[n - 1] - five * f[n - 2] + four * f[n - 3] - f[n - 4]) / h2;
    Ok(out)
}
