//! Sign-aware logarithm and exponential primitives.
//!
//! Ordinary logarithms are undefined at zero and for negative inputs, which
//! rules them out for control ranges like `-100..100` dB-style sweeps. The
//! transforms here extend the log curve over the whole real line:
//!
//! - [`signed_log`]: `sign(x) * log_base(|x| + 1)`
//! - [`signed_exp`]: `sign(y) * (base^|y| - 1)`
//!
//! The `+ 1` offset pins `signed_log(0) == 0` and the sign factor mirrors the
//! curve through the origin, so the pair inverts exactly for every finite
//! input and any base > 1. Only logarithmic ranges use these; everything else
//! in the crate is plain affine arithmetic.

use core::f64::consts::E;

/// `sign` with the convention `sign(0) == 0`, matching the mathematical
/// signum rather than IEEE `copysign`.
#[inline]
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Sign-aware logarithm: `sign(value) * log_base(|value| + 1)`.
///
/// Defined for every finite input, including zero and negatives. Bases 10, 2,
/// and e dispatch to the direct intrinsic instead of a change-of-base
/// quotient, which keeps round trips through [`signed_exp`] tight.
///
/// # Example
///
/// ```rust
/// use knurl_core::signed_log;
///
/// assert_eq!(signed_log(0.0, 10.0), 0.0);
/// assert_eq!(signed_log(9.0, 10.0), 1.0);
/// assert_eq!(signed_log(-9.0, 10.0), -1.0);
/// ```
#[inline]
pub fn signed_log(value: f64, base: f64) -> f64 {
    let x = libm::fabs(value) + 1.0;
    let sign = sign(value);
    if base == 10.0 {
        sign * libm::log10(x)
    } else if base == 2.0 {
        sign * libm::log2(x)
    } else if base == E {
        sign * libm::log(x)
    } else {
        sign * (libm::log(x) / libm::log(base))
    }
}

/// Sign-aware exponential: `sign(value) * (base^|value| - 1)`.
///
/// Exact inverse of [`signed_log`] for the same base.
///
/// # Example
///
/// ```rust
/// use knurl_core::signed_exp;
///
/// assert_eq!(signed_exp(1.0, 10.0), 9.0);
/// assert_eq!(signed_exp(-1.0, 10.0), -9.0);
/// assert_eq!(signed_exp(0.0, 10.0), 0.0);
/// ```
#[inline]
pub fn signed_exp(value: f64, base: f64) -> f64 {
    let x = libm::fabs(value);
    let sign = sign(value);
    if base == 10.0 {
        sign * (libm::pow(10.0, x) - 1.0)
    } else if base == 2.0 {
        sign * (libm::pow(2.0, x) - 1.0)
    } else if base == E {
        sign * (libm::exp(x) - 1.0)
    } else {
        sign * (libm::pow(base, x) - 1.0)
    }
}
